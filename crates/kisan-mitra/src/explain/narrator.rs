use std::fmt::Debug;

use async_trait::async_trait;

/// Single generative call: instruction, content and sampling bounds.
#[derive(Debug, Clone, PartialEq)]
pub struct NarrationRequest {
    pub system: String,
    pub user: String,
    pub max_tokens: u32,
    pub temperature: f32,
}

/// Failure of the generative text capability.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NarratorError {
    #[error("narrator credential is missing or still a placeholder")]
    MissingCredential,
    #[error("narrator client could not be constructed: {0}")]
    Client(String),
    #[error("narrator upstream call failed: {0}")]
    Upstream(String),
    #[error("narrator returned an empty response")]
    EmptyResponse,
}

/// Port for the external generative capability. Implementations never decide eligibility; they
/// only turn an already-final context into prose.
#[async_trait]
pub trait Narrator: Debug + Send + Sync {
    async fn summarize(&self, request: &NarrationRequest) -> Result<String, NarratorError>;
}

/// Stand-in used when the real narrator could not be built; every call reports the original
/// construction failure.
#[derive(Debug, Clone)]
pub struct UnavailableNarrator {
    error: NarratorError,
}

impl UnavailableNarrator {
    pub fn new(error: NarratorError) -> Self {
        Self { error }
    }
}

#[async_trait]
impl Narrator for UnavailableNarrator {
    async fn summarize(&self, _request: &NarrationRequest) -> Result<String, NarratorError> {
        Err(self.error.clone())
    }
}
