use std::sync::Arc;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use super::context::build_context;
use super::locale::Locale;
use super::narrator::{NarrationRequest, Narrator, NarratorError};
use super::prompt::{fallback_text, system_instruction, user_message, FallbackReason};
use crate::config::NarratorConfig;
use crate::eligibility::DecisionResult;

const PROBE_PROMPT: &str = "Say 'API key is working' in one sentence.";
const PROBE_MAX_TOKENS: u32 = 50;

/// Sampling and deadline bounds applied to every narration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NarrationSettings {
    pub max_tokens: u32,
    pub temperature: f32,
    pub timeout: Duration,
}

impl Default for NarrationSettings {
    fn default() -> Self {
        Self {
            max_tokens: 300,
            temperature: 0.3,
            timeout: Duration::from_secs(15),
        }
    }
}

impl From<&NarratorConfig> for NarrationSettings {
    fn from(config: &NarratorConfig) -> Self {
        Self {
            max_tokens: config.max_tokens,
            temperature: config.temperature,
            timeout: config.timeout,
        }
    }
}

/// How a narrative was produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", content = "reason", rename_all = "snake_case")]
pub enum NarrationOutcome {
    Generated,
    Fallback(FallbackReason),
}

/// Narrative text plus the path that produced it. `text` is never empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Narrative {
    pub text: String,
    pub locale: Locale,
    pub outcome: NarrationOutcome,
}

impl Narrative {
    fn fallback(locale: Locale, reason: FallbackReason) -> Self {
        Self {
            text: fallback_text(locale, reason).to_string(),
            locale,
            outcome: NarrationOutcome::Fallback(reason),
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self.outcome, NarrationOutcome::Fallback(_))
    }
}

/// Result of a connectivity probe against the narrator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NarratorStatus {
    pub available: bool,
    pub detail: String,
}

/// Turns a final decision into a bounded narrative without touching the decision itself.
#[derive(Debug, Clone)]
pub struct ExplanationOrchestrator {
    narrator: Arc<dyn Narrator>,
    settings: NarrationSettings,
}

impl ExplanationOrchestrator {
    pub fn new(narrator: Arc<dyn Narrator>, settings: NarrationSettings) -> Self {
        Self { narrator, settings }
    }

    /// Produce a narrative for `decision` in `locale`. Every failure, including an elapsed
    /// deadline, degrades to a static locale sentence.
    pub async fn explain(&self, decision: &DecisionResult, locale: Locale) -> Narrative {
        let context = build_context(decision);
        let request = NarrationRequest {
            system: system_instruction(locale),
            user: user_message(locale, &context),
            max_tokens: self.settings.max_tokens,
            temperature: self.settings.temperature,
        };

        debug!(%locale, context_chars = context.len(), "requesting narrative");
        match self.call(&request).await {
            Ok(text) => {
                info!(%locale, chars = text.len(), "narrative generated");
                Narrative {
                    text,
                    locale,
                    outcome: NarrationOutcome::Generated,
                }
            }
            Err(reason) => {
                warn!(%locale, ?reason, "narrative degraded to fallback");
                Narrative::fallback(locale, reason)
            }
        }
    }

    /// Send a minimal prompt to check credentials and reachability.
    pub async fn probe(&self) -> NarratorStatus {
        let request = NarrationRequest {
            system: String::new(),
            user: PROBE_PROMPT.to_string(),
            max_tokens: PROBE_MAX_TOKENS,
            temperature: self.settings.temperature,
        };

        match tokio::time::timeout(self.settings.timeout, self.narrator.summarize(&request)).await
        {
            Ok(Ok(text)) => NarratorStatus {
                available: true,
                detail: text,
            },
            Ok(Err(err)) => NarratorStatus {
                available: false,
                detail: err.to_string(),
            },
            Err(_) => NarratorStatus {
                available: false,
                detail: format!(
                    "narrator did not answer within {}s",
                    self.settings.timeout.as_secs_f32()
                ),
            },
        }
    }

    async fn call(&self, request: &NarrationRequest) -> Result<String, FallbackReason> {
        let outcome = tokio::time::timeout(self.settings.timeout, self.narrator.summarize(request))
            .await
            .map_err(|_| FallbackReason::TimedOut)?;

        match outcome {
            Ok(text) if text.trim().is_empty() => Err(FallbackReason::EmptyResponse),
            Ok(text) => Ok(text.trim().to_string()),
            Err(err) => {
                warn!(error = %err, "narrator call failed");
                Err(fallback_reason(&err))
            }
        }
    }
}

fn fallback_reason(error: &NarratorError) -> FallbackReason {
    match error {
        NarratorError::MissingCredential => FallbackReason::Unconfigured,
        NarratorError::Client(_) => FallbackReason::ClientUnavailable,
        NarratorError::Upstream(_) => FallbackReason::UpstreamFailed,
        NarratorError::EmptyResponse => FallbackReason::EmptyResponse,
    }
}
