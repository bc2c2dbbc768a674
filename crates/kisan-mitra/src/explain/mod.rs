//! Narrative layer: renders a final decision as bounded, locale-specific prose.
//!
//! The generative capability sits behind the [`Narrator`] port. Whatever it does, the caller
//! always gets a non-empty [`Narrative`] and the decision is never modified.

mod context;
mod groq;
mod locale;
mod narrator;
mod orchestrator;
mod prompt;


use std::sync::Arc;

use tracing::{info, warn};

pub use context::build_context;
pub use groq::GroqNarrator;
pub use locale::{Locale, UnsupportedLocale};
pub use narrator::{NarrationRequest, Narrator, NarratorError, UnavailableNarrator};
pub use orchestrator::{
    ExplanationOrchestrator, NarrationOutcome, NarrationSettings, Narrative, NarratorStatus,
};
pub use prompt::{fallback_text, FallbackReason, WORD_CEILING};

use crate::config::NarratorConfig;

/// Build the configured narrator, or an [`UnavailableNarrator`] carrying the construction error.
pub fn narrator_from_config(config: &NarratorConfig) -> Arc<dyn Narrator> {
    match GroqNarrator::from_config(config) {
        Ok(narrator) => {
            info!(model = narrator.model(), "narrator configured");
            Arc::new(narrator)
        }
        Err(err) => {
            warn!(error = %err, "narrator unavailable; explanations will use fallback text");
            Arc::new(UnavailableNarrator::new(err))
        }
    }
}

/// Orchestrator wired from configuration.
pub fn orchestrator_from_config(config: &NarratorConfig) -> ExplanationOrchestrator {
    ExplanationOrchestrator::new(narrator_from_config(config), NarrationSettings::from(config))
}
