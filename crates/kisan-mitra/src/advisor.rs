use std::sync::Arc;

use serde::Serialize;
use tracing::info;

use crate::eligibility::{decide, DecisionResult, DecisionSummary, SchemeCatalog, UserProfile};
use crate::explain::{ExplanationOrchestrator, Locale, Narrative, NarratorStatus};

/// Decision plus narrative, returned side by side. The narrative is a compressed restatement
/// and never feeds back into the decision.
#[derive(Debug, Clone, Serialize)]
pub struct Recommendation {
    pub decision: DecisionResult,
    pub summary: DecisionSummary,
    pub narrative: Narrative,
}

/// Service composing the static catalog, the deterministic decision core and the narrator.
#[derive(Debug, Clone)]
pub struct SchemeAdvisor {
    catalog: Arc<SchemeCatalog>,
    orchestrator: ExplanationOrchestrator,
    top_n: usize,
}

impl SchemeAdvisor {
    pub fn new(
        catalog: Arc<SchemeCatalog>,
        orchestrator: ExplanationOrchestrator,
        top_n: usize,
    ) -> Self {
        Self {
            catalog,
            orchestrator,
            top_n: top_n.max(1),
        }
    }

    pub fn catalog(&self) -> &SchemeCatalog {
        &self.catalog
    }

    pub fn top_n(&self) -> usize {
        self.top_n
    }

    /// Run the rule pipeline. `top_n` overrides the configured recommendation count.
    pub fn decide(&self, profile: &UserProfile, top_n: Option<usize>) -> DecisionResult {
        let limit = top_n.map(|n| n.max(1)).unwrap_or(self.top_n);
        let decision = decide(profile, self.catalog.schemes(), limit);
        info!(
            eligible = decision.eligible.len(),
            not_eligible = decision.not_eligible.len(),
            recommended = decision.top_recommended.len(),
            "eligibility decision complete"
        );
        decision
    }

    /// Narrate an already-computed decision, e.g. when the caller switches language.
    pub async fn narrate(&self, decision: &DecisionResult, locale: Locale) -> Narrative {
        self.orchestrator.explain(decision, locale).await
    }

    pub async fn recommend(
        &self,
        profile: &UserProfile,
        locale: Locale,
        top_n: Option<usize>,
    ) -> Recommendation {
        let decision = self.decide(profile, top_n);
        let narrative = self.narrate(&decision, locale).await;
        let summary = decision.summary();

        Recommendation {
            decision,
            summary,
            narrative,
        }
    }

    pub async fn narrator_status(&self) -> NarratorStatus {
        self.orchestrator.probe().await
    }
}
