use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::domain::{Scheme, UserProfile};
use super::evaluator::SchemeVerdict;
use super::partition::{partition, SchemeReasons};
use super::ranking::{rank, top_n};

/// Final, deterministic eligibility decision for one profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DecisionResult {
    #[serde(rename = "eligibleSchemes")]
    pub eligible: Vec<SchemeVerdict>,
    #[serde(rename = "notEligibleSchemes")]
    pub not_eligible: Vec<SchemeVerdict>,
    pub reasons: BTreeMap<String, SchemeReasons>,
    pub top_recommended: Vec<SchemeVerdict>,
}

impl DecisionResult {
    pub fn summary(&self) -> DecisionSummary {
        DecisionSummary {
            eligible_count: self.eligible.len(),
            not_eligible_count: self.not_eligible.len(),
            total_potential_benefit: self
                .eligible
                .iter()
                .fold(0u64, |total, verdict| {
                    total.saturating_add(verdict.benefit_amount)
                }),
            top_recommended_count: self.top_recommended.len(),
        }
    }

    /// Eligible verdicts that did not make the recommended cut, in catalog order.
    pub fn other_eligible(&self) -> impl Iterator<Item = &SchemeVerdict> {
        self.eligible.iter().filter(move |verdict| {
            !self
                .top_recommended
                .iter()
                .any(|top| top.scheme_id == verdict.scheme_id)
        })
    }
}

/// Headline figures shown alongside a decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DecisionSummary {
    pub eligible_count: usize,
    pub not_eligible_count: usize,
    pub total_potential_benefit: u64,
    pub top_recommended_count: usize,
}

/// Evaluate, partition and rank the catalog for `profile`, keeping the best `limit` matches.
pub fn decide(profile: &UserProfile, schemes: &[Scheme], limit: usize) -> DecisionResult {
    let split = partition(profile, schemes);
    let ranked = rank(&split.eligible);
    let top_recommended = top_n(&ranked, limit);

    DecisionResult {
        eligible: split.eligible,
        not_eligible: split.not_eligible,
        reasons: split.reasons,
        top_recommended,
    }
}
