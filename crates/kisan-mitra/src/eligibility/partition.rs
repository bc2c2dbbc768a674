use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::domain::{Scheme, UserProfile};
use super::evaluator::{evaluate, SchemeVerdict};

/// Matched and failed reasons for one scheme, keyed by scheme name in [`Partition::reasons`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SchemeReasons {
    pub eligible_reasons: Vec<String>,
    pub rejection_reasons: Vec<String>,
}

/// Disjoint split of every catalog scheme into eligible and not-eligible verdicts.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Partition {
    pub eligible: Vec<SchemeVerdict>,
    pub not_eligible: Vec<SchemeVerdict>,
    pub reasons: BTreeMap<String, SchemeReasons>,
}

impl Partition {
    pub fn len(&self) -> usize {
        self.eligible.len() + self.not_eligible.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Evaluate the profile against each scheme in catalog order and split the verdicts by status.
pub fn partition(profile: &UserProfile, schemes: &[Scheme]) -> Partition {
    let mut split = Partition::default();

    for scheme in schemes {
        let verdict = evaluate(profile, scheme);
        // Later schemes sharing a display name overwrite earlier reason entries.
        split.reasons.insert(
            verdict.scheme_name.clone(),
            SchemeReasons {
                eligible_reasons: verdict.matched_conditions.clone(),
                rejection_reasons: verdict.failed_conditions.clone(),
            },
        );

        if verdict.is_eligible() {
            split.eligible.push(verdict);
        } else {
            split.not_eligible.push(verdict);
        }
    }

    split
}
