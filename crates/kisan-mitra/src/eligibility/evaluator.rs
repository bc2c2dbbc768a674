use serde::{Deserialize, Serialize};

use super::domain::{
    normalize, CropRequirement, IrrigationRequirement, Scheme, SchemeId, StateScope, UserProfile,
};

/// Score reported for eligible schemes and for schemes without any predicate.
pub const FULL_SCORE: u8 = 100;

/// Binary verdict for a single scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EligibilityStatus {
    Eligible,
    NotEligible,
}

/// Explainability record produced for one (profile, scheme) pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SchemeVerdict {
    pub scheme_id: SchemeId,
    pub scheme_name: String,
    #[serde(rename = "eligibilityStatus")]
    pub status: EligibilityStatus,
    pub matched_conditions: Vec<String>,
    pub failed_conditions: Vec<String>,
    #[serde(rename = "eligibilityScore")]
    pub score: u8,
    #[serde(deserialize_with = "crate::eligibility::domain::rupees::deserialize")]
    pub benefit_amount: u64,
    pub required_documents: Vec<String>,
    pub description: String,
}

impl SchemeVerdict {
    pub fn is_eligible(&self) -> bool {
        self.status == EligibilityStatus::Eligible
    }
}

#[derive(Default)]
struct ConditionLog {
    matched: Vec<String>,
    failed: Vec<String>,
}

impl ConditionLog {
    fn record(
        &mut self,
        passed: bool,
        matched: impl FnOnce() -> String,
        failed: impl FnOnce() -> String,
    ) {
        if passed {
            self.matched.push(matched());
        } else {
            self.failed.push(failed());
        }
    }

    fn ratio_score(&self) -> u8 {
        let checked = self.matched.len() + self.failed.len();
        if checked == 0 {
            return FULL_SCORE;
        }
        let ratio = self.matched.len() as f64 / checked as f64;
        (ratio * f64::from(FULL_SCORE)).round() as u8
    }
}

/// Apply every defined predicate of `scheme` to `profile`.
///
/// Predicates run in a fixed order (land minimum, land maximum, income, crop, irrigation,
/// state) so the condition lists are stable across calls. The function is pure.
pub fn evaluate(profile: &UserProfile, scheme: &Scheme) -> SchemeVerdict {
    let rule = &scheme.rule;
    let land = profile.land_size;
    let income = profile.annual_income;
    let mut log = ConditionLog::default();

    if let Some(min_land) = rule.min_land.value() {
        log.record(
            land >= min_land,
            || format!("Land size {land} ha meets minimum {min_land} ha"),
            || format!("Land size {land} ha is below minimum {min_land} ha"),
        );
    }

    if let Some(max_land) = rule.max_land.value() {
        log.record(
            land <= max_land,
            || format!("Land size {land} ha is within maximum {max_land} ha"),
            || format!("Land size {land} ha exceeds maximum {max_land} ha"),
        );
    }

    if let Some(limit) = rule.income_limit.value() {
        log.record(
            income <= limit,
            || format!("Annual income ₹{income} is within limit ₹{limit}"),
            || format!("Annual income ₹{income} exceeds limit ₹{limit}"),
        );
    }

    if let CropRequirement::Only(required) = &rule.crop_required {
        let crop = &profile.crop_type;
        log.record(
            normalize(crop) == normalize(required),
            || format!("Crop \"{crop}\" matches required \"{required}\""),
            || format!("Crop \"{crop}\" does not match required \"{required}\""),
        );
    }

    match rule.irrigation_required {
        IrrigationRequirement::Unconstrained => {}
        IrrigationRequirement::Required => log.record(
            profile.irrigation_available,
            || "Irrigation is available as required".to_string(),
            || "Scheme requires irrigation; currently not available".to_string(),
        ),
        IrrigationRequirement::RainfedOnly => log.record(
            !profile.irrigation_available,
            || "Rainfed / no irrigation as required for scheme".to_string(),
            || "Scheme is for rainfed areas; irrigation is available".to_string(),
        ),
    }

    if let scope @ StateScope::Only(_) = &rule.applicable_states {
        let state = &profile.state;
        log.record(
            scope.contains(state),
            || format!("State \"{state}\" is in applicable states"),
            || format!("State \"{state}\" is not in applicable states"),
        );
    }

    let eligible = log.failed.is_empty();
    // Eligible verdicts always display a full score, whatever the ratio says.
    let score = if eligible { FULL_SCORE } else { log.ratio_score() };

    SchemeVerdict {
        scheme_id: scheme.id.clone(),
        scheme_name: scheme.name.clone(),
        status: if eligible {
            EligibilityStatus::Eligible
        } else {
            EligibilityStatus::NotEligible
        },
        matched_conditions: log.matched,
        failed_conditions: log.failed,
        score,
        benefit_amount: scheme.benefit_amount,
        required_documents: scheme.required_documents.clone(),
        description: scheme.description.clone(),
    }
}
