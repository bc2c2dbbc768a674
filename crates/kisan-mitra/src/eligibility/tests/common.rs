use crate::eligibility::domain::{
    Bound, CropRequirement, IrrigationRequirement, Scheme, SchemeId, SchemeRule, StateScope,
    UserProfile,
};

pub(super) fn profile() -> UserProfile {
    UserProfile {
        land_size: 2.5,
        crop_type: "Wheat".to_string(),
        annual_income: 150000.0,
        irrigation_available: true,
        state: "Punjab".to_string(),
    }
}

pub(super) fn scheme(id: &str, benefit_amount: u64, rule: SchemeRule) -> Scheme {
    Scheme {
        id: SchemeId(id.to_string()),
        name: format!("Scheme {id}"),
        description: format!("Support programme {id}"),
        rule,
        benefit_amount,
        required_documents: vec!["Aadhaar card".to_string()],
    }
}

pub(super) fn open_scheme(id: &str, benefit_amount: u64) -> Scheme {
    scheme(id, benefit_amount, SchemeRule::default())
}

pub(super) fn min_land_rule(min_land: f64) -> SchemeRule {
    SchemeRule {
        min_land: Bound::Value(min_land),
        ..SchemeRule::default()
    }
}

pub(super) fn income_rule(limit: f64) -> SchemeRule {
    SchemeRule {
        income_limit: Bound::Value(limit),
        ..SchemeRule::default()
    }
}

pub(super) fn strict_rule() -> SchemeRule {
    SchemeRule {
        min_land: Bound::Value(1.0),
        max_land: Bound::Value(5.0),
        income_limit: Bound::Value(200000.0),
        crop_required: CropRequirement::Only("wheat".to_string()),
        irrigation_required: IrrigationRequirement::Required,
        applicable_states: StateScope::Only(vec!["Punjab".to_string(), "Haryana".to_string()]),
    }
}

/// Rule that `profile()` fails on every predicate.
pub(super) fn unreachable_rule() -> SchemeRule {
    SchemeRule {
        min_land: Bound::Value(10.0),
        max_land: Bound::Value(1.0),
        income_limit: Bound::Value(1000.0),
        crop_required: CropRequirement::Only("cotton".to_string()),
        irrigation_required: IrrigationRequirement::RainfedOnly,
        applicable_states: StateScope::Only(vec!["Kerala".to_string()]),
    }
}
