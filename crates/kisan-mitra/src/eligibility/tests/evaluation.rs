use super::common::*;
use crate::eligibility::domain::{
    CropRequirement, IrrigationRequirement, SchemeRule, StateScope,
};
use crate::eligibility::{evaluate, EligibilityStatus, FULL_SCORE};

#[test]
fn scheme_without_predicates_is_fully_eligible() {
    let verdict = evaluate(&profile(), &open_scheme("open", 100));

    assert_eq!(verdict.status, EligibilityStatus::Eligible);
    assert_eq!(verdict.score, FULL_SCORE);
    assert!(verdict.matched_conditions.is_empty());
    assert!(verdict.failed_conditions.is_empty());
}

#[test]
fn minimum_land_met_yields_single_match() {
    let verdict = evaluate(&profile(), &scheme("min-land", 100, min_land_rule(1.0)));

    assert_eq!(verdict.status, EligibilityStatus::Eligible);
    assert_eq!(verdict.score, 100);
    assert_eq!(
        verdict.matched_conditions,
        vec!["Land size 2.5 ha meets minimum 1 ha".to_string()]
    );
}

#[test]
fn income_over_limit_fails_with_both_values() {
    let mut profile = profile();
    profile.annual_income = 250000.0;

    let verdict = evaluate(&profile, &scheme("income", 100, income_rule(100000.0)));

    assert_eq!(verdict.status, EligibilityStatus::NotEligible);
    assert_eq!(verdict.score, 0);
    assert_eq!(verdict.failed_conditions.len(), 1);
    let reason = &verdict.failed_conditions[0];
    assert!(reason.contains("250000"), "{reason}");
    assert!(reason.contains("100000"), "{reason}");
}

#[test]
fn partial_failure_reports_ratio_score() {
    let mut profile = profile();
    profile.state = "Bihar".to_string();

    let verdict = evaluate(&profile, &scheme("strict", 100, strict_rule()));

    assert_eq!(verdict.status, EligibilityStatus::NotEligible);
    assert_eq!(verdict.matched_conditions.len(), 5);
    assert_eq!(
        verdict.failed_conditions,
        vec!["State \"Bihar\" is not in applicable states".to_string()]
    );
    assert_eq!(verdict.score, 83);
}

#[test]
fn conditions_follow_predicate_order() {
    let verdict = evaluate(&profile(), &scheme("strict", 100, strict_rule()));

    assert_eq!(
        verdict.matched_conditions,
        vec![
            "Land size 2.5 ha meets minimum 1 ha".to_string(),
            "Land size 2.5 ha is within maximum 5 ha".to_string(),
            "Annual income ₹150000 is within limit ₹200000".to_string(),
            "Crop \"Wheat\" matches required \"wheat\"".to_string(),
            "Irrigation is available as required".to_string(),
            "State \"Punjab\" is in applicable states".to_string(),
        ]
    );
    assert_eq!(verdict.status, EligibilityStatus::Eligible);
}

#[test]
fn crop_and_state_comparisons_trim_and_ignore_case() {
    let mut profile = profile();
    profile.crop_type = "  WHEAT ".to_string();
    profile.state = "haryana  ".to_string();
    let rule = SchemeRule {
        crop_required: CropRequirement::Only(" Wheat".to_string()),
        applicable_states: StateScope::Only(vec!["Haryana".to_string()]),
        ..SchemeRule::default()
    };

    let verdict = evaluate(&profile, &scheme("text", 100, rule));

    assert!(verdict.is_eligible(), "{:?}", verdict.failed_conditions);
    assert_eq!(verdict.matched_conditions.len(), 2);
}

#[test]
fn rainfed_only_rejects_irrigated_farms() {
    let rule = SchemeRule {
        irrigation_required: IrrigationRequirement::RainfedOnly,
        ..SchemeRule::default()
    };

    let irrigated = evaluate(&profile(), &scheme("rainfed", 100, rule.clone()));
    assert_eq!(
        irrigated.failed_conditions,
        vec!["Scheme is for rainfed areas; irrigation is available".to_string()]
    );

    let mut dry = profile();
    dry.irrigation_available = false;
    let rainfed = evaluate(&dry, &scheme("rainfed", 100, rule));
    assert_eq!(
        rainfed.matched_conditions,
        vec!["Rainfed / no irrigation as required for scheme".to_string()]
    );
}

#[test]
fn unconstrained_irrigation_emits_nothing() {
    let mut dry = profile();
    dry.irrigation_available = false;
    let rule = SchemeRule {
        irrigation_required: IrrigationRequirement::Unconstrained,
        ..SchemeRule::default()
    };

    let verdict = evaluate(&dry, &scheme("any-water", 100, rule));

    assert!(verdict.matched_conditions.is_empty());
    assert!(verdict.failed_conditions.is_empty());
}

#[test]
fn zero_and_negative_inputs_fail_gracefully() {
    let mut profile = profile();
    profile.land_size = -1.0;
    profile.annual_income = 0.0;
    profile.crop_type.clear();
    profile.state.clear();

    let verdict = evaluate(&profile, &scheme("strict", 100, strict_rule()));

    assert_eq!(verdict.status, EligibilityStatus::NotEligible);
    assert_eq!(
        verdict.matched_conditions.len() + verdict.failed_conditions.len(),
        6
    );
    assert!(verdict
        .failed_conditions
        .iter()
        .any(|reason| reason == "Land size -1 ha is below minimum 1 ha"));
}

#[test]
fn status_tracks_failed_conditions_for_every_verdict() {
    let schemes = [
        open_scheme("open", 1),
        scheme("strict", 2, strict_rule()),
        scheme("unreachable", 3, unreachable_rule()),
        scheme("income", 4, income_rule(10.0)),
    ];

    for scheme in &schemes {
        let verdict = evaluate(&profile(), scheme);
        assert_eq!(
            verdict.failed_conditions.is_empty(),
            verdict.status == EligibilityStatus::Eligible
        );
        if verdict.is_eligible() {
            assert_eq!(verdict.score, FULL_SCORE);
        }
    }
}

#[test]
fn verdict_carries_display_fields() {
    let scheme = scheme("display", 4200, min_land_rule(0.5));
    let verdict = evaluate(&profile(), &scheme);

    assert_eq!(verdict.scheme_id, scheme.id);
    assert_eq!(verdict.scheme_name, scheme.name);
    assert_eq!(verdict.benefit_amount, 4200);
    assert_eq!(verdict.required_documents, scheme.required_documents);
    assert_eq!(verdict.description, scheme.description);
}
