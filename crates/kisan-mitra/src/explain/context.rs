use crate::eligibility::DecisionResult;

/// Render the decision as labelled plain-text blocks for the narrator.
///
/// Blocks appear in a fixed order: recommended schemes with full detail, remaining eligible
/// schemes condensed, rejected schemes with their failure reasons, and a closing note when
/// nothing matched.
pub fn build_context(decision: &DecisionResult) -> String {
    let mut parts: Vec<String> = Vec::new();

    if !decision.top_recommended.is_empty() {
        parts.push("TOP RECOMMENDED SCHEMES:".to_string());
        for (index, verdict) in decision.top_recommended.iter().enumerate() {
            parts.push(format!(
                "{}. {} – Benefit: ₹{}. Why eligible: {}. Documents: {}.",
                index + 1,
                verdict.scheme_name,
                verdict.benefit_amount,
                verdict.matched_conditions.join("; "),
                verdict.required_documents.join(", "),
            ));
        }
    }

    let others: Vec<_> = decision.other_eligible().collect();
    if !others.is_empty() {
        parts.push("OTHER ELIGIBLE SCHEMES:".to_string());
        for verdict in others {
            parts.push(format!(
                "- {} – ₹{}. Reasons: {}.",
                verdict.scheme_name,
                verdict.benefit_amount,
                verdict.matched_conditions.join("; "),
            ));
        }
    }

    if !decision.not_eligible.is_empty() {
        parts.push("NOT ELIGIBLE (with reasons):".to_string());
        for verdict in &decision.not_eligible {
            parts.push(format!(
                "- {}: {}.",
                verdict.scheme_name,
                verdict.failed_conditions.join("; ")
            ));
        }
    }

    if decision.eligible.is_empty() {
        parts.push(
            "No schemes are eligible based on the provided profile. Explain the main reasons briefly."
                .to_string(),
        );
    }

    parts.join("\n\n")
}
