use std::cmp::Ordering;

use super::evaluator::SchemeVerdict;

/// Number of schemes surfaced as recommended when no override is configured.
pub const DEFAULT_TOP_N: usize = 3;

fn compare(left: &SchemeVerdict, right: &SchemeVerdict) -> Ordering {
    right
        .benefit_amount
        .cmp(&left.benefit_amount)
        .then_with(|| right.score.cmp(&left.score))
}

/// Order eligible verdicts by benefit, then score, both descending.
///
/// The sort is stable, so verdicts that tie on both keys keep their catalog order.
pub fn rank(eligible: &[SchemeVerdict]) -> Vec<SchemeVerdict> {
    let mut ranked = eligible.to_vec();
    ranked.sort_by(compare);
    ranked
}

/// Prefix of `ranked` holding at most `n` verdicts.
pub fn top_n(ranked: &[SchemeVerdict], n: usize) -> Vec<SchemeVerdict> {
    ranked.iter().take(n).cloned().collect()
}
