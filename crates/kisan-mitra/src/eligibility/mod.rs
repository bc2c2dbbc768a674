//! Deterministic scheme eligibility: predicate evaluation, partitioning and ranking.
//!
//! Nothing in this module performs I/O or can fail once a catalog has been loaded; the same
//! profile and catalog always produce the same [`DecisionResult`].

mod catalog;
mod decision;
pub mod domain;
mod evaluator;
mod partition;
mod ranking;

#[cfg(test)]
mod tests;

pub use catalog::{CatalogError, SchemeCatalog};
pub use decision::{decide, DecisionResult, DecisionSummary};
pub use domain::{
    Bound, CropRequirement, IrrigationRequirement, Scheme, SchemeId, SchemeRule, StateScope,
    UserProfile,
};
pub use evaluator::{evaluate, EligibilityStatus, SchemeVerdict, FULL_SCORE};
pub use partition::{partition, Partition, SchemeReasons};
pub use ranking::{rank, top_n, DEFAULT_TOP_N};
