//! Rule-based farm scheme eligibility with a bounded, non-authoritative narrative layer.

pub mod advisor;
pub mod config;
pub mod eligibility;
pub mod error;
pub mod explain;
pub mod router;
pub mod telemetry;

pub use advisor::{Recommendation, SchemeAdvisor};
pub use router::advisor_router;
