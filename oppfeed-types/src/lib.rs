//! Shared data model for the opportunity feed.

mod chain;
mod record;

pub use chain::Chain;
pub use record::{OpportunityRecord, OpportunityStats, RiskLevel};

/// Literal used for any categorical field the backend left out.
pub const UNKNOWN: &str = "unknown";
