use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::Chain;

/// Backend-assigned risk classification of an opportunity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl FromStr for RiskLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "low" => Ok(RiskLevel::Low),
            "medium" => Ok(RiskLevel::Medium),
            "high" => Ok(RiskLevel::High),
            _ => Err(format!("Invalid risk level: {}", s)),
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Low => write!(f, "low"),
            Self::Medium => write!(f, "medium"),
            Self::High => write!(f, "high"),
        }
    }
}

/// One observed trading opportunity, after normalization.
///
/// Records are never mutated once fetched: a new fetch replaces the whole batch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OpportunityRecord {
    /// Identity key within one batch
    pub pair_address: String,
    pub chain: Chain,
    pub dex: String,
    pub base_symbol: String,
    pub quote_symbol: String,
    /// Pool depth in USD, never negative
    pub liquidity_usd: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub volume_24h_usd: Option<f64>,
    /// Backend ranking heuristic (observed range 0-30)
    pub score: f64,
    /// Provenance tag, e.g. the scanner that found it
    pub source: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub risk_level: Option<RiskLevel>,
    /// Observation time; the Unix epoch when the backend sent none
    pub timestamp: DateTime<Utc>,
}

impl OpportunityRecord {
    /// `BASE/QUOTE` label used by the rendering layer
    pub fn pair_label(&self) -> String {
        format!("{}/{}", self.base_symbol, self.quote_symbol)
    }
}

/// Aggregate counters published next to the live list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OpportunityStats {
    pub total: u64,
    pub high_liquidity: u64,
    pub active_chains: u64,
    pub avg_liquidity_usd: f64,
    pub fetched_at: DateTime<Utc>,
}
