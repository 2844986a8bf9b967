use serde::{Deserialize, Serialize};
use std::fmt;

use crate::UNKNOWN;

/// Blockchain network an opportunity was observed on.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Chain {
    Ethereum,
    Bsc,
    Base,
    Polygon,
    Solana,
    Arbitrum,
    Avalanche,
    Optimism,
    /// A chain the backend reported that we have no dedicated variant for
    Other(String),
    /// The backend did not report a chain
    Unknown,
}

impl Chain {
    /// Every named chain, in display order. Excludes `Other` and `Unknown`.
    pub const NAMED: [Chain; 8] = [
        Chain::Ethereum,
        Chain::Bsc,
        Chain::Base,
        Chain::Polygon,
        Chain::Solana,
        Chain::Arbitrum,
        Chain::Avalanche,
        Chain::Optimism,
    ];

    /// Parses a backend chain name, accepting the common short aliases and
    /// EVM chain ids.
    /// Empty input maps to `Unknown`; anything unrecognized is kept as `Other`.
    pub fn parse(value: &str) -> Self {
        let normalized = value.trim().to_lowercase();
        match normalized.as_str() {
            "" | UNKNOWN => Chain::Unknown,
            "ethereum" | "eth" | "mainnet" | "1" => Chain::Ethereum,
            "bsc" | "bnb" | "binance" | "bnb-chain" | "56" => Chain::Bsc,
            "base" | "8453" => Chain::Base,
            "polygon" | "matic" | "137" => Chain::Polygon,
            "solana" | "sol" => Chain::Solana,
            "arbitrum" | "arb" | "42161" => Chain::Arbitrum,
            "avalanche" | "avax" | "43114" => Chain::Avalanche,
            "optimism" | "op" | "10" => Chain::Optimism,
            _ => Chain::Other(normalized),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Chain::Ethereum => "ethereum",
            Chain::Bsc => "bsc",
            Chain::Base => "base",
            Chain::Polygon => "polygon",
            Chain::Solana => "solana",
            Chain::Arbitrum => "arbitrum",
            Chain::Avalanche => "avalanche",
            Chain::Optimism => "optimism",
            Chain::Other(name) => name,
            Chain::Unknown => UNKNOWN,
        }
    }

    /// True for chains whose pair addresses are 20-byte hex (EVM).
    pub fn is_evm(&self) -> bool {
        matches!(
            self,
            Chain::Ethereum
                | Chain::Bsc
                | Chain::Base
                | Chain::Polygon
                | Chain::Arbitrum
                | Chain::Avalanche
                | Chain::Optimism
        )
    }
}

impl Default for Chain {
    fn default() -> Self {
        Chain::Unknown
    }
}

impl fmt::Display for Chain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<String> for Chain {
    fn from(value: String) -> Self {
        Chain::parse(&value)
    }
}

impl From<&str> for Chain {
    fn from(value: &str) -> Self {
        Chain::parse(value)
    }
}

impl From<Chain> for String {
    fn from(chain: Chain) -> Self {
        chain.as_str().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_aliases() {
        assert_eq!(Chain::parse("ETH"), Chain::Ethereum);
        assert_eq!(Chain::parse("bnb"), Chain::Bsc);
        assert_eq!(Chain::parse(" matic "), Chain::Polygon);
        assert_eq!(Chain::parse("sol"), Chain::Solana);
        assert_eq!(Chain::parse("8453"), Chain::Base);
        assert_eq!(Chain::parse(""), Chain::Unknown);
        assert_eq!(Chain::parse("unknown"), Chain::Unknown);
        assert_eq!(Chain::parse("Fantom"), Chain::Other("fantom".to_string()));
    }

    #[test]
    fn test_display_round_trips_through_parse() {
        for chain in Chain::NAMED.iter() {
            assert_eq!(&Chain::parse(&chain.to_string()), chain);
        }
        assert_eq!(Chain::Unknown.to_string(), "unknown");
    }

    #[test]
    fn test_evm_classification() {
        assert!(Chain::Base.is_evm());
        assert!(!Chain::Solana.is_evm());
        assert!(!Chain::Unknown.is_evm());
    }
}
