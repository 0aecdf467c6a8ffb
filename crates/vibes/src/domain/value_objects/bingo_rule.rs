//! BingoRule - Which like counters must be complete for bingo

use serde::{Deserialize, Serialize};

/// Bingo completion rule
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum BingoRule {
    /// Every vibe has at least one like given
    #[default]
    GivenOnly,
    /// Every vibe has at least one like given and one received
    GivenAndReceived,
}

impl std::fmt::Display for BingoRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BingoRule::GivenOnly => write!(f, "given_only"),
            BingoRule::GivenAndReceived => write!(f, "given_and_received"),
        }
    }
}

impl std::str::FromStr for BingoRule {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace('-', "_").as_str() {
            "given_only" | "given" => Ok(BingoRule::GivenOnly),
            "given_and_received" | "both" => Ok(BingoRule::GivenAndReceived),
            _ => Err(format!("Unknown bingo rule: {}", s)),
        }
    }
}
