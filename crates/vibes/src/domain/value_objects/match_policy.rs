//! MatchPolicy - When a positive swipe turns into a match

use serde::{Deserialize, Serialize};

/// Default simulated mutual-match chance
pub const DEFAULT_MATCH_PROBABILITY: f64 = 0.3;

/// Match creation policy for likes and superlikes
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum MatchPolicy {
    /// Every positive swipe matches
    Always,
    /// A positive swipe matches with the given probability (0.0 - 1.0)
    Chance { probability: f64 },
}

impl MatchPolicy {
    /// Whether a roll in `[0, 1)` clears the bar
    ///
    /// A roll matches when it lands in the top `probability` slice of the
    /// range, so a 0.3 chance accepts rolls above 0.7. A probability of
    /// 1.0 or more accepts every roll, including 0.0.
    pub fn accepts_roll(&self, roll: f64) -> bool {
        match self {
            MatchPolicy::Always => true,
            MatchPolicy::Chance { probability } => {
                *probability >= 1.0 || roll > 1.0 - probability
            }
        }
    }

    /// Whether evaluating the policy consumes a roll
    pub fn needs_roll(&self) -> bool {
        matches!(self, MatchPolicy::Chance { .. })
    }
}

impl Default for MatchPolicy {
    fn default() -> Self {
        MatchPolicy::Chance {
            probability: DEFAULT_MATCH_PROBABILITY,
        }
    }
}
