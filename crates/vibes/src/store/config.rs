//! Store configuration
//!
//! Selects between the behaviour variants the prototype shipped with.

use serde::{Deserialize, Serialize};

use crate::domain::{BingoRule, DomainError, MatchPolicy};

/// Behaviour switches for an `AppStore`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Which counters must be complete for bingo
    pub bingo_rule: BingoRule,
    /// Whether resetting the like counters also relocks the bingo badge
    pub reset_clears_badge: bool,
    /// When likes and superlikes turn into matches
    pub match_policy: MatchPolicy,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            bingo_rule: BingoRule::default(),
            reset_clears_badge: true,
            match_policy: MatchPolicy::default(),
        }
    }
}

impl StoreConfig {
    pub fn with_match_policy(mut self, match_policy: MatchPolicy) -> Self {
        self.match_policy = match_policy;
        self
    }

    pub fn with_bingo_rule(mut self, bingo_rule: BingoRule) -> Self {
        self.bingo_rule = bingo_rule;
        self
    }

    pub fn with_reset_clears_badge(mut self, enable: bool) -> Self {
        self.reset_clears_badge = enable;
        self
    }

    /// Reject probabilities outside `0.0..=1.0`
    pub fn validate(&self) -> Result<(), DomainError> {
        if let MatchPolicy::Chance { probability } = self.match_policy {
            if !(0.0..=1.0).contains(&probability) {
                return Err(DomainError::Validation(format!(
                    "Match probability must be between 0.0 and 1.0, got {}",
                    probability
                )));
            }
        }
        Ok(())
    }
}
