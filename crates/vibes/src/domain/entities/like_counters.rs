//! LikeCounters - Per-vibe tallies behind the likes bingo

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::{BingoRule, Vibe};

/// Likes given and received, keyed by vibe
///
/// Both maps always hold an entry for every vibe.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LikeCounters {
    given: BTreeMap<Vibe, u32>,
    received: BTreeMap<Vibe, u32>,
}

impl LikeCounters {
    /// All counts at zero
    pub fn new() -> Self {
        Self {
            given: zeroed(),
            received: zeroed(),
        }
    }

    pub fn given(&self, vibe: Vibe) -> u32 {
        self.given.get(&vibe).copied().unwrap_or(0)
    }

    pub fn received(&self, vibe: Vibe) -> u32 {
        self.received.get(&vibe).copied().unwrap_or(0)
    }

    /// Add one like given, returning the new count
    pub fn increment_given(&mut self, vibe: Vibe) -> u32 {
        bump(&mut self.given, vibe)
    }

    /// Add one like received, returning the new count
    pub fn increment_received(&mut self, vibe: Vibe) -> u32 {
        bump(&mut self.received, vibe)
    }

    /// Zero both maps
    pub fn reset(&mut self) {
        self.given = zeroed();
        self.received = zeroed();
    }

    /// Whether a single vibe counts as complete under `rule`
    pub fn is_complete(&self, vibe: Vibe, rule: BingoRule) -> bool {
        match rule {
            BingoRule::GivenOnly => self.given(vibe) > 0,
            BingoRule::GivenAndReceived => self.given(vibe) > 0 && self.received(vibe) > 0,
        }
    }

    /// Every vibe complete under `rule`
    pub fn is_bingo(&self, rule: BingoRule) -> bool {
        Vibe::ALL.iter().all(|vibe| self.is_complete(*vibe, rule))
    }

    pub fn given_map(&self) -> &BTreeMap<Vibe, u32> {
        &self.given
    }

    pub fn received_map(&self) -> &BTreeMap<Vibe, u32> {
        &self.received
    }
}

impl Default for LikeCounters {
    fn default() -> Self {
        Self::new()
    }
}

fn zeroed() -> BTreeMap<Vibe, u32> {
    Vibe::ALL.iter().map(|vibe| (*vibe, 0)).collect()
}

fn bump(map: &mut BTreeMap<Vibe, u32>, vibe: Vibe) -> u32 {
    let count = map.entry(vibe).or_insert(0);
    *count = count.saturating_add(1);
    *count
}
