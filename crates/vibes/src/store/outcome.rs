//! Values returned to the presentation layer

use serde::{Deserialize, Serialize};

use crate::domain::{BingoRule, CurrentUser, LikeCounters, Match, SwipeKind, Vibe};

/// What a swipe did
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SwipeOutcome {
    pub kind: SwipeKind,
    /// Profile acted on, `None` when the deck is empty
    pub profile_id: Option<String>,
    pub vibe: Option<Vibe>,
    /// Match created by this swipe
    pub match_id: Option<String>,
    /// Whether a like was counted for the profile's vibe
    pub like_given: bool,
    /// Cursor after the swipe
    pub cursor: usize,
}

impl SwipeOutcome {
    pub(crate) fn empty_deck(kind: SwipeKind, cursor: usize) -> Self {
        Self {
            kind,
            profile_id: None,
            vibe: None,
            match_id: None,
            like_given: false,
            cursor,
        }
    }

    pub fn is_match(&self) -> bool {
        self.match_id.is_some()
    }
}

/// One square on the bingo board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BingoCell {
    pub vibe: Vibe,
    pub given: u32,
    pub received: u32,
    pub complete: bool,
}

/// Bingo board state
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BingoProgress {
    pub rule: BingoRule,
    pub cells: Vec<BingoCell>,
    pub completed: usize,
    pub remaining: usize,
    pub bingo: bool,
    pub badge_unlocked: bool,
}

impl BingoProgress {
    pub(crate) fn from_counters(
        counters: &LikeCounters,
        rule: BingoRule,
        badge_unlocked: bool,
    ) -> Self {
        let cells: Vec<BingoCell> = Vibe::ALL
            .iter()
            .map(|vibe| BingoCell {
                vibe: *vibe,
                given: counters.given(*vibe),
                received: counters.received(*vibe),
                complete: counters.is_complete(*vibe, rule),
            })
            .collect();
        let completed = cells.iter().filter(|c| c.complete).count();

        Self {
            rule,
            remaining: cells.len() - completed,
            bingo: completed == cells.len(),
            completed,
            cells,
            badge_unlocked,
        }
    }
}

/// Serializable view of the whole store
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoreSnapshot {
    pub current_user: CurrentUser,
    pub current_vibe: Vibe,
    pub cursor: usize,
    pub profile_count: usize,
    pub current_profile_id: Option<String>,
    pub matches: Vec<Match>,
    pub likes: LikeCounters,
    pub bingo: bool,
    pub bingo_badge_unlocked: bool,
}
