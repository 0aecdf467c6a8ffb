//! Domain Entities
//!
//! Pure domain models without infrastructure dependencies.
//! - Profile: A card in the deck (and the local CurrentUser)
//! - SwipeDecision: A gesture on the top card
//! - Match: A mutual like with an embedded conversation
//! - Message: One chat entry
//! - LikeCounters: Per-vibe tallies for the likes bingo

mod like_counters;
mod match_record;
mod message;
mod profile;
mod swipe;

pub use like_counters::*;
pub use match_record::*;
pub use message::*;
pub use profile::*;
pub use swipe::*;
