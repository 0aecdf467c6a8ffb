//! Value Objects
//!
//! Immutable objects defined by their attributes rather than identity.

mod bingo_rule;
mod match_policy;
mod message_kind;
mod swipe_kind;
mod vibe;

pub use bingo_rule::*;
pub use match_policy::*;
pub use message_kind::*;
pub use swipe_kind::*;
pub use vibe::*;
