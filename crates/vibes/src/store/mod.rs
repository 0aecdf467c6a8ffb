//! Application State Store
//!
//! Owns the swipe session: deck, cursor, matches, conversations
//! and the like counters behind the bingo board.

mod app_store;
mod config;
mod outcome;

pub use app_store::AppStore;
pub use config::StoreConfig;
pub use outcome::{BingoCell, BingoProgress, StoreSnapshot, SwipeOutcome};
