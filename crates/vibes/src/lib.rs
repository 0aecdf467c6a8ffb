//! VIBES Domain Library
//!
//! Session state for the VIBES swipe prototype: the profile deck, swipe and
//! match bookkeeping, per-match conversations and the likes bingo.
//!
//! # Architecture
//!
//! - **Domain Layer** (`domain/`): Pure entities and value types
//!   - `entities/`: Profile, SwipeDecision, Match, Message, LikeCounters
//!   - `value_objects/`: Vibe, SwipeKind, MessageKind, BingoRule, MatchPolicy
//!   - `errors/`: Domain-specific error types
//!
//! - **Ports** (`ports/`): RandomSource, ProfileSource
//! - **Adapters** (`adapters/`): rand-backed sources and the JSON deck loader
//! - **Store** (`store/`): `AppStore`, the owner of all mutable session state
//!
//! # Usage
//!
//! ```rust,ignore
//! use vibes::{AppStore, JsonProfileSource, StoreConfig, SwipeDecision, ThreadRandom};
//!
//! let source = JsonProfileSource::bundled()?;
//! let mut store = AppStore::from_source(&source, StoreConfig::default(), ThreadRandom::new())?;
//! let top = store.current_profile().map(|p| p.id.clone()).unwrap_or_default();
//! let outcome = store.record_swipe(&SwipeDecision::like(top))?;
//! ```

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod store;

// Re-export commonly used types
pub use adapters::{
    FixedRandom, JsonProfileSource, SeedDocument, SeedMatch, SeedMessage, SeededRandom,
    SequenceRandom, ThreadRandom,
};
pub use domain::{
    BingoRule, CurrentUser, DomainError, LikeCounters, Match, MatchPolicy, Message, MessageKind,
    NewMessage, Personality, Profile, SwipeDecision, SwipeKind, Vibe,
};
pub use ports::{ProfileSource, RandomSource};
pub use store::{AppStore, BingoCell, BingoProgress, StoreConfig, StoreSnapshot, SwipeOutcome};
