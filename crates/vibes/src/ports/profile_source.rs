//! Profile Source Port
//!
//! Abstract interface for loading the initial deck.

use crate::domain::{errors::DomainError, Match, Profile};

/// Loads the profiles (and optional pre-existing matches) a session starts with
pub trait ProfileSource {
    /// Load the swipe deck
    fn load_profiles(&self) -> Result<Vec<Profile>, DomainError>;

    /// Matches that already exist when the session starts
    ///
    /// Receives the loaded deck so seeded matches can embed those profiles.
    fn seed_matches(&self, _profiles: &[Profile]) -> Result<Vec<Match>, DomainError> {
        Ok(Vec::new())
    }
}
