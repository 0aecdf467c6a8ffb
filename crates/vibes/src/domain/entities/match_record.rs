//! Match - A mutual like with its conversation
//!
//! Pure domain entity without infrastructure dependencies.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::entities::{Message, Profile};

/// Match - Embeds a snapshot of the profile it was created from
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Match {
    pub id: String,
    pub profile: Profile,
    pub matched_at: DateTime<Utc>,
    /// Append-only, in insertion order
    #[serde(default)]
    pub conversation: Vec<Message>,
}

impl Match {
    /// Create a new match with a generated ID and an empty conversation
    pub fn new(profile: Profile) -> Self {
        Self {
            id: format!("match_{}", uuid::Uuid::new_v4().simple()),
            profile,
            matched_at: Utc::now(),
            conversation: Vec::new(),
        }
    }

    /// Pre-existing match loaded with seed data
    ///
    /// The ID is derived from the profile so seeded matches are stable
    /// across runs.
    pub fn seeded(profile: Profile, matched_at: DateTime<Utc>, conversation: Vec<Message>) -> Self {
        Self {
            id: format!("match_{}", profile.id),
            profile,
            matched_at,
            conversation,
        }
    }

    /// Most recent message, if any
    pub fn last_message(&self) -> Option<&Message> {
        self.conversation.last()
    }
}
