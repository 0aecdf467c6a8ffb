//! JSON Profile Source
//!
//! Loads the deck and seeded matches from a JSON document:
//!
//! ```json
//! {
//!   "profiles": [ { "id": "spicy_1", "name": "...", "age": 25, "vibe": "spicy", ... } ],
//!   "seeded_matches": [
//!     { "profile_id": "spicy_1", "minutes_ago": 240,
//!       "conversation": [ { "sender_id": "spicy_1", "content": "hey", "minutes_ago": 30 } ] }
//!   ]
//! }
//! ```

use std::collections::HashSet;
use std::path::Path;

use chrono::{DateTime, TimeDelta, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::{DomainError, Match, Message, MessageKind, NewMessage, Profile};
use crate::ports::ProfileSource;

const BUNDLED_DECK: &str = include_str!("../../data/demo_deck.json");

/// Top-level seed document
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SeedDocument {
    #[serde(default)]
    pub profiles: Vec<Profile>,
    #[serde(default)]
    pub seeded_matches: Vec<SeedMatch>,
}

/// A match that exists before the session starts
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedMatch {
    pub profile_id: String,
    /// How long before load time the match happened
    #[serde(default)]
    pub minutes_ago: i64,
    #[serde(default)]
    pub conversation: Vec<SeedMessage>,
}

/// A canned conversation line
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedMessage {
    pub sender_id: String,
    pub content: String,
    #[serde(default)]
    pub kind: MessageKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reaction: Option<String>,
    #[serde(default)]
    pub minutes_ago: i64,
}

/// Profile source backed by a parsed JSON document
#[derive(Debug, Clone)]
pub struct JsonProfileSource {
    document: SeedDocument,
}

impl JsonProfileSource {
    /// Parse a seed document, rejecting duplicate profile ids
    pub fn parse(json: &str) -> Result<Self, DomainError> {
        let document: SeedDocument = serde_json::from_str(json)
            .map_err(|e| DomainError::SeedData(format!("Invalid seed JSON: {}", e)))?;

        let mut seen = HashSet::new();
        for profile in &document.profiles {
            if !seen.insert(profile.id.as_str()) {
                return Err(DomainError::SeedData(format!(
                    "Duplicate profile id: {}",
                    profile.id
                )));
            }
        }

        Ok(Self { document })
    }

    /// Read and parse a seed file
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, DomainError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|e| {
            DomainError::SeedData(format!("Failed to read {}: {}", path.display(), e))
        })?;
        Self::parse(&json)
    }

    /// The demo deck compiled into the library
    pub fn bundled() -> Result<Self, DomainError> {
        Self::parse(BUNDLED_DECK)
    }

    pub fn document(&self) -> &SeedDocument {
        &self.document
    }
}

impl ProfileSource for JsonProfileSource {
    fn load_profiles(&self) -> Result<Vec<Profile>, DomainError> {
        Ok(self.document.profiles.clone())
    }

    fn seed_matches(&self, profiles: &[Profile]) -> Result<Vec<Match>, DomainError> {
        let now = Utc::now();
        let mut matches = Vec::with_capacity(self.document.seeded_matches.len());
        let mut seeded = HashSet::new();

        for seed in &self.document.seeded_matches {
            let Some(profile) = profiles.iter().find(|p| p.id == seed.profile_id) else {
                tracing::warn!("Skipping seeded match for unknown profile {}", seed.profile_id);
                continue;
            };
            if !seeded.insert(profile.id.as_str()) {
                tracing::warn!("Skipping duplicate seeded match for {}", profile.id);
                continue;
            }

            let mut conversation = Vec::with_capacity(seed.conversation.len());
            for line in &seed.conversation {
                let draft = NewMessage {
                    sender_id: line.sender_id.clone(),
                    content: line.content.clone(),
                    kind: line.kind,
                    reaction: line.reaction.clone(),
                };
                let sent_at = minutes_before(now, line.minutes_ago)?;
                conversation.push(Message::stamp_at(draft, sent_at));
            }

            matches.push(Match::seeded(
                profile.clone(),
                minutes_before(now, seed.minutes_ago)?,
                conversation,
            ));
        }

        Ok(matches)
    }
}

/// `now` shifted back by `minutes`, rejecting offsets chrono cannot represent
fn minutes_before(now: DateTime<Utc>, minutes: i64) -> Result<DateTime<Utc>, DomainError> {
    TimeDelta::try_minutes(minutes)
        .and_then(|offset| now.checked_sub_signed(offset))
        .ok_or_else(|| {
            DomainError::SeedData(format!("minutes_ago out of range: {}", minutes))
        })
}
