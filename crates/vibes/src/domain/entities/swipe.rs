//! SwipeDecision - A single gesture on the top card

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::value_objects::SwipeKind;

/// A swipe on a profile, consumed once by the store
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SwipeDecision {
    pub kind: SwipeKind,
    /// Id of the profile the user saw when swiping
    pub profile_id: String,
    pub timestamp: DateTime<Utc>,
}

impl SwipeDecision {
    /// Create a decision stamped with the current time
    pub fn new(kind: SwipeKind, profile_id: impl Into<String>) -> Self {
        Self {
            kind,
            profile_id: profile_id.into(),
            timestamp: Utc::now(),
        }
    }

    pub fn like(profile_id: impl Into<String>) -> Self {
        Self::new(SwipeKind::Like, profile_id)
    }

    pub fn pass(profile_id: impl Into<String>) -> Self {
        Self::new(SwipeKind::Pass, profile_id)
    }
}
