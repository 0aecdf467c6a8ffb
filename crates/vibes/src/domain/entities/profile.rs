//! Profile - A card in the swipe deck
//!
//! Pure domain entity without infrastructure dependencies.

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::Vibe;

/// Personality block shown on the back of a card
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Personality {
    pub style: String,
    pub catchphrase: String,
    #[serde(default)]
    pub interests: Vec<String>,
    pub signature_move: String,
}

/// Profile - Someone the user can swipe on
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub id: String,
    pub name: String,
    pub age: u32,
    pub vibe: Vibe,
    #[serde(default)]
    pub bio: String,
    #[serde(default)]
    pub images: Vec<String>,
    /// Distance in km, when known
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub distance: Option<f64>,
    #[serde(default)]
    pub personality: Personality,
}

impl Profile {
    /// Create a profile with an empty bio, no images and a blank personality
    pub fn new(id: impl Into<String>, name: impl Into<String>, age: u32, vibe: Vibe) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            age,
            vibe,
            bio: String::new(),
            images: Vec::new(),
            distance: None,
            personality: Personality::default(),
        }
    }

    pub fn with_bio(mut self, bio: impl Into<String>) -> Self {
        self.bio = bio.into();
        self
    }

    pub fn with_images(mut self, images: Vec<String>) -> Self {
        self.images = images;
        self
    }

    pub fn with_distance(mut self, distance: f64) -> Self {
        self.distance = Some(distance);
        self
    }

    pub fn with_personality(mut self, personality: Personality) -> Self {
        self.personality = personality;
        self
    }
}

/// The local user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentUser {
    pub id: String,
    pub name: String,
    pub age: u32,
    pub vibes: Vec<Vibe>,
    pub bio: String,
    pub images: Vec<String>,
}

impl Default for CurrentUser {
    fn default() -> Self {
        Self {
            id: "themistressd".to_string(),
            name: "themistressd".to_string(),
            age: 28,
            vibes: Vibe::ALL.to_vec(),
            bio: "UNIVERSO VIBES - Living my best drag fantasy across all dimensions 💅✨"
                .to_string(),
            images: vec![
                "/api/placeholder/400/600".to_string(),
                "/api/placeholder/400/600".to_string(),
            ],
        }
    }
}
