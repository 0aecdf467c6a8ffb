//! Vibe - The fixed set of profile categories

use serde::{Deserialize, Serialize};

/// Vibe classification shared by profiles and like counters
#[derive(
    Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq, PartialOrd, Ord, Hash,
)]
#[serde(rename_all = "lowercase")]
pub enum Vibe {
    #[default]
    Spicy,
    Chill,
    Urban,
    Artsy,
    Dluxe,
}

impl Vibe {
    /// Every vibe, in board order
    pub const ALL: [Vibe; 5] = [
        Vibe::Spicy,
        Vibe::Chill,
        Vibe::Urban,
        Vibe::Artsy,
        Vibe::Dluxe,
    ];

    /// Human-facing label
    pub fn display_name(&self) -> &'static str {
        match self {
            Vibe::Spicy => "Spicy",
            Vibe::Chill => "Chill",
            Vibe::Urban => "Urban",
            Vibe::Artsy => "Artsy",
            Vibe::Dluxe => "DLuxe",
        }
    }

    pub fn emoji(&self) -> &'static str {
        match self {
            Vibe::Spicy => "🌶️",
            Vibe::Chill => "😌",
            Vibe::Urban => "🏙️",
            Vibe::Artsy => "🎨",
            Vibe::Dluxe => "💎",
        }
    }

    /// Short pitch shown when picking a vibe
    pub fn tagline(&self) -> &'static str {
        match self {
            Vibe::Spicy => "For the fierce and fiery queens",
            Vibe::Chill => "Zen vibes and peaceful glamour",
            Vibe::Urban => "Street smart with runway dreams",
            Vibe::Artsy => "Creative souls and artistic hearts",
            Vibe::Dluxe => "Luxury lifestyle and high-class sass",
        }
    }
}

impl std::fmt::Display for Vibe {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Vibe::Spicy => write!(f, "spicy"),
            Vibe::Chill => write!(f, "chill"),
            Vibe::Urban => write!(f, "urban"),
            Vibe::Artsy => write!(f, "artsy"),
            Vibe::Dluxe => write!(f, "dluxe"),
        }
    }
}

impl std::str::FromStr for Vibe {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "spicy" => Ok(Vibe::Spicy),
            "chill" => Ok(Vibe::Chill),
            "urban" => Ok(Vibe::Urban),
            "artsy" => Ok(Vibe::Artsy),
            "dluxe" => Ok(Vibe::Dluxe),
            _ => Err(format!("Unknown vibe: {}", s)),
        }
    }
}
