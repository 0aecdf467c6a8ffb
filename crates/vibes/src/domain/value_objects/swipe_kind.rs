//! SwipeKind - What the user did with a card

use serde::{Deserialize, Serialize};

/// Swipe decision kind
///
/// `Boots` and `Wig` are the two superlikes. They can produce a match
/// like `Like` does but are not counted as likes given.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum SwipeKind {
    Like,
    Pass,
    Boots,
    Wig,
}

impl SwipeKind {
    /// Whether this decision can create a match
    pub fn is_positive(&self) -> bool {
        !matches!(self, SwipeKind::Pass)
    }

    pub fn is_superlike(&self) -> bool {
        matches!(self, SwipeKind::Boots | SwipeKind::Wig)
    }
}

impl std::fmt::Display for SwipeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SwipeKind::Like => write!(f, "like"),
            SwipeKind::Pass => write!(f, "pass"),
            SwipeKind::Boots => write!(f, "boots"),
            SwipeKind::Wig => write!(f, "wig"),
        }
    }
}

impl std::str::FromStr for SwipeKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "like" | "right" => Ok(SwipeKind::Like),
            "pass" | "left" => Ok(SwipeKind::Pass),
            "boots" => Ok(SwipeKind::Boots),
            "wig" => Ok(SwipeKind::Wig),
            _ => Err(format!("Unknown swipe kind: {}", s)),
        }
    }
}
