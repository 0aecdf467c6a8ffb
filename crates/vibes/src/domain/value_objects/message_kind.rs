//! MessageKind - Chat message classification

use serde::{Deserialize, Serialize};

/// Message kind
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum MessageKind {
    #[default]
    Text,
    Voice,
    Gif,
    Reaction,
}

impl std::fmt::Display for MessageKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MessageKind::Text => write!(f, "text"),
            MessageKind::Voice => write!(f, "voice"),
            MessageKind::Gif => write!(f, "gif"),
            MessageKind::Reaction => write!(f, "reaction"),
        }
    }
}

impl std::str::FromStr for MessageKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(MessageKind::Text),
            "voice" => Ok(MessageKind::Voice),
            "gif" => Ok(MessageKind::Gif),
            "reaction" => Ok(MessageKind::Reaction),
            _ => Err(format!("Unknown message kind: {}", s)),
        }
    }
}
