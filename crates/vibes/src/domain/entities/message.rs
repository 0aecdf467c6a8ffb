//! Message - One entry in a match's conversation

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::value_objects::MessageKind;

/// A chat message stored locally in a match
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub id: String,
    pub sender_id: String,
    pub content: String,
    pub timestamp: DateTime<Utc>,
    #[serde(default)]
    pub kind: MessageKind,
    /// Reaction payload, only meaningful for `MessageKind::Reaction`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reaction: Option<String>,
}

/// A message as supplied by the sender, before the store stamps it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewMessage {
    pub sender_id: String,
    pub content: String,
    #[serde(default)]
    pub kind: MessageKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reaction: Option<String>,
}

impl NewMessage {
    /// Plain text message
    pub fn text(sender_id: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            sender_id: sender_id.into(),
            content: content.into(),
            kind: MessageKind::Text,
            reaction: None,
        }
    }

    /// Reaction message carrying an emoji payload
    pub fn reaction(sender_id: impl Into<String>, reaction: impl Into<String>) -> Self {
        let reaction = reaction.into();
        Self {
            sender_id: sender_id.into(),
            content: reaction.clone(),
            kind: MessageKind::Reaction,
            reaction: Some(reaction),
        }
    }

    pub fn with_kind(mut self, kind: MessageKind) -> Self {
        self.kind = kind;
        self
    }
}

impl Message {
    /// Stamp a new message with a generated ID and the current time
    pub fn stamp(message: NewMessage) -> Self {
        Self::stamp_at(message, Utc::now())
    }

    /// Stamp a new message with a generated ID and an explicit time
    pub fn stamp_at(message: NewMessage, timestamp: DateTime<Utc>) -> Self {
        let reaction = match message.kind {
            MessageKind::Reaction => message.reaction,
            _ => None,
        };
        Self {
            id: format!("msg_{}", uuid::Uuid::new_v4().simple()),
            sender_id: message.sender_id,
            content: message.content,
            timestamp,
            kind: message.kind,
            reaction,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stamp_drops_reaction_on_text() {
        let mut draft = NewMessage::text("me", "hi");
        draft.reaction = Some("🔥".to_string());
        let message = Message::stamp(draft);
        assert_eq!(message.kind, MessageKind::Text);
        assert!(message.reaction.is_none());
        assert!(message.id.starts_with("msg_"));
    }

    #[test]
    fn test_stamp_keeps_reaction_payload() {
        let message = Message::stamp(NewMessage::reaction("me", "💅"));
        assert_eq!(message.kind, MessageKind::Reaction);
        assert_eq!(message.reaction.as_deref(), Some("💅"));
    }

    #[test]
    fn test_with_kind_marks_voice_note() {
        let draft = NewMessage::text("me", "listen to this").with_kind(MessageKind::Voice);
        let message = Message::stamp(draft);
        assert_eq!(message.kind, MessageKind::Voice);
        assert_eq!(message.content, "listen to this");
        assert!(message.reaction.is_none());
    }

    #[test]
    fn test_stamped_ids_are_unique() {
        let a = Message::stamp(NewMessage::text("me", "a"));
        let b = Message::stamp(NewMessage::text("me", "a"));
        assert_ne!(a.id, b.id);
    }
}
