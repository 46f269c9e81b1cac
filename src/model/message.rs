//! Direct messaging types: conversations and their transcripts.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use super::Author;
use crate::text;

/// A conversation with one peer and its append-only transcript.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Conversation {
    pub id: u64,
    pub peer: Author,
    pub online: bool,
    pub unread: u32,
    pub messages: Vec<ChatMessage>,
}

impl Conversation {
    /// The newest message, shown as the list preview.
    pub fn last_message(&self) -> Option<&ChatMessage> {
        self.messages.last()
    }

    /// Appends a message. The transcript only ever grows.
    pub fn push(&mut self, message: ChatMessage) {
        self.messages.push(message);
    }
}

/// One transcript entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatMessage {
    pub sender: Sender,
    pub body: MessageBody,
    pub sent_at: Timestamp,
    pub status: DeliveryStatus,
}

/// Who sent a message, relative to the viewing user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Sender {
    You,
    Peer,
}

/// Message payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum MessageBody {
    Text { text: String },
    Image { media_url: String },
    Voice { duration_secs: u16 },
}

impl MessageBody {
    /// One-line preview for the conversation list.
    pub fn preview(&self) -> String {
        match self {
            Self::Text { text } => text.clone(),
            Self::Image { .. } => "Sent a photo".to_string(),
            Self::Voice { duration_secs } => {
                format!("Voice message ({})", text::mmss(*duration_secs))
            }
        }
    }
}

/// Delivery state of a sent message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DeliveryStatus {
    Sent,
    Delivered,
    Read,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn previews_summarize_non_text_bodies() {
        let text = MessageBody::Text {
            text: "see you there".into(),
        };
        let image = MessageBody::Image {
            media_url: "https://example.com/a.jpg".into(),
        };
        let voice = MessageBody::Voice { duration_secs: 34 };

        assert_eq!(text.preview(), "see you there");
        assert_eq!(image.preview(), "Sent a photo");
        assert_eq!(voice.preview(), "Voice message (0:34)");
    }
}
