//! Post and thread types: the feed's primary units.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use super::Author;

/// One post, standalone or as a thread reply.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: u64,
    pub author: Author,
    pub body: String,
    pub media: Option<Media>,
    pub posted_at: Timestamp,
    pub stats: PostStats,
}

/// Engagement counters shown under a post.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct PostStats {
    pub likes: u64,
    pub comments: u64,
    pub reposts: u64,
}

/// Media attached to a post. Rendered as a framed placeholder;
/// decoding and playback are out of scope.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Media {
    pub kind: MediaKind,
    pub url: String,
}

/// The kind of an attached media file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MediaKind {
    Image,
    Video,
}

/// A root post with its ordered replies.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Thread {
    pub root: Post,
    pub replies: Vec<Post>,
}
