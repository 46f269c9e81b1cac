//! Short-video clip types.

use serde::{Deserialize, Serialize};

use super::{Author, PostStats};

/// One clip in the short-video feed.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Clip {
    pub id: u64,
    pub author: Author,
    pub caption: String,
    pub media_url: String,
    pub stats: PostStats,
}
