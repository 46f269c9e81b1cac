//! Explore page records: trending topics and suggested users.

use serde::{Deserialize, Serialize};

use super::Author;

/// A topic with recent posting volume.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrendingTopic {
    pub name: String,
    pub post_count: u64,
}

/// An author suggested for following.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SuggestedUser {
    pub author: Author,
    pub followers: u64,
}
