//! Author identity and the viewing user's profile.

use serde::{Deserialize, Serialize};

/// Display identity attached to posts, clips, and conversations.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Author {
    pub id: u64,
    pub handle: String,
    pub name: String,
    pub avatar_url: Option<String>,
    pub verified: bool,
}

/// The viewing user's profile header.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub author: Author,
    pub bio: String,
    pub followers: u64,
    pub following: u64,
    pub post_count: u64,
}
