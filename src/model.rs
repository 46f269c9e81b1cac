//! Core data model for skein.
//!
//! These types represent the feed's conceptual units:
//! authors, posts and threads, stories, conversations, and clips.

mod author;
mod clip;
mod explore;
mod message;
mod post;
mod story;

pub use author::{Author, Profile};
pub use clip::Clip;
pub use explore::{SuggestedUser, TrendingTopic};
pub use message::{ChatMessage, Conversation, DeliveryStatus, MessageBody, Sender};
pub use post::{Media, MediaKind, Post, PostStats, Thread};
pub use story::{ContentItem, Story, StoryCatalog, StoryId};
