//! The content bundle the client renders.
//!
//! Either the built-in sample bundle or a JSON file supplied with
//! `--feed`. Loading is the boundary where data-model invariants are
//! enforced: a story with no items is rejected here, so the viewer never
//! sees one.

mod sample;

use std::path::Path;
use std::{fs, io};

use serde::{Deserialize, Serialize};

use crate::model::{
    Clip, Conversation, Post, Profile, StoryCatalog, StoryId, SuggestedUser, Thread, TrendingTopic,
};

/// Errors loading a feed bundle.
#[derive(Debug, thiserror::Error)]
pub enum DataError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("story {id} has no items")]
    EmptyStory { id: StoryId },
}

/// Everything the client shows.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Feed {
    pub threads: Vec<Thread>,
    pub stories: StoryCatalog,
    pub conversations: Vec<Conversation>,
    pub clips: Vec<Clip>,
    pub trending: Vec<TrendingTopic>,
    pub suggested: Vec<SuggestedUser>,
    pub profile: Profile,
    pub own_posts: Vec<Post>,
}

impl Feed {
    /// The built-in sample bundle.
    pub fn sample() -> Self {
        sample::feed()
    }

    /// Loads a bundle from a JSON file and validates story invariants.
    pub fn load(path: &Path) -> Result<Self, DataError> {
        let json = fs::read_to_string(path)?;
        let feed: Self = serde_json::from_str(&json)?;
        feed.validate()?;
        Ok(feed)
    }

    fn validate(&self) -> Result<(), DataError> {
        let all = std::iter::once(&self.stories.own).chain(self.stories.stories.iter());
        for story in all {
            if story.items.is_empty() {
                return Err(DataError::EmptyStory { id: story.id });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use tempfile::TempDir;

    #[test]
    fn sample_bundle_satisfies_story_invariants() {
        let feed = Feed::sample();

        assert!(feed.validate().is_ok());
        assert!(!feed.threads.is_empty());
        assert!(!feed.stories.stories.is_empty());
        assert!(!feed.conversations.is_empty());
        assert!(!feed.clips.is_empty());
    }

    #[test]
    fn load_round_trips_the_sample_bundle() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("feed.json");
        let json = serde_json::to_string_pretty(&Feed::sample()).unwrap();
        fs::write(&path, json).unwrap();

        let feed = Feed::load(&path).unwrap();

        assert_eq!(feed.threads.len(), Feed::sample().threads.len());
        assert_eq!(
            feed.stories.stories.len(),
            Feed::sample().stories.stories.len()
        );
    }

    #[test]
    fn load_rejects_a_story_with_no_items() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("feed.json");

        let mut feed = Feed::sample();
        feed.stories.stories[0].items.clear();
        let id = feed.stories.stories[0].id;
        fs::write(&path, serde_json::to_string(&feed).unwrap()).unwrap();

        let err = Feed::load(&path).unwrap_err();

        assert!(matches!(err, DataError::EmptyStory { id: got } if got == id));
    }

    #[test]
    fn load_missing_file_is_an_io_error() {
        let dir = TempDir::new().unwrap();
        let err = Feed::load(&dir.path().join("absent.json")).unwrap_err();

        assert!(matches!(err, DataError::Io(_)));
    }
}
