//! Story types: ephemeral content and the catalog the viewer walks.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier of a story, stable for the lifetime of the catalog.
/// The viewing user's own story uses the reserved id 0 by convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StoryId(pub u64);

impl fmt::Display for StoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// One unit of story content.
///
/// Tagged enum so each variant carries exactly the payload its kind needs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum ContentItem {
    Image { media_url: String },
    Video { media_url: String },
    Text { text: String },
}

/// One author's story: an ordered run of content items.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Story {
    pub id: StoryId,

    pub author_handle: String,

    pub avatar_url: Option<String>,

    /// Whether the viewing user has already consumed this story.
    /// Cosmetic only; the viewer session never reads or writes it.
    pub seen: bool,

    /// Invariant: never empty. `data::Feed::load` rejects violations
    /// before a catalog reaches the viewer.
    pub items: Vec<ContentItem>,
}

/// The ordered stories offered to the viewer, plus the viewing user's
/// own entry point (which is not part of the sequence).
///
/// Owned by the app; the viewer session only ever reads it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoryCatalog {
    pub own: Story,
    pub stories: Vec<Story>,
}

impl StoryCatalog {
    /// Resolves an id over the own story and the catalog sequence.
    pub fn get(&self, id: StoryId) -> Option<&Story> {
        if self.own.id == id {
            return Some(&self.own);
        }
        self.stories.iter().find(|s| s.id == id)
    }

    /// Marks a story seen. Caller-side bookkeeping; the viewer session
    /// observes state changes but never touches the catalog.
    pub fn mark_seen(&mut self, id: StoryId) {
        if self.own.id == id {
            self.own.seen = true;
        } else if let Some(story) = self.stories.iter_mut().find(|s| s.id == id) {
            story.seen = true;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn story(id: u64, handle: &str) -> Story {
        Story {
            id: StoryId(id),
            author_handle: handle.into(),
            avatar_url: None,
            seen: false,
            items: vec![ContentItem::Text {
                text: "hello".into(),
            }],
        }
    }

    fn catalog() -> StoryCatalog {
        StoryCatalog {
            own: story(0, "you"),
            stories: vec![story(1, "alex_design"), story(2, "maria")],
        }
    }

    #[test]
    fn get_resolves_own_and_listed_stories() {
        let catalog = catalog();

        assert_eq!(catalog.get(StoryId(0)).unwrap().author_handle, "you");
        assert_eq!(catalog.get(StoryId(2)).unwrap().author_handle, "maria");
        assert!(catalog.get(StoryId(9)).is_none());
    }

    #[test]
    fn mark_seen_flags_only_the_target() {
        let mut catalog = catalog();

        catalog.mark_seen(StoryId(1));

        assert!(catalog.stories[0].seen);
        assert!(!catalog.stories[1].seen);
        assert!(!catalog.own.seen);
    }

    #[test]
    fn mark_seen_unknown_id_is_a_noop() {
        let mut catalog = catalog();
        catalog.mark_seen(StoryId(9));

        assert!(!catalog.own.seen);
        assert!(catalog.stories.iter().all(|s| !s.seen));
    }
}
