//! Story viewer session: navigation across stories and their items.
//!
//! A session walks a two-level sequence (stories, and items within each
//! story) with forward and backward moves that cross story boundaries
//! transparently. The session owns all navigation state; the catalog it
//! walks belongs to the caller and is only ever read.

use thiserror::Error;

use crate::model::{ContentItem, Story, StoryCatalog, StoryId};

/// Errors from viewer operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ViewerError {
    #[error("no story with id {0}")]
    NotFound(StoryId),
}

/// Where an open session sits: a position in the traversal sequence and
/// an item index within that story's items.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Cursor {
    position: usize,
    item: usize,
}

/// The story viewer. Closed until `open` succeeds; every mutation goes
/// through `open`, `close`, `advance`, or `retreat`, so the state can
/// never name a story outside the traversal sequence.
#[derive(Debug, Default)]
pub struct StoryViewer {
    /// Story ids in traversal order, fixed when a session opens.
    /// The own story leads the sequence only when it was the entry point.
    sequence: Vec<StoryId>,
    cursor: Option<Cursor>,
}

/// Read-only snapshot for rendering one frame of the viewer.
pub struct ViewerSnapshot<'a> {
    pub story: &'a Story,
    pub item: &'a ContentItem,
    pub item_index: usize,
    pub total_items: usize,
}

impl StoryViewer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.cursor.is_some()
    }

    /// Opens a session on the given story at its first item.
    ///
    /// Opening while a session is already running resets to the new story
    /// (last write wins). An unresolvable id leaves all prior state
    /// untouched.
    pub fn open(&mut self, catalog: &StoryCatalog, id: StoryId) -> Result<(), ViewerError> {
        if catalog.get(id).is_none() {
            return Err(ViewerError::NotFound(id));
        }

        let mut sequence = Vec::with_capacity(catalog.stories.len() + 1);
        if id == catalog.own.id {
            sequence.push(catalog.own.id);
        }
        sequence.extend(catalog.stories.iter().map(|s| s.id));

        let Some(position) = sequence.iter().position(|&s| s == id) else {
            return Err(ViewerError::NotFound(id));
        };

        self.sequence = sequence;
        self.cursor = Some(Cursor { position, item: 0 });
        Ok(())
    }

    /// Ends the session. Idempotent.
    pub fn close(&mut self) {
        self.cursor = None;
        self.sequence.clear();
    }

    /// Moves to the next item, or the first item of the next story.
    /// Past the last item of the last story, closes the session.
    ///
    /// No-op while closed.
    pub fn advance(&mut self, catalog: &StoryCatalog) {
        let Some(cursor) = self.cursor else {
            return;
        };
        let Some(story) = self.story_at(catalog, cursor.position) else {
            self.close();
            return;
        };

        if cursor.item + 1 < story.items.len() {
            self.cursor = Some(Cursor {
                item: cursor.item + 1,
                ..cursor
            });
        } else if cursor.position + 1 < self.sequence.len() {
            self.cursor = Some(Cursor {
                position: cursor.position + 1,
                item: 0,
            });
        } else {
            self.close();
        }
    }

    /// Moves to the previous item, or the LAST item of the previous story
    /// (rewinding lands at the end, not the start). At the first item of
    /// the first story this is a no-op; only the far end closes.
    ///
    /// No-op while closed.
    pub fn retreat(&mut self, catalog: &StoryCatalog) {
        let Some(cursor) = self.cursor else {
            return;
        };

        if cursor.item > 0 {
            self.cursor = Some(Cursor {
                item: cursor.item - 1,
                ..cursor
            });
            return;
        }
        if cursor.position == 0 {
            return;
        }

        let previous = cursor.position - 1;
        let Some(story) = self.story_at(catalog, previous) else {
            return;
        };
        self.cursor = Some(Cursor {
            position: previous,
            item: story.items.len().saturating_sub(1),
        });
    }

    /// The id of the story the session currently sits on, if open.
    pub fn active_story_id(&self) -> Option<StoryId> {
        let cursor = self.cursor?;
        self.sequence.get(cursor.position).copied()
    }

    /// The item index within the active story, if open.
    pub fn item_index(&self) -> Option<usize> {
        self.cursor.map(|c| c.item)
    }

    /// Everything the presentation needs to render one frame.
    pub fn snapshot<'a>(&self, catalog: &'a StoryCatalog) -> Option<ViewerSnapshot<'a>> {
        let cursor = self.cursor?;
        let story = self.story_at(catalog, cursor.position)?;
        let item = story.items.get(cursor.item)?;
        Some(ViewerSnapshot {
            story,
            item,
            item_index: cursor.item,
            total_items: story.items.len(),
        })
    }

    fn story_at<'a>(&self, catalog: &'a StoryCatalog, position: usize) -> Option<&'a Story> {
        self.sequence
            .get(position)
            .and_then(|&id| catalog.get(id))
    }
}
