//! Feed screen: story rail above the thread and post list.

use std::collections::HashSet;

use jiff::Timestamp;
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Padding, Paragraph};

use crate::data::Feed;
use crate::model::{MediaKind, Post, StoryId};
use crate::text::{compact_count, relative_time};

/// Which part of the screen holds the cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedFocus {
    Rail,
    Posts,
}

pub struct FeedScreen {
    focus: FeedFocus,
    rail_index: usize,
    post_cursor: usize,
    /// Likes toggled this session. Display-only; the underlying stats
    /// stay untouched.
    liked: HashSet<u64>,
}

impl FeedScreen {
    pub fn new() -> Self {
        Self {
            focus: FeedFocus::Rail,
            rail_index: 0,
            post_cursor: 0,
            liked: HashSet::new(),
        }
    }

    pub fn focus(&self) -> FeedFocus {
        self.focus
    }

    /// Rail slots: the own story first, then the catalog in order.
    fn rail_len(feed: &Feed) -> usize {
        1 + feed.stories.stories.len()
    }

    /// The story id under the rail cursor.
    pub fn selected_story(&self, feed: &Feed) -> StoryId {
        if self.rail_index == 0 {
            feed.stories.own.id
        } else {
            feed.stories.stories[self.rail_index - 1].id
        }
    }

    pub fn rail_left(&mut self) {
        if self.rail_index > 0 {
            self.rail_index -= 1;
        }
    }

    pub fn rail_right(&mut self, feed: &Feed) {
        if self.rail_index + 1 < Self::rail_len(feed) {
            self.rail_index += 1;
        }
    }

    pub fn move_up(&mut self) {
        match self.focus {
            FeedFocus::Rail => {}
            FeedFocus::Posts => {
                if self.post_cursor > 0 {
                    self.post_cursor -= 1;
                } else {
                    self.focus = FeedFocus::Rail;
                }
            }
        }
    }

    pub fn move_down(&mut self, feed: &Feed) {
        match self.focus {
            FeedFocus::Rail => self.focus = FeedFocus::Posts,
            FeedFocus::Posts => {
                if self.post_cursor + 1 < Self::posts(feed).len() {
                    self.post_cursor += 1;
                }
            }
        }
    }

    /// Toggles a like on the post under the cursor.
    pub fn toggle_like(&mut self, feed: &Feed) {
        if self.focus != FeedFocus::Posts {
            return;
        }
        if let Some(post) = Self::posts(feed).get(self.post_cursor) {
            let id = post.id;
            if !self.liked.remove(&id) {
                self.liked.insert(id);
            }
        }
    }

    /// Posts in display order: each thread's root, then its replies.
    fn posts(feed: &Feed) -> Vec<&Post> {
        feed.threads
            .iter()
            .flat_map(|t| std::iter::once(&t.root).chain(t.replies.iter()))
            .collect()
    }

    /// Clamp cursors after the feed changes (e.g. a new post landed).
    pub fn reset_cursor(&mut self) {
        self.post_cursor = 0;
        self.focus = FeedFocus::Posts;
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, feed: &Feed, now: Timestamp) {
        let chunks = Layout::vertical([
            Constraint::Length(2), // story rail
            Constraint::Min(0),    // posts
        ])
        .split(area);

        self.render_rail(frame, chunks[0], feed);
        self.render_posts(frame, chunks[1], feed, now);
    }

    fn render_rail(&self, frame: &mut Frame, area: Rect, feed: &Feed) {
        let muted = Style::default().fg(Color::DarkGray);
        let normal = Style::default().fg(Color::Gray);
        let highlight = Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD);

        let mut spans = Vec::new();
        for i in 0..Self::rail_len(feed) {
            let (label, seen) = if i == 0 {
                ("your story".to_string(), feed.stories.own.seen)
            } else {
                let story = &feed.stories.stories[i - 1];
                (story.author_handle.clone(), story.seen)
            };

            let selected = self.focus == FeedFocus::Rail && i == self.rail_index;
            let style = if selected {
                highlight
            } else if seen {
                muted
            } else {
                normal
            };
            let ring = if seen { "○" } else { "●" };
            let cell = if selected {
                format!("›{ring} {label} ")
            } else {
                format!(" {ring} {label} ")
            };
            spans.push(Span::styled(cell, style));
        }

        let rail = Paragraph::new(Line::from(spans))
            .block(Block::default().padding(Padding::new(2, 2, 0, 0)));
        frame.render_widget(rail, area);
    }

    fn render_posts(&self, frame: &mut Frame, area: Rect, feed: &Feed, now: Timestamp) {
        let muted = Style::default().fg(Color::DarkGray);
        let normal = Style::default().fg(Color::Gray);
        let bright = Style::default().fg(Color::White);
        let highlight = bright.add_modifier(Modifier::BOLD);

        let mut lines: Vec<Line> = Vec::new();
        let mut starts: Vec<usize> = Vec::new();
        let mut index = 0usize;

        for thread in &feed.threads {
            for (post, is_reply) in std::iter::once((&thread.root, false))
                .chain(thread.replies.iter().map(|r| (r, true)))
            {
                starts.push(lines.len());
                let selected = self.focus == FeedFocus::Posts && index == self.post_cursor;
                let indent = if is_reply { "│  " } else { "" };
                let pointer = if selected { "› " } else { "  " };
                let header_style = if selected { highlight } else { normal };

                let verified = if post.author.verified { " ✓" } else { "" };
                lines.push(Line::from(vec![
                    Span::styled(format!("{pointer}{indent}"), header_style),
                    Span::styled(format!("@{}", post.author.handle), header_style),
                    Span::styled(format!(" ({}){verified}", post.author.name), muted),
                    Span::styled(
                        format!(" · {}", relative_time(post.posted_at, now)),
                        muted,
                    ),
                ]));

                for body_line in post.body.lines() {
                    lines.push(Line::from(Span::styled(
                        format!("  {indent}{body_line}"),
                        if selected { bright } else { normal },
                    )));
                }

                if let Some(media) = &post.media {
                    let kind = match media.kind {
                        MediaKind::Image => "image",
                        MediaKind::Video => "video",
                    };
                    lines.push(Line::from(Span::styled(
                        format!("  {indent}[{kind}] {}", media.url),
                        muted,
                    )));
                }

                let liked = self.liked.contains(&post.id);
                let heart = if liked { "♥" } else { "♡" };
                let likes = post.stats.likes + u64::from(liked);
                let heart_style = if liked {
                    Style::default().fg(Color::Red)
                } else {
                    muted
                };
                lines.push(Line::from(vec![
                    Span::styled(format!("  {indent}{heart} "), heart_style),
                    Span::styled(compact_count(likes), heart_style),
                    Span::styled(
                        format!(
                            "  ↳ {}  ⇄ {}",
                            compact_count(post.stats.comments),
                            compact_count(post.stats.reposts)
                        ),
                        muted,
                    ),
                ]));
                lines.push(Line::from(""));
                index += 1;
            }
        }

        // Keep the selected post in view.
        let offset = if self.focus == FeedFocus::Posts {
            starts
                .get(self.post_cursor)
                .copied()
                .unwrap_or(0)
                .saturating_sub(1)
        } else {
            0
        };

        #[allow(clippy::cast_possible_truncation)]
        let posts = Paragraph::new(lines)
            .block(Block::default().padding(Padding::new(2, 2, 0, 0)))
            .scroll((offset.min(u16::MAX as usize) as u16, 0));
        frame.render_widget(posts, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::data::Feed;

    #[test]
    fn rail_cursor_clamps_at_both_ends() {
        let feed = Feed::sample();
        let mut screen = FeedScreen::new();

        screen.rail_left();
        assert_eq!(screen.selected_story(&feed), feed.stories.own.id);

        for _ in 0..100 {
            screen.rail_right(&feed);
        }
        let last = feed.stories.stories.last().unwrap().id;
        assert_eq!(screen.selected_story(&feed), last);
    }

    #[test]
    fn moving_down_from_the_rail_enters_the_posts() {
        let feed = Feed::sample();
        let mut screen = FeedScreen::new();
        assert_eq!(screen.focus(), FeedFocus::Rail);

        screen.move_down(&feed);
        assert_eq!(screen.focus(), FeedFocus::Posts);

        screen.move_up();
        assert_eq!(screen.focus(), FeedFocus::Rail);
    }

    #[test]
    fn like_toggles_only_under_posts_focus() {
        let feed = Feed::sample();
        let mut screen = FeedScreen::new();

        screen.toggle_like(&feed); // rail focus: ignored
        assert!(screen.liked.is_empty());

        screen.move_down(&feed);
        screen.toggle_like(&feed);
        assert_eq!(screen.liked.len(), 1);

        screen.toggle_like(&feed);
        assert!(screen.liked.is_empty());
    }
}
