//! Compose screen: write a new post.

use jiff::Timestamp;
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Padding, Paragraph, Wrap};

use crate::model::{Author, Post, PostStats};

/// Who a new post is visible to. Draft state only; posts carry no
/// audience field once published.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    Public,
    Friends,
    Private,
}

impl Visibility {
    fn label(self) -> &'static str {
        match self {
            Self::Public => "public",
            Self::Friends => "friends only",
            Self::Private => "private",
        }
    }

    fn next(self) -> Self {
        match self {
            Self::Public => Self::Friends,
            Self::Friends => Self::Private,
            Self::Private => Self::Public,
        }
    }
}

pub struct ComposeScreen {
    caption: String,
    visibility: Visibility,
}

impl ComposeScreen {
    pub fn new() -> Self {
        Self {
            caption: String::new(),
            visibility: Visibility::Public,
        }
    }

    pub fn on_char(&mut self, c: char) {
        self.caption.push(c);
    }

    pub fn on_backspace(&mut self) {
        self.caption.pop();
    }

    pub fn cycle_visibility(&mut self) {
        self.visibility = self.visibility.next();
    }

    /// Handle Enter. Returns the new post when the caption is non-empty;
    /// an empty caption is rejected and the screen left as-is.
    pub fn submit(&mut self, author: Author, id: u64, now: Timestamp) -> Option<Post> {
        let body = self.caption.trim().to_string();
        if body.is_empty() {
            return None;
        }

        self.caption.clear();
        self.visibility = Visibility::Public;

        Some(Post {
            id,
            author,
            body,
            media: None,
            posted_at: now,
            stats: PostStats::default(),
        })
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let muted = Style::default().fg(Color::DarkGray);
        let bright = Style::default().fg(Color::White);
        let highlight = bright.add_modifier(Modifier::BOLD);

        let chunks = Layout::vertical([
            Constraint::Length(2), // header
            Constraint::Min(0),    // caption
            Constraint::Length(1), // visibility
        ])
        .split(area);

        let header = Paragraph::new(vec![
            Line::from(Span::styled("New post", highlight)),
            Line::from(Span::styled(
                "type your caption · ⏎ post · ↓ audience",
                muted,
            )),
        ])
        .block(Block::default().padding(Padding::new(2, 2, 1, 0)));
        frame.render_widget(header, chunks[0]);

        let caption = Paragraph::new(Line::from(vec![
            Span::styled("› ", highlight),
            Span::styled(self.caption.clone(), bright),
            Span::styled("█", muted),
        ]))
        .wrap(Wrap { trim: false })
        .block(Block::default().padding(Padding::new(2, 2, 0, 0)));
        frame.render_widget(caption, chunks[1]);

        let visibility = Paragraph::new(Line::from(Span::styled(
            format!(" audience: {}", self.visibility.label()),
            muted,
        )));
        frame.render_widget(visibility, chunks[2]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn author() -> Author {
        Author {
            id: 1,
            handle: "you".into(),
            name: "you".into(),
            avatar_url: None,
            verified: false,
        }
    }

    fn type_str(screen: &mut ComposeScreen, s: &str) {
        for c in s.chars() {
            screen.on_char(c);
        }
    }

    #[test]
    fn empty_caption_is_rejected() {
        let mut screen = ComposeScreen::new();
        type_str(&mut screen, "   ");

        assert!(screen.submit(author(), 10, Timestamp::now()).is_none());
    }

    #[test]
    fn submit_builds_a_post_and_clears_the_draft() {
        let mut screen = ComposeScreen::new();
        type_str(&mut screen, "Hello from the terminal!");
        screen.cycle_visibility();

        let post = screen.submit(author(), 10, Timestamp::now()).unwrap();

        assert_eq!(post.id, 10);
        assert_eq!(post.body, "Hello from the terminal!");
        assert_eq!(post.stats.likes, 0);
        assert!(post.media.is_none());

        // Draft state resets for the next post.
        assert!(screen.caption.is_empty());
        assert_eq!(screen.visibility, Visibility::Public);
    }

    #[test]
    fn visibility_cycles_through_all_audiences() {
        let mut screen = ComposeScreen::new();
        assert_eq!(screen.visibility, Visibility::Public);

        screen.cycle_visibility();
        assert_eq!(screen.visibility, Visibility::Friends);

        screen.cycle_visibility();
        assert_eq!(screen.visibility, Visibility::Private);

        screen.cycle_visibility();
        assert_eq!(screen.visibility, Visibility::Public);
    }
}
