//! Profile screen: header, stats, and the user's own posts.

use jiff::Timestamp;
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Padding, Paragraph};

use crate::data::Feed;
use crate::model::MediaKind;
use crate::text::{compact_count, relative_time};

pub struct ProfileScreen {
    grid: bool,
    cursor: usize,
}

impl ProfileScreen {
    pub fn new() -> Self {
        Self {
            grid: true,
            cursor: 0,
        }
    }

    /// Switches between the grid and list arrangements.
    pub fn toggle_layout(&mut self) {
        self.grid = !self.grid;
    }

    pub fn move_up(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
        }
    }

    pub fn move_down(&mut self, feed: &Feed) {
        if self.cursor + 1 < feed.own_posts.len() {
            self.cursor += 1;
        }
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, feed: &Feed, now: Timestamp) {
        let chunks = Layout::vertical([
            Constraint::Length(6), // header
            Constraint::Min(0),    // posts
        ])
        .split(area);

        self.render_header(frame, chunks[0], feed);
        if self.grid {
            self.render_grid(frame, chunks[1], feed);
        } else {
            self.render_list(frame, chunks[1], feed, now);
        }
    }

    fn render_header(&self, frame: &mut Frame, area: Rect, feed: &Feed) {
        let muted = Style::default().fg(Color::DarkGray);
        let normal = Style::default().fg(Color::Gray);
        let highlight = Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD);

        let profile = &feed.profile;
        let verified = if profile.author.verified { " ✓" } else { "" };

        let mut lines = vec![Line::from(vec![
            Span::styled(profile.author.name.clone(), highlight),
            Span::styled(format!("{verified}  @{}", profile.author.handle), muted),
        ])];
        for bio_line in profile.bio.lines() {
            lines.push(Line::from(Span::styled(bio_line.to_string(), normal)));
        }
        lines.push(Line::from(Span::styled(
            format!(
                "{} followers · {} following · {} posts",
                compact_count(profile.followers),
                compact_count(profile.following),
                compact_count(profile.post_count)
            ),
            muted,
        )));

        let header = Paragraph::new(lines)
            .block(Block::default().padding(Padding::new(2, 2, 1, 0)));
        frame.render_widget(header, area);
    }

    fn render_grid(&self, frame: &mut Frame, area: Rect, feed: &Feed) {
        let muted = Style::default().fg(Color::DarkGray);
        let normal = Style::default().fg(Color::Gray);
        let highlight = Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD);

        let mut lines: Vec<Line> = Vec::new();
        for (row, chunk) in feed.own_posts.chunks(3).enumerate() {
            let mut spans = Vec::new();
            for (col, post) in chunk.iter().enumerate() {
                let index = row * 3 + col;
                let selected = index == self.cursor;
                let style = if selected { highlight } else { normal };

                let marker = match post.media.as_ref().map(|m| m.kind) {
                    Some(MediaKind::Image) => "▣",
                    Some(MediaKind::Video) => "▶",
                    None => "¶",
                };
                let label: String = post.body.chars().take(14).collect();
                spans.push(Span::styled(format!("[{marker} {label:<14}]"), style));
                spans.push(Span::styled(" ", muted));
            }
            lines.push(Line::from(spans));
            lines.push(Line::from(""));
        }

        let grid = Paragraph::new(lines)
            .block(Block::default().padding(Padding::new(2, 2, 0, 0)));
        frame.render_widget(grid, area);
    }

    fn render_list(&self, frame: &mut Frame, area: Rect, feed: &Feed, now: Timestamp) {
        let muted = Style::default().fg(Color::DarkGray);
        let normal = Style::default().fg(Color::Gray);
        let highlight = Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD);

        let mut lines: Vec<Line> = Vec::new();
        for (index, post) in feed.own_posts.iter().enumerate() {
            let selected = index == self.cursor;
            let style = if selected { highlight } else { normal };
            let pointer = if selected { "› " } else { "  " };
            lines.push(Line::from(vec![
                Span::styled(pointer, style),
                Span::styled(post.body.clone(), style),
            ]));
            lines.push(Line::from(Span::styled(
                format!(
                    "    ♡ {} · {}",
                    compact_count(post.stats.likes),
                    relative_time(post.posted_at, now)
                ),
                muted,
            )));
        }

        let list = Paragraph::new(lines)
            .block(Block::default().padding(Padding::new(2, 2, 0, 0)));
        frame.render_widget(list, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::data::Feed;

    #[test]
    fn layout_toggle_flips_between_grid_and_list() {
        let mut screen = ProfileScreen::new();
        assert!(screen.grid);

        screen.toggle_layout();
        assert!(!screen.grid);

        screen.toggle_layout();
        assert!(screen.grid);
    }

    #[test]
    fn cursor_stays_within_own_posts() {
        let feed = Feed::sample();
        let mut screen = ProfileScreen::new();

        for _ in 0..feed.own_posts.len() + 3 {
            screen.move_down(&feed);
        }
        assert_eq!(screen.cursor, feed.own_posts.len() - 1);

        screen.move_up();
        assert_eq!(screen.cursor, feed.own_posts.len() - 2);
    }
}
