//! Explore screen: trending topics and suggested users.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Padding, Paragraph};

use crate::data::Feed;
use crate::text::compact_count;

pub struct ExploreScreen {
    cursor: usize,
}

impl ExploreScreen {
    pub fn new() -> Self {
        Self { cursor: 0 }
    }

    fn total_rows(feed: &Feed) -> usize {
        feed.trending.len() + feed.suggested.len()
    }

    pub fn move_up(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
        }
    }

    pub fn move_down(&mut self, feed: &Feed) {
        if self.cursor + 1 < Self::total_rows(feed) {
            self.cursor += 1;
        }
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, feed: &Feed) {
        let muted = Style::default().fg(Color::DarkGray);
        let normal = Style::default().fg(Color::Gray);
        let highlight = Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD);

        let mut lines: Vec<Line> = Vec::new();
        let mut row = 0usize;

        lines.push(Line::from(Span::styled("Trending", highlight)));
        for topic in &feed.trending {
            let selected = row == self.cursor;
            let style = if selected { highlight } else { normal };
            let pointer = if selected { "› " } else { "  " };
            lines.push(Line::from(vec![
                Span::styled(pointer, style),
                Span::styled(format!("#{}", topic.name), style),
                Span::styled(
                    format!("  {} posts", compact_count(topic.post_count)),
                    muted,
                ),
            ]));
            row += 1;
        }

        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled("Who to follow", highlight)));
        for user in &feed.suggested {
            let selected = row == self.cursor;
            let style = if selected { highlight } else { normal };
            let pointer = if selected { "› " } else { "  " };
            lines.push(Line::from(vec![
                Span::styled(pointer, style),
                Span::styled(format!("@{}", user.author.handle), style),
                Span::styled(format!(" ({})", user.author.name), muted),
                Span::styled(
                    format!("  {} followers", compact_count(user.followers)),
                    muted,
                ),
            ]));
            row += 1;
        }

        let body = Paragraph::new(lines)
            .block(Block::default().padding(Padding::new(2, 2, 1, 0)));
        frame.render_widget(body, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::data::Feed;

    #[test]
    fn cursor_clamps_to_the_combined_rows() {
        let feed = Feed::sample();
        let mut screen = ExploreScreen::new();
        let total = ExploreScreen::total_rows(&feed);

        screen.move_up();
        assert_eq!(screen.cursor, 0);

        for _ in 0..total + 5 {
            screen.move_down(&feed);
        }
        assert_eq!(screen.cursor, total - 1);
    }
}
