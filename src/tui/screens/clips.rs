//! Clips screen: the short-video feed, one clip at a time.
//!
//! Navigation is a single active index over the clip list, clamped at
//! both ends. There is no session to close and no inner sequence.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Padding, Paragraph};

use crate::model::Clip;
use crate::text::compact_count;

pub struct ClipsScreen {
    active: usize,
}

impl ClipsScreen {
    pub fn new() -> Self {
        Self { active: 0 }
    }

    pub fn active(&self) -> usize {
        self.active
    }

    pub fn scroll_next(&mut self, total: usize) {
        if self.active + 1 < total {
            self.active += 1;
        }
    }

    pub fn scroll_prev(&mut self) {
        if self.active > 0 {
            self.active -= 1;
        }
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, clips: &[Clip]) {
        let muted = Style::default().fg(Color::DarkGray);
        let normal = Style::default().fg(Color::Gray);
        let bright = Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD);

        let Some(clip) = clips.get(self.active) else {
            let empty = Paragraph::new(Line::from(Span::styled("No clips.", muted)))
                .block(Block::default().padding(Padding::new(2, 2, 1, 0)));
            frame.render_widget(empty, area);
            return;
        };

        let chunks = Layout::vertical([
            Constraint::Min(0),    // clip surface
            Constraint::Length(1), // position
        ])
        .split(area);

        let verified = if clip.author.verified { " ✓" } else { "" };
        let lines = vec![
            Line::from(""),
            Line::from(Span::styled("  ▶ video", bright)),
            Line::from(Span::styled(format!("  {}", clip.media_url), muted)),
            Line::from(""),
            Line::from(vec![
                Span::styled(format!("  @{}", clip.author.handle), bright),
                Span::styled(format!(" ({}){verified}", clip.author.name), muted),
            ]),
            Line::from(Span::styled(format!("  {}", clip.caption), normal)),
            Line::from(""),
            Line::from(Span::styled(
                format!(
                    "  ♡ {}  ↳ {}  ⇄ {}",
                    compact_count(clip.stats.likes),
                    compact_count(clip.stats.comments),
                    compact_count(clip.stats.reposts)
                ),
                muted,
            )),
        ];

        let surface = Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(muted)
                .padding(Padding::new(1, 1, 0, 0)),
        );
        frame.render_widget(surface, chunks[0]);

        let position = Paragraph::new(Line::from(Span::styled(
            format!(" clip {}/{}", self.active + 1, clips.len()),
            muted,
        )));
        frame.render_widget(position, chunks[1]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn active_index_clamps_at_both_ends() {
        let mut screen = ClipsScreen::new();

        screen.scroll_prev();
        assert_eq!(screen.active(), 0);

        screen.scroll_next(3);
        screen.scroll_next(3);
        assert_eq!(screen.active(), 2);

        screen.scroll_next(3);
        assert_eq!(screen.active(), 2);

        screen.scroll_prev();
        assert_eq!(screen.active(), 1);
    }

    #[test]
    fn empty_list_keeps_the_index_at_zero() {
        let mut screen = ClipsScreen::new();
        screen.scroll_next(0);
        assert_eq!(screen.active(), 0);
    }
}
