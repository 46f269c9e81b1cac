//! Story overlay: renders the active viewer session over the feed.
//!
//! Stateless: everything shown comes from the viewer snapshot. Gestures
//! are mapped in the app loop; nothing here advances on its own.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};

use crate::model::ContentItem;
use crate::viewer::ViewerSnapshot;

pub fn render_story(frame: &mut Frame, snapshot: &ViewerSnapshot<'_>) {
    let area = overlay_area(frame.area());
    frame.render_widget(Clear, area);

    let muted = Style::default().fg(Color::DarkGray);
    let bright = Style::default().fg(Color::White);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(muted)
        .title(Span::styled(
            format!(" {} ", snapshot.story.author_handle),
            bright.add_modifier(Modifier::BOLD),
        ));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::vertical([
        Constraint::Length(1), // progress
        Constraint::Min(0),    // content
        Constraint::Length(1), // help
    ])
    .split(inner);

    frame.render_widget(progress(snapshot), chunks[0]);
    frame.render_widget(content(snapshot), chunks[1]);

    let help = Line::from(Span::styled(
        format!(
            " ← prev  → next  esc close   {}/{}",
            snapshot.item_index + 1,
            snapshot.total_items
        ),
        muted,
    ));
    frame.render_widget(Paragraph::new(help), chunks[2]);
}

/// One segment per item; the consumed prefix (and the active item) lit.
fn progress(snapshot: &ViewerSnapshot<'_>) -> Paragraph<'static> {
    let lit = Style::default().fg(Color::White);
    let dim = Style::default().fg(Color::DarkGray);

    let mut spans = vec![Span::raw(" ")];
    for i in 0..snapshot.total_items {
        let style = if i <= snapshot.item_index { lit } else { dim };
        spans.push(Span::styled("━━", style));
        spans.push(Span::raw(" "));
    }
    Paragraph::new(Line::from(spans))
}

fn content(snapshot: &ViewerSnapshot<'_>) -> Paragraph<'static> {
    let muted = Style::default().fg(Color::DarkGray);
    let bright = Style::default().fg(Color::White);

    let lines = match snapshot.item {
        ContentItem::Image { media_url } => vec![
            Line::from(""),
            Line::from(Span::styled("  ▣ image", bright)),
            Line::from(Span::styled(format!("  {media_url}"), muted)),
        ],
        ContentItem::Video { media_url } => vec![
            Line::from(""),
            Line::from(Span::styled("  ▶ video", bright)),
            Line::from(Span::styled(format!("  {media_url}"), muted)),
        ],
        ContentItem::Text { text } => vec![
            Line::from(""),
            Line::from(Span::styled(format!("  {text}"), bright)),
        ],
    };

    Paragraph::new(lines).wrap(Wrap { trim: false })
}

/// A centered box, clamped to the terminal.
fn overlay_area(area: Rect) -> Rect {
    let width = area.width.saturating_sub(6).min(56).max(20);
    let height = area.height.saturating_sub(4).min(14).max(6);
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(area.width), height.min(area.height))
}
