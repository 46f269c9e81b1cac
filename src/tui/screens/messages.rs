//! Messages screen: conversation list and transcript view.
//!
//! The transcript is append-only: sending pushes one message onto the
//! active conversation, nothing is ever edited or removed.

use jiff::Timestamp;
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Padding, Paragraph};

use crate::model::{ChatMessage, Conversation, DeliveryStatus, MessageBody, Sender};
use crate::text::{mmss, relative_time};

enum Mode {
    List {
        cursor: usize,
        filter: String,
        filtering: bool,
    },
    Chat {
        index: usize,
        input: String,
    },
}

pub struct MessagesScreen {
    mode: Mode,
}

impl MessagesScreen {
    pub fn new() -> Self {
        Self {
            mode: Mode::List {
                cursor: 0,
                filter: String::new(),
                filtering: false,
            },
        }
    }

    /// Whether typed characters belong to this screen (filter or chat
    /// input) rather than to global shortcuts.
    pub fn captures_text(&self) -> bool {
        match &self.mode {
            Mode::List { filtering, .. } => *filtering,
            Mode::Chat { .. } => true,
        }
    }

    /// Conversation indices matching the filter, in list order.
    fn visible(&self, conversations: &[Conversation]) -> Vec<usize> {
        let filter = match &self.mode {
            Mode::List { filter, .. } => filter.trim().to_lowercase(),
            Mode::Chat { .. } => String::new(),
        };
        conversations
            .iter()
            .enumerate()
            .filter(|(_, c)| {
                filter.is_empty()
                    || c.peer.name.to_lowercase().contains(&filter)
                    || c.peer.handle.to_lowercase().contains(&filter)
            })
            .map(|(i, _)| i)
            .collect()
    }

    pub fn move_up(&mut self) {
        if let Mode::List { cursor, .. } = &mut self.mode
            && *cursor > 0
        {
            *cursor -= 1;
        }
    }

    pub fn move_down(&mut self, conversations: &[Conversation]) {
        let total = self.visible(conversations).len();
        if let Mode::List { cursor, .. } = &mut self.mode
            && *cursor + 1 < total
        {
            *cursor += 1;
        }
    }

    /// Starts filtering in list mode.
    pub fn start_filter(&mut self) {
        if let Mode::List {
            filtering, cursor, ..
        } = &mut self.mode
        {
            *filtering = true;
            *cursor = 0;
        }
    }

    pub fn on_char(&mut self, c: char) {
        match &mut self.mode {
            Mode::List {
                filter,
                filtering,
                cursor,
            } => {
                if *filtering {
                    filter.push(c);
                    *cursor = 0;
                }
            }
            Mode::Chat { input, .. } => input.push(c),
        }
    }

    pub fn on_backspace(&mut self) {
        match &mut self.mode {
            Mode::List {
                filter,
                filtering,
                cursor,
            } => {
                if *filtering {
                    filter.pop();
                    *cursor = 0;
                }
            }
            Mode::Chat { input, .. } => {
                input.pop();
            }
        }
    }

    /// Handle Enter: accept the filter, open the selected conversation
    /// (clearing its unread badge), or send the typed message.
    pub fn on_enter(&mut self, conversations: &mut [Conversation], now: Timestamp) {
        match &mut self.mode {
            Mode::List {
                cursor, filtering, ..
            } => {
                if *filtering {
                    *filtering = false;
                    return;
                }
                let cursor = *cursor;
                if let Some(&index) = self.visible(conversations).get(cursor) {
                    if let Some(conversation) = conversations.get_mut(index) {
                        conversation.unread = 0;
                    }
                    self.mode = Mode::Chat {
                        index,
                        input: String::new(),
                    };
                }
            }
            Mode::Chat { index, input } => {
                let text = input.trim().to_string();
                if text.is_empty() {
                    return;
                }
                if let Some(conversation) = conversations.get_mut(*index) {
                    conversation.push(ChatMessage {
                        sender: Sender::You,
                        body: MessageBody::Text { text },
                        sent_at: now,
                        status: DeliveryStatus::Sent,
                    });
                }
                input.clear();
            }
        }
    }

    /// Handle Esc: drop the filter, or leave the transcript.
    pub fn on_esc(&mut self) {
        match &mut self.mode {
            Mode::List {
                filter, filtering, ..
            } => {
                filter.clear();
                *filtering = false;
            }
            Mode::Chat { .. } => {
                self.mode = Mode::List {
                    cursor: 0,
                    filter: String::new(),
                    filtering: false,
                };
            }
        }
    }

    pub fn render(
        &self,
        frame: &mut Frame,
        area: Rect,
        conversations: &[Conversation],
        now: Timestamp,
    ) {
        match &self.mode {
            Mode::List {
                cursor,
                filter,
                filtering,
            } => self.render_list(
                frame,
                area,
                conversations,
                now,
                *cursor,
                filter,
                *filtering,
            ),
            Mode::Chat { index, input } => {
                self.render_chat(frame, area, conversations, now, *index, input);
            }
        }
    }

    #[allow(clippy::too_many_arguments)]
    fn render_list(
        &self,
        frame: &mut Frame,
        area: Rect,
        conversations: &[Conversation],
        now: Timestamp,
        cursor: usize,
        filter: &str,
        filtering: bool,
    ) {
        let muted = Style::default().fg(Color::DarkGray);
        let normal = Style::default().fg(Color::Gray);
        let highlight = Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD);
        let online = Style::default().fg(Color::Green);
        let badge = Style::default().fg(Color::Magenta);

        let chunks = Layout::vertical([
            Constraint::Length(1), // search line
            Constraint::Min(0),    // list
        ])
        .split(area);

        let search = if filtering {
            Line::from(vec![
                Span::styled(" / ", highlight),
                Span::styled(filter.to_string(), Style::default().fg(Color::White)),
                Span::styled("█", muted),
            ])
        } else if filter.is_empty() {
            Line::from(Span::styled(" / search conversations", muted))
        } else {
            Line::from(vec![
                Span::styled(" filter: ", muted),
                Span::styled(filter.to_string(), normal),
            ])
        };
        frame.render_widget(Paragraph::new(search), chunks[0]);

        let visible = self.visible(conversations);
        let mut lines: Vec<Line> = Vec::new();
        if visible.is_empty() {
            lines.push(Line::from(Span::styled("No conversations found.", muted)));
        }
        for (row, &index) in visible.iter().enumerate() {
            let conversation = &conversations[index];
            let selected = !filtering && row == cursor;
            let style = if selected { highlight } else { normal };
            let pointer = if selected { "› " } else { "  " };

            let mut spans = vec![
                Span::styled(pointer, style),
                Span::styled(conversation.peer.name.clone(), style),
            ];
            if conversation.online {
                spans.push(Span::styled(" ●", online));
            }
            if let Some(message) = conversation.last_message() {
                spans.push(Span::styled(
                    format!("  {}", message.body.preview()),
                    muted,
                ));
                spans.push(Span::styled(
                    format!("  · {}", relative_time(message.sent_at, now)),
                    muted,
                ));
            }
            if conversation.unread > 0 {
                spans.push(Span::styled(
                    format!("  [{}]", conversation.unread),
                    badge,
                ));
            }
            lines.push(Line::from(spans));
        }

        let list = Paragraph::new(lines)
            .block(Block::default().padding(Padding::new(2, 2, 1, 0)));
        frame.render_widget(list, chunks[1]);
    }

    fn render_chat(
        &self,
        frame: &mut Frame,
        area: Rect,
        conversations: &[Conversation],
        now: Timestamp,
        index: usize,
        input: &str,
    ) {
        let muted = Style::default().fg(Color::DarkGray);
        let normal = Style::default().fg(Color::Gray);
        let bright = Style::default().fg(Color::White);
        let highlight = bright.add_modifier(Modifier::BOLD);

        let Some(conversation) = conversations.get(index) else {
            return;
        };

        let chunks = Layout::vertical([
            Constraint::Length(2), // header
            Constraint::Min(0),    // transcript
            Constraint::Length(1), // input
        ])
        .split(area);

        let presence = if conversation.online { "online" } else { "offline" };
        let header = Paragraph::new(vec![
            Line::from(vec![
                Span::styled(format!(" {}", conversation.peer.name), highlight),
                Span::styled(format!("  @{}", conversation.peer.handle), muted),
            ]),
            Line::from(Span::styled(format!(" {presence}"), muted)),
        ]);
        frame.render_widget(header, chunks[0]);

        // Transcript, pinned to the newest messages.
        let mut lines: Vec<Line> = Vec::new();
        for message in &conversation.messages {
            let body = match &message.body {
                MessageBody::Text { text } => text.clone(),
                MessageBody::Image { media_url } => format!("[image] {media_url}"),
                MessageBody::Voice { duration_secs } => {
                    format!("[voice {}]", mmss(*duration_secs))
                }
            };
            let stamp = relative_time(message.sent_at, now);
            let line = match message.sender {
                Sender::You => {
                    let ticks = match message.status {
                        DeliveryStatus::Sent => "✓",
                        DeliveryStatus::Delivered | DeliveryStatus::Read => "✓✓",
                    };
                    Line::from(vec![
                        Span::styled(body, bright),
                        Span::styled(format!("  {stamp} {ticks} "), muted),
                    ])
                    .right_aligned()
                }
                Sender::Peer => Line::from(vec![
                    Span::styled(format!(" {body}"), normal),
                    Span::styled(format!("  {stamp}"), muted),
                ]),
            };
            lines.push(line);
        }

        let visible_height = chunks[1].height as usize;
        let skip = lines.len().saturating_sub(visible_height);
        let transcript = Paragraph::new(lines.split_off(skip))
            .block(Block::default().padding(Padding::new(1, 1, 0, 0)));
        frame.render_widget(transcript, chunks[1]);

        let prompt = Paragraph::new(Line::from(vec![
            Span::styled(" › ", highlight),
            Span::styled(input.to_string(), bright),
            Span::styled("█", muted),
        ]));
        frame.render_widget(prompt, chunks[2]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::data::Feed;

    fn type_str(screen: &mut MessagesScreen, s: &str) {
        for c in s.chars() {
            screen.on_char(c);
        }
    }

    fn now() -> Timestamp {
        Timestamp::now()
    }

    #[test]
    fn filter_narrows_the_list() {
        let feed = Feed::sample();
        let mut screen = MessagesScreen::new();

        let all = screen.visible(&feed.conversations).len();
        assert_eq!(all, feed.conversations.len());

        screen.start_filter();
        type_str(&mut screen, "alex");

        assert_eq!(screen.visible(&feed.conversations).len(), 1);
    }

    #[test]
    fn esc_clears_the_filter() {
        let feed = Feed::sample();
        let mut screen = MessagesScreen::new();

        screen.start_filter();
        type_str(&mut screen, "alex");
        screen.on_esc();

        assert_eq!(
            screen.visible(&feed.conversations).len(),
            feed.conversations.len()
        );
        assert!(!screen.captures_text());
    }

    #[test]
    fn opening_a_conversation_clears_unread() {
        let mut feed = Feed::sample();
        let mut screen = MessagesScreen::new();
        assert!(feed.conversations[0].unread > 0);

        screen.on_enter(&mut feed.conversations, now());

        assert_eq!(feed.conversations[0].unread, 0);
        assert!(screen.captures_text());
    }

    #[test]
    fn sending_appends_a_you_message() {
        let mut feed = Feed::sample();
        let mut screen = MessagesScreen::new();
        screen.on_enter(&mut feed.conversations, now()); // open first
        let before = feed.conversations[0].messages.len();

        type_str(&mut screen, "On my way!");
        screen.on_enter(&mut feed.conversations, now());

        let messages = &feed.conversations[0].messages;
        assert_eq!(messages.len(), before + 1);
        let last = messages.last().unwrap();
        assert_eq!(last.sender, Sender::You);
        assert_eq!(last.status, DeliveryStatus::Sent);
        assert_eq!(
            last.body,
            MessageBody::Text {
                text: "On my way!".into()
            }
        );
    }

    #[test]
    fn empty_input_is_not_sent() {
        let mut feed = Feed::sample();
        let mut screen = MessagesScreen::new();
        screen.on_enter(&mut feed.conversations, now());
        let before = feed.conversations[0].messages.len();

        type_str(&mut screen, "   ");
        screen.on_enter(&mut feed.conversations, now());

        assert_eq!(feed.conversations[0].messages.len(), before);
    }

    #[test]
    fn esc_returns_to_the_list() {
        let mut feed = Feed::sample();
        let mut screen = MessagesScreen::new();
        screen.on_enter(&mut feed.conversations, now());

        screen.on_esc();

        assert!(!screen.captures_text());
    }

    #[test]
    fn open_respects_the_active_filter() {
        let mut feed = Feed::sample();
        let mut screen = MessagesScreen::new();

        screen.start_filter();
        type_str(&mut screen, "morgan");
        screen.on_enter(&mut feed.conversations, now()); // accept filter
        screen.on_enter(&mut feed.conversations, now()); // open match

        // The opened transcript is Morgan's, not the first conversation.
        type_str(&mut screen, "hey");
        screen.on_enter(&mut feed.conversations, now());

        let morgan = feed
            .conversations
            .iter()
            .find(|c| c.peer.name == "Morgan Smith")
            .unwrap();
        assert_eq!(morgan.messages.last().unwrap().sender, Sender::You);
    }
}
