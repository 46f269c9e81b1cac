//! Application loop and tab routing.

use std::io;

use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use jiff::Timestamp;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::{DefaultTerminal, Frame};

use crate::data::Feed;
use crate::model::{Author, StoryId, Thread};
use crate::viewer::StoryViewer;

use super::screens::{
    ClipsScreen, ComposeScreen, ExploreScreen, FeedFocus, FeedScreen, MessagesScreen,
    ProfileScreen, render_story,
};

/// Bottom tab bar entries, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tab {
    Home,
    Explore,
    Clips,
    Compose,
    Messages,
    Profile,
}

impl Tab {
    const ALL: [Self; 6] = [
        Self::Home,
        Self::Explore,
        Self::Clips,
        Self::Compose,
        Self::Messages,
        Self::Profile,
    ];

    fn label(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::Explore => "Explore",
            Self::Clips => "Clips",
            Self::Compose => "Create",
            Self::Messages => "Messages",
            Self::Profile => "Profile",
        }
    }

    fn next(self) -> Self {
        let i = Self::ALL.iter().position(|&t| t == self).unwrap_or(0);
        Self::ALL[(i + 1) % Self::ALL.len()]
    }

    fn prev(self) -> Self {
        let i = Self::ALL.iter().position(|&t| t == self).unwrap_or(0);
        Self::ALL[(i + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

/// Runs the TUI event loop until the user quits.
pub fn run(feed: Feed, handle: String) -> io::Result<()> {
    let mut terminal = ratatui::init();
    let result = App::new(feed, handle).event_loop(&mut terminal);
    ratatui::restore();
    result
}

struct App {
    feed: Feed,
    me: Author,
    tab: Tab,
    viewer: StoryViewer,
    home: FeedScreen,
    explore: ExploreScreen,
    clips: ClipsScreen,
    compose: ComposeScreen,
    messages: MessagesScreen,
    profile: ProfileScreen,
    next_post_id: u64,
}

impl App {
    fn new(feed: Feed, handle: String) -> Self {
        let next_post_id = feed
            .threads
            .iter()
            .flat_map(|t| std::iter::once(&t.root).chain(t.replies.iter()))
            .chain(feed.own_posts.iter())
            .map(|p| p.id)
            .max()
            .unwrap_or(0)
            + 1;

        let me = Author {
            id: 0,
            handle: handle.clone(),
            name: handle,
            avatar_url: None,
            verified: false,
        };

        Self {
            feed,
            me,
            tab: Tab::Home,
            viewer: StoryViewer::new(),
            home: FeedScreen::new(),
            explore: ExploreScreen::new(),
            clips: ClipsScreen::new(),
            compose: ComposeScreen::new(),
            messages: MessagesScreen::new(),
            profile: ProfileScreen::new(),
            next_post_id,
        }
    }

    fn event_loop(mut self, terminal: &mut DefaultTerminal) -> io::Result<()> {
        loop {
            terminal.draw(|frame| self.render(frame))?;

            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }

                // An open viewer session owns the keys.
                if self.viewer.is_open() {
                    self.viewer_key(key.code);
                    continue;
                }

                if self.global_key(key.code) {
                    return Ok(());
                }
            }
        }
    }

    // ── Keys ──

    fn viewer_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Left | KeyCode::Char('h') => self.viewer.retreat(&self.feed.stories),
            KeyCode::Right | KeyCode::Char('l') | KeyCode::Char(' ') => {
                self.viewer.advance(&self.feed.stories);
            }
            KeyCode::Esc | KeyCode::Char('q') => self.viewer.close(),
            _ => {}
        }
        self.note_viewer_position();
    }

    /// Marks whatever story the session now sits on as seen. The viewer
    /// itself never touches the catalog; this is the caller's bookkeeping.
    fn note_viewer_position(&mut self) {
        if let Some(id) = self.viewer.active_story_id() {
            self.feed.stories.mark_seen(id);
        }
    }

    /// Returns true when the app should quit.
    fn global_key(&mut self, code: KeyCode) -> bool {
        if !self.captures_text() {
            match code {
                KeyCode::Char('q') => return true,
                KeyCode::Tab => {
                    self.tab = self.tab.next();
                    return false;
                }
                KeyCode::BackTab => {
                    self.tab = self.tab.prev();
                    return false;
                }
                KeyCode::Char(c @ '1'..='6') => {
                    self.tab = Tab::ALL[(c as usize) - ('1' as usize)];
                    return false;
                }
                _ => {}
            }
        }

        match self.tab {
            Tab::Home => self.home_key(code),
            Tab::Explore => self.explore_key(code),
            Tab::Clips => self.clips_key(code),
            Tab::Compose => self.compose_key(code),
            Tab::Messages => self.messages_key(code),
            Tab::Profile => self.profile_key(code),
        }
        false
    }

    /// Whether typed characters belong to the active screen.
    fn captures_text(&self) -> bool {
        match self.tab {
            Tab::Compose => true,
            Tab::Messages => self.messages.captures_text(),
            _ => false,
        }
    }

    fn home_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Left => self.home.rail_left(),
            KeyCode::Right => self.home.rail_right(&self.feed),
            KeyCode::Up | KeyCode::Char('k') => self.home.move_up(),
            KeyCode::Down | KeyCode::Char('j') => self.home.move_down(&self.feed),
            KeyCode::Char('f') => self.home.toggle_like(&self.feed),
            KeyCode::Enter => {
                if self.home.focus() == FeedFocus::Rail {
                    self.open_story(self.home.selected_story(&self.feed));
                }
            }
            _ => {}
        }
    }

    fn open_story(&mut self, id: StoryId) {
        // A failed open simply leaves the viewer closed.
        if self.viewer.open(&self.feed.stories, id).is_ok() {
            self.note_viewer_position();
        }
    }

    fn explore_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Up | KeyCode::Char('k') => self.explore.move_up(),
            KeyCode::Down | KeyCode::Char('j') => self.explore.move_down(&self.feed),
            _ => {}
        }
    }

    fn clips_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Up | KeyCode::Char('k') => self.clips.scroll_prev(),
            KeyCode::Down | KeyCode::Char('j') => self.clips.scroll_next(self.feed.clips.len()),
            _ => {}
        }
    }

    fn compose_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Enter => self.submit_post(),
            KeyCode::Backspace => self.compose.on_backspace(),
            KeyCode::Down => self.compose.cycle_visibility(),
            KeyCode::Esc => self.tab = Tab::Home,
            KeyCode::Char(c) => self.compose.on_char(c),
            _ => {}
        }
    }

    fn submit_post(&mut self) {
        let id = self.next_post_id;
        let Some(post) = self.compose.submit(self.me.clone(), id, Timestamp::now()) else {
            return;
        };
        self.next_post_id += 1;
        self.feed.threads.insert(
            0,
            Thread {
                root: post,
                replies: Vec::new(),
            },
        );
        self.home.reset_cursor();
        self.tab = Tab::Home;
    }

    fn messages_key(&mut self, code: KeyCode) {
        let typing = self.messages.captures_text();
        match code {
            KeyCode::Enter => self
                .messages
                .on_enter(&mut self.feed.conversations, Timestamp::now()),
            KeyCode::Esc => self.messages.on_esc(),
            KeyCode::Backspace => self.messages.on_backspace(),
            KeyCode::Up => self.messages.move_up(),
            KeyCode::Down => self.messages.move_down(&self.feed.conversations),
            KeyCode::Char('/') if !typing => self.messages.start_filter(),
            KeyCode::Char('k') if !typing => self.messages.move_up(),
            KeyCode::Char('j') if !typing => self.messages.move_down(&self.feed.conversations),
            KeyCode::Char(c) if typing => self.messages.on_char(c),
            _ => {}
        }
    }

    fn profile_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Up | KeyCode::Char('k') => self.profile.move_up(),
            KeyCode::Down | KeyCode::Char('j') => self.profile.move_down(&self.feed),
            KeyCode::Char('g') => self.profile.toggle_layout(),
            _ => {}
        }
    }

    // ── Rendering ──

    fn render(&self, frame: &mut Frame) {
        let chunks = Layout::vertical([
            Constraint::Min(0),    // screen
            Constraint::Length(1), // tab bar
            Constraint::Length(1), // help
        ])
        .split(frame.area());

        let now = Timestamp::now();
        match self.tab {
            Tab::Home => self.home.render(frame, chunks[0], &self.feed, now),
            Tab::Explore => self.explore.render(frame, chunks[0], &self.feed),
            Tab::Clips => self.clips.render(frame, chunks[0], &self.feed.clips),
            Tab::Compose => self.compose.render(frame, chunks[0]),
            Tab::Messages => {
                self.messages
                    .render(frame, chunks[0], &self.feed.conversations, now);
            }
            Tab::Profile => self.profile.render(frame, chunks[0], &self.feed, now),
        }

        self.render_tab_bar(frame, chunks[1]);
        self.render_help(frame, chunks[2]);

        if let Some(snapshot) = self.viewer.snapshot(&self.feed.stories) {
            render_story(frame, &snapshot);
        }
    }

    fn render_tab_bar(&self, frame: &mut Frame, area: Rect) {
        let muted = Style::default().fg(Color::DarkGray);
        let active = Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD);

        let mut spans = vec![Span::raw(" ")];
        for (i, tab) in Tab::ALL.iter().enumerate() {
            let style = if *tab == self.tab { active } else { muted };
            spans.push(Span::styled(format!("{} {}", i + 1, tab.label()), style));
            spans.push(Span::raw("  "));
        }
        frame.render_widget(Paragraph::new(Line::from(spans)), area);
    }

    fn render_help(&self, frame: &mut Frame, area: Rect) {
        let muted = Style::default().fg(Color::DarkGray);
        let help = match self.tab {
            Tab::Home => " ←→ stories  ⏎ view  ↑↓ posts  f like  tab/1-6 switch  q quit",
            Tab::Explore => " ↑↓ navigate  tab/1-6 switch  q quit",
            Tab::Clips => " ↑↓ clips  tab/1-6 switch  q quit",
            Tab::Compose => " type caption  ⏎ post  ↓ audience  esc back",
            Tab::Messages => " ↑↓ navigate  ⏎ open/send  / search  esc back  q quit",
            Tab::Profile => " ↑↓ posts  g layout  tab/1-6 switch  q quit",
        };
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(help, muted))),
            area,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app() -> App {
        App::new(Feed::sample(), "you".to_string())
    }

    #[test]
    fn tab_cycle_wraps_in_both_directions() {
        assert_eq!(Tab::Profile.next(), Tab::Home);
        assert_eq!(Tab::Home.prev(), Tab::Profile);
        assert_eq!(Tab::Home.next(), Tab::Explore);
    }

    #[test]
    fn q_quits_outside_text_entry() {
        let mut app = app();
        assert!(app.global_key(KeyCode::Char('q')));
    }

    #[test]
    fn opening_a_story_from_the_rail_marks_it_seen() {
        let mut app = app();
        let first = app.feed.stories.stories[0].id;

        // Rail starts on the own story; step right to the first catalog
        // story and open it.
        app.global_key(KeyCode::Right);
        app.global_key(KeyCode::Enter);

        assert!(app.viewer.is_open());
        assert_eq!(app.viewer.active_story_id(), Some(first));
        assert!(app.feed.stories.stories[0].seen);
    }

    #[test]
    fn advancing_across_a_boundary_marks_the_next_story_seen() {
        let mut app = app();
        app.global_key(KeyCode::Right);
        app.global_key(KeyCode::Enter);

        let items = app.feed.stories.stories[0].items.len();
        for _ in 0..items {
            app.viewer_key(KeyCode::Right);
        }

        let second = app.feed.stories.stories[1].id;
        assert_eq!(app.viewer.active_story_id(), Some(second));
        assert!(app.feed.stories.stories[1].seen);
    }

    #[test]
    fn viewer_owns_q_while_open() {
        let mut app = app();
        app.global_key(KeyCode::Right);
        app.global_key(KeyCode::Enter);
        assert!(app.viewer.is_open());

        app.viewer_key(KeyCode::Char('q'));
        assert!(!app.viewer.is_open());
    }

    #[test]
    fn composed_post_lands_at_the_top_of_the_feed() {
        let mut app = app();
        app.tab = Tab::Compose;

        for c in "First post from the terminal".chars() {
            app.global_key(KeyCode::Char(c));
        }
        app.global_key(KeyCode::Enter);

        assert_eq!(app.tab, Tab::Home);
        let root = &app.feed.threads[0].root;
        assert_eq!(root.body, "First post from the terminal");
        assert_eq!(root.author.handle, "you");

        // Ids keep increasing past the seeded ones.
        assert!(app.feed.threads[1..]
            .iter()
            .all(|t| t.root.id != root.id));
    }

    #[test]
    fn number_keys_jump_to_tabs() {
        let mut app = app();
        app.global_key(KeyCode::Char('5'));
        assert_eq!(app.tab, Tab::Messages);

        app.global_key(KeyCode::Char('1'));
        assert_eq!(app.tab, Tab::Home);
    }
}
