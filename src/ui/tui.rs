mod views;

use crate::core::error::Result;
use crate::state::session::{Preference, SessionState, View};
use crossterm::cursor;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::Frame;
use std::io;
use tracing::{debug, info};

/// What the event loop should do after a key press
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Continue,
    Quit,
}

/// Interactive front end over a [`SessionState`].
///
/// Holds only presentation state (input mode and list selections); every
/// search, filter and history change goes through the session.
pub struct App {
    session: SessionState,
    // true = typing into the search box, false = browsing with shortcut keys
    editing: bool,
    result_selected: usize,
    history_selected: usize,
    settings_selected: usize,
}

impl App {
    pub fn new(session: SessionState) -> Self {
        Self {
            session,
            editing: true,
            result_selected: 0,
            history_selected: 0,
            settings_selected: 0,
        }
    }

    pub fn session(&self) -> &SessionState {
        &self.session
    }

    pub fn is_editing(&self) -> bool {
        self.editing
    }

    pub fn result_selected(&self) -> usize {
        self.result_selected
    }

    pub fn history_selected(&self) -> usize {
        self.history_selected
    }

    pub fn settings_selected(&self) -> usize {
        self.settings_selected
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> Action {
        if key.kind != KeyEventKind::Press {
            return Action::Continue;
        }
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return Action::Quit;
        }

        if self.editing {
            self.handle_editing_key(key);
            return Action::Continue;
        }

        match key.code {
            KeyCode::Char('q') => return Action::Quit,
            KeyCode::Char('h') => self.session.set_active_view(View::Home),
            KeyCode::Char('r') => self.session.set_active_view(View::Results),
            KeyCode::Char('y') => self.session.set_active_view(View::History),
            KeyCode::Char('s') => self.session.set_active_view(View::Settings),
            KeyCode::Char('a') => self.session.set_active_view(View::About),
            KeyCode::Char('/') => {
                if !matches!(self.session.active_view(), View::Home | View::Results) {
                    self.session.set_active_view(View::Home);
                }
                self.editing = true;
            }
            KeyCode::Esc => self.session.set_active_view(View::Home),
            _ => match self.session.active_view() {
                View::Home => self.handle_home_key(key),
                View::Results => self.handle_results_key(key),
                View::History => self.handle_history_key(key),
                View::Settings => self.handle_settings_key(key),
                View::About => {}
            },
        }

        Action::Continue
    }

    fn handle_editing_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => self.editing = false,
            KeyCode::Enter => {
                if self.session.submit_current() {
                    self.editing = false;
                    self.result_selected = 0;
                }
            }
            KeyCode::Backspace => {
                self.session.query_mut().pop();
            }
            KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.session.query_mut().clear();
            }
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.session.query_mut().push(c);
            }
            _ => {}
        }
    }

    fn handle_home_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char(c @ '1'..='5') => {
                let index = (c as u8 - b'1') as usize;
                if let Some(entry) = self.session.history().get(index).map(str::to_string) {
                    self.session.resubmit_history_entry(&entry);
                    self.result_selected = 0;
                }
            }
            KeyCode::Enter => self.editing = true,
            _ => {}
        }
    }

    fn handle_results_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('t') => {
                let next = self.session.content_type().next();
                self.session.set_content_type(next);
            }
            KeyCode::Char('d') => {
                let next = self.session.date_filter().next();
                self.session.set_date_filter(next);
            }
            KeyCode::Char('o') => {
                let next = self.session.source_filter().next();
                self.session.set_source_filter(next);
            }
            KeyCode::Char('+') | KeyCode::Char('=') | KeyCode::Right => {
                self.session.adjust_relevance(1)
            }
            KeyCode::Char('-') | KeyCode::Left => self.session.adjust_relevance(-1),
            KeyCode::Up => {
                self.result_selected = self.result_selected.saturating_sub(1);
            }
            KeyCode::Down => {
                if self.result_selected + 1 < self.session.result_count() {
                    self.result_selected += 1;
                }
            }
            KeyCode::Enter => self.editing = true,
            _ => {}
        }
        self.result_selected = self
            .result_selected
            .min(self.session.result_count().saturating_sub(1));
    }

    fn handle_history_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Up => {
                self.history_selected = self.history_selected.saturating_sub(1);
            }
            KeyCode::Down => {
                if self.history_selected + 1 < self.session.history().len() {
                    self.history_selected += 1;
                }
            }
            KeyCode::Enter => {
                if let Some(entry) = self
                    .session
                    .history()
                    .get(self.history_selected)
                    .map(str::to_string)
                {
                    self.session.open_history_entry(&entry);
                    self.result_selected = 0;
                }
            }
            KeyCode::Char('c') => {
                self.session.clear_history();
                self.history_selected = 0;
            }
            _ => {}
        }
    }

    fn handle_settings_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Up => {
                self.settings_selected = self.settings_selected.saturating_sub(1);
            }
            KeyCode::Down => {
                if self.settings_selected + 1 < Preference::ALL.len() {
                    self.settings_selected += 1;
                }
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                let preference = Preference::ALL[self.settings_selected];
                self.session.toggle_preference(preference);
                debug!(preference = preference.label(), "Preference toggled");
            }
            _ => {}
        }
    }

    pub fn render(&self, f: &mut Frame) {
        views::render_app(self, f);
    }
}

/// Terminal runner for [`App`]
pub struct SearchTui {
    app: App,
}

impl SearchTui {
    pub fn new(session: SessionState) -> Self {
        Self {
            app: App::new(session),
        }
    }

    pub fn run(&mut self) -> Result<()> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, cursor::Hide)?;

        // Always restore terminal, even if we early-return with an error.
        struct TerminalRestore;
        impl Drop for TerminalRestore {
            fn drop(&mut self) {
                let _ = disable_raw_mode();
                let mut stdout = io::stdout();
                let _ = execute!(stdout, LeaveAlternateScreen, cursor::Show);
            }
        }
        let _restore = TerminalRestore;

        let backend = CrosstermBackend::new(stdout);
        let mut terminal = ratatui::Terminal::new(backend)?;
        info!("TUI started");

        loop {
            terminal.draw(|f| self.app.render(f))?;

            if let Event::Key(key) = event::read()? {
                if self.app.handle_key(key) == Action::Quit {
                    break;
                }
            }
        }

        info!("TUI exited");
        Ok(())
    }
}
