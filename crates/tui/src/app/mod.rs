use std::time::Instant;

use console_core::{command::Command, Config, CursorView, HistoryStore, InputState, Storage};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use tracing::{debug, info};

pub mod history;
pub mod input;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Entry {
    Input(String),
    Output(String),
    Error(String),
}

pub struct App {
    pub input: InputState,
    pub history: HistoryStore,
    pub transcript: Vec<Entry>,
    pub config: Config,
    storage: Option<Storage>,
    pub should_quit: bool,
    pub dirty: bool,
    blink_on: bool,
    last_blink: Instant,
}

impl App {
    pub fn new(config: Config, storage: Option<Storage>) -> Self {
        let history = match &storage {
            Some(st) => HistoryStore::load_or_default(st, &config.history_slot),
            None => HistoryStore::new(),
        };
        info!(target: "tui", "app: {} history entries, slot '{}'", history.len(), config.history_slot);
        Self::with_history(config, storage, history)
    }

    pub fn with_history(config: Config, storage: Option<Storage>, history: HistoryStore) -> Self {
        Self {
            input: InputState::new(),
            history,
            transcript: vec![Entry::Output(
                "Type a line and press Enter. Shift+Up/Down recalls history; Esc quits.".into(),
            )],
            config,
            storage,
            should_quit: false,
            dirty: true,
            blink_on: true,
            last_blink: Instant::now(),
        }
    }

    pub fn view(&self) -> CursorView {
        CursorView::from_state(&self.input)
    }

    /// Whether the block is drawn highlighted this frame. A view that
    /// does not blink keeps a steady block.
    pub fn cursor_lit(&self, view: &CursorView) -> bool {
        !view.blinking || self.blink_on
    }

    fn restart_blink(&mut self) {
        self.blink_on = true;
        self.last_blink = Instant::now();
    }

    pub fn on_focus(&mut self, focused: bool) {
        if self.input.set_focused(focused) {
            debug!(target: "tui", "focus: {}", if focused { "gained" } else { "lost" });
        }
        self.restart_blink();
        self.dirty = true;
    }

    pub fn on_tick(&mut self, now: Instant) {
        if !self.input.is_focused() {
            return;
        }
        if now.saturating_duration_since(self.last_blink) >= self.config.blink_interval {
            self.blink_on = !self.blink_on;
            self.last_blink = now;
            self.dirty = true;
        }
    }

    pub fn submit(&mut self) {
        let line = self.input.take();
        self.history.reset_browse();
        let text = line.trim().to_string();
        if text.is_empty() {
            return;
        }
        info!(target: "tui", "submit: {} chars", text.chars().count());
        self.record_history_entry(&text);
        self.transcript.push(Entry::Input(text.clone()));
        self.run_command(Command::parse(&text));
    }

    fn run_command(&mut self, cmd: Command) {
        match cmd {
            Command::HistoryList => {
                if self.history.is_empty() {
                    self.transcript.push(Entry::Output("(history is empty)".into()));
                }
                let lines: Vec<Entry> = self
                    .history
                    .entries()
                    .iter()
                    .enumerate()
                    .map(|(i, e)| Entry::Output(format!("{:>4}  {}", i, e)))
                    .collect();
                self.transcript.extend(lines);
            }
            Command::HistoryClear => {
                self.history.clear();
                self.save_history();
                self.transcript.push(Entry::Output("History cleared".into()));
            }
            Command::HistoryShow(n) => match self.history.get(n) {
                Some(e) => self.transcript.push(Entry::Output(format!("{:>4}  {}", n, e))),
                None => self.transcript.push(Entry::Error(format!(
                    "no history entry {} (have {})",
                    n,
                    self.history.len()
                ))),
            },
            Command::ClearScreen => self.transcript.clear(),
            Command::Exit => self.should_quit = true,
            Command::Echo(line) => self.transcript.push(Entry::Output(line)),
        }
    }

    pub fn on_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        let alt = key.modifiers.contains(KeyModifiers::ALT);
        let shift = key.modifiers.contains(KeyModifiers::SHIFT);
        // AltGr arrives as CONTROL | ALT on Windows and some layouts.
        let altgr = ctrl && alt;
        match key.code {
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('c') if ctrl && !alt => self.should_quit = true,
            KeyCode::Char('a') if ctrl && !alt => {
                self.input.move_to_start();
            }
            KeyCode::Char('e') if ctrl && !alt => {
                self.input.move_to_end();
            }
            KeyCode::Char(ch) => {
                if altgr || (!ctrl && !alt) {
                    self.insert_char(ch);
                }
            }
            KeyCode::Enter => self.submit(),
            KeyCode::Backspace => self.delete_before(),
            KeyCode::Delete => self.delete_at(),
            KeyCode::Left => {
                self.input.move_left();
            }
            KeyCode::Right => {
                self.input.move_right();
            }
            KeyCode::Up if shift => self.recall_older(),
            KeyCode::Down if shift => self.recall_newer(),
            KeyCode::Up | KeyCode::Home => {
                self.input.move_to_start();
            }
            KeyCode::Down | KeyCode::End => {
                self.input.move_to_end();
            }
            _ => return,
        }
        self.restart_blink();
        // Mark dirty on any handled key press path.
        self.dirty = true;
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::time::Duration;

    pub(crate) fn app_with(lines: &[&str]) -> App {
        let history = HistoryStore::from_entries(lines.iter().map(|s| s.to_string()).collect());
        App::with_history(Config::default(), None, history)
    }

    pub(crate) fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    pub(crate) fn type_str(app: &mut App, s: &str) {
        for ch in s.chars() {
            app.on_key(key(KeyCode::Char(ch)));
        }
    }

    #[test]
    fn typing_and_arrows() {
        let mut app = app_with(&[]);
        type_str(&mut app, "ls -la");
        app.on_key(key(KeyCode::Left));
        app.on_key(key(KeyCode::Left));
        app.on_key(key(KeyCode::Backspace));
        assert_eq!(app.input.text(), "ls la");
        app.on_key(key(KeyCode::Up));
        assert_eq!(app.input.position(), 0);
        app.on_key(key(KeyCode::Delete));
        assert_eq!(app.input.text(), "s la");
        app.on_key(key(KeyCode::Down));
        assert_eq!(app.input.position(), 4);
    }

    #[test]
    fn control_chords_do_not_insert() {
        let mut app = app_with(&[]);
        type_str(&mut app, "ab");
        app.on_key(KeyEvent::new(KeyCode::Char('a'), KeyModifiers::CONTROL));
        assert_eq!(app.input.text(), "ab");
        assert_eq!(app.input.position(), 0);
        app.on_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(app.should_quit);
    }

    #[test]
    fn altgr_characters_are_typed() {
        let mut app = app_with(&[]);
        let altgr = KeyModifiers::CONTROL | KeyModifiers::ALT;
        app.on_key(KeyEvent::new(KeyCode::Char('@'), altgr));
        app.on_key(KeyEvent::new(KeyCode::Char('€'), altgr));
        assert_eq!(app.input.text(), "@€");
        app.on_key(KeyEvent::new(KeyCode::Char('c'), altgr));
        assert!(!app.should_quit);
        assert_eq!(app.input.text(), "@€c");
        app.on_key(KeyEvent::new(KeyCode::Char('x'), KeyModifiers::ALT));
        assert_eq!(app.input.text(), "@€c");
    }

    #[test]
    fn release_events_are_ignored() {
        let mut app = app_with(&[]);
        let mut ev = key(KeyCode::Char('x'));
        ev.kind = KeyEventKind::Release;
        app.on_key(ev);
        assert!(app.input.is_empty());
    }

    #[test]
    fn submit_echoes_and_clears() {
        let mut app = app_with(&[]);
        type_str(&mut app, "echo hi");
        app.on_key(key(KeyCode::Enter));
        assert!(app.input.is_empty());
        assert_eq!(
            &app.transcript[app.transcript.len() - 2..],
            [
                Entry::Input("echo hi".into()),
                Entry::Output("echo hi".into())
            ]
        );
        assert_eq!(app.history.entries(), ["echo hi"]);
    }

    #[test]
    fn blank_submit_is_ignored() {
        let mut app = app_with(&[]);
        type_str(&mut app, "   ");
        let before = app.transcript.len();
        app.submit();
        assert_eq!(app.transcript.len(), before);
        assert!(app.history.is_empty());
    }

    #[test]
    fn history_commands() {
        let mut app = app_with(&["cd /tmp"]);
        type_str(&mut app, "history 5");
        app.submit();
        assert!(matches!(app.transcript.last(), Some(Entry::Error(_))));
        type_str(&mut app, "history clear");
        app.submit();
        assert!(app.history.is_empty());
        type_str(&mut app, "exit");
        app.submit();
        assert!(app.should_quit);
    }

    #[test]
    fn blink_toggles_only_while_focused() {
        let mut app = app_with(&[]);
        let later = Instant::now() + Duration::from_secs(5);
        app.on_tick(later);
        assert!(!app.cursor_lit(&app.view()));
        app.on_focus(false);
        assert!(app.cursor_lit(&app.view()));
        app.on_tick(later + Duration::from_secs(5));
        assert!(app.cursor_lit(&app.view()));
        app.on_focus(true);
        assert!(app.cursor_lit(&app.view()));
    }
}
