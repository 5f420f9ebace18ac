use std::path::PathBuf;

use keyrec_core::{Config, ConfigError, Language, Outcome, RecordingSession};

const MAX_HISTORY: usize = 200;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Mode {
    Idle,
    Recording,
}

/// A command the user saved during this run
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SavedCommand {
    pub command: String,
    pub readable: String,
}

pub struct App {
    pub session: RecordingSession,
    pub mode: Mode,
    pub history: Vec<SavedCommand>,
    pub status: String,
    pub last_outcome: Option<Outcome>,
    pub language: Language,
    pub config_path: Option<PathBuf>,
}

impl App {
    pub fn new(config: &Config) -> Result<Self, ConfigError> {
        Ok(Self {
            session: config.session()?,
            mode: Mode::Idle,
            history: Vec::new(),
            status: "Press r to record".to_string(),
            last_outcome: None,
            language: config.language,
            config_path: config.source_path().map(PathBuf::from),
        })
    }

    pub fn set_status(&mut self, status: impl Into<String>) {
        self.status = status.into();
    }

    pub fn start_recording(&mut self) {
        self.mode = Mode::Recording;
        self.last_outcome = None;
        self.set_status("Recording; Tab stops");
    }

    pub fn stop_recording(&mut self) {
        self.mode = Mode::Idle;
        if self.session.preview().can_save {
            self.set_status("Stopped; Enter saves, x discards");
        } else {
            self.set_status("Stopped; nothing recorded");
        }
    }

    pub fn record_outcome(&mut self, outcome: Outcome) {
        self.last_outcome = Some(outcome);
    }

    pub fn save(&mut self) {
        let readable = self.session.current_preview_text().to_string();
        match self.session.save() {
            Some(command) => {
                self.set_status(format!("Saved {}", command));
                self.history.push(SavedCommand { command, readable });
                if self.history.len() > MAX_HISTORY {
                    let overflow = self.history.len() - MAX_HISTORY;
                    self.history.drain(..overflow);
                }
            }
            None => self.set_status("Nothing to save"),
        }
        self.last_outcome = None;
    }

    pub fn reset(&mut self) {
        self.session.reset();
        self.last_outcome = None;
        self.set_status("Recording discarded");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use keyrec_core::KeyEvent;

    fn app() -> App {
        App::new(&Config::default()).unwrap()
    }

    #[test]
    fn test_save_moves_command_to_history() {
        let mut app = app();
        app.start_recording();
        app.session.record_key_event(KeyEvent::character('o'));
        app.session.record_key_event(KeyEvent::character('k'));
        app.stop_recording();
        app.save();

        assert_eq!(
            app.history,
            vec![SavedCommand {
                command: "AT KW ok".to_string(),
                readable: "Write word: ok ".to_string(),
            }]
        );
        assert!(app.session.events().is_empty());
    }

    #[test]
    fn test_save_without_recording() {
        let mut app = app();
        app.save();
        assert!(app.history.is_empty());
        assert_eq!(app.status, "Nothing to save");
    }

    #[test]
    fn test_history_is_capped() {
        let mut app = app();
        for _ in 0..MAX_HISTORY + 5 {
            app.session.record_key_event(KeyEvent::character('a'));
            app.save();
        }
        assert_eq!(app.history.len(), MAX_HISTORY);
    }
}
