// Keyrec Recording Session
// Owns the recording queue and keeps the live preview in sync

use smallvec::SmallVec;

use crate::classify::SpecialKeys;
use crate::command::{encode, ProtocolConfig};
use crate::i18n::{LABEL_ENTERED_ACTION, LABEL_NONE};
use crate::key::{KeyCode, KeyEvent, KeycodeNameTable};
use crate::readable::{decode, Translate};
use crate::recorder::queue::{Outcome, RecordingQueue};
use crate::text::{reconstruct_text, recorded_text};

/// Read-only lookup tables and constants a session works with
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecorderSettings {
    pub names: KeycodeNameTable,
    pub keys: SpecialKeys,
    pub protocol: ProtocolConfig,
}

/// Snapshot of what the recording currently means
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Preview {
    /// Command that would be saved, empty when nothing is recorded
    pub command: String,
    /// Localized description of `command`
    pub readable: String,
    /// Screen-reader text describing the entered action
    pub announcement: String,
    /// Whether saving would produce a command
    pub can_save: bool,
}

type PreviewListener = Box<dyn FnMut(&Preview)>;

/// One active recording.
///
/// Every handled event runs to completion (mutate, encode, decode, notify)
/// before the next one is accepted.
pub struct RecordingSession {
    queue: RecordingQueue,
    settings: RecorderSettings,
    translator: Box<dyn Translate>,
    preview: Preview,
    listeners: Vec<PreviewListener>,
    /// Set by the composition keycode; the next text input is recorded
    listening_to_input: bool,
    /// Character count of the last readable preview
    last_input_length: usize,
}

impl RecordingSession {
    /// Create a new session with an empty recording
    pub fn new(settings: RecorderSettings, translator: Box<dyn Translate>) -> Self {
        let mut session = Self {
            queue: RecordingQueue::new(),
            settings,
            translator,
            preview: Preview::default(),
            listeners: Vec::new(),
            listening_to_input: false,
            last_input_length: 0,
        };
        session.refresh();
        session
    }

    /// Subscribe to preview changes
    pub fn on_preview(&mut self, listener: impl FnMut(&Preview) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    /// A raw key-down from the capture field
    pub fn handle_key_down(&mut self, event: KeyEvent, repeat: bool) -> Outcome {
        if repeat {
            log::trace!("{} ignored: auto-repeat", event);
            return Outcome::Ignored;
        }
        self.record_key_event(event)
    }

    /// Feed one captured key into the recording
    pub fn record_key_event(&mut self, event: KeyEvent) -> Outcome {
        let keys = &self.settings.keys;
        if event.key_code == keys.tab {
            log::trace!("{} ignored: tab", event);
            return Outcome::Ignored;
        }
        if event.key_code == keys.composition {
            log::debug!("composition started, waiting for text input");
            self.listening_to_input = true;
            return Outcome::Composing;
        }
        self.process(event)
    }

    /// Text inserted into the capture field by an input method.
    ///
    /// `field_len` is the character count of the field after the insertion.
    pub fn handle_text_input(&mut self, data: &str, field_len: usize) -> SmallVec<[Outcome; 4]> {
        let mut outcomes = SmallVec::new();
        if !self.listening_to_input || self.last_input_length >= field_len {
            if self.last_input_length > field_len {
                log::debug!("capture field shrank, dropping last key");
                self.queue.pop();
                self.refresh();
                outcomes.push(Outcome::Undone);
            }
            return outcomes;
        }

        self.listening_to_input = false;
        for c in data.chars() {
            let upper = c.to_uppercase().next().unwrap_or(c);
            let code = u16::try_from(u32::from(upper)).unwrap_or(0);
            outcomes.push(self.process(KeyEvent::new(c.to_string(), KeyCode(code), false)));
        }
        outcomes
    }

    /// Add a key chosen from a picker instead of typed
    pub fn add_special_key(&mut self, code: KeyCode) -> Outcome {
        if recorded_text(self.queue.events(), &self.settings.keys).is_some() {
            self.reset();
        }
        self.process(KeyEvent::named(format!("SPECIAL_{}", code.code()), code))
    }

    /// Keys a picker can offer, in table order
    pub fn special_key_choices(&self) -> impl Iterator<Item = (KeyCode, &str)> {
        self.settings.names.iter()
    }

    /// Discard the recording
    pub fn reset(&mut self) {
        self.queue.clear();
        self.last_input_length = 0;
        self.refresh();
    }

    /// Take the finished command and start over
    pub fn save(&mut self) -> Option<String> {
        let command = std::mem::take(&mut self.preview.command);
        self.reset();
        if command.is_empty() {
            None
        } else {
            log::info!("saved command {:?}", command);
            Some(command)
        }
    }

    /// Describe any stored command with this session's protocol and translations
    pub fn decode(&self, command: &str) -> String {
        decode(command, &self.settings.protocol, self.translator.as_ref())
    }

    pub fn preview(&self) -> &Preview {
        &self.preview
    }

    /// Localized description of the recording
    pub fn current_preview_text(&self) -> &str {
        &self.preview.readable
    }

    /// Command to send once the user confirms
    pub fn current_encoded_command(&self) -> &str {
        &self.preview.command
    }

    /// Plain text of the recording, `None` when it contains other special keys
    pub fn text(&self) -> Option<String> {
        reconstruct_text(self.queue.events(), &self.settings.keys)
    }

    pub fn events(&self) -> &[KeyEvent] {
        self.queue.events()
    }

    pub fn settings(&self) -> &RecorderSettings {
        &self.settings
    }

    pub fn is_listening_to_input(&self) -> bool {
        self.listening_to_input
    }

    fn process(&mut self, event: KeyEvent) -> Outcome {
        if !self.settings.names.is_supported(event.key_code) {
            log::trace!("{} dropped: unsupported keycode", event);
            return Outcome::Unsupported;
        }
        let description = event.to_string();
        let outcome = self.queue.apply(event, &self.settings.keys);
        log::debug!("{} {}, {} keys recorded", description, outcome, self.queue.len());
        self.refresh();
        outcome
    }

    fn refresh(&mut self) {
        let command = encode(
            self.queue.events(),
            &self.settings.names,
            &self.settings.keys,
            &self.settings.protocol,
        );
        let readable = self.decode(&command);
        let announcement = if readable.is_empty() {
            format!(
                "{}{}",
                self.translator.translate(LABEL_ENTERED_ACTION, ""),
                self.translator.translate(LABEL_NONE, "")
            )
        } else {
            format!("{}{}", self.translator.translate(LABEL_ENTERED_ACTION, ""), readable)
        };

        self.last_input_length = readable.chars().count();
        let preview = Preview {
            can_save: !command.is_empty(),
            command,
            readable,
            announcement,
        };
        if preview != self.preview {
            self.preview = preview;
            for listener in &mut self.listeners {
                listener(&self.preview);
            }
        }
    }
}

impl std::fmt::Debug for RecordingSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RecordingSession")
            .field("queue", &self.queue)
            .field("preview", &self.preview)
            .field("listening_to_input", &self.listening_to_input)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;
    use crate::i18n::{Catalog, Language};
    use crate::key::codes;

    fn session() -> RecordingSession {
        let catalog = Catalog::builtin(Language::En).unwrap();
        RecordingSession::new(RecorderSettings::default(), Box::new(catalog))
    }

    fn type_str(session: &mut RecordingSession, s: &str) {
        for c in s.chars() {
            session.record_key_event(KeyEvent::character(c));
        }
    }

    #[test]
    fn test_initial_preview() {
        let session = session();
        assert_eq!(session.current_encoded_command(), "");
        assert_eq!(session.current_preview_text(), "");
        assert_eq!(session.preview().announcement, "Entered action: (none)");
        assert!(!session.preview().can_save);
    }

    #[test]
    fn test_word_preview() {
        let mut session = session();
        type_str(&mut session, "ab");
        assert_eq!(session.current_encoded_command(), "AT KW ab");
        assert_eq!(session.current_preview_text(), "Write word: ab ");
        assert_eq!(session.preview().announcement, "Entered action: Write word: ab ");
        assert!(session.preview().can_save);
    }

    #[test]
    fn test_combo_preview() {
        let mut session = session();
        session.record_key_event(KeyEvent::named("Control", codes::CTRL));
        session.record_key_event(KeyEvent::character('c'));
        assert_eq!(session.current_encoded_command(), "AT KP KEY_CTRL KEY_C");
        assert_eq!(session.current_preview_text(), "Press keys: CTRL + C ");
    }

    #[test]
    fn test_unsupported_keycode_changes_nothing() {
        let mut session = session();
        type_str(&mut session, "ab");
        let before = session.preview().clone();
        let outcome = session.record_key_event(KeyEvent::named("Unidentified", KeyCode(250)));
        assert_eq!(outcome, Outcome::Unsupported);
        assert_eq!(session.preview(), &before);
        assert_eq!(session.events().len(), 2);
    }

    #[test]
    fn test_tab_and_repeat_ignored() {
        let mut session = session();
        assert_eq!(
            session.record_key_event(KeyEvent::named("Tab", codes::TAB)),
            Outcome::Ignored
        );
        assert_eq!(
            session.handle_key_down(KeyEvent::character('a'), true),
            Outcome::Ignored
        );
        assert!(session.events().is_empty());
    }

    #[test]
    fn test_reset_twice() {
        let mut session = session();
        type_str(&mut session, "abc");
        session.reset();
        session.reset();
        assert!(session.events().is_empty());
        assert_eq!(session.current_encoded_command(), "");
    }

    #[test]
    fn test_save_returns_command_and_clears() {
        let mut session = session();
        type_str(&mut session, "hello");
        assert_eq!(session.save(), Some("AT KW hello".to_string()));
        assert!(session.events().is_empty());
        assert_eq!(session.save(), None);
    }

    #[test]
    fn test_listener_notified_on_change_only() {
        let mut session = session();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        session.on_preview(move |preview| sink.borrow_mut().push(preview.command.clone()));

        type_str(&mut session, "a");
        session.record_key_event(KeyEvent::named("ArrowLeft", codes::ARROW_LEFT));
        type_str(&mut session, "b");

        assert_eq!(
            *seen.borrow(),
            vec!["AT KP KEY_A".to_string(), "AT KW ab".to_string()]
        );
    }

    #[test]
    fn test_composition_text_input() {
        let mut session = session();
        let outcome = session.handle_key_down(KeyEvent::named("Process", codes::COMPOSITION), false);
        assert_eq!(outcome, Outcome::Composing);
        assert!(session.is_listening_to_input());

        let outcomes = session.handle_text_input("hi", 2);
        assert_eq!(outcomes.as_slice(), &[Outcome::Appended, Outcome::Appended]);
        assert!(!session.is_listening_to_input());
        assert_eq!(session.current_encoded_command(), "AT KW hi");
    }

    #[test]
    fn test_text_input_ignored_when_not_listening() {
        let mut session = session();
        type_str(&mut session, "ab");
        let outcomes = session.handle_text_input("c", 100);
        assert!(outcomes.is_empty());
        assert_eq!(session.events().len(), 2);
    }

    #[test]
    fn test_field_shrink_drops_last_key() {
        let mut session = session();
        type_str(&mut session, "ab");
        let shown = session.current_preview_text().chars().count();
        let outcomes = session.handle_text_input("", shown - 1);
        assert_eq!(outcomes.as_slice(), &[Outcome::Undone]);
        assert_eq!(session.events(), &[KeyEvent::character('a')]);
    }

    #[test]
    fn test_add_special_key_replaces_text() {
        let mut session = session();
        type_str(&mut session, "ab");
        let outcome = session.add_special_key(codes::ESCAPE);
        assert_eq!(outcome, Outcome::Appended);
        assert_eq!(session.current_encoded_command(), "AT KP KEY_ESC");
    }

    #[test]
    fn test_add_special_key_twice_toggles_off() {
        let mut session = session();
        session.add_special_key(codes::ESCAPE);
        assert_eq!(session.add_special_key(codes::ESCAPE), Outcome::ToggledOff);
        assert!(session.events().is_empty());
    }

    #[test]
    fn test_special_key_choices_follow_table() {
        let session = session();
        let first = session.special_key_choices().next();
        assert_eq!(first, Some((codes::BACKSPACE, "KEY_BACKSPACE")));
    }
}
