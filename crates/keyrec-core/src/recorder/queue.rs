// Keyrec Recording Queue
// Ordered buffer of captured keys and its mutation rules

use std::fmt;

use crate::classify::{is_special, SpecialKeys};
use crate::key::KeyEvent;
use crate::text::recorded_text;

/// What happened to a key event fed into a recording
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// Added to the end of the recording
    Appended,
    /// The undo key removed the last key
    Undone,
    /// The same special key pressed again removed it
    ToggledOff,
    /// A special key after text; the recording is unchanged
    Rejected,
    /// Keycode outside the supported set
    Unsupported,
    /// Never recorded (Tab, auto-repeat, nothing to do)
    Ignored,
    /// The key announced composed text input
    Composing,
}

impl Outcome {
    /// Whether the recording changed
    pub fn is_mutation(self) -> bool {
        matches!(self, Outcome::Appended | Outcome::Undone | Outcome::ToggledOff)
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Appended => write!(f, "appended"),
            Outcome::Undone => write!(f, "undone"),
            Outcome::ToggledOff => write!(f, "toggled off"),
            Outcome::Rejected => write!(f, "rejected"),
            Outcome::Unsupported => write!(f, "unsupported"),
            Outcome::Ignored => write!(f, "ignored"),
            Outcome::Composing => write!(f, "composing"),
        }
    }
}

/// The in-progress recording
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordingQueue {
    events: Vec<KeyEvent>,
}

impl RecordingQueue {
    /// Create a new empty queue
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    /// Apply one supported key event.
    ///
    /// Rules, first match wins:
    /// 1. the undo key while the recording is non-empty text pops the last key
    /// 2. the last recorded special key pressed again pops it
    /// 3. any other special key except the separator is dropped while the recording is text
    /// 4. otherwise the key is appended
    pub fn apply(&mut self, event: KeyEvent, keys: &SpecialKeys) -> Outcome {
        let has_text = recorded_text(&self.events, keys).is_some();
        let special = is_special(&event);

        let is_undo = event.key_code == keys.undo && has_text;
        let is_rejected = has_text && event.key_code != keys.separator && special;
        let is_toggle_off = self.events.last().is_some_and(|last| last.key == event.key) && special;

        if is_undo || is_toggle_off {
            self.events.pop();
            if is_undo {
                Outcome::Undone
            } else {
                Outcome::ToggledOff
            }
        } else if is_rejected {
            Outcome::Rejected
        } else {
            self.events.push(event);
            Outcome::Appended
        }
    }

    /// Drop the last key regardless of the rules (text field shrank)
    pub(crate) fn pop(&mut self) -> Option<KeyEvent> {
        self.events.pop()
    }

    /// Remove everything; safe to call on an empty queue
    pub fn clear(&mut self) {
        self.events.clear();
    }

    pub fn events(&self) -> &[KeyEvent] {
        &self.events
    }

    pub fn last(&self) -> Option<&KeyEvent> {
        self.events.last()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}
