// Keyrec Key Classification
// Printable/special predicates and AltGr composition detection

use serde::Deserialize;

use crate::key::{codes, KeyCode, KeyEvent};

/// Keycodes with a fixed role while recording
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SpecialKeys {
    /// Removes the last recorded key while the recording is text
    pub undo: KeyCode,
    /// Separates words; allowed after text even though it may be special
    pub separator: KeyCode,
    /// Never recorded
    pub tab: KeyCode,
    /// Skipped when reconstructing text
    pub shift: KeyCode,
    pub ctrl: KeyCode,
    pub alt: KeyCode,
    /// Switches the session to reading composed text input
    pub composition: KeyCode,
}

impl Default for SpecialKeys {
    fn default() -> Self {
        Self {
            undo: codes::BACKSPACE,
            separator: codes::SPACE,
            tab: codes::TAB,
            shift: codes::SHIFT,
            ctrl: codes::CTRL,
            alt: codes::ALT,
            composition: codes::COMPOSITION,
        }
    }
}

/// True if the event's key is exactly one character
pub fn is_printable(event: &KeyEvent) -> bool {
    let mut chars = event.key.chars();
    chars.next().is_some() && chars.next().is_none()
}

/// True for named keys (arrows, modifiers, function keys, ...)
pub fn is_special(event: &KeyEvent) -> bool {
    !is_printable(event)
}

/// Detect the Ctrl, Alt, character sequence some layouts emit for one AltGr character.
///
/// All three events must exist and the character must carry a keycode and the Alt flag.
pub fn is_altgr_triple(
    first: Option<&KeyEvent>,
    second: Option<&KeyEvent>,
    third: Option<&KeyEvent>,
    keys: &SpecialKeys,
) -> bool {
    let (Some(first), Some(second), Some(third)) = (first, second, third) else {
        return false;
    };
    first.key_code == keys.ctrl
        && second.key_code == keys.alt
        && is_printable(third)
        && third.key_code.code() != 0
        && third.alt_key
}
