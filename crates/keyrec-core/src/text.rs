// Keyrec Text Reconstruction
// Plain-text interpretation of a recorded key sequence

use crate::classify::{is_altgr_triple, is_printable, SpecialKeys};
use crate::key::KeyEvent;

/// Rebuild the typed text of a recording.
///
/// Returns `None` as soon as a special key is found that is neither Shift nor the
/// start of an AltGr composition. A composition is consumed as a whole and adds
/// nothing to the text. An empty recording yields `Some("")`.
pub fn reconstruct_text(events: &[KeyEvent], keys: &SpecialKeys) -> Option<String> {
    let mut text = String::new();
    let mut i = 0;
    while i < events.len() {
        let event = &events[i];
        if is_printable(event) {
            text.push_str(&event.key);
            i += 1;
        } else if is_altgr_triple(Some(event), events.get(i + 1), events.get(i + 2), keys) {
            log::trace!("AltGr composition at {}", i);
            i += 3;
        } else if event.key_code == keys.shift {
            i += 1;
        } else {
            log::trace!("{} is not text, reconstruction stops", event);
            return None;
        }
    }
    Some(text)
}

/// Reconstructed text, but only when it is non-empty
pub fn recorded_text(events: &[KeyEvent], keys: &SpecialKeys) -> Option<String> {
    reconstruct_text(events, keys).filter(|text| !text.is_empty())
}
