use std::io;

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers, ModifierKeyCode};
use keyrec_core::key::dom_key_code;
use keyrec_core::KeyCode as DomKeyCode;
use smallvec::SmallVec;

use crate::tui::app::{App, Mode};

/// Handle input and return true if the app should quit
pub fn handle_input(app: &mut App, key: KeyEvent) -> io::Result<bool> {
    match app.mode {
        Mode::Idle => Ok(handle_idle(app, key.code)),
        Mode::Recording => {
            handle_recording(app, key);
            Ok(false)
        }
    }
}

fn handle_idle(app: &mut App, key: KeyCode) -> bool {
    match key {
        KeyCode::Char('q') => return true,
        KeyCode::Char('r') => app.start_recording(),
        KeyCode::Char('x') => app.reset(),
        KeyCode::Enter => app.save(),
        _ => {}
    }
    false
}

fn handle_recording(app: &mut App, key: KeyEvent) {
    // Tab leaves the capture field, as it does in a browser
    if matches!(key.code, KeyCode::Tab | KeyCode::BackTab) {
        app.stop_recording();
        return;
    }

    let repeat = key.kind == KeyEventKind::Repeat;
    for event in to_dom_events(&key) {
        let outcome = app.session.handle_key_down(event, repeat);
        app.record_outcome(outcome);
    }
}

/// Translate a terminal key into the key-downs a browser would report.
///
/// Ctrl and Alt held with the key produce their own key-downs first, so
/// Ctrl+Alt+character arrives as an AltGr composition.
pub fn to_dom_events(key: &KeyEvent) -> SmallVec<[keyrec_core::KeyEvent; 3]> {
    let mut events = SmallVec::new();
    let alt = key.modifiers.contains(KeyModifiers::ALT);

    if let KeyCode::Modifier(modifier) = key.code {
        if let Some(event) = modifier_event(modifier) {
            events.push(event);
        }
        return events;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) {
        events.push(named("Control"));
    }
    if alt {
        events.push(named("Alt"));
    }

    let main = match key.code {
        KeyCode::Char(c) => {
            let event = keyrec_core::KeyEvent::character(c);
            Some(if alt { event.with_alt() } else { event })
        }
        code => {
            if key.modifiers.contains(KeyModifiers::SHIFT) {
                events.push(named("Shift"));
            }
            special_name(code).map(|name| named(&name))
        }
    };
    match main {
        Some(event) => events.push(event),
        None => events.clear(),
    }
    events
}

fn modifier_event(modifier: ModifierKeyCode) -> Option<keyrec_core::KeyEvent> {
    let name = match modifier {
        ModifierKeyCode::LeftShift | ModifierKeyCode::RightShift => "Shift",
        ModifierKeyCode::LeftControl | ModifierKeyCode::RightControl => "Control",
        ModifierKeyCode::LeftAlt | ModifierKeyCode::RightAlt => "Alt",
        ModifierKeyCode::IsoLevel3Shift => "AltGraph",
        ModifierKeyCode::LeftSuper | ModifierKeyCode::RightSuper => "Meta",
        _ => return None,
    };
    Some(named(name))
}

fn special_name(code: KeyCode) -> Option<String> {
    let name = match code {
        KeyCode::Backspace => "Backspace",
        KeyCode::Enter => "Enter",
        KeyCode::Left => "ArrowLeft",
        KeyCode::Right => "ArrowRight",
        KeyCode::Up => "ArrowUp",
        KeyCode::Down => "ArrowDown",
        KeyCode::Home => "Home",
        KeyCode::End => "End",
        KeyCode::PageUp => "PageUp",
        KeyCode::PageDown => "PageDown",
        KeyCode::Delete => "Delete",
        KeyCode::Insert => "Insert",
        KeyCode::Esc => "Escape",
        KeyCode::CapsLock => "CapsLock",
        KeyCode::ScrollLock => "ScrollLock",
        KeyCode::NumLock => "NumLock",
        KeyCode::PrintScreen => "PrintScreen",
        KeyCode::Pause => "Pause",
        KeyCode::Menu => "ContextMenu",
        KeyCode::F(n) => return Some(format!("F{}", n)),
        _ => return None,
    };
    Some(name.to_string())
}

fn named(name: &str) -> keyrec_core::KeyEvent {
    let code = dom_key_code(name).unwrap_or(DomKeyCode(0));
    keyrec_core::KeyEvent::named(name, code)
}
