// Keyrec Key Types
// Browser keycodes, captured key events and the keycode name table

use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

include!(concat!(env!("OUT_DIR"), "/key_codes.rs"));

/// Well-known DOM keycodes
pub mod codes {
    use super::KeyCode;

    pub const BACKSPACE: KeyCode = KeyCode(8);
    pub const TAB: KeyCode = KeyCode(9);
    pub const ENTER: KeyCode = KeyCode(13);
    pub const SHIFT: KeyCode = KeyCode(16);
    pub const CTRL: KeyCode = KeyCode(17);
    pub const ALT: KeyCode = KeyCode(18);
    pub const ESCAPE: KeyCode = KeyCode(27);
    pub const SPACE: KeyCode = KeyCode(32);
    pub const ARROW_LEFT: KeyCode = KeyCode(37);
    pub const ARROW_UP: KeyCode = KeyCode(38);
    pub const ARROW_RIGHT: KeyCode = KeyCode(39);
    pub const ARROW_DOWN: KeyCode = KeyCode(40);
    pub const DELETE: KeyCode = KeyCode(46);
    /// Reported by browsers while an input method is composing text
    pub const COMPOSITION: KeyCode = KeyCode(229);
}

/// Built-in protocol names, in picker order.
static DEFAULT_KEY_NAMES: &[(u16, &str)] = &[
    (8, "KEY_BACKSPACE"),
    (9, "KEY_TAB"),
    (13, "KEY_ENTER"),
    (16, "KEY_SHIFT"),
    (17, "KEY_CTRL"),
    (18, "KEY_ALT"),
    (19, "KEY_PAUSE"),
    (20, "KEY_CAPS_LOCK"),
    (27, "KEY_ESC"),
    (32, "KEY_SPACE"),
    (33, "KEY_PAGE_UP"),
    (34, "KEY_PAGE_DOWN"),
    (35, "KEY_END"),
    (36, "KEY_HOME"),
    (37, "KEY_LEFT"),
    (38, "KEY_UP"),
    (39, "KEY_RIGHT"),
    (40, "KEY_DOWN"),
    (44, "KEY_PRINTSCREEN"),
    (45, "KEY_INSERT"),
    (46, "KEY_DELETE"),
    (48, "KEY_0"),
    (49, "KEY_1"),
    (50, "KEY_2"),
    (51, "KEY_3"),
    (52, "KEY_4"),
    (53, "KEY_5"),
    (54, "KEY_6"),
    (55, "KEY_7"),
    (56, "KEY_8"),
    (57, "KEY_9"),
    (65, "KEY_A"),
    (66, "KEY_B"),
    (67, "KEY_C"),
    (68, "KEY_D"),
    (69, "KEY_E"),
    (70, "KEY_F"),
    (71, "KEY_G"),
    (72, "KEY_H"),
    (73, "KEY_I"),
    (74, "KEY_J"),
    (75, "KEY_K"),
    (76, "KEY_L"),
    (77, "KEY_M"),
    (78, "KEY_N"),
    (79, "KEY_O"),
    (80, "KEY_P"),
    (81, "KEY_Q"),
    (82, "KEY_R"),
    (83, "KEY_S"),
    (84, "KEY_T"),
    (85, "KEY_U"),
    (86, "KEY_V"),
    (87, "KEY_W"),
    (88, "KEY_X"),
    (89, "KEY_Y"),
    (90, "KEY_Z"),
    (91, "KEY_GUI"),
    (93, "KEY_MENU"),
    (96, "KEY_NUM_0"),
    (97, "KEY_NUM_1"),
    (98, "KEY_NUM_2"),
    (99, "KEY_NUM_3"),
    (100, "KEY_NUM_4"),
    (101, "KEY_NUM_5"),
    (102, "KEY_NUM_6"),
    (103, "KEY_NUM_7"),
    (104, "KEY_NUM_8"),
    (105, "KEY_NUM_9"),
    (112, "KEY_F1"),
    (113, "KEY_F2"),
    (114, "KEY_F3"),
    (115, "KEY_F4"),
    (116, "KEY_F5"),
    (117, "KEY_F6"),
    (118, "KEY_F7"),
    (119, "KEY_F8"),
    (120, "KEY_F9"),
    (121, "KEY_F10"),
    (122, "KEY_F11"),
    (123, "KEY_F12"),
    (144, "KEY_NUM_LOCK"),
    (145, "KEY_SCROLL_LOCK"),
    (186, "KEY_SEMICOLON"),
    (187, "KEY_EQUAL"),
    (188, "KEY_COMMA"),
    (189, "KEY_MINUS"),
    (190, "KEY_PERIOD"),
    (191, "KEY_SLASH"),
    (192, "KEY_TILDE"),
    (219, "KEY_LEFT_BRACE"),
    (220, "KEY_BACKSLASH"),
    (221, "KEY_RIGHT_BRACE"),
    (222, "KEY_QUOTE"),
];

/// Protocol name for a keycode from the built-in table
pub fn key_name(code: u16) -> Option<&'static str> {
    static KEY_NAMES: OnceLock<Vec<Option<&'static str>>> = OnceLock::new();
    KEY_NAMES
        .get_or_init(|| {
            let mut names = vec![None; 0x100];
            for &(code, name) in DEFAULT_KEY_NAMES {
                names[code as usize] = Some(name);
            }
            names
        })
        .get(code as usize)
        .copied()
        .flatten()
}

/// Keycode for a protocol name, with or without the `KEY_` prefix
pub fn key_from_name(name: &str) -> Option<KeyCode> {
    let upper = name.trim().to_uppercase();
    let wanted = if upper.starts_with("KEY_") {
        upper
    } else {
        format!("KEY_{}", upper)
    };
    DEFAULT_KEY_NAMES
        .iter()
        .find(|(_, n)| *n == wanted)
        .map(|(code, _)| KeyCode(*code))
}

/// Keycode for a DOM `KeyboardEvent.key` value of a named key
pub fn dom_key_code(key: &str) -> Option<KeyCode> {
    let code = match key {
        "Backspace" => 8,
        "Tab" => 9,
        "Enter" => 13,
        "Shift" => 16,
        "Control" => 17,
        "Alt" | "AltGraph" => 18,
        "Pause" => 19,
        "CapsLock" => 20,
        "Escape" => 27,
        "PageUp" => 33,
        "PageDown" => 34,
        "End" => 35,
        "Home" => 36,
        "ArrowLeft" => 37,
        "ArrowUp" => 38,
        "ArrowRight" => 39,
        "ArrowDown" => 40,
        "PrintScreen" => 44,
        "Insert" => 45,
        "Delete" => 46,
        "Meta" => 91,
        "ContextMenu" => 93,
        "NumLock" => 144,
        "ScrollLock" => 145,
        _ => {
            let n = key.strip_prefix('F')?.parse::<u16>().ok()?;
            if !(1..=12).contains(&n) {
                return None;
            }
            111 + n
        }
    };
    Some(KeyCode(code))
}

/// Keycode a US layout reports for a typed character
pub fn char_key_code(c: char) -> Option<KeyCode> {
    let code = match c {
        'a'..='z' | 'A'..='Z' | '0'..='9' => c.to_ascii_uppercase() as u16,
        ' ' => 32,
        ';' | ':' => 186,
        '=' | '+' => 187,
        ',' | '<' => 188,
        '-' | '_' => 189,
        '.' | '>' => 190,
        '/' | '?' => 191,
        '`' | '~' => 192,
        '[' | '{' => 219,
        '\\' | '|' => 220,
        ']' | '}' => 221,
        '\'' | '"' => 222,
        _ => return None,
    };
    Some(KeyCode(code))
}

/// One captured keystroke.
///
/// Two events are the same key when their `key` values are equal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyEvent {
    /// The DOM `key` value: a single character or a key name
    pub key: String,
    /// The DOM keycode
    pub key_code: KeyCode,
    /// Whether Alt was held when the key went down
    pub alt_key: bool,
}

impl KeyEvent {
    /// Create a new key event
    pub fn new(key: impl Into<String>, key_code: KeyCode, alt_key: bool) -> Self {
        Self {
            key: key.into(),
            key_code,
            alt_key,
        }
    }

    /// A typed character, keycode derived from the US layout (0 when unknown)
    pub fn character(c: char) -> Self {
        let key_code = char_key_code(c).unwrap_or(KeyCode(0));
        Self::new(c.to_string(), key_code, false)
    }

    /// A named key such as `ArrowUp`
    pub fn named(name: impl Into<String>, key_code: KeyCode) -> Self {
        Self::new(name, key_code, false)
    }

    /// Mark the Alt modifier as active
    pub fn with_alt(mut self) -> Self {
        self.alt_key = true;
        self
    }

    /// Parse a textual token: a single character, a DOM key name or a protocol name
    pub fn from_token(token: &str) -> Option<Self> {
        let mut chars = token.chars();
        if let (Some(c), None) = (chars.next(), chars.next()) {
            return Some(Self::character(c));
        }
        if let Some(code) = dom_key_code(token) {
            return Some(Self::named(token, code));
        }
        // A bare space cannot survive whitespace splitting
        if token.eq_ignore_ascii_case("space") {
            return Some(Self::character(' '));
        }
        match key_from_name(token)? {
            codes::SPACE => Some(Self::character(' ')),
            code => Some(Self::named(token, code)),
        }
    }
}

impl fmt::Display for KeyEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}({})", self.key, self.key_code.code())?;
        if self.alt_key {
            write!(f, "+alt")?;
        }
        Ok(())
    }
}

/// Keycode to protocol name mapping.
///
/// Its key set is also the set of keycodes that may be recorded at all.
#[derive(Debug, Clone, PartialEq)]
pub struct KeycodeNameTable {
    names: IndexMap<KeyCode, String>,
}

impl KeycodeNameTable {
    /// Create an empty table
    pub fn empty() -> Self {
        Self {
            names: IndexMap::new(),
        }
    }

    /// The built-in table
    pub fn builtin() -> Self {
        let names = DEFAULT_KEY_NAMES
            .iter()
            .map(|&(code, name)| (KeyCode(code), name.to_string()))
            .collect();
        Self { names }
    }

    /// Add or replace a name
    pub fn insert(&mut self, code: KeyCode, name: impl Into<String>) {
        self.names.insert(code, name.into());
    }

    /// Remove a keycode, which also drops it from the supported set
    pub fn remove(&mut self, code: KeyCode) -> Option<String> {
        self.names.shift_remove(&code)
    }

    /// Protocol name for a keycode
    pub fn name(&self, code: KeyCode) -> Option<&str> {
        self.names.get(&code).map(String::as_str)
    }

    /// Whether a keycode may be recorded
    pub fn is_supported(&self, code: KeyCode) -> bool {
        self.names.contains_key(&code)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Entries in table order
    pub fn iter(&self) -> impl Iterator<Item = (KeyCode, &str)> {
        self.names.iter().map(|(code, name)| (*code, name.as_str()))
    }
}

impl Default for KeycodeNameTable {
    fn default() -> Self {
        Self::builtin()
    }
}
