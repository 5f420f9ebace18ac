// Keyrec Command Encoder
// Turns a finished recording into a device AT command

use serde::Deserialize;

use crate::classify::SpecialKeys;
use crate::key::{KeyEvent, KeycodeNameTable};
use crate::text::reconstruct_text;

pub const AT_CMD_WRITEWORD: &str = "AT KW";
pub const AT_CMD_KEYPRESS: &str = "AT KP";
pub const LENGTH_ATCMD_PREFIX: usize = 6;
pub const MAX_LENGTH_ATCMD: usize = 400;

/// Command protocol constants
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ProtocolConfig {
    /// Prefix of the "write word" command
    pub word_prefix: String,
    /// Prefix of the "press keys" command
    pub keypress_prefix: String,
    /// Width of the prefix including the space before the argument
    pub prefix_width: usize,
    /// Commands are cut to this many characters
    pub max_length: usize,
}

impl Default for ProtocolConfig {
    fn default() -> Self {
        Self {
            word_prefix: AT_CMD_WRITEWORD.to_string(),
            keypress_prefix: AT_CMD_KEYPRESS.to_string(),
            prefix_width: LENGTH_ATCMD_PREFIX,
            max_length: MAX_LENGTH_ATCMD,
        }
    }
}

/// Encode a recording as a command string.
///
/// Text of two or more characters becomes a word command, anything else a
/// keypress command built from the protocol names of every recorded keycode.
pub fn encode(
    events: &[KeyEvent],
    names: &KeycodeNameTable,
    keys: &SpecialKeys,
    protocol: &ProtocolConfig,
) -> String {
    if events.is_empty() {
        return String::new();
    }

    let command = match reconstruct_text(events, keys) {
        Some(text) if text.chars().count() > 1 => {
            format!("{} {}", protocol.word_prefix, text)
        }
        _ => {
            let combo = events
                .iter()
                .filter_map(|event| names.name(event.key_code))
                .collect::<Vec<_>>()
                .join(" ");
            format!("{} {}", protocol.keypress_prefix, combo.trim_end())
        }
    };

    truncate_chars(command, protocol.max_length)
}

fn truncate_chars(mut s: String, max: usize) -> String {
    if let Some((idx, _)) = s.char_indices().nth(max) {
        log::debug!("command cut to {} characters", max);
        s.truncate(idx);
    }
    s
}
