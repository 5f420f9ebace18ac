// Keyrec Command Decoder
// Human-readable rendering of stored AT commands

use crate::command::ProtocolConfig;

/// Localized display text lookup
pub trait Translate {
    /// Render `label` with `argument` substituted into its template
    fn translate(&self, label: &str, argument: &str) -> String;
}

impl<F> Translate for F
where
    F: Fn(&str, &str) -> String,
{
    fn translate(&self, label: &str, argument: &str) -> String {
        self(label, argument)
    }
}

/// Protocol-internal prefix of key names, hidden from users
const KEY_NAME_PREFIX: &str = "KEY_";

/// Describe a command for display.
///
/// The keypress argument is joined with `" + "`, key name prefixes are removed
/// and the command prefix is translated. The argument handed to the
/// translator always ends with a space. Empty input gives an empty string.
pub fn decode(command: &str, protocol: &ProtocolConfig, translator: &dyn Translate) -> String {
    if command.is_empty() {
        return String::new();
    }

    let prefix: String = command
        .chars()
        .take(protocol.prefix_width.saturating_sub(1))
        .collect();
    let mut argument: String = command.chars().skip(protocol.prefix_width).collect();

    if prefix == protocol.keypress_prefix {
        argument = argument.replace(' ', " + ");
    }
    argument = argument.replace(KEY_NAME_PREFIX, "");
    argument.push(' ');

    translator.translate(&prefix, &argument)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn echo(label: &str, argument: &str) -> String {
        format!("<{}>{}", label, argument)
    }

    #[test]
    fn test_empty_command() {
        assert_eq!(decode("", &ProtocolConfig::default(), &echo), "");
    }

    #[test]
    fn test_word_command() {
        assert_eq!(
            decode("AT KW hello world", &ProtocolConfig::default(), &echo),
            "<AT KW>hello world "
        );
    }

    #[test]
    fn test_keypress_command() {
        assert_eq!(
            decode("AT KP KEY_CTRL KEY_ALT KEY_DELETE", &ProtocolConfig::default(), &echo),
            "<AT KP>CTRL + ALT + DELETE "
        );
    }

    #[test]
    fn test_key_prefix_stripped_for_any_command() {
        assert_eq!(
            decode("AT KH KEY_SHIFT", &ProtocolConfig::default(), &echo),
            "<AT KH>SHIFT "
        );
    }

    #[test]
    fn test_command_without_argument() {
        assert_eq!(decode("AT CL", &ProtocolConfig::default(), &echo), "<AT CL> ");
    }

    #[test]
    fn test_short_malformed_command() {
        assert_eq!(decode("AT", &ProtocolConfig::default(), &echo), "<AT> ");
    }
}
