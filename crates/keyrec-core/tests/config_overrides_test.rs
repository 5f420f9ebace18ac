// Keyrec Config Override Tests
//
// User TOML files change names, roles and protocol constants; sessions built
// from them must follow.

use std::fs;
use std::path::PathBuf;

use keyrec_core::key::codes;
use keyrec_core::{Config, ConfigError, KeyCode, KeyEvent, Language, Outcome};

fn temp_config(name: &str, content: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("keyrec-test-{}", std::process::id()));
    fs::create_dir_all(&dir).unwrap();
    let path = dir.join(name);
    fs::write(&path, content).unwrap();
    path
}

#[test]
fn test_load_file_records_source_path() {
    let path = temp_config("lang.toml", "[display]\nlanguage = \"de\"\n");

    let config = Config::load(Some(path.as_path())).unwrap();

    assert_eq!(config.language, Language::De);
    assert_eq!(config.source_path(), Some(path.as_path()));
    fs::remove_file(path).unwrap();
}

#[test]
fn test_renamed_key_reaches_command() {
    let config = Config::from_toml_str(
        r#"
        [names]
        "38" = "KEY_ARROW_UP"
        "#,
    )
    .unwrap();
    let mut session = config.session().unwrap();

    session.handle_key_down(KeyEvent::named("ArrowUp", codes::ARROW_UP), false);

    assert_eq!(session.current_encoded_command(), "AT KP KEY_ARROW_UP");
    assert_eq!(session.current_preview_text(), "Press keys: ARROW_UP ");
}

#[test]
fn test_removed_key_is_unsupported() {
    let config = Config::from_toml_str(
        r#"
        [names]
        "27" = ""
        "#,
    )
    .unwrap();
    let mut session = config.session().unwrap();

    let outcome = session.handle_key_down(KeyEvent::named("Escape", codes::ESCAPE), false);

    assert_eq!(outcome, Outcome::Unsupported);
    assert!(session.events().is_empty());
}

#[test]
fn test_added_key_is_recordable() {
    let config = Config::from_toml_str(
        r#"
        [names]
        "226" = "KEY_102ND"
        "#,
    )
    .unwrap();
    let mut session = config.session().unwrap();

    let outcome = session.handle_key_down(KeyEvent::named("IntlBackslash", KeyCode(226)), false);

    assert_eq!(outcome, Outcome::Appended);
    assert_eq!(session.current_encoded_command(), "AT KP KEY_102ND");
}

#[test]
fn test_custom_undo_key() {
    let config = Config::from_toml_str(
        r#"
        [keys]
        undo = 46
        "#,
    )
    .unwrap();
    let mut session = config.session().unwrap();
    for c in "abc".chars() {
        session.handle_key_down(KeyEvent::character(c), false);
    }

    let backspace = session.handle_key_down(KeyEvent::named("Backspace", codes::BACKSPACE), false);
    let delete = session.handle_key_down(KeyEvent::named("Delete", codes::DELETE), false);

    assert_eq!(backspace, Outcome::Rejected);
    assert_eq!(delete, Outcome::Undone);
    assert_eq!(session.current_encoded_command(), "AT KW ab");
}

#[test]
fn test_custom_prefixes() {
    let config = Config::from_toml_str(
        r#"
        [protocol]
        word_prefix = "XX WW"
        keypress_prefix = "XX PP"
        "#,
    )
    .unwrap();
    let mut session = config.session().unwrap();
    for c in "hi".chars() {
        session.handle_key_down(KeyEvent::character(c), false);
    }

    assert_eq!(session.current_encoded_command(), "XX WW hi");
    // Unknown labels fall back to the label and argument
    assert_eq!(session.current_preview_text(), "XX WW hi ");
}

#[test]
fn test_bad_files_are_reported() {
    let path = temp_config("broken.toml", "[protocol\n");
    assert!(matches!(Config::load(Some(path.as_path())), Err(ConfigError::TomlParse(_))));
    fs::remove_file(path).unwrap();

    let result = Config::from_toml_str("[display]\nlanguage = \"fr\"\n");
    assert!(matches!(result, Err(ConfigError::TomlParse(_))));
}
