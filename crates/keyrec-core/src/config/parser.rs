// Keyrec Config Parser - TOML with Serde
// Parses recorder configuration from TOML files

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::classify::SpecialKeys;
use crate::command::ProtocolConfig;
use crate::i18n::{Catalog, CatalogError, Language};
use crate::key::{KeyCode, KeycodeNameTable};
use crate::recorder::{RecorderSettings, RecordingSession};

/// Configuration parser errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(String),

    #[error("Invalid key: {0}")]
    InvalidKey(String),

    #[error("Invalid protocol settings: {0}")]
    InvalidProtocol(String),

    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),
}

/// Root TOML table
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigToml {
    /// Command prefixes and length limits
    #[serde(default)]
    pub protocol: Option<ProtocolConfig>,

    /// Keycodes with a fixed role
    #[serde(default)]
    pub keys: Option<SpecialKeys>,

    /// Keycode (as a string) to protocol name; an empty name removes the keycode
    #[serde(default)]
    pub names: BTreeMap<String, String>,

    /// Display settings
    #[serde(default)]
    pub display: Option<DisplayConfig>,
}

/// Display settings
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DisplayConfig {
    #[serde(default)]
    pub language: Language,
}

/// Resolved recorder configuration
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub protocol: ProtocolConfig,
    pub keys: SpecialKeys,
    pub names: KeycodeNameTable,
    pub language: Language,
    source_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            protocol: ProtocolConfig::default(),
            keys: SpecialKeys::default(),
            names: KeycodeNameTable::builtin(),
            language: Language::default(),
            source_path: None,
        }
    }
}

impl Config {
    /// Parse configuration from a TOML string
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let parsed: ConfigToml =
            toml::from_str(content).map_err(|e| ConfigError::TomlParse(e.to_string()))?;
        Self::from_parsed(parsed)
    }

    /// Parse configuration from a TOML file
    pub fn from_toml_path<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(&path)?;
        let mut config = Self::from_toml_str(&content)?;
        config.source_path = Some(path.as_ref().to_path_buf());
        Ok(config)
    }

    /// Load an explicit file, or the default file when it exists, or the defaults
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = path {
            return Self::from_toml_path(path);
        }
        match Self::default_path() {
            Some(path) if path.exists() => Self::from_toml_path(path),
            _ => {
                log::debug!("no config file, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Get the default config path
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("keyrec").join("config.toml"))
    }

    /// File this config was read from
    pub fn source_path(&self) -> Option<&Path> {
        self.source_path.as_deref()
    }

    fn from_parsed(parsed: ConfigToml) -> Result<Self, ConfigError> {
        let mut names = KeycodeNameTable::builtin();
        for (code, name) in parsed.names {
            let code: KeyCode = code
                .trim()
                .parse::<u16>()
                .map(KeyCode)
                .map_err(|_| ConfigError::InvalidKey(code.clone()))?;
            if name.is_empty() {
                if names.remove(code).is_none() {
                    log::warn!("keycode {} removed but was not in the table", code.code());
                }
            } else {
                names.insert(code, name);
            }
        }

        let config = Self {
            protocol: parsed.protocol.unwrap_or_default(),
            keys: parsed.keys.unwrap_or_default(),
            names,
            language: parsed.display.map(|d| d.language).unwrap_or_default(),
            source_path: None,
        };
        config.validate()?;
        Ok(config)
    }

    /// Check the protocol constants fit together
    pub fn validate(&self) -> Result<(), ConfigError> {
        let p = &self.protocol;
        if p.prefix_width == 0 {
            return Err(ConfigError::InvalidProtocol(
                "prefix_width must be at least 1".to_string(),
            ));
        }
        for prefix in [&p.word_prefix, &p.keypress_prefix] {
            if prefix.chars().count() != p.prefix_width - 1 {
                return Err(ConfigError::InvalidProtocol(format!(
                    "prefix {:?} must be {} characters",
                    prefix,
                    p.prefix_width - 1
                )));
            }
        }
        if p.word_prefix == p.keypress_prefix {
            return Err(ConfigError::InvalidProtocol(
                "word and keypress prefixes must differ".to_string(),
            ));
        }
        if p.max_length <= p.prefix_width {
            return Err(ConfigError::InvalidProtocol(format!(
                "max_length {} must exceed prefix_width {}",
                p.max_length, p.prefix_width
            )));
        }
        if !self.names.is_supported(self.keys.undo) {
            log::warn!("undo keycode {} is not recordable", self.keys.undo.code());
        }
        Ok(())
    }

    /// Tables and constants for a recording session
    pub fn recorder_settings(&self) -> RecorderSettings {
        RecorderSettings {
            names: self.names.clone(),
            keys: self.keys,
            protocol: self.protocol.clone(),
        }
    }

    /// Translation catalog for the configured language
    pub fn catalog(&self) -> Result<Catalog, ConfigError> {
        Ok(Catalog::builtin(self.language)?)
    }

    /// A fresh recording session using this configuration
    pub fn session(&self) -> Result<RecordingSession, ConfigError> {
        let catalog = self.catalog()?;
        Ok(RecordingSession::new(self.recorder_settings(), Box::new(catalog)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::key::codes;

    #[test]
    fn test_empty_config_is_default() {
        let config = Config::from_toml_str("").unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_protocol_section() {
        let config = Config::from_toml_str(
            r#"
            [protocol]
            max_length = 32
            "#,
        )
        .unwrap();
        assert_eq!(config.protocol.max_length, 32);
        assert_eq!(config.protocol.word_prefix, "AT KW");
    }

    #[test]
    fn test_keys_section() {
        let config = Config::from_toml_str(
            r#"
            [keys]
            undo = 46
            "#,
        )
        .unwrap();
        assert_eq!(config.keys.undo, codes::DELETE);
        assert_eq!(config.keys.separator, codes::SPACE);
    }

    #[test]
    fn test_names_section() {
        let config = Config::from_toml_str(
            r#"
            [names]
            "226" = "KEY_102ND"
            "91" = ""
            "#,
        )
        .unwrap();
        assert_eq!(config.names.name(KeyCode(226)), Some("KEY_102ND"));
        assert!(!config.names.is_supported(KeyCode(91)));
    }

    #[test]
    fn test_invalid_keycode() {
        let result = Config::from_toml_str(
            r#"
            [names]
            "abc" = "KEY_A"
            "#,
        );
        assert!(matches!(result, Err(ConfigError::InvalidKey(_))));
    }

    #[test]
    fn test_display_language() {
        let config = Config::from_toml_str(
            r#"
            [display]
            language = "de"
            "#,
        )
        .unwrap();
        assert_eq!(config.language, Language::De);
    }

    #[test]
    fn test_unknown_field_rejected() {
        let result = Config::from_toml_str(
            r#"
            [protocol]
            prefix = "AT"
            "#,
        );
        assert!(matches!(result, Err(ConfigError::TomlParse(_))));
    }

    #[test]
    fn test_prefix_width_mismatch() {
        let result = Config::from_toml_str(
            r#"
            [protocol]
            word_prefix = "ATKW"
            "#,
        );
        assert!(matches!(result, Err(ConfigError::InvalidProtocol(_))));
    }

    #[test]
    fn test_max_length_too_small() {
        let result = Config::from_toml_str(
            r#"
            [protocol]
            max_length = 6
            "#,
        );
        assert!(matches!(result, Err(ConfigError::InvalidProtocol(_))));
    }

    #[test]
    fn test_missing_explicit_file() {
        let result = Config::load(Some(Path::new("/nonexistent/keyrec/config.toml")));
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }

    #[test]
    fn test_session_from_config() {
        let config = Config::from_toml_str(
            r#"
            [display]
            language = "de"
            "#,
        )
        .unwrap();
        let mut session = config.session().unwrap();
        session.record_key_event(crate::KeyEvent::character('o'));
        session.record_key_event(crate::KeyEvent::character('k'));
        assert_eq!(session.current_preview_text(), "Schreibe Wort: ok ");
    }
}
