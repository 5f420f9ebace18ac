// Keyrec Translation Catalogs
// Display strings for command prefixes and preview labels

use std::collections::HashMap;

use serde::Deserialize;
use strum_macros::{AsRefStr, Display, EnumIter, EnumString};

use crate::readable::Translate;

/// Placeholder replaced by the command argument
pub const PLACEHOLDER: &str = "{?}";

pub const LABEL_NONE: &str = "NONE_BRACKET";
pub const LABEL_ENTERED_ACTION: &str = "ENTERED_ACTION";

const EN: &str = include_str!("../i18n/en.toml");
const DE: &str = include_str!("../i18n/de.toml");

/// Languages with a built-in catalog
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize, Display, EnumString, EnumIter, AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Language {
    #[default]
    En,
    De,
}

/// Errors that can occur when loading a catalog
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("TOML parse error: {0}")]
    TomlParse(String),

    #[error("Unknown language: {0}")]
    UnknownLanguage(String),
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct CatalogToml {
    #[serde(default)]
    labels: HashMap<String, String>,
}

/// Label to display template mapping
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    labels: HashMap<String, String>,
}

impl Catalog {
    /// Parse a catalog from TOML
    pub fn from_toml(content: &str) -> Result<Self, CatalogError> {
        let parsed: CatalogToml =
            toml::from_str(content).map_err(|e| CatalogError::TomlParse(e.to_string()))?;
        Ok(Self {
            labels: parsed.labels,
        })
    }

    /// The built-in catalog for a language
    pub fn builtin(language: Language) -> Result<Self, CatalogError> {
        match language {
            Language::En => Self::from_toml(EN),
            Language::De => Self::from_toml(DE),
        }
    }

    /// The built-in catalog for a language code such as `"de"`
    pub fn for_code(code: &str) -> Result<Self, CatalogError> {
        let language = code
            .parse::<Language>()
            .map_err(|_| CatalogError::UnknownLanguage(code.to_string()))?;
        Self::builtin(language)
    }

    /// Add or replace a template
    pub fn insert(&mut self, label: impl Into<String>, template: impl Into<String>) {
        self.labels.insert(label.into(), template.into());
    }

    /// Raw template for a label
    pub fn template(&self, label: &str) -> Option<&str> {
        self.labels.get(label).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

impl Translate for Catalog {
    fn translate(&self, label: &str, argument: &str) -> String {
        match self.template(label) {
            Some(template) => template.replace(PLACEHOLDER, argument),
            None if argument.is_empty() => label.to_string(),
            None => format!("{} {}", label, argument),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_builtin_catalogs_parse() {
        for language in Language::iter() {
            let catalog = Catalog::builtin(language).unwrap();
            assert!(catalog.template("AT KW").is_some(), "{} lacks AT KW", language);
            assert!(catalog.template(LABEL_NONE).is_some());
            assert!(catalog.template(LABEL_ENTERED_ACTION).is_some());
        }
    }

    #[test]
    fn test_placeholder_substitution() {
        let catalog = Catalog::builtin(Language::De).unwrap();
        assert_eq!(catalog.translate("AT KW", "ab "), "Schreibe Wort: ab ");
        assert_eq!(catalog.translate("AT CL", "ignored"), "Klick linke Maustaste");
    }

    #[test]
    fn test_unknown_label() {
        let catalog = Catalog::default();
        assert_eq!(catalog.translate("AT ZZ", "1 "), "AT ZZ 1 ");
        assert_eq!(catalog.translate("AT ZZ", ""), "AT ZZ");
    }

    #[test]
    fn test_language_codes() {
        assert_eq!("de".parse::<Language>().unwrap(), Language::De);
        assert_eq!("EN".parse::<Language>().unwrap(), Language::En);
        assert_eq!(Language::De.to_string(), "de");
        assert!(matches!(
            Catalog::for_code("fr"),
            Err(CatalogError::UnknownLanguage(_))
        ));
    }

    #[test]
    fn test_invalid_toml() {
        assert!(matches!(
            Catalog::from_toml("labels = 3"),
            Err(CatalogError::TomlParse(_))
        ));
    }
}
