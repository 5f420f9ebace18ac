// Keyrec Config API
// TOML configuration for recorder sessions

pub mod parser;

pub use parser::{Config, ConfigError, ConfigToml, DisplayConfig};
