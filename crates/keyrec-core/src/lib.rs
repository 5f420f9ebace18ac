// Keyrec Core Library
// Keystroke recording and AT command encoding for assistive input devices

pub mod classify;
pub mod command;
pub mod config;
pub mod i18n;
pub mod key;
pub mod readable;
pub mod recorder;
pub mod text;

pub use classify::{is_altgr_triple, is_printable, is_special, SpecialKeys};
pub use command::{encode, ProtocolConfig};
pub use config::{Config, ConfigError};
pub use i18n::{Catalog, CatalogError, Language};
pub use key::{KeyCode, KeyEvent, KeycodeNameTable};
pub use readable::{decode, Translate};
pub use recorder::{Outcome, Preview, RecorderSettings, RecordingQueue, RecordingSession};
pub use text::reconstruct_text;
