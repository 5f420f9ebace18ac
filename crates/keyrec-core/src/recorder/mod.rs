// Keyrec Recorder
// Keystroke recording sessions

pub mod queue;
pub mod session;

pub use queue::{Outcome, RecordingQueue};
pub use session::{Preview, RecorderSettings, RecordingSession};
