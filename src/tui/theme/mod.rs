mod palette;

use keyrec_core::Outcome;
use ratatui::prelude::*;

use crate::tui::app::Mode;

pub use palette::Palette;

pub struct Theme {
    pub palette: Palette,
}

impl Default for Theme {
    fn default() -> Self {
        Self::new()
    }
}

impl Theme {
    pub fn new() -> Self {
        Self {
            palette: Palette::new(),
        }
    }

    // Panel border style
    pub fn panel_border(&self, focused: bool) -> Style {
        if focused {
            Style::default()
                .fg(self.palette.border_focused)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(self.palette.border_default)
        }
    }

    // Mode badge style
    pub fn mode_badge(&self, mode: Mode) -> Style {
        let bg = match mode {
            Mode::Recording => self.palette.bg_recording,
            Mode::Idle => self.palette.bg_idle,
        };
        Style::default()
            .fg(Color::Black)
            .bg(bg)
            .add_modifier(Modifier::BOLD)
    }

    // Last outcome style: green when the recording changed
    pub fn outcome(&self, outcome: Outcome) -> Style {
        match outcome {
            Outcome::Appended | Outcome::Undone | Outcome::ToggledOff => {
                Style::default().fg(self.palette.accent_success)
            }
            Outcome::Rejected | Outcome::Unsupported => {
                Style::default().fg(self.palette.accent_danger)
            }
            Outcome::Ignored | Outcome::Composing => Style::default().fg(self.palette.text_muted),
        }
    }

    // Primary text
    pub fn text_primary(&self) -> Style {
        Style::default().fg(self.palette.text_primary)
    }

    // Secondary/dimmed text
    pub fn text_secondary(&self) -> Style {
        Style::default().fg(self.palette.text_secondary)
    }

    // Muted text (hints, labels)
    pub fn text_muted(&self) -> Style {
        Style::default().fg(self.palette.text_muted)
    }

    // Recorded command text
    pub fn command(&self) -> Style {
        Style::default()
            .fg(self.palette.accent_primary)
            .add_modifier(Modifier::BOLD)
    }

    // Key hint style (the key part like "Tab")
    pub fn key_hint(&self) -> Style {
        Style::default()
            .fg(self.palette.accent_primary)
            .add_modifier(Modifier::BOLD)
    }

    // Status message style
    pub fn status_message(&self) -> Style {
        Style::default().fg(self.palette.accent_warning)
    }

    // Panel title with optional focus indicator
    pub fn panel_title(&self, title: &str, focused: bool) -> Line<'_> {
        if focused {
            Line::styled(
                format!(" {} ", title),
                Style::default()
                    .fg(self.palette.accent_primary)
                    .add_modifier(Modifier::BOLD),
            )
        } else {
            Line::styled(format!(" {} ", title), self.text_muted())
        }
    }
}

/// Global theme instance
pub static THEME: std::sync::OnceLock<Theme> = std::sync::OnceLock::new();

pub fn theme() -> &'static Theme {
    THEME.get_or_init(Theme::new)
}
