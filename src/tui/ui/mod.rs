mod footer;
mod header;
mod history_panel;
mod preview_panel;

use ratatui::prelude::*;

use crate::tui::app::App;

pub fn draw_ui(frame: &mut Frame, app: &App) {
    let root = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Compact header
            Constraint::Length(8), // Current recording
            Constraint::Min(6),    // Saved commands
            Constraint::Length(2), // Footer
        ])
        .split(frame.area());

    header::render(frame, app, root[0]);
    preview_panel::render(frame, app, root[1]);
    history_panel::render(frame, app, root[2]);
    footer::render(frame, app, root[3]);
}
