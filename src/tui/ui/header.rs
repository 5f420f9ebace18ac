use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

use crate::tui::app::{App, Mode};
use crate::tui::theme::theme;

pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let t = theme();

    let config_display = match &app.config_path {
        Some(path) => {
            let display = path.display().to_string();
            let count = display.chars().count();
            if count > 45 {
                let tail: String = display.chars().skip(count - 42).collect();
                format!("...{}", tail)
            } else {
                display
            }
        }
        None => "built-in defaults".to_string(),
    };

    let mode_label = match app.mode {
        Mode::Recording => "REC",
        Mode::Idle => "IDLE",
    };

    let line = Line::from(vec![
        Span::styled("keyrec ", t.text_primary().add_modifier(Modifier::BOLD)),
        Span::styled(format!("[{}] ", mode_label), t.mode_badge(app.mode)),
        Span::styled(format!("{} ", app.language), t.text_secondary()),
        Span::styled(config_display, t.text_muted()),
        Span::raw(" "),
        Span::styled("q:quit", t.key_hint()),
    ]);

    let header = Paragraph::new(line).alignment(Alignment::Left);

    frame.render_widget(header, area);
}
