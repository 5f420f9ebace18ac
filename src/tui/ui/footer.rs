use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

use crate::tui::app::{App, Mode};
use crate::tui::theme::{theme, Theme};

pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let t = theme();

    let lines = vec![
        Line::styled(format!("Status: {}", app.status), t.status_message()),
        hints(app.mode, t),
    ];

    let footer = Paragraph::new(lines);
    frame.render_widget(footer, area);
}

fn hints(mode: Mode, t: &Theme) -> Line<'static> {
    let pairs: &[(&str, &str)] = match mode {
        Mode::Recording => &[("Tab", "stop"), ("Backspace", "undo last")],
        Mode::Idle => &[("r", "record"), ("Enter", "save"), ("x", "reset"), ("q", "quit")],
    };

    let mut spans = Vec::with_capacity(pairs.len() * 2);
    for (key, action) in pairs {
        spans.push(Span::styled(*key, t.key_hint()));
        spans.push(Span::styled(format!(":{}  ", action), t.text_muted()));
    }
    Line::from(spans)
}
