use ratatui::prelude::*;
use ratatui::widgets::*;

use crate::tui::app::{App, Mode};
use crate::tui::theme::theme;

pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let t = theme();
    let focused = app.mode == Mode::Recording;

    let block = Block::default()
        .title(t.panel_title("RECORDING", focused))
        .borders(Borders::ALL)
        .border_style(t.panel_border(focused))
        .border_type(if focused {
            BorderType::Thick
        } else {
            BorderType::Plain
        });

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let preview = app.session.preview();
    let keys: Vec<String> = app
        .session
        .events()
        .iter()
        .map(|event| event.to_string())
        .collect();

    let mut lines = vec![
        Line::from(vec![
            Span::styled("Command:  ", t.text_muted()),
            Span::styled(preview.command.clone(), t.command()),
        ]),
        Line::from(vec![
            Span::styled("Readable: ", t.text_muted()),
            Span::styled(preview.readable.clone(), t.text_primary()),
        ]),
        Line::styled(preview.announcement.clone(), t.text_secondary()),
        Line::from(vec![
            Span::styled("Keys:     ", t.text_muted()),
            Span::styled(keys.join(" "), t.text_secondary()),
        ]),
    ];

    if let Some(outcome) = app.last_outcome {
        lines.push(Line::from(vec![
            Span::styled("Last key: ", t.text_muted()),
            Span::styled(outcome.to_string(), t.outcome(outcome)),
        ]));
    }

    let panel = Paragraph::new(lines).wrap(Wrap { trim: false });
    frame.render_widget(panel, inner);
}
