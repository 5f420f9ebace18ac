use ratatui::prelude::*;
use ratatui::widgets::*;

use crate::tui::app::App;
use crate::tui::theme::theme;

pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let t = theme();

    let block = Block::default()
        .title(t.panel_title("SAVED COMMANDS", false))
        .borders(Borders::ALL)
        .border_style(t.panel_border(false))
        .border_type(BorderType::Plain);

    let inner = block.inner(area);
    frame.render_widget(block, area);

    if app.history.is_empty() {
        let empty = Paragraph::new(Line::styled(
            "Nothing saved yet. Record keys, then press Enter.",
            t.text_muted(),
        ));
        frame.render_widget(empty, inner);
        return;
    }

    // Newest entries stay visible
    let visible_height = inner.height as usize;
    let start = app.history.len().saturating_sub(visible_height);

    let lines: Vec<Line> = app.history[start..]
        .iter()
        .map(|saved| {
            Line::from(vec![
                Span::styled(saved.command.clone(), t.command()),
                Span::styled("  ", t.text_muted()),
                Span::styled(saved.readable.clone(), t.text_secondary()),
            ])
        })
        .collect();

    let history = Paragraph::new(lines);
    frame.render_widget(history, inner);
}
