use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::{App, Mode};

/// Render the status row (bottom of screen): one-shot messages on the left,
/// key hints for the current mode on the right.
pub fn render_status_row(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let width = area.width as usize;

    let message = match app.mode {
        Mode::Navigate => app.status_message.as_deref().unwrap_or(""),
        Mode::Dialog => "",
        Mode::Confirm => "",
    };
    let hint = match app.mode {
        Mode::Navigate => "a add  e edit  Space toggle  d delete  ? help  q quit",
        Mode::Dialog => "Enter save  Tab field  Esc cancel",
        Mode::Confirm => "y confirm  n cancel",
    };

    let mut spans = vec![Span::styled(
        format!(" {}", message),
        Style::default().fg(app.theme.text_bright).bg(bg),
    )];

    let content_width: usize = spans.iter().map(|s| s.content.chars().count()).sum();
    let hint_width = hint.chars().count() + 1;
    if content_width + hint_width < width {
        let padding = width - content_width - hint_width;
        spans.push(Span::styled(" ".repeat(padding), Style::default().bg(bg)));
        spans.push(Span::styled(
            format!("{} ", hint),
            Style::default().fg(app.theme.dim).bg(bg),
        ));
    }

    frame.render_widget(
        Paragraph::new(Line::from(spans)).style(Style::default().bg(bg)),
        area,
    );
}
