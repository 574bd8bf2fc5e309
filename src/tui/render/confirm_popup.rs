use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::tui::app::App;
use crate::util::unicode;

/// Render the y/n confirmation popup for destructive actions.
pub fn render_confirm_popup(frame: &mut Frame, app: &App, area: Rect) {
    let confirm = match &app.confirm {
        Some(c) => c,
        None => return,
    };

    let bg = app.theme.background;
    let message = unicode::truncate_to_width(
        &confirm.message,
        area.width.saturating_sub(8) as usize,
    );

    let width = (unicode::display_width(&message) as u16 + 6)
        .max(26)
        .min(area.width.saturating_sub(2));
    let height = 5;
    let popup = Rect {
        x: area.x + (area.width.saturating_sub(width)) / 2,
        y: area.y + (area.height.saturating_sub(height)) / 2,
        width,
        height: height.min(area.height),
    };

    frame.render_widget(Clear, popup);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(app.theme.red).bg(bg))
        .style(Style::default().bg(bg));

    let lines = vec![
        Line::from(Span::styled(
            format!(" {}", message),
            Style::default()
                .fg(app.theme.text_bright)
                .bg(bg)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled(" y", Style::default().fg(app.theme.red).bg(bg)),
            Span::styled(" confirm   ", Style::default().fg(app.theme.dim).bg(bg)),
            Span::styled("n", Style::default().fg(app.theme.green).bg(bg)),
            Span::styled(" cancel", Style::default().fg(app.theme.dim).bg(bg)),
        ]),
    ];

    frame.render_widget(Paragraph::new(lines).block(block), popup);
}
