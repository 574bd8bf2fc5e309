use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use super::centered_rect;
use crate::tui::app::App;

/// Render the help overlay (toggled with ?)
pub fn render_help_overlay(frame: &mut Frame, app: &App, area: Rect) {
    let overlay_area = centered_rect(50, 70, area);

    frame.render_widget(Clear, overlay_area);

    let bg = app.theme.background;
    let key_style = Style::default()
        .fg(app.theme.highlight)
        .bg(bg)
        .add_modifier(Modifier::BOLD);
    let desc_style = Style::default().fg(app.theme.text).bg(bg);
    let header_style = Style::default()
        .fg(app.theme.text_bright)
        .bg(bg)
        .add_modifier(Modifier::BOLD);

    let mut lines: Vec<Line> = Vec::new();
    lines.push(Line::from(Span::styled(" Key Bindings", header_style)));
    lines.push(Line::from(""));

    add_binding(&mut lines, " \u{2191}\u{2193}/jk", "Move cursor", key_style, desc_style);
    add_binding(&mut lines, " g/G", "Jump to top/bottom", key_style, desc_style);
    add_binding(&mut lines, " Space/Enter", "Toggle done", key_style, desc_style);
    add_binding(&mut lines, " a", "Add a todo", key_style, desc_style);
    add_binding(&mut lines, " e", "Edit selected todo", key_style, desc_style);
    add_binding(&mut lines, " d", "Delete selected todo", key_style, desc_style);
    add_binding(&mut lines, " C", "Clear the whole list", key_style, desc_style);
    add_binding(&mut lines, " q", "Quit", key_style, desc_style);
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        " any key to close",
        Style::default().fg(app.theme.dim).bg(bg),
    )));

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(app.theme.dim).bg(bg))
        .style(Style::default().bg(bg));

    frame.render_widget(Paragraph::new(lines).block(block), overlay_area);
}

fn add_binding(
    lines: &mut Vec<Line<'_>>,
    keys: &'static str,
    description: &'static str,
    key_style: Style,
    desc_style: Style,
) {
    lines.push(Line::from(vec![
        Span::styled(format!("{:<14}", keys), key_style),
        Span::styled(description, desc_style),
    ]));
}

#[cfg(test)]
mod tests {
    use super::super::test_helpers::{TERM_H, TERM_W, app_with_todos, render_to_string};
    use super::*;

    #[test]
    fn overlay_lists_every_binding() {
        let app = app_with_todos(&[]);
        let output = render_to_string(TERM_W, TERM_H, |frame, area| {
            render_help_overlay(frame, &app, area);
        });
        assert!(output.contains("Key Bindings"));
        assert!(output.contains("Toggle done"));
        assert!(output.contains("Clear the whole list"));
        assert!(output.contains("any key to close"));
    }
}
