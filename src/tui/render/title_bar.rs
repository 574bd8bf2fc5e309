use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::App;

/// Render the title bar: app name on the left, open/total counts on the
/// right, with a separator line below.
pub fn render_title_bar(frame: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // title
            Constraint::Length(1), // separator
        ])
        .split(area);

    render_title(frame, app, chunks[0]);
    render_separator(frame, app, chunks[1]);
}

fn render_title(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let width = area.width as usize;

    let mut spans = vec![
        Span::styled(" ", Style::default().bg(bg)),
        Span::styled(
            "\u{25A0}",
            Style::default().fg(app.theme.highlight).bg(bg),
        ),
        Span::styled(
            " todos",
            Style::default()
                .fg(app.theme.text_bright)
                .bg(bg)
                .add_modifier(Modifier::BOLD),
        ),
    ];

    let open = app.store.todos().iter().filter(|t| !t.is_done).count();
    let counts = format!("{} open / {} ", open, app.store.len());
    let content_width: usize = spans.iter().map(|s| s.content.chars().count()).sum();
    let counts_width = counts.chars().count();
    if content_width + counts_width < width {
        let padding = width - content_width - counts_width;
        spans.push(Span::styled(" ".repeat(padding), Style::default().bg(bg)));
        spans.push(Span::styled(
            counts,
            Style::default().fg(app.theme.dim).bg(bg),
        ));
    }

    frame.render_widget(
        Paragraph::new(Line::from(spans)).style(Style::default().bg(bg)),
        area,
    );
}

fn render_separator(frame: &mut Frame, app: &App, area: Rect) {
    let sep = "\u{2500}".repeat(area.width as usize);
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            sep,
            Style::default().fg(app.theme.dim).bg(app.theme.background),
        ))),
        area,
    );
}

#[cfg(test)]
mod tests {
    use super::super::test_helpers::{TERM_W, app_with_todos, render_to_string};
    use super::*;

    #[test]
    fn title_shows_name_and_counts() {
        let mut app = app_with_todos(&[("Buy milk", "2%", false), ("Walk dog", "evening", true)]);
        let output = render_to_string(TERM_W, 2, |frame, area| {
            render_title_bar(frame, &mut app, area);
        });
        assert!(output.contains("todos"));
        assert!(output.contains("1 open / 2"));
        assert!(output.contains("\u{2500}"));
    }
}
