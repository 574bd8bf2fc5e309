use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::model::Todo;
use crate::tui::app::App;
use crate::util::unicode;

/// Render the todo list: one row per item, cursor row highlighted.
pub fn render_list_view(frame: &mut Frame, app: &mut App, area: Rect) {
    let bg = app.theme.background;

    if app.store.is_empty() {
        let empty = Paragraph::new(" no todos — press a to add one")
            .style(Style::default().fg(app.theme.dim).bg(bg));
        frame.render_widget(empty, area);
        return;
    }

    // Clamp cursor and keep it on screen
    app.clamp_cursor();
    let visible_height = area.height as usize;
    if app.cursor < app.scroll_offset {
        app.scroll_offset = app.cursor;
    } else if visible_height > 0 && app.cursor >= app.scroll_offset + visible_height {
        app.scroll_offset = app.cursor.saturating_sub(visible_height - 1);
    }

    let scroll = app.scroll_offset;
    let todos = app.store.todos();
    let end = todos.len().min(scroll + visible_height);

    let mut lines: Vec<Line> = Vec::with_capacity(visible_height);
    for (todo, row) in todos[scroll..end].iter().zip(scroll..end) {
        lines.push(todo_line(app, todo, row == app.cursor, area.width as usize));
    }

    frame.render_widget(Paragraph::new(lines).style(Style::default().bg(bg)), area);
}

fn todo_line(app: &App, todo: &Todo, is_cursor: bool, width: usize) -> Line<'static> {
    let bg = if is_cursor {
        app.theme.selection_bg
    } else {
        app.theme.background
    };

    let marker_style = if is_cursor {
        Style::default().fg(app.theme.selection_border).bg(bg)
    } else {
        Style::default().bg(bg)
    };
    let checkbox_style = if todo.is_done {
        Style::default().fg(app.theme.green).bg(bg)
    } else {
        Style::default().fg(app.theme.dim).bg(bg)
    };
    let title_style = if todo.is_done {
        Style::default()
            .fg(app.theme.dim)
            .bg(bg)
            .add_modifier(Modifier::CROSSED_OUT)
    } else {
        Style::default()
            .fg(app.theme.text_bright)
            .bg(bg)
            .add_modifier(Modifier::BOLD)
    };
    let desc_style = Style::default().fg(app.theme.dim).bg(bg);

    let checkbox = if todo.is_done { "[x]" } else { "[ ]" };
    let mut spans = vec![
        Span::styled(if is_cursor { "\u{258C}" } else { " " }, marker_style),
        Span::styled(format!("{} ", checkbox), checkbox_style),
        Span::styled(todo.title.clone(), title_style),
    ];

    // Description fills what is left of the row, truncated with an ellipsis
    let used: usize = spans.iter().map(|s| unicode::display_width(&s.content)).sum();
    let remaining = width.saturating_sub(used + 3);
    if remaining > 0 && !todo.description.is_empty() {
        spans.push(Span::styled("  \u{2502} ", desc_style));
        spans.push(Span::styled(
            unicode::truncate_to_width(&todo.description, remaining),
            desc_style,
        ));
    }

    // Pad to full width so the selection background covers the row
    let used: usize = spans.iter().map(|s| unicode::display_width(&s.content)).sum();
    if used < width {
        spans.push(Span::styled(
            " ".repeat(width - used),
            Style::default().bg(bg),
        ));
    }

    Line::from(spans)
}
