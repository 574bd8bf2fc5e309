use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::tui::app::{App, DialogField, DialogKind, DialogState};

/// Render the add/edit dialog as a centered popup with two labeled fields.
pub fn render_dialog(frame: &mut Frame, app: &App, area: Rect) {
    let dialog = match &app.dialog {
        Some(d) => d,
        None => return,
    };

    let width = 54.min(area.width.saturating_sub(4)).max(20).min(area.width);
    let height = 10.min(area.height.saturating_sub(2)).max(8).min(area.height);
    let popup = Rect {
        x: area.x + (area.width.saturating_sub(width)) / 2,
        y: area.y + (area.height.saturating_sub(height)) / 2,
        width,
        height,
    };

    frame.render_widget(Clear, popup);

    let bg = app.theme.background;
    let title = match dialog.kind {
        DialogKind::Add => " Add Todo ",
        DialogKind::Edit { .. } => " Edit Todo ",
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(app.theme.selection_border).bg(bg))
        .title(Span::styled(
            title,
            Style::default()
                .fg(app.theme.text_bright)
                .bg(bg)
                .add_modifier(Modifier::BOLD),
        ))
        .style(Style::default().bg(bg));

    let mut lines: Vec<Line> = Vec::new();
    push_field(&mut lines, app, dialog, DialogField::Title, "Title");
    lines.push(Line::from(""));
    push_field(&mut lines, app, dialog, DialogField::Description, "Description");
    lines.push(Line::from(""));

    match &dialog.error {
        Some(error) => lines.push(Line::from(Span::styled(
            format!(" {}", error),
            Style::default().fg(app.theme.red).bg(bg),
        ))),
        None => lines.push(Line::from(Span::styled(
            " Enter save  Tab field  Esc cancel",
            Style::default().fg(app.theme.dim).bg(bg),
        ))),
    }

    frame.render_widget(Paragraph::new(lines).block(block), popup);
}

fn push_field(
    lines: &mut Vec<Line<'_>>,
    app: &App,
    dialog: &DialogState,
    field: DialogField,
    label: &'static str,
) {
    let bg = app.theme.background;
    let focused = dialog.field == field;

    let label_style = if focused {
        Style::default()
            .fg(app.theme.highlight)
            .bg(bg)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(app.theme.dim).bg(bg)
    };
    lines.push(Line::from(Span::styled(format!(" {}", label), label_style)));

    let text = match field {
        DialogField::Title => &dialog.title,
        DialogField::Description => &dialog.description,
    };
    let text_style = Style::default().fg(app.theme.text_bright).bg(bg);

    let mut spans = vec![Span::styled(" ", Style::default().bg(bg))];
    if focused {
        // Split at the cursor and draw a block cursor between the halves
        let cursor = dialog.cursor.min(text.len());
        spans.push(Span::styled(text[..cursor].to_string(), text_style));
        spans.push(Span::styled(
            "\u{258C}",
            Style::default().fg(app.theme.highlight).bg(bg),
        ));
        spans.push(Span::styled(text[cursor..].to_string(), text_style));
    } else {
        spans.push(Span::styled(
            text.clone(),
            Style::default().fg(app.theme.text).bg(bg),
        ));
    }
    lines.push(Line::from(spans));
}
