pub mod confirm_popup;
pub mod dialog;
pub mod help_overlay;
pub mod list_view;
pub mod status_row;
#[cfg(test)]
pub mod test_helpers;
pub mod title_bar;

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::Style;
use ratatui::widgets::Block;

use super::app::App;

/// Main render function — dispatches to sub-renderers
pub fn render(frame: &mut Frame, app: &mut App) {
    let area = frame.area();

    // Background fill
    let bg_style = Style::default().bg(app.theme.background);
    frame.render_widget(Block::default().style(bg_style), area);

    // Layout: title bar (2 rows) | list | status row (1 row)
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // title bar + separator
            Constraint::Min(1),    // list area
            Constraint::Length(1), // status row
        ])
        .split(area);

    title_bar::render_title_bar(frame, app, chunks[0]);
    list_view::render_list_view(frame, app, chunks[1]);

    // Popups and overlays (rendered on top of everything)
    if app.dialog.is_some() {
        dialog::render_dialog(frame, app, area);
    }
    if app.confirm.is_some() {
        confirm_popup::render_confirm_popup(frame, app, area);
    }
    if app.show_help {
        help_overlay::render_help_overlay(frame, app, area);
    }

    status_row::render_status_row(frame, app, chunks[2]);
}

/// Center a popup of the given percentage size within `area`.
pub(super) fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
