use crossterm::event::{KeyCode, KeyEvent};

use crate::tui::app::{App, ConfirmAction, Mode};

pub(super) fn handle_confirm(app: &mut App, key: KeyEvent) {
    match key.code {
        // Confirm: y
        KeyCode::Char('y') => {
            let state = app.confirm.take();
            app.mode = Mode::Navigate;
            if let Some(state) = state {
                match state.action {
                    ConfirmAction::DeleteTodo { id } => confirm_delete(app, id),
                    ConfirmAction::ClearAll => confirm_clear(app),
                }
            }
        }
        // Cancel: n or Esc
        KeyCode::Char('n') | KeyCode::Esc => {
            app.confirm = None;
            app.mode = Mode::Navigate;
        }
        _ => {}
    }
}

fn confirm_delete(app: &mut App, id: u64) {
    match app.store.delete(id) {
        Ok(removed) => {
            app.clamp_cursor();
            app.save();
            if app.status_message.is_none() {
                app.status_message = Some(format!("deleted \"{}\"", removed.title));
            }
        }
        Err(e) => app.report_store_error(e),
    }
}

fn confirm_clear(app: &mut App) {
    let count = app.store.clear();
    app.cursor = 0;
    app.scroll_offset = 0;
    app.save();
    if app.status_message.is_none() {
        app.status_message = Some(format!(
            "cleared {} todo{}",
            count,
            if count == 1 { "" } else { "s" }
        ));
    }
}
