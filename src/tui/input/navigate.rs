use crossterm::event::{KeyCode, KeyEvent};

use crate::tui::app::{App, ConfirmAction, ConfirmState, DialogState, Mode};

pub(super) fn handle_navigate(app: &mut App, key: KeyEvent) {
    match key.code {
        // Quit
        KeyCode::Char('q') | KeyCode::Esc => {
            app.should_quit = true;
        }

        // Cursor movement
        KeyCode::Char('j') | KeyCode::Down => {
            if app.cursor + 1 < app.store.len() {
                app.cursor += 1;
            }
        }
        KeyCode::Char('k') | KeyCode::Up => {
            app.cursor = app.cursor.saturating_sub(1);
        }
        KeyCode::Char('g') | KeyCode::Home => {
            app.cursor = 0;
        }
        KeyCode::Char('G') | KeyCode::End => {
            app.cursor = app.store.len().saturating_sub(1);
        }

        // Toggle done
        KeyCode::Char(' ') | KeyCode::Enter => {
            toggle_selected(app);
        }

        // Add / edit dialogs
        KeyCode::Char('a') => {
            app.dialog = Some(DialogState::add());
            app.mode = Mode::Dialog;
        }
        KeyCode::Char('e') => {
            if let Some(todo) = app.selected() {
                app.dialog = Some(DialogState::edit(todo));
                app.mode = Mode::Dialog;
            }
        }

        // Delete / clear, behind a confirm popup
        KeyCode::Char('d') => {
            if let Some(todo) = app.selected() {
                app.confirm = Some(ConfirmState {
                    action: ConfirmAction::DeleteTodo { id: todo.id },
                    message: format!("Delete \"{}\"?", todo.title),
                });
                app.mode = Mode::Confirm;
            }
        }
        KeyCode::Char('C') => {
            if app.store.is_empty() {
                app.status_message = Some("list is already empty".to_string());
            } else {
                app.confirm = Some(ConfirmState {
                    action: ConfirmAction::ClearAll,
                    message: format!("Delete all {} todos?", app.store.len()),
                });
                app.mode = Mode::Confirm;
            }
        }

        KeyCode::Char('?') => {
            app.show_help = true;
        }

        _ => {}
    }
}

fn toggle_selected(app: &mut App) {
    let id = match app.selected() {
        Some(todo) => todo.id,
        None => return,
    };
    match app.store.toggle_done(id) {
        Ok(done) => {
            app.save();
            if app.status_message.is_none() {
                app.status_message =
                    Some(if done { "done" } else { "reopened" }.to_string());
            }
        }
        Err(e) => app.report_store_error(e),
    }
}
