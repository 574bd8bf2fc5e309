use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::store::StoreError;
use crate::tui::app::{App, DialogKind, DialogState, Mode};
use crate::util::unicode;

pub(super) fn handle_dialog(app: &mut App, key: KeyEvent) {
    if app.dialog.is_none() {
        app.mode = Mode::Navigate;
        return;
    }

    match key.code {
        KeyCode::Esc => {
            app.dialog = None;
            app.mode = Mode::Navigate;
        }
        KeyCode::Enter => submit_dialog(app),
        _ => {
            if let Some(dialog) = app.dialog.as_mut() {
                edit_buffer(dialog, key);
            }
        }
    }
}

/// Single-line text editing within the focused field
fn edit_buffer(dialog: &mut DialogState, key: KeyEvent) {
    match key.code {
        KeyCode::Tab | KeyCode::BackTab | KeyCode::Up | KeyCode::Down => {
            dialog.switch_field();
        }
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            let cursor = dialog.cursor;
            dialog.focused_text_mut().insert(cursor, c);
            dialog.cursor += c.len_utf8();
            dialog.error = None;
        }
        KeyCode::Backspace => {
            if let Some(prev) = unicode::prev_grapheme_boundary(dialog.focused_text(), dialog.cursor)
            {
                let cursor = dialog.cursor;
                dialog.focused_text_mut().replace_range(prev..cursor, "");
                dialog.cursor = prev;
            }
        }
        KeyCode::Delete => {
            if let Some(next) = unicode::next_grapheme_boundary(dialog.focused_text(), dialog.cursor)
            {
                let cursor = dialog.cursor;
                dialog.focused_text_mut().replace_range(cursor..next, "");
            }
        }
        KeyCode::Left => {
            if let Some(prev) = unicode::prev_grapheme_boundary(dialog.focused_text(), dialog.cursor)
            {
                dialog.cursor = prev;
            }
        }
        KeyCode::Right => {
            if let Some(next) = unicode::next_grapheme_boundary(dialog.focused_text(), dialog.cursor)
            {
                dialog.cursor = next;
            }
        }
        KeyCode::Home => dialog.cursor = 0,
        KeyCode::End => dialog.cursor = dialog.focused_text().len(),
        _ => {}
    }
}

/// Apply the dialog to the store. Validation failures stay inside the
/// dialog; success closes it and persists.
fn submit_dialog(app: &mut App) {
    let Some(dialog) = app.dialog.as_ref() else {
        return;
    };
    let (kind, title, description) = (dialog.kind, dialog.title.clone(), dialog.description.clone());

    let result = match kind {
        DialogKind::Add => app.store.add(&title, &description).map(|id| {
            // Land the cursor on the new item
            app.cursor = app.store.len() - 1;
            format!("added {}", id)
        }),
        DialogKind::Edit { id } => app
            .store
            .edit(id, &title, &description)
            .map(|_| format!("edited {}", id)),
    };

    match result {
        Ok(message) => {
            app.dialog = None;
            app.mode = Mode::Navigate;
            app.save();
            if app.status_message.is_none() {
                app.status_message = Some(message);
            }
        }
        Err(err @ (StoreError::EmptyTitle | StoreError::EmptyDescription)) => {
            if let Some(dialog) = app.dialog.as_mut() {
                dialog.error = Some(err.to_string());
            }
        }
        Err(err) => {
            // The edited todo disappeared out from under the dialog
            app.dialog = None;
            app.mode = Mode::Navigate;
            app.report_store_error(err);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::{handle_key, key};
    use crate::io::backend::JsonFileBackend;
    use crate::store::TodoStore;
    use crate::tui::app::{App, DialogField, DialogState, Mode};
    use crate::tui::theme::Theme;
    use crossterm::event::KeyCode;
    use tempfile::TempDir;

    fn dialog_app(dir: &TempDir) -> App {
        let backend = JsonFileBackend::new(dir.path().join("todos.json"));
        let mut app = App::new(TodoStore::new(), backend, Theme::default());
        app.dialog = Some(DialogState::add());
        app.mode = Mode::Dialog;
        app
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            handle_key(app, key(KeyCode::Char(c)));
        }
    }

    #[test]
    fn typing_fills_the_focused_field() {
        let dir = TempDir::new().unwrap();
        let mut app = dialog_app(&dir);

        type_text(&mut app, "Buy milk");
        handle_key(&mut app, key(KeyCode::Tab));
        type_text(&mut app, "2%");

        let dialog = app.dialog.as_ref().unwrap();
        assert_eq!(dialog.title, "Buy milk");
        assert_eq!(dialog.description, "2%");
        assert_eq!(dialog.field, DialogField::Description);
    }

    #[test]
    fn backspace_removes_whole_graphemes() {
        let dir = TempDir::new().unwrap();
        let mut app = dialog_app(&dir);

        type_text(&mut app, "ab");
        handle_key(&mut app, key(KeyCode::Char('e')));
        handle_key(&mut app, key(KeyCode::Char('\u{0301}'))); // combining accent
        handle_key(&mut app, key(KeyCode::Backspace));
        assert_eq!(app.dialog.as_ref().unwrap().title, "ab");

        handle_key(&mut app, key(KeyCode::Backspace));
        assert_eq!(app.dialog.as_ref().unwrap().title, "a");
    }

    #[test]
    fn arrows_move_and_insert_at_cursor() {
        let dir = TempDir::new().unwrap();
        let mut app = dialog_app(&dir);

        type_text(&mut app, "bd");
        handle_key(&mut app, key(KeyCode::Left));
        handle_key(&mut app, key(KeyCode::Char('c')));
        handle_key(&mut app, key(KeyCode::Home));
        handle_key(&mut app, key(KeyCode::Char('a')));
        assert_eq!(app.dialog.as_ref().unwrap().title, "abcd");
    }

    #[test]
    fn submit_with_empty_field_keeps_the_dialog_open() {
        let dir = TempDir::new().unwrap();
        let mut app = dialog_app(&dir);

        handle_key(&mut app, key(KeyCode::Enter));
        assert_eq!(app.mode, Mode::Dialog);
        let dialog = app.dialog.as_ref().unwrap();
        assert!(dialog.error.as_ref().unwrap().contains("title"));
        assert!(app.store.is_empty());

        type_text(&mut app, "Buy milk");
        handle_key(&mut app, key(KeyCode::Enter));
        assert_eq!(app.mode, Mode::Dialog);
        let dialog = app.dialog.as_ref().unwrap();
        assert!(dialog.error.as_ref().unwrap().contains("description"));
        assert!(app.store.is_empty());
    }

    #[test]
    fn submit_adds_persists_and_selects_the_new_todo() {
        let dir = TempDir::new().unwrap();
        let mut app = dialog_app(&dir);
        app.store.add("existing", "x").unwrap();

        type_text(&mut app, "Buy milk");
        handle_key(&mut app, key(KeyCode::Tab));
        type_text(&mut app, "2%");
        handle_key(&mut app, key(KeyCode::Enter));

        assert_eq!(app.mode, Mode::Navigate);
        assert!(app.dialog.is_none());
        assert_eq!(app.store.len(), 2);
        assert_eq!(app.cursor, 1);
        let on_disk = std::fs::read_to_string(dir.path().join("todos.json")).unwrap();
        assert!(on_disk.contains("Buy milk"));
    }

    #[test]
    fn submit_edit_preserves_done_flag() {
        let dir = TempDir::new().unwrap();
        let backend = JsonFileBackend::new(dir.path().join("todos.json"));
        let mut store = TodoStore::new();
        let id = store.add("Buy milk", "2%").unwrap();
        store.toggle_done(id).unwrap();
        let mut app = App::new(store, backend, Theme::default());

        app.dialog = Some(DialogState::edit(app.store.get(id).unwrap()));
        app.mode = Mode::Dialog;

        // Clear the title and retype it
        for _ in 0.."Buy milk".len() {
            handle_key(&mut app, key(KeyCode::Backspace));
        }
        type_text(&mut app, "Buy oat milk");
        handle_key(&mut app, key(KeyCode::Enter));

        let todo = app.store.get(id).unwrap();
        assert_eq!(todo.title, "Buy oat milk");
        assert_eq!(todo.description, "2%");
        assert!(todo.is_done);
    }

    #[test]
    fn esc_cancels_without_touching_the_store() {
        let dir = TempDir::new().unwrap();
        let mut app = dialog_app(&dir);
        type_text(&mut app, "draft");
        handle_key(&mut app, key(KeyCode::Esc));

        assert_eq!(app.mode, Mode::Navigate);
        assert!(app.dialog.is_none());
        assert!(app.store.is_empty());
    }
}
