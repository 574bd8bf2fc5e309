mod confirm;
mod dialog;
mod navigate;

use crossterm::event::{KeyCode, KeyEvent};

use super::app::{App, Mode};

/// Handle a key event in the current mode
pub fn handle_key(app: &mut App, key: KeyEvent) {
    // Ignore bare modifier key presses (Shift, Ctrl, Alt, etc.)
    if matches!(key.code, KeyCode::Modifier(_)) {
        return;
    }

    // Help overlay intercepts all input; any key closes it
    if app.show_help {
        app.show_help = false;
        return;
    }

    // A fresh key press invalidates the previous one-shot message
    if app.mode == Mode::Navigate {
        app.status_message = None;
    }

    match app.mode {
        Mode::Navigate => navigate::handle_navigate(app, key),
        Mode::Dialog => dialog::handle_dialog(app, key),
        Mode::Confirm => confirm::handle_confirm(app, key),
    }
}

#[cfg(test)]
pub(super) fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, crossterm::event::KeyModifiers::NONE)
}
