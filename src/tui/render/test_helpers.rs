use ratatui::Terminal;
use ratatui::backend::TestBackend;
use ratatui::layout::Rect;

use crate::io::backend::JsonFileBackend;
use crate::model::Todo;
use crate::store::TodoStore;
use crate::tui::app::App;
use crate::tui::theme::Theme;

pub const TERM_W: u16 = 80;
pub const TERM_H: u16 = 24;

/// Render into an in-memory buffer and return plain text (no styles).
pub fn render_to_string<F>(w: u16, h: u16, f: F) -> String
where
    F: FnOnce(&mut ratatui::Frame, Rect),
{
    let backend = TestBackend::new(w, h);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal
        .draw(|frame| {
            let area = frame.area();
            f(frame, area);
        })
        .unwrap();

    let buf = terminal.backend().buffer().clone();
    let w = buf.area.width as usize;
    let lines: Vec<String> = buf
        .content
        .chunks(w)
        .map(|row| {
            let s: String = row.iter().map(|cell| cell.symbol()).collect();
            s.trim_end().to_string()
        })
        .collect();

    // Trim trailing blank lines
    let end = lines
        .iter()
        .rposition(|l| !l.is_empty())
        .map_or(0, |i| i + 1);
    lines[..end].join("\n")
}

/// Build an App over an in-memory store; the backend points into a temp-like
/// path that render tests never write to.
pub fn app_with_todos(todos: &[(&str, &str, bool)]) -> App {
    let todos: Vec<Todo> = todos
        .iter()
        .enumerate()
        .map(|(i, (title, description, done))| Todo {
            id: i as u64,
            title: title.to_string(),
            description: description.to_string(),
            is_done: *done,
        })
        .collect();
    let store = TodoStore::from_todos(todos);
    let backend = JsonFileBackend::new(std::env::temp_dir().join("todos-render-test.json"));
    App::new(store, backend, Theme::default())
}
