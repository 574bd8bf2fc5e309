use serde::Serialize;

use crate::model::Todo;

// ---------------------------------------------------------------------------
// JSON output structs
// ---------------------------------------------------------------------------

#[derive(Serialize)]
pub struct TodoJson<'a> {
    pub id: u64,
    pub title: &'a str,
    pub description: &'a str,
    pub done: bool,
}

impl<'a> From<&'a Todo> for TodoJson<'a> {
    fn from(todo: &'a Todo) -> Self {
        TodoJson {
            id: todo.id,
            title: &todo.title,
            description: &todo.description,
            done: todo.is_done,
        }
    }
}

#[derive(Serialize)]
pub struct TodoListJson<'a> {
    pub todos: Vec<TodoJson<'a>>,
}

// ---------------------------------------------------------------------------
// Plain text output
// ---------------------------------------------------------------------------

/// One todo as a list line: `  3 [x] Buy milk — 2%`
pub fn format_todo_line(todo: &Todo) -> String {
    let mark = if todo.is_done { "[x]" } else { "[ ]" };
    format!(
        "{:>4} {} {} — {}",
        todo.id, mark, todo.title, todo.description
    )
}
