use crate::model::Todo;

/// Error type for store operations
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("title must not be empty")]
    EmptyTitle,
    #[error("description must not be empty")]
    EmptyDescription,
    #[error("no todo with id {0}")]
    NotFound(u64),
}

/// The in-memory ordered collection of todos for the active session.
///
/// Ids come from a monotonic counter seeded with max(existing)+1, so they
/// stay stable across deletes and are never reused within a session.
#[derive(Debug, Clone, Default)]
pub struct TodoStore {
    todos: Vec<Todo>,
    next_id: u64,
}

impl TodoStore {
    /// Empty store; first id will be 0.
    pub fn new() -> Self {
        TodoStore::default()
    }

    /// Build a store from previously persisted records, keeping their order.
    pub fn from_todos(todos: Vec<Todo>) -> Self {
        let next_id = todos.iter().map(|t| t.id + 1).max().unwrap_or(0);
        TodoStore { todos, next_id }
    }

    /// Append a new open todo. Returns the assigned id.
    pub fn add(&mut self, title: &str, description: &str) -> Result<u64, StoreError> {
        validate(title, description)?;
        let id = self.next_id;
        self.next_id += 1;
        self.todos
            .push(Todo::new(id, title.to_string(), description.to_string()));
        Ok(id)
    }

    /// Replace title and description of the matching todo, preserving its
    /// completion flag.
    pub fn edit(&mut self, id: u64, title: &str, description: &str) -> Result<(), StoreError> {
        validate(title, description)?;
        let todo = self.find_mut(id)?;
        todo.title = title.to_string();
        todo.description = description.to_string();
        Ok(())
    }

    /// Flip the completion flag. Returns the new value.
    pub fn toggle_done(&mut self, id: u64) -> Result<bool, StoreError> {
        let todo = self.find_mut(id)?;
        todo.is_done = !todo.is_done;
        Ok(todo.is_done)
    }

    /// Remove the matching todo and return it.
    pub fn delete(&mut self, id: u64) -> Result<Todo, StoreError> {
        let idx = self
            .todos
            .iter()
            .position(|t| t.id == id)
            .ok_or(StoreError::NotFound(id))?;
        Ok(self.todos.remove(idx))
    }

    /// Empty the store unconditionally. Returns the number of todos removed.
    pub fn clear(&mut self) -> usize {
        let count = self.todos.len();
        self.todos.clear();
        count
    }

    pub fn get(&self, id: u64) -> Option<&Todo> {
        self.todos.iter().find(|t| t.id == id)
    }

    /// All todos in insertion order.
    pub fn todos(&self) -> &[Todo] {
        &self.todos
    }

    pub fn len(&self) -> usize {
        self.todos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.todos.is_empty()
    }

    fn find_mut(&mut self, id: u64) -> Result<&mut Todo, StoreError> {
        self.todos
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or(StoreError::NotFound(id))
    }
}

fn validate(title: &str, description: &str) -> Result<(), StoreError> {
    if title.is_empty() {
        return Err(StoreError::EmptyTitle);
    }
    if description.is_empty() {
        return Err(StoreError::EmptyDescription);
    }
    Ok(())
}
