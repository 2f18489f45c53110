use chrono::NaiveDate;

use crate::todo::filter::Counts;
use crate::todo::item::{Todo, TodoId};

/// Partial update applied to a stored todo after server confirmation.
///
/// The double `Option` on `due_date` distinguishes "leave unchanged"
/// (`None`) from "clear the date" (`Some(None)`).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TodoPatch {
    pub text: Option<String>,
    pub completed: Option<bool>,
    pub due_date: Option<Option<NaiveDate>>,
}

impl TodoPatch {
    /// Patch flipping only the completion flag.
    pub fn completion(completed: bool) -> Self {
        Self {
            completed: Some(completed),
            ..Self::default()
        }
    }

    /// Patch from a saved edit: new text plus the full due-date field
    /// (cleared dates arrive as `Some(None)`).
    pub fn content(text: String, due_date: Option<NaiveDate>) -> Self {
        Self {
            text: Some(text),
            completed: None,
            due_date: Some(due_date),
        }
    }
}

/// Ordered in-memory cache of todos.
///
/// Mutators are synchronous and assume the caller already obtained server
/// confirmation; the store performs no network I/O and no validation
/// beyond "id must exist" for update/remove.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TodoStore {
    todos: Vec<Todo>,
}

impl TodoStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the entire store with a server snapshot.
    pub fn load(&mut self, todos: Vec<Todo>) {
        self.todos = todos;
    }

    /// Insert a freshly created todo at the front of the sequence.
    pub fn insert_front(&mut self, todo: Todo) {
        self.todos.insert(0, todo);
    }

    /// Apply a confirmed partial update. No-op when the id is absent.
    pub fn update(&mut self, id: TodoId, patch: TodoPatch) {
        let Some(todo) = self.todos.iter_mut().find(|t| t.id == id) else {
            return;
        };
        if let Some(text) = patch.text {
            todo.text = text;
        }
        if let Some(completed) = patch.completed {
            todo.completed = completed;
        }
        if let Some(due_date) = patch.due_date {
            todo.due_date = due_date;
        }
    }

    /// Remove a confirmed-deleted todo. No-op when the id is absent.
    pub fn remove(&mut self, id: TodoId) {
        self.todos.retain(|t| t.id != id);
    }

    pub fn get(&self, id: TodoId) -> Option<&Todo> {
        self.todos.iter().find(|t| t.id == id)
    }

    pub fn todos(&self) -> &[Todo] {
        &self.todos
    }

    pub fn len(&self) -> usize {
        self.todos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.todos.is_empty()
    }

    /// Counts over the unfiltered sequence.
    pub fn counts(&self) -> Counts {
        Counts::of(&self.todos)
    }
}
