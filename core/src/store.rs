//! Lock-protected in-memory todo collection.
//!
//! # Design
//! A single `parking_lot::Mutex` guards both the id→todo map and the next-id
//! counter, and every public method holds it for its whole read-modify-write
//! sequence. That makes the operations linearizable and rules out duplicate
//! ids without any further coordination. No method calls another locking
//! method while the guard is alive.
//!
//! `parking_lot` locks do not poison, so acquisition cannot fail and none of
//! the methods return `Result`. Nothing here suspends or does I/O; async
//! callers can invoke the methods directly.

use std::collections::HashMap;

use parking_lot::Mutex;

use crate::types::{Todo, TodoId};

#[derive(Debug)]
struct Inner {
    todos: HashMap<TodoId, Todo>,
    next_id: TodoId,
}

/// Thread-safe in-memory store with auto-incrementing ids.
///
/// Ids are handed out in `create` call order starting at 1 and are never
/// reused, even after `delete`. Reads return clones; the underlying map is
/// never exposed by reference.
#[derive(Debug)]
pub struct TodoStore {
    inner: Mutex<Inner>,
}

impl Default for TodoStore {
    fn default() -> Self {
        Self::new()
    }
}

impl TodoStore {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(Inner {
                todos: HashMap::new(),
                next_id: 1,
            }),
        }
    }

    /// Snapshot of every stored todo, in no particular order.
    pub fn list(&self) -> Vec<Todo> {
        self.inner.lock().todos.values().cloned().collect()
    }

    pub fn get(&self, id: TodoId) -> Option<Todo> {
        self.inner.lock().todos.get(&id).cloned()
    }

    /// Insert a new todo under the next id. The caller validates `title`.
    pub fn create(&self, title: impl Into<String>, is_complete: bool) -> Todo {
        let mut inner = self.inner.lock();
        let todo = Todo::new(inner.next_id, title, is_complete);
        inner.todos.insert(todo.id, todo.clone());
        inner.next_id += 1;
        todo
    }

    /// Replace the record stored under `id`. Returns `None` without inserting
    /// anything when `id` is unknown.
    pub fn update(&self, id: TodoId, title: impl Into<String>, is_complete: bool) -> Option<Todo> {
        let mut inner = self.inner.lock();
        let slot = inner.todos.get_mut(&id)?;
        *slot = Todo::new(id, title, is_complete);
        Some(slot.clone())
    }

    /// Remove the todo stored under `id`, reporting whether it existed.
    pub fn delete(&self, id: TodoId) -> bool {
        self.inner.lock().todos.remove(&id).is_some()
    }

    pub fn len(&self) -> usize {
        self.inner.lock().todos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.lock().todos.is_empty()
    }
}
