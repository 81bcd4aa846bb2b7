//! Todo List State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::list;
use crate::models::Todo;

/// Application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct TodoState {
    /// All todos, in creation order
    pub todos: Vec<Todo>,
}

impl TodoState {
    pub fn new(todos: Vec<Todo>) -> Self {
        Self { todos }
    }
}

/// Type alias for the store
pub type TodoStore = Store<TodoState>;

/// Get the todo store from context
pub fn use_todo_store() -> TodoStore {
    expect_context::<TodoStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Append a todo built from the draft text, stamped with the current
/// millisecond timestamp as its id. Returns whether anything was added
/// (whitespace-only drafts add nothing).
pub fn store_submit_draft(store: &TodoStore, draft: &str) -> bool {
    let id = js_sys::Date::now() as u64;
    list::submit_draft(&mut store.todos().write(), draft, id)
}

/// Flip a todo's completed flag by ID
pub fn store_toggle_todo(store: &TodoStore, id: u64) {
    list::toggle_todo(&mut store.todos().write(), id);
}

/// Remove a todo from the store by ID
pub fn store_remove_todo(store: &TodoStore, id: u64) {
    list::remove_todo(&mut store.todos().write(), id);
}
