//! Persistent Storage
//!
//! The single localStorage slot backing the todo list. The slot is read
//! once at startup and overwritten wholesale on every mutation; malformed
//! persisted JSON or unavailable storage panics (surfaced through the
//! console panic hook).

use crate::models::Todo;

/// localStorage key holding the serialized todo list
pub const STORAGE_KEY: &str = "todoList";

fn local_storage() -> web_sys::Storage {
    web_sys::window()
        .expect("window should exist")
        .local_storage()
        .expect("localStorage should be accessible")
        .expect("localStorage should exist")
}

/// Decode the raw slot value; an absent slot is an empty list
fn decode_slot(stored: Option<String>) -> Vec<Todo> {
    match stored {
        Some(json) => {
            serde_json::from_str(&json).expect("persisted todo list should be valid JSON")
        }
        None => Vec::new(),
    }
}

/// Load the persisted todo list
pub fn load_todos() -> Vec<Todo> {
    let stored = local_storage()
        .get_item(STORAGE_KEY)
        .expect("localStorage read should succeed");

    let todos = decode_slot(stored);
    web_sys::console::log_1(&format!("[STORAGE] Loaded {} todos", todos.len()).into());
    todos
}

/// Overwrite the slot with the full serialized snapshot of the list
pub fn save_todos(todos: &[Todo]) {
    let json = serde_json::to_string(todos).expect("todo list should serialize");
    local_storage()
        .set_item(STORAGE_KEY, &json)
        .expect("localStorage write should succeed");
}
