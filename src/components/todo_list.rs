//! Todo List Component
//!
//! Keyed list of todo rows, or a placeholder heading when empty.

use leptos::prelude::*;

use crate::components::TodoRow;
use crate::store::{use_todo_store, TodoStateStoreFields};

/// Heading shown when the list has no todos
pub const EMPTY_PLACEHOLDER: &str = "No ToDo's Data";

/// The todo rows, in creation order
#[component]
pub fn TodoList() -> impl IntoView {
    let store = use_todo_store();

    let is_empty = move || store.todos().read().is_empty();

    view! {
        <div class="todo-list">
            <Show when=move || !is_empty()>
                <For
                    each=move || store.todos().get()
                    // Key on completed too so a toggle re-renders the row
                    key=|todo| (todo.id, todo.completed)
                    children=move |todo| view! { <TodoRow todo=todo /> }
                />
            </Show>
            <Show when=is_empty>
                <h1 class="todo-empty">{EMPTY_PLACEHOLDER}</h1>
            </Show>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::EMPTY_PLACEHOLDER;

    #[test]
    fn test_empty_placeholder_heading() {
        assert_eq!(EMPTY_PLACEHOLDER, "No ToDo's Data");
    }
}
