//! Todo Row Component
//!
//! A single todo entry with toggle and delete controls.

use leptos::prelude::*;

use crate::models::Todo;
use crate::store::{store_remove_todo, store_toggle_todo, use_todo_store};

/// One row in the todo list
#[component]
pub fn TodoRow(todo: Todo) -> impl IntoView {
    let store = use_todo_store();

    let id = todo.id;
    let completed = todo.completed;
    let title = todo.title.clone();

    view! {
        <div class=move || if completed { "todo-row completed" } else { "todo-row" }>
            // Checkbox
            <input
                type="checkbox"
                checked=completed
                on:change=move |_| store_toggle_todo(&store, id)
            />

            // Title
            <span class="todo-title">{title}</span>

            // Delete button
            <button class="delete-btn" on:click=move |_| store_remove_todo(&store, id)>"×"</button>
        </div>
    }
}
