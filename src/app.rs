//! Todo List Frontend App
//!
//! Root component owning the store and the persistence effect.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{TodoInput, TodoList};
use crate::storage;
use crate::store::{TodoState, TodoStateStoreFields, TodoStore};

#[component]
pub fn App() -> impl IntoView {
    // State, loaded once from the persisted slot
    let store: TodoStore = Store::new(TodoState::new(storage::load_todos()));

    // Provide context to all children
    provide_context(store);

    // Persist on every change: full-snapshot overwrite of the slot.
    // Also fires once on mount, rewriting what was just loaded.
    Effect::new(move |_| {
        let todos = store.todos().get();
        storage::save_todos(&todos);
    });

    view! {
        <div class="todo-page">
            <header class="todo-header">
                <span class="todo-logo">"✓"</span>
                <h1>"Todo's"</h1>
            </header>

            <TodoInput />

            <TodoList />
        </div>
    }
}
