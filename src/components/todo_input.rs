//! Todo Input Component
//!
//! Free-text draft input; Enter submits.

use leptos::prelude::*;

use crate::store::{store_submit_draft, use_todo_store};

/// Draft input for new todos
#[component]
pub fn TodoInput() -> impl IntoView {
    let store = use_todo_store();

    let (draft, set_draft) = signal(String::new());

    let on_keydown = move |ev: web_sys::KeyboardEvent| {
        if ev.key() == "Enter" && store_submit_draft(&store, &draft.get()) {
            set_draft.set(String::new());
        }
    };

    view! {
        <div class="todo-input-row">
            <input
                type="text"
                placeholder="Enter your TODO's"
                prop:value=move || draft.get()
                on:input=move |ev| set_draft.set(event_target_value(&ev))
                on:keydown=on_keydown
            />
        </div>
    }
}
