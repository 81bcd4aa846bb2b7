//! UI Components
//!
//! Reusable Leptos components.

mod todo_input;
mod todo_list;
mod todo_row;

pub use todo_input::TodoInput;
pub use todo_list::TodoList;
pub use todo_row::TodoRow;
