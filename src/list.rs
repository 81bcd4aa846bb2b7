//! List Utilities
//!
//! Pure helpers over the todo sequence.

use crate::models::Todo;

/// Trim a draft for submission. Returns `None` when nothing remains,
/// so whitespace-only drafts never produce a todo.
pub fn trimmed_title(draft: &str) -> Option<String> {
    let title = draft.trim();
    if title.is_empty() {
        None
    } else {
        Some(title.to_string())
    }
}

/// Append a new todo built from the draft, unless the trimmed draft is
/// empty. Returns whether a todo was appended; the caller clears the
/// draft on success.
pub fn submit_draft(todos: &mut Vec<Todo>, draft: &str, id: u64) -> bool {
    match trimmed_title(draft) {
        Some(title) => {
            todos.push(Todo {
                id,
                title,
                completed: false,
            });
            true
        }
        None => false,
    }
}

/// Flip `completed` on the first todo with this id, leaving every other
/// todo and the overall order untouched.
pub fn toggle_todo(todos: &mut Vec<Todo>, id: u64) {
    if let Some(todo) = todos.iter_mut().find(|todo| todo.id == id) {
        todo.completed = !todo.completed;
    }
}

/// Remove the first todo with this id; later todos shift up one position
/// and keep their relative order.
pub fn remove_todo(todos: &mut Vec<Todo>, id: u64) {
    if let Some(pos) = todos.iter().position(|todo| todo.id == id) {
        todos.remove(pos);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Todo;

    fn make_todo(id: u64, title: &str) -> Todo {
        Todo {
            id,
            title: title.to_string(),
            completed: false,
        }
    }

    #[test]
    fn test_trimmed_title_rejects_blank_drafts() {
        assert_eq!(trimmed_title(""), None);
        assert_eq!(trimmed_title("   "), None);
        assert_eq!(trimmed_title("\t\n"), None);
    }

    #[test]
    fn test_trimmed_title_strips_surrounding_whitespace() {
        assert_eq!(trimmed_title("  Buy milk  "), Some("Buy milk".to_string()));
        assert_eq!(trimmed_title("Buy milk"), Some("Buy milk".to_string()));
    }

    #[test]
    fn test_submit_appends_exactly_one_todo() {
        let mut todos = vec![make_todo(1, "a")];

        let added = submit_draft(&mut todos, "Buy milk", 2);

        assert!(added);
        assert_eq!(todos.len(), 2);
        assert_eq!(todos[1].id, 2);
        assert_eq!(todos[1].title, "Buy milk");
        assert!(!todos[1].completed);
    }

    #[test]
    fn test_submit_blank_draft_changes_nothing() {
        let mut todos = vec![make_todo(1, "a")];
        let original = todos.clone();

        assert!(!submit_draft(&mut todos, "", 2));
        assert!(!submit_draft(&mut todos, "   \t", 3));
        assert_eq!(todos, original);
    }

    #[test]
    fn test_toggle_flips_only_the_target() {
        let mut todos = vec![make_todo(1, "a"), make_todo(2, "b"), make_todo(3, "c")];

        toggle_todo(&mut todos, 2);

        assert_eq!(todos.len(), 3);
        assert!(!todos[0].completed);
        assert!(todos[1].completed);
        assert!(!todos[2].completed);
        // Order and titles are untouched
        assert_eq!(todos[0].title, "a");
        assert_eq!(todos[1].title, "b");
        assert_eq!(todos[2].title, "c");
    }

    #[test]
    fn test_toggle_twice_restores_the_sequence() {
        let mut todos = vec![make_todo(1, "a"), make_todo(2, "b")];
        let original = todos.clone();

        toggle_todo(&mut todos, 1);
        toggle_todo(&mut todos, 1);

        assert_eq!(todos, original);
    }

    #[test]
    fn test_toggle_unknown_id_is_a_noop() {
        let mut todos = vec![make_todo(1, "a")];
        let original = todos.clone();

        toggle_todo(&mut todos, 99);

        assert_eq!(todos, original);
    }

    #[test]
    fn test_remove_shifts_later_todos_up() {
        let mut todos = vec![
            make_todo(1, "a"),
            make_todo(2, "b"),
            make_todo(3, "c"),
            make_todo(4, "d"),
        ];

        remove_todo(&mut todos, 2);

        // Earlier todos unchanged, later ones shifted up by one
        assert_eq!(todos.len(), 3);
        assert_eq!(todos[0].id, 1);
        assert_eq!(todos[1].id, 3);
        assert_eq!(todos[2].id, 4);
    }

    #[test]
    fn test_remove_unknown_id_is_a_noop() {
        let mut todos = vec![make_todo(1, "a"), make_todo(2, "b")];
        let original = todos.clone();

        remove_todo(&mut todos, 99);

        assert_eq!(todos, original);
    }

    #[test]
    fn test_serialized_wire_shape() {
        let todos = vec![Todo {
            id: 1700000000000,
            title: "Buy milk".to_string(),
            completed: false,
        }];

        let json = serde_json::to_string(&todos).unwrap();

        assert_eq!(
            json,
            r#"[{"id":1700000000000,"title":"Buy milk","completed":false}]"#
        );
    }

    #[test]
    fn test_serialization_round_trips_after_mutations() {
        let mut todos = vec![make_todo(1, "a"), make_todo(2, "b"), make_todo(3, "c")];
        toggle_todo(&mut todos, 2);
        remove_todo(&mut todos, 1);

        let json = serde_json::to_string(&todos).unwrap();
        let loaded: Vec<Todo> = serde_json::from_str(&json).unwrap();

        assert_eq!(loaded, todos);
    }
}
