//! List Operations
//!
//! Mutation and ordering logic for the todo collection. Everything here is
//! pure over `Vec<Todo>`; persistence and rendering are the caller's job.

use chrono::Utc;

use crate::models::Todo;

/// Sort todos for display: `order` ascending, ties broken toward the more
/// recently created todo. Records missing `order` compare newest-first.
pub fn sort_todos(todos: &mut [Todo]) {
    todos.sort_by(|a, b| match (a.order, b.order) {
        (Some(x), Some(y)) => x.cmp(&y).then_with(|| b.created_at.cmp(&a.created_at)),
        _ => b.created_at.cmp(&a.created_at),
    });
}

/// Assign a position-based `order` to any todo missing one, then sort.
/// Runs once on data loaded from storage.
pub fn normalize_order(todos: &mut Vec<Todo>) {
    for (index, todo) in todos.iter_mut().enumerate() {
        if todo.order.is_none() {
            todo.order = Some(index as i64);
        }
    }
    sort_todos(todos);
}

/// Millisecond timestamp as a fresh id, bumped past the current maximum so
/// several adds within the same millisecond still get distinct ids.
fn next_id(todos: &[Todo]) -> i64 {
    let now = Utc::now().timestamp_millis();
    match todos.iter().map(|t| t.id).max() {
        Some(max) if now <= max => max + 1,
        _ => now,
    }
}

fn next_order(todos: &[Todo]) -> i64 {
    todos
        .iter()
        .filter_map(|t| t.order)
        .max()
        .map_or(0, |max| max + 1)
}

/// Add a todo with the given text, placing it at the end of the display
/// order. Whitespace-only input is rejected. Returns the new id, or None
/// when nothing was added.
pub fn add_todo(todos: &mut Vec<Todo>, text: &str) -> Option<i64> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return None;
    }
    let todo = Todo {
        id: next_id(todos),
        text: trimmed.to_string(),
        completed: false,
        created_at: Utc::now(),
        order: Some(next_order(todos)),
    };
    let id = todo.id;
    todos.insert(0, todo);
    sort_todos(todos);
    Some(id)
}

/// Flip the completion flag. Returns false when no todo has the id.
pub fn toggle_todo(todos: &mut [Todo], id: i64) -> bool {
    match todos.iter_mut().find(|t| t.id == id) {
        Some(todo) => {
            todo.completed = !todo.completed;
            true
        }
        None => false,
    }
}

/// Replace a todo's text. The new text must be non-empty after trimming and
/// different from the current text; otherwise nothing changes.
pub fn edit_todo(todos: &mut [Todo], id: i64, text: &str) -> bool {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return false;
    }
    match todos.iter_mut().find(|t| t.id == id) {
        Some(todo) if todo.text != trimmed => {
            todo.text = trimmed.to_string();
            true
        }
        _ => false,
    }
}

/// Remove the todo with the given id. Remaining `order` values keep their
/// gaps until the next reorder.
pub fn delete_todo(todos: &mut Vec<Todo>, id: i64) -> bool {
    let before = todos.len();
    todos.retain(|t| t.id != id);
    todos.len() != before
}

/// Drop every completed todo. Returns how many were removed.
pub fn clear_completed(todos: &mut Vec<Todo>) -> usize {
    let before = todos.len();
    todos.retain(|t| !t.completed);
    before - todos.len()
}

/// Move the dragged todo immediately before or after the target, then
/// rewrite every `order` to its 0-based position. The target's index is
/// taken with the dragged todo already removed. Unknown ids leave the list
/// untouched.
pub fn reorder_todo(todos: &mut Vec<Todo>, dragged_id: i64, target_id: i64, insert_before: bool) -> bool {
    if dragged_id == target_id {
        return false;
    }
    let Some(from) = todos.iter().position(|t| t.id == dragged_id) else {
        return false;
    };
    let Some(mut target) = todos.iter().position(|t| t.id == target_id) else {
        return false;
    };
    let dragged = todos.remove(from);
    // Target index relative to the list with the dragged todo removed
    if target > from {
        target -= 1;
    }
    let at = if insert_before { target } else { target + 1 };
    todos.insert(at, dragged);
    for (index, todo) in todos.iter_mut().enumerate() {
        todo.order = Some(index as i64);
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn make_todo(id: i64, text: &str, completed: bool, order: Option<i64>) -> Todo {
        Todo {
            id,
            text: text.to_string(),
            completed,
            // Later ids created later, so createdAt tiebreaks are deterministic
            created_at: chrono::Utc.timestamp_millis_opt(1_700_000_000_000 + id).unwrap(),
            order,
        }
    }

    fn ids(todos: &[Todo]) -> Vec<i64> {
        todos.iter().map(|t| t.id).collect()
    }

    fn orders(todos: &[Todo]) -> Vec<Option<i64>> {
        todos.iter().map(|t| t.order).collect()
    }

    // --- add ---

    #[test]
    fn add_sets_defaults_and_lands_last() {
        let mut todos = vec![make_todo(1, "first", false, Some(0))];
        let id = add_todo(&mut todos, "  Buy milk  ").expect("added");
        assert_eq!(todos.len(), 2);
        let added = todos.iter().find(|t| t.id == id).unwrap();
        assert_eq!(added.text, "Buy milk");
        assert!(!added.completed);
        assert_eq!(added.order, Some(1));
        assert_eq!(todos.last().unwrap().id, id);
    }

    #[test]
    fn add_to_empty_gets_order_zero() {
        let mut todos = Vec::new();
        add_todo(&mut todos, "Buy milk").expect("added");
        assert_eq!(todos.len(), 1);
        assert_eq!(todos[0].text, "Buy milk");
        assert!(!todos[0].completed);
        assert_eq!(todos[0].order, Some(0));
    }

    #[test]
    fn add_blank_is_rejected() {
        let mut todos = vec![make_todo(1, "first", false, Some(0))];
        assert_eq!(add_todo(&mut todos, ""), None);
        assert_eq!(add_todo(&mut todos, "   \t "), None);
        assert_eq!(todos.len(), 1);
    }

    #[test]
    fn rapid_adds_keep_ids_distinct() {
        let mut todos = Vec::new();
        for i in 0..20 {
            add_todo(&mut todos, &format!("todo {i}")).expect("added");
        }
        let mut seen = ids(&todos);
        seen.sort_unstable();
        seen.dedup();
        assert_eq!(seen.len(), 20);
    }

    #[test]
    fn ids_stay_distinct_across_add_delete_reorder() {
        let mut todos = Vec::new();
        let a = add_todo(&mut todos, "a").unwrap();
        let b = add_todo(&mut todos, "b").unwrap();
        let c = add_todo(&mut todos, "c").unwrap();
        assert!(reorder_todo(&mut todos, c, a, true));
        assert!(delete_todo(&mut todos, b));
        add_todo(&mut todos, "d").unwrap();
        let mut seen = ids(&todos);
        seen.sort_unstable();
        seen.dedup();
        assert_eq!(seen.len(), todos.len());
    }

    // --- toggle ---

    #[test]
    fn toggle_twice_restores_completed() {
        let mut todos = vec![make_todo(1, "a", false, Some(0))];
        assert!(toggle_todo(&mut todos, 1));
        assert!(todos[0].completed);
        assert!(toggle_todo(&mut todos, 1));
        assert!(!todos[0].completed);
    }

    #[test]
    fn toggle_unknown_id_is_noop() {
        let mut todos = vec![make_todo(1, "a", false, Some(0))];
        assert!(!toggle_todo(&mut todos, 99));
        assert!(!todos[0].completed);
    }

    // --- edit ---

    #[test]
    fn edit_replaces_trimmed_text() {
        let mut todos = vec![make_todo(1, "old", false, Some(0))];
        assert!(edit_todo(&mut todos, 1, "  new text  "));
        assert_eq!(todos[0].text, "new text");
    }

    #[test]
    fn edit_blank_leaves_text_unchanged() {
        let mut todos = vec![make_todo(1, "old", false, Some(0))];
        assert!(!edit_todo(&mut todos, 1, "   "));
        assert_eq!(todos[0].text, "old");
    }

    #[test]
    fn edit_same_text_reports_no_change() {
        let mut todos = vec![make_todo(1, "same", false, Some(0))];
        assert!(!edit_todo(&mut todos, 1, "same"));
        assert!(!edit_todo(&mut todos, 1, "  same "));
    }

    #[test]
    fn edit_unknown_id_is_noop() {
        let mut todos = vec![make_todo(1, "old", false, Some(0))];
        assert!(!edit_todo(&mut todos, 99, "new"));
        assert_eq!(todos[0].text, "old");
    }

    // --- delete / clear ---

    #[test]
    fn delete_removes_only_the_match() {
        let mut todos = vec![
            make_todo(1, "a", false, Some(0)),
            make_todo(2, "b", false, Some(1)),
            make_todo(3, "c", false, Some(2)),
        ];
        assert!(delete_todo(&mut todos, 2));
        assert_eq!(ids(&todos), vec![1, 3]);
        // Surviving orders keep their gap until the next reorder
        assert_eq!(orders(&todos), vec![Some(0), Some(2)]);
    }

    #[test]
    fn delete_unknown_id_is_noop() {
        let mut todos = vec![make_todo(1, "a", false, Some(0))];
        assert!(!delete_todo(&mut todos, 99));
        assert_eq!(todos.len(), 1);
    }

    #[test]
    fn clear_completed_keeps_active_todos() {
        let mut todos = vec![
            make_todo(1, "done", true, Some(0)),
            make_todo(2, "open", false, Some(1)),
        ];
        assert_eq!(clear_completed(&mut todos), 1);
        assert_eq!(ids(&todos), vec![2]);
        assert!(!todos[0].completed);
    }

    #[test]
    fn clear_completed_with_none_completed_removes_nothing() {
        let mut todos = vec![make_todo(1, "open", false, Some(0))];
        assert_eq!(clear_completed(&mut todos), 0);
        assert_eq!(todos.len(), 1);
    }

    // --- reorder ---

    #[test]
    fn reorder_before_first_moves_to_head() {
        let mut todos = vec![
            make_todo(1, "a", false, Some(0)),
            make_todo(2, "b", false, Some(1)),
            make_todo(3, "c", false, Some(2)),
        ];
        assert!(reorder_todo(&mut todos, 3, 1, true));
        assert_eq!(ids(&todos), vec![3, 1, 2]);
        assert_eq!(orders(&todos), vec![Some(0), Some(1), Some(2)]);
    }

    #[test]
    fn reorder_after_target_inserts_past_it() {
        let mut todos = vec![
            make_todo(1, "a", false, Some(0)),
            make_todo(2, "b", false, Some(1)),
            make_todo(3, "c", false, Some(2)),
        ];
        assert!(reorder_todo(&mut todos, 1, 2, false));
        assert_eq!(ids(&todos), vec![2, 1, 3]);
        assert_eq!(orders(&todos), vec![Some(0), Some(1), Some(2)]);
    }

    #[test]
    fn reorder_renumbers_densely_even_after_gaps() {
        // Orders with gaps, as left behind by deletes
        let mut todos = vec![
            make_todo(1, "a", false, Some(3)),
            make_todo(2, "b", false, Some(7)),
            make_todo(3, "c", false, Some(9)),
        ];
        assert!(reorder_todo(&mut todos, 2, 3, false));
        let mut seen: Vec<i64> = todos.iter().filter_map(|t| t.order).collect();
        seen.sort_unstable();
        assert_eq!(seen, vec![0, 1, 2]);
    }

    #[test]
    fn reorder_unknown_ids_is_noop() {
        let mut todos = vec![
            make_todo(1, "a", false, Some(0)),
            make_todo(2, "b", false, Some(1)),
        ];
        assert!(!reorder_todo(&mut todos, 99, 1, true));
        assert!(!reorder_todo(&mut todos, 1, 99, true));
        assert!(!reorder_todo(&mut todos, 1, 1, true));
        assert_eq!(ids(&todos), vec![1, 2]);
        assert_eq!(orders(&todos), vec![Some(0), Some(1)]);
    }

    // --- ordering / normalization ---

    #[test]
    fn sort_breaks_order_ties_newest_first() {
        let mut todos = vec![
            make_todo(1, "older", false, Some(0)),
            make_todo(2, "newer", false, Some(0)),
        ];
        sort_todos(&mut todos);
        assert_eq!(ids(&todos), vec![2, 1]);
    }

    #[test]
    fn normalize_assigns_missing_order_by_stored_position() {
        // A legacy blob: newest-first sequence, no order fields
        let mut todos = vec![
            make_todo(3, "newest", false, None),
            make_todo(2, "middle", false, None),
            make_todo(1, "oldest", false, None),
        ];
        normalize_order(&mut todos);
        assert_eq!(ids(&todos), vec![3, 2, 1]);
        assert_eq!(orders(&todos), vec![Some(0), Some(1), Some(2)]);
    }

    #[test]
    fn normalize_respects_existing_orders() {
        let mut todos = vec![
            make_todo(1, "second", false, Some(1)),
            make_todo(2, "first", false, Some(0)),
        ];
        normalize_order(&mut todos);
        assert_eq!(ids(&todos), vec![2, 1]);
    }
}
