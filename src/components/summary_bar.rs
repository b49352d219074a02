//! Summary Bar Component
//!
//! Item counts plus the bulk clear-completed control.

use leptos::prelude::*;

use crate::context::use_todos;
use crate::store::{use_app_store, AppStateStoreFields};

/// Count label, pluralized for exactly one item; the active count only
/// appears once there is more than one item
fn summary_label(total: usize, active: usize) -> String {
    match total {
        0 => "0 items".to_string(),
        1 => "1 item".to_string(),
        n => format!("{} items ({} active)", n, active),
    }
}

#[component]
pub fn SummaryBar() -> impl IntoView {
    let store = use_app_store();
    let ctx = use_todos();

    let label = move || {
        let todos = store.todos().read();
        let active = todos.iter().filter(|t| !t.completed).count();
        summary_label(todos.len(), active)
    };

    let has_completed = move || store.todos().read().iter().any(|t| t.completed);

    view! {
        <div class="todo-footer">
            <span class="todo-count">{label}</span>
            <Show when=has_completed>
                <button class="clear-completed-btn" on:click=move |_| ctx.clear_completed()>
                    "Clear completed"
                </button>
            </Show>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::summary_label;

    #[test]
    fn zero_items_pluralizes() {
        assert_eq!(summary_label(0, 0), "0 items");
    }

    #[test]
    fn one_item_is_singular_without_active_count() {
        assert_eq!(summary_label(1, 1), "1 item");
        assert_eq!(summary_label(1, 0), "1 item");
    }

    #[test]
    fn several_items_report_the_active_count() {
        assert_eq!(summary_label(3, 2), "3 items (2 active)");
    }
}
