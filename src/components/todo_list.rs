//! Todo List Component
//!
//! Renders the whole collection in display order with drag-and-drop
//! wiring, or an empty-state placeholder when there is nothing to show.

use leptos::prelude::*;

use leptos_dragdrop::create_dnd_signals;

use crate::components::TodoItem;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn TodoList() -> impl IntoView {
    let store = use_app_store();

    // One drag state machine shared by every row
    let dnd = create_dnd_signals();

    let has_todos = move || !store.todos().read().is_empty();

    view! {
        <Show
            when=has_todos
            fallback=|| view! { <div class="empty-state">"No todos yet. Add one above!"</div> }
        >
            <ul class="todo-list">
                <For
                    each=move || store.todos().get()
                    key=|todo| {
                        // Key on every mutable field so any change rebuilds
                        // the row, keeping the render order-correct
                        (todo.id, todo.text.clone(), todo.completed, todo.order)
                    }
                    children=move |todo| {
                        view! { <TodoItem todo=todo dnd=dnd /> }
                    }
                />
            </ul>
        </Show>
    }
}
