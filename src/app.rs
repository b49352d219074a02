//! Todolist Frontend App
//!
//! Root component: loads the persisted collection once at startup and wires
//! the input, list, and summary components together.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{SummaryBar, TodoInput, TodoList};
use crate::context::TodoContext;
use crate::storage;
use crate::store::AppState;

#[component]
pub fn App() -> impl IntoView {
    // The store is the single in-memory copy of the collection for the
    // rest of the session; all mutations flow through TodoContext.
    let store = Store::new(AppState {
        todos: storage::load(),
    });
    provide_context(store);
    provide_context(TodoContext::new(store));

    view! {
        <div class="todo-app">
            <h1>"Todo List"</h1>

            <TodoInput />

            <TodoList />

            <SummaryBar />
        </div>
    }
}
