//! Application Controller
//!
//! Every user gesture dispatches through this context. Mutations run
//! against the reactive store, and any change is immediately written
//! through to local storage.

use leptos::prelude::*;

use crate::list;
use crate::storage;
use crate::store::{AppStateStoreFields, AppStore};

/// Controller provided via the Leptos context API
#[derive(Clone, Copy)]
pub struct TodoContext {
    store: AppStore,
}

impl TodoContext {
    pub fn new(store: AppStore) -> Self {
        Self { store }
    }

    /// Add a todo; whitespace-only input changes nothing
    pub fn add(&self, text: &str) {
        if text.trim().is_empty() {
            return;
        }
        let added = list::add_todo(&mut self.store.todos().write(), text).is_some();
        if added {
            self.persist();
        }
    }

    pub fn toggle(&self, id: i64) {
        let changed = list::toggle_todo(&mut self.store.todos().write(), id);
        if changed {
            self.persist();
        }
    }

    /// Apply an edit; no-op edits re-render but are never persisted
    pub fn edit(&self, id: i64, text: &str) {
        let changed = list::edit_todo(&mut self.store.todos().write(), id, text);
        if changed {
            self.persist();
        }
    }

    pub fn delete(&self, id: i64) {
        let changed = list::delete_todo(&mut self.store.todos().write(), id);
        if changed {
            self.persist();
        }
    }

    /// Remove every completed todo; persists even when none matched
    pub fn clear_completed(&self) {
        list::clear_completed(&mut self.store.todos().write());
        self.persist();
    }

    pub fn reorder(&self, dragged_id: i64, target_id: i64, insert_before: bool) {
        let changed =
            list::reorder_todo(&mut self.store.todos().write(), dragged_id, target_id, insert_before);
        if changed {
            self.persist();
        }
    }

    fn persist(&self) {
        storage::save(&self.store.todos().read());
    }
}

/// Get the controller from context
pub fn use_todos() -> TodoContext {
    expect_context::<TodoContext>()
}
