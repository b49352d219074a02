//! Local Storage Persistence
//!
//! Reads and writes the whole todo collection as one JSON blob under a
//! fixed key. Both directions degrade to a console diagnostic instead of
//! surfacing errors to the UI.

use crate::list;
use crate::models::Todo;

const STORAGE_KEY: &str = "todolist-todos";

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok()?
}

/// Load the persisted collection, normalized for display. An absent or
/// unparsable blob yields an empty collection.
pub fn load() -> Vec<Todo> {
    let raw = match local_storage().and_then(|s| s.get_item(STORAGE_KEY).ok().flatten()) {
        Some(raw) => raw,
        None => return Vec::new(),
    };
    match parse_todos(&raw) {
        Ok(mut todos) => {
            list::normalize_order(&mut todos);
            todos
        }
        Err(err) => {
            web_sys::console::error_1(
                &format!("Failed to load todos from localStorage: {err}").into(),
            );
            Vec::new()
        }
    }
}

/// Overwrite the persisted blob with the full collection. A rejected write
/// (e.g. quota exceeded) leaves the previous blob in place; the in-memory
/// collection is not rolled back.
pub fn save(todos: &[Todo]) {
    let Some(storage) = local_storage() else {
        return;
    };
    match encode_todos(todos) {
        Ok(json) => {
            if let Err(err) = storage.set_item(STORAGE_KEY, &json) {
                web_sys::console::error_1(
                    &format!("Failed to save todos to localStorage: {err:?}").into(),
                );
            }
        }
        Err(err) => {
            web_sys::console::error_1(&format!("Failed to serialize todos: {err}").into());
        }
    }
}

fn parse_todos(raw: &str) -> Result<Vec<Todo>, serde_json::Error> {
    serde_json::from_str(raw)
}

fn encode_todos(todos: &[Todo]) -> Result<String, serde_json::Error> {
    serde_json::to_string(todos)
}
