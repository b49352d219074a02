//! Todo Input Component
//!
//! Form for creating new todos. Submitting the form covers both the Add
//! button and the Enter key.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::context::use_todos;

#[component]
pub fn TodoInput() -> impl IntoView {
    let ctx = use_todos();

    let (draft, set_draft) = signal(String::new());

    let create_todo = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let text = draft.get();
        // Blank input is a no-op and keeps whatever was typed
        if text.trim().is_empty() {
            return;
        }
        ctx.add(&text);
        set_draft.set(String::new());
    };

    view! {
        <form class="todo-input-row" on:submit=create_todo>
            <input
                type="text"
                class="todo-input"
                placeholder="What needs to be done?"
                prop:value=move || draft.get()
                on:input=move |ev| {
                    let target = ev.target().unwrap();
                    let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                    set_draft.set(input.value());
                }
            />
            <button type="submit" class="add-btn">"Add"</button>
        </form>
    }
}
