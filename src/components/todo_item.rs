//! Todo Item Component
//!
//! A single list row: completion toggle, escaped text with inline editing,
//! edit/delete buttons, and drag-and-drop handles.

use leptos::html;
use leptos::prelude::*;
use wasm_bindgen::JsCast;

use leptos_dragdrop::{
    make_on_dragend, make_on_dragleave, make_on_dragover, make_on_dragstart, make_on_drop,
    DndSignals,
};

use crate::context::use_todos;
use crate::models::Todo;

fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#039;")
}

/// A single todo row
#[component]
pub fn TodoItem(todo: Todo, dnd: DndSignals) -> impl IntoView {
    let ctx = use_todos();

    let id = todo.id;
    let completed = todo.completed;
    let text = todo.text.clone();
    let escaped = escape_html(&text);

    let (editing, set_editing) = signal(false);
    let (draft, set_draft) = signal(String::new());
    let input_ref = NodeRef::<html::Input>::new();

    // Focus and select the edit field once it is mounted
    Effect::new(move |_| {
        if editing.get() {
            if let Some(input) = input_ref.get() {
                let _ = input.focus();
                input.select();
            }
        }
    });

    let commit_edit = move || {
        if !editing.get_untracked() {
            return;
        }
        set_editing.set(false);
        ctx.edit(id, &draft.get_untracked());
    };

    let cancel_edit = move || set_editing.set(false);

    let text_for_dblclick = text.clone();
    let text_for_button = text.clone();

    // DnD handlers
    let on_dragstart = make_on_dragstart(dnd, id);
    let on_dragover = make_on_dragover(dnd, id);
    let on_dragleave = make_on_dragleave(dnd, id);
    let on_dragend = make_on_dragend(dnd);
    let on_drop = make_on_drop(dnd, id, move |dragged, target, before| {
        ctx.reorder(dragged, target, before);
    });

    // Visual state
    let row_class = move || {
        let mut c = String::from("todo-item");
        if completed {
            c.push_str(" completed");
        }
        if dnd.dragging_read.get() == Some(id) {
            c.push_str(" dragging");
        }
        if let Some(mark) = dnd.hover_read.get() {
            if mark.target_id == id {
                c.push_str(if mark.insert_before {
                    " drag-over-before"
                } else {
                    " drag-over-after"
                });
            }
        }
        c
    };

    view! {
        <li
            class=row_class
            draggable="true"
            on:dragstart=on_dragstart
            on:dragover=on_dragover
            on:dragleave=on_dragleave
            on:drop=on_drop
            on:dragend=on_dragend
        >
            <input
                type="checkbox"
                class="todo-checkbox"
                checked=completed
                on:change=move |_| ctx.toggle(id)
            />

            {move || if editing.get() {
                view! {
                    <input
                        type="text"
                        class="todo-edit-input"
                        maxlength="100"
                        prop:value=move || draft.get()
                        node_ref=input_ref
                        on:input=move |ev| {
                            let target = ev.target().unwrap();
                            let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                            set_draft.set(input.value());
                        }
                        on:keydown=move |ev: web_sys::KeyboardEvent| {
                            match ev.key().as_str() {
                                "Enter" => {
                                    ev.prevent_default();
                                    commit_edit();
                                }
                                "Escape" => cancel_edit(),
                                _ => {}
                            }
                        }
                        on:blur=move |_| commit_edit()
                    />
                }.into_any()
            } else {
                let text = text_for_dblclick.clone();
                let escaped = escaped.clone();
                view! {
                    <span
                        class="todo-text"
                        inner_html=escaped
                        on:dblclick=move |_| {
                            set_draft.set(text.clone());
                            set_editing.set(true);
                        }
                    ></span>
                }.into_any()
            }}

            <button
                class="edit-btn"
                on:click=move |_| {
                    set_draft.set(text_for_button.clone());
                    set_editing.set(true);
                }
            >
                "Edit"
            </button>

            <button class="delete-btn" on:click=move |_| ctx.delete(id)>"Delete"</button>
        </li>
    }
}
