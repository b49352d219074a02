//! Leptos DragDrop Utilities
//!
//! HTML5 drag-and-drop for reorderable Leptos lists.
//! Tracks the dragged item and the hovered drop candidate, with the
//! insertion side derived from the candidate's vertical midpoint.

use leptos::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::DragEvent;

/// Hover marker over a drop candidate
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HoverMark {
    pub target_id: i64,
    /// True when the pointer sits above the candidate's vertical midpoint
    pub insert_before: bool,
}

/// DnD state signals
#[derive(Clone, Copy)]
pub struct DndSignals {
    pub dragging_read: ReadSignal<Option<i64>>,
    pub dragging_write: WriteSignal<Option<i64>>,
    pub hover_read: ReadSignal<Option<HoverMark>>,
    pub hover_write: WriteSignal<Option<HoverMark>>,
}

pub fn create_dnd_signals() -> DndSignals {
    let (dragging_read, dragging_write) = signal(None::<i64>);
    let (hover_read, hover_write) = signal(None::<HoverMark>);
    DndSignals {
        dragging_read,
        dragging_write,
        hover_read,
        hover_write,
    }
}

/// End drag operation
pub fn end_drag(dnd: &DndSignals) {
    dnd.dragging_write.set(None);
    dnd.hover_write.set(None);
}

/// True when the pointer is above the vertical midpoint of a target rect
pub fn pointer_in_upper_half(client_y: f64, rect_top: f64, rect_height: f64) -> bool {
    client_y < rect_top + rect_height / 2.0
}

fn hover_mark_for(ev: &DragEvent, item_id: i64) -> HoverMark {
    let insert_before = ev
        .current_target()
        .and_then(|target| target.dyn_into::<web_sys::Element>().ok())
        .map(|el| {
            let rect = el.get_bounding_client_rect();
            pointer_in_upper_half(ev.client_y() as f64, rect.top(), rect.height())
        })
        .unwrap_or(true);
    HoverMark {
        target_id: item_id,
        insert_before,
    }
}

/// Create dragstart handler for a draggable item
pub fn make_on_dragstart(dnd: DndSignals, item_id: i64) -> impl Fn(DragEvent) + Copy + 'static {
    move |ev: DragEvent| {
        // Some browsers refuse to drag without payload data
        if let Some(dt) = ev.data_transfer() {
            let _ = dt.set_data("text/plain", &item_id.to_string());
            dt.set_effect_allowed("move");
        }
        dnd.dragging_write.set(Some(item_id));
    }
}

/// Create dragover handler; marks this item as the drop candidate
/// unless it is the dragged item itself
pub fn make_on_dragover(dnd: DndSignals, item_id: i64) -> impl Fn(DragEvent) + Copy + 'static {
    move |ev: DragEvent| {
        let Some(dragged) = dnd.dragging_read.get_untracked() else {
            return;
        };
        if dragged == item_id {
            return;
        }
        ev.prevent_default();
        if let Some(dt) = ev.data_transfer() {
            dt.set_drop_effect("move");
        }
        let mark = hover_mark_for(&ev, item_id);
        if dnd.hover_read.get_untracked() != Some(mark) {
            dnd.hover_write.set(Some(mark));
        }
    }
}

/// Create dragleave handler; clears this item's hover marker unless the
/// pointer only moved into one of its descendants
pub fn make_on_dragleave(dnd: DndSignals, item_id: i64) -> impl Fn(DragEvent) + Copy + 'static {
    move |ev: DragEvent| {
        if let Some(related) = ev.related_target() {
            let inside = ev
                .current_target()
                .and_then(|target| target.dyn_into::<web_sys::Element>().ok())
                .map(|el| el.contains(related.dyn_ref::<web_sys::Node>()))
                .unwrap_or(false);
            if inside {
                return;
            }
        }
        if matches!(dnd.hover_read.get_untracked(), Some(mark) if mark.target_id == item_id) {
            dnd.hover_write.set(None);
        }
    }
}

/// Create drop handler; resolves the gesture into
/// `(dragged_id, target_id, insert_before)` and clears all markers
pub fn make_on_drop<F>(dnd: DndSignals, item_id: i64, on_drop: F) -> impl Fn(DragEvent) + Clone + 'static
where
    F: Fn(i64, i64, bool) + Clone + 'static,
{
    move |ev: DragEvent| {
        ev.prevent_default();
        let dragged = dnd.dragging_read.get_untracked();
        let hover = dnd.hover_read.get_untracked();
        end_drag(&dnd);
        let Some(dragged) = dragged else {
            return;
        };
        if dragged == item_id {
            return;
        }
        // Fall back to the drop coordinates when the hover marker is stale
        let insert_before = match hover {
            Some(mark) if mark.target_id == item_id => mark.insert_before,
            _ => hover_mark_for(&ev, item_id).insert_before,
        };
        on_drop(dragged, item_id, insert_before);
    }
}

/// Create dragend handler; always returns the state machine to idle,
/// whether or not the drop landed on a target
pub fn make_on_dragend(dnd: DndSignals) -> impl Fn(DragEvent) + Copy + 'static {
    move |_ev: DragEvent| end_drag(&dnd)
}
