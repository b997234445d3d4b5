//! Single toast notification

use crate::components::ChromelessButton;
use dioxus::prelude::*;
use toast_common::{ToastId, ToastKind, ToastRecord};

/// Background class for a toast category. Unrecognized labels get the
/// neutral (info) treatment.
pub fn toast_kind_class(kind: &ToastKind) -> &'static str {
    match kind {
        ToastKind::Success => "bg-green-500",
        ToastKind::Danger => "bg-red-400",
        ToastKind::Info | ToastKind::Other(_) => "bg-blue-300",
    }
}

/// A dismissible toast. Holds no state; closing is up to the owner.
#[component]
pub fn ToastItem(
    /// The toast to display
    toast: ToastRecord,
    /// Called with the toast's id each time the close button is pressed
    on_close: EventHandler<ToastId>,
) -> Element {
    let id = toast.id;
    let kind_class = toast_kind_class(&toast.kind);

    rsx! {
        div {
            class: "toast-item relative w-48 p-3 text-xs text-white rounded-md shadow-lg {kind_class}",
            role: "alert",
            aria_live: "assertive",
            "{toast.message}"
            ChromelessButton {
                class: Some("absolute top-1 right-1 p-1 text-white/80 hover:text-white".to_string()),
                aria_label: Some("Close Toast".to_string()),
                onclick: move |_| on_close.call(id),
                "✕"
            }
        }
    }
}
