//! Column of active toasts

use crate::components::ToastItem;
use crate::stores::ToastHandle;
use dioxus::prelude::*;

/// Renders every active toast of `handle`, oldest at the top, pinned to the
/// top-right corner of the viewport.
#[component]
pub fn ToastStack(handle: ToastHandle) -> Element {
    let toasts = handle.toasts();

    rsx! {
        div { class: "fixed top-4 right-4 z-50 flex flex-col gap-2",
            for toast in toasts {
                ToastItem {
                    key: "{toast.id}",
                    toast: toast.clone(),
                    on_close: move |id| handle.close(id),
                }
            }
        }
    }
}
