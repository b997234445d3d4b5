//! Toast playground page

use dioxus::prelude::*;
use toast_common::{ToastConfig, ToastKind};
use toast_ui::{use_toast_provider, use_toasts, ChromelessButton, ToastStack};
use tracing::warn;

/// A button that raises one fixed toast
struct Trigger {
    label: &'static str,
    kind: &'static str,
    message: &'static str,
}

static TRIGGERS: [Trigger; 3] = [
    Trigger {
        label: "Show success",
        kind: "Success",
        message: "Your toast was successful!",
    },
    Trigger {
        label: "Show danger",
        kind: "Danger",
        message: "There was an error!",
    },
    Trigger {
        label: "Show info",
        kind: "Info",
        message: "Here is some information.",
    },
];

/// Build the toast config from the `delay` query parameter, falling back to
/// the default on bad input.
fn toast_config(delay: Option<&str>) -> ToastConfig {
    match delay {
        None => ToastConfig::default(),
        Some(raw) => ToastConfig::from_millis_str(raw).unwrap_or_else(|e| {
            warn!("{}, using default toast config", e);
            ToastConfig::default()
        }),
    }
}

#[component]
pub fn Home(delay: Option<String>) -> Element {
    let toasts = use_toast_provider(toast_config(delay.as_deref()));

    rsx! {
        div { class: "flex flex-col gap-2 p-4",
            ToastStack { handle: toasts }
            div { class: "flex items-center gap-1 text-xs",
                for trigger in TRIGGERS.iter() {
                    TriggerButton {
                        key: "{trigger.label}",
                        label: trigger.label,
                        kind: trigger.kind,
                        message: trigger.message,
                    }
                }
            }
        }
    }
}

#[component]
fn TriggerButton(label: &'static str, kind: &'static str, message: &'static str) -> Element {
    let toasts = use_toasts();

    rsx! {
        ChromelessButton {
            class: Some("w-fit p-2 border border-black rounded-md".to_string()),
            onclick: move |_| {
                toasts.show(ToastKind::from(kind), message);
            },
            "{label}"
        }
    }
}
