//! State bound to the Dioxus runtime

pub mod toasts;

pub use toasts::*;
