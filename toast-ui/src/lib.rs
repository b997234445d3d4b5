//! toast-ui - Toast components and state for Dioxus apps
//!
//! Pure view components plus the `ToastHandle` that binds a
//! `toast_common::ToastQueue` to Dioxus signals and tasks.

pub mod components;
pub mod stores;

pub use components::*;
pub use stores::*;
