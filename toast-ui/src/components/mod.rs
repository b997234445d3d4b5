//! Shared UI components

pub mod button;
pub mod toast_item;
pub mod toast_stack;

pub use button::ChromelessButton;
pub use toast_item::{toast_kind_class, ToastItem};
pub use toast_stack::ToastStack;
