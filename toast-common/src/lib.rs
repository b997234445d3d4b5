//! toast-common - Framework-free toast state shared by the UI crates
//!
//! Holds the toast data model, the auto-close configuration and the
//! `ToastQueue` state machine. Nothing here touches a renderer or a clock;
//! timers are supplied by the caller through `TimerHandle`.

pub mod config;
pub mod toast;
pub mod toast_queue;

pub use config::{ConfigError, ToastConfig, DEFAULT_AUTO_CLOSE_MS};
pub use toast::{ToastId, ToastKind, ToastRecord};
pub use toast_queue::{TimerHandle, ToastQueue};
