//! Toast queue bound to Dioxus signals and tasks
//!
//! - **`use_toast_handle()`**: Hook owning a `ToastQueue` for the calling
//!   component. The queue is torn down with the component, cancelling every
//!   auto-close task that has not fired yet.
//! - **`use_toast_provider()`**: Same, and shares the handle with descendants.
//! - **`use_toasts()`**: Fetches the handle provided by an ancestor.
//!
//! Auto-close tasks always run in the owner's scope, so a toast shown from a
//! short-lived child still closes after the child unmounts.

use std::time::Duration;

use dioxus::prelude::*;
use dioxus_core::{current_scope_id, Runtime, Task};
use toast_common::{TimerHandle, ToastConfig, ToastId, ToastKind, ToastQueue, ToastRecord};
use tracing::debug;

/// Auto-close timer running as a Dioxus task
pub struct AutoCloseTask(Task);

impl TimerHandle for AutoCloseTask {
    fn cancel(self) {
        self.0.cancel();
    }
}

/// Copyable handle for showing and closing toasts.
#[derive(Clone, Copy, PartialEq)]
pub struct ToastHandle {
    queue: Signal<ToastQueue<AutoCloseTask>>,
    /// Scope that owns the queue and its auto-close tasks
    owner: ScopeId,
}

impl ToastHandle {
    /// Show a toast and schedule its auto-close.
    pub fn show(&self, kind: impl Into<ToastKind>, message: impl Into<String>) -> ToastId {
        let mut queue = self.queue;
        let timer_queue = self.queue;
        let owner = self.owner;
        queue.with_mut(|q| {
            q.show(kind, message, move |id, delay| {
                let task = Runtime::current().spawn(owner, async move {
                    sleep(delay).await;
                    let mut timer_queue = timer_queue;
                    match timer_queue.try_write() {
                        Ok(mut queue) => {
                            queue.expire(id);
                        }
                        Err(_) => debug!("Toast {} auto-closed after its queue was dropped", id),
                    };
                });
                AutoCloseTask(task)
            })
        })
    }

    /// Close a toast. Unknown or already closed ids are ignored.
    pub fn close(&self, id: ToastId) {
        let mut queue = self.queue;
        queue.with_mut(|q| q.close(id));
    }

    /// Snapshot of the active toasts, oldest first.
    pub fn toasts(&self) -> Vec<ToastRecord> {
        self.queue.read().toasts().to_vec()
    }

    pub fn len(&self) -> usize {
        self.queue.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.read().is_empty()
    }

    fn teardown(&self) {
        let mut queue = self.queue;
        // The signal may already be gone if the owner dropped first.
        if let Ok(mut guard) = queue.try_write() {
            std::mem::take(&mut *guard).teardown();
        };
    }
}

/// Hook that creates a toast queue owned by the calling component.
///
/// ```ignore
/// let toasts = use_toast_handle(ToastConfig::default());
/// rsx! {
///     button { onclick: move |_| { toasts.show("Info", "Hello"); }, "Greet" }
///     ToastStack { handle: toasts }
/// }
/// ```
pub fn use_toast_handle(config: ToastConfig) -> ToastHandle {
    let queue = use_signal(move || ToastQueue::new(config));
    let owner = use_hook(current_scope_id);
    let handle = ToastHandle { queue, owner };

    use_drop(move || handle.teardown());

    handle
}

/// Hook that creates a toast queue and provides it to descendants via context.
pub fn use_toast_provider(config: ToastConfig) -> ToastHandle {
    let handle = use_toast_handle(config);
    use_context_provider(move || handle)
}

/// Hook returning the handle of the nearest `use_toast_provider()` ancestor.
pub fn use_toasts() -> ToastHandle {
    use_context::<ToastHandle>()
}

#[cfg(target_arch = "wasm32")]
async fn sleep(delay: Duration) {
    let ms = u32::try_from(delay.as_millis()).unwrap_or(u32::MAX);
    gloo_timers::future::TimeoutFuture::new(ms).await;
}

#[cfg(not(target_arch = "wasm32"))]
async fn sleep(delay: Duration) {
    tokio::time::sleep(delay).await;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::ToastStack;
    use dioxus::html::{
        set_event_converter, PlatformEventData, SerializedHtmlEventConverter, SerializedMouseData,
    };
    use dioxus_core::{ElementId, Event, Mutation};
    use std::any::Any;
    use std::cell::Cell;
    use std::rc::Rc;

    const DELAY: Duration = Duration::from_millis(50);

    thread_local! {
        static HANDLE: Cell<Option<ToastHandle>> = const { Cell::new(None) };
        static PROVIDER_MOUNTED: Cell<Option<Signal<bool>>> = const { Cell::new(None) };
        static CALLER_MOUNTED: Cell<Option<Signal<bool>>> = const { Cell::new(None) };
    }

    fn handle() -> ToastHandle {
        HANDLE.with(|h| h.get()).expect("no toast handle rendered")
    }

    /// Mounts `Provider` until `PROVIDER_MOUNTED` is switched off
    #[component]
    fn Host() -> Element {
        let mounted = use_signal(|| true);
        PROVIDER_MOUNTED.with(|m| m.set(Some(mounted)));
        rsx! {
            if mounted() {
                Provider {}
            }
        }
    }

    /// Owns the queue and mounts `Caller` until `CALLER_MOUNTED` is switched off
    #[component]
    fn Provider() -> Element {
        let toasts = use_toast_provider(ToastConfig::new(DELAY));
        HANDLE.with(|h| h.set(Some(toasts)));
        let mounted = use_signal(|| true);
        CALLER_MOUNTED.with(|m| m.set(Some(mounted)));
        rsx! {
            if mounted() {
                Caller {}
            }
        }
    }

    /// Shows one toast through the context handle when it mounts
    #[component]
    fn Caller() -> Element {
        let toasts = use_toasts();
        use_hook(move || {
            toasts.show("Success", "Saved");
        });
        rsx! {
            div {}
        }
    }

    #[component]
    fn StackHost() -> Element {
        let toasts = use_toast_handle(ToastConfig::new(DELAY));
        HANDLE.with(|h| h.set(Some(toasts)));
        rsx! {
            ToastStack { handle: toasts }
        }
    }

    type MountFlag = std::thread::LocalKey<Cell<Option<Signal<bool>>>>;

    fn unmount(dom: &mut VirtualDom, flag: &'static MountFlag) {
        let mut mounted = flag.with(|m| m.get()).expect("flag not rendered");
        dom.in_runtime(|| mounted.set(false));
        dom.render_immediate_to_vec();
    }

    /// Let the dom run its tasks for `duration` of (paused) tokio time.
    async fn drive(dom: &mut VirtualDom, duration: Duration) {
        let deadline = tokio::time::Instant::now() + duration;
        loop {
            let has_work = tokio::select! {
                _ = dom.wait_for_work() => true,
                _ = tokio::time::sleep_until(deadline) => false,
            };
            if !has_work {
                break;
            }
            dom.render_immediate_to_vec();
        }
    }

    fn messages(dom: &VirtualDom) -> Vec<String> {
        let toasts = handle();
        dom.in_runtime(|| toasts.toasts())
            .into_iter()
            .map(|t| t.message)
            .collect()
    }

    #[tokio::test(flavor = "current_thread", start_paused = true)]
    async fn test_show_auto_closes_after_delay() {
        let mut dom = VirtualDom::new(Host);
        dom.rebuild_in_place();
        let toasts = handle();
        assert_eq!(messages(&dom), vec!["Saved"]);
        assert_eq!(dom.in_runtime(|| toasts.len()), 1);

        drive(&mut dom, DELAY / 2).await;
        assert_eq!(dom.in_runtime(|| toasts.len()), 1);

        drive(&mut dom, DELAY).await;
        assert!(dom.in_runtime(|| toasts.is_empty()));
    }

    #[tokio::test(flavor = "current_thread", start_paused = true)]
    async fn test_toast_closes_after_caller_unmounts() {
        let mut dom = VirtualDom::new(Host);
        dom.rebuild_in_place();
        unmount(&mut dom, &CALLER_MOUNTED);
        assert_eq!(messages(&dom), vec!["Saved"]);

        drive(&mut dom, DELAY * 2).await;
        assert!(dom.in_runtime(|| handle().is_empty()));
    }

    #[tokio::test(flavor = "current_thread", start_paused = true)]
    async fn test_close_cancels_auto_close() {
        let mut dom = VirtualDom::new(Host);
        dom.rebuild_in_place();
        let toasts = handle();
        let saved = dom.in_runtime(|| toasts.toasts()[0].id);

        drive(&mut dom, DELAY / 2).await;
        dom.in_runtime(|| {
            toasts.close(saved);
            toasts.close(saved);
            toasts.show("Info", "Later");
        });

        // Saved's deadline passes; Later is due only at 1.5 * DELAY
        drive(&mut dom, DELAY * 3 / 4).await;
        assert_eq!(messages(&dom), vec!["Later"]);

        drive(&mut dom, DELAY).await;
        assert!(dom.in_runtime(|| toasts.is_empty()));
    }

    #[tokio::test(flavor = "current_thread", start_paused = true)]
    async fn test_unmount_tears_down_queue() {
        let mut dom = VirtualDom::new(Host);
        dom.rebuild_in_place();
        let toasts = handle();
        unmount(&mut dom, &PROVIDER_MOUNTED);

        drive(&mut dom, DELAY * 4).await;
        assert!(dom.in_runtime(|| toasts.queue.try_read().is_err()));
    }

    #[tokio::test(flavor = "current_thread", start_paused = true)]
    async fn test_close_button_closes_toast() {
        set_event_converter(Box::new(SerializedHtmlEventConverter));

        let mut dom = VirtualDom::new(StackHost);
        dom.rebuild_in_place();
        let toasts = handle();
        dom.in_runtime(|| {
            toasts.show("Danger", "Oops");
            toasts.show("Info", "Keep");
        });

        let mutations = dom.render_immediate_to_vec();
        let buttons: Vec<ElementId> = mutations
            .edits
            .iter()
            .filter_map(|edit| match edit {
                Mutation::NewEventListener { name, id } if name == "click" => Some(*id),
                _ => None,
            })
            .collect();
        assert_eq!(buttons.len(), 2);

        let click = Event::new(
            Rc::new(PlatformEventData::new(Box::new(SerializedMouseData::default())))
                as Rc<dyn Any>,
            true,
        );
        dom.runtime().handle_event("click", click, buttons[0]);
        dom.render_immediate_to_vec();

        assert_eq!(messages(&dom), vec!["Keep"]);
    }
}
