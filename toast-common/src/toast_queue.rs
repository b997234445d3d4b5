use std::collections::HashMap;
use std::time::Duration;

use tracing::{debug, info};

use crate::{ToastConfig, ToastId, ToastKind, ToastRecord};

/// A scheduled auto-close that can be called off before it fires.
///
/// Whoever creates the handle guarantees that, unless `cancel` is called,
/// the scheduled work eventually calls `ToastQueue::expire` for its toast.
pub trait TimerHandle {
    fn cancel(self);
}

/// Pure state machine for the active toasts and their pending auto-close timers.
///
/// Owns the ordered list of visible toasts (oldest first) and one timer
/// handle per toast whose auto-close has not fired yet. Every operation is
/// total: closing an unknown or already-removed id does nothing.
///
/// Dropping the queue cancels whatever timers are still pending.
pub struct ToastQueue<H: TimerHandle> {
    toasts: Vec<ToastRecord>,
    pending: HashMap<ToastId, H>,
    next_id: u64,
    config: ToastConfig,
}

impl<H: TimerHandle> Default for ToastQueue<H> {
    fn default() -> Self {
        Self::new(ToastConfig::default())
    }
}

impl<H: TimerHandle> ToastQueue<H> {
    pub fn new(config: ToastConfig) -> Self {
        Self {
            toasts: Vec::new(),
            pending: HashMap::new(),
            next_id: 1,
            config,
        }
    }

    /// Append a new toast and arm its auto-close.
    ///
    /// `schedule` receives the new id and the auto-close delay and must
    /// return the handle of a timer that calls `expire(id)` when it fires.
    pub fn show(
        &mut self,
        kind: impl Into<ToastKind>,
        message: impl Into<String>,
        schedule: impl FnOnce(ToastId, Duration) -> H,
    ) -> ToastId {
        let id = ToastId::new(self.next_id);
        self.next_id += 1;

        let kind = kind.into();
        debug!("Showing toast {} ({})", id, kind);
        self.toasts.push(ToastRecord {
            id,
            kind,
            message: message.into(),
        });

        let handle = schedule(id, self.config.auto_close);
        self.pending.insert(id, handle);
        id
    }

    /// Dismiss a toast before (or instead of) its auto-close.
    ///
    /// Cancels the pending timer, if any, and removes the record. Returns
    /// whether a record was removed.
    pub fn close(&mut self, id: ToastId) -> bool {
        if let Some(handle) = self.pending.remove(&id) {
            handle.cancel();
        }
        let removed = self.remove_record(id);
        if removed {
            debug!("Closed toast {}", id);
        }
        removed
    }

    /// Called by a toast's timer when its delay has elapsed.
    ///
    /// The handle is dropped rather than cancelled since it has already
    /// fired. A stale timer for an id that is gone changes nothing.
    pub fn expire(&mut self, id: ToastId) -> bool {
        self.pending.remove(&id);
        let removed = self.remove_record(id);
        if removed {
            debug!("Toast {} expired", id);
        }
        removed
    }

    /// Dispose of the queue, cancelling every timer that has not fired yet.
    pub fn teardown(mut self) {
        let cancelled = self.cancel_all();
        info!(
            "Toast queue torn down ({} active, {} timers cancelled)",
            self.toasts.len(),
            cancelled
        );
    }

    /// Active toasts, oldest first.
    pub fn toasts(&self) -> &[ToastRecord] {
        &self.toasts
    }

    pub fn get(&self, id: ToastId) -> Option<&ToastRecord> {
        self.toasts.iter().find(|t| t.id == id)
    }

    pub fn len(&self) -> usize {
        self.toasts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }

    /// Whether the toast still has an auto-close waiting to fire.
    pub fn is_pending(&self, id: ToastId) -> bool {
        self.pending.contains_key(&id)
    }

    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    pub fn auto_close(&self) -> Duration {
        self.config.auto_close
    }

    fn remove_record(&mut self, id: ToastId) -> bool {
        let before = self.toasts.len();
        self.toasts.retain(|t| t.id != id);
        self.toasts.len() != before
    }

    fn cancel_all(&mut self) -> usize {
        let count = self.pending.len();
        for (_, handle) in self.pending.drain() {
            handle.cancel();
        }
        count
    }
}

impl<H: TimerHandle> Drop for ToastQueue<H> {
    fn drop(&mut self) {
        self.cancel_all();
    }
}
