// ABOUTME: Cooperative cancellation signal shared between a driver and its actors.
// ABOUTME: An atomic flag plus a Notify; cancel is idempotent and broadcast.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use tokio::sync::Notify;

struct ShutdownInner {
    cancelled: AtomicBool,
    notify: Notify,
}

/// A clonable shutdown signal.
///
/// The driver holds one handle and calls [`cancel`](Self::cancel) once;
/// every clone observes the signal, either by polling
/// [`is_cancelled`](Self::is_cancelled) or by awaiting
/// [`cancelled`](Self::cancelled). Replaces busy-polling a shutdown flag.
#[derive(Clone)]
pub struct Shutdown {
    inner: Arc<ShutdownInner>,
}

impl Default for Shutdown {
    fn default() -> Self {
        Self::new()
    }
}

impl Shutdown {
    /// Create a new, un-fired shutdown signal.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(ShutdownInner {
                cancelled: AtomicBool::new(false),
                notify: Notify::new(),
            }),
        }
    }

    /// Fire the signal. Idempotent; wakes every waiter on the first call.
    pub fn cancel(&self) {
        if !self.inner.cancelled.swap(true, Ordering::SeqCst) {
            self.inner.notify.notify_waiters();
        }
    }

    /// Whether the signal has fired.
    pub fn is_cancelled(&self) -> bool {
        self.inner.cancelled.load(Ordering::SeqCst)
    }

    /// Wait until the signal fires. Returns immediately if it already has.
    pub async fn cancelled(&self) {
        if self.is_cancelled() {
            return;
        }

        let notified = self.inner.notify.notified();
        tokio::pin!(notified);
        notified.as_mut().enable();

        // Re-check after registering so a cancel between the check above
        // and the registration cannot be missed.
        if self.is_cancelled() {
            return;
        }

        notified.await;
    }
}
