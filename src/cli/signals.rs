//! Ctrl-C handling for watch mode

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tokio::sync::Notify;
use tracing::debug;

/// Shutdown signal shared between the signal task and the watch loop
pub struct ShutdownSignal {
    shutdown: Arc<AtomicBool>,
    notify: Arc<Notify>,
}

impl ShutdownSignal {
    /// Create a new shutdown signal handler
    pub fn new() -> Self {
        Self {
            shutdown: Arc::new(AtomicBool::new(false)),
            notify: Arc::new(Notify::new()),
        }
    }

    /// Check if shutdown was requested
    pub fn is_shutdown(&self) -> bool {
        self.shutdown.load(Ordering::SeqCst)
    }

    /// Request shutdown and wake waiters
    pub fn trigger(&self) {
        self.shutdown.store(true, Ordering::SeqCst);
        self.notify.notify_waiters();
    }

    /// Setup Ctrl-C handler
    pub fn setup(&self) {
        let shutdown = Arc::clone(&self.shutdown);
        let notify = Arc::clone(&self.notify);

        tokio::spawn(async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                debug!("received interrupt");
                shutdown.store(true, Ordering::SeqCst);
                notify.notify_waiters();
            }
        });
    }

    /// Resolve once shutdown was requested
    pub async fn wait(&self) {
        loop {
            let notified = self.notify.notified();
            if self.is_shutdown() {
                return;
            }
            notified.await;
        }
    }
}

impl Default for ShutdownSignal {
    fn default() -> Self {
        Self::new()
    }
}
