use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Lightweight flag shared between the UI loop and the event reader
/// thread; flipping it tells the reader to stop polling and exit.
#[derive(Clone, Debug, Default)]
pub struct ShutdownHandle {
    shutdown: Arc<AtomicBool>,
}

impl ShutdownHandle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn signal(&self) {
        if !self.shutdown.swap(true, Ordering::SeqCst) {
            tracing::info!("shutdown signaled");
        }
    }

    pub fn is_shutting_down(&self) -> bool {
        self.shutdown.load(Ordering::SeqCst)
    }
}
