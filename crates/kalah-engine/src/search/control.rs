//! Search control: the shared stop flag.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// Cooperative cancellation for a running search.
///
/// The search checks [`should_stop`](Self::should_stop) before expanding
/// every node. Any thread holding a clone of the flag can stop it.
#[derive(Debug, Clone)]
pub struct SearchControl {
    stopped: Arc<AtomicBool>,
}

impl SearchControl {
    /// Create control around an existing stop flag.
    pub fn new(stopped: Arc<AtomicBool>) -> Self {
        Self { stopped }
    }

    /// Check whether the search should unwind.
    #[inline]
    pub fn should_stop(&self) -> bool {
        self.stopped.load(Ordering::Relaxed)
    }

    /// Request the search to stop.
    pub fn stop(&self) {
        self.stopped.store(true, Ordering::Release);
    }

    /// Reference to the shared stop flag.
    pub fn stop_flag(&self) -> &Arc<AtomicBool> {
        &self.stopped
    }
}

impl Default for SearchControl {
    fn default() -> Self {
        Self::new(Arc::new(AtomicBool::new(false)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stop_is_seen_through_shared_flag() {
        let control = SearchControl::default();
        let other = SearchControl::new(Arc::clone(control.stop_flag()));
        assert!(!control.should_stop());
        other.stop();
        assert!(control.should_stop());
    }
}
