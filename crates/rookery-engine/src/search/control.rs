//! Search control: stop flag and node budget.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// Controls when a search should stop.
///
/// Checked at every node expansion. Two triggers:
/// - **External stop**: the shared flag is set, e.g. from another thread
/// - **Node budget**: the search has expanded `max_nodes` nodes
///
/// When the budget fires, the stop flag is set so subsequent calls return
/// immediately.
#[derive(Debug, Clone)]
pub struct SearchControl {
    stopped: Arc<AtomicBool>,
    max_nodes: Option<u64>,
}

impl SearchControl {
    /// Create control with no node budget, only the external stop flag.
    pub fn new_infinite(stopped: Arc<AtomicBool>) -> Self {
        Self {
            stopped,
            max_nodes: None,
        }
    }

    /// Create control that also stops after `max_nodes` expansions.
    pub fn new_with_nodes(stopped: Arc<AtomicBool>, max_nodes: u64) -> Self {
        Self {
            stopped,
            max_nodes: Some(max_nodes),
        }
    }

    /// Control with a fresh, private stop flag.
    pub fn unbounded() -> Self {
        Self::new_infinite(Arc::new(AtomicBool::new(false)))
    }

    /// Check whether the search should abort immediately.
    pub fn should_stop(&self, nodes: u64) -> bool {
        if self.stopped.load(Ordering::Relaxed) {
            return true;
        }

        if let Some(max) = self.max_nodes
            && nodes >= max
        {
            self.stopped.store(true, Ordering::Release);
            return true;
        }

        false
    }

    /// Return `true` once a stop has been requested or triggered.
    #[inline]
    pub fn is_stopped(&self) -> bool {
        self.stopped.load(Ordering::Relaxed)
    }

    /// Ask the search to stop.
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
        Self::unbounded()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::sync::atomic::{AtomicBool, Ordering};

    use super::SearchControl;

    #[test]
    fn infinite_never_stops_on_its_own() {
        let control = SearchControl::new_infinite(Arc::new(AtomicBool::new(false)));
        assert!(!control.should_stop(u64::MAX - 1));
        assert!(!control.is_stopped());
    }

    #[test]
    fn external_flag_stops() {
        let flag = Arc::new(AtomicBool::new(false));
        let control = SearchControl::new_infinite(Arc::clone(&flag));
        flag.store(true, Ordering::Release);
        assert!(control.should_stop(0));
    }

    #[test]
    fn node_budget_latches_stop() {
        let control = SearchControl::new_with_nodes(Arc::new(AtomicBool::new(false)), 100);
        assert!(!control.should_stop(99));
        assert!(control.should_stop(100));
        // Stays stopped even below the budget.
        assert!(control.should_stop(1));
        assert!(control.stop_flag().load(Ordering::Acquire));
    }

    #[test]
    fn clones_share_the_flag() {
        let control = SearchControl::unbounded();
        let other = control.clone();
        other.stop();
        assert!(control.is_stopped());
    }
}
