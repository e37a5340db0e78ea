//! # Bridge Handle
//!
//! Shared handle over the bridge variant selected at startup. The
//! variant never changes after selection; the handle exists so the
//! checkout handler, the cart-changed updater and the app wiring can
//! all talk to the same instance without a global.

use std::sync::{Arc, Mutex};

use minishop_bridge::Bridge;

/// Shared handle over the active bridge variant.
#[derive(Clone)]
pub struct BridgeHandle {
    inner: Arc<Mutex<Box<dyn Bridge>>>,
}

impl BridgeHandle {
    /// Wraps the bridge selected by `detect`.
    pub fn new(bridge: Box<dyn Bridge>) -> Self {
        BridgeHandle {
            inner: Arc::new(Mutex::new(bridge)),
        }
    }

    /// Executes a function against the bridge.
    ///
    /// Bridge trigger handlers run with the lock released (the host
    /// fires them from its own dispatch), so handlers are free to call
    /// back through this handle.
    pub fn with<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut dyn Bridge) -> R,
    {
        let mut bridge = self.inner.lock().expect("bridge mutex poisoned");
        f(bridge.as_mut())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use minishop_bridge::{LiveBridge, RecordingHost, SimulatedBridge};

    #[test]
    fn test_clones_share_one_bridge() {
        let host = RecordingHost::new();
        let handle = BridgeHandle::new(Box::new(LiveBridge::new(Box::new(host.clone()))));
        let other = handle.clone();

        handle.with(|b| b.signal_ready());
        other.with(|b| b.expand());

        assert_eq!(host.ops(), vec!["ready", "expand"]);
    }

    #[test]
    fn test_simulated_variant_behind_handle() {
        let handle = BridgeHandle::new(Box::new(SimulatedBridge::new()));
        assert!(!handle.with(|b| b.is_live()));
    }
}
