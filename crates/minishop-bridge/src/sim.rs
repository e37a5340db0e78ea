//! # Simulated Bridge Variant
//!
//! Used when no host is detected. Every mutating operation is a no-op
//! that only logs intent, and the theme context is a fixed standalone
//! default: the rest of the system runs unmodified outside the host.
//!
//! Trigger signals stay reachable so tests and the standalone demo can
//! "press" the host chrome controls that do not exist.

use tracing::{debug, info};

use crate::adapter::Bridge;
use crate::context::HostContext;
use crate::error::BridgeResult;
use crate::host::ActionHandler;
use crate::payload::CheckoutPayload;
use crate::signal::Signal;

/// Bridge variant for running without a host.
pub struct SimulatedBridge {
    primary: Signal<()>,
    back: Signal<()>,
}

impl SimulatedBridge {
    /// Creates the simulated variant.
    pub fn new() -> Self {
        SimulatedBridge {
            primary: Signal::new(),
            back: Signal::new(),
        }
    }

    /// Trigger source for the primary action control.
    ///
    /// Grab a clone before boxing the bridge; emitting on it stands in
    /// for the host firing a main-button click.
    pub fn primary_signal(&self) -> Signal<()> {
        self.primary.clone()
    }

    /// Trigger source for the back control.
    pub fn back_signal(&self) -> Signal<()> {
        self.back.clone()
    }
}

impl Default for SimulatedBridge {
    fn default() -> Self {
        SimulatedBridge::new()
    }
}

impl Bridge for SimulatedBridge {
    fn signal_ready(&mut self) {
        debug!("simulated host: ready");
    }

    fn expand(&mut self) {
        debug!("simulated host: expand");
    }

    fn close(&mut self) {
        debug!("simulated host: close");
    }

    fn set_primary_action_label(&mut self, label: &str) {
        debug!(label, "simulated host: primary action label");
    }

    fn show_primary_action(&mut self) {
        debug!("simulated host: primary action shown");
    }

    fn hide_primary_action(&mut self) {
        debug!("simulated host: primary action hidden");
    }

    fn on_primary_action(&mut self, mut handler: ActionHandler) {
        debug!("simulated host: primary action handler registered");
        self.primary.subscribe(move |_| handler());
    }

    fn on_back(&mut self, mut handler: ActionHandler) {
        debug!("simulated host: back handler registered");
        self.back.subscribe(move |_| handler());
    }

    fn send_payload(&mut self, payload: &CheckoutPayload) -> BridgeResult<()> {
        // No transport exists; log the payload instead of sending it.
        let encoded = payload.encode()?;
        info!(payload = %encoded, "simulated host: payload send");
        Ok(())
    }

    fn read_theme_context(&self) -> HostContext {
        HostContext::standalone()
    }

    fn is_live(&self) -> bool {
        false
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::ColorScheme;
    use minishop_core::{Cart, Catalog, ProductId};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    #[test]
    fn test_mutating_operations_do_not_throw() {
        let mut bridge = SimulatedBridge::new();
        bridge.signal_ready();
        bridge.expand();
        bridge.set_primary_action_label("Proceed to checkout");
        bridge.show_primary_action();
        bridge.hide_primary_action();
        bridge.close();
    }

    #[test]
    fn test_standalone_theme_context() {
        let bridge = SimulatedBridge::new();
        let ctx = bridge.read_theme_context();

        assert_eq!(ctx.color_scheme, ColorScheme::Light);
        assert!(ctx.theme_params.is_empty());
        assert_eq!(ctx.platform, "standalone");
        assert!(!bridge.is_live());
    }

    #[test]
    fn test_send_payload_is_logged_ok() {
        let catalog = Catalog::demo();
        let mut cart = Cart::new();
        cart.add_line(catalog.resolve(ProductId::new(1)).unwrap());

        let mut bridge = SimulatedBridge::new();
        let payload = CheckoutPayload::checkout(cart.snapshot(), None);
        assert!(bridge.send_payload(&payload).is_ok());
    }

    #[test]
    fn test_trigger_signal_fires_registered_handler() {
        let mut bridge = SimulatedBridge::new();
        let trigger = bridge.primary_signal();
        let hits = Arc::new(AtomicUsize::new(0));

        let counter = Arc::clone(&hits);
        bridge.on_primary_action(Box::new(move || {
            counter.fetch_add(1, Ordering::SeqCst);
        }));

        trigger.emit(&());
        assert_eq!(hits.load(Ordering::SeqCst), 1);
    }
}
