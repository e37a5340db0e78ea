//! # Checkout Handlers
//!
//! What happens when the host chrome controls fire.
//!
//! ## Primary Action Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │  primary action triggered                                           │
//! │         │                                                           │
//! │         ▼                                                           │
//! │  cart empty? ── yes ──► one "cart is empty" notice, NO send         │
//! │         │no                                                         │
//! │         ▼                                                           │
//! │  snapshot cart ──► build {action, cart, total, user}                │
//! │         │                                                           │
//! │         ▼                                                           │
//! │  send_payload ── err ──► log + error notice (no retry, no re-raise) │
//! │         │ok                                                         │
//! │         ▼                                                           │
//! │  done (fire-and-forget, no acknowledgement)                         │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```

use tracing::{debug, error, info};

use minishop_bridge::{CheckoutPayload, HostUser};

use crate::notify::Notifier;
use crate::state::{BridgeHandle, StoreHandle};

/// Notice shown when checkout is triggered on an empty cart.
pub const EMPTY_CART_MESSAGE: &str = "Cart is empty";

/// Notice shown when the payload could not be delivered.
pub const SEND_FAILED_MESSAGE: &str = "Failed to send checkout data";

/// Handles the primary action (checkout) trigger.
///
/// The payload is built from a snapshot taken at this instant, so cart
/// mutations after the send never alter what was handed to the host.
pub fn handle_primary_action(
    store: &StoreHandle,
    bridge: &BridgeHandle,
    notifier: &Notifier,
    user: Option<HostUser>,
) {
    let snapshot = store.with(|s| s.snapshot());
    if snapshot.is_empty() {
        debug!("primary action with empty cart");
        notifier.error(EMPTY_CART_MESSAGE);
        return;
    }

    let total = snapshot.total;
    let payload = CheckoutPayload::checkout(snapshot, user);

    match bridge.with(|b| b.send_payload(&payload)) {
        Ok(()) => info!(%total, "checkout payload sent"),
        Err(err) => {
            // Fire-and-forget channel: log, surface, never re-raise
            error!(%err, "checkout payload send failed");
            notifier.error(SEND_FAILED_MESSAGE);
        }
    }
}

/// Handles the back trigger.
///
/// Live variant: ask the host to close the app. Simulated variant:
/// there is no host chrome to pop, so "navigate back" is logged only.
pub fn handle_back(bridge: &BridgeHandle) {
    bridge.with(|b| {
        if b.is_live() {
            b.close();
        } else {
            info!("navigate back (standalone)");
        }
    });
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notify::NoticeKind;
    use crate::state::ShopStore;
    use minishop_bridge::{LiveBridge, RecordingHost};
    use minishop_core::{Catalog, ProductId};

    fn fixture(host: &RecordingHost) -> (StoreHandle, BridgeHandle, Notifier) {
        let store = StoreHandle::new(ShopStore::new(Catalog::demo()));
        let bridge = BridgeHandle::new(Box::new(LiveBridge::new(Box::new(host.clone()))));
        (store, bridge, Notifier::new())
    }

    #[test]
    fn test_empty_cart_notifies_and_does_not_send() {
        let host = RecordingHost::new();
        let (store, bridge, notifier) = fixture(&host);

        handle_primary_action(&store, &bridge, &notifier, None);

        let active = notifier.active();
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].message, EMPTY_CART_MESSAGE);
        assert_eq!(active[0].kind, NoticeKind::Error);
        assert!(host.sent().is_empty());
    }

    #[test]
    fn test_non_empty_cart_sends_exactly_once() {
        let host = RecordingHost::new();
        let (store, bridge, notifier) = fixture(&host);

        store.with_mut(|s| {
            s.add_to_cart(ProductId::new(3)).unwrap();
            s.add_to_cart(ProductId::new(6)).unwrap();
            s.add_to_cart(ProductId::new(6)).unwrap();
        });

        handle_primary_action(&store, &bridge, &notifier, None);

        let sent = host.sent();
        assert_eq!(sent.len(), 1);
        let json: serde_json::Value = serde_json::from_str(&sent[0]).unwrap();
        assert_eq!(json["total"], 13_500);
        assert!(notifier.active().is_empty());
    }

    #[test]
    fn test_sent_payload_unaffected_by_later_mutation() {
        let host = RecordingHost::new();
        let (store, bridge, notifier) = fixture(&host);

        store
            .with_mut(|s| s.add_to_cart(ProductId::new(3)))
            .unwrap();
        handle_primary_action(&store, &bridge, &notifier, None);

        // Mutate after the send; the captured payload must not move
        store
            .with_mut(|s| s.add_to_cart(ProductId::new(3)))
            .unwrap();
        store
            .with_mut(|s| s.add_to_cart(ProductId::new(1)))
            .unwrap();

        let json: serde_json::Value = serde_json::from_str(&host.sent()[0]).unwrap();
        assert_eq!(json["total"], 8_500);
        assert_eq!(json["cart"].as_array().unwrap().len(), 1);
        assert_eq!(json["cart"][0]["quantity"], 1);
    }

    #[test]
    fn test_transport_failure_surfaces_notice_without_panic() {
        let host = RecordingHost::new();
        host.fail_sends("WebAppDataInvalid");
        let (store, bridge, notifier) = fixture(&host);

        store
            .with_mut(|s| s.add_to_cart(ProductId::new(1)))
            .unwrap();
        handle_primary_action(&store, &bridge, &notifier, None);

        let active = notifier.active();
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].message, SEND_FAILED_MESSAGE);
        assert!(host.sent().is_empty());
    }

    #[test]
    fn test_back_closes_live_host() {
        let host = RecordingHost::new();
        let (_store, bridge, _notifier) = fixture(&host);

        handle_back(&bridge);
        assert_eq!(host.ops(), vec!["close"]);
    }

    #[test]
    fn test_back_on_simulated_bridge_is_noop() {
        use minishop_bridge::SimulatedBridge;
        let bridge = BridgeHandle::new(Box::new(SimulatedBridge::new()));
        handle_back(&bridge); // logs "navigate back", nothing to assert on
    }
}
