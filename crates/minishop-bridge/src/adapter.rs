//! # Bridge Adapter
//!
//! The polymorphic interface over "the embedding host", and the
//! startup-time selection between its two variants.
//!
//! ## Initialization Protocol
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │  startup ──► detect(host?)                                          │
//! │                   │                                                 │
//! │        ┌──────────┴───────────┐                                     │
//! │        ▼                      ▼                                     │
//! │  Some(host)               None                                      │
//! │  LiveBridge               SimulatedBridge                           │
//! │  signal_ready()           (log-only no-ops,                         │
//! │  expand()                  standalone context,                      │
//! │  read_theme_context()      dev-mode flag in the shell)              │
//! │  register handlers                                                  │
//! │                                                                     │
//! │  Selected ONCE; never swapped afterwards.                           │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```

use tracing::{info, warn};

use crate::context::HostContext;
use crate::error::BridgeResult;
use crate::host::{ActionHandler, HostApi};
use crate::live::LiveBridge;
use crate::payload::CheckoutPayload;
use crate::sim::SimulatedBridge;

// =============================================================================
// Bridge Trait
// =============================================================================

/// Capability set of the host bridge adapter.
///
/// The rest of the system programs against this trait and runs
/// unmodified inside or outside the host.
pub trait Bridge: Send {
    /// Tells the host the app finished loading.
    fn signal_ready(&mut self);

    /// Asks the host to expand the viewport.
    fn expand(&mut self);

    /// Asks the host to close the app.
    fn close(&mut self);

    /// Sets the primary action label.
    fn set_primary_action_label(&mut self, label: &str);

    /// Shows the primary action control.
    fn show_primary_action(&mut self);

    /// Hides the primary action control.
    fn hide_primary_action(&mut self);

    /// Registers the primary action trigger handler.
    fn on_primary_action(&mut self, handler: ActionHandler);

    /// Registers the back trigger handler.
    fn on_back(&mut self, handler: ActionHandler);

    /// Serializes and forwards a payload through the outbound channel.
    ///
    /// Fire-and-forget: no acknowledgement, no retry. Errors are for
    /// the caller to log and surface, not to re-raise.
    fn send_payload(&mut self, payload: &CheckoutPayload) -> BridgeResult<()>;

    /// The environment captured from the host (or standalone defaults).
    fn read_theme_context(&self) -> HostContext;

    /// Whether a real host backs this bridge. `false` marks the
    /// development-mode state (a cosmetic flag only).
    fn is_live(&self) -> bool;
}

// =============================================================================
// Variant Selection
// =============================================================================

/// Probes for host presence and selects the bridge variant, once, at
/// startup.
///
/// Absence of a host is a valid, expected condition, not an error: the
/// simulated variant lets the rest of the system run unmodified.
pub fn detect(host: Option<Box<dyn HostApi>>) -> Box<dyn Bridge> {
    match host {
        Some(host) => {
            info!("host detected, using live bridge");
            Box::new(LiveBridge::new(host))
        }
        None => {
            warn!("host not available, using simulated bridge (development mode)");
            Box::new(SimulatedBridge::new())
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::RecordingHost;

    #[test]
    fn test_detect_selects_live_variant() {
        let host = RecordingHost::new();
        let bridge = detect(Some(Box::new(host)));
        assert!(bridge.is_live());
    }

    #[test]
    fn test_detect_selects_simulated_variant() {
        let bridge = detect(None);
        assert!(!bridge.is_live());
        assert_eq!(bridge.read_theme_context(), HostContext::standalone());
    }
}
