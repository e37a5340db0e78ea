//! # Live Bridge Variant
//!
//! Backed by an actual host-provided object. Every operation is a thin
//! pass-through that additionally records transport failures.

use tracing::debug;

use crate::adapter::Bridge;
use crate::context::HostContext;
use crate::error::{BridgeError, BridgeResult};
use crate::host::{ActionHandler, HostApi};
use crate::payload::CheckoutPayload;

/// Bridge variant wrapping the real host object.
pub struct LiveBridge {
    host: Box<dyn HostApi>,
}

impl LiveBridge {
    /// Wraps a host object.
    pub fn new(host: Box<dyn HostApi>) -> Self {
        LiveBridge { host }
    }
}

impl Bridge for LiveBridge {
    fn signal_ready(&mut self) {
        debug!("bridge: signaling ready");
        self.host.ready();
    }

    fn expand(&mut self) {
        debug!("bridge: expanding viewport");
        self.host.expand();
    }

    fn close(&mut self) {
        debug!("bridge: closing app");
        self.host.close();
    }

    fn set_primary_action_label(&mut self, label: &str) {
        debug!(label, "bridge: primary action label");
        self.host.set_main_button_text(label);
    }

    fn show_primary_action(&mut self) {
        self.host.show_main_button();
    }

    fn hide_primary_action(&mut self) {
        self.host.hide_main_button();
    }

    fn on_primary_action(&mut self, handler: ActionHandler) {
        debug!("bridge: primary action handler registered");
        self.host.on_main_button_click(handler);
    }

    fn on_back(&mut self, handler: ActionHandler) {
        debug!("bridge: back handler registered");
        self.host.on_back_button_click(handler);
    }

    fn send_payload(&mut self, payload: &CheckoutPayload) -> BridgeResult<()> {
        let encoded = payload.encode()?;
        self.host
            .send_data(&encoded)
            .map_err(BridgeError::Transport)?;
        debug!(bytes = encoded.len(), "bridge: payload forwarded to host");
        Ok(())
    }

    fn read_theme_context(&self) -> HostContext {
        HostContext {
            user: self.host.user(),
            color_scheme: self.host.color_scheme(),
            theme_params: self.host.theme_params(),
            platform: self.host.platform(),
            version: self.host.version(),
        }
    }

    fn is_live(&self) -> bool {
        true
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::{ColorScheme, HostUser, ThemeParams};
    use crate::host::RecordingHost;
    use minishop_core::{Cart, Catalog, ProductId};

    fn checkout_payload() -> CheckoutPayload {
        let catalog = Catalog::demo();
        let mut cart = Cart::new();
        cart.add_line(catalog.resolve(ProductId::new(3)).unwrap());
        CheckoutPayload::checkout(cart.snapshot(), None)
    }

    #[test]
    fn test_lifecycle_pass_through() {
        let host = RecordingHost::new();
        let mut bridge = LiveBridge::new(Box::new(host.clone()));

        bridge.signal_ready();
        bridge.expand();
        bridge.set_primary_action_label("Proceed to checkout");
        bridge.show_primary_action();

        assert_eq!(
            host.ops(),
            vec!["ready", "expand", "set_main_button_text", "show_main_button"]
        );
        assert_eq!(host.main_button_text(), "Proceed to checkout");
        assert!(host.main_button_visible());
    }

    #[test]
    fn test_send_payload_reaches_host() {
        let host = RecordingHost::new();
        let mut bridge = LiveBridge::new(Box::new(host.clone()));

        bridge.send_payload(&checkout_payload()).unwrap();

        let sent = host.sent();
        assert_eq!(sent.len(), 1);
        let json: serde_json::Value = serde_json::from_str(&sent[0]).unwrap();
        assert_eq!(json["action"], "checkout");
        assert_eq!(json["total"], 8_500);
    }

    #[test]
    fn test_transport_rejection_becomes_typed_error() {
        let host = RecordingHost::new();
        host.fail_sends("WebAppDataInvalid");
        let mut bridge = LiveBridge::new(Box::new(host));

        let err = bridge.send_payload(&checkout_payload()).unwrap_err();
        assert!(matches!(err, BridgeError::Transport(reason) if reason == "WebAppDataInvalid"));
    }

    #[test]
    fn test_theme_context_read_from_host() {
        let theme = ThemeParams::empty().with("bg_color", "#18222d");
        let user = HostUser {
            id: 1,
            first_name: "Ira".into(),
            username: None,
        };
        let host =
            RecordingHost::with_environment(ColorScheme::Dark, theme.clone(), Some(user.clone()));
        let bridge = LiveBridge::new(Box::new(host));

        let ctx = bridge.read_theme_context();
        assert_eq!(ctx.color_scheme, ColorScheme::Dark);
        assert_eq!(ctx.theme_params, theme);
        assert_eq!(ctx.user, Some(user));
        assert!(bridge.is_live());
    }
}
