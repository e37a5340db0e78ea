//! # Host API Contract
//!
//! The object the embedding host supplies to the mini app. This is the
//! external collaborator the live bridge wraps; it is not implemented
//! here beyond a recording double.
//!
//! ## Contract
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │  host object                                                        │
//! │  ├── ready() / expand() / close()      lifecycle                    │
//! │  ├── send_data(string) -> result       outbound data channel        │
//! │  ├── main button: set_text/show/hide/on_click                       │
//! │  ├── back button:          show/hide/on_click                       │
//! │  └── color_scheme, theme_params, platform, version, user            │
//! │                                                                     │
//! │  Absence of this object is a valid, expected condition: the         │
//! │  simulated bridge takes over (see sim.rs).                          │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::{Arc, Mutex};

use crate::context::{ColorScheme, HostUser, ThemeParams};

/// Callback the host invokes when a chrome control is triggered.
pub type ActionHandler = Box<dyn FnMut() + Send>;

// =============================================================================
// HostApi Trait
// =============================================================================

/// The raw host-provided object.
///
/// Methods mirror the host chrome one-to-one; the [`crate::Bridge`]
/// trait layered on top is what the rest of the system talks to.
pub trait HostApi: Send {
    /// Tells the host the mini app finished loading.
    fn ready(&mut self);

    /// Asks the host to expand the mini app viewport.
    fn expand(&mut self);

    /// Asks the host to close the mini app.
    fn close(&mut self);

    /// Forwards an encoded payload to the host.
    ///
    /// ## Errors
    /// The host reports transport rejection as an opaque reason string;
    /// the live bridge wraps it into a typed error.
    fn send_data(&mut self, data: &str) -> Result<(), String>;

    /// Sets the label of the host's primary action control.
    fn set_main_button_text(&mut self, text: &str);

    /// Shows the primary action control.
    fn show_main_button(&mut self);

    /// Hides the primary action control.
    fn hide_main_button(&mut self);

    /// Registers the primary action click handler.
    fn on_main_button_click(&mut self, handler: ActionHandler);

    /// Shows the back control.
    fn show_back_button(&mut self);

    /// Hides the back control.
    fn hide_back_button(&mut self);

    /// Registers the back control click handler.
    fn on_back_button_click(&mut self, handler: ActionHandler);

    /// Active color scheme.
    fn color_scheme(&self) -> ColorScheme;

    /// Theme palette overrides.
    fn theme_params(&self) -> ThemeParams;

    /// Host platform string.
    fn platform(&self) -> String;

    /// Host API version string.
    fn version(&self) -> String;

    /// Identity of the authenticated user, when the host supplies one.
    fn user(&self) -> Option<HostUser>;
}

// =============================================================================
// Recording Host Double
// =============================================================================

#[derive(Default)]
struct RecordingInner {
    ops: Vec<String>,
    sent: Vec<String>,
    main_button_text: String,
    main_button_visible: bool,
    back_button_visible: bool,
    main_click: Option<ActionHandler>,
    back_click: Option<ActionHandler>,
    fail_sends_with: Option<String>,
    color_scheme: ColorScheme,
    theme_params: ThemeParams,
    user: Option<HostUser>,
}

/// A host double that records every call and can fire its registered
/// handlers, standing in for the real host chrome in tests.
///
/// Clones share state: the bridge owns one clone, the test keeps
/// another to fire controls and inspect what the "host" saw.
#[derive(Clone, Default)]
pub struct RecordingHost {
    inner: Arc<Mutex<RecordingInner>>,
}

impl RecordingHost {
    pub fn new() -> Self {
        RecordingHost::default()
    }

    /// Host double with a preconfigured environment.
    pub fn with_environment(
        color_scheme: ColorScheme,
        theme_params: ThemeParams,
        user: Option<HostUser>,
    ) -> Self {
        let host = RecordingHost::new();
        {
            let mut inner = host.inner.lock().expect("recording host poisoned");
            inner.color_scheme = color_scheme;
            inner.theme_params = theme_params;
            inner.user = user;
        }
        host
    }

    /// Makes every subsequent `send_data` fail with the given reason.
    pub fn fail_sends(&self, reason: &str) {
        self.lock().fail_sends_with = Some(reason.to_string());
    }

    /// Operations seen so far, in call order.
    pub fn ops(&self) -> Vec<String> {
        self.lock().ops.clone()
    }

    /// Payloads the host accepted, in send order.
    pub fn sent(&self) -> Vec<String> {
        self.lock().sent.clone()
    }

    /// Current primary action label.
    pub fn main_button_text(&self) -> String {
        self.lock().main_button_text.clone()
    }

    /// Whether the primary action control is visible.
    pub fn main_button_visible(&self) -> bool {
        self.lock().main_button_visible
    }

    /// Fires the registered primary action handler, as the host chrome
    /// would on a click.
    pub fn click_main_button(&self) {
        // Take the handler out before running it: the handler calls
        // back into the bridge, which talks to this same host.
        let handler = self.lock().main_click.take();
        if let Some(mut handler) = handler {
            handler();
            self.lock().main_click.get_or_insert(handler);
        }
    }

    /// Fires the registered back handler.
    pub fn click_back_button(&self) {
        let handler = self.lock().back_click.take();
        if let Some(mut handler) = handler {
            handler();
            self.lock().back_click.get_or_insert(handler);
        }
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, RecordingInner> {
        self.inner.lock().expect("recording host poisoned")
    }

    fn record(&self, op: &str) {
        self.lock().ops.push(op.to_string());
    }
}

impl HostApi for RecordingHost {
    fn ready(&mut self) {
        self.record("ready");
    }

    fn expand(&mut self) {
        self.record("expand");
    }

    fn close(&mut self) {
        self.record("close");
    }

    fn send_data(&mut self, data: &str) -> Result<(), String> {
        self.record("send_data");
        let mut inner = self.lock();
        if let Some(reason) = inner.fail_sends_with.clone() {
            return Err(reason);
        }
        inner.sent.push(data.to_string());
        Ok(())
    }

    fn set_main_button_text(&mut self, text: &str) {
        self.record("set_main_button_text");
        self.lock().main_button_text = text.to_string();
    }

    fn show_main_button(&mut self) {
        self.record("show_main_button");
        self.lock().main_button_visible = true;
    }

    fn hide_main_button(&mut self) {
        self.record("hide_main_button");
        self.lock().main_button_visible = false;
    }

    fn on_main_button_click(&mut self, handler: ActionHandler) {
        self.record("on_main_button_click");
        self.lock().main_click = Some(handler);
    }

    fn show_back_button(&mut self) {
        self.record("show_back_button");
        self.lock().back_button_visible = true;
    }

    fn hide_back_button(&mut self) {
        self.record("hide_back_button");
        self.lock().back_button_visible = false;
    }

    fn on_back_button_click(&mut self, handler: ActionHandler) {
        self.record("on_back_button_click");
        self.lock().back_click = Some(handler);
    }

    fn color_scheme(&self) -> ColorScheme {
        self.lock().color_scheme
    }

    fn theme_params(&self) -> ThemeParams {
        self.lock().theme_params.clone()
    }

    fn platform(&self) -> String {
        "recording".to_string()
    }

    fn version(&self) -> String {
        "7.0".to_string()
    }

    fn user(&self) -> Option<HostUser> {
        self.lock().user.clone()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn test_records_calls_in_order() {
        let mut host = RecordingHost::new();
        host.ready();
        host.expand();
        host.set_main_button_text("Checkout");

        assert_eq!(host.ops(), vec!["ready", "expand", "set_main_button_text"]);
        assert_eq!(host.main_button_text(), "Checkout");
    }

    #[test]
    fn test_click_runs_registered_handler_repeatedly() {
        let mut host = RecordingHost::new();
        let hits = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&hits);

        host.on_main_button_click(Box::new(move || {
            counter.fetch_add(1, Ordering::SeqCst);
        }));

        host.click_main_button();
        host.click_main_button();
        assert_eq!(hits.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_click_without_handler_is_noop() {
        let host = RecordingHost::new();
        host.click_main_button();
        host.click_back_button();
    }

    #[test]
    fn test_send_failure_injection() {
        let mut host = RecordingHost::new();
        assert!(host.send_data("ok").is_ok());

        host.fail_sends("WebAppDataInvalid");
        assert_eq!(host.send_data("nope"), Err("WebAppDataInvalid".into()));
        assert_eq!(host.sent(), vec!["ok"]);
    }

    #[test]
    fn test_handler_may_call_back_into_host() {
        let mut host = RecordingHost::new();
        let mut remote = host.clone();

        host.on_main_button_click(Box::new(move || {
            let _ = remote.send_data("{\"action\":\"checkout\"}");
        }));

        host.click_main_button();
        assert_eq!(host.sent().len(), 1);
    }
}
