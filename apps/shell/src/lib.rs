//! # minishop shell
//!
//! Application wiring for the storefront mini app.
//!
//! ## Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                            ShopApp                                  │
//! │                                                                     │
//! │   startup protocol          cart-changed subscribers                │
//! │   ready → expand →          ├── view renderer  (re-project)         │
//! │   label → hide              └── bridge updater (label / show)       │
//! │                                                                     │
//! │   chrome handlers                                                   │
//! │   ├── primary action → checkout::handle_primary_action              │
//! │   └── back           → checkout::handle_back                        │
//! │                                                                     │
//! │        │                    │                    │                  │
//! │        ▼                    ▼                    ▼                  │
//! │   StoreHandle          BridgeHandle         Notifier / ViewHandle   │
//! │   (minishop-core)      (minishop-bridge)    (this crate)            │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! All wiring happens once in [`ShopApp::init`]; after that the app is
//! driven entirely by user actions and host chrome triggers.

use std::time::Duration;

use tracing::{error, info};

use minishop_bridge::{Bridge, HostContext, SimulatedBridge};
use minishop_core::{CartLine, CartSnapshot, Catalog, CoreResult, ProductId};

pub mod checkout;
pub mod notify;
pub mod render;
pub mod state;
pub mod timing;

use notify::{Notice, Notifier};
use render::{ShopView, ViewHandle};
use state::{BridgeHandle, CartChanged, ShopStore, StoreHandle};

/// Label on the host's primary action control.
pub const CHECKOUT_LABEL: &str = "Proceed to checkout";

/// Notice shown by the error hook for otherwise-unhandled failures.
pub const INTERNAL_ERROR_MESSAGE: &str = "An error occurred. Try again.";

// =============================================================================
// Shop App
// =============================================================================

/// The wired-up storefront.
pub struct ShopApp {
    store: StoreHandle,
    bridge: BridgeHandle,
    notifier: Notifier,
    view: ViewHandle,
    context: HostContext,
    dev_mode: bool,
}

impl ShopApp {
    /// Wires the storefront over the given bridge variant.
    ///
    /// ## Behavior
    /// Runs the startup protocol in order: capture the host context,
    /// signal readiness, expand the viewport, label the primary action
    /// and hide it (the cart starts empty), then register the chrome
    /// handlers and the cart-changed subscribers, and finally project
    /// the initial view.
    pub fn init(catalog: Catalog, bridge: Box<dyn Bridge>) -> Self {
        let bridge = BridgeHandle::new(bridge);
        let (context, dev_mode) = bridge.with(|b| (b.read_theme_context(), !b.is_live()));
        info!(
            platform = %context.platform,
            scheme = ?context.color_scheme,
            dev_mode,
            "initializing storefront"
        );

        let store = StoreHandle::new(ShopStore::new(catalog));
        let notifier = Notifier::new();

        bridge.with(|b| {
            b.signal_ready();
            b.expand();
            b.set_primary_action_label(CHECKOUT_LABEL);
            b.hide_primary_action();
        });

        let catalog = store.with(|s| s.catalog().clone());
        let view = ViewHandle::new(render::project(&catalog, &CartSnapshot::empty()));
        let changed = store.with(|s| s.cart_changed());

        // View renderer: full re-projection on every mutation. Works
        // from the event snapshot only; the store lock is held here.
        {
            let view = view.clone();
            changed.subscribe(move |ev: &CartChanged| {
                view.set(render::project(&catalog, &ev.snapshot));
            });
        }

        // Bridge updater: the primary action tracks the cart total and
        // is only offered when there is something to check out.
        {
            let bridge = bridge.clone();
            changed.subscribe(move |ev: &CartChanged| {
                bridge.with(|b| {
                    if ev.snapshot.is_empty() {
                        b.hide_primary_action();
                    } else {
                        b.set_primary_action_label(&format!(
                            "{} ({})",
                            CHECKOUT_LABEL, ev.snapshot.total
                        ));
                        b.show_primary_action();
                    }
                });
            });
        }

        // Chrome handlers fire from the host's own dispatch, outside
        // the bridge lock, so they may call back through the handles.
        {
            let store = store.clone();
            let bridge_ref = bridge.clone();
            let notifier = notifier.clone();
            let user = context.user.clone();
            bridge.with(|b| {
                b.on_primary_action(Box::new(move || {
                    checkout::handle_primary_action(&store, &bridge_ref, &notifier, user.clone());
                }));
            });
        }
        {
            let bridge_ref = bridge.clone();
            bridge.with(|b| b.on_back(Box::new(move || checkout::handle_back(&bridge_ref))));
        }

        ShopApp {
            store,
            bridge,
            notifier,
            view,
            context,
            dev_mode,
        }
    }

    /// Adds one unit of a product and confirms it with a notice.
    pub fn add_to_cart(&self, id: ProductId) -> CoreResult<CartLine> {
        let line = self.store.with_mut(|s| s.add_to_cart(id))?;
        self.notifier.info(format!("{} added to cart!", line.name));
        Ok(line)
    }

    /// Removes one unit of a product. Idempotent no-op when absent.
    pub fn remove_from_cart(&self, id: ProductId) -> bool {
        self.store.with_mut(|s| s.remove_from_cart(id))
    }

    /// The latest projected view.
    pub fn view(&self) -> ShopView {
        self.view.current()
    }

    /// Currently visible notices.
    pub fn notices(&self) -> Vec<Notice> {
        self.notifier.active()
    }

    /// The notification surface, for sharing with the error hook.
    pub fn notifier(&self) -> Notifier {
        self.notifier.clone()
    }

    /// Host environment captured at startup.
    pub fn context(&self) -> &HostContext {
        &self.context
    }

    /// Whether the app runs against the simulated bridge.
    pub fn dev_mode(&self) -> bool {
        self.dev_mode
    }
}

// =============================================================================
// Ambient Setup
// =============================================================================

/// Initializes the tracing subscriber.
///
/// `RUST_LOG` overrides the default filter.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("minishop=debug,info")),
        )
        .init();
}

/// Routes panics into the log and the notification surface.
///
/// Process-global; call once from the binary entry point.
pub fn install_error_hook(notifier: Notifier) {
    let previous = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        error!(%panic_info, "unhandled failure");
        notifier.error(INTERNAL_ERROR_MESSAGE);
        previous(panic_info);
    }));
}

// =============================================================================
// Standalone Demo
// =============================================================================

/// Runs the storefront against the simulated bridge.
///
/// There is no presentation surface to attach, so the demo walks one
/// shopping session and logs what the host would have seen.
pub fn run() -> std::io::Result<()> {
    init_tracing();

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_time()
        .build()?;

    runtime.block_on(async {
        let simulated = SimulatedBridge::new();
        let primary = simulated.primary_signal();

        let app = ShopApp::init(Catalog::demo(), Box::new(simulated));
        install_error_hook(app.notifier());

        for id in [1, 3, 3, 6] {
            // Demo ids come from the seeded catalog
            let line = app
                .add_to_cart(ProductId::new(id))
                .expect("demo catalog id");
            info!(product = %line.name, quantity = line.quantity, "demo: added");
        }

        // Stand-in for the host firing the primary action control
        primary.emit(&());

        let view = app.view();
        info!(
            lines = view.line_count,
            quantity = view.total_quantity,
            total = %view.total_label,
            "demo: session complete"
        );

        // Let the confirmation notices run out their timers
        tokio::time::sleep(Duration::from_millis(3_100)).await;
        info!(remaining = app.notices().len(), "demo: notices dismissed");
    });

    Ok(())
}

// =============================================================================
// Integration Tests
// =============================================================================
