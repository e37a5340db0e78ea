//! # minishop-bridge: Host Bridge Adapter
//!
//! Everything that touches the embedding host lives here: the raw host
//! contract, the two bridge variants, the outbound checkout payload,
//! the captured host context, and the subscription primitive the rest
//! of the system uses instead of ambient callbacks.
//!
//! ## Module Organization
//! ```text
//! minishop_bridge/
//! ├── lib.rs       ◄─── You are here (exports)
//! ├── adapter.rs   ◄─── Bridge trait + variant selection (detect)
//! ├── host.rs      ◄─── HostApi contract + recording double
//! ├── live.rs      ◄─── Live variant (pass-through to the host)
//! ├── sim.rs       ◄─── Simulated variant (log-only no-ops)
//! ├── payload.rs   ◄─── CheckoutPayload wire format
//! ├── context.rs   ◄─── HostContext, ColorScheme, ThemeParams
//! ├── signal.rs    ◄─── Signal<T> synchronous subscription
//! └── error.rs     ◄─── BridgeError (transport / serialization)
//! ```
//!
//! ## Failure Philosophy
//! The outbound channel is fire-and-forget. Transport and serialization
//! failures are typed, logged, surfaced as a user notice by the shell,
//! and never retried: the host gives no delivery confirmation to
//! retry against.

pub mod adapter;
pub mod context;
pub mod error;
pub mod host;
pub mod live;
pub mod payload;
pub mod signal;
pub mod sim;

// Re-exports for convenience
pub use adapter::{detect, Bridge};
pub use context::{ColorScheme, HostContext, HostUser, ThemeParams};
pub use error::{BridgeError, BridgeResult};
pub use host::{ActionHandler, HostApi, RecordingHost};
pub use live::LiveBridge;
pub use payload::{CheckoutPayload, CHECKOUT_ACTION};
pub use signal::Signal;
pub use sim::SimulatedBridge;
