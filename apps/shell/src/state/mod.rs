//! # State Handles
//!
//! Explicit owned instances passed by handle to the renderer, the
//! notification surface and the checkout handlers at construction
//! time; there is no ambient global lookup.
//!
//! ```text
//! state/
//! ├── mod.rs     ◄─── You are here (exports)
//! ├── store.rs   ◄─── ShopStore (catalog + cart + cart-changed signal)
//! └── bridge.rs  ◄─── BridgeHandle over the selected bridge variant
//! ```

pub mod bridge;
pub mod store;

pub use bridge::BridgeHandle;
pub use store::{CartChanged, ShopStore, StoreHandle};
