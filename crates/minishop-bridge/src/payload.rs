//! # Checkout Payload
//!
//! The structure pushed through the bridge's outbound channel when the
//! user triggers the primary action.
//!
//! ## Wire Format
//! UTF-8 JSON:
//! ```json
//! {
//!   "action": "checkout",
//!   "cart": [{ "id": 3, "name": "...", "price": 8500,
//!              "image": "...", "description": "...", "quantity": 2 }],
//!   "total": 17000,
//!   "user": { "id": 99, "first_name": "..." }
//! }
//! ```
//! Cart entries carry the full frozen product fields plus quantity; the
//! receiving bot parses them without a catalog of its own.

use serde::Serialize;

use minishop_core::{CartLine, CartSnapshot, Money};

use crate::context::HostUser;
use crate::error::BridgeResult;

/// Action discriminator for checkout sends.
pub const CHECKOUT_ACTION: &str = "checkout";

/// The serialized cart-plus-metadata structure sent to the host.
///
/// Built from a [`CartSnapshot`], never from the live cart: mutation
/// after the send cannot alter a payload already handed over.
#[derive(Debug, Clone, Serialize)]
pub struct CheckoutPayload {
    /// Always [`CHECKOUT_ACTION`] for this storefront.
    pub action: String,

    /// Frozen cart lines in insertion order.
    pub cart: Vec<CartLine>,

    /// Cart total at the moment the snapshot was taken.
    pub total: Money,

    /// Opaque user identity echoed back to the host.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<HostUser>,
}

impl CheckoutPayload {
    /// Builds a checkout payload from a cart snapshot.
    pub fn checkout(snapshot: CartSnapshot, user: Option<HostUser>) -> Self {
        CheckoutPayload {
            action: CHECKOUT_ACTION.to_string(),
            total: snapshot.total,
            cart: snapshot.lines,
            user,
        }
    }

    /// Encodes the payload to its UTF-8 text form.
    ///
    /// ## Errors
    /// [`crate::BridgeError::Serialization`] when encoding fails. Caught
    /// at the send site and surfaced as a notice, never re-raised.
    pub fn encode(&self) -> BridgeResult<String> {
        Ok(serde_json::to_string(self)?)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
