//! # Cart Module
//!
//! The in-memory shopping cart: an ordered sequence of lines, one per
//! product, with a derived total.
//!
//! ## Cart Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                      Cart Operations                                │
//! │                                                                     │
//! │  User Action               Operation            State Change        │
//! │  ───────────               ─────────            ────────────        │
//! │                                                                     │
//! │  Tap "Add to cart" ──────► add_line() ────────► qty += 1 / push     │
//! │                                                                     │
//! │  Tap "Remove" ───────────► decrement() ───────► qty -= 1 / drop     │
//! │                                                                     │
//! │  Checkout ───────────────► snapshot() ────────► (read only copy)    │
//! │                                                                     │
//! │  The total is recomputed on demand, never cached, so it is always   │
//! │  consistent with the current lines.                                 │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::catalog::{Product, ProductId};
use crate::money::Money;

// =============================================================================
// Cart Line
// =============================================================================

/// A line in the shopping cart.
///
/// ## Design Notes
/// - Product data is frozen into the line at add time (snapshot
///   pattern). The catalog is immutable for the session, so the frozen
///   fields always agree with it; freezing keeps the checkout payload
///   self-contained, since the host receives the full product fields
///   spread into each line.
/// - Serialized field names are the wire format the host expects.
///   Lines are outbound-only, so there is no `Deserialize`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CartLine {
    /// Product this line refers to.
    #[serde(rename = "id")]
    pub product_id: ProductId,

    /// Product name at time of adding (frozen).
    pub name: String,

    /// Unit price at time of adding (frozen).
    pub price: Money,

    /// Image reference at time of adding (frozen).
    #[serde(rename = "image")]
    pub image_ref: String,

    /// Description at time of adding (frozen).
    pub description: String,

    /// Quantity in the cart. Invariant: >= 1 while the line exists.
    pub quantity: u32,

    /// When this product was first added to the cart.
    #[serde(skip)]
    pub added_at: DateTime<Utc>,
}

impl CartLine {
    /// Creates a cart line from a product with quantity 1.
    fn from_product(product: &Product) -> Self {
        CartLine {
            product_id: product.id,
            name: product.name.clone(),
            price: product.price,
            image_ref: product.image_ref.clone(),
            description: product.description.clone(),
            quantity: 1,
            added_at: Utc::now(),
        }
    }

    /// Line total (unit price × quantity).
    pub fn line_total(&self) -> Money {
        self.price.multiply_quantity(self.quantity)
    }
}

// =============================================================================
// Cart
// =============================================================================

/// The shopping cart.
///
/// ## Invariants
/// - At most one line per product id
/// - Every line has quantity >= 1; reaching 0 removes the line
/// - Line order is the order in which products were first added
///
/// Created empty at startup, lives for the page session, mutated only
/// through these operations.
#[derive(Debug, Clone, Default)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    /// Creates a new empty cart.
    pub fn new() -> Self {
        Cart { lines: Vec::new() }
    }

    /// Adds one unit of a product to the cart.
    ///
    /// ## Behavior
    /// - Product already in cart: its quantity increases by 1
    /// - Product not in cart: a new line with quantity 1 is appended
    ///
    /// The caller resolves the product against the catalog first
    /// ([`crate::catalog::Catalog::resolve`]); by the time this runs the
    /// product is known to exist, so the operation cannot fail.
    ///
    /// ## Returns
    /// The updated line.
    pub fn add_line(&mut self, product: &Product) -> &CartLine {
        if let Some(idx) = self.lines.iter().position(|l| l.product_id == product.id) {
            self.lines[idx].quantity += 1;
            &self.lines[idx]
        } else {
            self.lines.push(CartLine::from_product(product));
            self.lines.last().expect("line was just pushed")
        }
    }

    /// Removes one unit of a product from the cart.
    ///
    /// ## Behavior
    /// - Quantity reaches 0: the line is removed, not retained
    /// - Product not in cart: idempotent no-op
    ///
    /// ## Returns
    /// `true` when the cart changed.
    pub fn decrement(&mut self, product_id: ProductId) -> bool {
        let Some(idx) = self.lines.iter().position(|l| l.product_id == product_id) else {
            return false;
        };

        if self.lines[idx].quantity > 1 {
            self.lines[idx].quantity -= 1;
        } else {
            self.lines.remove(idx);
        }
        true
    }

    /// The cart total: Σ quantity × price over current lines.
    ///
    /// Pure computation over the lines, recomputed on demand. Returns
    /// zero for an empty cart.
    pub fn total(&self) -> Money {
        self.lines.iter().map(CartLine::line_total).sum()
    }

    /// Returns an immutable point-in-time copy of the cart.
    ///
    /// Used when handing data to the host bridge: later mutation of the
    /// live cart cannot retroactively change data already sent.
    pub fn snapshot(&self) -> CartSnapshot {
        CartSnapshot {
            lines: self.lines.clone(),
            total: self.total(),
        }
    }

    /// Lines in insertion order.
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Number of distinct product lines.
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Total quantity across all lines.
    pub fn total_quantity(&self) -> u32 {
        self.lines.iter().map(|l| l.quantity).sum()
    }

    /// Checks if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Removes every line. Explicit user action only.
    pub fn clear(&mut self) {
        self.lines.clear();
    }
}

// =============================================================================
// Cart Snapshot
// =============================================================================

/// An immutable point-in-time copy of cart contents plus total.
///
/// Decoupled from subsequent live-cart mutation: the checkout payload is
/// built from a snapshot, so `add_line` calls made after a send never
/// alter what was already sent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CartSnapshot {
    /// Frozen lines in insertion order.
    pub lines: Vec<CartLine>,

    /// Total at the moment the snapshot was taken.
    pub total: Money,
}

impl CartSnapshot {
    /// Snapshot of an empty cart.
    pub fn empty() -> Self {
        CartSnapshot {
            lines: Vec::new(),
            total: Money::zero(),
        }
    }

    /// Whether the snapshot holds no lines.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
