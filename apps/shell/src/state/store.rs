//! # Shop Store
//!
//! Owns the catalog and the cart, and announces cart-affecting
//! mutations on an explicit signal.
//!
//! ## Data Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │  user action ──► add_to_cart / remove_from_cart                     │
//! │                        │                                            │
//! │                        ▼                                            │
//! │            validate against catalog (all-or-nothing)                │
//! │                        │                                            │
//! │                        ▼                                            │
//! │            mutate cart ──► emit CartChanged                         │
//! │                                  │                                  │
//! │                                  ├──► view renderer (re-project)    │
//! │                                  └──► bridge updater (label/show)   │
//! │                                                                     │
//! │  Handlers receive a snapshot by value and must NOT call back into   │
//! │  the store: the store lock is held for the duration of the emit.    │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::{Arc, Mutex};

use tracing::debug;

use minishop_bridge::Signal;
use minishop_core::{Cart, CartLine, CartSnapshot, Catalog, CoreResult, Money, ProductId};

// =============================================================================
// Cart Changed Event
// =============================================================================

/// Event emitted after every cart-affecting mutation.
///
/// Carries a point-in-time snapshot so subscribers never need to read
/// the live store.
#[derive(Debug, Clone)]
pub struct CartChanged {
    /// Cart contents at the moment of the mutation.
    pub snapshot: CartSnapshot,

    /// Distinct product lines.
    pub line_count: usize,

    /// Total quantity across all lines.
    pub total_quantity: u32,
}

// =============================================================================
// Shop Store
// =============================================================================

/// The cart & catalog state manager.
///
/// The catalog is immutable after load; the cart is mutated only
/// through the operations here, which validate before mutating.
pub struct ShopStore {
    catalog: Catalog,
    cart: Cart,
    changed: Signal<CartChanged>,
}

impl ShopStore {
    /// Creates a store with an empty cart over the given catalog.
    pub fn new(catalog: Catalog) -> Self {
        ShopStore {
            catalog,
            cart: Cart::new(),
            changed: Signal::new(),
        }
    }

    /// The catalog this store serves.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// The cart-changed signal source, for subscribing.
    pub fn cart_changed(&self) -> Signal<CartChanged> {
        self.changed.clone()
    }

    /// Adds one unit of a product to the cart.
    ///
    /// ## Behavior
    /// Resolves the id against the catalog first; an unknown id fails
    /// with `ProductNotFound` before any mutation happens, leaving the
    /// cart untouched. On success the updated line is returned and a
    /// [`CartChanged`] event is emitted.
    pub fn add_to_cart(&mut self, id: ProductId) -> CoreResult<CartLine> {
        let product = self.catalog.resolve(id)?;
        let line = self.cart.add_line(product).clone();
        debug!(product = %line.name, quantity = line.quantity, "added to cart");

        self.emit_changed();
        Ok(line)
    }

    /// Removes one unit of a product from the cart.
    ///
    /// Idempotent no-op (no event) when the product is not in the cart;
    /// the line disappears when its quantity reaches zero.
    pub fn remove_from_cart(&mut self, id: ProductId) -> bool {
        let changed = self.cart.decrement(id);
        if changed {
            debug!(product_id = %id, "removed from cart");
            self.emit_changed();
        }
        changed
    }

    /// Point-in-time copy of the cart.
    pub fn snapshot(&self) -> CartSnapshot {
        self.cart.snapshot()
    }

    /// Current cart total.
    pub fn total(&self) -> Money {
        self.cart.total()
    }

    /// Whether the cart holds no lines.
    pub fn is_empty(&self) -> bool {
        self.cart.is_empty()
    }

    fn emit_changed(&self) {
        let event = CartChanged {
            snapshot: self.cart.snapshot(),
            line_count: self.cart.line_count(),
            total_quantity: self.cart.total_quantity(),
        };
        self.changed.emit(&event);
    }
}

// =============================================================================
// Store Handle
// =============================================================================

/// Shared handle over the store.
///
/// ## Thread Safety
/// `Arc<Mutex>` even though mutation is single-threaded in practice:
/// the checkout handler and the UI entry points all hold the same
/// instance, and the mutex keeps mutations serialized without a global.
#[derive(Clone)]
pub struct StoreHandle {
    inner: Arc<Mutex<ShopStore>>,
}

impl StoreHandle {
    /// Wraps a store.
    pub fn new(store: ShopStore) -> Self {
        StoreHandle {
            inner: Arc::new(Mutex::new(store)),
        }
    }

    /// Executes a function with read access to the store.
    pub fn with<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&ShopStore) -> R,
    {
        let store = self.inner.lock().expect("store mutex poisoned");
        f(&store)
    }

    /// Executes a function with write access to the store.
    pub fn with_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut ShopStore) -> R,
    {
        let mut store = self.inner.lock().expect("store mutex poisoned");
        f(&mut store)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use minishop_core::CoreError;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn store() -> ShopStore {
        ShopStore::new(Catalog::demo())
    }

    #[test]
    fn test_add_returns_updated_line() {
        let mut store = store();

        let line = store.add_to_cart(ProductId::new(3)).unwrap();
        assert_eq!(line.quantity, 1);

        let line = store.add_to_cart(ProductId::new(3)).unwrap();
        assert_eq!(line.quantity, 2);
        assert_eq!(line.name, "AirPods headphones");
    }

    #[test]
    fn test_unknown_product_rejected_before_mutation() {
        let mut store = store();
        store.add_to_cart(ProductId::new(1)).unwrap();
        let before = store.snapshot();

        let err = store.add_to_cart(ProductId::new(99)).unwrap_err();
        assert_eq!(err, CoreError::ProductNotFound(ProductId::new(99)));
        assert_eq!(store.snapshot(), before); // all-or-nothing
    }

    #[test]
    fn test_mutations_emit_cart_changed() {
        let mut store = store();
        let events = Arc::new(Mutex::new(Vec::new()));

        let seen = Arc::clone(&events);
        store.cart_changed().subscribe(move |ev: &CartChanged| {
            seen.lock().unwrap().push((ev.line_count, ev.total_quantity));
        });

        store.add_to_cart(ProductId::new(3)).unwrap();
        store.add_to_cart(ProductId::new(6)).unwrap();
        store.add_to_cart(ProductId::new(6)).unwrap();
        store.remove_from_cart(ProductId::new(3));

        assert_eq!(
            *events.lock().unwrap(),
            vec![(1, 1), (2, 2), (2, 3), (1, 2)]
        );
    }

    #[test]
    fn test_failed_add_emits_nothing() {
        let mut store = store();
        let hits = Arc::new(AtomicUsize::new(0));

        let counter = Arc::clone(&hits);
        store.cart_changed().subscribe(move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        let _ = store.add_to_cart(ProductId::new(99));
        store.remove_from_cart(ProductId::new(1)); // absent: idempotent no-op

        assert_eq!(hits.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_handle_shares_one_store() {
        let handle = StoreHandle::new(store());
        let other = handle.clone();

        handle
            .with_mut(|s| s.add_to_cart(ProductId::new(1)))
            .unwrap();

        assert_eq!(other.with(|s| s.total()), Money::from_units(35_000));
        assert!(!other.with(|s| s.is_empty()));
    }
}
