//! # View Renderer
//!
//! Deterministic projection from catalog + cart state to a display
//! structure. The presentation surface (markup, styling, animation) is
//! out of scope; this module produces the data it would consume.
//!
//! Re-render happens on every cart mutation and once at startup. The
//! catalog is small and static, so each trigger rebuilds the whole
//! view; there is no diffing.

use std::sync::{Arc, Mutex};

use serde::Serialize;

use minishop_core::{CartSnapshot, Catalog, ProductId};

/// Label on every add-to-cart affordance.
pub const ADD_TO_CART_LABEL: &str = "🛒 Add to cart";

// =============================================================================
// Display Structures
// =============================================================================

/// One product card.
///
/// Deliberately independent of cart contents: the card layout never
/// changes based on whether the item is already in the cart. That
/// matches the original behavior and is a recorded design gap, not a
/// bug to fix here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductCard {
    pub id: ProductId,
    pub name: String,
    pub description: String,
    /// Grouped price with currency sign ("8 500 ₴").
    pub price_label: String,
    pub image_ref: String,
    pub action_label: String,
}

/// The full display representation of the storefront.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShopView {
    /// One card per catalog product, in catalog order.
    pub cards: Vec<ProductCard>,

    /// Distinct cart lines (header badge).
    pub line_count: usize,

    /// Total quantity across lines (header badge).
    pub total_quantity: u32,

    /// Cart total, formatted.
    pub total_label: String,
}

// =============================================================================
// Projection
// =============================================================================

/// Projects catalog and cart state into the display structure.
///
/// Pure: same inputs, same view.
pub fn project(catalog: &Catalog, cart: &CartSnapshot) -> ShopView {
    let cards = catalog
        .iter()
        .map(|product| ProductCard {
            id: product.id,
            name: product.name.clone(),
            description: product.description.clone(),
            price_label: product.price.to_string(),
            image_ref: product.image_ref.clone(),
            action_label: ADD_TO_CART_LABEL.to_string(),
        })
        .collect();

    ShopView {
        cards,
        line_count: cart.lines.len(),
        total_quantity: cart.lines.iter().map(|l| l.quantity).sum(),
        total_label: cart.total.to_string(),
    }
}

// =============================================================================
// View Handle
// =============================================================================

/// Holds the most recent projection for whoever presents it.
#[derive(Clone)]
pub struct ViewHandle {
    inner: Arc<Mutex<ShopView>>,
}

impl ViewHandle {
    /// Starts from an initial projection.
    pub fn new(view: ShopView) -> Self {
        ViewHandle {
            inner: Arc::new(Mutex::new(view)),
        }
    }

    /// Replaces the current view (full re-render).
    pub fn set(&self, view: ShopView) {
        *self.inner.lock().expect("view mutex poisoned") = view;
    }

    /// The latest projection.
    pub fn current(&self) -> ShopView {
        self.inner.lock().expect("view mutex poisoned").clone()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use minishop_core::Cart;

    #[test]
    fn test_one_card_per_product_in_catalog_order() {
        let catalog = Catalog::demo();
        let view = project(&catalog, &CartSnapshot::empty());

        assert_eq!(view.cards.len(), 6);
        let ids: Vec<u32> = view.cards.iter().map(|c| c.id.value()).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5, 6]);
        assert_eq!(view.cards[0].price_label, "35 000 ₴");
        assert_eq!(view.total_label, "0 ₴");
    }

    #[test]
    fn test_cards_are_independent_of_cart_contents() {
        let catalog = Catalog::demo();
        let mut cart = Cart::new();

        let before = project(&catalog, &cart.snapshot());
        cart.add_line(catalog.resolve(ProductId::new(3)).unwrap());
        cart.add_line(catalog.resolve(ProductId::new(3)).unwrap());
        let after = project(&catalog, &cart.snapshot());

        // Known gap, preserved: the card never reflects cart quantity
        assert_eq!(before.cards, after.cards);
        assert_eq!(after.line_count, 1);
        assert_eq!(after.total_quantity, 2);
        assert_eq!(after.total_label, "17 000 ₴");
    }

    #[test]
    fn test_projection_is_deterministic() {
        let catalog = Catalog::demo();
        let mut cart = Cart::new();
        cart.add_line(catalog.resolve(ProductId::new(6)).unwrap());

        let snapshot = cart.snapshot();
        assert_eq!(project(&catalog, &snapshot), project(&catalog, &snapshot));
    }

    #[test]
    fn test_view_handle_replaces_whole_view() {
        let catalog = Catalog::demo();
        let handle = ViewHandle::new(project(&catalog, &CartSnapshot::empty()));
        assert_eq!(handle.current().line_count, 0);

        let mut cart = Cart::new();
        cart.add_line(catalog.resolve(ProductId::new(1)).unwrap());
        handle.set(project(&catalog, &cart.snapshot()));

        assert_eq!(handle.current().line_count, 1);
    }
}
