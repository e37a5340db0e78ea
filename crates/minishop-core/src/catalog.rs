//! # Catalog Module
//!
//! The static product catalog: an immutable, ordered sequence of
//! [`Product`] records.
//!
//! ## Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │  Startup ──► Catalog::new(products) ──► immutable for the session   │
//! │                                                                     │
//! │  Products are created once at catalog load and never destroyed.     │
//! │  There is no inventory, no price updates, no soft delete: the       │
//! │  catalog is an illustrative stand-in for a real product backend.    │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{CoreError, CoreResult};
use crate::money::Money;

// =============================================================================
// Product Identity
// =============================================================================

/// Unique positive integer identity of a catalog product.
///
/// ## Why Not UUIDs?
/// The catalog is a fixed in-memory sequence seeded at startup; ids only
/// need to be unique within it. A small integer matches the wire format
/// the host expects in the checkout payload.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct ProductId(u32);

impl ProductId {
    /// Creates a product id.
    #[inline]
    pub const fn new(id: u32) -> Self {
        ProductId(id)
    }

    /// Returns the raw id value.
    #[inline]
    pub const fn value(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// =============================================================================
// Product
// =============================================================================

/// A product available in the storefront.
///
/// Immutable after catalog load. Field names follow the checkout payload
/// wire format (the host receives these fields spread into cart lines,
/// so `image` stays `image` on the wire).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Unique identifier within the catalog.
    pub id: ProductId,

    /// Display name shown on the product card.
    pub name: String,

    /// Price in whole currency units.
    pub price: Money,

    /// Reference to the product image (URL in the demo data).
    #[serde(rename = "image")]
    pub image_ref: String,

    /// Short description for the product card.
    pub description: String,
}

impl Product {
    /// Creates a product record.
    pub fn new(
        id: u32,
        name: impl Into<String>,
        price: u64,
        image_ref: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Product {
            id: ProductId::new(id),
            name: name.into(),
            price: Money::from_units(price),
            image_ref: image_ref.into(),
            description: description.into(),
        }
    }
}

// =============================================================================
// Catalog
// =============================================================================

/// Immutable ordered sequence of products.
///
/// ## Invariants
/// - Product ids are unique (checked at construction)
/// - Iteration order is load order
#[derive(Debug, Clone)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Builds a catalog from a product sequence.
    ///
    /// ## Errors
    /// Returns [`CoreError::DuplicateProduct`] when two entries share an
    /// id. The seed data is static, so this only fires on a bad seed.
    pub fn new(products: Vec<Product>) -> CoreResult<Self> {
        for (i, product) in products.iter().enumerate() {
            if products[..i].iter().any(|p| p.id == product.id) {
                return Err(CoreError::DuplicateProduct(product.id));
            }
        }
        Ok(Catalog { products })
    }

    /// Looks up a product by id.
    pub fn get(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// Looks up a product by id, failing with `ProductNotFound`.
    ///
    /// This is the validation entry point for cart operations: resolve
    /// first, mutate after.
    pub fn resolve(&self, id: ProductId) -> CoreResult<&Product> {
        self.get(id).ok_or(CoreError::ProductNotFound(id))
    }

    /// Iterates products in load order.
    pub fn iter(&self) -> impl Iterator<Item = &Product> {
        self.products.iter()
    }

    /// Number of products in the catalog.
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Whether the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// The demo catalog the storefront ships with.
    ///
    /// Prices and image references are illustrative stand-ins; there is
    /// no real product backend behind them.
    pub fn demo() -> Self {
        let products = vec![
            Product::new(
                1,
                "iPhone 15 smartphone",
                35_000,
                "https://via.placeholder.com/200x200/007ACC/ffffff?text=iPhone+15",
                "The new iPhone 15 with an improved camera",
            ),
            Product::new(
                2,
                "MacBook Air laptop",
                45_000,
                "https://via.placeholder.com/200x200/FF6B35/ffffff?text=MacBook",
                "MacBook Air M2, power in a compact body",
            ),
            Product::new(
                3,
                "AirPods headphones",
                8_500,
                "https://via.placeholder.com/200x200/28A745/ffffff?text=AirPods",
                "Wireless headphones with active noise cancellation",
            ),
            Product::new(
                4,
                "iPad tablet",
                22_000,
                "https://via.placeholder.com/200x200/DC3545/ffffff?text=iPad",
                "iPad 10.9 for work and play",
            ),
            Product::new(
                5,
                "Apple Watch",
                15_000,
                "https://via.placeholder.com/200x200/6F42C1/ffffff?text=Watch",
                "Smart watch with health monitoring",
            ),
            Product::new(
                6,
                "Charging adapter",
                2_500,
                "https://via.placeholder.com/200x200/FD7E14/ffffff?text=Charger",
                "Fast USB-C 20W charging adapter",
            ),
        ];

        // Static seed data with known-unique ids.
        Catalog::new(products).expect("demo catalog seed has unique ids")
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_catalog_shape() {
        let catalog = Catalog::demo();
        assert_eq!(catalog.len(), 6);
        assert!(!catalog.is_empty());

        // Load order is preserved
        let ids: Vec<u32> = catalog.iter().map(|p| p.id.value()).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_get_and_resolve() {
        let catalog = Catalog::demo();

        let airpods = catalog.resolve(ProductId::new(3)).unwrap();
        assert_eq!(airpods.name, "AirPods headphones");
        assert_eq!(airpods.price.units(), 8_500);

        assert!(catalog.get(ProductId::new(99)).is_none());
        assert_eq!(
            catalog.resolve(ProductId::new(99)),
            Err(CoreError::ProductNotFound(ProductId::new(99)))
        );
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let products = vec![
            Product::new(1, "A", 100, "img-a", "first"),
            Product::new(1, "B", 200, "img-b", "second"),
        ];
        assert_eq!(
            Catalog::new(products).err(),
            Some(CoreError::DuplicateProduct(ProductId::new(1)))
        );
    }

    #[test]
    fn test_product_wire_field_names() {
        let product = Product::new(1, "A", 100, "img-a", "first");
        let json = serde_json::to_value(&product).unwrap();
        assert_eq!(json["image"], "img-a");
        assert_eq!(json["price"], 100);
    }
}
