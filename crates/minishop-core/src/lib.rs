//! # minishop-core: Pure Business Logic for the Storefront
//!
//! This crate is the heart of the minishop mini app. It contains the
//! catalog and cart logic as pure, synchronous code with zero I/O
//! dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                      minishop Architecture                          │
//! │                                                                     │
//! │  ┌───────────────────────────────────────────────────────────────┐  │
//! │  │                    apps/shell                                 │  │
//! │  │   Store ──► View projection ──► Notices ──► Checkout          │  │
//! │  └──────────────────────────────┬────────────────────────────────┘  │
//! │                                 │                                   │
//! │  ┌──────────────────────────────▼────────────────────────────────┐  │
//! │  │            ★ minishop-core (THIS CRATE) ★                     │  │
//! │  │                                                               │  │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌──────────┐   │  │
//! │  │   │  catalog  │  │   money   │  │   cart    │  │  error   │   │  │
//! │  │   │  Product  │  │   Money   │  │   Cart    │  │CoreError │   │  │
//! │  │   │  Catalog  │  │  grouping │  │ CartLine  │  │          │   │  │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └──────────┘   │  │
//! │  │                                                               │  │
//! │  │   NO I/O • NO HOST BRIDGE • NO TIMERS • PURE FUNCTIONS        │  │
//! │  └──────────────────────────────┬────────────────────────────────┘  │
//! │                                 │                                   │
//! │  ┌──────────────────────────────▼────────────────────────────────┐  │
//! │  │                  minishop-bridge                              │  │
//! │  │   Live | Simulated host adapter, checkout payload, signals    │  │
//! │  └───────────────────────────────────────────────────────────────┘  │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//!
//! 1. **Pure functions**: same input, same output; totals are derived,
//!    never cached
//! 2. **No I/O**: bridge calls, timers, and rendering live elsewhere
//! 3. **Integer money**: all amounts are whole currency units (u64)
//! 4. **Explicit errors**: typed enums, never strings or panics
//!
//! ## Example Usage
//!
//! ```rust
//! use minishop_core::{Cart, Catalog, ProductId};
//!
//! let catalog = Catalog::demo();
//! let mut cart = Cart::new();
//!
//! // Resolve first, mutate after (all-or-nothing)
//! let product = catalog.resolve(ProductId::new(3))?;
//! cart.add_line(product);
//!
//! assert_eq!(cart.total().units(), 8_500);
//! # Ok::<(), minishop_core::CoreError>(())
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod catalog;
pub mod error;
pub mod money;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use cart::{Cart, CartLine, CartSnapshot};
pub use catalog::{Catalog, Product, ProductId};
pub use error::{CoreError, CoreResult};
pub use money::Money;
