//! # Error Types
//!
//! Domain-specific error types for minishop-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                 │
//! │                                                                     │
//! │  minishop-core errors (this file)                                   │
//! │  └── CoreError     - catalog/cart precondition violations           │
//! │                                                                     │
//! │  minishop-bridge errors (separate crate)                            │
//! │  └── BridgeError   - payload encoding / host transport failures     │
//! │                                                                     │
//! │  CoreError is a caller error: the UI only offers buttons for        │
//! │  catalog items, so an unknown product id means a wiring bug.        │
//! │  BridgeError is environmental and surfaces as a user notice.        │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (product id, etc.)
//! 3. Errors are enum variants, never String

use thiserror::Error;

use crate::catalog::ProductId;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
///
/// These represent precondition violations in the catalog/cart layer.
/// They must be rejected before any state mutation happens
/// (all-or-nothing), and must never corrupt existing cart state.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// Product id does not resolve to a catalog entry.
    ///
    /// ## When This Occurs
    /// - A cart operation references an id the catalog never contained
    /// - This is a programmer/caller error: the view only renders
    ///   add-to-cart affordances for catalog items
    #[error("Product not found: {0}")]
    ProductNotFound(ProductId),

    /// Two catalog entries were loaded with the same id.
    ///
    /// The catalog is built once at startup from static data, so this
    /// can only happen when the seed data itself is wrong.
    #[error("Duplicate product id in catalog: {0}")]
    DuplicateProduct(ProductId),
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CoreError::ProductNotFound(ProductId::new(42));
        assert_eq!(err.to_string(), "Product not found: 42");

        let err = CoreError::DuplicateProduct(ProductId::new(1));
        assert_eq!(err.to_string(), "Duplicate product id in catalog: 1");
    }
}
