//! Domain models for storefront.

pub mod cart;

pub use cart::Cart;

/// Session storage keys.
///
/// Keep these namespaced so future session values cannot collide.
pub mod session_keys {
    /// The visitor's cart ([`super::Cart`]).
    pub const CART: &str = "cartx.cart";
}
