//! The visitor's cart.
//!
//! An ordered list of cart lines held in the in-memory session. The only
//! mutations are appending a line and clearing the whole cart; there is no
//! remove or update-quantity operation. State vanishes with the session.

use cartx_core::{CartLine, subtotal};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Ordered cart lines for one visitor.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    /// Append `line` to the end of the cart.
    ///
    /// Lines are never merged: adding the same product twice yields two
    /// separate lines.
    pub fn add(&mut self, line: CartLine) {
        self.lines.push(line);
    }

    /// Empty the cart. Invoked only on checkout success.
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Number of lines (each add counts once; quantities are fixed at 1).
    #[must_use]
    pub fn count(&self) -> usize {
        self.lines.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Exact sum of `price * quantity` over all lines.
    #[must_use]
    pub fn subtotal(&self) -> Decimal {
        subtotal(&self.lines)
    }

    /// The lines in the order they were added.
    #[must_use]
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Consume the cart, yielding the lines in add order.
    #[must_use]
    pub fn into_lines(self) -> Vec<CartLine> {
        self.lines
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use cartx_core::ProductId;

    fn line(id: &str, price: &str) -> CartLine {
        CartLine {
            product_id: ProductId::new(id),
            title: format!("Product {id}"),
            price: price.parse().unwrap(),
            quantity: 1,
            image: None,
        }
    }

    #[test]
    fn test_empty_cart() {
        let cart = Cart::default();
        assert!(cart.is_empty());
        assert_eq!(cart.count(), 0);
        assert_eq!(cart.subtotal(), Decimal::ZERO);
    }

    #[test]
    fn test_add_appends_in_order() {
        let mut cart = Cart::default();
        cart.add(line("a", "1.00"));
        cart.add(line("b", "2.00"));
        cart.add(line("c", "3.00"));

        let ids: Vec<&str> = cart.lines().iter().map(|l| l.product_id.as_str()).collect();
        assert_eq!(ids, ["a", "b", "c"]);
        assert_eq!(cart.count(), 3);
        assert_eq!(cart.subtotal(), "6.00".parse().unwrap());
    }

    #[test]
    fn test_same_product_twice_is_two_lines() {
        let mut cart = Cart::default();
        cart.add(line("lamp", "19.99"));
        cart.add(line("lamp", "19.99"));

        assert_eq!(cart.count(), 2);
        assert_eq!(cart.lines()[0], cart.lines()[1]);
        assert_eq!(cart.subtotal(), "39.98".parse().unwrap());
    }

    #[test]
    fn test_clear_empties_cart() {
        let mut cart = Cart::default();
        cart.add(line("a", "1.00"));
        cart.clear();
        assert!(cart.is_empty());
        assert_eq!(cart.subtotal(), Decimal::ZERO);
    }

    #[test]
    fn test_cart_survives_session_serde() {
        let mut cart = Cart::default();
        cart.add(line("a", "19.99"));

        let json = serde_json::to_string(&cart).unwrap();
        let back: Cart = serde_json::from_str(&json).unwrap();
        assert_eq!(back.count(), 1);
        assert_eq!(back.subtotal(), "19.99".parse().unwrap());
    }
}
