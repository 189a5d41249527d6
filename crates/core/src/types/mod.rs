//! Core types for CartX.
//!
//! This module provides type-safe wrappers for common domain concepts and
//! the wire types exchanged with the backend API.

pub mod id;
pub mod money;
pub mod order;
pub mod product;

pub use id::*;
pub use money::format_usd;
pub use order::{CartLine, ErrorDetail, OrderCreated, OrderRequest, subtotal};
pub use product::{Product, ProductList};
