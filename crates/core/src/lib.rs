//! CartX Core - Shared types library.
//!
//! This crate provides common types used across all CartX components:
//! - `storefront` - Public-facing storefront front-end
//!
//! # Architecture
//!
//! The core crate contains only types and pure arithmetic - no I/O, no HTTP
//! clients. This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Wire types for the backend API, newtype IDs, and money
//!   formatting

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
