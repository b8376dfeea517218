//! Pulseira Core - Cart engine and shared types.
//!
//! This crate holds everything the storefront needs that is independent of
//! HTTP and the catalog backend:
//! - [`cart`] - The in-memory session cart: merge-by-identity adds, whole-line
//!   removes, and decimal total/count folds
//! - [`checkout`] - Order message formatting and the WhatsApp deep-link builder
//! - [`notify`] - The abstract notification sink cart operations report to
//! - [`types`] - Newtype wrappers for type-safe IDs and prices
//!
//! # Architecture
//!
//! The core crate contains only types and pure logic - no I/O, no HTTP
//! clients, no async. This keeps it lightweight and allows it to be used
//! anywhere, including inside synchronous tests.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cart;
pub mod checkout;
pub mod notify;
pub mod types;

pub use cart::{Cart, CartError, CartLine, ProductSnapshot};
pub use checkout::{MessageTemplate, order_message, whatsapp_link};
pub use notify::{Notification, Notifier, Severity};
pub use types::*;
