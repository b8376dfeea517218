//! Storefront services.
//!
//! - [`cart`] - Cart operation orchestration (engine ops + notifications)
//! - [`notify`] - Session-backed notification queue

pub mod cart;
pub mod notify;
