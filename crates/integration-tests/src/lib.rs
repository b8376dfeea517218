//! Integration tests for Pulseira.
//!
//! Tests drive the real router in-process via `tower::ServiceExt::oneshot`;
//! no running server or external backend is needed. The catalog base URL
//! points at an unroutable port, which doubles as coverage for the
//! "failed fetch renders as empty catalog" contract.
//!
//! # Test Categories
//!
//! - `cart_flow` - Add/remove/count/checkout over HTTP with session cookies
//! - `notifications` - Toast queue drain semantics
//! - `catalog_fallback` - Catalog failure tolerance

pub mod support;
