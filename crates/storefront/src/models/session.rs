//! Session-related types.
//!
//! The session record owns the shopper's cart and their pending
//! notifications; both are serialized into the tower-sessions store under
//! the keys below.

/// Session keys for per-shopper state.
pub mod keys {
    /// Key for the serialized cart.
    pub const CART: &str = "cart";

    /// Key for queued, not-yet-displayed notifications.
    pub const NOTIFICATIONS: &str = "notifications";
}
