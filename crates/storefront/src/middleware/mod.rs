//! Tower middleware configuration.

pub mod session;
