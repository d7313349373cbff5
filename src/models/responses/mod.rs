//! Response payloads received from the marketplace API.

pub mod auth;

pub use auth::*;
