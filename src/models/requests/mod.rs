//! Request payloads sent to the marketplace API.

pub mod auth;
pub mod listing;

pub use auth::*;
pub use listing::*;
