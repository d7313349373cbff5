//! Application constants module.
//!
//! This module centralizes the constant strings used throughout the portal client,
//! including error messages, success messages, route paths and storage keys.

pub mod errors;
pub mod messages;
pub mod routes;
pub mod storage;

pub use errors::*;
pub use messages::*;
pub use routes::*;
pub use storage::*;
