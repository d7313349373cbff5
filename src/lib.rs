//! Client for the creator marketplace portal.
//!
//! The backend owns data, validation and authorization. This crate holds the
//! client side of it: decoding the bearer credential to pick a role, keeping
//! the session, guarding pages, and typed access to the REST endpoints.

pub mod config;
pub mod constants;
pub mod errors;
pub mod guard;
pub mod models;
pub mod services;
pub mod utils;
pub mod validators;

pub use errors::ClientError;
pub use guard::{AuthGuard, GuardOptions, GuardOutcome, HistoryNavigator, Navigator};
pub use models::{Claims, Role};
pub use services::{decode, resolve_role, ApiClient, FileSessionStore, MemorySessionStore, SessionStore};
