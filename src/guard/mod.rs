//! Page-level route guarding.
//!
//! Every protected page mounts an [`AuthGuard`]. It checks the stored session,
//! keeps the stored role in step with the credential and redirects visitors
//! who are not logged in, or not admins on admin-only pages. Redirects are
//! optimistic UI decisions; the backend still authorizes each request.

pub mod auth_guard;
pub mod navigator;
pub mod page_scope;

pub use auth_guard::{AuthGuard, GuardOptions, GuardOutcome};
pub use navigator::{HistoryNavigator, Navigator};
pub use page_scope::{PageLifecycle, ScopeTicket};
