//! Client-side services: credential handling, session storage and typed
//! access to the marketplace API.

pub mod admin_service;
pub mod api_client;
pub mod auth_service;
pub mod creator_service;
pub mod dashboard;
pub mod directory;
pub mod listing_service;
pub mod profile_service;
pub mod role_resolver;
pub mod session_store;
pub mod token_codec;

pub use admin_service::AdminService;
pub use api_client::{ApiClient, RequestOptions};
pub use auth_service::{AuthService, LoginOutcome};
pub use creator_service::CreatorService;
pub use dashboard::Dashboard;
pub use directory::{load_creators, CreatorCard};
pub use listing_service::ListingService;
pub use profile_service::ProfileService;
pub use role_resolver::{resolve_claims, resolve_role};
pub use session_store::{FileSessionStore, MemorySessionStore, SessionStore};
pub use token_codec::decode;
