//! Data models organized by type.

pub mod claims;
pub mod listing;
pub mod profile;
pub mod requests;
pub mod responses;
pub mod role;
pub mod stats;
pub mod verification;

pub use claims::*;
pub use listing::*;
pub use profile::*;
pub use requests::*;
pub use responses::*;
pub use role::*;
pub use stats::*;
pub use verification::*;
