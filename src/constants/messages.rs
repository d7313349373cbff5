//! Success message constants used by the portal commands.

// Authentication messages
pub const MSG_LOGIN_SUCCESS: &str = "Login successful";
pub const MSG_LOGOUT_SUCCESS: &str = "Logged out";

// Profile messages
pub const MSG_PROFILE_UPDATED: &str = "Profile updated successfully!";

// Listing messages
pub const MSG_SERVICE_CREATED: &str = "Service created";
pub const MSG_SERVICE_UPDATED: &str = "Service updated";
pub const MSG_SERVICE_DELETED: &str = "Service deleted";

// Verification messages
pub const MSG_VERIFICATION_SUBMITTED: &str = "Verification request submitted";
pub const MSG_VERIFICATION_APPROVED: &str = "Verification request approved";
pub const MSG_VERIFICATION_REJECTED: &str = "Verification request rejected";
pub const MSG_STATUS_UPDATED: &str = "Service status updated";

/// Reason sent when a creator submits a verification request without one.
pub const DEFAULT_VERIFICATION_REASON: &str = "Creator verification request";
