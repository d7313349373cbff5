//! Error and notice message constants shown as page-local error text.

// Validation errors
pub const ERR_EMAIL_REQUIRED: &str = "Email is required";
pub const ERR_PASSWORD_REQUIRED: &str = "Password is required";
pub const ERR_FILL_SERVICE_FIELDS: &str =
    "Please fill in title, description, price, and delivery time.";

// Response errors
pub const ERR_MISSING_TOKEN: &str = "Login response did not contain a token";

// Page-level fallbacks, used when a failure carries no message of its own
pub const ERR_LOGIN_FAILED: &str = "Login failed. Please try again.";
pub const ERR_PARTIAL_LOAD: &str = "Some data could not be loaded. Try refreshing.";
pub const ERR_LOAD_SERVICES: &str = "Unable to load services.";
pub const ERR_LOAD_SERVICE: &str = "Unable to load this service.";
pub const ERR_LOAD_CREATORS: &str = "Unable to load creators.";
pub const ERR_LOAD_PROFILE: &str = "Unable to load profile.";
pub const ERR_LOAD_CREATOR: &str = "Unable to load creator profile.";
pub const ERR_UPDATE_PROFILE: &str = "Error updating profile";
pub const ERR_SUBMIT_VERIFICATION: &str = "Unable to submit verification request.";
pub const ERR_CREATE_SERVICE: &str = "Unable to create service.";
pub const ERR_UPDATE_SERVICE: &str = "Unable to update service.";
pub const ERR_DELETE_OWN_SERVICE: &str = "Unable to delete service.";
pub const ERR_LOAD_VERIFICATIONS: &str = "Unable to load verification requests (403?).";
pub const ERR_LOAD_ADMIN_SERVICES: &str = "Unable to load services (403?).";
pub const ERR_UPDATE_STATUS: &str = "Unable to update status (403?).";
pub const ERR_DELETE_SERVICE: &str = "Unable to delete service (403?).";
pub const ERR_APPROVE: &str = "Failed to approve (403?). Confirm the logged-in account is admin.";
pub const ERR_REJECT: &str = "Failed to reject (403?). Confirm the logged-in account is admin.";
