//! Fixed keys of the client-local persistent session storage.

/// Key holding the bearer credential.
pub const TOKEN_KEY: &str = "token";

/// Key holding the role label last resolved from the credential.
pub const ROLE_KEY: &str = "role";
