//! Log sanitization utilities for masking sensitive data.
//!
//! Credentials and e-mail addresses pass through the client constantly; these
//! helpers keep them out of the logs in readable form.

/// Mask an email address for safe logging.
///
/// Keeps at most the first 3 characters of the local part and the domain.
///
/// # Examples
/// ```ignore
/// assert_eq!(mask_email("user@example.com"), "use***@example.com");
/// ```
pub fn mask_email(email: &str) -> String {
    match email.split_once('@') {
        Some((local, domain)) => format!("{}***@{}", prefix(local, 3), domain),
        None => format!("{}***", prefix(email, 3)),
    }
}

/// Mask a bearer credential for safe logging.
///
/// Only the last 6 characters are kept, which is enough to tell two sessions apart.
pub fn mask_token(token: &str) -> String {
    let count = token.chars().count();
    if count <= 6 {
        return "***".to_string();
    }
    let tail: String = token.chars().skip(count - 6).collect();
    format!("***{}", tail)
}

fn prefix(s: &str, n: usize) -> &str {
    match s.char_indices().nth(n) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}
