//! Error type shared by every fallible portal operation.
//!
//! Failures are meant to be caught at the page (command) level and rendered as
//! inline error text, so `Display` always yields text fit for that purpose. For
//! backend rejections this is the raw response body.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClientError {
    /// The backend answered with a non-success status.
    ///
    /// `message` is the raw response body; `status` is kept alongside so callers
    /// can tell "forbidden" apart from "not found" without parsing text.
    #[error("{message}")]
    Api { status: u16, message: String },

    /// The request never produced a response (connection refused, DNS, TLS...).
    #[error("{0}")]
    Transport(#[from] reqwest::Error),

    /// A success response whose body did not have the expected shape.
    #[error("{0}")]
    Decode(String),

    /// Required fields were missing; no request was sent.
    #[error("{}", .0.join("; "))]
    Validation(Vec<String>),

    /// The request could not be built from the given header names or values.
    #[error("{0}")]
    InvalidRequest(String),
}

impl ClientError {
    /// HTTP status of a backend rejection, if this error is one.
    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::Api { status, .. } => Some(*status),
            ClientError::Transport(err) => err.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        self.status() == Some(401)
    }

    pub fn is_forbidden(&self) -> bool {
        self.status() == Some(403)
    }

    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }

    /// Page-local error text: the error's own message, or `fallback` when it has none.
    pub fn page_message(&self, fallback: &str) -> String {
        let message = self.to_string();
        if message.trim().is_empty() {
            fallback.to_string()
        } else {
            message
        }
    }
}

impl From<serde_json::Error> for ClientError {
    fn from(err: serde_json::Error) -> Self {
        ClientError::Decode(err.to_string())
    }
}
