//! Decoded credential claims.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Claim names consulted for role-like values, in priority order.
///
/// The first one holding a non-empty value wins; values are never merged
/// across names.
pub const ROLE_CLAIMS: [&str; 6] = ["role", "roles", "authorities", "permissions", "scopes", "scope"];

/// Claim carrying an explicit admin flag. Takes precedence over every role claim.
pub const ADMIN_FLAG_CLAIM: &str = "isAdmin";

/// Claims embedded in a credential, keyed by claim name.
///
/// Issuers disagree on where they put roles, so no fixed shape is assumed:
/// whatever fields are present are kept as raw JSON values and looked up by name.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Claims(Map<String, Value>);

impl Claims {
    pub fn new(fields: Map<String, Value>) -> Self {
        Self(fields)
    }

    /// Raw value of a claim, if present.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.0.get(name)
    }

    /// Whether the admin flag claim is present and truthy.
    pub fn admin_flag(&self) -> bool {
        self.get(ADMIN_FLAG_CLAIM).is_some_and(is_truthy)
    }

    /// The first non-empty role-like claim, following [`ROLE_CLAIMS`] order.
    pub fn role_value(&self) -> Option<&Value> {
        ROLE_CLAIMS
            .iter()
            .filter_map(|name| self.get(name))
            .find(|value| is_non_empty(value))
    }

    /// Subject claim, when the issuer sets one.
    pub fn subject(&self) -> Option<&str> {
        self.get("sub").and_then(Value::as_str)
    }
}

/// Truthiness of a claim value: `false`, `null`, zero and `""` are falsy.
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

fn is_non_empty(value: &Value) -> bool {
    match value {
        Value::Array(items) => !items.is_empty(),
        other => is_truthy(other),
    }
}
