//! Role classification from credential claims.

use serde_json::Value;

use crate::models::{Claims, Role};
use crate::services::token_codec;

/// Resolve the role carried by a credential.
///
/// A missing or undecodable credential is `Role::Unknown`.
pub fn resolve_role(credential: Option<&str>) -> Role {
    credential
        .and_then(token_codec::decode)
        .map(|claims| resolve_claims(&claims))
        .unwrap_or(Role::Unknown)
}

/// Classify decoded claims.
///
/// A truthy `isAdmin` wins outright. Otherwise the first non-empty role-like
/// claim is split into lowercase tokens: any token containing `admin` makes the
/// role `Admin`, else any token containing `user` makes it `User`.
pub fn resolve_claims(claims: &Claims) -> Role {
    if claims.admin_flag() {
        return Role::Admin;
    }

    let tokens = claims.role_value().map(role_tokens).unwrap_or_default();

    if tokens.iter().any(|t| t.contains("admin")) {
        Role::Admin
    } else if tokens.iter().any(|t| t.contains("user")) {
        Role::User
    } else {
        Role::Unknown
    }
}

/// Normalize a role-like claim into lowercase tokens.
///
/// Sequences contribute one token per element, nested sequences joined with
/// commas; a single value is split on runs of commas and whitespace.
fn role_tokens(value: &Value) -> Vec<String> {
    match value {
        Value::Array(items) => items
            .iter()
            .filter_map(element_text)
            .map(|s| s.to_lowercase())
            .collect(),
        other => scalar_text(other)
            .map(|text| {
                text.split(|c: char| c == ',' || c.is_whitespace())
                    .filter(|t| !t.is_empty())
                    .map(str::to_lowercase)
                    .collect()
            })
            .unwrap_or_default(),
    }
}

fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

/// Text of one sequence element. A nested sequence reads as its elements
/// joined with commas, with null and object members left empty.
fn element_text(value: &Value) -> Option<String> {
    match value {
        Value::Array(items) => Some(
            items
                .iter()
                .map(|item| element_text(item).unwrap_or_default())
                .collect::<Vec<_>>()
                .join(","),
        ),
        other => scalar_text(other),
    }
}
