//! Credential decoding.
//!
//! Credentials are compact three-segment tokens (`header.claims.signature`).
//! Only the claims segment is read, and nothing is verified: the backend owns
//! credential validity, the client only needs the claims to pick a role.

use base64::alphabet;
use base64::engine::general_purpose::{GeneralPurpose, GeneralPurposeConfig};
use base64::engine::DecodePaddingMode;
use base64::Engine;
use log::debug;
use serde_json::Value;

use crate::models::Claims;

/// Lenient decoder: leftover bits in the last symbol are ignored and padding
/// is optional, as browsers do when reading a claims segment.
const CLAIMS_ENGINE: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new()
        .with_decode_allow_trailing_bits(true)
        .with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

/// Decode the claims segment of a credential.
///
/// Returns `None` when the credential has no second segment, the segment is not
/// base64url, or its content is not a JSON object. Never panics.
pub fn decode(credential: &str) -> Option<Claims> {
    let segment = credential.split('.').nth(1).filter(|s| !s.is_empty())?;

    let bytes = match CLAIMS_ENGINE.decode(to_standard_base64(segment)) {
        Ok(bytes) => bytes,
        Err(e) => {
            debug!("Credential claims segment is not valid base64: {}", e);
            return None;
        }
    };

    match serde_json::from_slice::<Value>(&bytes) {
        Ok(Value::Object(fields)) => Some(Claims::new(fields)),
        Ok(_) => {
            debug!("Credential claims segment is not a JSON object");
            None
        }
        Err(e) => {
            debug!("Credential claims segment is not valid JSON: {}", e);
            None
        }
    }
}

/// Restore padding and translate the URL-safe alphabet.
fn to_standard_base64(segment: &str) -> String {
    let padding = match segment.len() % 4 {
        2 => "==",
        3 => "=",
        _ => "",
    };
    let mut out: String = segment
        .chars()
        .map(|c| match c {
            '-' => '+',
            '_' => '/',
            other => other,
        })
        .collect();
    out.push_str(padding);
    out
}
