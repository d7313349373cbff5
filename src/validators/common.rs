//! Common validation utilities and helpers.

use validator::{Validate, ValidationErrors};

use crate::errors::ClientError;
use crate::models::ServiceDraft;

/// Convert validator errors to `ClientError::Validation`.
///
/// Messages are collected in field-name order so the resulting text is stable.
///
/// # Example
/// ```ignore
/// body.validate().map_err(validation_errors_to_client_error)?;
/// ```
pub fn validation_errors_to_client_error(e: ValidationErrors) -> ClientError {
    let mut fields: Vec<_> = e.field_errors().into_iter().collect();
    fields.sort_by(|a, b| a.0.cmp(&b.0));

    let errors: Vec<String> = fields
        .into_iter()
        .flat_map(|(_, errs)| {
            errs.iter()
                .map(|e| e.message.clone().unwrap_or_default().to_string())
        })
        .collect();
    ClientError::Validation(errors)
}

/// Validate any payload deriving `Validate`.
pub fn validate_payload<T: Validate>(payload: &T) -> Result<(), ClientError> {
    payload.validate().map_err(validation_errors_to_client_error)
}

/// Required-field check for listing forms.
///
/// Returns the single form-level notice rather than one message per field.
pub fn validate_service_draft(draft: &ServiceDraft) -> Result<(), ClientError> {
    draft
        .check()
        .map_err(|message| ClientError::Validation(vec![message]))
}
