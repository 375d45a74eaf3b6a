//! Error types for the users core.
//!
//! # Design
//! `NotFound` gets a dedicated variant because a 404 on the collection almost
//! always means a wrong base URL rather than an empty listing. All other
//! non-2xx responses land in `HttpError` with the raw status code and body
//! for debugging. `Transport` covers failures where no response arrived.

use thiserror::Error;

use crate::form::Field;

/// Errors returned while fetching the user collection.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The server returned 404 for the collection path.
    #[error("resource not found")]
    NotFound,

    /// The server returned a non-2xx status other than 404.
    #[error("HTTP {status}: {body}")]
    HttpError { status: u16, body: String },

    /// The response body could not be deserialized into the expected type.
    #[error("deserialization failed: {0}")]
    DeserializationError(String),

    /// The request never produced a response (DNS, connect, TLS, I/O).
    #[error("transport failed: {0}")]
    Transport(String),
}

/// Returned by form validation when required fields are empty.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("validation failed: missing {}", missing_list(.missing))]
pub struct ValidationError {
    pub missing: Vec<Field>,
}

fn missing_list(fields: &[Field]) -> String {
    fields
        .iter()
        .map(|f| f.key())
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn http_error_display_includes_status_and_body() {
        let err = ApiError::HttpError {
            status: 503,
            body: "down".to_string(),
        };
        assert_eq!(err.to_string(), "HTTP 503: down");
    }

    #[test]
    fn validation_error_lists_missing_fields() {
        let err = ValidationError {
            missing: vec![Field::Name, Field::Website],
        };
        assert_eq!(err.to_string(), "validation failed: missing name, website");
    }
}
