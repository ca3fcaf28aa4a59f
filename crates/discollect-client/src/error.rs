// SPDX-License-Identifier: GPL-3.0-or-later

use reqwest::StatusCode;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, DiscogsError>;

/// Code carried by every [`DiscogsError::Validation`] error.
pub const MISSING_VALUE_CODE: i32 = -1;

/// Identifier missing from an entity when a relationship fetch was requested.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MissingValue {
    ArtistId,
    ReleaseMasterId,
    MasterId,
    LabelId,
    Username,
}

impl MissingValue {
    pub fn message(self) -> &'static str {
        match self {
            MissingValue::ArtistId => "The artist has no Id",
            MissingValue::ReleaseMasterId => "The release has no master Id",
            MissingValue::MasterId => "The master release has no Id",
            MissingValue::LabelId => "The label has no Id",
            MissingValue::Username => "The user has no username",
        }
    }

    pub fn code(self) -> i32 {
        MISSING_VALUE_CODE
    }
}

impl std::fmt::Display for MissingValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.message())
    }
}

/// Broad classification of a [`DiscogsError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Validation,
    Network,
    HttpStatus,
    Decode,
    Configuration,
}

#[derive(Debug, Error)]
pub enum DiscogsError {
    /// Raised locally before any request is made.
    #[error("{0}")]
    Validation(MissingValue),

    /// Marketplace prices must be finite and non-negative.
    #[error("Invalid price: {0}")]
    InvalidPrice(f64),

    #[error("HTTP request failed: {0}")]
    Network(#[from] reqwest::Error),

    #[error("HTTP status {status}: {message}")]
    HttpStatus { status: StatusCode, message: String },

    #[error("Invalid JSON in response: {0}")]
    Json(#[from] serde_json::Error),

    /// The body was valid JSON, but the top-level value was not an object.
    #[error("Expected a JSON object, got {0}")]
    NotAnObject(&'static str),

    #[error("Missing expected field: {0}")]
    MissingField(&'static str),

    #[error("Unexpected value in field: {0}")]
    InvalidField(&'static str),

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("Base URL cannot carry path segments: {0}")]
    InvalidBaseUrl(String),
}

impl DiscogsError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            DiscogsError::Validation(_) | DiscogsError::InvalidPrice(_) => ErrorKind::Validation,
            DiscogsError::Network(_) => ErrorKind::Network,
            DiscogsError::HttpStatus { .. } => ErrorKind::HttpStatus,
            DiscogsError::Json(_)
            | DiscogsError::NotAnObject(_)
            | DiscogsError::MissingField(_)
            | DiscogsError::InvalidField(_) => ErrorKind::Decode,
            DiscogsError::InvalidUrl(_) | DiscogsError::InvalidBaseUrl(_) => {
                ErrorKind::Configuration
            }
        }
    }

    /// `Some(-1)` for missing-value errors, `None` otherwise.
    pub fn code(&self) -> Option<i32> {
        match self {
            DiscogsError::Validation(missing) => Some(missing.code()),
            _ => None,
        }
    }

    pub fn is_decode(&self) -> bool {
        self.kind() == ErrorKind::Decode
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_errors_carry_message_and_code() {
        let error = DiscogsError::Validation(MissingValue::ReleaseMasterId);
        assert_eq!(error.to_string(), "The release has no master Id");
        assert_eq!(error.code(), Some(-1));
        assert_eq!(error.kind(), ErrorKind::Validation);
    }

    #[test]
    fn invalid_price_is_a_validation_error_without_code() {
        let error = DiscogsError::InvalidPrice(-5.0);
        assert_eq!(error.to_string(), "Invalid price: -5");
        assert_eq!(error.kind(), ErrorKind::Validation);
        assert_eq!(error.code(), None);
    }

    #[test]
    fn decode_family_is_classified_together() {
        let json = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        assert!(DiscogsError::from(json).is_decode());
        assert!(DiscogsError::NotAnObject("array").is_decode());
        assert!(DiscogsError::MissingField("pagination").is_decode());
        assert!(DiscogsError::InvalidField("releases").is_decode());
        assert_eq!(DiscogsError::MissingField("pagination").code(), None);
    }

    #[test]
    fn http_status_renders_status_and_message() {
        let error = DiscogsError::HttpStatus {
            status: StatusCode::NOT_FOUND,
            message: "Release not found.".to_string(),
        };
        assert_eq!(error.kind(), ErrorKind::HttpStatus);
        assert_eq!(error.to_string(), "HTTP status 404 Not Found: Release not found.");
    }
}
