//! Error types for the PayPal API client.
//!
//! Failures fall into three groups:
//!
//! - transport and serialization failures ([`Error::Http`], [`Error::Json`],
//!   [`Error::UrlParse`]), surfaced as-is;
//! - failures reported by PayPal itself ([`Error::Api`] for API calls,
//!   [`Error::Authentication`] for the token endpoint);
//! - local timestamp parsing failures ([`Error::Timestamp`]).

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

use crate::models::time::TimestampParseError;

/// A specialized `Result` type for PayPal operations.
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for all PayPal API operations.
#[derive(Error, Debug)]
pub enum Error {
    /// HTTP request failed before a response was received
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON serialization/deserialization failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// PayPal answered with a non-success status
    #[error("API error: status={status}, name={name}, message={message}")]
    Api {
        /// HTTP status code
        status: u16,
        /// Machine-readable error name (e.g. `RESOURCE_NOT_FOUND`)
        name: String,
        /// Human-readable error message
        message: String,
        /// PayPal debug identifier, useful when contacting support
        debug_id: Option<String>,
        /// Link to the error documentation
        information_link: Option<String>,
        /// Field-level issues
        details: Vec<ErrorDetail>,
        /// Raw response body
        body: Value,
    },

    /// The token endpoint rejected the client credentials
    #[error("Authentication failed: {0}")]
    Authentication(String),

    /// A timestamp did not match any accepted layout
    #[error(transparent)]
    Timestamp(#[from] TimestampParseError),

    /// Invalid input provided to a function
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// URL parsing error
    #[error("URL parse error: {0}")]
    UrlParse(#[from] url::ParseError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

/// A single field-level issue reported in an API error body.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ErrorDetail {
    /// JSON pointer to the offending field
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
    /// The offending value
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    /// Where the field lives (`body`, `path`, `query`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    /// Issue code, e.g. `INVALID_PARAMETER_VALUE`
    #[serde(default)]
    pub issue: String,
    /// Human-readable description of the issue
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Error {
    /// Returns `true` if this is an authentication-related error.
    pub fn is_auth_error(&self) -> bool {
        match self {
            Error::Authentication(_) => true,
            Error::Api { status, .. } => *status == 401,
            _ => false,
        }
    }

    /// Returns `true` if this error indicates a client-side issue
    /// (invalid input, bad request, etc.).
    pub fn is_client_error(&self) -> bool {
        match self {
            Error::Api { status, .. } => (400..500).contains(status),
            Error::InvalidInput(_) | Error::Config(_) | Error::Timestamp(_) => true,
            _ => false,
        }
    }

    /// Returns `true` if this error indicates a server-side issue.
    pub fn is_server_error(&self) -> bool {
        matches!(self, Error::Api { status, .. } if *status >= 500)
    }

    /// Returns `true` if PayPal reported the resource as missing.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::Api { status: 404, .. })
    }

    /// HTTP status of an API error, if this is one.
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Api { status, .. } => Some(*status),
            Error::Http(err) => err.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Field-level issues of an API error. Empty for every other variant.
    pub fn api_details(&self) -> &[ErrorDetail] {
        match self {
            Error::Api { details, .. } => details,
            _ => &[],
        }
    }

    /// Create an API error from a response status and its (possibly empty) body.
    ///
    /// Understands both the REST error shape (`name`/`message`/`details`) and
    /// the OAuth shape (`error`/`error_description`).
    pub(crate) fn from_api_response(status: u16, body: Value) -> Self {
        let str_field = |key: &str| body.get(key).and_then(Value::as_str).map(String::from);

        let name = str_field("name")
            .or_else(|| str_field("error"))
            .unwrap_or_else(|| "UNKNOWN_ERROR".to_string());

        let message = str_field("message")
            .or_else(|| str_field("error_description"))
            .unwrap_or_else(|| format!("PayPal returned status {}", status));

        let details = body
            .get("details")
            .cloned()
            .and_then(|d| serde_json::from_value(d).ok())
            .unwrap_or_default();

        Error::Api {
            status,
            name,
            message,
            debug_id: str_field("debug_id"),
            information_link: str_field("information_link"),
            details,
            body,
        }
    }
}
