//! Primitive types and newtypes for type-safe API interactions.
//!
//! PayPal identifiers are all opaque strings. Wrapping them keeps an order
//! ID from being passed where a capture ID is expected.

use serde::{Deserialize, Serialize};
use std::fmt;

macro_rules! string_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Wrap a raw identifier.
            pub fn new(s: impl Into<String>) -> Self {
                Self(s.into())
            }

            /// Get the identifier as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                Self(s)
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self(s.to_string())
            }
        }
    };
}

string_id!(
    /// A checkout order ID.
    ///
    /// ```
    /// use paypal_rs::OrderId;
    ///
    /// let id = OrderId::new("5O190127TN364715T");
    /// assert_eq!(id.to_string(), "5O190127TN364715T");
    /// ```
    OrderId
);
string_id!(
    /// An authorized payment ID.
    AuthorizationId
);
string_id!(
    /// A captured payment ID.
    CaptureId
);
string_id!(
    /// A refund ID.
    RefundId
);
string_id!(
    /// A payout batch ID.
    PayoutBatchId
);
string_id!(
    /// A single payout item ID.
    PayoutItemId
);
string_id!(
    /// A dispute ID, e.g. `PP-D-4012`.
    DisputeId
);

/// Which PayPal deployment to talk to.
///
/// # Example
///
/// ```
/// use paypal_rs::Environment;
///
/// let env = Environment::Sandbox;
/// assert_eq!(env.api_base_url(), "https://api-m.sandbox.paypal.com");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Environment {
    /// Sandbox for development and testing. No real money moves.
    #[default]
    Sandbox,
    /// Live environment.
    Live,
}

impl Environment {
    /// Get the base URL for REST API requests.
    pub fn api_base_url(&self) -> &'static str {
        match self {
            Environment::Sandbox => "https://api-m.sandbox.paypal.com",
            Environment::Live => "https://api-m.paypal.com",
        }
    }

    /// Returns `true` if this is the live environment.
    pub fn is_live(&self) -> bool {
        matches!(self, Environment::Live)
    }

    /// Returns `true` if this is the sandbox environment.
    pub fn is_sandbox(&self) -> bool {
        matches!(self, Environment::Sandbox)
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Environment::Sandbox => write!(f, "sandbox"),
            Environment::Live => write!(f, "live"),
        }
    }
}

impl std::str::FromStr for Environment {
    type Err = crate::Error;

    fn from_str(s: &str) -> crate::Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sandbox" | "" => Ok(Environment::Sandbox),
            "live" | "production" | "prod" => Ok(Environment::Live),
            other => Err(crate::Error::Config(format!(
                "Unknown PayPal environment: {}. Expected sandbox or live",
                other
            ))),
        }
    }
}

/// Value of the `Prefer` request header.
///
/// Mutating endpoints can answer with either the full resource or just its
/// id, status and links.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Prefer {
    /// `return=minimal`
    Minimal,
    /// `return=representation`
    Representation,
}

impl Prefer {
    /// The header value.
    pub fn header_value(&self) -> &'static str {
        match self {
            Prefer::Minimal => "return=minimal",
            Prefer::Representation => "return=representation",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids() {
        let id = CaptureId::new("2GG279541U471931P");
        assert_eq!(id.as_str(), "2GG279541U471931P");

        let from: DisputeId = "PP-D-4012".into();
        assert_eq!(from.to_string(), "PP-D-4012");
        assert_eq!(serde_json::to_string(&from).unwrap(), r#""PP-D-4012""#);
    }

    #[test]
    fn test_environment_urls() {
        assert_eq!(
            Environment::Live.api_base_url(),
            "https://api-m.paypal.com"
        );
        assert_eq!(
            Environment::Sandbox.api_base_url(),
            "https://api-m.sandbox.paypal.com"
        );
    }

    #[test]
    fn test_environment_from_str() {
        assert_eq!("LIVE".parse::<Environment>().unwrap(), Environment::Live);
        assert_eq!("sandbox".parse::<Environment>().unwrap(), Environment::Sandbox);
        assert!("staging".parse::<Environment>().is_err());
    }

    #[test]
    fn test_prefer_header() {
        assert_eq!(Prefer::Minimal.header_value(), "return=minimal");
        assert_eq!(Prefer::Representation.header_value(), "return=representation");
    }
}
