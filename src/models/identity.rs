//! Identity (Log In with PayPal) user info.

use serde::{Deserialize, Deserializer, Serialize};

/// Address in OpenID Connect form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserAddress {
    /// Street address
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub street_address: Option<String>,
    /// City
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub locality: Option<String>,
    /// State or province
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    /// Postal code
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub postal_code: Option<String>,
    /// Country code
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
}

/// Profile of the account the access token belongs to.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserInfo {
    /// Subject identifier
    #[serde(default)]
    pub user_id: String,
    /// Full name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Given name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub given_name: Option<String>,
    /// Family name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub family_name: Option<String>,
    /// Primary email
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Whether the email is verified
    #[serde(default, deserialize_with = "lenient_bool")]
    pub verified: bool,
    /// Whether the account is verified
    #[serde(default, deserialize_with = "lenient_bool")]
    pub verified_account: bool,
    /// `PERSONAL` or `BUSINESS`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account_type: Option<String>,
    /// Payer ID
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payer_id: Option<String>,
    /// Birth date
    #[serde(default, rename = "birthdate", skip_serializing_if = "Option::is_none")]
    pub birth_date: Option<String>,
    /// Time zone
    #[serde(default, rename = "zoneinfo", skip_serializing_if = "Option::is_none")]
    pub zone_info: Option<String>,
    /// Locale
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,
    /// Phone number
    #[serde(default, rename = "phone_number", skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    /// Address
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<UserAddress>,
}

/// The userinfo endpoint sends booleans either as JSON booleans or as
/// `"true"`/`"false"` strings.
fn lenient_bool<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum BoolOrString {
        Bool(bool),
        String(String),
    }

    match BoolOrString::deserialize(deserializer)? {
        BoolOrString::Bool(b) => Ok(b),
        BoolOrString::String(s) => match s.as_str() {
            "true" => Ok(true),
            "false" | "" => Ok(false),
            other => Err(serde::de::Error::custom(format!(
                "expected boolean string, got {:?}",
                other
            ))),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_string_booleans() {
        let info: UserInfo = serde_json::from_value(serde_json::json!({
            "user_id": "https://www.paypal.com/webapps/auth/identity/user/mWq6_1sU85v5EG9yHdPxJRrhGHrnMJ-1PQKtX6pcsmA",
            "name": "identity test",
            "given_name": "identity",
            "family_name": "test",
            "payer_id": "WDJJHEBZ4X2LY",
            "verified_account": "true",
            "verified": false,
            "emails": [{"value": "user1@example.com", "primary": true}]
        }))
        .unwrap();

        assert!(info.verified_account);
        assert!(!info.verified);
        assert_eq!(info.payer_id.as_deref(), Some("WDJJHEBZ4X2LY"));
    }
}
