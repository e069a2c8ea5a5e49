//! Partner referrals: onboarding merchants onto a platform.

use serde::{Deserialize, Serialize};

use super::common::{find_link, Link};

/// Feature a partner asks the merchant to grant.
pub mod features {
    /// Accept payments on behalf of the merchant.
    pub const PAYMENT: &str = "PAYMENT";
    /// Issue refunds.
    pub const REFUND: &str = "REFUND";
    /// Charge a partner fee.
    pub const PARTNER_FEE: &str = "PARTNER_FEE";
    /// Delay disbursement of funds.
    pub const DELAY_FUNDS_DISBURSEMENT: &str = "DELAY_FUNDS_DISBURSEMENT";
    /// Read the merchant's disputes.
    pub const READ_SELLER_DISPUTE: &str = "READ_SELLER_DISPUTE";
    /// Act on the merchant's disputes.
    pub const UPDATE_SELLER_DISPUTE: &str = "UPDATE_SELLER_DISPUTE";
    /// Access the merchant's transactions.
    pub const ACCESS_MERCHANT_INFORMATION: &str = "ACCESS_MERCHANT_INFORMATION";
}

/// Features granted through a third-party integration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThirdPartyDetails {
    /// Feature names, see [`features`]
    pub features: Vec<String>,
}

/// REST integration settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RestApiIntegration {
    /// `PAYPAL`
    pub integration_method: String,
    /// `THIRD_PARTY` or `FIRST_PARTY`
    pub integration_type: String,
    /// Granted features
    pub third_party_details: ThirdPartyDetails,
}

/// Integration preference of an onboarding operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntegrationDetails {
    /// REST integration
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rest_api_integration: Option<RestApiIntegration>,
}

/// An onboarding operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReferralOperation {
    /// e.g. `API_INTEGRATION`
    pub operation: String,
    /// Integration settings
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_integration_preference: Option<IntegrationDetails>,
}

impl ReferralOperation {
    /// A third-party API integration granting `features`.
    pub fn third_party_api<I, S>(features: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            operation: "API_INTEGRATION".to_string(),
            api_integration_preference: Some(IntegrationDetails {
                rest_api_integration: Some(RestApiIntegration {
                    integration_method: "PAYPAL".to_string(),
                    integration_type: "THIRD_PARTY".to_string(),
                    third_party_details: ThirdPartyDetails {
                        features: features.into_iter().map(Into::into).collect(),
                    },
                }),
            }),
        }
    }
}

/// A legal consent given by the merchant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LegalConsent {
    /// e.g. `SHARE_DATA_CONSENT`
    #[serde(rename = "type")]
    pub consent_type: String,
    /// Whether it was granted
    pub granted: bool,
}

/// Body of `POST /v2/customer/partner-referrals`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReferralRequest {
    /// Partner-side merchant ID
    pub tracking_id: String,
    /// Onboarding operations
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub operations: Vec<ReferralOperation>,
    /// Products, e.g. `EXPRESS_CHECKOUT`
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub products: Vec<String>,
    /// Legal consents
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub legal_consents: Vec<LegalConsent>,
}

/// Response of the partner referrals endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReferralResponse {
    /// Links, including `action_url` for the merchant
    #[serde(default)]
    pub links: Vec<Link>,
}

impl ReferralResponse {
    /// URL the merchant visits to complete onboarding.
    pub fn action_url(&self) -> Option<&str> {
        find_link(&self.links, "action_url").map(|l| l.href.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_referral_request_shape() {
        let req = ReferralRequest {
            tracking_id: "merchant-42".into(),
            operations: vec![ReferralOperation::third_party_api([
                features::PAYMENT,
                features::REFUND,
            ])],
            products: vec!["EXPRESS_CHECKOUT".into()],
            legal_consents: vec![LegalConsent {
                consent_type: "SHARE_DATA_CONSENT".into(),
                granted: true,
            }],
        };

        let json = serde_json::to_value(&req).unwrap();
        let rest = &json["operations"][0]["api_integration_preference"]["rest_api_integration"];
        assert_eq!(rest["integration_type"], "THIRD_PARTY");
        assert_eq!(rest["third_party_details"]["features"][1], "REFUND");
        assert_eq!(json["legal_consents"][0]["type"], "SHARE_DATA_CONSENT");
    }

    #[test]
    fn test_action_url() {
        let resp: ReferralResponse = serde_json::from_value(serde_json::json!({
            "links": [
                {"href": "https://api-m.sandbox.paypal.com/v2/customer/partner-referrals/ZjcyODU4ZWYtYTA1OC00ODIwLTk2M2EtOTZkZWQ4NmQwYzI3", "rel": "self", "method": "GET"},
                {"href": "https://www.sandbox.paypal.com/bizsignup/partner/entry?referralToken=abc", "rel": "action_url", "method": "GET"}
            ]
        }))
        .unwrap();
        assert_eq!(
            resp.action_url(),
            Some("https://www.sandbox.paypal.com/bizsignup/partner/entry?referralToken=abc")
        );
    }
}
