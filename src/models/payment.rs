//! Authorizations, captures and refunds (payments v2).

use serde::{Deserialize, Serialize};

use super::common::{
    AmountWithBreakdown, ExchangeRate, Link, Money, PlatformFee, SellerProtection, StatusDetails,
};
use super::enums::{AuthorizationStatus, CaptureStatus, RefundStatus};
use super::time::PayPalTime;

/// An authorized payment.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Authorization {
    /// Authorization ID
    #[serde(default)]
    pub id: String,
    /// Status
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<AuthorizationStatus>,
    /// Reason for a pending status
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status_details: Option<StatusDetails>,
    /// Authorized amount
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<AmountWithBreakdown>,
    /// Merchant invoice number
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub invoice_id: Option<String>,
    /// Merchant-side identifier
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_id: Option<String>,
    /// Seller protection eligibility
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seller_protection: Option<SellerProtection>,
    /// When the authorization stops being capturable
    #[serde(default, skip_serializing_if = "PayPalTime::is_zero")]
    pub expiration_time: PayPalTime,
    /// HATEOAS links
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub links: Vec<Link>,
    /// Creation time
    #[serde(default, skip_serializing_if = "PayPalTime::is_zero")]
    pub create_time: PayPalTime,
    /// Last update time
    #[serde(default, skip_serializing_if = "PayPalTime::is_zero")]
    pub update_time: PayPalTime,
}

/// Fees and net amounts for a captured payment.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SellerReceivableBreakdown {
    /// Amount captured
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gross_amount: Option<Money>,
    /// Fee charged by PayPal
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub paypal_fee: Option<Money>,
    /// Gross minus fees
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub net_amount: Option<Money>,
    /// Amount credited in the payee's receiving currency
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub receivable_amount: Option<Money>,
    /// Rate used for `receivable_amount`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exchange_rate: Option<ExchangeRate>,
    /// Platform or partner fees
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub platform_fees: Vec<PlatformFee>,
}

/// A captured payment.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Capture {
    /// Capture ID
    #[serde(default)]
    pub id: String,
    /// Status
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<CaptureStatus>,
    /// Reason for a pending or declined status
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status_details: Option<StatusDetails>,
    /// Captured amount
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<Money>,
    /// Merchant invoice number
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub invoice_id: Option<String>,
    /// Merchant-side identifier
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_id: Option<String>,
    /// Whether no further captures are possible on the authorization
    #[serde(default)]
    pub final_capture: bool,
    /// `INSTANT` or `DELAYED`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub disbursement_mode: Option<String>,
    /// Seller protection eligibility
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seller_protection: Option<SellerProtection>,
    /// Fee and net amount breakdown
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seller_receivable_breakdown: Option<SellerReceivableBreakdown>,
    /// HATEOAS links
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub links: Vec<Link>,
    /// Creation time
    #[serde(default, skip_serializing_if = "PayPalTime::is_zero")]
    pub create_time: PayPalTime,
    /// Last update time
    #[serde(default, skip_serializing_if = "PayPalTime::is_zero")]
    pub update_time: PayPalTime,
}

/// Platform fee and disbursement settings for a capture.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentInstruction {
    /// Fees to split off to the platform
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub platform_fees: Vec<PlatformFee>,
    /// `INSTANT` or `DELAYED`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub disbursement_mode: Option<String>,
}

/// Body of `POST /v2/payments/authorizations/{id}/capture`.
///
/// An empty request captures the full authorized amount.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentCaptureRequest {
    /// Amount to capture; defaults to the full authorization
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<Money>,
    /// Merchant invoice number
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub invoice_id: Option<String>,
    /// Note shown to the payer
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note_to_payer: Option<String>,
    /// Statement descriptor
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub soft_descriptor: Option<String>,
    /// Close the authorization after this capture
    #[serde(default)]
    pub final_capture: bool,
    /// Platform fees and disbursement
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_instruction: Option<PaymentInstruction>,
}

impl PaymentCaptureRequest {
    /// Capture a partial amount.
    pub fn amount(amount: Money) -> Self {
        Self {
            amount: Some(amount),
            ..Default::default()
        }
    }

    /// Mark this capture as the final one.
    pub fn final_capture(mut self) -> Self {
        self.final_capture = true;
        self
    }
}

/// Response of the authorization capture endpoint.
pub type PaymentCaptureResponse = Capture;

/// Fee and net amount breakdown for a refund.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SellerPayableBreakdown {
    /// Amount refunded to the payer
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gross_amount: Option<Money>,
    /// PayPal fee returned to the payee
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub paypal_fee: Option<Money>,
    /// Amount debited from the payee
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub net_amount: Option<Money>,
    /// Platform fees returned
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub platform_fees: Vec<PlatformFee>,
    /// Total refunded so far on the capture
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_refunded_amount: Option<Money>,
}

/// Body of `POST /v2/payments/captures/{id}/refund`.
///
/// An empty request refunds the full captured amount.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RefundRequest {
    /// Amount to refund; defaults to the full capture
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<Money>,
    /// Merchant invoice number
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub invoice_id: Option<String>,
    /// Reason shown to the payer
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note_to_payer: Option<String>,
}

impl RefundRequest {
    /// Refund the full captured amount.
    pub fn full() -> Self {
        Self::default()
    }

    /// Refund part of the captured amount.
    pub fn partial(amount: Money) -> Self {
        Self {
            amount: Some(amount),
            ..Default::default()
        }
    }

    /// Set the note to the payer.
    pub fn note(mut self, note: impl Into<String>) -> Self {
        self.note_to_payer = Some(note.into());
        self
    }
}

/// A refund of a captured payment.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Refund {
    /// Refund ID
    #[serde(default)]
    pub id: String,
    /// Status
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<RefundStatus>,
    /// Reason for a pending status
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status_details: Option<StatusDetails>,
    /// Refunded amount
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<Money>,
    /// Merchant invoice number
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub invoice_id: Option<String>,
    /// Note shown to the payer
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note_to_payer: Option<String>,
    /// Fee and net amount breakdown
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seller_payable_breakdown: Option<SellerPayableBreakdown>,
    /// HATEOAS links
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub links: Vec<Link>,
    /// Creation time
    #[serde(default, skip_serializing_if = "PayPalTime::is_zero")]
    pub create_time: PayPalTime,
    /// Last update time
    #[serde(default, skip_serializing_if = "PayPalTime::is_zero")]
    pub update_time: PayPalTime,
}

/// Response of the refund and get refund endpoints.
pub type RefundResponse = Refund;

/// Body of `POST /v2/payments/authorizations/{id}/reauthorize`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub(crate) struct ReauthorizeRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<Money>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_empty_capture_request_is_full_capture() {
        let json = serde_json::to_value(PaymentCaptureRequest::default()).unwrap();
        assert_eq!(json, serde_json::json!({"final_capture": false}));

        let json =
            serde_json::to_value(PaymentCaptureRequest::amount(Money::new("USD", dec!(4.50))).final_capture())
                .unwrap();
        assert_eq!(json["amount"]["value"], "4.50");
        assert_eq!(json["final_capture"], true);
    }

    #[test]
    fn test_capture_decodes() {
        let capture: Capture = serde_json::from_value(serde_json::json!({
            "id": "2GG279541U471931P",
            "status": "COMPLETED",
            "amount": {"currency_code": "USD", "value": "10.99"},
            "final_capture": true,
            "seller_receivable_breakdown": {
                "gross_amount": {"currency_code": "USD", "value": "10.99"},
                "paypal_fee": {"currency_code": "USD", "value": "0.33"},
                "net_amount": {"currency_code": "USD", "value": "10.66"}
            },
            "create_time": "2018-04-01T21:20:49Z",
            "update_time": "2018-04-01T21:20:49Z"
        }))
        .unwrap();

        assert_eq!(capture.status, Some(CaptureStatus::Completed));
        let breakdown = capture.seller_receivable_breakdown.unwrap();
        assert_eq!(breakdown.net_amount.unwrap().value, dec!(10.66));
    }

    #[test]
    fn test_refund_request_shapes() {
        assert_eq!(serde_json::to_value(RefundRequest::full()).unwrap(), serde_json::json!({}));

        let json = serde_json::to_value(
            RefundRequest::partial(Money::new("USD", dec!(1.00))).note("Defective"),
        )
        .unwrap();
        assert_eq!(json["amount"]["currency_code"], "USD");
        assert_eq!(json["note_to_payer"], "Defective");
    }

    #[test]
    fn test_reauthorize_without_amount_is_empty_object() {
        let json = serde_json::to_value(ReauthorizeRequest::default()).unwrap();
        assert_eq!(json, serde_json::json!({}));
    }
}
