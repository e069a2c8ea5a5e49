//! Enumeration types for the PayPal API.
//!
//! Status enums carry a catch-all `Unknown` variant so a new value added on
//! PayPal's side does not break deserialization of the whole resource.

use serde::{Deserialize, Serialize};

/// What the merchant intends to do once the payer approves an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentIntent {
    /// Capture payment immediately after the payer approves.
    Capture,
    /// Authorize and hold funds; capture separately later.
    ///
    /// Authorizations are honored for three days and can be captured for
    /// up to 29 days.
    Authorize,
}

/// Status of a checkout order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    /// Created with the specified context.
    Created,
    /// Saved and persisted; in progress until a final capture.
    Saved,
    /// The payer approved the payment.
    Approved,
    /// All purchase units were voided.
    Voided,
    /// Authorized, or the authorization was captured.
    Completed,
    /// Further payer action is required.
    PayerActionRequired,
    /// Unrecognized status
    #[serde(other)]
    Unknown,
}

impl OrderStatus {
    /// Returns `true` if no further transitions are expected.
    pub fn is_terminal(&self) -> bool {
        matches!(self, OrderStatus::Voided | OrderStatus::Completed)
    }
}

/// Status of an authorized payment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AuthorizationStatus {
    /// Created; nothing captured yet.
    Created,
    /// One or more captures exist.
    Captured,
    /// PayPal could not authorize funds.
    Denied,
    /// The authorization expired.
    Expired,
    /// Captured for less than the authorized amount.
    PartiallyCaptured,
    /// Voided; no more captures possible.
    Voided,
    /// Pending, see `status_details`.
    Pending,
    /// Unrecognized status
    #[serde(other)]
    Unknown,
}

/// Status of a captured payment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CaptureStatus {
    /// Funds credited to the payee.
    Completed,
    /// Funds could not be captured.
    Declined,
    /// Part of the capture was refunded.
    PartiallyRefunded,
    /// Funds not yet credited, see `status_details`.
    Pending,
    /// The full capture was refunded.
    Refunded,
    /// Capture failed.
    Failed,
    /// Unrecognized status
    #[serde(other)]
    Unknown,
}

/// Status of a refund.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RefundStatus {
    /// Cancelled.
    Cancelled,
    /// Pending, see `status_details.reason`.
    Pending,
    /// Funds were debited back to the payer.
    Completed,
    /// Refund failed.
    Failed,
    /// Unrecognized status
    #[serde(other)]
    Unknown,
}

/// Status of a dispute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DisputeStatus {
    /// Open.
    Open,
    /// Waiting on the customer.
    WaitingForBuyerResponse,
    /// Waiting on the merchant.
    WaitingForSellerResponse,
    /// Under review by PayPal.
    UnderReview,
    /// Resolved.
    Resolved,
    /// Any other status.
    Other,
    /// Unrecognized status
    #[serde(other)]
    Unknown,
}

impl DisputeStatus {
    /// Returns `true` if the merchant is expected to act.
    pub fn awaits_seller(&self) -> bool {
        matches!(self, DisputeStatus::WaitingForSellerResponse)
    }
}

/// Why the customer opened a dispute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DisputeReason {
    /// Merchandise or service never arrived.
    MerchandiseOrServiceNotReceived,
    /// Merchandise or service not as described.
    MerchandiseOrServiceNotAsDescribed,
    /// The customer did not authorize the purchase.
    Unauthorised,
    /// A refund or credit was not processed.
    CreditNotProcessed,
    /// Duplicate transaction.
    DuplicateTransaction,
    /// Incorrect amount charged.
    IncorrectAmount,
    /// Paid through other means.
    PaymentByOtherMeans,
    /// Charged for a cancelled subscription.
    CanceledRecurringBilling,
    /// Problem with the remittance.
    ProblemWithRemittance,
    /// Other.
    Other,
    /// Unrecognized reason
    #[serde(other)]
    Unknown,
}

/// Lifecycle stage of a dispute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DisputeStage {
    /// Customer and merchant try to settle without PayPal.
    Inquiry,
    /// Escalated to PayPal for a decision.
    Chargeback,
    /// First merchant appeal.
    PreArbitration,
    /// Second merchant appeal.
    Arbitration,
    /// Unrecognized stage
    #[serde(other)]
    Unknown,
}

/// Status of a transaction referenced by a dispute or payout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TransactionStatus {
    /// Processing completed.
    Completed,
    /// Not claimed by the recipient yet; returned after 30 days.
    Unclaimed,
    /// Denied.
    Denied,
    /// Failed.
    Failed,
    /// On hold.
    Held,
    /// Waiting to be processed.
    Pending,
    /// Partially refunded.
    PartiallyRefunded,
    /// Refunded.
    Refunded,
    /// Reversed by a chargeback or other reversal.
    Reversed,
    /// Cancelled.
    Cancelled,
    /// Funds returned to the sender.
    Returned,
    /// Blocked.
    Blocked,
    /// Successful (payout items).
    Success,
    /// On hold pending review (payout items).
    Onhold,
    /// Unrecognized status
    #[serde(other)]
    Unknown,
}

/// Status of a payout batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BatchStatus {
    /// Rejected by PayPal.
    Denied,
    /// Waiting to be processed.
    Pending,
    /// Being processed.
    Processing,
    /// All items processed.
    Success,
    /// Cancelled.
    Canceled,
    /// Unrecognized status
    #[serde(other)]
    Unknown,
}

/// Shipment tracking status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TrackingStatus {
    /// Cancelled; the tracking number no longer applies.
    Cancelled,
    /// Already delivered when the number was uploaded.
    Delivered,
    /// Picked up or delivered in person.
    LocalPickup,
    /// Temporarily held.
    OnHold,
    /// Shipped and on the way.
    Shipped,
    /// Shipment created.
    ShipmentCreated,
    /// Dropped off.
    DroppedOff,
    /// In transit.
    InTransit,
    /// Returned.
    Returned,
    /// Label printed.
    LabelPrinted,
    /// Shipment error.
    Error,
    /// Unconfirmed.
    Unconfirmed,
    /// Pick-up failed.
    PickupFailed,
    /// Delivery delayed.
    DeliveryDelayed,
    /// Delivery scheduled.
    DeliveryScheduled,
    /// Delivery failed.
    DeliveryFailed,
    /// Being returned.
    Inreturn,
    /// In process.
    InProcess,
    /// New.
    New,
    /// Void.
    Void,
    /// Processed.
    Processed,
    /// Not shipped.
    NotShipped,
    /// Unrecognized status
    #[serde(other)]
    Unknown,
}

/// Resource type carried by a webhook event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum WebhookResourceType {
    /// A checkout order
    CheckoutOrder,
    /// A payment
    Payment,
    /// A capture
    Capture,
    /// An order
    Order,
    /// A refund
    Refund,
    /// An authorization
    Authorization,
    /// A dispute
    Dispute,
    /// A merchant onboarding record
    MerchantOnboarding,
    /// Unrecognized resource type
    #[serde(other)]
    Unknown,
}

/// Category of a purchased item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ItemCategory {
    /// Digital goods
    DigitalGoods,
    /// Physical goods
    PhysicalGoods,
    /// Donation
    Donation,
}

/// Where the shipping address comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ShippingPreference {
    /// Use the address on file in the payer's account.
    GetFromFile,
    /// Do not collect a shipping address.
    NoShipping,
    /// Use the address supplied by the merchant.
    SetProvidedAddress,
}

/// Which page the payer lands on at PayPal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LandingPage {
    /// Log in to PayPal.
    Login,
    /// Enter card details (guest checkout).
    Billing,
    /// Let PayPal decide.
    NoPreference,
}

/// Label of the approval button at PayPal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UserAction {
    /// "Continue": the merchant finalizes the payment afterwards.
    Continue,
    /// "Pay Now": payment completes on approval.
    PayNow,
}

/// Type of a payout recipient identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RecipientType {
    /// Email address
    Email,
    /// Phone number
    Phone,
    /// Encrypted PayPal account number
    PaypalId,
}

/// Kind of phone number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PhoneType {
    /// Fax
    Fax,
    /// Home
    Home,
    /// Mobile
    Mobile,
    /// Other
    Other,
    /// Pager
    Pager,
}

/// JSON Patch operation verb.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PatchOp {
    /// Add a value
    Add,
    /// Remove a value
    Remove,
    /// Replace a value
    Replace,
    /// Move a value
    Move,
    /// Copy a value
    Copy,
    /// Test a value
    Test,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_wire_names() {
        let status: OrderStatus = serde_json::from_str(r#""PAYER_ACTION_REQUIRED""#).unwrap();
        assert_eq!(status, OrderStatus::PayerActionRequired);

        let status: CaptureStatus = serde_json::from_str(r#""PARTIALLY_REFUNDED""#).unwrap();
        assert_eq!(status, CaptureStatus::PartiallyRefunded);

        assert_eq!(
            serde_json::to_string(&DisputeStatus::WaitingForSellerResponse).unwrap(),
            r#""WAITING_FOR_SELLER_RESPONSE""#
        );
    }

    #[test]
    fn test_unknown_status_is_tolerated() {
        let status: AuthorizationStatus = serde_json::from_str(r#""SOMETHING_NEW""#).unwrap();
        assert_eq!(status, AuthorizationStatus::Unknown);
    }

    #[test]
    fn test_webhook_resource_type() {
        let rt: WebhookResourceType = serde_json::from_str(r#""checkout-order""#).unwrap();
        assert_eq!(rt, WebhookResourceType::CheckoutOrder);
    }

    #[test]
    fn test_order_status_terminal() {
        assert!(OrderStatus::Completed.is_terminal());
        assert!(!OrderStatus::Approved.is_terminal());
    }
}
