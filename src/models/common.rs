//! Shapes shared by several resources: money, links, names, addresses.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::enums::{PatchOp, PhoneType};

/// A currency amount as used by the v2 APIs.
///
/// The value is sent as a string on the wire; it is held as a [`Decimal`]
/// so arithmetic does not go through floating point.
///
/// # Example
///
/// ```
/// use paypal_rs::models::Money;
/// use rust_decimal_macros::dec;
///
/// let m = Money::new("USD", dec!(10.99));
/// assert_eq!(
///     serde_json::to_string(&m).unwrap(),
///     r#"{"currency_code":"USD","value":"10.99"}"#
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Money {
    /// ISO-4217 currency code
    pub currency_code: String,
    /// Amount
    #[serde(with = "rust_decimal::serde::str")]
    pub value: Decimal,
}

impl Money {
    /// Create an amount in the given currency.
    pub fn new(currency_code: impl Into<String>, value: Decimal) -> Self {
        Self {
            currency_code: currency_code.into(),
            value,
        }
    }
}

/// A currency amount as used by the v1 payouts API (`currency` instead of
/// `currency_code`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayoutAmount {
    /// ISO-4217 currency code
    pub currency: String,
    /// Amount
    #[serde(with = "rust_decimal::serde::str")]
    pub value: Decimal,
}

impl PayoutAmount {
    /// Create an amount in the given currency.
    pub fn new(currency: impl Into<String>, value: Decimal) -> Self {
        Self {
            currency: currency.into(),
            value,
        }
    }
}

/// Breakdown of a purchase unit amount.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AmountBreakdown {
    /// Sum of item prices
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub item_total: Option<Money>,
    /// Shipping fee
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shipping: Option<Money>,
    /// Handling fee
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub handling: Option<Money>,
    /// Total tax
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tax_total: Option<Money>,
    /// Insurance fee
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub insurance: Option<Money>,
    /// Shipping discount
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shipping_discount: Option<Money>,
    /// Item discount
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub discount: Option<Money>,
}

/// An amount with an optional breakdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AmountWithBreakdown {
    /// ISO-4217 currency code
    pub currency_code: String,
    /// Total amount
    #[serde(with = "rust_decimal::serde::str")]
    pub value: Decimal,
    /// How the total is composed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub breakdown: Option<AmountBreakdown>,
}

impl AmountWithBreakdown {
    /// An amount without a breakdown.
    pub fn new(currency_code: impl Into<String>, value: Decimal) -> Self {
        Self {
            currency_code: currency_code.into(),
            value,
            breakdown: None,
        }
    }
}

impl From<Money> for AmountWithBreakdown {
    fn from(m: Money) -> Self {
        Self {
            currency_code: m.currency_code,
            value: m.value,
            breakdown: None,
        }
    }
}

/// A HATEOAS link attached to a resource.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    /// Target URL
    pub href: String,
    /// Relation, e.g. `self`, `approve`, `next`
    #[serde(default)]
    pub rel: String,
    /// HTTP method to use on the target
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub method: Option<String>,
    /// Description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Media type
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enctype: Option<String>,
}

/// Find the link with the given relation.
pub fn find_link<'a>(links: &'a [Link], rel: &str) -> Option<&'a Link> {
    links.iter().find(|l| l.rel.eq_ignore_ascii_case(rel))
}

/// One page of a list endpoint.
///
/// List endpoints return their items together with HATEOAS links; the
/// `next` link, when present, addresses the following page. The webhook
/// events endpoint names its item array `events`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page<T> {
    /// Items on this page
    #[serde(default = "Vec::new", alias = "events")]
    pub items: Vec<T>,
    /// Total item count, when requested
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_items: Option<u64>,
    /// Total page count, when requested
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_pages: Option<u64>,
    /// HATEOAS links
    #[serde(default)]
    pub links: Vec<Link>,
}

impl<T> Page<T> {
    /// URL of the following page, if there is one.
    pub fn next_link(&self) -> Option<&str> {
        find_link(&self.links, "next").map(|l| l.href.as_str())
    }
}

/// A full name as a single string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Name {
    /// Full name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
}

/// A name split into given name and surname.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayerName {
    /// Given (first) name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub given_name: Option<String>,
    /// Surname (family name)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub surname: Option<String>,
}

/// A phone number without country code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhoneNumber {
    /// National number
    pub national_number: String,
}

/// A phone number with its kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhoneWithType {
    /// Kind of phone
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone_type: Option<PhoneType>,
    /// The number
    pub phone_number: PhoneNumber,
}

/// A postal address in PayPal's portable format.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddressPortable {
    /// Street address
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address_line_1: Option<String>,
    /// Suite, apartment, etc.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address_line_2: Option<String>,
    /// State, province or region
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub admin_area_1: Option<String>,
    /// City or town
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub admin_area_2: Option<String>,
    /// Postal code
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub postal_code: Option<String>,
    /// ISO-3166 two-letter country code
    pub country_code: String,
}

/// The merchant receiving a payment.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Payee {
    /// Merchant email address
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email_address: Option<String>,
    /// Merchant account ID
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub merchant_id: Option<String>,
}

/// A fee paid to a platform or partner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlatformFee {
    /// Fee amount
    pub amount: Money,
    /// Who receives the fee
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payee: Option<Payee>,
}

/// Exchange rate applied to a cross-currency payment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExchangeRate {
    /// Source currency
    #[serde(default)]
    pub source_currency: String,
    /// Target currency
    #[serde(default)]
    pub target_currency: String,
    /// Rate, as sent by PayPal
    #[serde(default)]
    pub value: String,
}

/// Seller protection eligibility for a payment.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SellerProtection {
    /// `ELIGIBLE`, `PARTIALLY_ELIGIBLE` or `NOT_ELIGIBLE`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    /// Dispute categories covered
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub dispute_categories: Vec<String>,
}

/// Reason attached to a pending or declined status.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusDetails {
    /// Reason code
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

/// One JSON Patch operation, as used by `PATCH` endpoints.
///
/// # Example
///
/// ```
/// use paypal_rs::models::PatchOperation;
///
/// let op = PatchOperation::replace(
///     "/purchase_units/@reference_id=='default'/description",
///     "Updated description",
/// );
/// assert_eq!(op.path, "/purchase_units/@reference_id=='default'/description");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatchOperation {
    /// Operation verb
    pub op: PatchOp,
    /// JSON pointer to the target
    pub path: String,
    /// New value, for operations that take one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<serde_json::Value>,
    /// Source pointer, for `move` and `copy`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from: Option<String>,
}

impl PatchOperation {
    /// A `replace` operation.
    pub fn replace(path: impl Into<String>, value: impl Into<serde_json::Value>) -> Self {
        Self {
            op: PatchOp::Replace,
            path: path.into(),
            value: Some(value.into()),
            from: None,
        }
    }

    /// An `add` operation.
    pub fn add(path: impl Into<String>, value: impl Into<serde_json::Value>) -> Self {
        Self {
            op: PatchOp::Add,
            path: path.into(),
            value: Some(value.into()),
            from: None,
        }
    }

    /// A `remove` operation.
    pub fn remove(path: impl Into<String>) -> Self {
        Self {
            op: PatchOp::Remove,
            path: path.into(),
            value: None,
            from: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_money_round_trips_as_string() {
        let m: Money = serde_json::from_str(r#"{"currency_code":"EUR","value":"100.00"}"#).unwrap();
        assert_eq!(m.value, dec!(100.00));
        assert_eq!(m.currency_code, "EUR");
    }

    #[test]
    fn test_find_link() {
        let links: Vec<Link> = serde_json::from_value(serde_json::json!([
            {"href": "https://api-m.paypal.com/v2/checkout/orders/1", "rel": "self", "method": "GET"},
            {"href": "https://www.paypal.com/checkoutnow?token=1", "rel": "approve", "method": "GET"}
        ]))
        .unwrap();

        let approve = find_link(&links, "approve").unwrap();
        assert_eq!(approve.href, "https://www.paypal.com/checkoutnow?token=1");
        assert!(find_link(&links, "next").is_none());
    }

    #[test]
    fn test_page_next_link() {
        let page: Page<serde_json::Value> = serde_json::from_value(serde_json::json!({
            "events": [{"id": "WH-1"}, {"id": "WH-2"}],
            "links": [
                {"href": "https://api-m.sandbox.paypal.com/v1/notifications/webhooks-events?page=2", "rel": "next"}
            ]
        }))
        .unwrap();

        assert_eq!(page.items.len(), 2);
        assert_eq!(
            page.next_link(),
            Some("https://api-m.sandbox.paypal.com/v1/notifications/webhooks-events?page=2")
        );

        let last: Page<serde_json::Value> = serde_json::from_str(r#"{"items":[]}"#).unwrap();
        assert!(last.next_link().is_none());
    }

    #[test]
    fn test_patch_remove_omits_value() {
        let json = serde_json::to_value(PatchOperation::remove("/purchase_units/@reference_id=='a'/shipping")).unwrap();
        assert_eq!(json["op"], "remove");
        assert!(json.get("value").is_none());
    }
}
