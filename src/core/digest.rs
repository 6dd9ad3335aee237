use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use super::error::CoercionWarning;

/// Reply as handed back by a transport, before normalization.
#[derive(Debug, Clone, PartialEq)]
pub struct RawReply {
    /// Decoded reply document, keyed by its root element
    /// (e.g. `{"QueryInvoiceDigestResponse": {...}}`).
    pub body: Value,
    /// The request document exactly as it was sent.
    pub request_xml: String,
}

/// Summary of one reported invoice.
///
/// Everything except the two amount fields is forwarded as text.
/// Fields not listed here end up in `other`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DigestEntry {
    #[serde(deserialize_with = "scalar_text")]
    pub invoice_number: Option<String>,
    #[serde(deserialize_with = "scalar_text")]
    pub invoice_operation: Option<String>,
    #[serde(deserialize_with = "scalar_text")]
    pub invoice_category: Option<String>,
    #[serde(deserialize_with = "scalar_text")]
    pub invoice_issue_date: Option<String>,
    #[serde(deserialize_with = "scalar_text")]
    pub supplier_tax_number: Option<String>,
    #[serde(deserialize_with = "scalar_text")]
    pub supplier_group_member_tax_number: Option<String>,
    #[serde(deserialize_with = "scalar_text")]
    pub supplier_name: Option<String>,
    #[serde(deserialize_with = "scalar_text")]
    pub customer_tax_number: Option<String>,
    #[serde(deserialize_with = "scalar_text")]
    pub customer_group_member_tax_number: Option<String>,
    #[serde(deserialize_with = "scalar_text")]
    pub customer_name: Option<String>,
    #[serde(deserialize_with = "scalar_text")]
    pub payment_method: Option<String>,
    #[serde(deserialize_with = "scalar_text")]
    pub payment_date: Option<String>,
    #[serde(deserialize_with = "scalar_text")]
    pub invoice_appearance: Option<String>,
    #[serde(deserialize_with = "scalar_text")]
    pub source: Option<String>,
    #[serde(deserialize_with = "scalar_text")]
    pub invoice_delivery_date: Option<String>,
    #[serde(deserialize_with = "scalar_text")]
    pub currency: Option<String>,
    /// Net amount in the invoice currency.
    pub invoice_net_amount: Option<Decimal>,
    #[serde(rename = "invoiceNetAmountHUF", deserialize_with = "scalar_text")]
    pub invoice_net_amount_huf: Option<String>,
    #[serde(deserialize_with = "scalar_text")]
    pub invoice_vat_amount: Option<String>,
    /// VAT amount in the reporting currency (HUF).
    #[serde(rename = "invoiceVatAmountHUF")]
    pub invoice_vat_amount_huf: Option<Decimal>,
    #[serde(deserialize_with = "scalar_text")]
    pub transaction_id: Option<String>,
    #[serde(deserialize_with = "scalar_text")]
    pub index: Option<String>,
    #[serde(deserialize_with = "scalar_text")]
    pub original_invoice_number: Option<String>,
    #[serde(deserialize_with = "scalar_text")]
    pub modification_index: Option<String>,
    #[serde(deserialize_with = "scalar_text")]
    pub ins_date: Option<String>,
    #[serde(deserialize_with = "scalar_text")]
    pub completeness_indicator: Option<String>,
    #[serde(flatten)]
    pub other: BTreeMap<String, Value>,
}

/// Reads a text field, taking numbers and booleans as their literal text.
fn scalar_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Null => Ok(None),
        Value::String(s) => Ok(Some(s)),
        Value::Number(n) => Ok(Some(n.to_string())),
        Value::Bool(b) => Ok(Some(b.to_string())),
        other => Err(D::Error::custom(format!("expected text, found {other}"))),
    }
}

/// Normalized `invoiceDigestResult`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DigestResult {
    /// `None` when the service sent no value or one that is not a number.
    pub current_page: Option<u32>,
    pub available_page: Option<u32>,
    /// Always a list, even when the service sent zero or one entry.
    #[serde(default)]
    pub invoice_digest: Vec<DigestEntry>,
    /// The outbound request document, for auditing.
    pub request_xml: String,
    /// Fields that could not be coerced to numbers under the lenient policy.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<CoercionWarning>,
    /// Result fields not listed here, passed through as received.
    #[serde(flatten)]
    pub other: BTreeMap<String, Value>,
}

impl DigestResult {
    /// Whether another page can be requested after this one.
    pub fn has_next_page(&self) -> bool {
        matches!(
            (self.current_page, self.available_page),
            (Some(current), Some(available)) if current < available
        )
    }
}

/// Outcome of a digest query.
#[derive(Debug, Clone, PartialEq)]
pub enum QueryOutcome {
    /// The reply carried an `invoiceDigestResult`.
    Digest(DigestResult),
    /// The reply carried no digest result; the response object is returned as received.
    NoResult(Value),
}

impl QueryOutcome {
    pub fn digest(&self) -> Option<&DigestResult> {
        match self {
            Self::Digest(result) => Some(result),
            Self::NoResult(_) => None,
        }
    }

    pub fn into_digest(self) -> Option<DigestResult> {
        match self {
            Self::Digest(result) => Some(result),
            Self::NoResult(_) => None,
        }
    }

    /// Digest entries, empty for [`QueryOutcome::NoResult`].
    pub fn entries(&self) -> &[DigestEntry] {
        self.digest()
            .map(|r| r.invoice_digest.as_slice())
            .unwrap_or_default()
    }
}
