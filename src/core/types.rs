use serde::{Deserialize, Serialize};

/// Direction of the queried invoices, seen from the querying taxpayer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum InvoiceDirection {
    /// Invoices issued by the taxpayer.
    Outbound,
    /// Invoices received by the taxpayer.
    Inbound,
}

impl InvoiceDirection {
    /// Wire code (`OUTBOUND` / `INBOUND`).
    pub fn code(&self) -> &'static str {
        match self {
            Self::Outbound => "OUTBOUND",
            Self::Inbound => "INBOUND",
        }
    }
}

impl std::fmt::Display for InvoiceDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

/// Flat bag of filter fields for a digest query.
///
/// Use either `date_from`/`date_to` (invoice issue date) or
/// `date_time_from`/`date_time_to` (system insert timestamp). When both
/// date-time ends are present they win over the issue-date range.
///
/// Values are forwarded as given; no format checks happen here.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct QueryParameters {
    /// Issue date lower bound (e.g. `2024-01-01`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_from: Option<String>,
    /// Issue date upper bound.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_to: Option<String>,
    /// UTC insert timestamp lower bound (e.g. `2024-01-01T00:00:00Z`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_time_from: Option<String>,
    /// UTC insert timestamp upper bound.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_time_to: Option<String>,
    /// Tax number of the supplier or customer.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax_number: Option<String>,
    /// Tax number of a VAT group member.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_member_tax_number: Option<String>,
    /// Left-anchored name match on the supplier or customer.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub invoice_category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_method: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub invoice_appearance: Option<String>,
    /// Data report source.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transaction_id: Option<String>,
    /// Index of the invoice within the transaction.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub index: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub invoice_operation: Option<String>,
}

/// Issue-date range (`invoiceIssueDate`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DateRange {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_from: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_to: Option<String>,
}

impl DateRange {
    pub fn is_empty(&self) -> bool {
        self.date_from.is_none() && self.date_to.is_none()
    }

    /// Both ends set to non-empty dates.
    pub fn is_complete(&self) -> bool {
        [&self.date_from, &self.date_to]
            .into_iter()
            .all(|end| end.as_deref().is_some_and(|d| !d.is_empty()))
    }
}

/// Insert-timestamp range (`insDate`). Only built when both ends are known.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DateTimeRange {
    pub date_time_from: String,
    pub date_time_to: String,
}

/// The mandatory filter dimension of a query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MandatoryQueryParams {
    InvoiceIssueDate(DateRange),
    InsDate(DateTimeRange),
}

impl MandatoryQueryParams {
    /// True for an issue-date range with neither end set.
    pub fn is_empty(&self) -> bool {
        match self {
            Self::InvoiceIssueDate(range) => range.is_empty(),
            Self::InsDate(_) => false,
        }
    }
}

/// Optional supplier/customer and invoice-attribute filters.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdditionalQueryParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_member_tax_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub invoice_category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_method: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub invoice_appearance: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
}

impl AdditionalQueryParams {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Filters scoping the query to one data-report transaction.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionQueryParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transaction_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub index: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub invoice_operation: Option<String>,
}

impl TransactionQueryParams {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// The `invoiceQueryParams` container. Field order is the wire order.
///
/// A branch that would be empty is `None` and is not serialized.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceQueryParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mandatory_query_params: Option<MandatoryQueryParams>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub additional_query_params: Option<AdditionalQueryParams>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transaction_query_params: Option<TransactionQueryParams>,
}

impl InvoiceQueryParams {
    pub fn is_empty(&self) -> bool {
        self.mandatory_query_params.is_none()
            && self.additional_query_params.is_none()
            && self.transaction_query_params.is_none()
    }
}

/// Operation-specific fields injected into the request envelope.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DigestQuery {
    pub page: u32,
    pub invoice_direction: InvoiceDirection,
    pub invoice_query_params: InvoiceQueryParams,
}
