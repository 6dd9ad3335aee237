use super::types::QueryParameters;

/// Builder for [`QueryParameters`].
///
/// ```
/// use nav_digest::core::*;
///
/// let params = QueryParametersBuilder::issue_date_range("2024-01-01", "2024-01-31")
///     .tax_number("12345678")
///     .currency("HUF")
///     .build();
///
/// assert_eq!(params.date_from.as_deref(), Some("2024-01-01"));
/// assert_eq!(params.currency.as_deref(), Some("HUF"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct QueryParametersBuilder {
    params: QueryParameters,
}

impl QueryParametersBuilder {
    /// Start with no fields set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with an issue-date range (`invoiceIssueDate`).
    pub fn issue_date_range(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self::new().date_from(from).date_to(to)
    }

    /// Start with an insert-timestamp range (`insDate`).
    pub fn ins_date_range(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self::new().date_time_from(from).date_time_to(to)
    }

    pub fn date_from(mut self, date: impl Into<String>) -> Self {
        self.params.date_from = Some(date.into());
        self
    }

    pub fn date_to(mut self, date: impl Into<String>) -> Self {
        self.params.date_to = Some(date.into());
        self
    }

    pub fn date_time_from(mut self, timestamp: impl Into<String>) -> Self {
        self.params.date_time_from = Some(timestamp.into());
        self
    }

    pub fn date_time_to(mut self, timestamp: impl Into<String>) -> Self {
        self.params.date_time_to = Some(timestamp.into());
        self
    }

    pub fn tax_number(mut self, tax_number: impl Into<String>) -> Self {
        self.params.tax_number = Some(tax_number.into());
        self
    }

    pub fn group_member_tax_number(mut self, tax_number: impl Into<String>) -> Self {
        self.params.group_member_tax_number = Some(tax_number.into());
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.params.name = Some(name.into());
        self
    }

    pub fn invoice_category(mut self, category: impl Into<String>) -> Self {
        self.params.invoice_category = Some(category.into());
        self
    }

    pub fn payment_method(mut self, method: impl Into<String>) -> Self {
        self.params.payment_method = Some(method.into());
        self
    }

    pub fn invoice_appearance(mut self, appearance: impl Into<String>) -> Self {
        self.params.invoice_appearance = Some(appearance.into());
        self
    }

    pub fn source(mut self, source: impl Into<String>) -> Self {
        self.params.source = Some(source.into());
        self
    }

    pub fn currency(mut self, code: impl Into<String>) -> Self {
        self.params.currency = Some(code.into());
        self
    }

    pub fn transaction_id(mut self, id: impl Into<String>) -> Self {
        self.params.transaction_id = Some(id.into());
        self
    }

    pub fn index(mut self, index: u32) -> Self {
        self.params.index = Some(index);
        self
    }

    pub fn invoice_operation(mut self, operation: impl Into<String>) -> Self {
        self.params.invoice_operation = Some(operation.into());
        self
    }

    pub fn build(self) -> QueryParameters {
        self.params
    }
}
