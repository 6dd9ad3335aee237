//! Request composition: flat [`QueryParameters`] to the nested `invoiceQueryParams` shape.

use super::types::*;

/// Compose the operation fields of a digest request.
pub fn compose_request(
    page: u32,
    direction: InvoiceDirection,
    params: &QueryParameters,
) -> DigestQuery {
    let invoice_query_params = compose_query(params);
    log::debug!(
        "composed digest query: page={page}, direction={direction}, mandatory={}, additional={}, transaction={}",
        invoice_query_params.mandatory_query_params.is_some(),
        invoice_query_params.additional_query_params.is_some(),
        invoice_query_params.transaction_query_params.is_some(),
    );
    DigestQuery {
        page,
        invoice_direction: direction,
        invoice_query_params,
    }
}

/// Build the three query branches and drop the ones left empty.
pub fn compose_query(params: &QueryParameters) -> InvoiceQueryParams {
    InvoiceQueryParams {
        mandatory_query_params: Some(mandatory_params(params)).filter(|m| !m.is_empty()),
        additional_query_params: Some(additional_params(params)).filter(|a| !a.is_empty()),
        transaction_query_params: Some(transaction_params(params)).filter(|t| !t.is_empty()),
    }
}

/// A complete insert-timestamp pair wins; otherwise fall back to the issue-date range.
fn mandatory_params(params: &QueryParameters) -> MandatoryQueryParams {
    match (
        non_empty(&params.date_time_from),
        non_empty(&params.date_time_to),
    ) {
        (Some(from), Some(to)) => MandatoryQueryParams::InsDate(DateTimeRange {
            date_time_from: from.to_string(),
            date_time_to: to.to_string(),
        }),
        _ => MandatoryQueryParams::InvoiceIssueDate(DateRange {
            date_from: params.date_from.clone(),
            date_to: params.date_to.clone(),
        }),
    }
}

fn additional_params(params: &QueryParameters) -> AdditionalQueryParams {
    AdditionalQueryParams {
        tax_number: params.tax_number.clone(),
        group_member_tax_number: params.group_member_tax_number.clone(),
        name: params.name.clone(),
        invoice_category: params.invoice_category.clone(),
        payment_method: params.payment_method.clone(),
        invoice_appearance: params.invoice_appearance.clone(),
        source: params.source.clone(),
        currency: params.currency.clone(),
    }
}

fn transaction_params(params: &QueryParameters) -> TransactionQueryParams {
    TransactionQueryParams {
        transaction_id: params.transaction_id.clone(),
        index: params.index,
        invoice_operation: params.invoice_operation.clone(),
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}
