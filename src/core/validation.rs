use super::error::DigestError;
use super::types::{InvoiceQueryParams, MandatoryQueryParams};

/// Check that a composed query carries a complete mandatory range.
///
/// Only presence is checked; date formats are left to the service.
pub fn check_mandatory_range(query: &InvoiceQueryParams) -> Result<(), DigestError> {
    match &query.mandatory_query_params {
        Some(MandatoryQueryParams::InsDate(_)) => Ok(()),
        Some(MandatoryQueryParams::InvoiceIssueDate(range)) if range.is_complete() => Ok(()),
        _ => Err(DigestError::MissingMandatoryRange),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{QueryParametersBuilder, compose_query};

    #[test]
    fn complete_ranges_pass() {
        let issue =
            compose_query(&QueryParametersBuilder::issue_date_range("2024-01-01", "2024-01-31").build());
        assert!(check_mandatory_range(&issue).is_ok());

        let ins = compose_query(
            &QueryParametersBuilder::ins_date_range("2024-01-01T00:00:00Z", "2024-01-02T00:00:00Z")
                .build(),
        );
        assert!(check_mandatory_range(&ins).is_ok());
    }

    #[test]
    fn missing_range_fails() {
        let q = compose_query(&QueryParametersBuilder::new().tax_number("12345678").build());
        assert!(matches!(
            check_mandatory_range(&q),
            Err(DigestError::MissingMandatoryRange)
        ));
    }

    #[test]
    fn half_range_fails() {
        let q = compose_query(&QueryParametersBuilder::new().date_from("2024-01-01").build());
        assert!(check_mandatory_range(&q).is_err());
    }

    #[test]
    fn empty_issue_dates_fail() {
        let q = compose_query(&QueryParametersBuilder::issue_date_range("", "").build());
        assert!(matches!(
            check_mandatory_range(&q),
            Err(DigestError::MissingMandatoryRange)
        ));

        let q = compose_query(&QueryParametersBuilder::issue_date_range("2024-01-01", "").build());
        assert!(check_mandatory_range(&q).is_err());
    }
}
