//! Property-based tests for query composition and reply normalization.
//!
//! Run with: `cargo test --test proptest_tests`

use nav_digest::core::*;
use proptest::prelude::*;
use rust_decimal::Decimal;
use serde_json::{Value, json};

// ── Proptest Strategies ─────────────────────────────────────────────────────

fn arb_text() -> impl Strategy<Value = Option<String>> {
    prop::option::of("[A-Za-z0-9 .:-]{1,16}")
}

fn arb_params() -> impl Strategy<Value = QueryParameters> {
    (
        (arb_text(), arb_text(), arb_text(), arb_text()),
        (arb_text(), arb_text(), arb_text(), arb_text()),
        (arb_text(), arb_text(), arb_text(), arb_text()),
        (arb_text(), prop::option::of(0u32..1000), arb_text()),
    )
        .prop_map(
            |(
                (date_from, date_to, date_time_from, date_time_to),
                (tax_number, group_member_tax_number, name, invoice_category),
                (payment_method, invoice_appearance, source, currency),
                (transaction_id, index, invoice_operation),
            )| QueryParameters {
                date_from,
                date_to,
                date_time_from,
                date_time_to,
                tax_number,
                group_member_tax_number,
                name,
                invoice_category,
                payment_method,
                invoice_appearance,
                source,
                currency,
                transaction_id,
                index,
                invoice_operation,
            },
        )
}

/// Amount with two decimal places, positive or negative.
fn arb_amount() -> impl Strategy<Value = Decimal> {
    (-10_000_000i64..10_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

fn entries(amounts: &[Decimal]) -> Vec<Value> {
    amounts
        .iter()
        .enumerate()
        .map(|(i, a)| {
            json!({
                "invoiceNumber": format!("INV-{i}"),
                "invoiceNetAmount": a.to_string(),
                "invoiceVatAmountHUF": a.to_string()
            })
        })
        .collect()
}

fn normalize(digest: Value, current: &str, available: &str) -> DigestResult {
    normalize_response(
        RawReply {
            body: json!({"QueryInvoiceDigestResponse": {"invoiceDigestResult": {
                "currentPage": current,
                "availablePage": available,
                "invoiceDigest": digest
            }}}),
            request_xml: String::new(),
        },
        CoercionPolicy::Strict,
    )
    .unwrap()
    .into_digest()
    .unwrap()
}

// ── Composition properties ──────────────────────────────────────────────────

proptest! {
    #[test]
    fn mandatory_mode_follows_date_time_pair(params in arb_params()) {
        let q = compose_query(&params);
        let pair = params.date_time_from.is_some() && params.date_time_to.is_some();
        match q.mandatory_query_params {
            Some(MandatoryQueryParams::InsDate(range)) => {
                prop_assert!(pair);
                prop_assert_eq!(Some(range.date_time_from), params.date_time_from);
                prop_assert_eq!(Some(range.date_time_to), params.date_time_to);
            }
            Some(MandatoryQueryParams::InvoiceIssueDate(range)) => {
                prop_assert!(!pair);
                prop_assert_eq!(range.date_from, params.date_from);
                prop_assert_eq!(range.date_to, params.date_to);
            }
            None => {
                prop_assert!(!pair);
                prop_assert!(params.date_from.is_none() && params.date_to.is_none());
            }
        }
    }

    #[test]
    fn allow_listed_fields_copied_or_absent(params in arb_params()) {
        let q = compose_query(&params);
        let additional = q.additional_query_params.unwrap_or_default();
        prop_assert_eq!(&additional.tax_number, &params.tax_number);
        prop_assert_eq!(&additional.group_member_tax_number, &params.group_member_tax_number);
        prop_assert_eq!(&additional.name, &params.name);
        prop_assert_eq!(&additional.invoice_category, &params.invoice_category);
        prop_assert_eq!(&additional.payment_method, &params.payment_method);
        prop_assert_eq!(&additional.invoice_appearance, &params.invoice_appearance);
        prop_assert_eq!(&additional.source, &params.source);
        prop_assert_eq!(&additional.currency, &params.currency);

        let transaction = q.transaction_query_params.unwrap_or_default();
        prop_assert_eq!(&transaction.transaction_id, &params.transaction_id);
        prop_assert_eq!(transaction.index, params.index);
        prop_assert_eq!(&transaction.invoice_operation, &params.invoice_operation);
    }

    #[test]
    fn no_empty_branch_is_serialized(params in arb_params()) {
        let json = serde_json::to_value(compose_query(&params)).unwrap();
        for (_, branch) in json.as_object().unwrap() {
            let branch = branch.as_object().unwrap();
            prop_assert!(!branch.is_empty());
            for (_, nested) in branch {
                if let Some(nested) = nested.as_object() {
                    prop_assert!(!nested.is_empty());
                }
            }
        }
    }

    #[test]
    fn composition_is_idempotent(params in arb_params(), page in 1u32..100) {
        let a = compose_request(page, InvoiceDirection::Inbound, &params);
        let b = compose_request(page, InvoiceDirection::Inbound, &params);
        prop_assert_eq!(serde_json::to_string(&a).unwrap(), serde_json::to_string(&b).unwrap());
        prop_assert_eq!(a, b);
    }
}

// ── Normalization properties ────────────────────────────────────────────────

proptest! {
    #[test]
    fn list_of_n_stays_n(amounts in prop::collection::vec(arb_amount(), 0..20)) {
        let r = normalize(Value::Array(entries(&amounts)), "1", "1");
        prop_assert_eq!(r.invoice_digest.len(), amounts.len());
        for (entry, amount) in r.invoice_digest.iter().zip(&amounts) {
            prop_assert_eq!(entry.invoice_net_amount, Some(*amount));
            prop_assert_eq!(entry.invoice_vat_amount_huf, Some(*amount));
        }
    }

    #[test]
    fn bare_entry_becomes_one_element(amount in arb_amount()) {
        let single = entries(&[amount]).remove(0);
        let r = normalize(single, "1", "1");
        prop_assert_eq!(r.invoice_digest.len(), 1);
        prop_assert_eq!(r.invoice_digest[0].invoice_net_amount, Some(amount));
    }

    #[test]
    fn page_counters_parse(current in 0u32..100_000, available in 0u32..100_000) {
        let r = normalize(Value::Null, &current.to_string(), &available.to_string());
        prop_assert_eq!(r.current_page, Some(current));
        prop_assert_eq!(r.available_page, Some(available));
        prop_assert_eq!(r.has_next_page(), current < available);
    }
}
