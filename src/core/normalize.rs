//! Reply normalization: text counters and amounts to numbers, digest list to `Vec`.

use std::str::FromStr;

use rust_decimal::Decimal;
use serde_json::Value;

use super::RESPONSE_ROOT;
use super::config::CoercionPolicy;
use super::digest::{DigestEntry, DigestResult, QueryOutcome, RawReply};
use super::error::{CoercionWarning, DigestError};

const DIGEST_RESULT: &str = "invoiceDigestResult";
const DIGEST_LIST: &str = "invoiceDigest";
const CURRENT_PAGE: &str = "currentPage";
const AVAILABLE_PAGE: &str = "availablePage";
const NET_AMOUNT: &str = "invoiceNetAmount";
const VAT_AMOUNT_HUF: &str = "invoiceVatAmountHUF";

/// Normalize a raw digest reply.
///
/// A reply without an `invoiceDigestResult` is returned untouched as
/// [`QueryOutcome::NoResult`].
///
/// # Errors
///
/// `DigestError::Decode` if the reply lacks the response root or an entry is
/// not an object; `DigestError::Coercion` for unparseable numbers under
/// [`CoercionPolicy::Strict`].
pub fn normalize_response(
    reply: RawReply,
    policy: CoercionPolicy,
) -> Result<QueryOutcome, DigestError> {
    let RawReply { body, request_xml } = reply;
    let mut response = take_response(body)?;

    if !response.get(DIGEST_RESULT).is_some_and(is_present) {
        log::debug!("reply carries no {DIGEST_RESULT}");
        return Ok(QueryOutcome::NoResult(response));
    }
    let Value::Object(mut fields) = response
        .get_mut(DIGEST_RESULT)
        .map(Value::take)
        .unwrap_or_default()
    else {
        return Err(DigestError::Decode(format!("{DIGEST_RESULT} is not an object")));
    };

    let mut coercer = Coercer::new(policy);
    let current_page = coercer.count(CURRENT_PAGE, fields.remove(CURRENT_PAGE).as_ref())?;
    let available_page = coercer.count(AVAILABLE_PAGE, fields.remove(AVAILABLE_PAGE).as_ref())?;

    let invoice_digest = into_list(fields.remove(DIGEST_LIST))
        .into_iter()
        .enumerate()
        .map(|(i, item)| normalize_entry(i, item, &mut coercer))
        .collect::<Result<Vec<_>, _>>()?;

    log::debug!(
        "normalized digest page {current_page:?}/{available_page:?} with {} entries",
        invoice_digest.len()
    );

    Ok(QueryOutcome::Digest(DigestResult {
        current_page,
        available_page,
        invoice_digest,
        request_xml,
        warnings: coercer.warnings,
        other: fields.into_iter().collect(),
    }))
}

fn take_response(body: Value) -> Result<Value, DigestError> {
    match body {
        Value::Object(mut root) => root
            .remove(RESPONSE_ROOT)
            .ok_or_else(|| DigestError::Decode(format!("reply has no {RESPONSE_ROOT}"))),
        _ => Err(DigestError::Decode("reply is not an object".into())),
    }
}

/// Wrap a bare entry into a one-element list; missing or blank means no entries.
fn into_list(value: Option<Value>) -> Vec<Value> {
    match value {
        Some(Value::Array(items)) => items,
        Some(v) if is_present(&v) => vec![v],
        _ => Vec::new(),
    }
}

fn normalize_entry(
    position: usize,
    item: Value,
    coercer: &mut Coercer,
) -> Result<DigestEntry, DigestError> {
    let Value::Object(mut map) = item else {
        return Err(DigestError::Decode(format!(
            "{DIGEST_LIST}[{position}] is not an object"
        )));
    };
    let net = map.remove(NET_AMOUNT);
    let vat = map.remove(VAT_AMOUNT_HUF);

    let mut entry: DigestEntry = serde_json::from_value(Value::Object(map))
        .map_err(|e| DigestError::Decode(format!("{DIGEST_LIST}[{position}]: {e}")))?;
    entry.invoice_net_amount =
        coercer.amount(&format!("{DIGEST_LIST}[{position}].{NET_AMOUNT}"), net.as_ref())?;
    entry.invoice_vat_amount_huf =
        coercer.amount(&format!("{DIGEST_LIST}[{position}].{VAT_AMOUNT_HUF}"), vat.as_ref())?;
    Ok(entry)
}

/// Empty strings and nulls count as absent.
fn is_present(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::String(s) => !s.is_empty(),
        _ => true,
    }
}

struct Coercer {
    policy: CoercionPolicy,
    warnings: Vec<CoercionWarning>,
}

impl Coercer {
    fn new(policy: CoercionPolicy) -> Self {
        Self {
            policy,
            warnings: Vec::new(),
        }
    }

    fn count(&mut self, field: &str, value: Option<&Value>) -> Result<Option<u32>, DigestError> {
        self.coerce(field, value, |s| s.parse::<u32>().ok())
    }

    fn amount(&mut self, field: &str, value: Option<&Value>) -> Result<Option<Decimal>, DigestError> {
        self.coerce(field, value, parse_decimal)
    }

    fn coerce<T>(
        &mut self,
        field: &str,
        value: Option<&Value>,
        parse: impl Fn(&str) -> Option<T>,
    ) -> Result<Option<T>, DigestError> {
        let raw = match value {
            None | Some(Value::Null) => return Ok(None),
            Some(Value::String(s)) if s.trim().is_empty() => return Ok(None),
            Some(Value::String(s)) => s.trim().to_string(),
            Some(Value::Number(n)) => n.to_string(),
            Some(other) => other.to_string(),
        };
        if let Some(parsed) = parse(&raw) {
            return Ok(Some(parsed));
        }

        let warning = CoercionWarning::new(field, raw);
        match self.policy {
            CoercionPolicy::Strict => Err(warning.into_error()),
            CoercionPolicy::Lenient => {
                log::warn!("{warning}");
                self.warnings.push(warning);
                Ok(None)
            }
        }
    }
}

fn parse_decimal(s: &str) -> Option<Decimal> {
    Decimal::from_str(s)
        .or_else(|_| Decimal::from_scientific(s))
        .ok()
}
