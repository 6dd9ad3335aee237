use thiserror::Error;

/// Errors that can occur while preparing, sending, or normalizing a digest query.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum DigestError {
    /// Neither a complete issue-date range nor a complete insert-date range was supplied.
    #[error(
        "missing mandatory query range: supply dateFrom/dateTo or dateTimeFrom/dateTimeTo"
    )]
    MissingMandatoryRange,

    /// A numeric field could not be parsed and the strict coercion policy is active.
    #[error("cannot coerce {field} to a number: {raw:?}")]
    Coercion { field: String, raw: String },

    /// The reply did not have the expected shape.
    #[error("decode error: {0}")]
    Decode(String),

    /// XML generation or parsing error.
    #[error("XML error: {0}")]
    Xml(String),

    /// Network or HTTP-level failure reported by the transport.
    #[error("transport error: {0}")]
    Transport(String),

    /// The remote service answered with a protocol fault.
    #[error("remote error {code}: {message}")]
    Remote { code: String, message: String },
}

/// A numeric field that could not be coerced under the lenient policy.
///
/// The corresponding value on the result is `None`; callers should treat it
/// as absent.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct CoercionWarning {
    /// Path to the field, e.g. `invoiceDigest[2].invoiceNetAmount`.
    pub field: String,
    /// The raw value as received.
    pub raw: String,
}

impl std::fmt::Display for CoercionWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: not a number ({:?})", self.field, self.raw)
    }
}

impl CoercionWarning {
    pub fn new(field: impl Into<String>, raw: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            raw: raw.into(),
        }
    }

    /// Turn the warning into the error raised under the strict policy.
    pub fn into_error(self) -> DigestError {
        DigestError::Coercion {
            field: self.field,
            raw: self.raw,
        }
    }
}
