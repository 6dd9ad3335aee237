//! Query composition and reply normalization.
//!
//! This module holds the transport-independent part of the
//! `queryInvoiceDigest` operation: turning flat [`QueryParameters`] into the
//! nested `invoiceQueryParams` structure, and turning a decoded reply into a
//! [`DigestResult`] with numeric paging counters and amounts.

mod builder;
mod compose;
mod config;
mod digest;
mod error;
mod normalize;
mod types;
mod validation;

pub use builder::*;
pub use compose::*;
pub use config::*;
pub use digest::*;
pub use error::*;
pub use normalize::*;
pub use types::*;
pub use validation::*;

/// Root element of the request document.
pub const REQUEST_TYPE: &str = "QueryInvoiceDigestRequest";

/// Root element of the reply document.
pub const RESPONSE_ROOT: &str = "QueryInvoiceDigestResponse";

/// Service path of the operation.
pub const QUERY_INVOICE_DIGEST_PATH: &str = "/queryInvoiceDigest";
