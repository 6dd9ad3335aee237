//! # nav-digest
//!
//! Client-side core of the NAV Online Invoice `queryInvoiceDigest` operation:
//! composing the query, wrapping it into the protocol envelope, and
//! normalizing the loosely-typed reply into a stable result.
//!
//! Monetary values use [`rust_decimal::Decimal`], never floating point.
//!
//! ## Quick Start
//!
//! ```rust
//! use nav_digest::core::*;
//! use serde_json::json;
//!
//! let params = QueryParametersBuilder::issue_date_range("2024-01-01", "2024-01-31")
//!     .currency("HUF")
//!     .build();
//! let query = compose_query(&params);
//! assert!(query.mandatory_query_params.is_some());
//! assert!(query.transaction_query_params.is_none());
//!
//! let reply = RawReply {
//!     body: json!({"QueryInvoiceDigestResponse": {"invoiceDigestResult": {
//!         "currentPage": "1",
//!         "availablePage": "1",
//!         "invoiceDigest": {"invoiceNumber": "INV-1", "invoiceNetAmount": "1250.50"}
//!     }}}),
//!     request_xml: String::new(),
//! };
//! let outcome = normalize_response(reply, CoercionPolicy::Lenient).unwrap();
//! assert_eq!(outcome.entries().len(), 1);
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `core` (default) | Query composition, envelope, reply normalization, client |
//! | `xml` | Request XML rendering, reply XML decoding |
//! | `http` | reqwest transport |
//! | `all` | Everything |

#[cfg(feature = "core")]
pub mod core;

#[cfg(feature = "core")]
pub mod envelope;

#[cfg(feature = "core")]
pub mod transport;

#[cfg(feature = "core")]
pub mod client;

#[cfg(feature = "xml")]
pub mod xml;

// Re-export core types at crate root for convenience
#[cfg(feature = "core")]
pub use crate::core::*;
