//! Protocol XML: request rendering and reply decoding.
//!
//! # Example
//!
//! ```
//! use nav_digest::xml;
//!
//! let reply = xml::decode_reply(
//!     "<QueryInvoiceDigestResponse><result><funcCode>OK</funcCode></result></QueryInvoiceDigestResponse>",
//! ).unwrap();
//! assert!(xml::check_fault(&reply).is_ok());
//! assert_eq!(reply["QueryInvoiceDigestResponse"]["result"]["funcCode"], "OK");
//! ```

mod reply;
mod request;
pub(crate) mod writer;

pub use reply::{check_fault, decode_reply};
pub use request::to_request_xml;

/// Default namespace of the invoice service API (v3.0).
pub const API_NS: &str = "http://schemas.nav.gov.hu/OSA/3.0/api";

/// Namespace of the `common:` header and user elements.
pub const COMMON_NS: &str = "http://schemas.nav.gov.hu/NTCA/1.0/common";
