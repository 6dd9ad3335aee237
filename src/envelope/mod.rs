//! Request envelope: header, technical user and software blocks.
//!
//! Every request sent to the service is wrapped in the same envelope; the
//! operation-specific fields ([`DigestQuery`](crate::core::DigestQuery)) are
//! injected next to it to form a [`DigestRequest`].

mod base;
mod software;

pub use base::{
    BaseRequest, Credentials, DigestRequest, HEADER_VERSION, REQUEST_VERSION, RequestHeader,
    UserHeader, create_base_request,
};
pub use software::{SoftwareBuilder, SoftwareInfo, SoftwareOperation};
