//! Transport seam: sends a request envelope and hands back the decoded reply.
//!
//! The library ships [`HttpTransport`] behind the `http` feature. Tests and
//! callers with their own networking implement [`Transport`] directly.

#[cfg(feature = "http")]
mod http;

use crate::core::DigestError;
use crate::envelope::DigestRequest;

pub use crate::core::RawReply;
#[cfg(feature = "http")]
pub use http::{Environment, HttpTransport, HttpTransportConfig, RequestSigner};

/// Performs one request/response round trip.
///
/// Implementations own signing, timeouts and retries. Errors are passed to the
/// caller unchanged.
pub trait Transport {
    fn send(
        &self,
        request: &DigestRequest,
        path: &str,
    ) -> impl Future<Output = Result<RawReply, DigestError>> + Send;
}
