//! reqwest-based transport for the NAV Online Invoice REST endpoint.

use std::time::Duration;

use reqwest::header::{ACCEPT, CONTENT_TYPE};

use super::Transport;
use crate::core::{DigestError, RawReply};
use crate::envelope::DigestRequest;
use crate::xml::{check_fault, decode_reply, to_request_xml};

const PRODUCTION_URL: &str = "https://api.onlineszamla.nav.gov.hu/invoiceService/v3";
const TEST_URL: &str = "https://api-test.onlineszamla.nav.gov.hu/invoiceService/v3";

/// Target service environment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Production,
    Test,
}

impl Environment {
    pub fn base_url(&self) -> &'static str {
        match self {
            Self::Production => PRODUCTION_URL,
            Self::Test => TEST_URL,
        }
    }
}

/// Computes `requestSignature` for an outgoing request.
///
/// For queries the service expects the uppercase SHA3-512 hex digest of
/// `requestId`, the compact UTC timestamp
/// ([`RequestHeader::signature_timestamp`](crate::envelope::RequestHeader::signature_timestamp))
/// and the technical user's signature key.
pub trait RequestSigner: Send + Sync {
    fn sign(&self, request: &DigestRequest) -> String;
}

/// Connection settings for [`HttpTransport`].
#[derive(Debug, Clone)]
pub struct HttpTransportConfig {
    pub base_url: String,
    pub timeout: Duration,
}

impl HttpTransportConfig {
    pub fn new(environment: Environment) -> Self {
        Self {
            base_url: environment.base_url().to_string(),
            timeout: Duration::from_secs(30),
        }
    }

    /// Use a custom base URL, e.g. a local mock server.
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}

impl Default for HttpTransportConfig {
    fn default() -> Self {
        Self::new(Environment::Test)
    }
}

/// Posts request XML over HTTPS and decodes the XML reply.
pub struct HttpTransport {
    client: reqwest::Client,
    config: HttpTransportConfig,
    signer: Option<Box<dyn RequestSigner>>,
}

impl HttpTransport {
    /// # Errors
    ///
    /// Returns `DigestError::Transport` if the HTTP client cannot be built.
    pub fn new(config: HttpTransportConfig) -> Result<Self, DigestError> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| DigestError::Transport(e.to_string()))?;
        Ok(Self {
            client,
            config,
            signer: None,
        })
    }

    pub fn with_signer(mut self, signer: impl RequestSigner + 'static) -> Self {
        self.signer = Some(Box::new(signer));
        self
    }

    pub fn config(&self) -> &HttpTransportConfig {
        &self.config
    }

    fn prepare(&self, request: &DigestRequest) -> Result<String, DigestError> {
        match &self.signer {
            Some(signer) => {
                let mut signed = request.clone();
                signed.base.user.request_signature = Some(signer.sign(request));
                to_request_xml(&signed)
            }
            None => {
                log::warn!("sending {} without requestSignature", request.base.request_type);
                to_request_xml(request)
            }
        }
    }
}

impl Transport for HttpTransport {
    async fn send(&self, request: &DigestRequest, path: &str) -> Result<RawReply, DigestError> {
        let request_xml = self.prepare(request)?;
        let url = self.config.endpoint(path);
        log::debug!(
            "POST {url} (requestId={})",
            request.base.header.request_id
        );

        let resp = self
            .client
            .post(&url)
            .header(CONTENT_TYPE, "application/xml")
            .header(ACCEPT, "application/xml")
            .body(request_xml.clone())
            .send()
            .await
            .map_err(|e| DigestError::Transport(e.to_string()))?;

        let status = resp.status();
        let body = resp
            .text()
            .await
            .map_err(|e| DigestError::Transport(e.to_string()))?;

        // Error statuses usually still carry a GeneralErrorResponse document.
        let decoded = decode_reply(&body);
        if !status.is_success() {
            if let Ok(ref tree) = decoded {
                check_fault(tree)?;
            }
            return Err(DigestError::Transport(format!("HTTP {status}: {body}")));
        }

        let tree = decoded?;
        check_fault(&tree)?;
        Ok(RawReply {
            body: tree,
            request_xml,
        })
    }
}
