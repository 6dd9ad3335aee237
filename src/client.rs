//! `queryInvoiceDigest` orchestration: compose, wrap, send, normalize.

use crate::core::*;
use crate::envelope::{Credentials, DigestRequest, SoftwareInfo, create_base_request};
use crate::transport::Transport;

/// Digest query client bound to one technical user and transport.
///
/// ```no_run
/// # #[cfg(feature = "http")]
/// # async fn run() -> Result<(), nav_digest::core::DigestError> {
/// use nav_digest::client::DigestClient;
/// use nav_digest::core::*;
/// use nav_digest::envelope::*;
/// use nav_digest::transport::{HttpTransport, HttpTransportConfig, Environment};
///
/// let transport = HttpTransport::new(HttpTransportConfig::new(Environment::Test))?;
/// let client = DigestClient::new(
///     transport,
///     Credentials::new("techuser", "PASSWORD-SHA512", "12345678"),
///     SoftwareBuilder::new("HU12345678-00001", "Billing", "1.0").build(),
/// );
/// let params = QueryParametersBuilder::issue_date_range("2024-01-01", "2024-01-31").build();
/// let outcome = client.query(1, InvoiceDirection::Outbound, &params).await?;
/// for entry in outcome.entries() {
///     println!("{:?} {:?}", entry.invoice_number, entry.invoice_net_amount);
/// }
/// # Ok(())
/// # }
/// ```
pub struct DigestClient<T> {
    transport: T,
    credentials: Credentials,
    software: SoftwareInfo,
    config: DigestConfig,
}

impl<T: Transport> DigestClient<T> {
    pub fn new(transport: T, credentials: Credentials, software: SoftwareInfo) -> Self {
        Self {
            transport,
            credentials,
            software,
            config: DigestConfig::default(),
        }
    }

    pub fn with_config(mut self, config: DigestConfig) -> Self {
        self.config = config;
        self
    }

    pub fn config(&self) -> &DigestConfig {
        &self.config
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Build the full request envelope without sending it.
    ///
    /// # Errors
    ///
    /// `DigestError::MissingMandatoryRange` when no complete range is given and
    /// the policy is [`MandatoryRangePolicy::Require`].
    pub fn prepare(
        &self,
        page: u32,
        direction: InvoiceDirection,
        params: &QueryParameters,
    ) -> Result<DigestRequest, DigestError> {
        let query = compose_request(page, direction, params);
        if let Err(e) = check_mandatory_range(&query.invoice_query_params) {
            match self.config.mandatory_range {
                MandatoryRangePolicy::Require => return Err(e),
                MandatoryRangePolicy::Permissive => log::warn!("{e}; sending anyway"),
            }
        }
        let base = create_base_request(REQUEST_TYPE, &self.credentials, &self.software);
        Ok(DigestRequest::new(base, query))
    }

    /// Query one page of invoice digests.
    ///
    /// # Errors
    ///
    /// Validation errors from [`prepare`](Self::prepare), any error of the
    /// transport unchanged, and normalization errors.
    pub async fn query(
        &self,
        page: u32,
        direction: InvoiceDirection,
        params: &QueryParameters,
    ) -> Result<QueryOutcome, DigestError> {
        let request = self.prepare(page, direction, params)?;
        let reply = self
            .transport
            .send(&request, QUERY_INVOICE_DIGEST_PATH)
            .await?;
        normalize_response(reply, self.config.coercion)
    }
}
