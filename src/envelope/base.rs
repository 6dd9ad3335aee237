use chrono::{DateTime, SubsecRound, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::software::SoftwareInfo;
use crate::core::DigestQuery;

/// Protocol version sent in every request header.
pub const REQUEST_VERSION: &str = "3.0";

/// Header schema version.
pub const HEADER_VERSION: &str = "1.0";

/// Longest request id the service accepts.
const MAX_REQUEST_ID_LEN: usize = 30;

/// Technical user credentials.
///
/// `password_hash` is the uppercase SHA-512 hex digest of the password; this
/// crate never sees the plain password.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Credentials {
    pub login: String,
    pub password_hash: String,
    /// First eight digits of the taxpayer's tax number.
    pub tax_number: String,
}

impl Credentials {
    pub fn new(
        login: impl Into<String>,
        password_hash: impl Into<String>,
        tax_number: impl Into<String>,
    ) -> Self {
        Self {
            login: login.into(),
            password_hash: password_hash.into(),
            tax_number: tax_number.into(),
        }
    }
}

/// `common:header` block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestHeader {
    pub request_id: String,
    pub timestamp: DateTime<Utc>,
    pub request_version: String,
    pub header_version: String,
}

impl RequestHeader {
    /// Header with a fixed id and timestamp (truncated to milliseconds).
    pub fn new(request_id: impl Into<String>, timestamp: DateTime<Utc>) -> Self {
        Self {
            request_id: request_id.into(),
            timestamp: timestamp.trunc_subsecs(3),
            request_version: REQUEST_VERSION.to_string(),
            header_version: HEADER_VERSION.to_string(),
        }
    }

    /// Header with a fresh random id and the current time.
    pub fn generate() -> Self {
        Self::new(new_request_id(), Utc::now())
    }

    /// Timestamp as written into the header, e.g. `2024-06-15T10:00:00.000Z`.
    pub fn timestamp_string(&self) -> String {
        self.timestamp.format("%Y-%m-%dT%H:%M:%S%.3fZ").to_string()
    }

    /// Timestamp in the compact form used as signature input, e.g. `20240615100000`.
    pub fn signature_timestamp(&self) -> String {
        self.timestamp.format("%Y%m%d%H%M%S").to_string()
    }
}

/// `common:user` block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserHeader {
    pub login: String,
    pub password_hash: String,
    pub tax_number: String,
    /// Filled in by the transport's signer.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_signature: Option<String>,
}

/// Protocol envelope shared by all operations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BaseRequest {
    /// Root element name, e.g. `QueryInvoiceDigestRequest`.
    pub request_type: String,
    pub header: RequestHeader,
    pub user: UserHeader,
    pub software: SoftwareInfo,
}

impl BaseRequest {
    pub fn new(
        request_type: impl Into<String>,
        header: RequestHeader,
        credentials: &Credentials,
        software: &SoftwareInfo,
    ) -> Self {
        Self {
            request_type: request_type.into(),
            header,
            user: UserHeader {
                login: credentials.login.clone(),
                password_hash: credentials.password_hash.clone(),
                tax_number: credentials.tax_number.clone(),
                request_signature: None,
            },
            software: software.clone(),
        }
    }
}

/// Build an envelope with a generated header.
pub fn create_base_request(
    request_type: &str,
    credentials: &Credentials,
    software: &SoftwareInfo,
) -> BaseRequest {
    BaseRequest::new(request_type, RequestHeader::generate(), credentials, software)
}

/// Full digest request: envelope plus the composed query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DigestRequest {
    #[serde(flatten)]
    pub base: BaseRequest,
    #[serde(flatten)]
    pub query: DigestQuery,
}

impl DigestRequest {
    pub fn new(base: BaseRequest, query: DigestQuery) -> Self {
        Self { base, query }
    }
}

fn new_request_id() -> String {
    let mut id = format!("RID{}", Uuid::new_v4().simple());
    id.truncate(MAX_REQUEST_ID_LEN);
    id
}
