use serde::{Deserialize, Serialize};

/// How the submitting software runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SoftwareOperation {
    /// Installed locally by the taxpayer.
    LocalSoftware,
    /// Hosted online service.
    OnlineService,
}

impl SoftwareOperation {
    pub fn code(&self) -> &'static str {
        match self {
            Self::LocalSoftware => "LOCAL_SOFTWARE",
            Self::OnlineService => "ONLINE_SERVICE",
        }
    }
}

/// Metadata identifying the invoicing software to the service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SoftwareInfo {
    pub software_id: String,
    pub software_name: String,
    pub software_operation: SoftwareOperation,
    pub software_main_version: String,
    pub software_dev_name: String,
    pub software_dev_contact: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub software_dev_country_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub software_dev_tax_number: Option<String>,
}

/// Builder for [`SoftwareInfo`].
///
/// ```
/// use nav_digest::envelope::*;
///
/// let software = SoftwareBuilder::new("HU12345678-00001", "Billing", "1.0")
///     .developer("ACME Kft.", "dev@acme.hu")
///     .dev_country_code("HU")
///     .build();
///
/// assert_eq!(software.software_operation, SoftwareOperation::LocalSoftware);
/// ```
pub struct SoftwareBuilder {
    info: SoftwareInfo,
}

impl SoftwareBuilder {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        main_version: impl Into<String>,
    ) -> Self {
        Self {
            info: SoftwareInfo {
                software_id: id.into(),
                software_name: name.into(),
                software_operation: SoftwareOperation::LocalSoftware,
                software_main_version: main_version.into(),
                software_dev_name: String::new(),
                software_dev_contact: String::new(),
                software_dev_country_code: None,
                software_dev_tax_number: None,
            },
        }
    }

    pub fn operation(mut self, operation: SoftwareOperation) -> Self {
        self.info.software_operation = operation;
        self
    }

    pub fn developer(mut self, name: impl Into<String>, contact: impl Into<String>) -> Self {
        self.info.software_dev_name = name.into();
        self.info.software_dev_contact = contact.into();
        self
    }

    pub fn dev_country_code(mut self, code: impl Into<String>) -> Self {
        self.info.software_dev_country_code = Some(code.into());
        self
    }

    pub fn dev_tax_number(mut self, tax_number: impl Into<String>) -> Self {
        self.info.software_dev_tax_number = Some(tax_number.into());
        self
    }

    pub fn build(self) -> SoftwareInfo {
        self.info
    }
}
