/// What to do when a query has no complete mandatory range.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MandatoryRangePolicy {
    /// Fail with [`DigestError::MissingMandatoryRange`](super::DigestError::MissingMandatoryRange)
    /// before anything is sent.
    #[default]
    Require,
    /// Send the request as composed and let the service reject it.
    Permissive,
}

/// What to do when a numeric reply field does not parse.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CoercionPolicy {
    /// Store `None`, log a warning and record a [`CoercionWarning`](super::CoercionWarning).
    #[default]
    Lenient,
    /// Fail with [`DigestError::Coercion`](super::DigestError::Coercion).
    Strict,
}

/// Query behavior settings.
///
/// ```
/// use nav_digest::core::*;
///
/// let config = DigestConfig::new().coercion(CoercionPolicy::Strict);
/// assert_eq!(config.mandatory_range, MandatoryRangePolicy::Require);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DigestConfig {
    pub mandatory_range: MandatoryRangePolicy,
    pub coercion: CoercionPolicy,
}

impl DigestConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mandatory_range(mut self, policy: MandatoryRangePolicy) -> Self {
        self.mandatory_range = policy;
        self
    }

    pub fn coercion(mut self, policy: CoercionPolicy) -> Self {
        self.coercion = policy;
        self
    }
}
