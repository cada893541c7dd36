//! Validation options.

/// Tunables for which optional diagnostics are emitted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidatorOptions {
    /// Warn when a recommended property is missing
    pub warn_recommended: bool,
    /// Warn when a single-valued property has several values
    pub warn_multiple_values: bool,
}

impl ValidatorOptions {
    /// Create options with default settings
    #[must_use]
    pub fn new() -> Self {
        Self {
            warn_recommended: false,
            warn_multiple_values: true,
        }
    }

    /// Set whether missing recommended properties are reported
    #[must_use]
    pub fn with_warn_recommended(mut self, warn: bool) -> Self {
        self.warn_recommended = warn;
        self
    }

    /// Set whether repeated single-valued properties are reported
    #[must_use]
    pub fn with_warn_multiple_values(mut self, warn: bool) -> Self {
        self.warn_multiple_values = warn;
        self
    }
}

impl Default for ValidatorOptions {
    fn default() -> Self {
        Self::new()
    }
}
