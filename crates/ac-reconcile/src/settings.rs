//! Reconciler configuration.

use ac_core::{AcResult, Real, ensure_non_negative, flags};
use serde::{Deserialize, Serialize};

use crate::cost::API_ENDPOINT_PENALTY;

/// Settings for one reconciliation call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReconcileSettings {
    /// Upper bound on correction rounds.
    pub max_corrections: usize,
    /// Added to the cost of edges ending in an API endpoint.
    pub api_penalty: Real,
    /// Include the contention term in the edge cost.
    pub contention: bool,
}

impl Default for ReconcileSettings {
    fn default() -> Self {
        Self {
            max_corrections: 1,
            api_penalty: API_ENDPOINT_PENALTY,
            contention: false,
        }
    }
}

impl ReconcileSettings {
    /// Defaults, with the contention term taken from the process-wide flag.
    ///
    /// The flag is read here, once; later flag changes don't affect the
    /// returned settings.
    pub fn from_flags() -> Self {
        Self {
            contention: flags::contention_enabled(),
            ..Self::default()
        }
    }

    pub fn with_max_corrections(mut self, max_corrections: usize) -> Self {
        self.max_corrections = max_corrections;
        self
    }

    pub fn with_api_penalty(mut self, api_penalty: Real) -> Self {
        self.api_penalty = api_penalty;
        self
    }

    pub fn with_contention(mut self, contention: bool) -> Self {
        self.contention = contention;
        self
    }

    pub fn validate(&self) -> AcResult<()> {
        ensure_non_negative(self.api_penalty, "api_penalty")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ac_core::AcError;

    #[test]
    fn defaults() {
        let s = ReconcileSettings::default();
        assert_eq!(s.max_corrections, 1);
        assert_eq!(s.api_penalty, 0.25);
        assert!(!s.contention);
        assert!(s.validate().is_ok());
    }

    #[test]
    fn rejects_bad_penalty() {
        let s = ReconcileSettings::default().with_api_penalty(-0.5);
        assert!(matches!(s.validate(), Err(AcError::InvalidArg { .. })));
        let s = ReconcileSettings::default().with_api_penalty(Real::NAN);
        assert!(matches!(s.validate(), Err(AcError::NonFinite { .. })));
    }

    #[test]
    fn partial_yaml_fills_defaults() {
        let s: ReconcileSettings = serde_yaml::from_str("max_corrections: 3").unwrap();
        assert_eq!(s, ReconcileSettings::default().with_max_corrections(3));
    }
}
