//! Error types for endpoint reconciliation.

use std::fmt;

use ac_core::AcError;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Code attached to failures that require the blueprint to be re-planned.
pub const REPLAN_REQUIRED_CODE: &str = "ADR033-R7-REPLAN-REQUIRED";

/// Diagnostic payload of a failed reconciliation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReconciliationFailure {
    pub code: String,
    /// Sources that still reach no sink, in name order.
    pub unresolved_sources: Vec<String>,
    /// Best-effort `tail -> sink` hints for manual correction.
    pub suggested_edges: Vec<String>,
}

impl fmt::Display for ReconciliationFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] unresolved sources: {}",
            self.code,
            self.unresolved_sources.join(", ")
        )?;
        if !self.suggested_edges.is_empty() {
            write!(f, "; suggested edges: {}", self.suggested_edges.join(", "))?;
        }
        Ok(())
    }
}

#[derive(Error, Debug)]
pub enum ReconcileError {
    #[error("Endpoint reconciliation failed: {0}")]
    ReplanRequired(ReconciliationFailure),

    #[error("No role view for component '{name}'")]
    MissingRole { name: String },

    #[error("Invalid input: {0}")]
    Input(#[from] AcError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl ReconcileError {
    /// Structured details, present only for reconciliation failures.
    pub fn details(&self) -> Option<&ReconciliationFailure> {
        match self {
            ReconcileError::ReplanRequired(failure) => Some(failure),
            _ => None,
        }
    }

    pub fn code(&self) -> Option<&str> {
        self.details().map(|d| d.code.as_str())
    }
}

pub type ReconcileResult<T> = Result<T, ReconcileError>;
