//! ac-core: shared foundation for the autocoder reconciliation crates.
//!
//! Contains:
//! - ids (compact ids for components and bindings)
//! - numeric (Real + finiteness checks)
//! - flags (process-wide feature flags)
//! - error (shared error types)

pub mod error;
pub mod flags;
pub mod ids;
pub mod numeric;

// Re-exports: nice ergonomics for downstream crates
pub use error::{AcError, AcResult};
pub use ids::*;
pub use numeric::*;
