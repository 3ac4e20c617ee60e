//! ac-reconcile: blueprint endpoint reconciliation.
//!
//! Given components, their bindings, and per-component role views, the
//! reconciler appends the bindings needed so that every component acting
//! as a source reaches at least one component acting as a sink. Existing
//! bindings are never removed, and terminal components never gain
//! outgoing bindings.
//!
//! # Example
//!
//! ```
//! use ac_reconcile::{ReconcileInput, ReconcileSettings};
//!
//! let mut input = ReconcileInput::from_yaml_str(r#"
//! components:
//!   - { name: src, type: Source }
//!   - { name: mid, type: Transformer }
//!   - { name: db, type: Store }
//! bindings:
//!   - { from: src, to: mid }
//! "#).unwrap();
//!
//! let outcome = input.reconcile(&ReconcileSettings::default()).unwrap();
//! assert_eq!(outcome.added.len(), 1);
//! assert_eq!(input.bindings[1].to_string(), "mid -> db");
//! ```

pub mod catalog;
pub mod constraints;
pub mod cost;
pub mod engine;
pub mod error;
pub mod input;
pub mod roles;
pub mod settings;

pub use catalog::ComponentCatalog;
pub use constraints::{TerminalViolation, audit_terminals, check_edge, check_terminal};
pub use cost::{API_ENDPOINT_PENALTY, EdgeCost, ScoredEdge, type_priority};
pub use engine::{GENERATED_BY, Reconciler};
pub use error::{REPLAN_REQUIRED_CODE, ReconcileError, ReconcileResult, ReconciliationFailure};
pub use input::{ReconcileInput, ReconcileOutcome};
pub use roles::{Role, RoleView, RoleViews, classify, declared_role};
pub use settings::ReconcileSettings;
