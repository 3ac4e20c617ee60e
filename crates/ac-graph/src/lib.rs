//! ac-graph: component model and binding graph for endpoint reconciliation.
//!
//! Provides:
//! - The data model (Component, ComponentType, Binding)
//! - An append-only directed binding graph with name lookup
//! - Incremental graph builder with validation
//! - Reachability and distance searches used by the reconciler
//!
//! # Example
//!
//! ```
//! use ac_graph::GraphBuilder;
//!
//! let mut builder = GraphBuilder::new();
//! builder.add_component("ingest");
//! builder.add_component("store");
//! builder.add_binding("ingest", "store");
//! let graph = builder.build().unwrap();
//!
//! assert_eq!(graph.len(), 2);
//! assert_eq!(graph.edge_count(), 1);
//! assert!(graph.has_path_by_name("ingest", "store"));
//! ```

pub mod builder;
pub mod error;
pub mod graph;
pub mod model;
pub mod search;
pub(crate) mod validate;

// Re-exports for ergonomics
pub use builder::GraphBuilder;
pub use error::GraphError;
pub use graph::BindingGraph;
pub use model::{Binding, Component, ComponentType};
