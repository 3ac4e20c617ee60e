//! Graph-specific error types.

use ac_core::{AcError, BindingId, ComponentId};
use thiserror::Error;

/// Graph construction and mutation errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    #[error("Component name '{name}' is used more than once")]
    DuplicateName { name: String },

    #[error("Component at position {index} has an empty name")]
    EmptyName { index: usize },

    /// A binding refers to a component that doesn't exist.
    #[error("Binding {binding} refers to unknown component '{name}'")]
    UnknownEndpoint { binding: BindingId, name: String },

    /// An edge insertion would connect a component to itself.
    #[error("Binding connects component '{name}' to itself")]
    SelfLoop { name: String },

    #[error("Component id {id} not found in graph")]
    IdNotFound { id: ComponentId },

    /// The graph has more components than ids can address.
    #[error("Graph has {count} components, more than ids can address")]
    TooManyComponents { count: usize },
}

impl From<GraphError> for AcError {
    fn from(err: GraphError) -> Self {
        match err {
            GraphError::DuplicateName { name } => AcError::DuplicateComponent { name },
            GraphError::UnknownEndpoint { name, .. } => AcError::UnknownComponent { name },
            other => AcError::Invariant {
                what: other.to_string(),
            },
        }
    }
}
