//! Graph validation logic.

use std::collections::{HashMap, HashSet};

use ac_core::{BindingId, ComponentId};

use crate::error::GraphError;

/// Validate component names: non-empty and unique.
pub(crate) fn validate_names(names: &[String]) -> Result<(), GraphError> {
    if ComponentId::try_from_usize(names.len()).is_none() {
        return Err(GraphError::TooManyComponents { count: names.len() });
    }

    let mut seen: HashSet<&str> = HashSet::with_capacity(names.len());
    for (index, name) in names.iter().enumerate() {
        if name.trim().is_empty() {
            return Err(GraphError::EmptyName { index });
        }
        if !seen.insert(name.as_str()) {
            return Err(GraphError::DuplicateName { name: name.clone() });
        }
    }
    Ok(())
}

/// Resolve binding endpoints to ids, rejecting unknown names.
///
/// A binding from a component to itself is a valid feedback binding and is
/// resolved like any other.
pub(crate) fn resolve_bindings(
    lookup: &HashMap<String, ComponentId>,
    bindings: &[(String, String)],
) -> Result<Vec<(ComponentId, ComponentId)>, GraphError> {
    let mut resolved = Vec::with_capacity(bindings.len());
    for (i, (from, to)) in bindings.iter().enumerate() {
        let binding = BindingId::from_index(i as u32);
        let a = lookup
            .get(from)
            .copied()
            .ok_or_else(|| GraphError::UnknownEndpoint {
                binding,
                name: from.clone(),
            })?;
        let b = lookup
            .get(to)
            .copied()
            .ok_or_else(|| GraphError::UnknownEndpoint {
                binding,
                name: to.clone(),
            })?;
        resolved.push((a, b));
    }
    Ok(resolved)
}
