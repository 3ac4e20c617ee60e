//! Id-indexed view of component records.

use ac_core::{AcError, ComponentId};
use ac_graph::{BindingGraph, Component};

/// Component records indexed by their graph id.
///
/// Construction checks that the records and the graph describe the same
/// set of components, so lookups by graph id always succeed.
#[derive(Debug, Clone)]
pub struct ComponentCatalog<'a> {
    by_id: Vec<&'a Component>,
}

impl<'a> ComponentCatalog<'a> {
    pub fn new(components: &'a [Component], graph: &BindingGraph) -> Result<Self, AcError> {
        let mut slots: Vec<Option<&'a Component>> = vec![None; graph.len()];
        for component in components {
            let id = graph
                .id_of(&component.name)
                .ok_or_else(|| AcError::UnknownComponent {
                    name: component.name.clone(),
                })?;
            let slot = &mut slots[id.as_usize()];
            if slot.is_some() {
                return Err(AcError::DuplicateComponent {
                    name: component.name.clone(),
                });
            }
            *slot = Some(component);
        }

        let mut by_id = Vec::with_capacity(slots.len());
        for (i, slot) in slots.into_iter().enumerate() {
            match slot {
                Some(component) => by_id.push(component),
                None => {
                    let name = ComponentId::try_from_usize(i)
                        .and_then(|id| graph.name_of(id))
                        .unwrap_or("?");
                    return Err(AcError::Invariant {
                        what: format!("graph component '{name}' has no component record"),
                    });
                }
            }
        }
        Ok(Self { by_id })
    }

    /// Component record for a graph id (panics if the id is not from the same graph).
    pub fn get(&self, id: ComponentId) -> &'a Component {
        self.by_id[id.as_usize()]
    }

    pub fn name(&self, id: ComponentId) -> &'a str {
        &self.get(id).name
    }

    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }

    /// Sort ids by component name.
    pub fn sort_by_name(&self, ids: &mut [ComponentId]) {
        ids.sort_by(|a, b| self.name(*a).cmp(self.name(*b)));
    }
}
