//! Component registry - single source of truth for one build invocation.
//!
//! The registry is created at the start of the configuration phase,
//! handed to every registration site, and only read afterwards.
//! Registration order is preserved; later build phases enumerate
//! components in that order.

use crate::component::{Component, ComponentKind};
use thiserror::Error;

/// Error type for registration.
#[derive(Debug, Error)]
pub enum RegistryError {
    /// A component with this name and kind is already registered.
    ///
    /// Components of different kinds may share a name; within one kind
    /// the name is unique.
    #[error("component '{name}' ({kind}) is already registered")]
    Duplicate { name: String, kind: ComponentKind },
}

/// Ordered collection of all registered components.
#[derive(Debug, Default)]
pub struct ComponentRegistry {
    components: Vec<Component>,
}

impl ComponentRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a component, appending it in registration order.
    ///
    /// Failing here means the build configuration itself is wrong; the
    /// caller aborts the configuration phase rather than recovering.
    pub fn register(&mut self, component: Component) -> Result<(), RegistryError> {
        let duplicate = self
            .components
            .iter()
            .any(|c| c.name() == component.name() && c.kind() == component.kind());
        if duplicate {
            return Err(RegistryError::Duplicate {
                name: component.name().to_string(),
                kind: component.kind(),
            });
        }
        self.components.push(component);
        Ok(())
    }

    /// All registered components, in registration order.
    #[must_use]
    pub fn components(&self) -> &[Component] {
        &self.components
    }

    /// Get a component by its short identifier.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Component> {
        self.components.iter().find(|c| c.id() == id)
    }

    /// Display names of all registered components.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.components.iter().map(Component::name)
    }

    /// All components of one kind, in registration order.
    pub fn of_kind(&self, kind: ComponentKind) -> impl Iterator<Item = &Component> {
        self.components.iter().filter(move |c| c.kind() == kind)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.components.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }
}
