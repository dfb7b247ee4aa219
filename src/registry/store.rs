//! In-memory component registry

use super::defaults::default_components;
use super::models::{Component, ComponentUpdate, NewComponent};
use std::collections::HashMap;
use tracing::debug;

/// Registry of the components DELoc manages, keyed by id
#[derive(Debug, Clone, Default)]
pub struct ComponentRegistry {
    components: HashMap<u32, Component>,
    next_id: u32,
}

impl ComponentRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self {
            components: HashMap::new(),
            next_id: 1,
        }
    }

    /// Create a registry seeded with the default big data stack
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        for component in default_components() {
            registry.create(component);
        }
        registry
    }

    /// All components sorted by display order
    pub fn list(&self) -> Vec<Component> {
        let mut components: Vec<Component> = self.components.values().cloned().collect();
        components.sort_by_key(|c| (c.order, c.id));
        components
    }

    pub fn get(&self, id: u32) -> Option<&Component> {
        self.components.get(&id)
    }

    pub fn find_by_name(&self, name: &str) -> Option<&Component> {
        self.components.values().find(|c| c.name == name)
    }

    pub fn len(&self) -> usize {
        self.components.len()
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    /// Insert a new component and assign it the next id
    pub fn create(&mut self, component: NewComponent) -> Component {
        let id = self.next_id.max(1);
        self.next_id = id + 1;

        let component = component.into_component(id);
        debug!("Registered component {} as #{}", component.name, id);
        self.components.insert(id, component.clone());
        component
    }

    /// Merge `update` into the component with `id`
    pub fn update(&mut self, id: u32, update: ComponentUpdate) -> Option<Component> {
        let component = self.components.get_mut(&id)?;
        update.apply(component);
        Some(component.clone())
    }

    pub fn delete(&mut self, id: u32) -> bool {
        self.components.remove(&id).is_some()
    }
}
