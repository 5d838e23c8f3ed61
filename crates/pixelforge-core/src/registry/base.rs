//! Base registry trait and implementation.

use dashmap::DashMap;
use std::sync::Arc;

use pixelforge_protocols::error::ExtensionError;

/// Trait for items that can be stored in a registry.
pub trait Registerable: Send + Sync {
    /// Returns the unique identifier for this item.
    fn registry_id(&self) -> &str;
}

/// Generic registry for managing items by ID.
///
/// Thread-safe storage with duplicate checking. Registration happens once
/// at process start; lookups happen once per dispatch cycle.
pub struct BaseRegistry<T: ?Sized + Registerable> {
    items: DashMap<String, Arc<T>>,
}

impl<T: ?Sized + Registerable> BaseRegistry<T> {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self {
            items: DashMap::new(),
        }
    }

    /// Register an item.
    ///
    /// Returns an error if an item with the same ID is already registered.
    pub fn register(&self, item: Arc<T>) -> Result<(), ExtensionError> {
        let id = item.registry_id().to_string();

        if self.items.contains_key(&id) {
            return Err(ExtensionError::AlreadyRegistered(id));
        }

        self.items.insert(id, item);
        Ok(())
    }

    /// Unregister an item by ID.
    pub fn unregister(&self, id: &str) -> Result<(), ExtensionError> {
        self.items
            .remove(id)
            .ok_or_else(|| ExtensionError::NotFound(id.to_string()))?;
        Ok(())
    }

    /// Get an item by ID.
    pub fn get(&self, id: &str) -> Option<Arc<T>> {
        self.items.get(id).map(|item| item.clone())
    }

    /// List all registered item IDs.
    pub fn list_ids(&self) -> Vec<String> {
        self.items
            .iter()
            .map(|item| item.registry_id().to_string())
            .collect()
    }

    /// Get the number of registered items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterate over all items.
    pub fn iter(&self) -> impl Iterator<Item = Arc<T>> + '_ {
        self.items.iter().map(|entry| entry.value().clone())
    }
}

impl<T: ?Sized + Registerable> Default for BaseRegistry<T> {
    fn default() -> Self {
        Self::new()
    }
}
