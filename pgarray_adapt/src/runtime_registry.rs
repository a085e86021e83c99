//! Runtime registry for dynamic adapter registration.
//!
//! This module provides the infrastructure for registering adapter plugins
//! at runtime, complementing the compile-time registration via [`inventory`].

use std::collections::HashMap;
use std::hash::Hash;
use std::sync::{Arc, RwLock};

/// A handle to a registered plugin. See [`RuntimeRegistry::register`].
pub type RuntimeRegistryHandle<P> = Arc<P>;

/// A runtime registry of plugins, holding at most one plugin per key.
///
/// This registry is thread-safe and can be accessed from multiple threads concurrently.
/// Registering a plugin under a key that is already registered replaces the previous plugin.
///
/// # Type Parameters
///
/// * `K` - The key type (e.g. a type oid and format)
/// * `P` - The plugin type to store (e.g. [`LoaderRuntimePlugin`](crate::LoaderRuntimePlugin))
#[derive(Debug)]
pub struct RuntimeRegistry<K, P> {
    plugins: RwLock<HashMap<K, RuntimeRegistryHandle<P>>>,
}

impl<K: Eq + Hash, P> RuntimeRegistry<K, P> {
    /// Create a new empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            plugins: RwLock::new(HashMap::new()),
        }
    }

    /// Register a plugin under `key` and return a handle for later unregistration.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    pub fn register(&self, key: K, plugin: P) -> RuntimeRegistryHandle<P> {
        let plugin = Arc::new(plugin);
        let handle = Arc::clone(&plugin);

        let mut plugins = self.plugins.write().unwrap();
        plugins.insert(key, plugin);

        handle
    }

    /// Unregister the plugin under `key` if it is the plugin of `handle`.
    ///
    /// Uses `Arc::ptr_eq`, a handle to a plugin which has since been replaced does not remove its replacement.
    ///
    /// Returns `true` if the plugin was found and removed, `false` otherwise.
    ///
    /// # Panics
    /// Panics if the internal lock is poisoned.
    pub fn unregister(&self, key: &K, handle: &RuntimeRegistryHandle<P>) -> bool {
        let mut plugins = self.plugins.write().unwrap();
        if plugins.get(key).is_some_and(|p| Arc::ptr_eq(p, handle)) {
            plugins.remove(key);
            true
        } else {
            false
        }
    }

    /// Return the plugin registered under `key`.
    ///
    /// # Panics
    /// Panics if the internal lock is poisoned.
    #[must_use]
    pub fn get(&self, key: &K) -> Option<RuntimeRegistryHandle<P>> {
        self.plugins.read().unwrap().get(key).cloned()
    }

    /// Returns true if a plugin is registered under `key`.
    ///
    /// # Panics
    /// Panics if the internal lock is poisoned.
    #[must_use]
    pub fn contains(&self, key: &K) -> bool {
        self.plugins.read().unwrap().contains_key(key)
    }

    /// Returns the number of registered plugins.
    ///
    /// # Panics
    /// Panics if the internal lock is poisoned.
    #[must_use]
    pub fn len(&self) -> usize {
        self.plugins.read().unwrap().len()
    }

    /// Returns true if no plugins are registered.
    ///
    /// # Panics
    /// Panics if the internal lock is poisoned.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.plugins.read().unwrap().is_empty()
    }

    /// Clear all registered plugins.
    ///
    /// # Panics
    /// Panics if the internal lock is poisoned.
    pub fn clear(&self) {
        self.plugins.write().unwrap().clear();
    }
}

impl<K: Eq + Hash, P> Default for RuntimeRegistry<K, P> {
    fn default() -> Self {
        Self::new()
    }
}
