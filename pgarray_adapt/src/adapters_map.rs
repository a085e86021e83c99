use std::sync::Arc;

use crate::{
    Dumper, DumperPlugin, DumperRuntimePlugin, Format, Loader, LoaderPlugin, LoaderRuntimePlugin,
    Oid, RuntimeRegistry, RuntimeRegistryHandle, Transformer, TypesRegistry, ValueKind,
};

/// A map of the adapters available in a context: the type catalog and the dumper and loader plugins.
///
/// Dumpers are keyed by the [`ValueKind`] they dump and the target [`Format`].
/// Loaders are keyed by the type [`Oid`] they load and the source [`Format`].
///
/// Runtime registered plugins take precedence over compile-time registered plugins.
#[derive(Debug)]
pub struct AdaptersMap {
    types: TypesRegistry,
    dumpers: RuntimeRegistry<(ValueKind, Format), DumperRuntimePlugin>,
    loaders: RuntimeRegistry<(Oid, Format), LoaderRuntimePlugin>,
}

impl Default for AdaptersMap {
    fn default() -> Self {
        Self::new(TypesRegistry::builtins())
    }
}

impl AdaptersMap {
    /// Create a new adapters map with the type catalog `types` and no runtime plugins.
    #[must_use]
    pub fn new(types: TypesRegistry) -> Self {
        Self {
            types,
            dumpers: RuntimeRegistry::new(),
            loaders: RuntimeRegistry::new(),
        }
    }

    /// Return the type catalog.
    #[must_use]
    pub fn types(&self) -> &TypesRegistry {
        &self.types
    }

    /// Return the runtime dumper registry.
    #[must_use]
    pub fn runtime_dumpers(&self) -> &RuntimeRegistry<(ValueKind, Format), DumperRuntimePlugin> {
        &self.dumpers
    }

    /// Return the runtime loader registry.
    #[must_use]
    pub fn runtime_loaders(&self) -> &RuntimeRegistry<(Oid, Format), LoaderRuntimePlugin> {
        &self.loaders
    }

    /// Register a dumper plugin for values of `kind` dumped to `format`.
    ///
    /// Any dumper plugin previously registered at runtime for the same key is replaced.
    pub fn register_dumper(
        &self,
        kind: ValueKind,
        format: Format,
        plugin: DumperRuntimePlugin,
    ) -> RuntimeRegistryHandle<DumperRuntimePlugin> {
        log::debug!(
            "Registering the `{}` dumper for {kind} values ({format})",
            plugin.identifier()
        );
        self.dumpers.register((kind, format), plugin)
    }

    /// Unregister a runtime dumper plugin.
    ///
    /// Returns `true` if the plugin was found and removed, `false` otherwise.
    pub fn unregister_dumper(
        &self,
        kind: ValueKind,
        format: Format,
        handle: &RuntimeRegistryHandle<DumperRuntimePlugin>,
    ) -> bool {
        self.dumpers.unregister(&(kind, format), handle)
    }

    /// Register a loader plugin for the type `oid` loaded from `format`.
    ///
    /// Any loader plugin previously registered at runtime for the same key is replaced.
    pub fn register_loader(
        &self,
        oid: Oid,
        format: Format,
        plugin: LoaderRuntimePlugin,
    ) -> RuntimeRegistryHandle<LoaderRuntimePlugin> {
        log::debug!(
            "Registering the `{}` loader for oid {oid} ({format})",
            plugin.identifier()
        );
        self.loaders.register((oid, format), plugin)
    }

    /// Unregister a runtime loader plugin.
    ///
    /// Returns `true` if the plugin was found and removed, `false` otherwise.
    pub fn unregister_loader(
        &self,
        oid: Oid,
        format: Format,
        handle: &RuntimeRegistryHandle<LoaderRuntimePlugin>,
    ) -> bool {
        self.loaders.unregister(&(oid, format), handle)
    }

    /// Returns true if a dumper is available for values of `kind` dumped to `format`.
    #[must_use]
    pub fn has_dumper(&self, kind: ValueKind, format: Format) -> bool {
        let key = (kind, format);
        self.dumpers.contains(&key)
            || inventory::iter::<DumperPlugin>
                .into_iter()
                .any(|plugin| plugin.matches(&key))
    }

    /// Returns true if a loader is available for the type `oid` loaded from `format`.
    #[must_use]
    pub fn has_loader(&self, oid: Oid, format: Format) -> bool {
        let key = (oid, format);
        self.loaders.contains(&key)
            || inventory::iter::<LoaderPlugin>
                .into_iter()
                .any(|plugin| plugin.matches(&key))
    }

    /// Create the dumper for values of `kind` dumped to `format`.
    ///
    /// Returns [`None`] if no dumper is available.
    #[must_use]
    pub fn create_dumper(
        &self,
        kind: ValueKind,
        format: Format,
        transformer: &Transformer,
    ) -> Option<Arc<dyn Dumper>> {
        let key = (kind, format);
        if let Some(plugin) = self.dumpers.get(&key) {
            return Some(plugin.create(transformer));
        }
        inventory::iter::<DumperPlugin>
            .into_iter()
            .find(|plugin| plugin.matches(&key))
            .map(|plugin| plugin.create(transformer))
    }

    /// Create the loader for the type `oid` loaded from `format`.
    ///
    /// Returns [`None`] if no loader is available.
    #[must_use]
    pub fn create_loader(
        &self,
        oid: Oid,
        format: Format,
        transformer: &Transformer,
    ) -> Option<Arc<dyn Loader>> {
        let key = (oid, format);
        if let Some(plugin) = self.loaders.get(&key) {
            return Some(plugin.create(transformer));
        }
        inventory::iter::<LoaderPlugin>
            .into_iter()
            .find(|plugin| plugin.matches(&key))
            .map(|plugin| plugin.create(transformer))
    }
}
