//! Adapter plugins.
//!
//! A plugin creates an adapter from a [`Transformer`], which the adapter can use to resolve the adapters of nested values.

use std::sync::Arc;

use crate::{Dumper, Format, Loader, Oid, Transformer, ValueKind};

/// A compile-time plugin, creating a `TPlugin` from a `TInput` for values matching `TKey`.
pub struct Plugin<TKey, TPlugin, TInput: ?Sized> {
    /// The key handled by this plugin.
    key: TKey,
    /// Create an implementation of this plugin from input.
    create_fn: fn(input: &TInput) -> TPlugin,
}

impl<TKey, TPlugin, TInput: ?Sized> Plugin<TKey, TPlugin, TInput> {
    /// Create a new plugin for registration.
    pub const fn new(key: TKey, create_fn: fn(input: &TInput) -> TPlugin) -> Self {
        Self { key, create_fn }
    }

    /// Create a `TPlugin` plugin from `input`.
    pub fn create(&self, input: &TInput) -> TPlugin {
        (self.create_fn)(input)
    }

    /// Return the key handled by this plugin.
    #[must_use]
    pub fn key(&self) -> &TKey {
        &self.key
    }

    /// Returns true if this plugin handles `key`.
    #[must_use]
    pub fn matches(&self, key: &TKey) -> bool
    where
        TKey: PartialEq,
    {
        self.key == *key
    }
}

/// A runtime plugin, creating a `TPlugin` from a `TInput`.
///
/// Unlike the compile-time [`Plugin`], the create function can capture state.
#[allow(clippy::type_complexity)]
pub struct RuntimePlugin<TPlugin, TInput: ?Sized + 'static> {
    /// The identifier of the plugin.
    identifier: String,
    /// Create an implementation of this plugin from input.
    create_fn: Box<dyn Fn(&TInput) -> TPlugin + Send + Sync>,
}

impl<TPlugin, TInput: ?Sized + 'static> RuntimePlugin<TPlugin, TInput> {
    /// Create a new runtime plugin for registration.
    pub fn new<C>(identifier: impl Into<String>, create_fn: C) -> Self
    where
        C: Fn(&TInput) -> TPlugin + Send + Sync + 'static,
    {
        Self {
            identifier: identifier.into(),
            create_fn: Box::new(create_fn),
        }
    }

    /// Create a `TPlugin` plugin from `input`.
    pub fn create(&self, input: &TInput) -> TPlugin {
        (self.create_fn)(input)
    }

    /// Returns the identifier of the plugin.
    #[must_use]
    pub fn identifier(&self) -> &str {
        &self.identifier
    }
}

impl<TPlugin, TInput: ?Sized + 'static> std::fmt::Debug for RuntimePlugin<TPlugin, TInput> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RuntimePlugin")
            .field("identifier", &self.identifier)
            .finish_non_exhaustive()
    }
}

/// A dumper plugin.
#[derive(derive_more::Deref)]
pub struct DumperPlugin(Plugin<(ValueKind, Format), Arc<dyn Dumper>, Transformer>);
inventory::collect!(DumperPlugin);

impl DumperPlugin {
    /// Create a new [`DumperPlugin`] for values of `kind` dumped to `format`.
    pub const fn new(
        kind: ValueKind,
        format: Format,
        create_fn: fn(transformer: &Transformer) -> Arc<dyn Dumper>,
    ) -> Self {
        Self(Plugin::new((kind, format), create_fn))
    }
}

/// A loader plugin.
#[derive(derive_more::Deref)]
pub struct LoaderPlugin(Plugin<(Oid, Format), Arc<dyn Loader>, Transformer>);
inventory::collect!(LoaderPlugin);

impl LoaderPlugin {
    /// Create a new [`LoaderPlugin`] for the type `oid` loaded from `format`.
    pub const fn new(
        oid: Oid,
        format: Format,
        create_fn: fn(transformer: &Transformer) -> Arc<dyn Loader>,
    ) -> Self {
        Self(Plugin::new((oid, format), create_fn))
    }
}

/// A runtime dumper plugin.
pub type DumperRuntimePlugin = RuntimePlugin<Arc<dyn Dumper>, Transformer>;

/// A runtime loader plugin.
pub type LoaderRuntimePlugin = RuntimePlugin<Arc<dyn Loader>, Transformer>;

#[cfg(test)]
mod tests {
    use super::*;

    enum Input {
        Accept,
        Reject,
    }

    fn create_test(input: &Input) -> Result<u32, String> {
        match input {
            Input::Accept => Ok(1),
            Input::Reject => Err("rejected".to_string()),
        }
    }

    #[test]
    fn plugin() {
        let plugin = Plugin::new("test", create_test);
        assert!(!plugin.matches(&"fail"));
        assert!(plugin.matches(&"test"));
        assert_eq!(plugin.key(), &"test");
        assert!(plugin.create(&Input::Accept).is_ok());
        assert!(plugin.create(&Input::Reject).is_err());
    }

    #[test]
    fn runtime_plugin() {
        let offset = 10;
        let plugin = RuntimePlugin::new("offset", move |input: &u32| input + offset);
        assert_eq!(plugin.identifier(), "offset");
        assert_eq!(plugin.create(&5), 15);
        assert!(format!("{plugin:?}").contains("offset"));
    }
}
