use std::sync::Arc;

use crate::{
    AdaptError, AdaptOptions, AdaptersMap, Dumper, Format, Loader, Oid, TypesRegistry, Value,
};

/// Resolves the adapters for values and types from an [`AdaptersMap`].
///
/// A transformer is cheap to clone. Adapters which adapt nested values, such as arrays, hold a clone.
#[derive(Debug, Clone)]
pub struct Transformer {
    adapters: Arc<AdaptersMap>,
    options: AdaptOptions,
}

impl Transformer {
    /// Create a new transformer over `adapters` with default options.
    #[must_use]
    pub fn new(adapters: Arc<AdaptersMap>) -> Self {
        Self {
            adapters,
            options: AdaptOptions::default(),
        }
    }

    /// Set the adaptation options.
    #[must_use]
    pub fn with_options(mut self, options: AdaptOptions) -> Self {
        self.options = options;
        self
    }

    /// Return the adapters map.
    #[must_use]
    pub fn adapters(&self) -> &Arc<AdaptersMap> {
        &self.adapters
    }

    /// Return the type catalog.
    #[must_use]
    pub fn types(&self) -> &TypesRegistry {
        self.adapters.types()
    }

    /// Return the adaptation options.
    #[must_use]
    pub fn options(&self) -> &AdaptOptions {
        &self.options
    }

    /// Return a dumper for `value` to `format`.
    ///
    /// # Errors
    /// Returns [`AdaptError::NoDumper`] if no dumper is available for the kind of `value`.
    pub fn get_dumper(
        &self,
        value: &Value,
        format: Format,
    ) -> Result<Arc<dyn Dumper>, AdaptError> {
        let kind = value.kind();
        self.adapters
            .create_dumper(kind, format, self)
            .ok_or(AdaptError::NoDumper { kind, format })
    }

    /// Return a loader for the type `oid` from `format`.
    ///
    /// # Errors
    /// Returns [`AdaptError::NoLoader`] if no loader is available for `oid`.
    pub fn get_loader(&self, oid: Oid, format: Format) -> Result<Arc<dyn Loader>, AdaptError> {
        self.adapters
            .create_loader(oid, format, self)
            .ok_or(AdaptError::NoLoader { oid, format })
    }
}
