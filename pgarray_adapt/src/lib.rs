//! The value adaptation API for the [`pgarray`](https://docs.rs/pgarray/latest/pgarray/index.html) crate.
//!
//! A [`Dumper`] converts a [`Value`] to the bytes of a wire [`Format`], and a [`Loader`] converts those bytes back.
//! Adapters are created from plugins held by an [`AdaptersMap`]:
//!  - compile-time plugins ([`DumperPlugin`], [`LoaderPlugin`]) are registered with the [`inventory`](https://docs.rs/inventory/latest/inventory/) crate,
//!  - runtime plugins ([`DumperRuntimePlugin`], [`LoaderRuntimePlugin`]) are registered on a specific [`AdaptersMap`] and take precedence.
//!
//! A [`Transformer`] resolves the adapter for a value (when dumping) or for a type oid (when loading).
//!
//! ## Licence
//! `pgarray_adapt` is licensed under either of
//!  - the Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> or
//!  - the MIT license <http://opensource.org/licenses/MIT>, at your option.

mod adapt;
pub use adapt::{Dumper, Loader};

mod adapters_map;
pub use adapters_map::AdaptersMap;

mod error;
pub use error::{AdaptError, DataError};

mod format;
pub use format::Format;

mod options;
pub use options::{AdaptOptions, DEFAULT_MAX_ARRAY_DEPTH};

mod plugin;
pub use plugin::{
    DumperPlugin, DumperRuntimePlugin, LoaderPlugin, LoaderRuntimePlugin, Plugin, RuntimePlugin,
};

mod runtime_registry;
pub use runtime_registry::{RuntimeRegistry, RuntimeRegistryHandle};

mod transformer;
pub use transformer::Transformer;

mod value;
pub use value::{Value, ValueKind};

pub use pgarray_registry::{Oid, TypeInfo, TypesRegistry, oid};
