//! PostgreSQL array adaptation for the text and binary wire formats.
//!
//! An array [`Value::List`] is converted to and from
//!  - the text format, `{1,2,NULL}` with nested `{}` for each dimension, and
//!  - the binary format, a header with the dimensions and element type oid followed by length-prefixed elements.
//!
//! Elements are adapted by the dumpers and loaders of their own type, resolved with a [`Transformer`].
//! Dumpers and loaders of the builtin scalar types are in [`types`], the array codecs are in [`array`].
//!
//! ## Getting started
//! ```
//! use pgarray::{Format, Value, oid};
//!
//! let transformer = pgarray::transformer();
//! let value = Value::from(vec![Some(1i32), None, Some(3)]);
//!
//! let encoded = pgarray::array::encode_text(&transformer, value.as_list().unwrap())?;
//! assert_eq!(encoded.data(), b"{1,NULL,3}");
//! assert_eq!(encoded.oid(), oid::INT4_ARRAY);
//!
//! let loader = transformer.get_loader(oid::INT4_ARRAY, Format::Text)?;
//! assert_eq!(loader.load(encoded.data())?, value);
//! # Ok::<(), pgarray::AdaptError>(())
//! ```
//!
//! ## Array type registration
//! An array type is loadable once its loaders are registered on the [`AdaptersMap`].
//! The default map returned by [`adapters`] has the loaders of every builtin array type whose element type has a loader, see [`array::register_all_arrays`].
//! Arrays of custom types are registered with [`array::register_array`].
//!
//! ## Licence
//! `pgarray` is licensed under either of
//!  - the Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> or
//!  - the MIT license <http://opensource.org/licenses/MIT>, at your option.

use std::sync::{Arc, LazyLock};

mod macros;

pub mod array;
pub mod types;

pub use pgarray_adapt::{
    AdaptError, AdaptOptions, AdaptersMap, DataError, Dumper, Format, Loader, Oid, Transformer,
    TypeInfo, TypesRegistry, Value, ValueKind, oid,
};

static ADAPTERS: LazyLock<Arc<AdaptersMap>> = LazyLock::new(|| {
    let adapters = AdaptersMap::new(TypesRegistry::builtins());
    array::register_all_arrays(&adapters);
    Arc::new(adapters)
});

/// Return the process-wide default [`AdaptersMap`].
///
/// The map holds the builtin type catalog, and the arrays of the builtin types are registered on first use.
#[must_use]
pub fn adapters() -> Arc<AdaptersMap> {
    Arc::clone(&ADAPTERS)
}

/// Return a [`Transformer`] over the default [`AdaptersMap`] with default options.
#[must_use]
pub fn transformer() -> Transformer {
    Transformer::new(adapters())
}
