//! The array codecs.
//!
//! Arrays are [`Value::List`](pgarray_adapt::Value::List) values, dumped by [`ArrayDumper`] (text) and [`ArrayBinaryDumper`] (binary).
//! The array type oid of a dumped array is the array type of its first non-`NULL` element, `text[]` if there is none.
//!
//! Arrays are loaded by [`ArrayLoader`] (text) and [`ArrayBinaryLoader`] (binary), which are bound to the element type of the array type they are registered for.
//! See [`register_array`] and [`register_all_arrays`].

mod binary;
mod text;

use std::sync::Arc;

pub use binary::{ArrayBinaryDumper, ArrayBinaryLoader, decode_binary, encode_binary};
use pgarray_adapt::{
    AdaptersMap, Format, Loader, LoaderRuntimePlugin, Oid, RuntimeRegistryHandle, Transformer,
    oid,
};
pub use text::{ArrayDumper, ArrayLoader, decode_text, encode_text};

/// An encoded array and its array type oid.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EncodedArray {
    data: Vec<u8>,
    oid: Oid,
}

impl EncodedArray {
    fn new(data: Vec<u8>, oid: Oid) -> Self {
        Self { data, oid }
    }

    /// Return the encoded bytes.
    #[must_use]
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Return the array type oid.
    #[must_use]
    pub fn oid(&self) -> Oid {
        self.oid
    }

    /// Consume self and return the encoded bytes.
    #[must_use]
    pub fn into_data(self) -> Vec<u8> {
        self.data
    }
}

/// Return the array type oid for arrays of `base_oid` elements.
///
/// Falls back to `text[]` if there are no elements or the catalog has no array type for `base_oid`.
fn array_oid(transformer: &Transformer, base_oid: Option<Oid>) -> Oid {
    let Some(base_oid) = base_oid.filter(|&base_oid| base_oid != 0) else {
        return oid::TEXT_ARRAY;
    };
    if let Some(array_oid) = transformer.types().array_oid(base_oid) {
        array_oid
    } else {
        if transformer.options().warn_unknown_array_oid() {
            log::warn!(
                "The type catalog has no array type for element oid {base_oid}, using text[] ({}).",
                oid::TEXT_ARRAY
            );
        }
        oid::TEXT_ARRAY
    }
}

/// Register the loader of arrays of type `array_oid` with `base_oid` elements for `format`.
///
/// Any loader previously registered for `array_oid` and `format` is replaced.
pub fn register_array_loader(
    adapters: &AdaptersMap,
    array_oid: Oid,
    base_oid: Oid,
    format: Format,
) -> RuntimeRegistryHandle<LoaderRuntimePlugin> {
    let name = adapters
        .types()
        .get(base_oid)
        .map_or_else(|| format!("oid{base_oid}"), |info| info.name().to_string());
    let plugin = match format {
        Format::Text => LoaderRuntimePlugin::new(format!("{name}[]"), move |transformer| {
            Arc::new(ArrayLoader::new(base_oid, transformer.clone())) as Arc<dyn Loader>
        }),
        Format::Binary => LoaderRuntimePlugin::new(format!("{name}[] binary"), move |transformer| {
            Arc::new(ArrayBinaryLoader::new(base_oid, transformer.clone())) as Arc<dyn Loader>
        }),
    };
    adapters.register_loader(array_oid, format, plugin)
}

/// Register the loaders of arrays of type `array_oid` with `base_oid` elements for both formats.
pub fn register_array(adapters: &AdaptersMap, array_oid: Oid, base_oid: Oid) {
    for format in Format::ALL {
        register_array_loader(adapters, array_oid, base_oid, format);
    }
}

/// Register the array types of every type in the catalog of `adapters` that has a loader.
///
/// A type is registered if it has an array type and a loader for either format.
/// This function is intended to be called once, after the loaders of the element types are registered.
/// Calling it again re-registers the same array types.
///
/// Returns the number of array types registered.
pub fn register_all_arrays(adapters: &AdaptersMap) -> usize {
    let mut count = 0;
    for info in adapters.types().iter() {
        if info.array_oid() != 0
            && (adapters.has_loader(info.oid(), Format::Text)
                || adapters.has_loader(info.oid(), Format::Binary))
        {
            register_array(adapters, info.array_oid(), info.oid());
            count += 1;
        }
    }
    log::debug!("Registered {count} array types");
    count
}
