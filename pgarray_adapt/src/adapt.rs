use std::fmt::Debug;

use crate::{AdaptError, Oid, Value};

/// Traits for a dumper, converting a [`Value`] to the bytes of a wire format.
pub trait Dumper: Debug + Send + Sync {
    /// Dump `value`.
    ///
    /// # Errors
    /// Returns an [`AdaptError`] if `value` is not supported by this dumper or cannot be represented.
    fn dump(&self, value: &Value) -> Result<Vec<u8>, AdaptError>;

    /// The oid of the type produced by [`dump`](Dumper::dump).
    ///
    /// A dumper whose type depends on the dumped value returns the type of the last value dumped.
    fn oid(&self) -> Oid;
}

/// Traits for a loader, converting the bytes of a wire format to a [`Value`].
pub trait Loader: Debug + Send + Sync {
    /// Load a value from `data`.
    ///
    /// # Errors
    /// Returns an [`AdaptError`] if `data` is not a valid representation of the type.
    fn load(&self, data: &[u8]) -> Result<Value, AdaptError>;
}
