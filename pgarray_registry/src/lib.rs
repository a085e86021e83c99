//! The PostgreSQL type catalog for the [`pgarray`](https://docs.rs/pgarray/latest/pgarray/index.html) crate.
//!
//! The catalog maps a type name to its object identifier (oid) and to the oid of the array type holding elements of that type.
//! [`TypesRegistry::builtins`] covers the types shipped with the server; custom types can be added with [`TypesRegistry::add`].
//!
//! ## Licence
//! `pgarray_registry` is licensed under either of
//!  - the Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> or
//!  - the MIT license <http://opensource.org/licenses/MIT>, at your option.

pub mod oid;

mod type_info;
pub use type_info::{TypeInfo, TypesRegistry};

/// A PostgreSQL object identifier.
pub type Oid = u32;
