use std::borrow::Cow;
use std::collections::HashMap;

use crate::{Oid, oid};

/// Information about a type: its name, oid, and the oid of its array type.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TypeInfo {
    name: Cow<'static, str>,
    oid: Oid,
    array_oid: Oid,
}

impl TypeInfo {
    /// Create a new [`TypeInfo`].
    ///
    /// An `array_oid` of zero means the type has no array type.
    #[must_use]
    pub fn new(name: impl Into<Cow<'static, str>>, oid: Oid, array_oid: Oid) -> Self {
        Self {
            name: name.into(),
            oid,
            array_oid,
        }
    }

    const fn builtin(name: &'static str, oid: Oid, array_oid: Oid) -> Self {
        Self {
            name: Cow::Borrowed(name),
            oid,
            array_oid,
        }
    }

    /// Return the type name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Return the type oid.
    #[must_use]
    pub fn oid(&self) -> Oid {
        self.oid
    }

    /// Return the array type oid, zero if the type has no array type.
    #[must_use]
    pub fn array_oid(&self) -> Oid {
        self.array_oid
    }
}

static BUILTINS: &[TypeInfo] = &[
    TypeInfo::builtin("bool", oid::BOOL, oid::BOOL_ARRAY),
    TypeInfo::builtin("bytea", oid::BYTEA, oid::BYTEA_ARRAY),
    TypeInfo::builtin("char", oid::CHAR, oid::CHAR_ARRAY),
    TypeInfo::builtin("name", oid::NAME, oid::NAME_ARRAY),
    TypeInfo::builtin("int8", oid::INT8, oid::INT8_ARRAY),
    TypeInfo::builtin("int2", oid::INT2, oid::INT2_ARRAY),
    TypeInfo::builtin("int4", oid::INT4, oid::INT4_ARRAY),
    TypeInfo::builtin("text", oid::TEXT, oid::TEXT_ARRAY),
    TypeInfo::builtin("oid", oid::OID, oid::OID_ARRAY),
    TypeInfo::builtin("json", oid::JSON, oid::JSON_ARRAY),
    TypeInfo::builtin("xml", oid::XML, oid::XML_ARRAY),
    TypeInfo::builtin("cidr", oid::CIDR, oid::CIDR_ARRAY),
    TypeInfo::builtin("float4", oid::FLOAT4, oid::FLOAT4_ARRAY),
    TypeInfo::builtin("float8", oid::FLOAT8, oid::FLOAT8_ARRAY),
    TypeInfo::builtin("unknown", oid::UNKNOWN, 0),
    TypeInfo::builtin("money", oid::MONEY, oid::MONEY_ARRAY),
    TypeInfo::builtin("inet", oid::INET, oid::INET_ARRAY),
    TypeInfo::builtin("bpchar", oid::BPCHAR, oid::BPCHAR_ARRAY),
    TypeInfo::builtin("varchar", oid::VARCHAR, oid::VARCHAR_ARRAY),
    TypeInfo::builtin("date", oid::DATE, oid::DATE_ARRAY),
    TypeInfo::builtin("time", oid::TIME, oid::TIME_ARRAY),
    TypeInfo::builtin("timestamp", oid::TIMESTAMP, oid::TIMESTAMP_ARRAY),
    TypeInfo::builtin("timestamptz", oid::TIMESTAMPTZ, oid::TIMESTAMPTZ_ARRAY),
    TypeInfo::builtin("interval", oid::INTERVAL, oid::INTERVAL_ARRAY),
    TypeInfo::builtin("timetz", oid::TIMETZ, oid::TIMETZ_ARRAY),
    TypeInfo::builtin("bit", oid::BIT, oid::BIT_ARRAY),
    TypeInfo::builtin("varbit", oid::VARBIT, oid::VARBIT_ARRAY),
    TypeInfo::builtin("numeric", oid::NUMERIC, oid::NUMERIC_ARRAY),
    TypeInfo::builtin("uuid", oid::UUID, oid::UUID_ARRAY),
    TypeInfo::builtin("jsonb", oid::JSONB, oid::JSONB_ARRAY),
];

/// A catalog of [`TypeInfo`], indexed by oid and by name.
///
/// The catalog is populated before it is shared and is read-only afterwards.
#[derive(Clone, Debug, Default)]
pub struct TypesRegistry {
    types: Vec<TypeInfo>,
    by_oid: HashMap<Oid, usize>,
    by_name: HashMap<String, usize>,
}

impl TypesRegistry {
    /// Create an empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a catalog of the builtin types.
    #[must_use]
    pub fn builtins() -> Self {
        let mut registry = Self::new();
        for info in BUILTINS {
            registry.add(info.clone());
        }
        registry
    }

    /// Add a type to the catalog.
    ///
    /// An existing entry with the same oid is replaced.
    pub fn add(&mut self, info: TypeInfo) {
        if let Some(&index) = self.by_oid.get(&info.oid) {
            let previous = std::mem::replace(&mut self.types[index], info);
            self.by_name.remove(previous.name());
            self.by_name.insert(self.types[index].name().to_string(), index);
        } else {
            let index = self.types.len();
            self.by_oid.insert(info.oid, index);
            self.by_name.insert(info.name().to_string(), index);
            self.types.push(info);
        }
    }

    /// Add a type to the catalog.
    #[must_use]
    pub fn with_type(mut self, info: TypeInfo) -> Self {
        self.add(info);
        self
    }

    /// Return the type with `oid`.
    #[must_use]
    pub fn get(&self, oid: Oid) -> Option<&TypeInfo> {
        self.by_oid.get(&oid).map(|&index| &self.types[index])
    }

    /// Return the type named `name`.
    #[must_use]
    pub fn get_by_name(&self, name: &str) -> Option<&TypeInfo> {
        self.by_name.get(name).map(|&index| &self.types[index])
    }

    /// Return the oid of the array type of the type with `oid`.
    ///
    /// Returns [`None`] if the type is unknown or has no array type.
    #[must_use]
    pub fn array_oid(&self, oid: Oid) -> Option<Oid> {
        self.get(oid)
            .map(TypeInfo::array_oid)
            .filter(|&array_oid| array_oid != 0)
    }

    /// Iterate over the types in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &TypeInfo> {
        self.types.iter()
    }

    /// Return the number of types.
    #[must_use]
    pub fn len(&self) -> usize {
        self.types.len()
    }

    /// Returns true if the catalog is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtins_lookup() {
        let types = TypesRegistry::builtins();
        let int4 = types.get(oid::INT4).unwrap();
        assert_eq!(int4.name(), "int4");
        assert_eq!(int4.array_oid(), oid::INT4_ARRAY);
        assert_eq!(types.get_by_name("text").unwrap().oid(), oid::TEXT);
        assert_eq!(types.array_oid(oid::FLOAT8), Some(oid::FLOAT8_ARRAY));
        assert!(types.get(0).is_none());
        assert!(types.get_by_name("int4[]").is_none());
    }

    #[test]
    fn no_array_type() {
        let types = TypesRegistry::builtins();
        assert!(types.get(oid::UNKNOWN).is_some());
        assert_eq!(types.array_oid(oid::UNKNOWN), None);
        assert_eq!(types.array_oid(123_456), None);
    }

    #[test]
    fn add_custom_type() {
        let mut types = TypesRegistry::builtins();
        let len = types.len();
        types.add(TypeInfo::new("hstore", 16_390, 16_395));
        assert_eq!(types.len(), len + 1);
        assert_eq!(types.array_oid(16_390), Some(16_395));

        // Same oid, new name
        types.add(TypeInfo::new("hstore2", 16_390, 16_396));
        assert_eq!(types.len(), len + 1);
        assert!(types.get_by_name("hstore").is_none());
        assert_eq!(types.get_by_name("hstore2").unwrap().array_oid(), 16_396);
    }

    #[test]
    fn iteration_order() {
        let types = TypesRegistry::new()
            .with_type(TypeInfo::new("b", 2, 20))
            .with_type(TypeInfo::new("a", 1, 10));
        let names: Vec<_> = types.iter().map(TypeInfo::name).collect();
        assert_eq!(names, ["b", "a"]);
        assert!(!types.is_empty());
        assert!(TypesRegistry::new().is_empty());
    }
}
