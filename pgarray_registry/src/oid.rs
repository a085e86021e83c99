//! Oids of the builtin types.
//!
//! Array type oids use the server's naming, an underscore followed by the element type name.

use crate::Oid;

/// The `bool` type.
pub const BOOL: Oid = 16;
/// The `bool[]` type.
pub const BOOL_ARRAY: Oid = 1000;

/// The `bytea` type.
pub const BYTEA: Oid = 17;
/// The `bytea[]` type.
pub const BYTEA_ARRAY: Oid = 1001;

/// The `"char"` type.
pub const CHAR: Oid = 18;
/// The `"char"[]` type.
pub const CHAR_ARRAY: Oid = 1002;

/// The `name` type.
pub const NAME: Oid = 19;
/// The `name[]` type.
pub const NAME_ARRAY: Oid = 1003;

/// The `int8` type.
pub const INT8: Oid = 20;
/// The `int8[]` type.
pub const INT8_ARRAY: Oid = 1016;

/// The `int2` type.
pub const INT2: Oid = 21;
/// The `int2[]` type.
pub const INT2_ARRAY: Oid = 1005;

/// The `int4` type.
pub const INT4: Oid = 23;
/// The `int4[]` type.
pub const INT4_ARRAY: Oid = 1007;

/// The `text` type.
pub const TEXT: Oid = 25;
/// The `text[]` type.
pub const TEXT_ARRAY: Oid = 1009;

/// The `oid` type.
pub const OID: Oid = 26;
/// The `oid[]` type.
pub const OID_ARRAY: Oid = 1028;

/// The `json` type.
pub const JSON: Oid = 114;
/// The `json[]` type.
pub const JSON_ARRAY: Oid = 199;

/// The `xml` type.
pub const XML: Oid = 142;
/// The `xml[]` type.
pub const XML_ARRAY: Oid = 143;

/// The `cidr` type.
pub const CIDR: Oid = 650;
/// The `cidr[]` type.
pub const CIDR_ARRAY: Oid = 651;

/// The `float4` type.
pub const FLOAT4: Oid = 700;
/// The `float4[]` type.
pub const FLOAT4_ARRAY: Oid = 1021;

/// The `float8` type.
pub const FLOAT8: Oid = 701;
/// The `float8[]` type.
pub const FLOAT8_ARRAY: Oid = 1022;

/// The `unknown` pseudo type. It has no array type.
pub const UNKNOWN: Oid = 705;

/// The `money` type.
pub const MONEY: Oid = 790;
/// The `money[]` type.
pub const MONEY_ARRAY: Oid = 791;

/// The `inet` type.
pub const INET: Oid = 869;
/// The `inet[]` type.
pub const INET_ARRAY: Oid = 1041;

/// The `bpchar` type.
pub const BPCHAR: Oid = 1042;
/// The `bpchar[]` type.
pub const BPCHAR_ARRAY: Oid = 1014;

/// The `varchar` type.
pub const VARCHAR: Oid = 1043;
/// The `varchar[]` type.
pub const VARCHAR_ARRAY: Oid = 1015;

/// The `date` type.
pub const DATE: Oid = 1082;
/// The `date[]` type.
pub const DATE_ARRAY: Oid = 1182;

/// The `time` type.
pub const TIME: Oid = 1083;
/// The `time[]` type.
pub const TIME_ARRAY: Oid = 1183;

/// The `timestamp` type.
pub const TIMESTAMP: Oid = 1114;
/// The `timestamp[]` type.
pub const TIMESTAMP_ARRAY: Oid = 1115;

/// The `timestamptz` type.
pub const TIMESTAMPTZ: Oid = 1184;
/// The `timestamptz[]` type.
pub const TIMESTAMPTZ_ARRAY: Oid = 1185;

/// The `interval` type.
pub const INTERVAL: Oid = 1186;
/// The `interval[]` type.
pub const INTERVAL_ARRAY: Oid = 1187;

/// The `timetz` type.
pub const TIMETZ: Oid = 1266;
/// The `timetz[]` type.
pub const TIMETZ_ARRAY: Oid = 1270;

/// The `bit` type.
pub const BIT: Oid = 1560;
/// The `bit[]` type.
pub const BIT_ARRAY: Oid = 1561;

/// The `varbit` type.
pub const VARBIT: Oid = 1562;
/// The `varbit[]` type.
pub const VARBIT_ARRAY: Oid = 1563;

/// The `numeric` type.
pub const NUMERIC: Oid = 1700;
/// The `numeric[]` type.
pub const NUMERIC_ARRAY: Oid = 1231;

/// The `uuid` type.
pub const UUID: Oid = 2950;
/// The `uuid[]` type.
pub const UUID_ARRAY: Oid = 2951;

/// The `jsonb` type.
pub const JSONB: Oid = 3802;
/// The `jsonb[]` type.
pub const JSONB_ARRAY: Oid = 3807;
