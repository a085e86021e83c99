//! The text format of arrays, `{1,2,NULL}`.

use std::sync::{
    LazyLock,
    atomic::{AtomicU32, Ordering},
};

use pgarray_adapt::{
    AdaptError, DataError, Dumper, Format, Loader, Oid, Transformer, Value, ValueKind, oid,
};
use regex::bytes::Regex;

use super::{EncodedArray, array_oid};
use crate::{macros::register_dumper, types::unexpected_value};

/// Elements matching this pattern are dumped in double quotes.
static NEEDS_QUOTES: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"(?i-u)^$|["{},\\\s]|^null$"#).unwrap());

static ESCAPE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r#"(?-u)(["\\])"#).unwrap());

static UNESCAPE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?s-u)\\(.)").unwrap());

/// A bracket, a quoted element, or an unquoted element, followed by an optional delimiter.
static TOKEN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"(?xs-u)
        (     [{}]
            | " (?: [^"\\] | \\. )* "
            | [^"{},\\]+
        ) ,?
        "#,
    )
    .unwrap()
});

/// The last token read by [`decode_text`].
#[derive(Clone, Copy, PartialEq, Eq)]
enum Previous {
    Open,
    Delimiter,
    Element,
}

struct TextEncoder<'a> {
    transformer: &'a Transformer,
    out: Vec<u8>,
    base_oid: Option<Oid>,
}

impl TextEncoder<'_> {
    fn encode_list(&mut self, list: &[Value], depth: usize) -> Result<(), AdaptError> {
        let max_depth = self.transformer.options().max_array_depth();
        if depth > max_depth {
            return Err(DataError::NestingTooDeep { max_depth }.into());
        }

        self.out.push(b'{');
        for (i, item) in list.iter().enumerate() {
            if i > 0 {
                self.out.push(b',');
            }
            match item {
                Value::List(list) => self.encode_list(list, depth + 1)?,
                Value::Null => self.out.extend_from_slice(b"NULL"),
                item => {
                    let dumper = self.transformer.get_dumper(item, Format::Text)?;
                    let data = dumper.dump(item)?;
                    if NEEDS_QUOTES.is_match(&data) {
                        self.out.push(b'"');
                        self.out
                            .extend_from_slice(&ESCAPE.replace_all(&data, &br"\$1"[..]));
                        self.out.push(b'"');
                    } else {
                        self.out.extend_from_slice(&data);
                    }
                    self.base_oid.get_or_insert_with(|| dumper.oid());
                }
            }
        }
        self.out.push(b'}');
        Ok(())
    }
}

/// Encode `list` to the text format.
///
/// Elements are dumped by the text dumper of their own kind.
/// The array oid is the array type of the first non-`NULL` element, see [`EncodedArray::oid`].
///
/// # Errors
/// Returns an error if there is no dumper for an element, an element fails to dump, or `list` is nested too deep.
pub fn encode_text(transformer: &Transformer, list: &[Value]) -> Result<EncodedArray, AdaptError> {
    let mut encoder = TextEncoder {
        transformer,
        out: Vec::new(),
        base_oid: None,
    };
    encoder.encode_list(list, 1)?;
    let oid = array_oid(transformer, encoder.base_oid);
    Ok(EncodedArray::new(encoder.out, oid))
}

/// Decode a text format array with elements of type `base_oid`.
///
/// Quoted elements are unescaped before they are loaded, and `NULL` elements are [`Value::Null`].
///
/// # Errors
/// Returns an error if
///  - there is no text loader for `base_oid`,
///  - `data` is not a well-formed array, including a misplaced delimiter or any content after the array is closed,
///  - the array is nested deeper than
///    [`AdaptOptions::max_array_depth`](pgarray_adapt::AdaptOptions::max_array_depth), or
///  - an element fails to load.
pub fn decode_text(
    transformer: &Transformer,
    data: &[u8],
    base_oid: Oid,
) -> Result<Value, AdaptError> {
    let loader = transformer.get_loader(base_oid, Format::Text)?;
    let max_depth = transformer.options().max_array_depth();

    let mut stack: Vec<Vec<Value>> = Vec::new();
    let mut root: Option<Vec<Value>> = None;
    let mut previous = Previous::Open;
    let mut offset = 0;
    for captures in TOKEN.captures_iter(data) {
        let (Some(matched), Some(token)) = (captures.get(0), captures.get(1)) else {
            return Err(AdaptError::Internal("unmatched array token".to_string()));
        };
        if matched.start() != offset {
            return Err(DataError::malformed_array(&data[offset..matched.start()]).into());
        }
        offset = matched.end();
        let delimited = matched.end() != token.end();

        let token = token.as_bytes();
        if root.is_some() {
            return Err(DataError::malformed_array(token).into());
        }
        // Siblings are separated by exactly one delimiter
        let misplaced = match token {
            b"}" => previous == Previous::Delimiter,
            _ => previous == Previous::Element,
        };
        if misplaced || (delimited && token == b"{") {
            return Err(DataError::malformed_array(token).into());
        }

        match token {
            b"{" => {
                if stack.len() == max_depth {
                    return Err(DataError::NestingTooDeep { max_depth }.into());
                }
                stack.push(Vec::new());
            }
            b"}" => {
                let list = stack.pop().ok_or_else(|| DataError::malformed_array(token))?;
                match stack.last_mut() {
                    Some(parent) => parent.push(Value::List(list)),
                    None => root = Some(list),
                }
            }
            token => {
                let parent = stack
                    .last_mut()
                    .ok_or_else(|| DataError::malformed_array(token))?;
                let value = match token {
                    b"NULL" => Value::Null,
                    [b'"', quoted @ .., b'"'] => {
                        loader.load(&UNESCAPE.replace_all(quoted, &b"$1"[..]))?
                    }
                    token => loader.load(token)?,
                };
                parent.push(value);
            }
        }
        previous = match token {
            _ if delimited => Previous::Delimiter,
            b"{" => Previous::Open,
            _ => Previous::Element,
        };
    }

    if offset != data.len() {
        return Err(DataError::malformed_array(&data[offset..]).into());
    }
    if previous == Previous::Delimiter {
        return Err(DataError::malformed_array(b",").into());
    }
    match root {
        Some(root) => Ok(Value::List(root)),
        None if !stack.is_empty() => Err(DataError::UnterminatedArray.into()),
        None => Err(AdaptError::Internal(
            "the array root was never opened".to_string(),
        )),
    }
}

/// The text format array dumper.
///
/// [`Dumper::oid`] returns the array oid of the last dumped array, `text[]` before the first.
#[derive(Debug)]
pub struct ArrayDumper {
    transformer: Transformer,
    last_oid: AtomicU32,
}
register_dumper!(ValueKind::List, Format::Text, |transformer| {
    ArrayDumper::new(transformer.clone())
});

impl ArrayDumper {
    /// Create a new text array dumper.
    #[must_use]
    pub fn new(transformer: Transformer) -> Self {
        Self {
            transformer,
            last_oid: AtomicU32::new(oid::TEXT_ARRAY),
        }
    }
}

impl Dumper for ArrayDumper {
    fn dump(&self, value: &Value) -> Result<Vec<u8>, AdaptError> {
        let Value::List(list) = value else {
            return Err(unexpected_value(ValueKind::List, value));
        };
        let encoded = encode_text(&self.transformer, list)?;
        self.last_oid.store(encoded.oid(), Ordering::Relaxed);
        Ok(encoded.into_data())
    }

    fn oid(&self) -> Oid {
        self.last_oid.load(Ordering::Relaxed)
    }
}

/// The text format loader of arrays with `base_oid` elements.
#[derive(Debug, Clone)]
pub struct ArrayLoader {
    base_oid: Oid,
    transformer: Transformer,
}

impl ArrayLoader {
    /// Create a new text array loader for elements of type `base_oid`.
    #[must_use]
    pub fn new(base_oid: Oid, transformer: Transformer) -> Self {
        Self {
            base_oid,
            transformer,
        }
    }

    /// Return the element type oid.
    #[must_use]
    pub fn base_oid(&self) -> Oid {
        self.base_oid
    }
}

impl Loader for ArrayLoader {
    fn load(&self, data: &[u8]) -> Result<Value, AdaptError> {
        decode_text(&self.transformer, data, self.base_oid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn malformed(snippet: &str) -> AdaptError {
        DataError::MalformedArray {
            snippet: snippet.to_string(),
        }
        .into()
    }

    #[test]
    fn needs_quotes() {
        for data in ["", "a b", "a\tb", "{", "}", ",", "\"", "\\", "null", "NuLl"] {
            assert!(NEEDS_QUOTES.is_match(data.as_bytes()), "{data:?}");
        }
        for data in ["a", "nullable", "xnull", "1.5", "-Infinity"] {
            assert!(!NEEDS_QUOTES.is_match(data.as_bytes()), "{data:?}");
        }
    }

    #[test]
    fn encode_quoting() {
        let transformer = crate::transformer();
        let list = [
            Value::from("hello world"),
            Value::from("NULL"),
            Value::from(""),
            Value::from(r#"a"b\c"#),
            Value::from("plain"),
        ];
        let encoded = encode_text(&transformer, &list).unwrap();
        assert_eq!(
            encoded.data(),
            br#"{"hello world","NULL","","a\"b\\c",plain}"#
        );
        assert_eq!(encoded.oid(), oid::TEXT_ARRAY);
    }

    #[test]
    fn encode_nested() {
        let transformer = crate::transformer();
        let value = Value::from(vec![vec![Some(1i64), None], vec![], vec![Some(3)]]);
        let encoded = encode_text(&transformer, value.as_list().unwrap()).unwrap();
        assert_eq!(encoded.data(), b"{{1,NULL},{},{3}}");
        assert_eq!(encoded.oid(), oid::INT8_ARRAY);
    }

    #[test]
    fn encode_oid_from_first_element() {
        let transformer = crate::transformer();
        let list = [
            Value::Null,
            Value::List(vec![Value::Null, Value::Int2(1)]),
            Value::Int4(2),
        ];
        let encoded = encode_text(&transformer, &list).unwrap();
        assert_eq!(encoded.oid(), oid::INT2_ARRAY);
    }

    #[test]
    fn encode_too_deep() {
        let transformer = crate::transformer();
        let mut value = Value::List(vec![Value::Int4(1)]);
        for _ in 1..6 {
            value = Value::List(vec![value]);
        }
        assert_eq!(
            encode_text(&transformer, value.as_list().unwrap()).unwrap().data(),
            b"{{{{{{1}}}}}}"
        );
        let value = Value::List(vec![value]);
        assert_eq!(
            encode_text(&transformer, value.as_list().unwrap()),
            Err(DataError::NestingTooDeep { max_depth: 6 }.into())
        );
    }

    #[test]
    fn decode() {
        let transformer = crate::transformer();
        assert_eq!(
            decode_text(&transformer, b"{1,NULL,3}", oid::INT4).unwrap(),
            Value::from(vec![Some(1i32), None, Some(3)])
        );
        assert_eq!(
            decode_text(&transformer, b"{}", oid::INT4).unwrap(),
            Value::List(vec![])
        );
        assert_eq!(
            decode_text(&transformer, br#"{"a \"b\"","NULL",NULL,c\d}"#, oid::TEXT),
            Err(malformed("\\"))
        );
        assert_eq!(
            decode_text(&transformer, br#"{"a \"b\"","NULL",NULL,"c\\d"}"#, oid::TEXT).unwrap(),
            Value::from(vec![Some(r#"a "b""#), Some("NULL"), None, Some(r"c\d")])
        );
        assert_eq!(
            decode_text(&transformer, b"{{1,2},{3,4},{}}", oid::INT2).unwrap(),
            Value::List(vec![
                Value::from(vec![1i16, 2]),
                Value::from(vec![3i16, 4]),
                Value::List(vec![]),
            ])
        );
    }

    #[test]
    fn decode_malformed() {
        let transformer = crate::transformer();
        assert_eq!(decode_text(&transformer, b"{1,2}}", oid::INT4), Err(malformed("}")));
        assert_eq!(decode_text(&transformer, b"{1}{2}", oid::INT4), Err(malformed("{")));
        assert_eq!(decode_text(&transformer, b"1,{2}", oid::INT4), Err(malformed("1")));
        assert_eq!(decode_text(&transformer, b"{1,,2}", oid::INT4), Err(malformed(",")));
        assert_eq!(decode_text(&transformer, b"{\"1}", oid::TEXT), Err(malformed("\"")));
        assert_eq!(decode_text(&transformer, b"{1,}", oid::INT4), Err(malformed("}")));
        assert_eq!(decode_text(&transformer, b"{1},", oid::INT4), Err(malformed(",")));
        assert_eq!(decode_text(&transformer, b"{,1}", oid::INT4), Err(malformed("{")));
        assert_eq!(decode_text(&transformer, b"{{1},}", oid::INT4), Err(malformed("}")));
        assert_eq!(decode_text(&transformer, b"{{1}{2}}", oid::INT4), Err(malformed("{")));
        assert_eq!(decode_text(&transformer, b"{\"a\"\"b\"}", oid::TEXT), Err(malformed("\"b\"")));
        assert_eq!(
            decode_text(&transformer, b"{{1,2}", oid::INT4),
            Err(DataError::UnterminatedArray.into())
        );
        assert!(matches!(
            decode_text(&transformer, b"", oid::INT4),
            Err(AdaptError::Internal(_))
        ));
        assert!(matches!(
            decode_text(&transformer, b"{x}", oid::INT4),
            Err(AdaptError::Data(DataError::InvalidValue { .. }))
        ));
        assert_eq!(
            decode_text(&transformer, b"{1}", oid::DATE),
            Err(AdaptError::NoLoader {
                oid: oid::DATE,
                format: Format::Text
            })
        );
    }

    #[test]
    fn decode_too_deep() {
        let transformer = crate::transformer();
        assert!(decode_text(&transformer, b"{{{{{{1}}}}}}", oid::INT4).is_ok());
        assert_eq!(
            decode_text(&transformer, b"{{{{{{{1}}}}}}}", oid::INT4),
            Err(DataError::NestingTooDeep { max_depth: 6 }.into())
        );
    }

    #[test]
    fn dumper_records_oid() {
        let dumper = ArrayDumper::new(crate::transformer());
        assert_eq!(dumper.oid(), oid::TEXT_ARRAY);
        assert_eq!(dumper.dump(&Value::from(vec![true, false])).unwrap(), b"{t,f}");
        assert_eq!(dumper.oid(), oid::BOOL_ARRAY);
        assert_eq!(dumper.dump(&Value::from(vec![None::<bool>])).unwrap(), b"{NULL}");
        assert_eq!(dumper.oid(), oid::TEXT_ARRAY);
        assert!(dumper.dump(&Value::Int4(1)).is_err());
    }
}
