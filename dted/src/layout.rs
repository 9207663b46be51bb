//! Declarative field tables and the generic decoder that applies them.
//!
//! A block layout is a static slice of [`Field`]s. Each field names a 1-based,
//! inclusive byte range (as printed in MIL-PRF-89020B) and a [`Conversion`]
//! chain that turns the sliced bytes into a [`Value`]. [`decode_fields`]
//! applies a table to a buffer and collects the results in a [`FieldMap`].

use std::collections::HashMap;

use crate::convert;
use crate::error::{ConversionError, DtedError, Result};

/// A 1-based, inclusive byte range within a block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ByteRange {
    pub start: usize,
    pub end: usize,
}

impl ByteRange {
    /// Number of bytes covered by the range.
    pub const fn len(&self) -> usize {
        self.end + 1 - self.start
    }

    /// Slice `buf` at this range, converting to a 0-based half-open range.
    pub fn slice<'a>(&self, buf: &'a [u8]) -> std::result::Result<&'a [u8], ConversionError> {
        if self.start == 0 || self.start > self.end || self.end > buf.len() {
            return Err(ConversionError::OutOfBounds {
                start: self.start,
                end: self.end,
                len: buf.len(),
            });
        }
        Ok(&buf[self.start - 1..self.end])
    }
}

/// Conversion chain applied to a field's bytes, left to right.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Conversion {
    /// Keep the raw bytes.
    Raw,
    /// bytes → text
    Text,
    /// bytes → text → integer
    Integer,
    /// bytes → text → integer → bool
    Flag,
    /// bytes → text → float
    Float,
    /// bytes → text → sexagesimal degrees
    Degrees,
    /// bytes → text → four digit single decimal
    Tenths,
    /// bytes → text → `NA` or integer
    NaOrInt,
    /// bytes → text → blank or integer
    EmptyOrInt,
}

impl Conversion {
    /// Run the chain over `raw`.
    pub fn apply(self, raw: &[u8]) -> std::result::Result<Value, ConversionError> {
        match self {
            Conversion::Raw => Ok(Value::Bytes(raw.to_vec())),
            Conversion::Text => convert::text(raw).map(|t| Value::Text(t.to_string())),
            Conversion::Integer => convert::text(raw)
                .and_then(convert::integer)
                .map(Value::Int),
            Conversion::Flag => convert::text(raw).and_then(convert::flag).map(Value::Flag),
            Conversion::Float => convert::text(raw).and_then(convert::float).map(Value::Float),
            Conversion::Degrees => convert::text(raw)
                .and_then(convert::degrees)
                .map(Value::Float),
            Conversion::Tenths => convert::text(raw)
                .and_then(convert::four_digit_single_decimal)
                .map(Value::Float),
            Conversion::NaOrInt => convert::text(raw)
                .and_then(convert::na_or_int)
                .map(Value::OptInt),
            Conversion::EmptyOrInt => convert::text(raw)
                .and_then(convert::empty_or_int)
                .map(Value::OptInt),
        }
    }
}

/// One entry of a block layout table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Field {
    pub name: &'static str,
    pub range: ByteRange,
    pub conversion: Conversion,
}

impl Field {
    pub const fn new(name: &'static str, start: usize, end: usize, conversion: Conversion) -> Self {
        Self {
            name,
            range: ByteRange { start, end },
            conversion,
        }
    }
}

/// A converted field value.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Bytes(Vec<u8>),
    Text(String),
    Int(i64),
    OptInt(Option<i64>),
    Float(f64),
    Flag(bool),
}

impl Value {
    fn kind(&self) -> &'static str {
        match self {
            Value::Bytes(_) => "bytes",
            Value::Text(_) => "text",
            Value::Int(_) => "integer",
            Value::OptInt(_) => "optional integer",
            Value::Float(_) => "float",
            Value::Flag(_) => "flag",
        }
    }
}

/// Decoded fields of one block, keyed by field name.
#[derive(Debug, Default)]
pub struct FieldMap {
    values: HashMap<&'static str, Value>,
}

macro_rules! accessor {
    ($(#[$doc:meta])* $name:ident, $variant:ident, $ty:ty, $kind:literal) => {
        $(#[$doc])*
        pub fn $name(&mut self, field: &'static str) -> Result<$ty> {
            match self.values.remove(field) {
                Some(Value::$variant(v)) => Ok(v),
                Some(other) => Err(DtedError::field(
                    field,
                    ConversionError::WrongType {
                        requested: $kind,
                        actual: other.kind(),
                    },
                )),
                None => Err(DtedError::field(field, ConversionError::Missing)),
            }
        }
    };
}

impl FieldMap {
    /// Number of decoded fields remaining in the map.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Borrow a decoded value without consuming it.
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.values.get(field)
    }

    accessor!(
        /// Take a raw byte field.
        bytes, Bytes, Vec<u8>, "bytes"
    );
    accessor!(
        /// Take a text field.
        text, Text, String, "text"
    );
    accessor!(
        /// Take an integer field.
        int, Int, i64, "integer"
    );
    accessor!(
        /// Take an integer field that may be absent.
        opt_int, OptInt, Option<i64>, "optional integer"
    );
    accessor!(
        /// Take a floating point field.
        float, Float, f64, "float"
    );
    accessor!(
        /// Take a boolean field.
        flag, Flag, bool, "flag"
    );

    /// Take an integer field that must fit a count.
    pub fn count(&mut self, field: &'static str) -> Result<u32> {
        let value = self.int(field)?;
        u32::try_from(value).map_err(|_| {
            DtedError::field(
                field,
                ConversionError::Domain {
                    value: value.to_string(),
                    reason: "not a valid count",
                },
            )
        })
    }
}

/// Highest byte position referenced by a layout table.
pub fn extent(fields: &[Field]) -> usize {
    fields.iter().map(|f| f.range.end).max().unwrap_or(0)
}

/// Check that `buf` starts with a block's recognition sentinel.
pub fn expect_sentinel(buf: &[u8], sentinel: &[u8], block: &'static str) -> Result<()> {
    if !buf.starts_with(sentinel) {
        return Err(DtedError::InvalidBlockIdentifier {
            block,
            expected: String::from_utf8_lossy(sentinel).into_owned(),
        });
    }
    Ok(())
}

/// Slice and convert every field of `fields` out of `buf`.
///
/// Fails on the first field whose range exceeds the buffer or whose
/// conversion chain fails, naming that field.
pub fn decode_fields(fields: &[Field], buf: &[u8]) -> Result<FieldMap> {
    let mut map = FieldMap::default();

    for field in fields {
        let value = field
            .range
            .slice(buf)
            .and_then(|raw| field.conversion.apply(raw))
            .map_err(|source| DtedError::field(field.name, source))?;
        map.values.insert(field.name, value);
    }

    Ok(map)
}

#[cfg(test)]
mod tests {
    use super::*;

    const TABLE: &[Field] = &[
        Field::new("tag", 1, 3, Conversion::Text),
        Field::new("count", 4, 7, Conversion::Integer),
        Field::new("accuracy", 8, 11, Conversion::NaOrInt),
        Field::new("interval", 12, 15, Conversion::Tenths),
        Field::new("flag", 16, 16, Conversion::Flag),
        Field::new("reserved", 17, 18, Conversion::Raw),
    ];

    #[test]
    fn test_byte_range_is_one_based_inclusive() {
        let range = ByteRange { start: 2, end: 4 };
        assert_eq!(range.len(), 3);
        assert_eq!(range.slice(b"abcdef").unwrap(), b"bcd");
    }

    #[test]
    fn test_byte_range_rejects_bad_ranges() {
        let buf = b"abc";
        assert!(ByteRange { start: 2, end: 4 }.slice(buf).is_err());
        assert!(ByteRange { start: 0, end: 1 }.slice(buf).is_err());
        assert!(ByteRange { start: 3, end: 1 }.slice(buf).is_err());
    }

    #[test]
    fn test_decode_fields() {
        let mut map = decode_fields(TABLE, b"ABC0042NA  01001\x00\x01").unwrap();
        assert_eq!(map.len(), TABLE.len());
        assert_eq!(extent(TABLE), 18);

        assert_eq!(map.text("tag").unwrap(), "ABC");
        assert_eq!(map.count("count").unwrap(), 42);
        assert_eq!(map.opt_int("accuracy").unwrap(), None);
        assert_eq!(map.float("interval").unwrap(), 10.0);
        assert!(map.flag("flag").unwrap());
        assert_eq!(map.bytes("reserved").unwrap(), vec![0, 1]);
        assert!(map.is_empty());
    }

    #[test]
    fn test_decode_fields_short_buffer_names_field() {
        let err = decode_fields(TABLE, b"ABC0042NA  0100").unwrap_err();
        match err {
            DtedError::FieldDecode { field, source } => {
                assert_eq!(field, "flag");
                assert!(matches!(source, ConversionError::OutOfBounds { len: 15, .. }));
            }
            other => panic!("Expected FieldDecode error, got {other:?}"),
        }
    }

    #[test]
    fn test_decode_fields_conversion_failure_names_field() {
        let err = decode_fields(TABLE, b"ABC00x2NA  01001\x00\x01").unwrap_err();
        assert!(matches!(
            err,
            DtedError::FieldDecode {
                field: "count",
                source: ConversionError::Parse { .. }
            }
        ));
    }

    #[test]
    fn test_expect_sentinel() {
        assert!(expect_sentinel(b"DSIU", b"DSI", "data set description").is_ok());

        let err = expect_sentinel(b"DS", b"DSI", "data set description").unwrap_err();
        assert!(err.to_string().contains("DSI"));
        assert!(matches!(
            err,
            DtedError::InvalidBlockIdentifier {
                block: "data set description",
                ..
            }
        ));
    }

    #[test]
    fn test_field_map_type_mismatch() {
        let mut map = decode_fields(TABLE, b"ABC0042NA  01001\x00\x01").unwrap();
        assert!(matches!(
            map.float("tag"),
            Err(DtedError::FieldDecode {
                source: ConversionError::WrongType { .. },
                ..
            })
        ));
        assert!(matches!(
            map.text("nope"),
            Err(DtedError::FieldDecode {
                source: ConversionError::Missing,
                ..
            })
        ));
    }
}
