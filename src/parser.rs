//! PSON text parsing.
//!
//! Parsing happens in two steps. `serde_json` reads the text into a generic
//! JSON tree, and a single post-order pass then converts that tree into a
//! [`Value`]. The pass counts nesting and turns every raw object it finds
//! (at any position) into [`Value::Raw`].
//!
//! ## Examples
//!
//! ```rust
//! use serde_pson::{parse, ParserOptions, Value};
//!
//! let text = r#"{"id":7,"blob":{"type":"raw","data":[255,0]}}"#;
//! let value = parse(text, &ParserOptions::default()).unwrap();
//!
//! let blob = value.as_object().unwrap().get("blob").unwrap();
//! assert_eq!(blob, &Value::raw(vec![255, 0]));
//! ```

use crate::{raw, Error, PsonMap, Result, Value};
use std::io::Read;

/// Deepest document `serde_json` accepts.
const ENGINE_MAX_DEPTH: usize = 127;

/// Configuration for [`parse`].
///
/// # Examples
///
/// ```rust
/// use serde_pson::{from_pson_with_options, ParserOptions, Value};
///
/// // Keep raw objects as plain objects
/// let options = ParserOptions::new().with_decode_raw(false);
/// let value = from_pson_with_options(r#"{"type":"raw","data":[1]}"#, &options).unwrap();
/// assert!(value.is_object());
///
/// // Tighter nesting limit
/// let options = ParserOptions::new().with_max_nesting(1);
/// assert!(from_pson_with_options("[[1]]", &options).is_err());
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParserOptions {
    /// Maximum container depth; 0 means no limit beyond the engine's own.
    pub max_nesting: usize,
    /// Turn raw objects into [`Value::Raw`].
    pub decode_raw: bool,
}

impl Default for ParserOptions {
    fn default() -> Self {
        ParserOptions {
            max_nesting: 100,
            decode_raw: true,
        }
    }
}

impl ParserOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_max_nesting(mut self, max_nesting: usize) -> Self {
        self.max_nesting = max_nesting;
        self
    }

    #[must_use]
    pub fn with_decode_raw(mut self, decode_raw: bool) -> Self {
        self.decode_raw = decode_raw;
        self
    }
}

/// Parses PSON text into a [`Value`].
///
/// # Errors
///
/// - [`Error::Parse`] for malformed text, with the failure position
/// - [`Error::Nesting`] if the document is deeper than `max_nesting`
pub fn parse(text: &str, options: &ParserOptions) -> Result<Value> {
    let tree: serde_json::Value =
        serde_json::from_str(text).map_err(|err| engine_error(text, &err, options))?;
    Converter { options }.convert(tree, 0)
}

/// Parses PSON from bytes, checking UTF-8 first.
///
/// # Errors
///
/// Same as [`parse`]. Invalid UTF-8 is an [`Error::Parse`] positioned at the
/// first bad byte.
pub fn parse_slice(bytes: &[u8], options: &ParserOptions) -> Result<Value> {
    match std::str::from_utf8(bytes) {
        Ok(text) => parse(text, options),
        Err(err) => Err(utf8_error(bytes, err.valid_up_to())),
    }
}

/// Reads all of `reader` and parses it.
///
/// # Errors
///
/// [`Error::Io`] if reading fails, otherwise as [`parse_slice`].
pub fn parse_reader<R: Read>(mut reader: R, options: &ParserOptions) -> Result<Value> {
    let mut bytes = Vec::new();
    reader
        .read_to_end(&mut bytes)
        .map_err(|err| Error::io(&err.to_string()))?;
    parse_slice(&bytes, options)
}

struct Converter<'a> {
    options: &'a ParserOptions,
}

impl Converter<'_> {
    fn enter(&self, depth: usize) -> Result<usize> {
        let depth = depth + 1;
        let max = self.options.max_nesting;
        if max != 0 && depth > max {
            log::debug!("parse nesting {} exceeds max_nesting {}", depth, max);
            return Err(Error::nesting(depth, max));
        }
        Ok(depth)
    }

    fn convert(&self, tree: serde_json::Value, depth: usize) -> Result<Value> {
        use serde_json::Value as Json;

        let value = match tree {
            Json::Null => Value::Null,
            Json::Bool(b) => Value::Bool(b),
            Json::Number(n) => match (n.as_i64(), n.as_u64()) {
                (Some(i), _) => Value::Integer(i128::from(i)),
                (None, Some(u)) => Value::Integer(i128::from(u)),
                (None, None) => Value::Float(
                    n.as_f64()
                        .ok_or_else(|| Error::custom(format!("unrepresentable number {}", n)))?,
                ),
            },
            Json::String(s) => Value::String(s),
            Json::Array(items) => {
                let depth = self.enter(depth)?;
                let items = items
                    .into_iter()
                    .map(|item| self.convert(item, depth))
                    .collect::<Result<Vec<_>>>()?;
                Value::Array(items)
            }
            Json::Object(members) => {
                let depth = self.enter(depth)?;
                let mut map = PsonMap::with_capacity(members.len());
                for (key, member) in members {
                    map.insert(key, self.convert(member, depth)?);
                }
                if self.options.decode_raw {
                    if let Some(bytes) = raw::decode_object(&map) {
                        return Ok(Value::Raw(bytes));
                    }
                }
                Value::Object(map)
            }
        };
        Ok(value)
    }
}

fn engine_error(text: &str, err: &serde_json::Error, options: &ParserOptions) -> Error {
    let message = err.to_string();
    // serde_json appends " at line L column C"; the position is carried separately.
    let message = match message.rfind(" at line ") {
        Some(idx) => &message[..idx],
        None => message.as_str(),
    };

    if message.starts_with("recursion limit exceeded") {
        let max = match options.max_nesting {
            0 => ENGINE_MAX_DEPTH,
            max => max.min(ENGINE_MAX_DEPTH),
        };
        log::debug!("parse nesting exceeds the engine limit of {}", ENGINE_MAX_DEPTH);
        return Error::nesting(ENGINE_MAX_DEPTH + 1, max);
    }

    let (line, column) = (err.line(), err.column());
    Error::parse(line, column, char_offset(text, line, column), message)
}

/// 0-based character offset of a 1-based line/column position.
fn char_offset(text: &str, line: usize, column: usize) -> usize {
    let line_start: usize = text
        .split_inclusive('\n')
        .take(line.saturating_sub(1))
        .map(str::len)
        .sum();
    let mut byte = (line_start + column.saturating_sub(1)).min(text.len());
    while !text.is_char_boundary(byte) {
        byte -= 1;
    }
    text[..byte].chars().count()
}

fn utf8_error(bytes: &[u8], valid_up_to: usize) -> Error {
    // The prefix was validated by from_utf8.
    let prefix = String::from_utf8_lossy(&bytes[..valid_up_to]);
    let line = prefix.matches('\n').count() + 1;
    let column = match prefix.rfind('\n') {
        Some(idx) => prefix[idx + 1..].chars().count() + 1,
        None => prefix.chars().count() + 1,
    };
    Error::parse(
        line,
        column,
        prefix.chars().count(),
        &format!("invalid UTF-8 at byte {}", valid_up_to),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pson;

    fn parse_default(text: &str) -> Result<Value> {
        parse(text, &ParserOptions::default())
    }

    fn nested_arrays(depth: usize) -> String {
        format!("{}{}", "[".repeat(depth), "]".repeat(depth))
    }

    #[test]
    fn test_scalars_and_numbers() {
        assert_eq!(parse_default("null").unwrap(), Value::Null);
        assert_eq!(parse_default("true").unwrap(), Value::Bool(true));
        assert_eq!(parse_default("-7").unwrap(), Value::Integer(-7));
        assert_eq!(parse_default("1.0").unwrap(), Value::Float(1.0));
        assert_eq!(parse_default("1e3").unwrap(), Value::Float(1000.0));
        assert_eq!(
            parse_default("18446744073709551614").unwrap(),
            Value::from(u64::MAX - 1)
        );
        assert_eq!(
            parse_default("9223372036854775809").unwrap(),
            Value::Integer(9223372036854775809)
        );
        // Past u64 the engine only has floats
        assert_eq!(
            parse_default("18446744073709551616").unwrap(),
            Value::Float(18446744073709551616.0)
        );
    }

    #[test]
    fn test_array_with_escaped_string() {
        assert_eq!(
            parse_default(r#"[1,"a\"b",null]"#).unwrap(),
            pson!([1, "a\"b", null])
        );
    }

    #[test]
    fn test_raw_objects_anywhere() {
        let text = r#"[{"type":"raw","data":[0,1,2,255]},{"k":{"data":[],"type":"raw"}}]"#;
        let value = parse_default(text).unwrap();
        assert_eq!(
            value,
            Value::Array(vec![
                Value::raw(vec![0, 1, 2, 255]),
                pson!({"k": (Value::raw(vec![]))}),
            ])
        );
    }

    #[test]
    fn test_near_miss_stays_object() {
        let value = parse_default(r#"{"type":"raw","data":[1.5]}"#).unwrap();
        assert!(value.is_object());
    }

    #[test]
    fn test_decode_raw_disabled() {
        let options = ParserOptions::new().with_decode_raw(false);
        let value = parse(r#"{"type":"raw","data":[1]}"#, &options).unwrap();
        assert_eq!(value, pson!({"type": "raw", "data": [1]}));
    }

    #[test]
    fn test_nesting_limit() {
        let options = ParserOptions::new().with_max_nesting(3);
        assert!(parse(&nested_arrays(3), &options).is_ok());
        assert_eq!(
            parse(&nested_arrays(4), &options).unwrap_err(),
            Error::nesting(4, 3)
        );

        assert!(parse_default(&nested_arrays(100)).is_ok());
        assert!(parse_default(&nested_arrays(101)).unwrap_err().is_nesting());
    }

    #[test]
    fn test_raw_object_counts_two_levels() {
        let text = r#"{"type":"raw","data":[1]}"#;
        assert!(parse(text, &ParserOptions::new().with_max_nesting(1))
            .unwrap_err()
            .is_nesting());
        assert!(parse(text, &ParserOptions::new().with_max_nesting(2)).is_ok());
    }

    #[test]
    fn test_engine_recursion_limit_is_a_nesting_error() {
        let options = ParserOptions::new().with_max_nesting(0);
        assert!(parse(&nested_arrays(120), &options).is_ok());
        assert!(parse(&nested_arrays(200), &options).unwrap_err().is_nesting());
    }

    #[test]
    fn test_error_position() {
        let text = "{\n  \"a\": x}";
        match parse_default(text).unwrap_err() {
            Error::Parse {
                line,
                offset,
                message,
                ..
            } => {
                assert_eq!(line, 2);
                assert_eq!(offset, text.find('x').unwrap());
                assert!(!message.contains("at line"));
            }
            other => panic!("expected parse error, got {:?}", other),
        }
    }

    #[test]
    fn test_malformed_documents() {
        for text in ["", "[1, 2,", "{\"a\" 1}", "[1] 2", "'single'", "NaN"] {
            assert!(parse_default(text).unwrap_err().is_parse(), "{:?}", text);
        }
    }

    #[test]
    fn test_invalid_utf8() {
        let bytes = b"[\"ok\",\n\"\xff\"]";
        match parse_slice(bytes, &ParserOptions::default()).unwrap_err() {
            Error::Parse {
                line,
                column,
                offset,
                ..
            } => {
                assert_eq!(line, 2);
                assert_eq!(column, 2);
                assert_eq!(offset, 8);
            }
            other => panic!("expected parse error, got {:?}", other),
        }
    }

    #[test]
    fn test_reader() {
        let value = parse_reader(&b"{\"n\":1}"[..], &ParserOptions::default()).unwrap();
        assert_eq!(value, pson!({"n": 1}));
    }

    #[test]
    fn test_char_offset_counts_characters() {
        let text = "[\"é\", x]";
        // serde_json columns count bytes
        assert_eq!(char_offset(text, 1, 8), 6);
    }
}
