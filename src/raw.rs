//! The raw-object extension.
//!
//! A byte string is written as a JSON object with exactly two members:
//!
//! ```text
//! {"type":"raw","data":[255,0,65]}
//! ```
//!
//! Detection is structural. Any object of exactly this shape is a raw object,
//! wherever it appears in a document. Objects that almost match (an extra
//! member, a wrong tag, a data element outside `0..=255`) are ordinary
//! objects and are left alone.
//!
//! ## Examples
//!
//! ```rust
//! use serde_pson::raw;
//!
//! let value = raw::encode(&[0xFF, 0x00, 0x41]);
//! assert_eq!(value.to_string(), r#"{"type":"raw","data":[255,0,65]}"#);
//!
//! assert!(raw::matches(&value));
//! assert_eq!(raw::decode(&value).unwrap(), vec![0xFF, 0x00, 0x41]);
//! ```

use crate::{Error, PsonMap, Result, Value};

/// Tag value carried by the `type` member.
pub const RAW_TAG: &str = "raw";
/// Name of the tag member.
pub const TYPE_KEY: &str = "type";
/// Name of the byte array member.
pub const DATA_KEY: &str = "data";

/// Builds the raw object for `bytes`, one integer per byte.
#[must_use]
pub fn encode(bytes: &[u8]) -> Value {
    log::trace!("encoding {} bytes as a raw object", bytes.len());
    let data = bytes.iter().map(|&b| Value::Integer(i128::from(b))).collect();

    let mut map = PsonMap::with_capacity(2);
    map.insert(TYPE_KEY.to_string(), Value::String(RAW_TAG.to_string()));
    map.insert(DATA_KEY.to_string(), Value::Array(data));
    Value::Object(map)
}

/// Returns `true` if `value` has the raw object shape.
///
/// # Examples
///
/// ```rust
/// use serde_pson::{from_pson_with_options, raw, ParserOptions};
///
/// let options = ParserOptions::new().with_decode_raw(false);
/// let parse = |text| from_pson_with_options(text, &options).unwrap();
///
/// assert!(raw::matches(&parse(r#"{"type":"raw","data":[]}"#)));
/// assert!(!raw::matches(&parse(r#"{"type":"raw","data":[256]}"#)));
/// assert!(!raw::matches(&parse(r#"{"type":"raw","data":[1],"x":0}"#)));
/// ```
#[must_use]
pub fn matches(value: &Value) -> bool {
    match value {
        Value::Object(map) => decode_object(map).is_some(),
        _ => false,
    }
}

/// Returns the bytes of a raw object.
///
/// # Errors
///
/// Returns [`Error::InvalidRawObject`] if `value` does not have the raw
/// object shape.
pub fn decode(value: &Value) -> Result<Vec<u8>> {
    match value {
        Value::Object(map) => decode_object(map)
            .ok_or_else(|| Error::invalid_raw_object("object does not have the raw shape")),
        other => Err(Error::invalid_raw_object(&format!(
            "expected object, found {}",
            other.kind()
        ))),
    }
}

/// Classifies and decodes in one pass: `Some(bytes)` for a raw object,
/// `None` for anything else.
#[must_use]
pub fn decode_object(map: &PsonMap) -> Option<Vec<u8>> {
    if map.len() != 2 {
        return None;
    }
    match map.get(TYPE_KEY) {
        Some(Value::String(tag)) if tag == RAW_TAG => {}
        _ => return None,
    }
    let data = match map.get(DATA_KEY) {
        Some(Value::Array(data)) => data,
        _ => return None,
    };

    let bytes = data
        .iter()
        .map(|item| match item {
            Value::Integer(i) => u8::try_from(*i).ok(),
            _ => None,
        })
        .collect::<Option<Vec<u8>>>()?;
    log::trace!("recognized raw object of {} bytes", bytes.len());
    Some(bytes)
}
