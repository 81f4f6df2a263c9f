//! # serde_pson
//!
//! A Serde-compatible serialization library for PSON, JSON extended with raw
//! binary strings.
//!
//! ## What is PSON?
//!
//! JSON strings are Unicode text. Byte strings that are not valid UTF-8
//! (hashes, compressed blobs, legacy encodings) have no faithful JSON string
//! form. PSON is plain JSON plus one convention: a byte string is written as
//! a raw object
//!
//! ```text
//! {"type":"raw","data":[255,0,65]}
//! ```
//!
//! and any object of exactly that shape reads back as the original bytes.
//! Every PSON document is valid JSON, so any JSON tool can still read it.
//!
//! ## Key Features
//!
//! - **Byte-exact**: raw strings survive a text round trip unchanged,
//!   including NUL and invalid UTF-8
//! - **Configurable layout**: indentation, spacing, newlines and ASCII-only
//!   output through [`GenerationState`]
//! - **Nesting limits**: on both the generating and the parsing side
//! - **Serde Compatible**: `#[derive(Serialize, Deserialize)]` types work
//!   directly; `serialize_bytes` (e.g. `serde_bytes`) produces raw objects
//!
//! ## Quick Start
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! serde_pson = "0.1"
//! serde = { version = "1.0", features = ["derive"] }
//! ```
//!
//! ### Working with Values
//!
//! ```rust
//! use serde_pson::{from_pson, to_pson, Value};
//!
//! let value = Value::Array(vec![Value::from("text"), Value::raw(vec![0xFF, 0x00])]);
//!
//! let text = to_pson(&value, None).unwrap();
//! assert_eq!(text, r#"["text",{"type":"raw","data":[255,0]}]"#);
//!
//! assert_eq!(from_pson(&text).unwrap(), value);
//! ```
//!
//! ### Basic Serialization and Deserialization
//!
//! ```rust
//! use serde::{Deserialize, Serialize};
//! use serde_pson::{from_str, to_string};
//!
//! #[derive(Serialize, Deserialize, PartialEq, Debug)]
//! struct User {
//!     id: u32,
//!     name: String,
//!     active: bool,
//! }
//!
//! let user = User {
//!     id: 123,
//!     name: "Alice".to_string(),
//!     active: true,
//! };
//!
//! let pson = to_string(&user).unwrap();
//! assert_eq!(pson, r#"{"id":123,"name":"Alice","active":true}"#);
//!
//! let user_back: User = from_str(&pson).unwrap();
//! assert_eq!(user, user_back);
//! ```
//!
//! ### Dynamic Values with pson! Macro
//!
//! ```rust
//! use serde_pson::{pson, Value};
//!
//! let data = pson!({
//!     "name": "Alice",
//!     "age": 30,
//!     "tags": ["rust", "serde"]
//! });
//!
//! if let Value::Object(obj) = data {
//!     assert_eq!(obj.get("name").and_then(|v| v.as_str()), Some("Alice"));
//! }
//! ```
//!
//! ## Logging
//!
//! The crate logs through the [`log`] facade: `debug!` when a nesting limit
//! or an option check rejects a call, `trace!` when raw objects are written
//! or recognized. No logger is installed by the library.
//!
//! ## Examples
//!
//! See the `demos/` directory:
//!
//! - **`simple.rs`** - Serializing a struct and reading it back
//! - **`macro.rs`** - Building values with the pson! macro
//! - **`raw_bytes.rs`** - Binary payloads as raw objects
//! - **`dynamic_values.rs`** - Working with `Value` dynamically
//! - **`custom_state.rs`** - Layout, ASCII-only output and nesting limits
//!
//! Run any example with: `cargo run --example <name>`

pub mod de;
pub mod error;
pub mod generator;
pub mod macros;
pub mod map;
pub mod parser;
pub mod raw;
pub mod ser;
pub mod state;
pub mod value;

pub use de::ValueDeserializer;
pub use error::{Error, Result};
pub use generator::generate;
pub use map::PsonMap;
pub use parser::{parse, ParserOptions};
pub use ser::ValueSerializer;
pub use state::{GenerationOptions, GenerationState};
pub use value::Value;

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::io;

/// Writes a [`Value`] as PSON text.
///
/// Without a state the output is compact. A supplied state is validated,
/// used for layout and nesting checks, and left at depth 0 afterwards.
///
/// # Examples
///
/// ```rust
/// use serde_pson::{to_pson, GenerationState, Value};
///
/// let value = Value::Array(vec![Value::from(1), Value::from("a\"b"), Value::Null]);
/// assert_eq!(to_pson(&value, None).unwrap(), r#"[1,"a\"b",null]"#);
///
/// let mut state = GenerationState::default().with_max_nesting(1);
/// assert!(to_pson(&Value::raw(vec![1]), Some(&mut state)).is_err());
/// ```
///
/// # Errors
///
/// Returns [`Error::Nesting`], [`Error::Generator`] or
/// [`Error::InvalidOption`]; see [`generate`].
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_pson(value: &Value, state: Option<&mut GenerationState>) -> Result<String> {
    match state {
        Some(state) => generate(value, state),
        None => generate(value, &mut GenerationState::default()),
    }
}

/// Writes a [`Value`] as indented PSON text.
///
/// # Errors
///
/// Returns [`Error::Generator`] for non-finite floats or integers outside
/// the `i64`/`u64` range. [`GenerationState::pretty`] sets no nesting limit,
/// so [`Error::Nesting`] is never returned here; pass a limited state to
/// [`to_pson`] to get one.
///
/// # Examples
///
/// ```rust
/// use serde_pson::{to_pson_pretty, Error, Value};
///
/// assert_eq!(to_pson_pretty(&Value::raw(vec![7])).unwrap(), "{\n  \"type\": \"raw\",\n  \"data\": [\n    7\n  ]\n}");
/// assert!(matches!(
///     to_pson_pretty(&Value::Float(f64::NAN)),
///     Err(Error::Generator(_))
/// ));
/// ```
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_pson_pretty(value: &Value) -> Result<String> {
    generate(value, &mut GenerationState::pretty())
}

/// Parses PSON text into a [`Value`] with default [`ParserOptions`].
///
/// # Examples
///
/// ```rust
/// use serde_pson::{from_pson, Value};
///
/// let value = from_pson(r#"{"type":"raw","data":[0,1,2,255]}"#).unwrap();
/// assert_eq!(value, Value::raw(vec![0, 1, 2, 255]));
/// ```
///
/// # Errors
///
/// Returns [`Error::Parse`] for malformed text and [`Error::Nesting`] for
/// documents nested deeper than 100 levels.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_pson(s: &str) -> Result<Value> {
    parse(s, &ParserOptions::default())
}

/// Parses PSON text into a [`Value`] with custom options.
///
/// # Errors
///
/// Returns [`Error::Parse`] or [`Error::Nesting`].
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_pson_with_options(s: &str, options: &ParserOptions) -> Result<Value> {
    parse(s, options)
}

/// Serialize any `T: Serialize` to a compact PSON string.
///
/// # Examples
///
/// ```rust
/// use serde_pson::to_string;
/// use serde::Serialize;
///
/// #[derive(Serialize)]
/// struct Point { x: i32, y: i32 }
///
/// let point = Point { x: 1, y: 2 };
/// assert_eq!(to_string(&point).unwrap(), r#"{"x":1,"y":2}"#);
/// ```
///
/// # Errors
///
/// Returns an error if the value cannot be serialized or holds a non-finite
/// float.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_string<T>(value: &T) -> Result<String>
where
    T: ?Sized + Serialize,
{
    to_string_with_state(value, &mut GenerationState::default())
}

/// Serialize any `T: Serialize` to a pretty-printed PSON string.
///
/// # Examples
///
/// ```rust
/// use serde_pson::to_string_pretty;
/// use serde::Serialize;
///
/// #[derive(Serialize)]
/// struct Point { x: i32, y: i32 }
///
/// let point = Point { x: 1, y: 2 };
/// assert_eq!(to_string_pretty(&point).unwrap(), "{\n  \"x\": 1,\n  \"y\": 2\n}");
/// ```
///
/// # Errors
///
/// Returns an error if the value cannot be serialized.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_string_pretty<T>(value: &T) -> Result<String>
where
    T: ?Sized + Serialize,
{
    to_string_with_state(value, &mut GenerationState::pretty())
}

/// Serialize any `T: Serialize` to a PSON string laid out by `state`.
///
/// # Examples
///
/// ```rust
/// use serde_pson::{to_string_with_state, GenerationState};
///
/// let mut state = GenerationState::default().with_ascii_only(true);
/// assert_eq!(to_string_with_state("ü", &mut state).unwrap(), r#""\u00fc""#);
/// ```
///
/// # Errors
///
/// Returns an error if the value cannot be serialized or the state rejects
/// it (see [`generate`]).
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_string_with_state<T>(value: &T, state: &mut GenerationState) -> Result<String>
where
    T: ?Sized + Serialize,
{
    generate(&to_value(value)?, state)
}

/// Convert any `T: Serialize` to a [`Value`].
///
/// # Examples
///
/// ```rust
/// use serde_pson::{to_value, Value};
/// use serde::Serialize;
///
/// #[derive(Serialize)]
/// struct Point { x: i32, y: i32 }
///
/// let point = Point { x: 1, y: 2 };
/// let value: Value = to_value(&point).unwrap();
/// assert!(value.is_object());
/// ```
///
/// # Errors
///
/// Returns an error if the value cannot be serialized.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_value<T>(value: &T) -> Result<Value>
where
    T: ?Sized + Serialize,
{
    value.serialize(ValueSerializer)
}

/// Serialize any `T: Serialize` to a writer as compact PSON.
///
/// # Examples
///
/// ```rust
/// use serde_pson::to_writer;
///
/// let mut buffer = Vec::new();
/// to_writer(&mut buffer, &vec![1, 2]).unwrap();
/// assert_eq!(buffer, b"[1,2]");
/// ```
///
/// # Errors
///
/// Returns an error if serialization fails or writing to the writer fails.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_writer<W, T>(writer: W, value: &T) -> Result<()>
where
    W: io::Write,
    T: ?Sized + Serialize,
{
    to_writer_with_state(writer, value, &mut GenerationState::default())
}

/// Serialize any `T: Serialize` to a writer with a custom state.
///
/// Nothing is written unless generation succeeds.
///
/// # Errors
///
/// Returns an error if serialization fails or writing to the writer fails.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_writer_with_state<W, T>(
    mut writer: W,
    value: &T,
    state: &mut GenerationState,
) -> Result<()>
where
    W: io::Write,
    T: ?Sized + Serialize,
{
    let pson_string = to_string_with_state(value, state)?;
    writer
        .write_all(pson_string.as_bytes())
        .map_err(|e| Error::io(&e.to_string()))?;
    Ok(())
}

/// Deserialize an instance of type `T` from a string of PSON text.
///
/// # Examples
///
/// ```rust
/// use serde_pson::from_str;
/// use serde::Deserialize;
///
/// #[derive(Deserialize, PartialEq, Debug)]
/// struct Point { x: i32, y: i32 }
///
/// let point: Point = from_str(r#"{"x":1,"y":2}"#).unwrap();
/// assert_eq!(point, Point { x: 1, y: 2 });
/// ```
///
/// # Errors
///
/// Returns an error if the input is not valid PSON or cannot be deserialized
/// to type `T`. Parse errors carry line, column and offset.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_str<T>(s: &str) -> Result<T>
where
    T: DeserializeOwned,
{
    from_value(from_pson(s)?)
}

/// Deserialize an instance of type `T` from bytes of PSON text.
///
/// # Examples
///
/// ```rust
/// use serde_pson::from_slice;
///
/// let nums: Vec<i32> = from_slice(b"[1,2,3]").unwrap();
/// assert_eq!(nums, vec![1, 2, 3]);
///
/// assert!(from_slice::<String>(b"\"\xff\"").is_err());
/// ```
///
/// # Errors
///
/// Returns an error if the bytes are not valid UTF-8, not valid PSON, or
/// cannot be deserialized to type `T`.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_slice<T>(v: &[u8]) -> Result<T>
where
    T: DeserializeOwned,
{
    from_value(parser::parse_slice(v, &ParserOptions::default())?)
}

/// Deserialize an instance of type `T` from an I/O stream of PSON.
///
/// # Examples
///
/// ```rust
/// use serde_pson::from_reader;
/// use serde::Deserialize;
/// use std::io::Cursor;
///
/// #[derive(Deserialize, PartialEq, Debug)]
/// struct Point { x: i32, y: i32 }
///
/// let cursor = Cursor::new(br#"{"x":1,"y":2}"#);
/// let point: Point = from_reader(cursor).unwrap();
/// assert_eq!(point, Point { x: 1, y: 2 });
/// ```
///
/// # Errors
///
/// Returns an error if reading from the reader fails, the input is not valid
/// PSON, or the data cannot be deserialized to type `T`.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_reader<R, T>(reader: R) -> Result<T>
where
    R: io::Read,
    T: DeserializeOwned,
{
    from_value(parser::parse_reader(reader, &ParserOptions::default())?)
}

/// Deserialize an instance of type `T` from a [`Value`].
///
/// # Examples
///
/// ```rust
/// use serde_pson::{from_value, pson};
///
/// let pair: (String, u8) = from_value(pson!(["x", 7])).unwrap();
/// assert_eq!(pair, ("x".to_string(), 7));
/// ```
///
/// # Errors
///
/// Returns an error if the value does not match the shape of `T`.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_value<T>(value: Value) -> Result<T>
where
    T: DeserializeOwned,
{
    T::deserialize(ValueDeserializer::new(value))
}
