//! PSON text generation.
//!
//! [`generate`] walks a [`Value`] tree and writes it as JSON text, laid out
//! according to a [`GenerationState`]. [`Value::Raw`] nodes are written as raw
//! objects (see [`crate::raw`]).
//!
//! ## Layout
//!
//! With [`GenerationState::pretty`]:
//!
//! ```rust
//! use serde_pson::{generate, pson, GenerationState};
//!
//! let value = pson!({"a": [1, 2], "b": {}});
//! let mut state = GenerationState::pretty();
//!
//! assert_eq!(
//!     generate(&value, &mut state).unwrap(),
//!     "{\n  \"a\": [\n    1,\n    2\n  ],\n  \"b\": {}\n}"
//! );
//! ```

use crate::{raw, Error, GenerationState, PsonMap, Result, Value};

/// Writes `value` as PSON text.
///
/// The state is validated and its depth reset before anything is written.
/// On failure no partial output is returned and the depth is reset again, so
/// the same state can be reused.
///
/// # Errors
///
/// - [`Error::InvalidOption`] if the state holds a non-whitespace layout string
/// - [`Error::Nesting`] if the tree is deeper than `max_nesting`
/// - [`Error::Generator`] for `NaN`/`Infinity` unless `allow_nan` is set, and
///   for integers outside the `i64`/`u64` range
pub fn generate(value: &Value, state: &mut GenerationState) -> Result<String> {
    state.validate()?;
    state.reset();

    let mut generator = Generator::new(state);
    match generator.write_value(value) {
        Ok(()) => Ok(generator.into_inner()),
        Err(err) => {
            generator.state.reset();
            Err(err)
        }
    }
}

struct Generator<'a> {
    output: String,
    state: &'a mut GenerationState,
}

impl<'a> Generator<'a> {
    fn new(state: &'a mut GenerationState) -> Self {
        Generator {
            output: String::with_capacity(256),
            state,
        }
    }

    fn into_inner(self) -> String {
        self.output
    }

    fn write_value(&mut self, value: &Value) -> Result<()> {
        match value {
            Value::Null => self.output.push_str("null"),
            Value::Bool(true) => self.output.push_str("true"),
            Value::Bool(false) => self.output.push_str("false"),
            Value::Integer(i) => self.write_integer(*i)?,
            Value::Float(f) => self.write_float(*f)?,
            Value::String(s) => self.write_string(s),
            Value::Raw(bytes) => self.write_value(&raw::encode(bytes))?,
            Value::Array(arr) => self.write_array(arr)?,
            Value::Object(map) => self.write_object(map)?,
        }
        Ok(())
    }

    fn write_indent(&mut self, depth: usize) {
        for _ in 0..depth {
            self.output.push_str(self.state.indent());
        }
    }

    fn write_object(&mut self, map: &PsonMap) -> Result<()> {
        self.state.enter_nesting()?;
        if map.is_empty() {
            self.output.push_str("{}");
            self.state.leave_nesting();
            return Ok(());
        }

        let depth = self.state.depth();
        let indented = !self.state.object_nl().is_empty();

        self.output.push('{');
        self.output.push_str(self.state.object_nl());
        for (i, (key, value)) in map.iter().enumerate() {
            if i > 0 {
                self.output.push(',');
                self.output.push_str(self.state.object_nl());
            }
            if indented {
                self.write_indent(depth);
            }
            self.write_string(key);
            self.output.push_str(self.state.space_before());
            self.output.push(':');
            self.output.push_str(self.state.space());
            self.write_value(value)?;
        }
        self.output.push_str(self.state.object_nl());
        if indented {
            self.write_indent(depth - 1);
        }
        self.output.push('}');

        self.state.leave_nesting();
        Ok(())
    }

    fn write_array(&mut self, arr: &[Value]) -> Result<()> {
        self.state.enter_nesting()?;
        if arr.is_empty() {
            self.output.push_str("[]");
            self.state.leave_nesting();
            return Ok(());
        }

        let depth = self.state.depth();
        let indented = !self.state.array_nl().is_empty();

        self.output.push('[');
        self.output.push_str(self.state.array_nl());
        for (i, value) in arr.iter().enumerate() {
            if i > 0 {
                self.output.push(',');
                self.output.push_str(self.state.array_nl());
            }
            if indented {
                self.write_indent(depth);
            }
            self.write_value(value)?;
        }
        self.output.push_str(self.state.array_nl());
        if indented {
            self.write_indent(depth - 1);
        }
        self.output.push(']');

        self.state.leave_nesting();
        Ok(())
    }

    fn write_integer(&mut self, i: i128) -> Result<()> {
        // Parsers read anything wider back as a float.
        if i < i128::from(i64::MIN) || i > i128::from(u64::MAX) {
            return Err(Error::generator(format!(
                "integer {} is out of range for PSON",
                i
            )));
        }
        self.output.push_str(&i.to_string());
        Ok(())
    }

    fn write_float(&mut self, f: f64) -> Result<()> {
        if f.is_finite() {
            // Debug keeps the ".0" or exponent, so the text parses back as a float.
            self.output.push_str(&format!("{:?}", f));
            return Ok(());
        }

        let literal = if f.is_nan() {
            "NaN"
        } else if f.is_sign_positive() {
            "Infinity"
        } else {
            "-Infinity"
        };
        if !self.state.allow_nan() {
            return Err(Error::generator(format!("{} not allowed in PSON", literal)));
        }
        self.output.push_str(literal);
        Ok(())
    }

    fn write_string(&mut self, s: &str) {
        let ascii_only = self.state.ascii_only();
        self.output.reserve(s.len() + 2);
        self.output.push('"');
        for ch in s.chars() {
            match ch {
                '"' => self.output.push_str("\\\""),
                '\\' => self.output.push_str("\\\\"),
                '\n' => self.output.push_str("\\n"),
                '\r' => self.output.push_str("\\r"),
                '\t' => self.output.push_str("\\t"),
                '\u{0008}' => self.output.push_str("\\b"),
                '\u{000C}' => self.output.push_str("\\f"),
                c if (c as u32) < 0x20 => self.write_unicode_escape(c),
                c if ascii_only && !c.is_ascii() => self.write_unicode_escape(c),
                c => self.output.push(c),
            }
        }
        self.output.push('"');
    }

    /// `\uXXXX` per UTF-16 code unit, lowercase hex.
    fn write_unicode_escape(&mut self, ch: char) {
        let mut units = [0u16; 2];
        for unit in ch.encode_utf16(&mut units) {
            self.output.push_str(&format!("\\u{:04x}", unit));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pson;

    fn compact(value: &Value) -> Result<String> {
        generate(value, &mut GenerationState::default())
    }

    #[test]
    fn test_scalars() {
        assert_eq!(compact(&Value::Null).unwrap(), "null");
        assert_eq!(compact(&Value::Bool(true)).unwrap(), "true");
        assert_eq!(compact(&Value::Integer(-42)).unwrap(), "-42");
        assert_eq!(compact(&Value::Float(1.0)).unwrap(), "1.0");
        assert_eq!(compact(&Value::Float(0.1)).unwrap(), "0.1");
        assert_eq!(compact(&Value::Float(1e20)).unwrap(), "1e20");
    }

    #[test]
    fn test_integer_range() {
        assert_eq!(
            compact(&Value::from(u64::MAX - 1)).unwrap(),
            "18446744073709551614"
        );
        assert_eq!(
            compact(&Value::from(i64::MIN)).unwrap(),
            "-9223372036854775808"
        );
        assert!(matches!(
            compact(&Value::Integer(i128::from(u64::MAX) + 1)),
            Err(Error::Generator(_))
        ));
        assert!(matches!(
            compact(&Value::Integer(i128::from(i64::MIN) - 1)),
            Err(Error::Generator(_))
        ));
    }

    #[test]
    fn test_array_with_escaped_string() {
        let value = Value::Array(vec![Value::from(1), Value::from("a\"b"), Value::Null]);
        assert_eq!(compact(&value).unwrap(), r#"[1,"a\"b",null]"#);
    }

    #[test]
    fn test_control_characters() {
        let value = Value::from("tab\there\nnul\u{0}bell\u{7}\u{8}\u{c}\r\\");
        assert_eq!(
            compact(&value).unwrap(),
            r#""tab\there\nnul\u0000bell\u0007\b\f\r\\""#
        );
    }

    #[test]
    fn test_raw_object() {
        let value = Value::raw(vec![0, 1, 2, 255]);
        assert_eq!(
            compact(&value).unwrap(),
            r#"{"type":"raw","data":[0,1,2,255]}"#
        );
    }

    #[test]
    fn test_pretty_layout() {
        let value = pson!({
            "name": "pson",
            "list": [1, [], {"k": null}],
            "empty": {}
        });
        let expected = "{\n  \"name\": \"pson\",\n  \"list\": [\n    1,\n    [],\n    {\n      \"k\": null\n    }\n  ],\n  \"empty\": {}\n}";
        assert_eq!(
            generate(&value, &mut GenerationState::pretty()).unwrap(),
            expected
        );
    }

    #[test]
    fn test_space_before() {
        let value = pson!({"a": 1, "b": 2});
        let mut state = GenerationState::default()
            .with_space_before(" ")
            .with_space(" ");
        assert_eq!(generate(&value, &mut state).unwrap(), r#"{"a" : 1,"b" : 2}"#);
    }

    #[test]
    fn test_nesting_limit() {
        let value = pson!([[1]]);

        let mut state = GenerationState::default().with_max_nesting(2);
        assert_eq!(generate(&value, &mut state).unwrap(), "[[1]]");

        let mut state = GenerationState::default().with_max_nesting(1);
        assert_eq!(
            generate(&value, &mut state).unwrap_err(),
            Error::nesting(2, 1)
        );
        assert_eq!(state.depth(), 0);
    }

    #[test]
    fn test_empty_containers_count_as_nesting() {
        let mut state = GenerationState::default().with_max_nesting(1);
        assert!(generate(&pson!([[]]), &mut state).unwrap_err().is_nesting());
    }

    #[test]
    fn test_raw_takes_two_levels() {
        let value = Value::raw(vec![1]);

        let mut state = GenerationState::default().with_max_nesting(1);
        assert!(generate(&value, &mut state).unwrap_err().is_nesting());

        let mut state = GenerationState::default().with_max_nesting(2);
        assert!(generate(&value, &mut state).is_ok());
    }

    #[test]
    fn test_ascii_only() {
        let value = Value::from("é😀");

        let mut state = GenerationState::default().with_ascii_only(true);
        assert_eq!(
            generate(&value, &mut state).unwrap(),
            r#""\u00e9\ud83d\ude00""#
        );
        assert_eq!(compact(&value).unwrap(), "\"é😀\"");
    }

    #[test]
    fn test_ascii_only_keys() {
        let value = pson!({"ключ": 1});
        let mut state = GenerationState::default().with_ascii_only(true);
        assert_eq!(
            generate(&value, &mut state).unwrap(),
            r#"{"\u043a\u043b\u044e\u0447":1}"#
        );
    }

    #[test]
    fn test_non_finite_floats() {
        for (f, literal) in [
            (f64::NAN, "NaN"),
            (f64::INFINITY, "Infinity"),
            (f64::NEG_INFINITY, "-Infinity"),
        ] {
            let value = Value::Array(vec![Value::Float(f)]);
            let err = compact(&value).unwrap_err();
            assert!(matches!(err, Error::Generator(ref msg) if msg.contains(literal)));

            let mut state = GenerationState::default().with_allow_nan(true);
            assert_eq!(
                generate(&value, &mut state).unwrap(),
                format!("[{}]", literal)
            );
        }
    }

    #[test]
    fn test_invalid_layout_is_rejected() {
        let mut state = GenerationState::pretty().with_indent("->");
        assert!(matches!(
            generate(&Value::Null, &mut state),
            Err(Error::InvalidOption(_))
        ));
    }

    #[test]
    fn test_state_is_reusable_after_failure() {
        let mut state = GenerationState::default().with_max_nesting(3);
        assert!(generate(&pson!([[[[1]]]]), &mut state).is_err());
        assert_eq!(state.depth(), 0);
        assert_eq!(generate(&pson!([[1]]), &mut state).unwrap(), "[[1]]");
    }
}
