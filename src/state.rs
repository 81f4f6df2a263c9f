//! Generation state: layout configuration plus the nesting counter.
//!
//! This module provides:
//!
//! - [`GenerationOptions`]: the plain configuration record (serde-loadable)
//! - [`GenerationState`]: validated options plus the depth counter used while
//!   a value tree is being written
//!
//! The layout strings work like this: `object_nl`/`array_nl` go after an
//! opening bracket and after each separating comma, every member line then
//! starts with `indent` repeated once per open container, and `space_before`
//! and `space` surround the `:` of each object member.
//!
//! ## Examples
//!
//! ```rust
//! use serde_pson::{to_pson, GenerationState, Value};
//!
//! let value = Value::Array(vec![Value::from(1), Value::from(2)]);
//!
//! // Compact (default)
//! let mut state = GenerationState::new(Default::default()).unwrap();
//! assert_eq!(to_pson(&value, Some(&mut state)).unwrap(), "[1,2]");
//!
//! // Pretty
//! let mut state = GenerationState::pretty();
//! assert_eq!(to_pson(&value, Some(&mut state)).unwrap(), "[\n  1,\n  2\n]");
//! ```

use crate::{Error, Result};
use serde::{Deserialize, Serialize};

/// Configuration record for PSON text generation.
///
/// Every field has a default, so a partial record (for example from a config
/// file) is enough:
///
/// ```rust
/// use serde_pson::{GenerationOptions, GenerationState};
///
/// let options: GenerationOptions =
///     serde_json::from_str(r#"{"indent": "\t", "array_nl": "\n"}"#).unwrap();
/// assert_eq!(options.max_nesting, 0);
///
/// let state = GenerationState::new(options).unwrap();
/// assert_eq!(state.indent(), "\t");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationOptions {
    /// Indentation unit, repeated once per nesting level.
    pub indent: String,
    /// Inserted after the `:` of each object member.
    pub space: String,
    /// Inserted before the `:` of each object member.
    pub space_before: String,
    /// Inserted after `{` and after each member separator.
    pub object_nl: String,
    /// Inserted after `[` and after each element separator.
    pub array_nl: String,
    /// Maximum container depth; 0 means unlimited.
    pub max_nesting: usize,
    /// Escape everything outside printable ASCII as `\uXXXX`.
    pub ascii_only: bool,
    /// Emit `NaN`/`Infinity`/`-Infinity` instead of rejecting them.
    pub allow_nan: bool,
}

/// Validated generation settings plus the current nesting depth.
///
/// A state is owned by one generation call at a time (the generator takes it
/// by `&mut`). The depth counter is reset at the start of every top-level
/// call.
///
/// # Examples
///
/// ```rust
/// use serde_pson::GenerationState;
///
/// let mut state = GenerationState::default().with_max_nesting(1);
/// assert!(state.enter_nesting().is_ok());
/// assert!(state.enter_nesting().is_err());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct GenerationState {
    options: GenerationOptions,
    depth: usize,
}

impl GenerationState {
    /// Builds a state from a configuration record.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidOption`] if a layout string contains anything
    /// other than JSON whitespace.
    pub fn new(options: GenerationOptions) -> Result<Self> {
        let state = GenerationState { options, depth: 0 };
        state.validate()?;
        Ok(state)
    }

    /// Compact output: no whitespace at all. Same as `Default`.
    #[must_use]
    pub fn compact() -> Self {
        Self::default()
    }

    /// Two-space indented output with one member per line.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_pson::GenerationState;
    ///
    /// let state = GenerationState::pretty();
    /// assert_eq!(state.indent(), "  ");
    /// assert_eq!(state.object_nl(), "\n");
    /// ```
    #[must_use]
    pub fn pretty() -> Self {
        GenerationState {
            options: GenerationOptions {
                indent: "  ".to_string(),
                space: " ".to_string(),
                object_nl: "\n".to_string(),
                array_nl: "\n".to_string(),
                ..Default::default()
            },
            depth: 0,
        }
    }

    #[must_use]
    pub fn with_indent(mut self, indent: &str) -> Self {
        self.options.indent = indent.to_string();
        self
    }

    #[must_use]
    pub fn with_space(mut self, space: &str) -> Self {
        self.options.space = space.to_string();
        self
    }

    #[must_use]
    pub fn with_space_before(mut self, space_before: &str) -> Self {
        self.options.space_before = space_before.to_string();
        self
    }

    #[must_use]
    pub fn with_object_nl(mut self, object_nl: &str) -> Self {
        self.options.object_nl = object_nl.to_string();
        self
    }

    #[must_use]
    pub fn with_array_nl(mut self, array_nl: &str) -> Self {
        self.options.array_nl = array_nl.to_string();
        self
    }

    /// Sets the maximum nesting depth (0 = unlimited).
    #[must_use]
    pub fn with_max_nesting(mut self, max_nesting: usize) -> Self {
        self.options.max_nesting = max_nesting;
        self
    }

    /// Escapes every non-ASCII character as `\uXXXX` when set.
    #[must_use]
    pub fn with_ascii_only(mut self, ascii_only: bool) -> Self {
        self.options.ascii_only = ascii_only;
        self
    }

    /// Emits non-finite floats as `NaN`/`Infinity` literals when set.
    ///
    /// The result is no longer strict JSON and will not parse back.
    #[must_use]
    pub fn with_allow_nan(mut self, allow_nan: bool) -> Self {
        self.options.allow_nan = allow_nan;
        self
    }

    /// Checks that every layout string is JSON whitespace.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidOption`] naming the offending setting.
    pub fn validate(&self) -> Result<()> {
        let layout = [
            ("indent", &self.options.indent),
            ("space", &self.options.space),
            ("space_before", &self.options.space_before),
            ("object_nl", &self.options.object_nl),
            ("array_nl", &self.options.array_nl),
        ];
        for (name, value) in layout {
            if !value.chars().all(|c| matches!(c, ' ' | '\t' | '\n' | '\r')) {
                log::debug!("rejecting {} = {:?}", name, value);
                return Err(Error::invalid_option(&format!(
                    "{} must contain only JSON whitespace, got {:?}",
                    name, value
                )));
            }
        }
        Ok(())
    }

    /// Returns a copy of the configuration record.
    #[must_use]
    pub fn options(&self) -> GenerationOptions {
        self.options.clone()
    }

    #[must_use]
    pub fn indent(&self) -> &str {
        &self.options.indent
    }

    #[must_use]
    pub fn space(&self) -> &str {
        &self.options.space
    }

    #[must_use]
    pub fn space_before(&self) -> &str {
        &self.options.space_before
    }

    #[must_use]
    pub fn object_nl(&self) -> &str {
        &self.options.object_nl
    }

    #[must_use]
    pub fn array_nl(&self) -> &str {
        &self.options.array_nl
    }

    #[must_use]
    pub const fn max_nesting(&self) -> usize {
        self.options.max_nesting
    }

    #[must_use]
    pub const fn ascii_only(&self) -> bool {
        self.options.ascii_only
    }

    #[must_use]
    pub const fn allow_nan(&self) -> bool {
        self.options.allow_nan
    }

    /// Current nesting depth.
    #[must_use]
    pub const fn depth(&self) -> usize {
        self.depth
    }

    /// Enters one container level.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Nesting`] if the new depth exceeds a nonzero
    /// `max_nesting`. The depth is left unchanged in that case.
    pub fn enter_nesting(&mut self) -> Result<()> {
        let depth = self.depth + 1;
        let max = self.options.max_nesting;
        if max != 0 && depth > max {
            log::debug!("generation nesting {} exceeds max_nesting {}", depth, max);
            return Err(Error::nesting(depth, max));
        }
        self.depth = depth;
        Ok(())
    }

    /// Leaves one container level.
    pub fn leave_nesting(&mut self) {
        debug_assert!(self.depth > 0, "leave_nesting called at depth 0");
        self.depth = self.depth.saturating_sub(1);
    }

    /// Resets the depth counter to zero.
    pub fn reset(&mut self) {
        self.depth = 0;
    }
}

impl TryFrom<GenerationOptions> for GenerationState {
    type Error = Error;

    fn try_from(options: GenerationOptions) -> Result<Self> {
        GenerationState::new(options)
    }
}
