/// Builds a [`Value`](crate::Value) from JSON-like syntax.
///
/// Any other expression goes through [`to_value`](crate::to_value), so byte
/// strings and prebuilt values can be spliced in with parentheses:
///
/// ```rust
/// use serde_pson::{pson, Value};
///
/// let value = pson!({
///     "name": "blob",
///     "tags": ["a", "b"],
///     "payload": (Value::raw(vec![0xFF, 0x00]))
/// });
/// assert_eq!(
///     value.to_string(),
///     r#"{"name":"blob","tags":["a","b"],"payload":{"type":"raw","data":[255,0]}}"#
/// );
/// ```
#[macro_export]
macro_rules! pson {
    (null) => {
        $crate::Value::Null
    };

    (true) => {
        $crate::Value::Bool(true)
    };

    (false) => {
        $crate::Value::Bool(false)
    };

    ([]) => {
        $crate::Value::Array(vec![])
    };

    ([ $($elem:tt),* $(,)? ]) => {
        $crate::Value::Array(vec![$($crate::pson!($elem)),*])
    };

    ({}) => {
        $crate::Value::Object($crate::PsonMap::new())
    };

    ({ $($key:literal : $value:tt),* $(,)? }) => {{
        let mut object = $crate::PsonMap::new();
        $(
            object.insert($key.to_string(), $crate::pson!($value));
        )*
        $crate::Value::Object(object)
    }};

    // Any other expression
    ($s:expr) => {{
        $crate::to_value(&$s).unwrap_or($crate::Value::Null)
    }};
}
