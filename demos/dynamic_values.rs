//! Inspecting parsed documents through Value.
//!
//! Run with: cargo run --example dynamic_values

use serde::{Deserialize, Serialize};
use serde_pson::{from_pson, from_value, to_pson_pretty, to_value, Value};
use std::error::Error;

#[derive(Debug, Serialize, Deserialize, PartialEq)]
struct User {
    id: u32,
    name: String,
    roles: Vec<String>,
}

fn describe(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Integer(_) => "integer",
        Value::Float(_) => "float",
        Value::String(_) => "string",
        Value::Raw(_) => "raw",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    let document = r#"{
        "host": "localhost",
        "port": 8080,
        "ratio": 0.75,
        "key": {"type": "raw", "data": [1, 35, 69, 103]},
        "features": ["auth", "logging"]
    }"#;

    let config = from_pson(document)?;

    if let Some(obj) = config.as_object() {
        for (name, member) in obj.iter() {
            println!("{:>8}: {}", name, describe(member));
        }

        if let Some(port) = obj.get("port").and_then(Value::as_i64) {
            println!("\nport = {}", port);
        }
        if let Some(key) = obj.get("key").and_then(Value::as_bytes) {
            println!("key  = {:02x?}\n", key);
        }
    }

    let user = User {
        id: 123,
        name: "Alice".to_string(),
        roles: vec!["admin".to_string(), "developer".to_string()],
    };

    let user_value = to_value(&user)?;
    println!("User as Value:\n{}\n", to_pson_pretty(&user_value)?);

    let user_back: User = from_value(user_value)?;
    assert_eq!(user, user_back);

    Ok(())
}
