//! Building values with the pson! macro.
//!
//! Run with: cargo run --example macro

use serde_pson::{from_pson, pson, to_pson, to_pson_pretty, Value};
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    println!("Primitives:");
    for value in [pson!(null), pson!(true), pson!(42), pson!(2.5), pson!("Hello, PSON!")] {
        println!("  {}", to_pson(&value, None)?);
    }
    println!();

    let mixed = pson!([1, "two", true, null]);
    println!("Array: {}\n", to_pson(&mixed, None)?);

    let config = pson!({
        "app": {
            "name": "MyApp",
            "version": "1.0.0"
        },
        "database": {
            "host": "localhost",
            "port": 5432
        },
        "features": ["auth", "logging"],
        "debug": true
    });
    println!("Nested structures:\n{}\n", to_pson_pretty(&config)?);

    // Parenthesized expressions are spliced in as-is, so raw values stay raw
    let checksum = Value::raw(vec![0xde, 0xad, 0xbe, 0xef]);
    let record = pson!({
        "file": "firmware.bin",
        "size": 4096,
        "crc32": (checksum.clone())
    });

    let text = to_pson(&record, None)?;
    println!("With a raw member:\n{}\n", text);

    let parsed = from_pson(&text)?;
    assert_eq!(parsed, record);
    if let Some(bytes) = parsed.as_object().and_then(|o| o.get("crc32")).and_then(Value::as_bytes) {
        println!("crc32 bytes after parsing: {:02x?}", bytes);
    }

    Ok(())
}
