//! Carrying binary data through PSON as raw objects.
//!
//! Run with: cargo run --example raw_bytes

use serde_pson::{from_pson, from_pson_with_options, raw, to_pson, ParserOptions, Value};
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    // Not valid UTF-8, so it can't be a JSON string
    let payload = vec![0xff, 0x00, 0x41, 0xc3, 0x28];

    let value = Value::raw(payload.clone());
    let text = to_pson(&value, None)?;
    println!("Raw object: {}", text);

    let back = from_pson(&text)?;
    assert_eq!(back.as_bytes(), Some(payload.as_slice()));
    println!("✓ Bytes restored: {:02x?}\n", payload);

    // from_bytes only falls back to raw when the bytes aren't text
    for bytes in [b"plain text".to_vec(), vec![0xfe, 0xfd]] {
        let value = Value::from_bytes(bytes);
        println!("from_bytes -> {}", to_pson(&value, None)?);
    }
    println!();

    // Any JSON producer can write a raw object by hand
    let handwritten = r#"{"data": [80, 83, 79, 78], "type": "raw"}"#;
    let parsed = from_pson(handwritten)?;
    println!("Hand-written raw object parsed as: {:?}", parsed);

    // With raw decoding off the object stays an ordinary object
    let options = ParserOptions::new().with_decode_raw(false);
    let plain = from_pson_with_options(handwritten, &options)?;
    println!("With decode_raw off: {:?}", plain);
    if raw::matches(&plain) {
        println!("Decoded on demand: {:?}", raw::decode(&plain)?);
    }

    Ok(())
}
