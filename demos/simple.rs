//! Basic PSON serialization and deserialization.
//!
//! Run with: cargo run --example simple

use serde::{Deserialize, Serialize, Serializer};
use serde_pson::{from_str, to_string, to_string_pretty};
use std::error::Error;

fn as_bytes<S: Serializer>(bytes: &[u8], serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_bytes(bytes)
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
struct User {
    id: u32,
    name: String,
    email: String,
    #[serde(serialize_with = "as_bytes")]
    avatar_hash: Vec<u8>,
}

fn main() -> Result<(), Box<dyn Error>> {
    let users = vec![
        User {
            id: 42,
            name: "Alice Johnson".to_string(),
            email: "alice@example.com".to_string(),
            avatar_hash: vec![0x9f, 0x86, 0xd0, 0x81],
        },
        User {
            id: 43,
            name: "Bob Smith".to_string(),
            email: "bob@example.com".to_string(),
            avatar_hash: vec![0x00, 0xff],
        },
    ];

    // Byte fields come out as raw objects, everything else is plain JSON
    let pson = to_string(&users)?;
    println!("PSON output:\n{}\n", pson);
    println!("Pretty:\n{}\n", to_string_pretty(&users)?);

    let users_back: Vec<User> = from_str(&pson)?;
    assert_eq!(users, users_back);
    println!("✓ Round-trip successful");

    Ok(())
}
