//! Controlling output layout and limits with GenerationState.
//!
//! Run with: cargo run --example custom_state

use serde::{Deserialize, Serialize};
use serde_pson::{
    from_pson_with_options, pson, to_pson, to_string_with_state, GenerationOptions,
    GenerationState, ParserOptions,
};
use std::error::Error;

#[derive(Debug, Serialize, Deserialize)]
struct Config {
    name: String,
    version: String,
    limits: Vec<u32>,
}

fn main() -> Result<(), Box<dyn Error>> {
    let config = Config {
        name: "MyApp".to_string(),
        version: "1.0.0".to_string(),
        limits: vec![10, 20],
    };

    println!("Compact:");
    println!("{}\n", to_string_with_state(&config, &mut GenerationState::compact())?);

    println!("Pretty:");
    println!("{}\n", to_string_with_state(&config, &mut GenerationState::pretty())?);

    println!("Tabs and spaced colons:");
    let mut tabbed = GenerationState::pretty()
        .with_indent("\t")
        .with_space_before(" ");
    println!("{}\n", to_string_with_state(&config, &mut tabbed)?);

    // Options can come from any serde source, e.g. a JSON config file
    let options: GenerationOptions = serde_json::from_str(r#"{"ascii_only": true}"#)?;
    let mut ascii = GenerationState::new(options)?;
    let greeting = pson!({"greeting": "grüß dich 👋"});
    println!("ASCII only: {}\n", to_pson(&greeting, Some(&mut ascii))?);

    // Non-whitespace layout strings are refused
    match GenerationState::default().with_indent("--").validate() {
        Ok(()) => println!("unexpected: indent accepted"),
        Err(e) => println!("Rejected layout: {}", e),
    }

    // Nesting limits apply on both sides
    let deep = pson!([[[[1]]]]);
    let mut shallow = GenerationState::default().with_max_nesting(3);
    if let Err(e) = to_pson(&deep, Some(&mut shallow)) {
        println!("Generate: {}", e);
    }
    let options = ParserOptions::new().with_max_nesting(3);
    if let Err(e) = from_pson_with_options("[[[[1]]]]", &options) {
        println!("Parse:    {}", e);
    }

    Ok(())
}
