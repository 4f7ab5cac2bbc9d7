//! Compose command implementation.

use crate::output;
use beacon_core::{compose, resolve, ActionJson};
use std::io::{self, Read};

pub fn run(input: Option<String>, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    // Read action JSON from file or stdin
    let json_str = if let Some(path) = input {
        std::fs::read_to_string(&path)
            .map_err(|e| format!("Failed to read file {}: {}", path, e))?
    } else {
        let mut buffer = String::new();
        io::stdin().read_to_string(&mut buffer)?;
        buffer
    };

    let action: ActionJson =
        serde_json::from_str(&json_str).map_err(|e| format!("Invalid JSON: {}", e))?;

    let descriptor = resolve(&action)
        .map_err(|e| format!("Directive error: {}", e))?
        .ok_or("action carries no analytics directive")?;

    let call = compose(&descriptor).map_err(|e| format!("Composition failed: {}", e))?;

    if json {
        println!("{}", output::format_call_object(&call));
    } else {
        println!("{}", output::format_row(&call));
    }

    Ok(())
}
