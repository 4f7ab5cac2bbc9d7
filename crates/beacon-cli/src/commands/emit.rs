//! Emit command implementation.

use beacon_core::ActionJson;
use beacon_tracker::{AnalyticsClient, Dispatch, Identity, Tracker, TrackerConfig};
use serde_json::Value;
use std::io::{self, Read};

/// Client that prints each delivered call as a compact JSON row on stdout.
struct PrintingClient;

impl PrintingClient {
    fn print(&self, kind: &str, args: &[Value]) {
        let mut row = Vec::with_capacity(args.len() + 1);
        row.push(Value::String(kind.to_string()));
        row.extend(args.iter().cloned());
        println!("{}", Value::Array(row));
    }
}

impl AnalyticsClient for PrintingClient {
    fn identify(&mut self, args: &[Value]) {
        self.print("identify", args);
    }

    fn page(&mut self, args: &[Value]) {
        self.print("page", args);
    }

    fn alias(&mut self, args: &[Value]) {
        self.print("alias", args);
    }

    fn track(&mut self, args: &[Value]) {
        self.print("track", args);
    }
}

pub fn run(file: Option<String>, lenient: bool) -> Result<(), Box<dyn std::error::Error>> {
    let contents = if let Some(path) = file {
        std::fs::read_to_string(&path)
            .map_err(|e| format!("Failed to read file {}: {}", path, e))?
    } else {
        let mut buffer = String::new();
        io::stdin().read_to_string(&mut buffer)?;
        buffer
    };

    let config = TrackerConfig { strict: !lenient };
    let mut tracker = Tracker::new(Identity, PrintingClient, config);

    for (index, line) in contents.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let action: ActionJson = serde_json::from_str(line)
            .map_err(|e| format!("Invalid JSON on line {}: {}", index + 1, e))?;
        tracker
            .dispatch(action)
            .map_err(|e| format!("Dispatch failed on line {}: {}", index + 1, e))?;
    }

    Ok(())
}
