//! Check command implementation.

use crate::output;
use beacon_core::{action_type, ActionJson};
use beacon_tracker::translate;
use serde_json::json;

pub fn run(
    file: String,
    strict: bool,
    json_output: bool,
    max_actions: Option<u64>,
) -> Result<(), Box<dyn std::error::Error>> {
    let contents = std::fs::read_to_string(&file)
        .map_err(|e| format!("Failed to read file {}: {}", file, e))?;

    if !json_output {
        output::print_table_header();
    }

    let mut checked: u64 = 0;
    let mut failed: u64 = 0;

    for (index, line) in contents.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        // Check max_actions limit
        if let Some(max) = max_actions {
            if checked >= max {
                break;
            }
        }
        let line_no = index + 1;

        let (action_tag, verdict, detail) = match serde_json::from_str::<ActionJson>(line) {
            Err(e) => ("?".to_string(), "invalid", format!("invalid JSON: {}", e)),
            Ok(action) => {
                let tag = action_type(&action).unwrap_or("?").to_string();
                match translate(&action) {
                    Ok(None) => (tag, "untracked", String::new()),
                    Ok(Some(call)) => (tag, "ok", output::format_row(&call)),
                    Err(e) => (tag, "invalid", e.to_string()),
                }
            }
        };

        if verdict == "invalid" {
            failed += 1;
        }

        if json_output {
            println!(
                "{}",
                json!({
                    "line": line_no,
                    "action": action_tag,
                    "verdict": verdict,
                    "detail": detail
                })
            );
        } else {
            println!(
                "{}",
                output::format_verdict_row(line_no, &action_tag, verdict, &detail)
            );
        }
        checked += 1;
    }

    if strict && failed > 0 {
        return Err(format!("{} of {} actions failed the check", failed, checked).into());
    }

    Ok(())
}
