//! Output formatting utilities.

use beacon_core::ComposedCall;
use serde_json::Value;

/// Formats a composed call as its compact positional row JSON.
pub fn format_row(call: &ComposedCall) -> String {
    serde_json::to_string(&Value::Array(call.to_row())).unwrap_or_else(|_| "[]".to_string())
}

/// Formats a composed call as a pretty-printed {kind, args} object.
pub fn format_call_object(call: &ComposedCall) -> String {
    serde_json::to_string_pretty(call).unwrap_or_else(|_| "{}".to_string())
}

/// Formats one check verdict as a simple table row.
pub fn format_verdict_row(line: usize, action_type: &str, verdict: &str, detail: &str) -> String {
    format!(
        "{:<6} {:<24} {:<10} {}",
        line,
        truncate(action_type, 24),
        verdict,
        detail
    )
}

/// Prints table header.
#[allow(clippy::print_literal)]
pub fn print_table_header() {
    println!("{:<6} {:<24} {:<10} {}", "LINE", "ACTION", "VERDICT", "DETAIL");
    println!("{}", "-".repeat(72));
}

fn truncate(s: &str, max_len: usize) -> String {
    // Cut on chars, not bytes; action types are arbitrary UTF-8.
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}
