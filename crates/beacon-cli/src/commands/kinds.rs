//! Kinds command implementation.

use beacon_core::{AbsencePolicy, EventKind};
use serde_json::json;

fn policy_label(policy: AbsencePolicy) -> String {
    match policy {
        AbsencePolicy::Omit => "omit".to_string(),
        AbsencePolicy::FillEmpty => "fill-empty".to_string(),
        AbsencePolicy::Require => "require".to_string(),
        AbsencePolicy::RequireWhen(peer) => format!("require-when:{}", peer),
    }
}

pub fn run(json_output: bool) -> Result<(), Box<dyn std::error::Error>> {
    if json_output {
        let kinds: Vec<_> = EventKind::ALL
            .iter()
            .map(|kind| {
                let fields: Vec<_> = kind
                    .contract()
                    .fields
                    .iter()
                    .map(|spec| {
                        json!({
                            "name": spec.name,
                            "absent": policy_label(spec.absent)
                        })
                    })
                    .collect();
                json!({ "kind": kind, "fields": fields })
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&kinds)?);
        return Ok(());
    }

    println!("{:<10} {:<14} {}", "KIND", "FIELD", "WHEN ABSENT");
    println!("{}", "-".repeat(44));
    for kind in EventKind::ALL {
        for spec in kind.contract().fields {
            println!(
                "{:<10} {:<14} {}",
                kind.as_str(),
                spec.name,
                policy_label(spec.absent)
            );
        }
    }

    Ok(())
}
