//! Attributes command implementation.
//!
//! Lists every packable slot token of a geometry snapshot, the same list a
//! host would use to rebuild its channel-selection menu.

use std::path::Path;
use std::process::ExitCode;

use anyhow::Result;
use colored::Colorize;
use serde_json::json;

use attribtex_engine::{packable_slots, SnapshotStore};
use attribtex_spec::{validate_snapshot, ElementClass};

use super::print_validation;
use crate::input::load_snapshot;

/// Run the attributes command.
///
/// Exit code: 0 on success, 1 when the snapshot fails validation.
pub fn run(geometry_path: &str, class: ElementClass, json_output: bool) -> Result<ExitCode> {
    let snapshot = load_snapshot(Path::new(geometry_path))?;

    let result = validate_snapshot(&snapshot);
    if !result.is_ok() {
        if json_output {
            let errors: Vec<_> = result
                .errors
                .iter()
                .map(|e| json!({"code": e.code.code(), "message": e.message, "path": e.path}))
                .collect();
            println!(
                "{}",
                serde_json::to_string_pretty(&json!({"ok": false, "errors": errors}))?
            );
        } else {
            print_validation(&result);
        }
        return Ok(ExitCode::FAILURE);
    }

    let store = SnapshotStore::new(&snapshot, class);
    let tokens = packable_slots(&store);

    if json_output {
        let output = json!({
            "class": class.as_str(),
            "element_count": snapshot.element_count(class),
            "slots": tokens,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        println!(
            "{} {} ({} {})",
            "Packable slots:".cyan().bold(),
            geometry_path,
            snapshot.element_count(class),
            class
        );
        for token in &tokens {
            println!("  {}", token);
        }
        if tokens.is_empty() {
            println!("  {}", "(no packable attributes)".dimmed());
        }
    }

    Ok(ExitCode::SUCCESS)
}
