//! Validate command implementation.
//!
//! Validates a recipe file and prints coded errors and warnings.

use std::path::Path;
use std::process::ExitCode;

use anyhow::Result;
use colored::Colorize;
use serde_json::json;

use attribtex_spec::{canonical_recipe_hash, validate_recipe};

use super::print_validation;
use crate::input::load_recipe;

/// Run the validate command.
///
/// Exit code: 0 if the recipe is valid, 1 otherwise.
pub fn run(recipe_path: &str, json_output: bool) -> Result<ExitCode> {
    let recipe = load_recipe(Path::new(recipe_path))?;
    let result = validate_recipe(&recipe);
    let hash = canonical_recipe_hash(&recipe)?;

    if json_output {
        let output = json!({
            "ok": result.is_ok(),
            "recipe_hash": hash,
            "errors": result
                .errors
                .iter()
                .map(|e| json!({"code": e.code.code(), "message": e.message, "path": e.path}))
                .collect::<Vec<_>>(),
            "warnings": result
                .warnings
                .iter()
                .map(|w| json!({"code": w.code.code(), "message": w.message, "path": w.path}))
                .collect::<Vec<_>>(),
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        println!("{} {}", "Validating:".cyan().bold(), recipe_path);
        print_validation(&result);
        println!("{} {}", "Recipe hash:".dimmed(), hash);
        if result.is_ok() {
            println!("{}", "Recipe is valid".green().bold());
        } else {
            println!(
                "{} {} error(s)",
                "Recipe is invalid:".red().bold(),
                result.errors.len()
            );
        }
    }

    Ok(if result.is_ok() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
