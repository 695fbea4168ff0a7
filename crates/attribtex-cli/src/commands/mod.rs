//! Command implementations for the `attribtex` binary.

pub mod attributes;
pub mod pack;
pub mod plan;
pub mod validate;

use colored::Colorize;

use attribtex_spec::ValidationResult;

/// Prints a validation result's errors and warnings in human-readable form.
pub(crate) fn print_validation(result: &ValidationResult) {
    for error in &result.errors {
        println!("  {} {}", "x".red().bold(), error);
    }
    for warning in &result.warnings {
        println!("  {} {}", "!".yellow(), warning);
    }
}
