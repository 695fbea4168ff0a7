//! Plan command implementation.
//!
//! Prints the buffer dimensions the engine would allocate for a given
//! element count, row count, and size policy.

use std::process::ExitCode;

use anyhow::Result;
use colored::Colorize;
use serde_json::json;

use attribtex_engine::plan_layout;
use attribtex_spec::SizeMode;

/// Run the plan command.
pub fn run(count: usize, rows: usize, square: bool, json_output: bool) -> Result<ExitCode> {
    let mode = if square {
        SizeMode::Square
    } else {
        SizeMode::Smallest
    };
    let layout = plan_layout(count, rows, mode);

    if json_output {
        let output = json!({
            "width": layout.width,
            "height": layout.height,
            "min_height": layout.min_height,
            "mode": mode.as_str(),
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        println!(
            "{} {} element(s), {} row(s), {} policy",
            "Planning:".cyan().bold(),
            count,
            rows,
            mode
        );
        println!(
            "{} {}x{} (min height {})",
            "Layout:".green().bold(),
            layout.width,
            layout.height,
            layout.min_height
        );
    }

    Ok(ExitCode::SUCCESS)
}
