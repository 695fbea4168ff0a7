//! Attribtex CLI - pack geometry attribute data into data textures
//!
//! This binary provides commands for validating pack recipes, listing
//! packable attribute slots, planning buffer layouts, and packing geometry
//! snapshots into raw RGBA float buffers for external persistence.

use clap::{Parser, Subcommand};
use colored::Colorize;
use std::process::ExitCode;

use attribtex_cli::commands;
use attribtex_spec::ElementClass;

/// Attribtex - Attribute Data Texture Packer
#[derive(Parser)]
#[command(name = "attribtex")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a pack recipe file
    Validate {
        /// Path to the recipe file (JSON)
        #[arg(short, long)]
        recipe: String,

        /// Output machine-readable JSON diagnostics (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// List the packable slot tokens of a geometry snapshot
    Attributes {
        /// Path to the geometry snapshot file (JSON)
        #[arg(short, long)]
        geometry: String,

        /// Element class to list (points or vertices)
        #[arg(long, default_value = "points", value_parser = ["points", "vertices"])]
        class: String,

        /// Output machine-readable JSON diagnostics (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// Print the buffer layout for an element and row count
    Plan {
        /// Number of elements to pack
        #[arg(long)]
        count: usize,

        /// Number of destination rows
        #[arg(long)]
        rows: usize,

        /// Force a square buffer instead of the smallest height
        #[arg(long)]
        square: bool,

        /// Output machine-readable JSON diagnostics (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// Pack a geometry snapshot into a raw data-texture buffer
    Pack {
        /// Path to the geometry snapshot file (JSON)
        #[arg(short, long)]
        geometry: String,

        /// Path to the recipe file (JSON)
        #[arg(short, long)]
        recipe: String,

        /// Path for the raw little-endian f32 output buffer
        #[arg(short, long)]
        output: String,

        /// Output machine-readable JSON diagnostics (no colored output)
        #[arg(long)]
        json: bool,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Validate { recipe, json } => commands::validate::run(&recipe, json),
        Commands::Attributes {
            geometry,
            class,
            json,
        } => {
            let class = match class.as_str() {
                "vertices" => ElementClass::Vertices,
                _ => ElementClass::Points,
            };
            commands::attributes::run(&geometry, class, json)
        }
        Commands::Plan {
            count,
            rows,
            square,
            json,
        } => commands::plan::run(count, rows, square, json),
        Commands::Pack {
            geometry,
            recipe,
            output,
            json,
        } => commands::pack::run(&geometry, &recipe, &output, json),
    };

    match result {
        Ok(code) => code,
        Err(err) => {
            eprintln!("{} {:#}", "Error:".red().bold(), err);
            ExitCode::FAILURE
        }
    }
}
