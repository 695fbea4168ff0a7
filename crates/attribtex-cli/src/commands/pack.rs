//! Pack command implementation.
//!
//! Packs a geometry snapshot into a data-texture buffer and writes the raw
//! little-endian floats to disk. Image encoding stays out of scope; hosts
//! that want an image container convert the raw buffer themselves.

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;
use std::process::ExitCode;

use anyhow::{Context, Result};
use byteorder::{LittleEndian, WriteBytesExt};
use colored::Colorize;
use serde_json::json;

use attribtex_engine::{build_texture, PackResult};
use attribtex_spec::{validate_recipe, validate_snapshot, BackendError};

use super::print_validation;
use crate::input::{load_recipe, load_snapshot};

/// Summary of one pack run, for reporting.
pub struct PackSummary {
    /// Buffer width in pixels.
    pub width: usize,
    /// Buffer height in pixels.
    pub height: usize,
    /// Minimum height that holds all destination rows.
    pub min_height: usize,
    /// BLAKE3 hash of the buffer bytes.
    pub hash: String,
    /// Number of bytes written.
    pub bytes_written: usize,
}

/// Run the pack command.
///
/// Exit code: 0 on success, 1 when validation or packing fails.
pub fn run(
    geometry_path: &str,
    recipe_path: &str,
    output_path: &str,
    json_output: bool,
) -> Result<ExitCode> {
    if !json_output {
        println!(
            "{} {} + {}",
            "Packing:".cyan().bold(),
            geometry_path,
            recipe_path
        );
    }

    match pack_to_file(
        Path::new(geometry_path),
        Path::new(recipe_path),
        Path::new(output_path),
        json_output,
    )? {
        Some(summary) => {
            if json_output {
                let output = json!({
                    "ok": true,
                    "width": summary.width,
                    "height": summary.height,
                    "min_height": summary.min_height,
                    "hash": summary.hash,
                    "output": output_path,
                    "bytes_written": summary.bytes_written,
                });
                println!("{}", serde_json::to_string_pretty(&output)?);
            } else {
                println!(
                    "{} {}x{} (min height {})",
                    "Layout:".green().bold(),
                    summary.width,
                    summary.height,
                    summary.min_height
                );
                println!("{} {}", "Hash:".dimmed(), summary.hash);
                println!(
                    "{} {} ({} bytes)",
                    "Wrote:".green().bold(),
                    output_path,
                    summary.bytes_written
                );
            }
            Ok(ExitCode::SUCCESS)
        }
        None => Ok(ExitCode::FAILURE),
    }
}

/// Loads, validates, packs, and writes. Returns `None` when validation
/// rejected the inputs (already reported).
fn pack_to_file(
    geometry_path: &Path,
    recipe_path: &Path,
    output_path: &Path,
    json_output: bool,
) -> Result<Option<PackSummary>> {
    let snapshot = load_snapshot(geometry_path)?;
    let recipe = load_recipe(recipe_path)?;

    let snapshot_result = validate_snapshot(&snapshot);
    let recipe_result = validate_recipe(&recipe);
    if !snapshot_result.is_ok() || !recipe_result.is_ok() {
        if json_output {
            let errors: Vec<_> = snapshot_result
                .errors
                .iter()
                .chain(recipe_result.errors.iter())
                .map(|e| json!({"code": e.code.code(), "message": e.message, "path": e.path}))
                .collect();
            println!(
                "{}",
                serde_json::to_string_pretty(&json!({"ok": false, "errors": errors}))?
            );
        } else {
            print_validation(&snapshot_result);
            print_validation(&recipe_result);
        }
        return Ok(None);
    }
    if !json_output {
        print_validation(&recipe_result);
    }

    let result = match build_texture(&snapshot, &recipe) {
        Ok(result) => result,
        Err(err) => {
            if json_output {
                let output = json!({
                    "ok": false,
                    "error": {"code": err.code(), "message": err.to_string()},
                });
                println!("{}", serde_json::to_string_pretty(&output)?);
            } else {
                eprintln!("{} [{}] {}", "Error:".red().bold(), err.code(), err);
            }
            return Ok(None);
        }
    };

    let bytes_written = write_buffer(&result, output_path)?;

    Ok(Some(PackSummary {
        width: result.layout.width,
        height: result.layout.height,
        min_height: result.layout.min_height,
        hash: result.hash,
        bytes_written,
    }))
}

/// Writes the buffer as raw little-endian f32 values. Returns the byte
/// count.
fn write_buffer(result: &PackResult, path: &Path) -> Result<usize> {
    let file = File::create(path)
        .with_context(|| format!("failed to create output file: {}", path.display()))?;
    let mut writer = BufWriter::new(file);
    for value in result.buffer.as_slice() {
        writer
            .write_f32::<LittleEndian>(*value)
            .with_context(|| format!("failed to write output file: {}", path.display()))?;
    }
    Ok(result.buffer.len() * 4)
}
