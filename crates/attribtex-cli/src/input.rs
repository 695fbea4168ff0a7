//! Input file loading.

use std::path::Path;

use anyhow::{Context, Result};

use attribtex_spec::{GeometrySnapshot, PackRecipe};

/// Loads a geometry snapshot from a JSON file.
pub fn load_snapshot(path: &Path) -> Result<GeometrySnapshot> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read geometry file: {}", path.display()))?;
    serde_json::from_str(&text)
        .with_context(|| format!("failed to parse geometry file: {}", path.display()))
}

/// Loads a pack recipe from a JSON file.
pub fn load_recipe(path: &Path) -> Result<PackRecipe> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read recipe file: {}", path.display()))?;
    serde_json::from_str(&text)
        .with_context(|| format!("failed to parse recipe file: {}", path.display()))
}
