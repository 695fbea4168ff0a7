//! Canonical hashing of recipes and snapshots.
//!
//! Hashes are computed over canonicalized JSON (sorted object keys, minimal
//! formatting) with BLAKE3, so the same configuration always hashes the same
//! regardless of key order or whitespace in the source document. Hosts use
//! these to key caches of packed buffers.

use crate::error::SpecError;
use crate::geometry::GeometrySnapshot;
use crate::recipe::PackRecipe;

/// Computes the canonical BLAKE3 hash of a recipe.
///
/// # Example
/// ```
/// use attribtex_spec::{ElementClass, PackRecipe, SizeMode};
/// use attribtex_spec::hash::canonical_recipe_hash;
///
/// let recipe = PackRecipe::new(ElementClass::Points, SizeMode::Smallest)
///     .row(["P.x", "P.y", "P.z", ""]);
/// let hash = canonical_recipe_hash(&recipe).unwrap();
/// assert_eq!(hash.len(), 64);
/// ```
pub fn canonical_recipe_hash(recipe: &PackRecipe) -> Result<String, SpecError> {
    let value = serde_json::to_value(recipe)?;
    Ok(canonical_value_hash(&value))
}

/// Computes the canonical BLAKE3 hash of a geometry snapshot.
pub fn canonical_snapshot_hash(snapshot: &GeometrySnapshot) -> Result<String, SpecError> {
    let value = serde_json::to_value(snapshot)?;
    Ok(canonical_value_hash(&value))
}

/// Computes the canonical BLAKE3 hash of a JSON value.
///
/// Returns a 64-character lowercase hexadecimal string.
pub fn canonical_value_hash(value: &serde_json::Value) -> String {
    let canonical = canonicalize_value(value);
    blake3::hash(canonical.as_bytes()).to_hex().to_string()
}

/// Canonicalizes a JSON value: sorted keys, no whitespace, minimal number
/// and string formatting.
fn canonicalize_value(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::Null => "null".to_string(),
        serde_json::Value::Bool(b) => b.to_string(),
        serde_json::Value::Number(n) => format_canonical_number(n),
        serde_json::Value::String(s) => format_canonical_string(s),
        serde_json::Value::Array(arr) => {
            let items: Vec<String> = arr.iter().map(canonicalize_value).collect();
            format!("[{}]", items.join(","))
        }
        serde_json::Value::Object(obj) => {
            let mut sorted_keys: Vec<&String> = obj.keys().collect();
            sorted_keys.sort();

            let pairs: Vec<String> = sorted_keys
                .iter()
                .map(|k| {
                    let v = obj.get(*k).unwrap();
                    format!("{}:{}", format_canonical_string(k), canonicalize_value(v))
                })
                .collect();
            format!("{{{}}}", pairs.join(","))
        }
    }
}

/// Formats a number without trailing zeros or redundant decimal points.
fn format_canonical_number(n: &serde_json::Number) -> String {
    if let Some(i) = n.as_i64() {
        return i.to_string();
    }
    if let Some(u) = n.as_u64() {
        return u.to_string();
    }
    if let Some(f) = n.as_f64() {
        if f.is_nan() || f.is_infinite() {
            return "null".to_string();
        }
        if f == 0.0 {
            return "0".to_string();
        }
        if f.fract() == 0.0 && f.abs() < 1e15 {
            return format!("{}", f as i64);
        }
        let s = format!("{}", f);
        if s.contains('.') && !s.contains('e') && !s.contains('E') {
            return s.trim_end_matches('0').trim_end_matches('.').to_string();
        }
        s
    } else {
        "null".to_string()
    }
}

/// Formats a string with minimal escaping.
fn format_canonical_string(s: &str) -> String {
    let mut result = String::with_capacity(s.len() + 2);
    result.push('"');
    for c in s.chars() {
        match c {
            '"' => result.push_str("\\\""),
            '\\' => result.push_str("\\\\"),
            '\n' => result.push_str("\\n"),
            '\r' => result.push_str("\\r"),
            '\t' => result.push_str("\\t"),
            c if c < '\x20' => {
                result.push_str(&format!("\\u{:04x}", c as u32));
            }
            c => result.push(c),
        }
    }
    result.push('"');
    result
}
