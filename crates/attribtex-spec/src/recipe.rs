//! Pack recipe types.
//!
//! A recipe is the user-edited configuration for one packing setup: which
//! element class to read, how to size the output buffer, and the ordered
//! slot-assignment tokens. Tokens are kept raw; the engine resolves them
//! against the live attribute set at pack time so stale names degrade to
//! unassigned slots instead of failing the recipe.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::slot::{parse_slot_token, FOLDER_SENTINEL};

/// Element class an attribute is defined over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ElementClass {
    /// Per-point attributes.
    #[default]
    Points,
    /// Per-vertex attributes.
    Vertices,
}

impl ElementClass {
    /// Returns the element class as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            ElementClass::Points => "points",
            ElementClass::Vertices => "vertices",
        }
    }
}

impl std::fmt::Display for ElementClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Size policy for the output buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SizeMode {
    /// Minimum height that holds all destination rows.
    #[default]
    Smallest,
    /// Square buffer (`height == width`).
    Square,
}

impl SizeMode {
    /// Returns the size mode as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            SizeMode::Smallest => "smallest",
            SizeMode::Square => "square",
        }
    }
}

impl std::fmt::Display for SizeMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A packing recipe: element class, size policy, and the ordered raw
/// slot-assignment tokens.
///
/// Token order defines slot positions: `column = index % 4`,
/// `row = index / 4`, after [`FOLDER_SENTINEL`] entries are dropped. Blank
/// tokens are explicit "no data" slots and keep their position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct PackRecipe {
    /// Element class the recipe packs.
    #[serde(default)]
    pub element_class: ElementClass,
    /// Output buffer size policy.
    #[serde(default)]
    pub size_mode: SizeMode,
    /// Ordered destination-slot assignment tokens, four per row.
    #[serde(default)]
    pub assignments: Vec<String>,
}

impl PackRecipe {
    /// Creates an empty recipe for the given class and size policy.
    pub fn new(element_class: ElementClass, size_mode: SizeMode) -> Self {
        Self {
            element_class,
            size_mode,
            assignments: Vec::new(),
        }
    }

    /// Appends a single slot-assignment token.
    pub fn assign(mut self, token: impl Into<String>) -> Self {
        self.assignments.push(token.into());
        self
    }

    /// Appends one destination row of four slot tokens.
    pub fn row(mut self, row: [&str; 4]) -> Self {
        self.assignments.extend(row.iter().map(|t| t.to_string()));
        self
    }

    /// Returns all unique attribute names referenced by the assignments.
    ///
    /// Blank tokens, sentinel entries, and malformed tokens contribute
    /// nothing.
    pub fn referenced_attributes(&self) -> HashSet<&str> {
        self.assignments
            .iter()
            .filter(|token| token.trim() != FOLDER_SENTINEL)
            .filter_map(|token| parse_slot_token(token))
            .map(|(name, _)| name)
            .collect()
    }
}
