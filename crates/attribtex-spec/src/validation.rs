//! Recipe and snapshot validation logic.

use std::collections::HashSet;
use std::sync::OnceLock;

use regex::Regex;

use crate::error::{ErrorCode, ValidationError, ValidationResult, ValidationWarning, WarningCode};
use crate::geometry::GeometrySnapshot;
use crate::recipe::{ElementClass, PackRecipe};
use crate::slot::{parse_slot_token, FOLDER_SENTINEL};

/// Regex pattern for a well-formed slot-assignment token.
/// Format: attribute name, optionally followed by a dotted component letter
/// or index, or a bracketed index.
const SLOT_TOKEN_PATTERN: &str = r"^[A-Za-z_][A-Za-z0-9_]*(\.([xyzwXYZW]|\d+)|\[\d+\])?$";

static SLOT_TOKEN_REGEX: OnceLock<Regex> = OnceLock::new();

fn slot_token_regex() -> &'static Regex {
    SLOT_TOKEN_REGEX.get_or_init(|| Regex::new(SLOT_TOKEN_PATTERN).expect("invalid regex pattern"))
}

/// Validates a recipe and returns a validation result.
///
/// Blank tokens and [`FOLDER_SENTINEL`] entries are always valid. Attribute
/// names are checked for syntax only; whether they resolve against live
/// geometry is decided at pack time, where stale names degrade to unassigned
/// slots by design.
///
/// # Example
/// ```
/// use attribtex_spec::{ElementClass, PackRecipe, SizeMode};
/// use attribtex_spec::validation::validate_recipe;
///
/// let recipe = PackRecipe::new(ElementClass::Points, SizeMode::Smallest)
///     .row(["P.x", "P.y", "P.z", ""]);
/// assert!(validate_recipe(&recipe).is_ok());
/// ```
pub fn validate_recipe(recipe: &PackRecipe) -> ValidationResult {
    let mut result = ValidationResult::default();

    validate_assignment_tokens(recipe, &mut result);
    check_assignment_warnings(recipe, &mut result);

    result
}

/// Validates every assignment token's syntax.
fn validate_assignment_tokens(recipe: &PackRecipe, result: &mut ValidationResult) {
    for (index, token) in recipe.assignments.iter().enumerate() {
        let trimmed = token.trim();
        if trimmed.is_empty() || trimmed == FOLDER_SENTINEL {
            continue;
        }
        if !slot_token_regex().is_match(trimmed) {
            result.add_error(ValidationError::with_path(
                ErrorCode::InvalidSlotToken,
                format!("token '{}' is not a valid slot assignment", token),
                format!("assignments[{}]", index),
            ));
        }
    }
}

/// Emits warnings for degenerate or suspicious assignment lists.
fn check_assignment_warnings(recipe: &PackRecipe, result: &mut ValidationResult) {
    let mut seen: HashSet<(&str, usize)> = HashSet::new();
    let mut assigned = 0usize;

    for (index, token) in recipe.assignments.iter().enumerate() {
        if token.trim() == FOLDER_SENTINEL {
            continue;
        }
        let Some(source) = parse_slot_token(token) else {
            continue;
        };
        assigned += 1;
        if !seen.insert(source) {
            result.add_warning(ValidationWarning::with_path(
                WarningCode::DuplicateAssignment,
                format!("'{}' is already assigned to an earlier slot", token.trim()),
                format!("assignments[{}]", index),
            ));
        }
    }

    if assigned == 0 {
        result.add_warning(ValidationWarning::new(
            WarningCode::NoAssignedSlots,
            "recipe assigns no slots; the packed buffer will be all default pixels",
        ));
    }
}

/// Validates a geometry snapshot and returns a validation result.
///
/// Checks each attribute's component width, value length against the element
/// count of its class, and name uniqueness within a class.
pub fn validate_snapshot(snapshot: &GeometrySnapshot) -> ValidationResult {
    let mut result = ValidationResult::default();
    let mut seen: HashSet<(&str, ElementClass)> = HashSet::new();

    for (index, attribute) in snapshot.attributes.iter().enumerate() {
        if attribute.size == 0 {
            result.add_error(ValidationError::with_path(
                ErrorCode::InvalidAttributeSize,
                format!("attribute '{}' must have size >= 1", attribute.name),
                format!("attributes[{}].size", index),
            ));
            continue;
        }

        let expected = snapshot.element_count(attribute.class) * attribute.size;
        if attribute.values.len() != expected {
            result.add_error(ValidationError::with_path(
                ErrorCode::AttributeLengthMismatch,
                format!(
                    "attribute '{}' expects {} values ({} {} x {} components), got {}",
                    attribute.name,
                    expected,
                    snapshot.element_count(attribute.class),
                    attribute.class,
                    attribute.size,
                    attribute.values.len()
                ),
                format!("attributes[{}].values", index),
            ));
        }

        if !seen.insert((attribute.name.as_str(), attribute.class)) {
            result.add_error(ValidationError::with_path(
                ErrorCode::DuplicateAttribute,
                format!(
                    "attribute '{}' appears more than once for class '{}'",
                    attribute.name, attribute.class
                ),
                format!("attributes[{}].name", index),
            ));
        }
    }

    result
}
