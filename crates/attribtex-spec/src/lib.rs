//! Attribtex Pack Configuration Library
//!
//! This crate provides the boundary types for the attribtex packing engine:
//! pack recipes (which attribute components land in which destination slots),
//! geometry attribute snapshots, validation, and canonical hashing.
//!
//! # Overview
//!
//! A pack request is described by two documents:
//!
//! - **Recipe**: element class, size policy, and the ordered list of raw
//!   slot-assignment tokens exactly as the user edited them
//! - **Geometry snapshot**: the immutable numeric attribute data the host
//!   supplies for one pack invocation
//!
//! # Example
//!
//! ```
//! use attribtex_spec::{ElementClass, PackRecipe, SizeMode};
//! use attribtex_spec::validation::validate_recipe;
//! use attribtex_spec::hash::canonical_recipe_hash;
//!
//! // Build a recipe: position into the first row, alpha slot left blank
//! let recipe = PackRecipe::new(ElementClass::Points, SizeMode::Smallest)
//!     .row(["P.x", "P.y", "P.z", ""]);
//!
//! // Validate the recipe
//! let result = validate_recipe(&recipe);
//! assert!(result.is_ok());
//!
//! // Compute the canonical hash
//! let hash = canonical_recipe_hash(&recipe).unwrap();
//! assert_eq!(hash.len(), 64);
//! ```
//!
//! # Modules
//!
//! - [`error`]: Error and warning types for validation
//! - [`geometry`]: Geometry attribute snapshot types
//! - [`hash`]: Canonical hashing of recipes and snapshots
//! - [`recipe`]: Pack recipe types
//! - [`slot`]: Display-layer helpers for slot-assignment tokens
//! - [`validation`]: Recipe and snapshot validation functions

pub mod error;
pub mod geometry;
pub mod hash;
pub mod recipe;
pub mod slot;
pub mod validation;

// Re-export commonly used types at the crate root
pub use error::{
    BackendError, ErrorCode, SpecError, ValidationError, ValidationResult, ValidationWarning,
    WarningCode,
};
pub use geometry::{AttributeData, GeometrySnapshot};
pub use hash::{canonical_recipe_hash, canonical_snapshot_hash, canonical_value_hash};
pub use recipe::{ElementClass, PackRecipe, SizeMode};
pub use slot::{
    component_label, is_valid_attribute_name, parse_component, parse_slot_token, slot_token,
    FOLDER_SENTINEL,
};
pub use validation::{validate_recipe, validate_snapshot};
