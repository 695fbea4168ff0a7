//! Geometry attribute snapshot types.
//!
//! A snapshot is the immutable numeric attribute data the host hands to the
//! engine for one pack invocation. Only numeric attributes are
//! representable here; string and structured attributes are excluded
//! upstream when the host builds the snapshot.

use serde::{Deserialize, Serialize};

use crate::recipe::ElementClass;

/// One named per-element numeric attribute.
///
/// Values are flattened element-major, component-minor: component `k` of
/// element `i` lives at `values[i * size + k]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AttributeData {
    /// Attribute name, unique within its element class.
    pub name: String,
    /// Element class the attribute is defined over.
    #[serde(default)]
    pub class: ElementClass,
    /// Component width (1 for scalars).
    pub size: usize,
    /// Flattened values, `element_count * size` floats.
    pub values: Vec<f32>,
}

impl AttributeData {
    /// Creates a new attribute.
    pub fn new(
        name: impl Into<String>,
        class: ElementClass,
        size: usize,
        values: Vec<f32>,
    ) -> Self {
        Self {
            name: name.into(),
            class,
            size,
            values,
        }
    }
}

/// An immutable snapshot of a geometry's numeric attributes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct GeometrySnapshot {
    /// Number of points.
    #[serde(default)]
    pub point_count: usize,
    /// Number of vertices.
    #[serde(default)]
    pub vertex_count: usize,
    /// All numeric attributes, across both element classes.
    #[serde(default)]
    pub attributes: Vec<AttributeData>,
}

impl GeometrySnapshot {
    /// Creates a snapshot with the given element counts and no attributes.
    pub fn new(point_count: usize, vertex_count: usize) -> Self {
        Self {
            point_count,
            vertex_count,
            attributes: Vec::new(),
        }
    }

    /// Adds an attribute.
    pub fn with_attribute(mut self, attribute: AttributeData) -> Self {
        self.attributes.push(attribute);
        self
    }

    /// Returns the element count for a class.
    pub fn element_count(&self, class: ElementClass) -> usize {
        match class {
            ElementClass::Points => self.point_count,
            ElementClass::Vertices => self.vertex_count,
        }
    }

    /// Looks up an attribute by class and name.
    pub fn attribute(&self, class: ElementClass, name: &str) -> Option<&AttributeData> {
        self.attributes
            .iter()
            .find(|a| a.class == class && a.name == name)
    }
}
