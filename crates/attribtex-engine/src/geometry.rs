//! Attribute store trait and the snapshot-backed store.

use attribtex_spec::{slot_token, AttributeData, ElementClass, GeometrySnapshot};

use crate::pack::PackError;

/// Read-only access to one element class of a geometry's numeric attributes.
///
/// Values are flattened element-major, component-minor; the store never
/// mutates and must stay unchanged for the duration of one pack invocation.
pub trait AttributeStore {
    /// Number of elements in the store's class.
    fn element_count(&self) -> usize;

    /// Component width of a named attribute.
    fn attribute_size(&self, name: &str) -> Result<usize, PackError>;

    /// Flattened values of a named attribute, `element_count * size` floats.
    fn attribute_values(&self, name: &str) -> Result<&[f32], PackError>;

    /// Whether a named attribute exists.
    fn contains(&self, name: &str) -> bool;

    /// All attribute names, in snapshot order.
    fn names(&self) -> Vec<&str>;
}

/// An [`AttributeStore`] view over a [`GeometrySnapshot`], filtered to one
/// element class.
pub struct SnapshotStore<'a> {
    snapshot: &'a GeometrySnapshot,
    class: ElementClass,
}

impl<'a> SnapshotStore<'a> {
    /// Create a view over the snapshot's attributes of the given class.
    pub fn new(snapshot: &'a GeometrySnapshot, class: ElementClass) -> Self {
        Self { snapshot, class }
    }

    /// The element class this view exposes.
    pub fn class(&self) -> ElementClass {
        self.class
    }

    fn lookup(&self, name: &str) -> Result<&'a AttributeData, PackError> {
        self.snapshot
            .attribute(self.class, name)
            .ok_or_else(|| PackError::AttributeNotFound(name.to_string()))
    }
}

impl AttributeStore for SnapshotStore<'_> {
    fn element_count(&self) -> usize {
        self.snapshot.element_count(self.class)
    }

    fn attribute_size(&self, name: &str) -> Result<usize, PackError> {
        Ok(self.lookup(name)?.size)
    }

    fn attribute_values(&self, name: &str) -> Result<&[f32], PackError> {
        Ok(&self.lookup(name)?.values)
    }

    fn contains(&self, name: &str) -> bool {
        self.snapshot.attribute(self.class, name).is_some()
    }

    fn names(&self) -> Vec<&str> {
        self.snapshot
            .attributes
            .iter()
            .filter(|a| a.class == self.class)
            .map(|a| a.name.as_str())
            .collect()
    }
}

/// Lists every assignable slot token for the store's attributes.
///
/// This is what a host calls to rebuild its selection menu: one token per
/// attribute component, sorted by attribute name. Scalars list their bare
/// name; 3-wide attributes include the constant fourth component the packer
/// pads in (`name.w`); wider attributes use bracketed indices.
pub fn packable_slots(store: &dyn AttributeStore) -> Vec<String> {
    let mut names = store.names();
    names.sort_unstable();

    let mut tokens = Vec::new();
    for name in names {
        let Ok(size) = store.attribute_size(name) else {
            continue;
        };
        if size == 1 {
            tokens.push(name.to_string());
            continue;
        }
        let listed = if size == 3 { 4 } else { size };
        for component in 0..listed {
            tokens.push(slot_token(name, component));
        }
    }
    tokens
}
