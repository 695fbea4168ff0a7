//! Slot-assignment resolution.

use attribtex_spec::{parse_slot_token, FOLDER_SENTINEL};

use crate::geometry::AttributeStore;

/// A resolved slot source: one component of one live attribute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlotSource {
    /// Attribute name.
    pub attribute: String,
    /// Component index into the (padding-adjusted) attribute.
    pub component: usize,
}

impl SlotSource {
    /// Creates a slot source.
    pub fn new(attribute: impl Into<String>, component: usize) -> Self {
        Self {
            attribute: attribute.into(),
            component,
        }
    }
}

/// The normalized slot sequence: one entry per physical destination slot,
/// four columns per row, blanks preserved as `None`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SlotMapping {
    slots: Vec<Option<SlotSource>>,
}

impl SlotMapping {
    /// The slot sequence in destination order.
    pub fn slots(&self) -> &[Option<SlotSource>] {
        &self.slots
    }

    /// Number of physical slots.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Returns true when the mapping has no slots at all.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Number of destination rows (four slots per row, last row may be
    /// partial).
    pub fn num_rows(&self) -> usize {
        self.slots.len().div_ceil(4)
    }

    /// Number of slots that resolved to an attribute component.
    pub fn assigned(&self) -> usize {
        self.slots.iter().filter(|s| s.is_some()).count()
    }
}

/// Component width used for slot resolution and packing.
///
/// 3-wide attributes are padded to four components with a constant trailing
/// `1.0`, so their component 3 is addressable.
pub(crate) fn padded_size(size: usize) -> usize {
    if size == 3 {
        4
    } else {
        size
    }
}

/// Resolves raw slot-assignment tokens into a [`SlotMapping`].
///
/// Tokens resolve in their literal order: `column = index % 4`,
/// `row = index / 4`. [`FOLDER_SENTINEL`] entries are skipped entirely and
/// consume no slot index. Blank tokens stay as explicit `None` slots.
/// Tokens that are malformed, name an attribute absent from the store, or
/// address a component outside the attribute's padded width also resolve to
/// `None` rather than erroring: user-edited assignments may reference stale
/// attributes after the geometry changed upstream.
pub fn resolve_mapping(assignments: &[String], store: &dyn AttributeStore) -> SlotMapping {
    let mut slots = Vec::with_capacity(assignments.len());

    for token in assignments {
        if token.trim() == FOLDER_SENTINEL {
            continue;
        }
        slots.push(resolve_token(token, store));
    }

    SlotMapping { slots }
}

fn resolve_token(token: &str, store: &dyn AttributeStore) -> Option<SlotSource> {
    let (name, component) = parse_slot_token(token)?;
    let size = store.attribute_size(name).ok()?;
    if component >= padded_size(size) {
        return None;
    }
    Some(SlotSource::new(name, component))
}
