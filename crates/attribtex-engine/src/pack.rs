//! The packing algorithm.

use std::borrow::Cow;
use std::collections::hash_map::Entry;
use std::collections::HashMap;

use thiserror::Error;

use attribtex_spec::BackendError;

use crate::buffer::PixelBuffer;
use crate::geometry::AttributeStore;
use crate::layout::Layout;
use crate::mapping::{padded_size, SlotMapping};

/// Errors from buffer packing.
///
/// A missing attribute aborts the single pack request. An out-of-bounds
/// write means the layout, mapping, and packer disagree: that is a
/// programming error upstream, never a user error, and it must not be
/// swallowed.
#[derive(Debug, Error)]
pub enum PackError {
    /// A named attribute is absent from the store.
    #[error("attribute '{0}' not found")]
    AttributeNotFound(String),

    /// A slot write landed outside the allocated buffer.
    #[error("slot {slot} writes out of bounds: index {index} exceeds buffer length {len}")]
    OutOfBounds {
        /// Slot index whose write went out of range.
        slot: usize,
        /// Offending buffer index.
        index: usize,
        /// Buffer length in floats.
        len: usize,
    },

    /// A caller-supplied parameter violates the packing contract.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
}

impl BackendError for PackError {
    fn code(&self) -> &'static str {
        match self {
            PackError::AttributeNotFound(_) => "PACK_001",
            PackError::OutOfBounds { .. } => "PACK_002",
            PackError::InvalidParameter(_) => "PACK_003",
        }
    }

    fn category(&self) -> &'static str {
        "pack"
    }
}

/// Fetches an attribute's values with the 3-to-4 padding applied.
///
/// Returns the effective stride and the value slice. Width-3 attributes are
/// rebuilt once with a constant `1.0` fourth component so index 3 is always
/// addressable as homogeneous/alpha; other widths borrow the store's values
/// directly.
fn padded_values<'a>(
    store: &'a dyn AttributeStore,
    name: &str,
    element_count: usize,
) -> Result<(usize, Cow<'a, [f32]>), PackError> {
    let size = store.attribute_size(name)?;
    let values = store.attribute_values(name)?;
    if values.len() != element_count * size {
        return Err(PackError::InvalidParameter(format!(
            "attribute '{}' has {} values, expected {} ({} elements x {} components)",
            name,
            values.len(),
            element_count * size,
            element_count,
            size
        )));
    }

    let stride = padded_size(size);
    if stride != size {
        let mut padded = Vec::with_capacity(element_count * stride);
        for element in values.chunks_exact(size) {
            padded.extend_from_slice(element);
            padded.push(1.0);
        }
        Ok((stride, Cow::Owned(padded)))
    } else {
        Ok((size, Cow::Borrowed(values)))
    }
}

/// Packs attribute values into a fresh pixel buffer.
///
/// Every slot resolved to an attribute component writes `element_count`
/// values into its strided destination positions; `None` slots leave the
/// default pixel `(0, 0, 0, 1)`. Destination rows are spaced evenly across
/// the buffer height (`ceil(height / num_rows)` pixel rows apart) rather
/// than packed contiguously, so each row starts on a predictable UV-row
/// boundary for the sampling shader; the spacing wastes some buffer space
/// when the height does not divide evenly.
pub fn pack_buffer(
    mapping: &SlotMapping,
    store: &dyn AttributeStore,
    layout: &Layout,
    element_count: usize,
) -> Result<PixelBuffer, PackError> {
    if layout.width == 0 || layout.height == 0 {
        return Err(PackError::InvalidParameter(format!(
            "layout must have positive dimensions, got {}x{}",
            layout.width, layout.height
        )));
    }

    let mut buffer = PixelBuffer::new(layout.width, layout.height);
    let num_rows = mapping.num_rows();
    if num_rows == 0 || element_count == 0 {
        return Ok(buffer);
    }

    let pixel_rows = (layout.height as f64 / num_rows as f64).ceil() as usize;
    let row_span = pixel_rows * layout.width * 4;
    let len = buffer.data.len();

    let mut values_cache: HashMap<&str, (usize, Cow<'_, [f32]>)> = HashMap::new();

    for (index, slot) in mapping.slots().iter().enumerate() {
        let Some(source) = slot else {
            continue;
        };

        let (stride, values) = match values_cache.entry(source.attribute.as_str()) {
            Entry::Occupied(entry) => entry.into_mut(),
            Entry::Vacant(entry) => {
                entry.insert(padded_values(store, &source.attribute, element_count)?)
            }
        };

        let row = index / 4;
        let column = index % 4;
        let start = column + row * row_span;
        let last = start + (element_count - 1) * 4;
        if last >= len {
            return Err(PackError::OutOfBounds {
                slot: index,
                index: last,
                len,
            });
        }

        for element in 0..element_count {
            buffer.data[start + element * 4] = values[element * *stride + source.component];
        }
    }

    Ok(buffer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::buffer::DEFAULT_PIXEL;
    use crate::geometry::SnapshotStore;
    use crate::mapping::resolve_mapping;
    use attribtex_spec::{AttributeData, ElementClass, GeometrySnapshot};

    fn tokens(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|t| t.to_string()).collect()
    }

    fn position_snapshot() -> GeometrySnapshot {
        GeometrySnapshot::new(4, 0).with_attribute(AttributeData::new(
            "P",
            ElementClass::Points,
            3,
            vec![
                0.0, 0.5, 9.0, //
                1.0, 1.5, 9.0, //
                2.0, 2.5, 9.0, //
                3.0, 3.5, 9.0,
            ],
        ))
    }

    fn layout(width: usize, height: usize) -> Layout {
        Layout {
            width,
            height,
            min_height: height,
        }
    }

    #[test]
    fn test_unassigned_slots_keep_default_pixels() {
        let snapshot = position_snapshot();
        let store = SnapshotStore::new(&snapshot, ElementClass::Points);
        let mapping = resolve_mapping(&tokens(&["", "", "", ""]), &store);

        let buffer = pack_buffer(&mapping, &store, &layout(2, 2), 4).unwrap();
        for y in 0..2 {
            for x in 0..2 {
                assert_eq!(buffer.get(x, y), DEFAULT_PIXEL);
            }
        }
    }

    #[test]
    fn test_strided_column_writes() {
        let snapshot = position_snapshot();
        let store = SnapshotStore::new(&snapshot, ElementClass::Points);
        let mapping = resolve_mapping(&tokens(&["P.x", "P.y", "P.z", ""]), &store);

        let buffer = pack_buffer(&mapping, &store, &layout(2, 2), 4).unwrap();

        // Element e lives at pixel e in linear order; columns carry the
        // attribute components and the unassigned alpha stays 1.0.
        let expected_x = [0.0, 1.0, 2.0, 3.0];
        let expected_y = [0.5, 1.5, 2.5, 3.5];
        for element in 0..4 {
            let pixel = buffer.get(element % 2, element / 2);
            assert_eq!(pixel[0], expected_x[element]);
            assert_eq!(pixel[1], expected_y[element]);
            assert_eq!(pixel[2], 9.0);
            assert_eq!(pixel[3], 1.0);
        }
    }

    #[test]
    fn test_three_wide_attribute_pads_component_three() {
        let snapshot = position_snapshot();
        let store = SnapshotStore::new(&snapshot, ElementClass::Points);
        let mapping = resolve_mapping(&tokens(&["P.w", "", "", ""]), &store);

        let buffer = pack_buffer(&mapping, &store, &layout(2, 2), 4).unwrap();
        for element in 0..4 {
            assert_eq!(buffer.get(element % 2, element / 2)[0], 1.0);
        }
    }

    #[test]
    fn test_rows_are_spaced_evenly() {
        let snapshot = GeometrySnapshot::new(2, 0)
            .with_attribute(AttributeData::new(
                "a",
                ElementClass::Points,
                1,
                vec![1.0, 2.0],
            ))
            .with_attribute(AttributeData::new(
                "b",
                ElementClass::Points,
                1,
                vec![3.0, 4.0],
            ));
        let store = SnapshotStore::new(&snapshot, ElementClass::Points);
        let mapping = resolve_mapping(
            &tokens(&["a", "", "", "", "b", "", "", ""]),
            &store,
        );
        assert_eq!(mapping.num_rows(), 2);

        // Height 3 over two rows: row stride is ceil(3/2) = 2 pixel rows, so
        // the second row starts at pixel row 2 and pixel row 1 keeps its gap.
        let buffer = pack_buffer(&mapping, &store, &layout(2, 3), 2).unwrap();
        assert_eq!(buffer.get(0, 0)[0], 1.0);
        assert_eq!(buffer.get(1, 0)[0], 2.0);
        assert_eq!(buffer.get(0, 1), DEFAULT_PIXEL);
        assert_eq!(buffer.get(1, 1), DEFAULT_PIXEL);
        assert_eq!(buffer.get(0, 2)[0], 3.0);
        assert_eq!(buffer.get(1, 2)[0], 4.0);
    }

    #[test]
    fn test_duplicate_sources_write_each_slot() {
        let snapshot = position_snapshot();
        let store = SnapshotStore::new(&snapshot, ElementClass::Points);
        let mapping = resolve_mapping(&tokens(&["P.x", "P.x", "", ""]), &store);

        let buffer = pack_buffer(&mapping, &store, &layout(2, 2), 4).unwrap();
        for element in 0..4 {
            let pixel = buffer.get(element % 2, element / 2);
            assert_eq!(pixel[0], pixel[1]);
        }
    }

    #[test]
    fn test_packing_is_idempotent() {
        let snapshot = position_snapshot();
        let store = SnapshotStore::new(&snapshot, ElementClass::Points);
        let mapping = resolve_mapping(&tokens(&["P.x", "P.y", "P.z", "P.w"]), &store);

        let a = pack_buffer(&mapping, &store, &layout(2, 2), 4).unwrap();
        let b = pack_buffer(&mapping, &store, &layout(2, 2), 4).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.content_hash(), b.content_hash());
    }

    #[test]
    fn test_undersized_layout_is_out_of_bounds() {
        let snapshot = position_snapshot();
        let store = SnapshotStore::new(&snapshot, ElementClass::Points);
        let mapping = resolve_mapping(&tokens(&["P.x", "", "", ""]), &store);

        let err = pack_buffer(&mapping, &store, &layout(1, 1), 4).unwrap_err();
        match err {
            PackError::OutOfBounds { slot, index, len } => {
                assert_eq!(slot, 0);
                assert_eq!(index, 12);
                assert_eq!(len, 4);
            }
            other => panic!("expected OutOfBounds, got {:?}", other),
        }
    }

    #[test]
    fn test_zero_width_layout_is_rejected() {
        let snapshot = position_snapshot();
        let store = SnapshotStore::new(&snapshot, ElementClass::Points);
        let mapping = resolve_mapping(&tokens(&["P.x"]), &store);

        let err = pack_buffer(&mapping, &store, &layout(0, 1), 4).unwrap_err();
        assert!(matches!(err, PackError::InvalidParameter(_)));
    }

    #[test]
    fn test_length_contract_violation_is_rejected() {
        // A store whose values disagree with the element count is a breach
        // of the snapshot contract, not a silent omission.
        let snapshot = GeometrySnapshot::new(4, 0).with_attribute(AttributeData::new(
            "short",
            ElementClass::Points,
            1,
            vec![1.0, 2.0],
        ));
        let store = SnapshotStore::new(&snapshot, ElementClass::Points);
        let mapping = resolve_mapping(&tokens(&["short"]), &store);

        let err = pack_buffer(&mapping, &store, &layout(2, 2), 4).unwrap_err();
        assert!(matches!(err, PackError::InvalidParameter(_)));
    }

    #[test]
    fn test_empty_mapping_returns_default_buffer() {
        let snapshot = position_snapshot();
        let store = SnapshotStore::new(&snapshot, ElementClass::Points);
        let mapping = resolve_mapping(&[], &store);

        let buffer = pack_buffer(&mapping, &store, &layout(1, 1), 4).unwrap();
        assert_eq!(buffer.get(0, 0), DEFAULT_PIXEL);
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(
            PackError::AttributeNotFound("P".to_string()).code(),
            "PACK_001"
        );
        assert_eq!(
            PackError::OutOfBounds {
                slot: 0,
                index: 0,
                len: 0
            }
            .code(),
            "PACK_002"
        );
        assert_eq!(
            PackError::InvalidParameter("x".to_string()).code(),
            "PACK_003"
        );
    }
}
