//! High-level orchestration: snapshot + recipe in, packed texture out.

use attribtex_spec::{GeometrySnapshot, PackRecipe};

use crate::buffer::PixelBuffer;
use crate::geometry::{AttributeStore, SnapshotStore};
use crate::layout::{plan_layout, Layout};
use crate::mapping::resolve_mapping;
use crate::pack::{pack_buffer, PackError};

/// Result of building one packed texture.
#[derive(Debug, Clone)]
pub struct PackResult {
    /// The planned dimensions, for the caller to cache.
    pub layout: Layout,
    /// The packed pixel buffer.
    pub buffer: PixelBuffer,
    /// BLAKE3 hash of the buffer's little-endian bytes.
    pub hash: String,
}

/// Builds a packed data texture from a geometry snapshot and a recipe.
///
/// Resolves the recipe's raw assignments against the snapshot's attributes
/// of the recipe's element class, plans the buffer dimensions, and packs.
/// Side-effect-free: every call recomputes from the inputs alone, and
/// identical inputs produce an identical buffer and hash.
pub fn build_texture(
    snapshot: &GeometrySnapshot,
    recipe: &PackRecipe,
) -> Result<PackResult, PackError> {
    let store = SnapshotStore::new(snapshot, recipe.element_class);
    let element_count = store.element_count();

    let mapping = resolve_mapping(&recipe.assignments, &store);
    let layout = plan_layout(element_count, mapping.num_rows(), recipe.size_mode);
    let buffer = pack_buffer(&mapping, &store, &layout, element_count)?;
    let hash = buffer.content_hash();

    Ok(PackResult {
        layout,
        buffer,
        hash,
    })
}
