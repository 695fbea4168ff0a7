//! Attribtex Packing Engine
//!
//! This crate packs per-point/per-vertex geometric attribute data into a
//! dense RGBA float pixel buffer (a "data texture") that a shader can
//! sample. Given a geometry snapshot and a pack recipe, it resolves the
//! user-edited slot assignments against the live attribute set, plans
//! power-of-two buffer dimensions, and writes every requested attribute
//! component to its strided destination position. Unassigned slots keep the
//! default pixel `(0, 0, 0, 1)`.
//!
//! The whole pipeline is a pure function of its inputs: no I/O, no retained
//! state, and identical inputs always produce a byte-identical buffer.
//!
//! # Example
//!
//! ```
//! use attribtex_engine::build_texture;
//! use attribtex_spec::{AttributeData, ElementClass, GeometrySnapshot, PackRecipe, SizeMode};
//!
//! let snapshot = GeometrySnapshot::new(4, 0).with_attribute(AttributeData::new(
//!     "P",
//!     ElementClass::Points,
//!     3,
//!     vec![
//!         0.0, 0.0, 0.0, //
//!         1.0, 1.0, 1.0, //
//!         2.0, 2.0, 2.0, //
//!         3.0, 3.0, 3.0,
//!     ],
//! ));
//! let recipe = PackRecipe::new(ElementClass::Points, SizeMode::Smallest)
//!     .row(["P.x", "P.y", "P.z", ""]);
//!
//! let result = build_texture(&snapshot, &recipe).unwrap();
//! assert_eq!(result.layout.width * result.layout.height, 4);
//! assert_eq!(result.buffer.get(0, 0), [0.0, 0.0, 0.0, 1.0]);
//! ```
//!
//! # Modules
//!
//! - [`buffer`]: The output pixel buffer
//! - [`geometry`]: Attribute store trait and snapshot-backed store
//! - [`layout`]: Buffer dimension planning
//! - [`mapping`]: Slot-assignment resolution
//! - [`pack`]: The packing algorithm
//! - [`texture`]: High-level orchestration

pub mod buffer;
pub mod geometry;
pub mod layout;
pub mod mapping;
pub mod pack;
pub mod texture;

// Re-export main types for convenience
pub use buffer::PixelBuffer;
pub use geometry::{packable_slots, AttributeStore, SnapshotStore};
pub use layout::{plan_layout, Layout};
pub use mapping::{resolve_mapping, SlotMapping, SlotSource};
pub use pack::{pack_buffer, PackError};
pub use texture::{build_texture, PackResult};
