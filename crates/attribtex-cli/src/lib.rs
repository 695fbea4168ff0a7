//! Attribtex CLI library.
//!
//! Command implementations for the `attribtex` binary: validating recipes,
//! listing packable attribute slots, planning layouts, and packing geometry
//! snapshots into raw data-texture buffers.

pub mod commands;
pub mod input;
