//! Models module for tooltip placement
//!
//! This module contains the geometry records, shift offsets, and
//! configuration consumed by the placement and controller layers.

pub mod constants;
pub mod geometry;
pub mod offset;
pub mod config;

// Re-export commonly used types
pub use geometry::*;
pub use offset::{Offset, ShiftOffsets, ResolvedShift};
pub use config::{TooltipConfig, ContentNode, RenderContent};
