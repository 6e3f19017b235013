//! Tooltip WASM API
//!
//! This module provides the JavaScript-facing API for tooltip placement.
//!
//! # Module Structure
//!
//! - `helpers`: Serialization, config parsing, and JS callback wrapping
//! - `tooltip`: `TooltipHandle`, one mounted tooltip drawing into a DOM portal
//! - `placement`: `computePlacement`, the stateless geometry entry point

pub mod helpers;
pub mod tooltip;
pub mod placement;

pub use tooltip::TooltipHandle;
pub use placement::compute_placement_js;
