//! Placement calculation
//!
//! Pure geometry: given the anchor, viewport, optional measured sizes,
//! shift offsets, and animation progress, produce a [`PlacementDescriptor`]
//! with every position the renderer needs. Nothing in here touches the DOM.

pub mod animation;
pub mod descriptor;
pub mod calculator;

pub use animation::{AnimationStyle, Easing};
pub use calculator::{compute, compute_placement, PlacementInput};
pub use descriptor::{
    ClampSide, ContentStyle, PlacementDescriptor, PointerDirection, PointerStyle,
    PointerWrapperStyle, WrapperStyle,
};
