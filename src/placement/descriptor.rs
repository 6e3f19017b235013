//! Placement descriptor returned from the calculator to the renderer
//!
//! Like the layout display lists elsewhere in this crate, the descriptor
//! carries fully resolved pixel values so the renderer does no math.

use serde::{Deserialize, Serialize};

use super::animation::AnimationStyle;

/// Which viewport edge forced a horizontal correction, if any
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum ClampSide {
    #[default]
    None,
    Left,
    Right,
}

/// Direction the pointer triangle points
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum PointerDirection {
    /// Tooltip sits above the anchor, caret points down at it
    Down,

    /// Tooltip was shifted below the anchor, caret points up at it
    Up,
}

/// Absolute position of the outer tooltip box
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WrapperStyle {
    /// Left edge, after clipping correction
    pub left: f32,

    /// Top edge
    pub top: f32,

    /// Edge that forced the left offset, `None` if the centered position fit
    pub clamped: ClampSide,
}

/// Sizing constraints of the content box
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ContentStyle {
    /// Maximum width; never wider than the viewport
    pub max_width: f32,

    /// False while the content has not been measured yet
    pub measured: bool,
}

/// Position of the pointer container relative to the wrapper
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PointerWrapperStyle {
    /// Horizontal offset of the caret tip from the wrapper's left edge
    pub left: f32,

    /// Vertical offset from the wrapper's top edge
    pub top: f32,
}

/// Shape and orientation of the pointer triangle
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PointerStyle {
    pub width: f32,

    pub height: f32,

    /// Shift that centers the triangle on the caret tip
    pub margin_left: f32,

    pub direction: PointerDirection,
}

/// Fully resolved visual placement for one tooltip render
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PlacementDescriptor {
    pub wrapper_style: WrapperStyle,
    pub content_style: ContentStyle,
    pub pointer_wrapper_style: PointerWrapperStyle,
    pub pointer_style: PointerStyle,
    pub animation_style: AnimationStyle,
}

impl PlacementDescriptor {
    /// Copy of the layout fields with animation fields zeroed, for comparing
    /// placements computed at different animation progress
    pub fn layout_only(&self) -> Self {
        Self {
            animation_style: AnimationStyle {
                opacity: 0.0,
                scale: 0.0,
                pointer_opacity: 0.0,
            },
            ..*self
        }
    }

    /// Every numeric field, in declaration order
    pub fn numeric_fields(&self) -> [f32; 11] {
        [
            self.wrapper_style.left,
            self.wrapper_style.top,
            self.content_style.max_width,
            self.pointer_wrapper_style.left,
            self.pointer_wrapper_style.top,
            self.pointer_style.width,
            self.pointer_style.height,
            self.pointer_style.margin_left,
            self.animation_style.opacity,
            self.animation_style.scale,
            self.animation_style.pointer_opacity,
        ]
    }
}
