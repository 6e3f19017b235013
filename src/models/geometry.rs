//! Geometry records for anchor, viewport, and measured tooltip boxes
//!
//! All values are CSS pixels relative to the viewport origin. Every record
//! offers a `sanitized` form where NaN/infinite values become 0 and sizes
//! are never negative, so downstream layout math never sees garbage.

use serde::{Deserialize, Serialize};

/// Replace NaN and infinities with 0
pub fn finite_or_zero(value: f32) -> f32 {
    if value.is_finite() {
        value
    } else {
        0.0
    }
}

/// Replace NaN, infinities, and negative values with 0
pub fn non_negative(value: f32) -> f32 {
    finite_or_zero(value).max(0.0)
}

/// Position and size of the element the tooltip points at
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq)]
pub struct AnchorRect {
    /// Left edge, relative to the viewport
    pub x: f32,

    /// Top edge, relative to the viewport
    pub y: f32,

    pub width: f32,

    pub height: f32,
}

impl AnchorRect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height }
    }

    /// Copy with non-finite coordinates zeroed and negative sizes clamped
    pub fn sanitized(self) -> Self {
        Self {
            x: finite_or_zero(self.x),
            y: finite_or_zero(self.y),
            width: non_negative(self.width),
            height: non_negative(self.height),
        }
    }

    /// Horizontal midpoint of the anchor
    pub fn mid_x(&self) -> f32 {
        self.x + self.width / 2.0
    }

    /// Bottom edge of the anchor
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }
}

/// Current viewport dimensions (height is not tracked)
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq)]
pub struct ViewportMetrics {
    pub width: f32,
}

impl ViewportMetrics {
    pub fn new(width: f32) -> Self {
        Self { width }
    }

    pub fn sanitized(self) -> Self {
        Self {
            width: non_negative(self.width),
        }
    }
}

/// Measured width of the tooltip's content node
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq)]
pub struct ContentSize {
    pub width: f32,
}

impl ContentSize {
    pub fn new(width: f32) -> Self {
        Self { width }
    }

    pub fn sanitized(self) -> Self {
        Self {
            width: non_negative(self.width),
        }
    }
}

/// Measured height of the tooltip's outer wrapper box
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq)]
pub struct WrapperSize {
    pub height: f32,
}

impl WrapperSize {
    pub fn new(height: f32) -> Self {
        Self { height }
    }

    pub fn sanitized(self) -> Self {
        Self {
            height: non_negative(self.height),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_anchor_clamps_negative_sizes() {
        let anchor = AnchorRect::new(-20.0, f32::NAN, -5.0, f32::INFINITY).sanitized();
        assert_eq!(anchor.x, -20.0);
        assert_eq!(anchor.y, 0.0);
        assert_eq!(anchor.width, 0.0);
        assert_eq!(anchor.height, 0.0);
    }

    #[test]
    fn test_anchor_midpoint() {
        let anchor = AnchorRect::new(100.0, 40.0, 50.0, 20.0);
        assert_eq!(anchor.mid_x(), 125.0);
        assert_eq!(anchor.bottom(), 60.0);
    }

    #[test]
    fn test_non_negative() {
        assert_eq!(non_negative(-3.0), 0.0);
        assert_eq!(non_negative(f32::NEG_INFINITY), 0.0);
        assert_eq!(non_negative(7.5), 7.5);
    }
}
