//! Tooltip placement calculator
//!
//! Horizontal position: center the body on the anchor midpoint, apply the
//! caller's shift, then clamp against both viewport edges. Vertical
//! position: directly above the anchor with room for the pointer, plus
//! the caller's shift. The viewport height is not tracked, so there is no
//! vertical clamping and no automatic flip; callers flip below the anchor
//! with a larger vertical shift.
//!
//! The pointer is positioned from the *unshifted* anchor midpoint relative
//! to the *final* body position, so it keeps pointing at the anchor when
//! the body has been moved to stay on screen.

use crate::models::constants::{DEFAULT_MAX_CONTENT_WIDTH, POINTER_HEIGHT, POINTER_WIDTH};
use crate::models::{
    finite_or_zero, non_negative, AnchorRect, ContentSize, Offset, ResolvedShift, ViewportMetrics,
    WrapperSize,
};

use super::animation::{AnimationStyle, Easing};
use super::descriptor::*;

/// Layout-affecting inputs with shift offsets already resolved
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlacementInput {
    pub anchor: AnchorRect,
    pub viewport: ViewportMetrics,
    pub content: Option<ContentSize>,
    pub wrapper: Option<WrapperSize>,
    pub shift: ResolvedShift,
    pub max_content_width: f32,
}

impl PlacementInput {
    /// Copy with every numeric field clamped to something layout can use
    pub fn sanitized(&self) -> Self {
        Self {
            anchor: self.anchor.sanitized(),
            viewport: self.viewport.sanitized(),
            content: self.content.map(ContentSize::sanitized),
            wrapper: self.wrapper.map(WrapperSize::sanitized),
            shift: ResolvedShift {
                horizontal: finite_or_zero(self.shift.horizontal),
                vertical: finite_or_zero(self.shift.vertical),
            },
            max_content_width: non_negative(self.max_content_width),
        }
    }
}

/// Compute a placement, resolving the shift offsets first
///
/// Convenience form using the default content width cap and easing. Each
/// shift is a constant or a closure; closures run once per call.
pub fn compute(
    anchor: AnchorRect,
    viewport: ViewportMetrics,
    content: Option<ContentSize>,
    wrapper: Option<WrapperSize>,
    shift_horizontal: impl Into<Offset>,
    shift_vertical: impl Into<Offset>,
    animation_progress: f32,
) -> PlacementDescriptor {
    let input = PlacementInput {
        anchor,
        viewport,
        content,
        wrapper,
        shift: ResolvedShift {
            horizontal: shift_horizontal.into().resolve(),
            vertical: shift_vertical.into().resolve(),
        },
        max_content_width: DEFAULT_MAX_CONTENT_WIDTH,
    };
    compute_placement(&input, animation_progress, Easing::default())
}

/// Compute a placement from resolved inputs
///
/// Never fails: unknown sizes are treated as zero and invalid numbers are
/// clamped, so the result is always renderable. Sums of huge finite inputs
/// can still overflow; those positions resolve to 0.
pub fn compute_placement(
    input: &PlacementInput,
    animation_progress: f32,
    easing: Easing,
) -> PlacementDescriptor {
    let input = input.sanitized();
    let anchor = input.anchor;
    let content_width = input.content.map(|c| c.width).unwrap_or(0.0);
    let wrapper_height = input.wrapper.map(|w| w.height).unwrap_or(0.0);

    let (left, clamped) = clamp_horizontal(
        anchor.mid_x() - content_width / 2.0 + input.shift.horizontal,
        content_width,
        input.viewport.width,
    );
    let left = finite_or_zero(left);
    let top = finite_or_zero(anchor.y - wrapper_height - POINTER_HEIGHT + input.shift.vertical);

    // Caret tip tracks the anchor, not the body
    let pointer_left = finite_or_zero(anchor.mid_x() - left);

    let (direction, pointer_top) = if top >= anchor.bottom() {
        (PointerDirection::Up, -POINTER_HEIGHT)
    } else {
        (PointerDirection::Down, wrapper_height)
    };

    PlacementDescriptor {
        wrapper_style: WrapperStyle { left, top, clamped },
        content_style: ContentStyle {
            max_width: input.max_content_width.min(input.viewport.width),
            measured: input.content.is_some() && input.wrapper.is_some(),
        },
        pointer_wrapper_style: PointerWrapperStyle {
            left: pointer_left,
            top: pointer_top,
        },
        pointer_style: PointerStyle {
            width: POINTER_WIDTH,
            height: POINTER_HEIGHT,
            margin_left: -POINTER_WIDTH / 2.0,
            direction,
        },
        animation_style: AnimationStyle::from_progress(animation_progress, easing),
    }
}

/// Two-sided clamp of the body's left edge against the viewport
fn clamp_horizontal(candidate: f32, content_width: f32, viewport_width: f32) -> (f32, ClampSide) {
    let mut left = candidate;
    let mut clamped = ClampSide::None;

    if left + content_width > viewport_width {
        left = (viewport_width - content_width).max(0.0);
        clamped = ClampSide::Right;
    }
    if left < 0.0 {
        left = 0.0;
        clamped = ClampSide::Left;
    }

    (left, clamped)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(anchor: AnchorRect, content: Option<f32>, wrapper: Option<f32>) -> PlacementInput {
        PlacementInput {
            anchor,
            viewport: ViewportMetrics::new(1000.0),
            content: content.map(ContentSize::new),
            wrapper: wrapper.map(WrapperSize::new),
            shift: ResolvedShift::default(),
            max_content_width: 250.0,
        }
    }

    #[test]
    fn test_centered_above_anchor() {
        let placement = compute_placement(
            &input(AnchorRect::new(400.0, 300.0, 100.0, 30.0), Some(120.0), Some(40.0)),
            1.0,
            Easing::Linear,
        );
        assert_eq!(placement.wrapper_style.left, 390.0);
        assert_eq!(placement.wrapper_style.top, 300.0 - 40.0 - POINTER_HEIGHT);
        assert_eq!(placement.wrapper_style.clamped, ClampSide::None);
        assert_eq!(placement.pointer_wrapper_style.left, 60.0);
        assert_eq!(placement.pointer_wrapper_style.top, 40.0);
        assert_eq!(placement.pointer_style.direction, PointerDirection::Down);
        assert!(placement.content_style.measured);
    }

    #[test]
    fn test_clamp_content_wider_than_viewport() {
        // Content wider than the viewport is pinned to the left edge
        let (left, side) = clamp_horizontal(-30.0, 1200.0, 1000.0);
        assert_eq!(left, 0.0);
        assert_eq!(side, ClampSide::Right);
    }

    #[test]
    fn test_clamp_inside_viewport_untouched() {
        assert_eq!(clamp_horizontal(10.0, 100.0, 1000.0), (10.0, ClampSide::None));
    }

    #[test]
    fn test_vertical_shift_below_anchor_flips_pointer() {
        let mut below = input(AnchorRect::new(400.0, 300.0, 100.0, 30.0), Some(120.0), Some(40.0));
        // Move the body from above the anchor to just under it
        below.shift.vertical = 40.0 + 2.0 * POINTER_HEIGHT + 30.0;
        let placement = compute_placement(&below, 1.0, Easing::Linear);
        assert_eq!(placement.wrapper_style.top, 338.0);
        assert_eq!(placement.pointer_style.direction, PointerDirection::Up);
        assert_eq!(placement.pointer_wrapper_style.top, -POINTER_HEIGHT);
    }

    #[test]
    fn test_overflowing_sums_resolve_to_zero() {
        let mut extreme = input(
            AnchorRect::new(f32::MAX, -f32::MAX, f32::MAX, 10.0),
            Some(100.0),
            Some(f32::MAX),
        );
        extreme.shift.vertical = -f32::MAX;
        let placement = compute_placement(&extreme, 1.0, Easing::Linear);

        for value in placement.numeric_fields() {
            assert!(value.is_finite(), "non-finite field in {:?}", placement);
        }
        assert_eq!(placement.wrapper_style.top, 0.0);
    }

    #[test]
    fn test_max_width_capped_by_viewport() {
        let mut narrow = input(AnchorRect::new(10.0, 100.0, 20.0, 20.0), None, None);
        narrow.viewport = ViewportMetrics::new(180.0);
        let placement = compute_placement(&narrow, 0.0, Easing::Linear);
        assert_eq!(placement.content_style.max_width, 180.0);
        assert!(!placement.content_style.measured);
    }
}
