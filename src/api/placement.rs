//! Stateless placement computation for callers that render themselves

use wasm_bindgen::prelude::*;

use super::helpers::{deserialize, offset_from_js, serialize};
use crate::models::{AnchorRect, ContentSize, ViewportMetrics, WrapperSize};
use crate::placement::compute;

/// Compute a placement descriptor
///
/// # Parameters
/// - `anchor`: `{x, y, width, height}` relative to the viewport
/// - `viewport`: `{width}`
/// - `content_width` / `wrapper_height`: measured sizes, or `undefined`
/// - `shift_horizontal` / `shift_vertical`: number or zero-argument function
/// - `animation_progress`: 0 (hidden) to 1 (shown)
///
/// # Returns
/// The placement descriptor as a plain object
#[wasm_bindgen(js_name = computePlacement)]
pub fn compute_placement_js(
    anchor: JsValue,
    viewport: JsValue,
    content_width: Option<f32>,
    wrapper_height: Option<f32>,
    shift_horizontal: JsValue,
    shift_vertical: JsValue,
    animation_progress: f32,
) -> Result<JsValue, JsValue> {
    let anchor: AnchorRect = deserialize(anchor, "Failed to deserialize anchor rect")?;
    let viewport: ViewportMetrics = deserialize(viewport, "Failed to deserialize viewport")?;
    let descriptor = compute(
        anchor,
        viewport,
        content_width.map(ContentSize::new),
        wrapper_height.map(WrapperSize::new),
        offset_from_js(shift_horizontal)?,
        offset_from_js(shift_vertical)?,
        animation_progress,
    );

    serialize(&descriptor, "Failed to serialize placement")
}
