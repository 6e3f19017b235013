//! Layout constants shared by the placement calculator and renderers

/// Width of the pointer (caret) triangle in pixels
pub const POINTER_WIDTH: f32 = 16.0;

/// Height of the pointer triangle; also the vertical gap reserved between
/// the tooltip body and the anchor
pub const POINTER_HEIGHT: f32 = 8.0;

/// Scale of the tooltip body when the animation progress is 0
pub const MIN_SCALE: f32 = 0.9;

/// Default maximum width of the content box in pixels
pub const DEFAULT_MAX_CONTENT_WIDTH: f32 = 250.0;

/// Default number of text lines before ellipsizing
pub const DEFAULT_NUMBER_OF_LINES: u32 = 2;
