//! Detached render target abstraction
//!
//! A portal is the injected mount target the tooltip draws into, outside
//! the anchor's ancestor tree so ancestor overflow, transforms, and
//! stacking contexts cannot clip it. The DOM implementation lives in
//! `renderers::dom_portal`; tests use in-memory portals.

use super::frame::TooltipFrame;
use crate::error::TooltipError;
use crate::measure::MeasuredBox;

pub trait PortalRoot {
    /// Whether the mount target currently exists and can be drawn into
    fn is_mounted(&self) -> bool;

    /// Draw a frame, replacing whatever the portal showed before
    fn commit(&mut self, frame: &TooltipFrame) -> Result<(), TooltipError>;

    /// Read back the rendered content width and wrapper height
    ///
    /// Returns `None` when the content node is not attached yet.
    fn measure(&self) -> Option<MeasuredBox>;

    /// Remove everything this portal drew
    fn clear(&mut self);
}
