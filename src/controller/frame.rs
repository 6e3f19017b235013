//! The unit committed to a portal on each render pass

use serde::{Deserialize, Serialize};

use super::content::TooltipBody;
use crate::placement::PlacementDescriptor;

/// Which pass of the measure-then-layout cycle produced a frame
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum RenderPass {
    /// Sizes unknown, best-effort placement
    Estimated,
    /// Placement uses measured sizes
    Measured,
}

/// Everything a portal needs to draw the tooltip
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TooltipFrame {
    pub placement: PlacementDescriptor,
    pub body: TooltipBody,
    pub pass: RenderPass,
}
