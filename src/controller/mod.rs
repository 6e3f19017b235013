//! Tooltip instance controller
//!
//! Wires measurement and placement into a render cycle:
//!
//! 1. Pass 1 commits a frame computed with unknown sizes.
//! 2. In the same synchronous call (before the browser paints) the portal
//!    is measured; new dimensions trigger pass 2 with the real sizes.
//! 3. Further updates recompute only when the memo key changes.

pub mod content;
pub mod frame;
pub mod memo;
pub mod portal;
pub mod instance;

pub use content::{ContentMode, TooltipBody};
pub use frame::{RenderPass, TooltipFrame};
pub use memo::{PlacementKey, PlacementMemo};
pub use portal::PortalRoot;
pub use instance::{RenderOutcome, TooltipInputs, TooltipInstance};
