//! Tooltip Placement WASM Module
//!
//! Positions a floating tooltip relative to an anchor element, keeping it
//! inside the viewport, pointing at the anchor, and animated by an
//! externally driven progress value. Rendering is a two-pass
//! measure-then-layout cycle that completes before the browser paints.

pub mod models;
pub mod placement;
pub mod measure;
pub mod controller;
pub mod diagnostics;
pub mod error;
pub mod renderers;
pub mod api;

// Re-export commonly used types
pub use controller::{PortalRoot, RenderOutcome, RenderPass, TooltipFrame, TooltipInputs, TooltipInstance};
pub use error::TooltipError;
pub use models::*;
pub use placement::{compute, compute_placement, PlacementDescriptor, PlacementInput};

use wasm_bindgen::prelude::*;

// This is like the `main` function, but for WASM modules.
#[wasm_bindgen(start)]
pub fn main() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    #[cfg(feature = "console_log")]
    if let Err(e) = console_log::init_with_level(log::Level::Debug) {
        web_sys::console::warn_1(&format!("Logger already initialized: {}", e).into());
    }

    log::info!("Tooltip WASM module initialized");
}
