//! `TooltipHandle`: one tooltip instance owned by JavaScript

use wasm_bindgen::prelude::*;
use web_sys::Element;

use super::helpers::{deserialize, parse_config, serialize};
use crate::controller::{TooltipInputs, TooltipInstance};
use crate::models::{AnchorRect, ViewportMetrics};
use crate::renderers::DomPortal;

/// A mounted tooltip drawing into a detached DOM root
///
/// ```js
/// const portal = document.getElementById('tooltip-portal');
/// const tooltip = new TooltipHandle(portal, { text: 'Copy link', numberOfLines: 1 });
/// const { x, y, width, height } = anchor.getBoundingClientRect();
/// tooltip.update({ x, y, width, height }, { width: innerWidth }, progress);
/// tooltip.unmount();
/// ```
#[wasm_bindgen]
pub struct TooltipHandle {
    instance: TooltipInstance<DomPortal>,
}

#[wasm_bindgen]
impl TooltipHandle {
    /// Create a tooltip drawing into `portal_root`
    ///
    /// A missing root is not an error; the tooltip then renders nothing.
    #[wasm_bindgen(constructor)]
    pub fn new(portal_root: Option<Element>, config: JsValue) -> Result<TooltipHandle, JsValue> {
        let config = parse_config(config)?;
        if portal_root.is_none() {
            log::warn!("TooltipHandle created without a mount target; nothing will render");
        }
        Ok(TooltipHandle {
            instance: TooltipInstance::new(config, portal_root.map(DomPortal::new)),
        })
    }

    /// Render with the current anchor rect, viewport, and animation progress
    ///
    /// # Returns
    /// `"skipped"`, `"unchanged"`, `"estimated"`, or `"measured"`
    pub fn update(
        &mut self,
        anchor: JsValue,
        viewport: JsValue,
        animation_progress: f32,
    ) -> Result<String, JsValue> {
        let anchor: AnchorRect = deserialize(anchor, "Failed to deserialize anchor rect")?;
        let viewport: ViewportMetrics = deserialize(viewport, "Failed to deserialize viewport")?;
        let outcome = self
            .instance
            .update(TooltipInputs::new(anchor, viewport, animation_progress));
        Ok(outcome.as_str().to_string())
    }

    /// Re-measure after the content changed size
    pub fn remount(&mut self) -> String {
        self.instance.remount().as_str().to_string()
    }

    /// Remove the tooltip from its portal
    pub fn unmount(&mut self) {
        self.instance.unmount();
    }

    /// The live placement descriptor, or `null` before the first commit
    pub fn placement(&self) -> Result<JsValue, JsValue> {
        match self.instance.descriptor() {
            Some(descriptor) => serialize(descriptor, "Failed to serialize placement"),
            None => Ok(JsValue::NULL),
        }
    }

    /// Configuration diagnostics recorded for this tooltip
    pub fn diagnostics(&self) -> Result<JsValue, JsValue> {
        serialize(self.instance.diagnostics(), "Failed to serialize diagnostics")
    }

    #[wasm_bindgen(js_name = recomputeCount)]
    pub fn recompute_count(&self) -> f64 {
        self.instance.recompute_count() as f64
    }
}
