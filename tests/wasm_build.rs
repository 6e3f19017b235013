//! WASM build test
//!
//! Exercises the DOM portal and the JavaScript-facing handle in a browser.

#![cfg(target_arch = "wasm32")]

use tooltip_wasm::api::TooltipHandle;
use tooltip_wasm::controller::{RenderPass, TooltipInputs, TooltipInstance};
use tooltip_wasm::measure::Measurement;
use tooltip_wasm::models::{AnchorRect, TooltipConfig, ViewportMetrics};
use tooltip_wasm::renderers::DomPortal;
use tooltip_wasm::RenderOutcome;
use wasm_bindgen::JsValue;
use wasm_bindgen_test::*;
use web_sys::Element;

wasm_bindgen_test_configure!(run_in_browser);

fn portal_root() -> Element {
    let document = web_sys::window().unwrap().document().unwrap();
    let root = document.create_element("div").unwrap();
    document.body().unwrap().append_child(&root).unwrap();
    root
}

fn inputs() -> TooltipInputs {
    TooltipInputs::new(
        AnchorRect::new(200.0, 300.0, 40.0, 20.0),
        ViewportMetrics::new(800.0),
        1.0,
    )
}

#[wasm_bindgen_test]
fn test_dom_portal_renders_text_tooltip() {
    let root = portal_root();
    let mut tooltip = TooltipInstance::new(
        TooltipConfig::with_text("Copy link"),
        Some(DomPortal::new(root.clone())),
    );

    let outcome = tooltip.update(inputs());

    assert!(matches!(outcome, RenderOutcome::Committed(_)));
    let content = root.query_selector(".tooltip-content").unwrap().unwrap();
    assert_eq!(content.text_content().as_deref(), Some("Copy link"));
    assert!(root.query_selector(".tooltip-pointer").unwrap().is_some());
}

fn measured_width_at(anchor_x: f32) -> Option<f32> {
    let root = portal_root();
    root.set_attribute("style", "position: relative; width: 800px").unwrap();
    let mut tooltip = TooltipInstance::new(
        TooltipConfig::with_text("Copy the link to this section"),
        Some(DomPortal::new(root)),
    );

    let outcome = tooltip.update(TooltipInputs::new(
        AnchorRect::new(anchor_x, 300.0, 20.0, 20.0),
        ViewportMetrics::new(800.0),
        1.0,
    ));
    assert_eq!(outcome, RenderOutcome::Committed(RenderPass::Measured));

    let portal = tooltip.portal().unwrap();
    assert_eq!(portal.root().child_element_count(), 1);
    match tooltip.measurement() {
        Measurement::Known { content, .. } => Some(content.width),
        Measurement::Unknown => None,
    }
}

#[wasm_bindgen_test]
fn test_measured_width_independent_of_anchor_position() {
    let centered = measured_width_at(200.0).unwrap();
    let at_right_edge = measured_width_at(790.0).unwrap();

    assert!(centered > 0.0);
    assert_eq!(at_right_edge, centered);
}

#[wasm_bindgen_test]
fn test_dom_portal_cleared_on_unmount() {
    let root = portal_root();
    let mut tooltip = TooltipInstance::new(
        TooltipConfig::with_text("Copy link"),
        Some(DomPortal::new(root.clone())),
    );
    tooltip.update(inputs());

    tooltip.unmount();

    assert_eq!(root.child_element_count(), 0);
}

#[wasm_bindgen_test]
fn test_detached_root_renders_nothing() {
    let document = web_sys::window().unwrap().document().unwrap();
    let detached = document.create_element("div").unwrap();
    let mut tooltip = TooltipInstance::new(
        TooltipConfig::with_text("Copy link"),
        Some(DomPortal::new(detached.clone())),
    );

    assert_eq!(tooltip.update(inputs()), RenderOutcome::Skipped);
    assert_eq!(detached.child_element_count(), 0);
}

#[wasm_bindgen_test]
fn test_handle_without_root_skips() {
    let mut handle = TooltipHandle::new(None, JsValue::UNDEFINED).unwrap();
    let anchor = serde_wasm_bindgen::to_value(&AnchorRect::new(10.0, 10.0, 10.0, 10.0)).unwrap();
    let viewport = serde_wasm_bindgen::to_value(&ViewportMetrics::new(800.0)).unwrap();

    let outcome = handle.update(anchor, viewport, 1.0).unwrap();

    assert_eq!(outcome, "skipped");
    assert_eq!(handle.recompute_count(), 0.0);
}
