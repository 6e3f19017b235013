//! DOM portal
//!
//! Draws tooltip frames into an injected root element (typically a node
//! appended to `document.body`) so the tooltip escapes the anchor's
//! overflow and stacking contexts. The node structure is created lazily on
//! the first commit:
//!
//! ```text
//! div.tooltip-wrapper            absolute left/top, opacity, scale
//! ├── div.tooltip-content        max-width, text clamp or custom nodes
//! └── div.tooltip-pointer-wrapper   caret tip position, pointer fade
//!     └── div.tooltip-pointer       CSS border triangle
//! ```

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlElement, Node};

use crate::controller::{PortalRoot, TooltipBody, TooltipFrame};
use crate::error::TooltipError;
use crate::measure::MeasuredBox;
use crate::models::ContentNode;
use crate::placement::{PlacementDescriptor, PointerDirection};

struct PortalNodes {
    wrapper: HtmlElement,
    content: HtmlElement,
    pointer_wrapper: HtmlElement,
    pointer: HtmlElement,
}

/// Portal drawing into a caller-provided DOM element
pub struct DomPortal {
    root: Element,
    nodes: Option<PortalNodes>,
}

impl DomPortal {
    pub fn new(root: Element) -> Self {
        Self { root, nodes: None }
    }

    pub fn root(&self) -> &Element {
        &self.root
    }

    fn document(&self) -> Result<Document, TooltipError> {
        self.root
            .owner_document()
            .ok_or(TooltipError::MissingMountTarget)
    }

    fn ensure_nodes(&mut self) -> Result<&PortalNodes, TooltipError> {
        if self.nodes.is_none() {
            let document = self.document()?;
            let wrapper = create_div(&document, "tooltip-wrapper")?;
            let content = create_div(&document, "tooltip-content")?;
            let pointer_wrapper = create_div(&document, "tooltip-pointer-wrapper")?;
            let pointer = create_div(&document, "tooltip-pointer")?;

            pointer_wrapper.append_child(&pointer).map_err(dom_err)?;
            wrapper.append_child(&content).map_err(dom_err)?;
            wrapper.append_child(&pointer_wrapper).map_err(dom_err)?;
            self.root.append_child(&wrapper).map_err(dom_err)?;

            self.nodes = Some(PortalNodes {
                wrapper,
                content,
                pointer_wrapper,
                pointer,
            });
        }

        self.nodes.as_ref().ok_or(TooltipError::MissingMountTarget)
    }
}

impl PortalRoot for DomPortal {
    fn is_mounted(&self) -> bool {
        self.root.is_connected()
    }

    fn commit(&mut self, frame: &TooltipFrame) -> Result<(), TooltipError> {
        let document = self.document()?;
        let nodes = self.ensure_nodes()?;
        apply_placement(nodes, &frame.placement)?;
        apply_body(&document, &nodes.content, &frame.body)
    }

    fn measure(&self) -> Option<MeasuredBox> {
        let nodes = self.nodes.as_ref()?;
        if !nodes.content.is_connected() {
            return None;
        }
        // Layout sizes, unaffected by the animation's scale transform
        Some(MeasuredBox {
            content_width: nodes.content.offset_width() as f32,
            wrapper_height: nodes.wrapper.offset_height() as f32,
        })
    }

    fn clear(&mut self) {
        if let Some(nodes) = self.nodes.take() {
            nodes.wrapper.remove();
        }
    }
}

fn apply_placement(nodes: &PortalNodes, placement: &PlacementDescriptor) -> Result<(), TooltipError> {
    let wrapper = &placement.wrapper_style;
    let pointer_wrapper = &placement.pointer_wrapper_style;
    let pointer = &placement.pointer_style;
    let animation = &placement.animation_style;

    let origin_y = match pointer.direction {
        PointerDirection::Down => "bottom",
        PointerDirection::Up => "top",
    };

    // Natural width capped by the content's max-width, independent of `left`
    set_styles(
        &nodes.wrapper,
        &[
            ("position", "absolute".to_string()),
            ("width", "max-content".to_string()),
            ("left", px(wrapper.left)),
            ("top", px(wrapper.top)),
            ("opacity", animation.opacity.to_string()),
            ("transform", format!("scale({})", animation.scale)),
            ("transform-origin", format!("{} {}", px(pointer_wrapper.left), origin_y)),
        ],
    )?;

    set_styles(
        &nodes.content,
        &[("max-width", px(placement.content_style.max_width))],
    )?;

    set_styles(
        &nodes.pointer_wrapper,
        &[
            ("position", "absolute".to_string()),
            ("left", px(pointer_wrapper.left)),
            ("top", px(pointer_wrapper.top)),
            ("opacity", animation.pointer_opacity.to_string()),
        ],
    )?;

    let half = px(pointer.width / 2.0);
    let (solid_side, clear_side) = match pointer.direction {
        PointerDirection::Down => ("border-top", "border-bottom"),
        PointerDirection::Up => ("border-bottom", "border-top"),
    };
    set_styles(
        &nodes.pointer,
        &[
            ("width", "0".to_string()),
            ("height", "0".to_string()),
            ("margin-left", px(pointer.margin_left)),
            ("border-left", format!("{} solid transparent", half)),
            ("border-right", format!("{} solid transparent", half)),
            (solid_side, format!("{} solid currentColor", px(pointer.height))),
            (clear_side, "0".to_string()),
        ],
    )
}

fn apply_body(document: &Document, content: &HtmlElement, body: &TooltipBody) -> Result<(), TooltipError> {
    content.set_text_content(None);

    match body {
        TooltipBody::Text { text, number_of_lines } => {
            content.set_text_content(Some(text.as_str()));
            if *number_of_lines > 0 {
                set_styles(
                    content,
                    &[
                        ("display", "-webkit-box".to_string()),
                        ("-webkit-box-orient", "vertical".to_string()),
                        ("-webkit-line-clamp", number_of_lines.to_string()),
                        ("overflow", "hidden".to_string()),
                        ("text-overflow", "ellipsis".to_string()),
                    ],
                )
            } else {
                remove_styles(content, &["display", "-webkit-box-orient", "-webkit-line-clamp", "overflow", "text-overflow"])
            }
        }
        TooltipBody::Custom { node } => {
            remove_styles(content, &["display", "-webkit-box-orient", "-webkit-line-clamp", "overflow", "text-overflow"])?;
            let built = build_node(document, node)?;
            content.append_child(&built).map_err(dom_err)?;
            Ok(())
        }
        TooltipBody::Empty => Ok(()),
    }
}

fn build_node(document: &Document, node: &ContentNode) -> Result<Node, TooltipError> {
    match node {
        ContentNode::Text { text } => Ok(document.create_text_node(text).into()),
        ContentNode::Element { tag, class, children } => {
            let element = document.create_element(tag).map_err(dom_err)?;
            if let Some(class) = class {
                element.set_class_name(class);
            }
            for child in children {
                element
                    .append_child(&build_node(document, child)?)
                    .map_err(dom_err)?;
            }
            Ok(element.into())
        }
    }
}

fn create_div(document: &Document, class: &str) -> Result<HtmlElement, TooltipError> {
    let element = document.create_element("div").map_err(dom_err)?;
    element.set_class_name(class);
    element
        .dyn_into::<HtmlElement>()
        .map_err(|_| TooltipError::Dom(format!("created <div class=\"{}\"> is not an HtmlElement", class)))
}

fn set_styles(element: &HtmlElement, styles: &[(&str, String)]) -> Result<(), TooltipError> {
    let style = element.style();
    for (name, value) in styles {
        style.set_property(name, value).map_err(dom_err)?;
    }
    Ok(())
}

fn remove_styles(element: &HtmlElement, names: &[&str]) -> Result<(), TooltipError> {
    let style = element.style();
    for name in names {
        style.remove_property(name).map_err(dom_err)?;
    }
    Ok(())
}

fn px(value: f32) -> String {
    format!("{}px", value)
}

fn dom_err(err: JsValue) -> TooltipError {
    TooltipError::Dom(format!("{:?}", err))
}
