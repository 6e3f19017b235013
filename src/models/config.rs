//! Caller configuration for a tooltip instance

use std::fmt;
use std::rc::Rc;

use serde::{Deserialize, Serialize};

use super::constants::{DEFAULT_MAX_CONTENT_WIDTH, DEFAULT_NUMBER_OF_LINES};
use super::offset::{Offset, ShiftOffsets};
use crate::placement::animation::Easing;

/// Caller-supplied content tree, rendered in place of literal text
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum ContentNode {
    /// Plain text node
    Text { text: String },

    /// Element with optional class and children
    Element {
        tag: String,
        #[serde(default)]
        class: Option<String>,
        #[serde(default)]
        children: Vec<ContentNode>,
    },
}

/// Callback producing custom tooltip content on every render pass
pub type RenderContent = Rc<dyn Fn() -> ContentNode>;

/// Configuration for one tooltip instance
///
/// Deserializes from the camelCase object JavaScript passes in. Shift
/// offsets given as numbers become [`Offset::Fixed`]; computed offsets and
/// the render callback are attached with the builder methods.
#[derive(Clone, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TooltipConfig {
    /// Upper bound for the content box width
    pub max_content_width: f32,

    /// Line count after which literal text is ellipsized
    pub number_of_lines: u32,

    /// Literal text content
    pub text: Option<String>,

    pub shift_horizontal: Offset,

    pub shift_vertical: Offset,

    /// Curve applied to the animation progress
    pub easing: Easing,

    /// Custom content; takes precedence over `text`
    #[serde(skip)]
    pub render_content: Option<RenderContent>,
}

impl TooltipConfig {
    /// Configuration rendering literal text
    pub fn with_text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            ..Self::default()
        }
    }

    /// Configuration rendering custom content
    pub fn with_render_content(f: impl Fn() -> ContentNode + 'static) -> Self {
        Self::default().render_content(f)
    }

    pub fn render_content(mut self, f: impl Fn() -> ContentNode + 'static) -> Self {
        self.render_content = Some(Rc::new(f));
        self
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn shift_horizontal(mut self, offset: impl Into<Offset>) -> Self {
        self.shift_horizontal = offset.into();
        self
    }

    pub fn shift_vertical(mut self, offset: impl Into<Offset>) -> Self {
        self.shift_vertical = offset.into();
        self
    }

    pub fn max_content_width(mut self, width: f32) -> Self {
        self.max_content_width = width;
        self
    }

    pub fn number_of_lines(mut self, lines: u32) -> Self {
        self.number_of_lines = lines;
        self
    }

    pub fn easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    /// Both shift offsets as one record
    pub fn shift(&self) -> ShiftOffsets {
        ShiftOffsets {
            horizontal: self.shift_horizontal.clone(),
            vertical: self.shift_vertical.clone(),
        }
    }
}

impl Default for TooltipConfig {
    fn default() -> Self {
        Self {
            max_content_width: DEFAULT_MAX_CONTENT_WIDTH,
            number_of_lines: DEFAULT_NUMBER_OF_LINES,
            text: None,
            shift_horizontal: Offset::default(),
            shift_vertical: Offset::default(),
            easing: Easing::default(),
            render_content: None,
        }
    }
}

impl fmt::Debug for TooltipConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TooltipConfig")
            .field("max_content_width", &self.max_content_width)
            .field("number_of_lines", &self.number_of_lines)
            .field("text", &self.text)
            .field("shift_horizontal", &self.shift_horizontal)
            .field("shift_vertical", &self.shift_vertical)
            .field("easing", &self.easing)
            .field("render_content", &self.render_content.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults_from_empty_object() {
        let config: TooltipConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config.max_content_width, DEFAULT_MAX_CONTENT_WIDTH);
        assert_eq!(config.number_of_lines, DEFAULT_NUMBER_OF_LINES);
        assert!(config.text.is_none());
        assert!(config.render_content.is_none());
        assert_eq!(config.shift().resolve().horizontal, 0.0);
    }

    #[test]
    fn test_config_from_camel_case_json() {
        let json = r#"{
            "maxContentWidth": 180,
            "numberOfLines": 3,
            "text": "Copy link",
            "shiftHorizontal": -8,
            "shiftVertical": 4,
            "easing": "linear"
        }"#;
        let config: TooltipConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.max_content_width, 180.0);
        assert_eq!(config.number_of_lines, 3);
        assert_eq!(config.text.as_deref(), Some("Copy link"));
        let shift = config.shift().resolve();
        assert_eq!(shift.horizontal, -8.0);
        assert_eq!(shift.vertical, 4.0);
        assert_eq!(config.easing, Easing::Linear);
    }

    #[test]
    fn test_content_node_tagged_json() {
        let json = r#"{"type":"element","tag":"b","children":[{"type":"text","text":"Bold"}]}"#;
        let node: ContentNode = serde_json::from_str(json).unwrap();
        assert_eq!(
            node,
            ContentNode::Element {
                tag: "b".to_string(),
                class: None,
                children: vec![ContentNode::Text { text: "Bold".to_string() }],
            }
        );
    }
}
