//! Content variant selection: literal text or custom render callback

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::diagnostics::{Diagnostic, Diagnostics};
use crate::models::{ContentNode, RenderContent, TooltipConfig};

/// Which kind of content an instance renders, fixed at configuration time
#[derive(Clone)]
pub enum ContentMode {
    Text(String),
    Custom(RenderContent),
    Empty,
}

impl ContentMode {
    /// Pick the content mode for a configuration
    ///
    /// Custom content wins over text. Supplying both records exactly one
    /// `content_conflict` diagnostic.
    pub fn from_config(config: &TooltipConfig, diagnostics: &mut Diagnostics) -> Self {
        match (&config.render_content, &config.text) {
            (Some(render), Some(_)) => {
                diagnostics.report(Diagnostic::content_conflict());
                ContentMode::Custom(render.clone())
            }
            (Some(render), None) => ContentMode::Custom(render.clone()),
            (None, Some(text)) => ContentMode::Text(text.clone()),
            (None, None) => ContentMode::Empty,
        }
    }

    /// Produce the body for one render pass
    pub fn body(&self, number_of_lines: u32) -> TooltipBody {
        match self {
            ContentMode::Text(text) => TooltipBody::Text {
                text: text.clone(),
                number_of_lines,
            },
            ContentMode::Custom(render) => TooltipBody::Custom { node: render() },
            ContentMode::Empty => TooltipBody::Empty,
        }
    }
}

impl fmt::Debug for ContentMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContentMode::Text(text) => f.debug_tuple("Text").field(text).finish(),
            ContentMode::Custom(_) => f.write_str("Custom(..)"),
            ContentMode::Empty => f.write_str("Empty"),
        }
    }
}

/// Content of one committed frame
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum TooltipBody {
    /// Text clamped to `number_of_lines`, ellipsized on overflow
    #[serde(rename_all = "camelCase")]
    Text { text: String, number_of_lines: u32 },

    Custom { node: ContentNode },

    Empty,
}
