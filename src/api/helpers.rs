//! Shared helpers for WASM API operations
//!
//! Common patterns for serialization, deserialization, and turning
//! JavaScript callbacks into the offset and render-content closures the
//! controller understands.

use std::rc::Rc;

use js_sys::{Function, Object, Reflect};
use serde::de::DeserializeOwned;
use serde::Serialize;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use crate::error::TooltipError;
use crate::models::{ContentNode, Offset, RenderContent, TooltipConfig};

// ============================================================================
// Serialization/Deserialization Helpers
// ============================================================================

/// Deserialize a value from JavaScript with automatic error handling
pub fn deserialize<T: DeserializeOwned>(
    value: JsValue,
    error_context: &str,
) -> Result<T, JsValue> {
    serde_wasm_bindgen::from_value(value).map_err(|e| {
        let msg = format!("{}: {}", error_context, e);
        log::error!("{}", msg);
        JsValue::from_str(&msg)
    })
}

/// Serialize a value to JavaScript with automatic error handling
pub fn serialize<T: Serialize>(value: &T, error_context: &str) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value).map_err(|e| {
        let msg = format!("{}: {}", error_context, e);
        log::error!("{}", msg);
        JsValue::from_str(&msg)
    })
}

/// Convert a validation error to a JsValue
pub fn validation_error(msg: impl Into<String>) -> JsValue {
    let msg = msg.into();
    log::error!("{}", msg);
    JsValue::from_str(&msg)
}

// ============================================================================
// Config Parsing
// ============================================================================

/// Read a tooltip config object passed from JavaScript
///
/// `shiftHorizontal` / `shiftVertical` may be numbers or zero-argument
/// functions; `renderContent` is a zero-argument function returning a
/// string or a content node object. `undefined`/`null` yields defaults.
pub fn parse_config(value: JsValue) -> Result<TooltipConfig, JsValue> {
    if value.is_undefined() || value.is_null() {
        return Ok(TooltipConfig::default());
    }
    if !value.is_object() {
        return Err(validation_error(
            TooltipError::InvalidConfig("expected an object".to_string()).to_string(),
        ));
    }

    // Copy so function-valued fields can be dropped before serde sees them
    let plain = Object::assign(&Object::new(), value.unchecked_ref::<Object>());
    let shift_horizontal = take_function(&plain, "shiftHorizontal")?;
    let shift_vertical = take_function(&plain, "shiftVertical")?;
    let render_content = take_function(&plain, "renderContent")?;

    let mut config: TooltipConfig = deserialize(plain.into(), "Failed to deserialize tooltip config")?;

    if let Some(f) = shift_horizontal {
        config.shift_horizontal = offset_from_function(f);
    }
    if let Some(f) = shift_vertical {
        config.shift_vertical = offset_from_function(f);
    }
    if let Some(f) = render_content {
        config.render_content = Some(render_content_from_function(f));
    }

    Ok(config)
}

/// Read an offset given as a number, a function, or nothing (0)
pub fn offset_from_js(value: JsValue) -> Result<Offset, JsValue> {
    if value.is_undefined() || value.is_null() {
        return Ok(Offset::default());
    }
    match value.dyn_into::<Function>() {
        Ok(f) => Ok(offset_from_function(f)),
        Err(value) => value
            .as_f64()
            .map(|n| Offset::Fixed(n as f32))
            .ok_or_else(|| {
                validation_error(
                    TooltipError::InvalidConfig("shift offset must be a number or a function".to_string())
                        .to_string(),
                )
            }),
    }
}

fn take_function(object: &Object, key: &str) -> Result<Option<Function>, JsValue> {
    let key = JsValue::from_str(key);
    match Reflect::get(object, &key)?.dyn_into::<Function>() {
        Ok(f) => {
            Reflect::delete_property(object, &key)?;
            Ok(Some(f))
        }
        Err(_) => Ok(None),
    }
}

fn offset_from_function(f: Function) -> Offset {
    Offset::computed(move || match f.call0(&JsValue::NULL) {
        Ok(value) => value.as_f64().map(|n| n as f32).unwrap_or_else(|| {
            log::warn!("Shift offset callback returned a non-number; using 0");
            0.0
        }),
        Err(e) => {
            log::warn!("Shift offset callback threw: {:?}", e);
            0.0
        }
    })
}

fn render_content_from_function(f: Function) -> RenderContent {
    Rc::new(move || {
        let value = match f.call0(&JsValue::NULL) {
            Ok(value) => value,
            Err(e) => {
                log::warn!("renderContent threw: {:?}", e);
                return ContentNode::Text { text: String::new() };
            }
        };
        if let Some(text) = value.as_string() {
            return ContentNode::Text { text };
        }
        serde_wasm_bindgen::from_value(value).unwrap_or_else(|e| {
            log::warn!("renderContent returned an invalid content node: {}", e);
            ContentNode::Text { text: String::new() }
        })
    })
}
