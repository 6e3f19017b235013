//! Error types for tooltip rendering
//!
//! None of these are fatal to the host page: the controller catches them,
//! logs, and renders nothing for the frame.

use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum TooltipError {
    /// The portal root is gone or detached from the document
    #[error("Tooltip mount target is missing or detached")]
    MissingMountTarget,

    /// A DOM call failed while committing or measuring
    #[error("DOM operation failed: {0}")]
    Dom(String),

    /// Configuration could not be read
    #[error("Invalid tooltip configuration: {0}")]
    InvalidConfig(String),
}
