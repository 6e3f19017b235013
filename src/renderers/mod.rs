//! Renderers module
//!
//! Portal implementations that draw committed tooltip frames.

pub mod dom_portal;

pub use dom_portal::DomPortal;
