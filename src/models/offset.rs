//! Shift offsets applied on top of the computed tooltip position
//!
//! An offset is either a constant or a closure evaluated each time the
//! placement is computed, which lets callers react to state the placement
//! calculator knows nothing about (text direction, sticky headers, etc.).

use std::fmt;
use std::rc::Rc;

use serde::Deserialize;

use super::geometry::finite_or_zero;

/// A signed pixel adjustment
#[derive(Clone, Deserialize)]
#[serde(from = "f32")]
pub enum Offset {
    /// Constant offset
    Fixed(f32),

    /// Offset evaluated on every placement computation
    Computed(Rc<dyn Fn() -> f32>),
}

impl Offset {
    /// Wrap a closure as a computed offset
    pub fn computed(f: impl Fn() -> f32 + 'static) -> Self {
        Offset::Computed(Rc::new(f))
    }

    /// Evaluate the offset; non-finite results resolve to 0
    pub fn resolve(&self) -> f32 {
        let value = match self {
            Offset::Fixed(value) => *value,
            Offset::Computed(f) => f(),
        };
        finite_or_zero(value)
    }
}

impl Default for Offset {
    fn default() -> Self {
        Offset::Fixed(0.0)
    }
}

impl From<f32> for Offset {
    fn from(value: f32) -> Self {
        Offset::Fixed(value)
    }
}

impl fmt::Debug for Offset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Offset::Fixed(value) => f.debug_tuple("Fixed").field(value).finish(),
            Offset::Computed(_) => f.write_str("Computed(..)"),
        }
    }
}

/// Horizontal and vertical shift applied to the tooltip body
#[derive(Clone, Debug, Default)]
pub struct ShiftOffsets {
    pub horizontal: Offset,
    pub vertical: Offset,
}

/// Shift offsets after evaluation
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ResolvedShift {
    pub horizontal: f32,
    pub vertical: f32,
}

impl ShiftOffsets {
    pub fn new(horizontal: impl Into<Offset>, vertical: impl Into<Offset>) -> Self {
        Self {
            horizontal: horizontal.into(),
            vertical: vertical.into(),
        }
    }

    /// Evaluate both offsets exactly once
    pub fn resolve(&self) -> ResolvedShift {
        ResolvedShift {
            horizontal: self.horizontal.resolve(),
            vertical: self.vertical.resolve(),
        }
    }
}
