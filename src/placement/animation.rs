//! Mapping from the external animation progress to visual-only fields
//!
//! The progress value is owned by an outside animation driver; this module
//! only samples it. Nothing computed here feeds back into layout.

use serde::{Deserialize, Serialize};

use crate::models::constants::MIN_SCALE;

/// Easing curve applied to the raw progress
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum Easing {
    Linear,
    OutQuad,
    #[default]
    OutCubic,
    InOutCubic,
}

impl Easing {
    /// Apply the curve; input is clamped to [0, 1] and NaN maps to 0
    pub fn apply(self, t: f32) -> f32 {
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
        match self {
            Self::Linear => t,
            Self::OutQuad => 1.0 - (1.0 - t) * (1.0 - t),
            Self::OutCubic => 1.0 - (1.0 - t).powi(3),
            Self::InOutCubic => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - ((-2.0 * t + 2.0).powi(3) / 2.0)
                }
            }
        }
    }
}

/// Opacity and scale bound to the animation progress
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AnimationStyle {
    /// Opacity of the whole tooltip
    pub opacity: f32,

    /// Uniform scale of the tooltip body, MIN_SCALE..=1
    pub scale: f32,

    /// Opacity of the pointer; stays 0 through the first half of the
    /// animation so the caret appears after the body
    pub pointer_opacity: f32,
}

impl AnimationStyle {
    /// Derive the animation fields from a raw progress sample
    pub fn from_progress(progress: f32, easing: Easing) -> Self {
        let eased = easing.apply(progress);
        Self {
            opacity: eased,
            scale: MIN_SCALE + (1.0 - MIN_SCALE) * eased,
            pointer_opacity: ((eased - 0.5) * 2.0).clamp(0.0, 1.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_easing_endpoints() {
        for easing in [Easing::Linear, Easing::OutQuad, Easing::OutCubic, Easing::InOutCubic] {
            assert_eq!(easing.apply(0.0), 0.0);
            assert_eq!(easing.apply(1.0), 1.0);
        }
    }

    #[test]
    fn test_easing_is_monotonic() {
        for easing in [Easing::Linear, Easing::OutQuad, Easing::OutCubic, Easing::InOutCubic] {
            let mut previous = easing.apply(0.0);
            for step in 1..=20 {
                let value = easing.apply(step as f32 / 20.0);
                assert!(value >= previous, "{:?} decreased at step {}", easing, step);
                previous = value;
            }
        }
    }

    #[test]
    fn test_out_of_range_progress_is_clamped() {
        let hidden = AnimationStyle::from_progress(-2.0, Easing::Linear);
        assert_eq!(hidden.opacity, 0.0);
        assert_eq!(hidden.scale, MIN_SCALE);

        let shown = AnimationStyle::from_progress(3.0, Easing::Linear);
        assert_eq!(shown.opacity, 1.0);
        assert_eq!(shown.scale, 1.0);
        assert_eq!(shown.pointer_opacity, 1.0);

        let nan = AnimationStyle::from_progress(f32::NAN, Easing::OutCubic);
        assert_eq!(nan.opacity, 0.0);
    }

    #[test]
    fn test_pointer_fades_in_after_body() {
        let style = AnimationStyle::from_progress(0.25, Easing::Linear);
        assert_eq!(style.opacity, 0.25);
        assert_eq!(style.pointer_opacity, 0.0);

        let style = AnimationStyle::from_progress(0.75, Easing::Linear);
        assert_eq!(style.pointer_opacity, 0.5);
    }
}
