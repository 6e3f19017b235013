//! Measurement tracker
//!
//! Holds the content width and wrapper height observed after the first
//! layout of a mounted tooltip. The state goes from `Unknown` to `Known`
//! at most once per mount; later observations are ignored until
//! [`MeasurementTracker::reset`] starts a new mount. Content that changes
//! size after it has been measured is not picked up automatically.

use crate::models::{ContentSize, WrapperSize};

/// Raw bounding-box sizes read back from the renderer
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MeasuredBox {
    pub content_width: f32,
    pub wrapper_height: f32,
}

/// Latest published dimensions
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum Measurement {
    #[default]
    Unknown,
    Known {
        content: ContentSize,
        wrapper: WrapperSize,
    },
}

/// Per-instance measurement state
#[derive(Clone, Debug, Default)]
pub struct MeasurementTracker {
    state: Measurement,
    /// Number of mounts seen, bumped by `reset`
    generation: u32,
}

impl MeasurementTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn measurement(&self) -> Measurement {
        self.state
    }

    pub fn is_known(&self) -> bool {
        matches!(self.state, Measurement::Known { .. })
    }

    pub fn content(&self) -> Option<ContentSize> {
        match self.state {
            Measurement::Known { content, .. } => Some(content),
            Measurement::Unknown => None,
        }
    }

    pub fn wrapper(&self) -> Option<WrapperSize> {
        match self.state {
            Measurement::Known { wrapper, .. } => Some(wrapper),
            Measurement::Unknown => None,
        }
    }

    pub fn generation(&self) -> u32 {
        self.generation
    }

    /// Record an observation from the renderer
    ///
    /// `None` means the content node was not attached yet; the state stays
    /// `Unknown`. Returns true only when new dimensions were published,
    /// which is the caller's cue to re-render exactly once.
    pub fn observe(&mut self, observed: Option<MeasuredBox>) -> bool {
        if self.is_known() {
            return false;
        }

        match observed {
            Some(measured) => {
                self.state = Measurement::Known {
                    content: ContentSize::new(measured.content_width).sanitized(),
                    wrapper: WrapperSize::new(measured.wrapper_height).sanitized(),
                };
                log::debug!(
                    "tooltip measured (mount {}): content width {}, wrapper height {}",
                    self.generation,
                    measured.content_width,
                    measured.wrapper_height
                );
                true
            }
            None => {
                log::debug!("tooltip content not attached yet, measurement unknown");
                false
            }
        }
    }

    /// Forget the measurement so the next mount measures again
    pub fn reset(&mut self) {
        self.state = Measurement::Unknown;
        self.generation += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn measured(width: f32, height: f32) -> Option<MeasuredBox> {
        Some(MeasuredBox {
            content_width: width,
            wrapper_height: height,
        })
    }

    #[test]
    fn test_starts_unknown() {
        let tracker = MeasurementTracker::new();
        assert!(!tracker.is_known());
        assert_eq!(tracker.content(), None);
        assert_eq!(tracker.wrapper(), None);
    }

    #[test]
    fn test_publishes_once() {
        let mut tracker = MeasurementTracker::new();
        assert!(tracker.observe(measured(120.0, 36.0)));
        assert!(!tracker.observe(measured(300.0, 80.0)));
        assert_eq!(tracker.content(), Some(ContentSize::new(120.0)));
        assert_eq!(tracker.wrapper(), Some(WrapperSize::new(36.0)));
    }

    #[test]
    fn test_detached_content_stays_unknown() {
        let mut tracker = MeasurementTracker::new();
        assert!(!tracker.observe(None));
        assert_eq!(tracker.measurement(), Measurement::Unknown);
        // A later attached observation still publishes
        assert!(tracker.observe(measured(50.0, 20.0)));
    }

    #[test]
    fn test_known_never_returns_to_unknown() {
        let mut tracker = MeasurementTracker::new();
        tracker.observe(measured(50.0, 20.0));
        tracker.observe(None);
        assert!(tracker.is_known());
    }

    #[test]
    fn test_reset_starts_new_mount() {
        let mut tracker = MeasurementTracker::new();
        tracker.observe(measured(50.0, 20.0));
        tracker.reset();
        assert!(!tracker.is_known());
        assert_eq!(tracker.generation(), 1);
        assert!(tracker.observe(measured(90.0, 20.0)));
        assert_eq!(tracker.content(), Some(ContentSize::new(90.0)));
    }

    #[test]
    fn test_invalid_measurement_is_clamped() {
        let mut tracker = MeasurementTracker::new();
        tracker.observe(measured(f32::NAN, -4.0));
        assert_eq!(tracker.content(), Some(ContentSize::new(0.0)));
        assert_eq!(tracker.wrapper(), Some(WrapperSize::new(0.0)));
    }
}
