//! Memoization of the placement on its full input tuple
//!
//! Tooltips re-render at hover/scroll frequency, so the controller must not
//! recompute geometry for inputs it has already laid out. Floats are keyed
//! by their bit patterns: two inputs are "the same" only when bit-identical,
//! which also makes NaN equal to itself.

use crate::placement::{PlacementDescriptor, PlacementInput};

/// Bit-exact key over every input that affects a committed frame
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PlacementKey {
    anchor: [u32; 4],
    viewport_width: u32,
    content_width: Option<u32>,
    wrapper_height: Option<u32>,
    shift_horizontal: u32,
    shift_vertical: u32,
    animation_progress: u32,
    max_content_width: u32,
    number_of_lines: u32,
}

impl PlacementKey {
    pub fn new(input: &PlacementInput, animation_progress: f32, number_of_lines: u32) -> Self {
        let anchor = input.anchor;
        Self {
            anchor: [
                anchor.x.to_bits(),
                anchor.y.to_bits(),
                anchor.width.to_bits(),
                anchor.height.to_bits(),
            ],
            viewport_width: input.viewport.width.to_bits(),
            content_width: input.content.map(|c| c.width.to_bits()),
            wrapper_height: input.wrapper.map(|w| w.height.to_bits()),
            shift_horizontal: input.shift.horizontal.to_bits(),
            shift_vertical: input.shift.vertical.to_bits(),
            animation_progress: animation_progress.to_bits(),
            max_content_width: input.max_content_width.to_bits(),
            number_of_lines,
        }
    }
}

/// The single live placement of an instance and the key it was built from
#[derive(Clone, Debug, Default)]
pub struct PlacementMemo {
    key: Option<PlacementKey>,
    descriptor: Option<PlacementDescriptor>,
}

impl PlacementMemo {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether `key` matches the live placement
    pub fn is_current(&self, key: &PlacementKey) -> bool {
        self.key.as_ref() == Some(key) && self.descriptor.is_some()
    }

    /// Replace the live placement
    pub fn store(&mut self, key: PlacementKey, descriptor: PlacementDescriptor) {
        self.key = Some(key);
        self.descriptor = Some(descriptor);
    }

    pub fn descriptor(&self) -> Option<&PlacementDescriptor> {
        self.descriptor.as_ref()
    }

    /// Drop the live placement so the next update recomputes
    pub fn invalidate(&mut self) {
        self.key = None;
        self.descriptor = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AnchorRect, ContentSize, ResolvedShift, ViewportMetrics};
    use crate::placement::{compute_placement, Easing};

    fn input() -> PlacementInput {
        PlacementInput {
            anchor: AnchorRect::new(10.0, 20.0, 30.0, 40.0),
            viewport: ViewportMetrics::new(800.0),
            content: None,
            wrapper: None,
            shift: ResolvedShift::default(),
            max_content_width: 250.0,
        }
    }

    #[test]
    fn test_identical_inputs_share_key() {
        assert_eq!(PlacementKey::new(&input(), 0.5, 2), PlacementKey::new(&input(), 0.5, 2));
    }

    #[test]
    fn test_each_input_changes_key() {
        let base = PlacementKey::new(&input(), 0.5, 2);

        let mut moved = input();
        moved.anchor.x += 1.0;
        assert_ne!(base, PlacementKey::new(&moved, 0.5, 2));

        let mut measured = input();
        measured.content = Some(ContentSize::new(0.0));
        assert_ne!(base, PlacementKey::new(&measured, 0.5, 2));

        assert_ne!(base, PlacementKey::new(&input(), 0.6, 2));
        assert_ne!(base, PlacementKey::new(&input(), 0.5, 3));
    }

    #[test]
    fn test_nan_inputs_are_stable_keys() {
        let mut nan = input();
        nan.anchor.x = f32::NAN;
        assert_eq!(PlacementKey::new(&nan, f32::NAN, 2), PlacementKey::new(&nan, f32::NAN, 2));
    }

    #[test]
    fn test_store_and_invalidate() {
        let mut memo = PlacementMemo::new();
        let key = PlacementKey::new(&input(), 1.0, 2);
        assert!(!memo.is_current(&key));

        memo.store(key, compute_placement(&input(), 1.0, Easing::Linear));
        assert!(memo.is_current(&key));
        assert!(memo.descriptor().is_some());

        memo.invalidate();
        assert!(!memo.is_current(&key));
        assert!(memo.descriptor().is_none());
    }
}
