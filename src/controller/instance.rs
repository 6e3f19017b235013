//! Lifecycle of a single tooltip
//!
//! A `TooltipInstance` is created when the trigger mounts a tooltip and
//! dropped when it unmounts. Every call to [`TooltipInstance::update`] is
//! one synchronous render: commit, measure if still unknown, and commit
//! again with real sizes before control returns to the browser, so the
//! estimated frame is never painted.

use crate::diagnostics::Diagnostics;
use crate::error::TooltipError;
use crate::measure::{Measurement, MeasurementTracker};
use crate::models::{AnchorRect, ShiftOffsets, TooltipConfig, ViewportMetrics};
use crate::placement::{compute_placement, PlacementDescriptor, PlacementInput};

use super::content::ContentMode;
use super::frame::{RenderPass, TooltipFrame};
use super::memo::{PlacementKey, PlacementMemo};
use super::portal::PortalRoot;

/// Inputs supplied by the trigger and animation driver on every render
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TooltipInputs {
    pub anchor: AnchorRect,
    pub viewport: ViewportMetrics,
    /// Sampled animation progress, 0 = hidden, 1 = shown
    pub animation_progress: f32,
}

impl TooltipInputs {
    pub fn new(anchor: AnchorRect, viewport: ViewportMetrics, animation_progress: f32) -> Self {
        Self {
            anchor,
            viewport,
            animation_progress,
        }
    }
}

/// What a render call did
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RenderOutcome {
    /// No usable mount target (or the commit failed); nothing is shown
    Skipped,
    /// Inputs matched the live placement; nothing was recomputed
    Unchanged,
    /// A frame was committed; the pass is the last one committed
    Committed(RenderPass),
}

impl RenderOutcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            RenderOutcome::Skipped => "skipped",
            RenderOutcome::Unchanged => "unchanged",
            RenderOutcome::Committed(RenderPass::Estimated) => "estimated",
            RenderOutcome::Committed(RenderPass::Measured) => "measured",
        }
    }
}

pub struct TooltipInstance<P: PortalRoot> {
    config: TooltipConfig,
    content: ContentMode,
    portal: Option<P>,
    tracker: MeasurementTracker,
    memo: PlacementMemo,
    diagnostics: Diagnostics,
    last_inputs: Option<TooltipInputs>,
    recompute_count: u64,
    commit_count: u64,
}

impl<P: PortalRoot> TooltipInstance<P> {
    /// Create an instance drawing into `portal`
    ///
    /// A `None` portal is allowed; every render is then skipped.
    pub fn new(config: TooltipConfig, portal: Option<P>) -> Self {
        let mut diagnostics = Diagnostics::new();
        let content = ContentMode::from_config(&config, &mut diagnostics);
        Self {
            config,
            content,
            portal,
            tracker: MeasurementTracker::new(),
            memo: PlacementMemo::new(),
            diagnostics,
            last_inputs: None,
            recompute_count: 0,
            commit_count: 0,
        }
    }

    /// Render with new inputs
    pub fn update(&mut self, inputs: TooltipInputs) -> RenderOutcome {
        self.last_inputs = Some(inputs);
        match self.render(inputs) {
            Ok(outcome) => outcome,
            Err(err) => {
                log::debug!("tooltip render skipped: {}", err);
                self.memo.invalidate();
                RenderOutcome::Skipped
            }
        }
    }

    /// Replace the shift offsets and re-render with the last inputs
    pub fn set_shift(&mut self, shift: ShiftOffsets) -> RenderOutcome {
        self.config.shift_horizontal = shift.horizontal;
        self.config.shift_vertical = shift.vertical;
        self.rerender()
    }

    /// Start a new mount: forget the measurement and render again
    ///
    /// This is how callers pick up content that changed size after it was
    /// first measured.
    pub fn remount(&mut self) -> RenderOutcome {
        self.tracker.reset();
        self.memo.invalidate();
        if let Some(portal) = self.portal.as_mut() {
            portal.clear();
        }
        self.rerender()
    }

    /// Release the mount target; later updates render nothing
    pub fn unmount(&mut self) {
        if let Some(mut portal) = self.portal.take() {
            portal.clear();
        }
        self.memo.invalidate();
        self.tracker.reset();
        self.last_inputs = None;
    }

    /// The live placement, if one has been committed
    pub fn descriptor(&self) -> Option<&PlacementDescriptor> {
        self.memo.descriptor()
    }

    pub fn measurement(&self) -> Measurement {
        self.tracker.measurement()
    }

    /// Number of geometry computations performed so far
    pub fn recompute_count(&self) -> u64 {
        self.recompute_count
    }

    /// Number of frames committed to the portal so far
    pub fn commit_count(&self) -> u64 {
        self.commit_count
    }

    pub fn diagnostics(&self) -> &Diagnostics {
        &self.diagnostics
    }

    pub fn config(&self) -> &TooltipConfig {
        &self.config
    }

    pub fn portal(&self) -> Option<&P> {
        self.portal.as_ref()
    }

    fn rerender(&mut self) -> RenderOutcome {
        self.memo.invalidate();
        match self.last_inputs {
            Some(inputs) => self.update(inputs),
            None => RenderOutcome::Skipped,
        }
    }

    fn render(&mut self, inputs: TooltipInputs) -> Result<RenderOutcome, TooltipError> {
        self.mounted_portal()?;

        let first = self.commit_pass(&inputs)?;
        // Post-layout, pre-paint: the frame above is laid out but not shown
        let second = self.after_layout(&inputs)?;

        Ok(match second.or(first) {
            Some(pass) => RenderOutcome::Committed(pass),
            None => RenderOutcome::Unchanged,
        })
    }

    /// Compute and commit a frame unless the memo already holds it
    fn commit_pass(&mut self, inputs: &TooltipInputs) -> Result<Option<RenderPass>, TooltipError> {
        let input = self.placement_input(inputs);
        let key = PlacementKey::new(&input, inputs.animation_progress, self.config.number_of_lines);
        if self.memo.is_current(&key) {
            return Ok(None);
        }

        let placement = compute_placement(&input, inputs.animation_progress, self.config.easing);
        self.recompute_count += 1;

        let pass = if self.tracker.is_known() {
            RenderPass::Measured
        } else {
            RenderPass::Estimated
        };
        let frame = TooltipFrame {
            placement,
            body: self.content.body(self.config.number_of_lines),
            pass,
        };

        self.mounted_portal()?.commit(&frame)?;
        self.memo.store(key, placement);
        self.commit_count += 1;
        log::debug!(
            "tooltip committed {:?} frame at ({}, {})",
            pass,
            placement.wrapper_style.left,
            placement.wrapper_style.top
        );

        Ok(Some(pass))
    }

    /// Measure once after the first layout and re-render with real sizes
    fn after_layout(&mut self, inputs: &TooltipInputs) -> Result<Option<RenderPass>, TooltipError> {
        if self.tracker.is_known() {
            return Ok(None);
        }

        let observed = self.mounted_portal()?.measure();
        if self.tracker.observe(observed) {
            self.commit_pass(inputs)
        } else {
            Ok(None)
        }
    }

    fn placement_input(&self, inputs: &TooltipInputs) -> PlacementInput {
        PlacementInput {
            anchor: inputs.anchor,
            viewport: inputs.viewport,
            content: self.tracker.content(),
            wrapper: self.tracker.wrapper(),
            shift: self.config.shift().resolve(),
            max_content_width: self.config.max_content_width,
        }
    }

    fn mounted_portal(&mut self) -> Result<&mut P, TooltipError> {
        self.portal
            .as_mut()
            .filter(|portal| portal.is_mounted())
            .ok_or(TooltipError::MissingMountTarget)
    }
}

impl<P: PortalRoot> Drop for TooltipInstance<P> {
    fn drop(&mut self) {
        if let Some(portal) = self.portal.as_mut() {
            portal.clear();
        }
    }
}
