// SPDX-License-Identifier: MPL-2.0
//! Indicator lifecycle: present, auto-hide, drag and dismiss.
//!
//! The indicator is driven entirely by the host. Every operation that depends
//! on time takes the current [`Instant`], and [`Indicator::tick`] advances
//! animations and fires scheduled tasks up to that instant. Removal happens in
//! exactly one place, so the completion callback runs at most once no matter
//! whether the timer, a drag or an explicit [`Indicator::dismiss`] ended it.

use super::content::IndicatorContent;
use super::gesture::{decide_release, drag_offset, DragEvent, DragPhase, ReleaseDecision};
use super::host::{AnchorHandle, HapticKind, Haptics, NoHaptics};
use super::icon::{IconPreset, IconShape};
use super::layout::{Arrangement, Arranger};
use super::motion::{Curve, Motion, MotionPurpose};
use super::position::PresentPosition;
use super::schedule::{ScheduledTask, Scheduler, TaskAction};
use super::size::resolve_size;
use super::text::{EstimatedTextMetrics, TextMeasure};
use crate::config::{IndicatorConfig, ICON_ANIMATE_FRACTION, PRESENT_DISMISS_DURATION_SECS};
use crate::domain::ui::newtypes::DisplayDuration;
use crate::i18n::TextDirection;
use crate::ui::state::DragState;
use iced::{Point, Rectangle, Size, Vector};
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};

/// Unique identifier for an indicator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct IndicatorId(u64);

impl IndicatorId {
    /// Creates a new unique indicator ID.
    #[must_use]
    pub fn new() -> Self {
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl Default for IndicatorId {
    fn default() -> Self {
        Self::new()
    }
}

/// Where the indicator is in its life.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LifecyclePhase {
    #[default]
    Idle,
    Presenting,
    Visible,
    Dismissing,
    Removed,
}

/// Arguments of [`Indicator::present`].
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PresentOptions {
    pub duration: DisplayDuration,
    pub haptic: HapticKind,
}

impl PresentOptions {
    #[must_use]
    pub fn new(duration: DisplayDuration, haptic: HapticKind) -> Self {
        Self { duration, haptic }
    }
}

impl From<&IndicatorConfig> for PresentOptions {
    fn from(config: &IndicatorConfig) -> Self {
        Self {
            duration: config.display_duration(),
            haptic: config.haptic(),
        }
    }
}

type Completion = Box<dyn FnOnce()>;

fn animation_duration() -> Duration {
    Duration::from_secs_f32(PRESENT_DISMISS_DURATION_SECS)
}

/// A pill-shaped notification that slides in from the top of its anchor.
pub struct Indicator {
    id: IndicatorId,
    content: IndicatorContent,
    measure: Box<dyn TextMeasure>,
    direction: TextDirection,
    anchor: AnchorHandle,
    haptics: Box<dyn Haptics>,
    dismiss_by_drag: bool,
    on_complete: Option<Completion>,
    display_duration: DisplayDuration,

    phase: LifecyclePhase,
    position: PresentPosition,
    motion: Option<Motion>,
    scheduler: Scheduler,
    drag: DragState,

    bounds: Size,
    arrangement: Option<Arrangement>,
}

impl Indicator {
    fn from_content(content: IndicatorContent) -> Self {
        Self {
            id: IndicatorId::new(),
            content,
            measure: Box::new(EstimatedTextMetrics::default()),
            direction: TextDirection::default(),
            anchor: AnchorHandle::detached(),
            haptics: Box::new(NoHaptics),
            dismiss_by_drag: true,
            on_complete: None,
            display_duration: DisplayDuration::default(),
            phase: LifecyclePhase::Idle,
            position: PresentPosition::Prepare,
            motion: None,
            scheduler: Scheduler::new(),
            drag: DragState::default(),
            bounds: Size::ZERO,
            arrangement: None,
        }
    }

    /// Indicator with a preset icon, a title and an optional subtitle.
    pub fn with_preset(
        title: impl Into<String>,
        subtitle: Option<String>,
        preset: IconPreset,
    ) -> Self {
        Self::from_content(IndicatorContent::with_preset(title, subtitle, preset))
    }

    /// Text-only indicator.
    pub fn message(title: impl Into<String>, subtitle: Option<String>) -> Self {
        Self::from_content(IndicatorContent::message(title, subtitle))
    }

    pub fn set_anchor(&mut self, anchor: AnchorHandle) {
        self.anchor = anchor;
    }

    pub fn set_haptics(&mut self, haptics: impl Haptics + 'static) {
        self.haptics = Box::new(haptics);
    }

    pub fn set_measure(&mut self, measure: impl TextMeasure + 'static) {
        self.measure = Box::new(measure);
        self.relayout_if_attached();
    }

    pub fn set_text_direction(&mut self, direction: TextDirection) {
        self.direction = direction;
        self.relayout_if_attached();
    }

    pub fn set_on_complete(&mut self, on_complete: impl FnOnce() + 'static) {
        self.on_complete = Some(Box::new(on_complete));
    }

    /// Enables or disables dismissing by drag.
    ///
    /// Disabling it while a drag is in progress cancels that drag.
    pub fn set_dismiss_by_drag(&mut self, enabled: bool, now: Instant) {
        if !enabled && self.drag.is_dragging {
            self.finish_drag(DragPhase::Cancelled, now);
        }
        self.dismiss_by_drag = enabled;
    }

    /// Applies the persisted preferences that are not per-present arguments.
    pub fn configure(&mut self, config: &IndicatorConfig, now: Instant) {
        self.set_dismiss_by_drag(config.dismiss_by_drag(), now);
    }

    #[must_use]
    pub fn id(&self) -> IndicatorId {
        self.id
    }

    #[must_use]
    pub fn content(&self) -> &IndicatorContent {
        &self.content
    }

    #[must_use]
    pub fn measure(&self) -> &dyn TextMeasure {
        self.measure.as_ref()
    }

    #[must_use]
    pub fn phase(&self) -> LifecyclePhase {
        self.phase
    }

    #[must_use]
    pub fn position(&self) -> PresentPosition {
        self.position
    }

    #[must_use]
    pub fn dismiss_by_drag(&self) -> bool {
        self.dismiss_by_drag
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.drag.is_dragging
    }

    #[must_use]
    pub fn text_direction(&self) -> TextDirection {
        self.direction
    }

    /// Size of the indicator after the last layout pass.
    #[must_use]
    pub fn bounds(&self) -> Size {
        self.bounds
    }

    /// Result of the last layout pass, if the indicator was ever laid out.
    #[must_use]
    pub fn arrangement(&self) -> Option<&Arrangement> {
        self.arrangement.as_ref()
    }

    /// Icon to draw at `now`.
    #[must_use]
    pub fn icon_shape(&self, now: Instant) -> Option<IconShape> {
        self.content.icon().map(|icon| icon.shape(now))
    }

    /// Whether the host should keep ticking.
    #[must_use]
    pub fn is_active(&self) -> bool {
        matches!(
            self.phase,
            LifecyclePhase::Presenting | LifecyclePhase::Visible | LifecyclePhase::Dismissing
        )
    }

    /// Slides the indicator in and arms the auto-hide timer.
    ///
    /// Ignored unless the indicator is idle and its anchor surface is alive.
    /// A provided `on_complete` replaces the one set earlier.
    pub fn present(
        &mut self,
        now: Instant,
        options: PresentOptions,
        on_complete: Option<Completion>,
    ) {
        if self.phase != LifecyclePhase::Idle {
            tracing::debug!(id = ?self.id, phase = ?self.phase, "present ignored");
            return;
        }
        let Some(surface) = self.anchor.upgrade() else {
            tracing::warn!(id = ?self.id, "present ignored: no anchor surface");
            return;
        };
        surface.borrow_mut().attach(self.id);

        if on_complete.is_some() {
            self.on_complete = on_complete;
        }
        self.display_duration = options.duration;
        self.relayout();
        self.position = PresentPosition::Prepare;
        self.phase = LifecyclePhase::Presenting;

        self.haptics.impact(options.haptic);
        self.start_motion(now, MotionPurpose::Present, PresentPosition::Visible, Curve::EaseOut);

        if self.content.icon().is_some() {
            let delay = animation_duration().mul_f32(ICON_ANIMATE_FRACTION);
            self.scheduler.schedule(now + delay, TaskAction::AnimateIcon);
        }

        tracing::debug!(
            id = ?self.id,
            grid = ?self.arrangement.map(|arrangement| arrangement.grid),
            width = self.bounds.width,
            duration = options.duration.secs(),
            "presenting indicator"
        );
    }

    /// Slides the indicator out; it is removed once the animation ends.
    ///
    /// Has no effect when a dismiss is already in flight or the indicator was
    /// never presented.
    pub fn dismiss(&mut self, now: Instant) {
        match self.phase {
            LifecyclePhase::Presenting | LifecyclePhase::Visible => {}
            LifecyclePhase::Dismissing => {
                tracing::trace!(id = ?self.id, "dismiss already in flight");
                return;
            }
            LifecyclePhase::Idle | LifecyclePhase::Removed => {
                tracing::debug!(id = ?self.id, phase = ?self.phase, "dismiss ignored");
                return;
            }
        }
        if self.drag.is_dragging {
            self.drag.finish();
        }
        self.phase = LifecyclePhase::Dismissing;
        self.start_motion(now, MotionPurpose::Dismiss, PresentPosition::Prepare, Curve::EaseIn);
        tracing::debug!(id = ?self.id, "dismissing indicator");
    }

    /// Applies a drag sample.
    pub fn handle_drag(&mut self, event: DragEvent, now: Instant) {
        if !self.dismiss_by_drag {
            return;
        }
        if !matches!(
            self.phase,
            LifecyclePhase::Presenting | LifecyclePhase::Visible
        ) {
            return;
        }

        match event.phase {
            DragPhase::Began | DragPhase::Changed => {
                if self.phase == LifecyclePhase::Presenting {
                    self.finish_present(now);
                }
                if !self.drag.is_dragging {
                    tracing::debug!(id = ?self.id, "drag began");
                }
                self.drag.update(event.translation);
                self.motion = None;
                self.position = PresentPosition::FromVisible(drag_offset(event.translation.y));
            }
            DragPhase::Ended => {
                if self.drag.is_dragging {
                    self.drag.translation = event.translation;
                    self.finish_drag(DragPhase::Ended, now);
                }
            }
            DragPhase::Cancelled => {
                if self.drag.is_dragging {
                    self.finish_drag(DragPhase::Cancelled, now);
                }
            }
        }
    }

    /// Advances animations and fires due tasks up to `now`, in order.
    pub fn tick(&mut self, now: Instant) {
        loop {
            let motion_due = self
                .motion
                .map(|motion| motion.ends_at())
                .filter(|ends_at| *ends_at <= now);
            let task_due = self.scheduler.next_due().filter(|due| *due <= now);

            match (motion_due, task_due) {
                (Some(ends_at), Some(due)) if due < ends_at => self.fire_next_task(due),
                (Some(ends_at), _) => self.complete_motion(ends_at),
                (None, Some(due)) => self.fire_next_task(due),
                (None, None) => break,
            }
        }
    }

    /// Recomputes size and arrangement, e.g. after the anchor was resized.
    pub fn relayout(&mut self) {
        let natural = resolve_size(&self.content, self.measure.as_ref());
        let width = self
            .anchor
            .width()
            .map_or(natural.width, |anchor_width| {
                natural.width.min(anchor_width.max(0.0))
            });
        self.bounds = Size::new(width, natural.height);
        let arranger = Arranger::new(
            &self.content,
            self.measure.as_ref(),
            self.direction,
            self.bounds,
        );
        self.arrangement = Some(arranger.arrange());
    }

    /// Vertical translation at `now`.
    #[must_use]
    pub fn translation_y(&self, now: Instant) -> f32 {
        let inset = self.anchor.top_safe_area_inset();
        match &self.motion {
            Some(motion) => motion.sample(now, inset),
            None => self.position.translation_y(inset),
        }
    }

    /// Transform applied to the indicator at `now`.
    #[must_use]
    pub fn transform(&self, now: Instant) -> Vector {
        Vector::new(0.0, self.translation_y(now))
    }

    /// Frame in anchor coordinates at `now`: centered horizontally,
    /// translated vertically.
    #[must_use]
    pub fn frame(&self, now: Instant) -> Option<Rectangle> {
        let anchor_width = self.anchor.width()?;
        let x = (anchor_width - self.bounds.width) / 2.0;
        Some(Rectangle::new(
            Point::new(x, self.translation_y(now)),
            self.bounds,
        ))
    }

    fn relayout_if_attached(&mut self) {
        if self.arrangement.is_some() {
            self.relayout();
        }
    }

    fn start_motion(
        &mut self,
        now: Instant,
        purpose: MotionPurpose,
        target: PresentPosition,
        curve: Curve,
    ) {
        let from_y = self.translation_y(now);
        self.motion = Some(Motion {
            purpose,
            from_y,
            target,
            started_at: now,
            duration: animation_duration(),
            curve,
        });
        self.position = target;
    }

    /// Marks the indicator visible and arms auto-hide from `at`.
    fn finish_present(&mut self, at: Instant) {
        self.motion = None;
        self.position = PresentPosition::Visible;
        self.phase = LifecyclePhase::Visible;
        self.scheduler
            .schedule(at + self.display_duration.as_duration(), TaskAction::AutoHide);
        tracing::debug!(id = ?self.id, "indicator visible");
    }

    fn complete_motion(&mut self, at: Instant) {
        let Some(motion) = self.motion.take() else {
            return;
        };
        match motion.purpose {
            MotionPurpose::Present => self.finish_present(at),
            MotionPurpose::Settle => self.position = PresentPosition::Visible,
            MotionPurpose::Dismiss => self.remove(),
        }
    }

    fn fire_next_task(&mut self, due: Instant) {
        if let Some(task) = self.scheduler.pop_due(due) {
            self.run_task(task);
        }
    }

    fn run_task(&mut self, task: ScheduledTask) {
        match task.action {
            TaskAction::AnimateIcon => {
                // Runs during dismissal too; only removal drops it.
                if self.phase != LifecyclePhase::Removed {
                    if let Some(icon) = self.content.icon_mut() {
                        icon.animate_if_supported(task.due);
                    }
                }
            }
            TaskAction::AutoHide => {
                if self.phase != LifecyclePhase::Visible {
                    tracing::trace!(id = ?self.id, phase = ?self.phase, "auto-hide no longer applies");
                } else if self.drag.defer_hide() {
                    tracing::debug!(id = ?self.id, "auto-hide deferred until drag ends");
                } else {
                    tracing::debug!(id = ?self.id, "auto-hide fired");
                    self.dismiss(task.due);
                }
            }
        }
    }

    fn finish_drag(&mut self, phase: DragPhase, now: Instant) {
        let release = self.drag.finish();
        let decision = decide_release(release, phase);
        tracing::debug!(
            id = ?self.id,
            translation_y = release.translation.y,
            hide_requested = release.hide_requested,
            ?decision,
            "drag ended"
        );
        match decision {
            ReleaseDecision::Dismiss => self.dismiss(now),
            ReleaseDecision::SnapBack => {
                self.start_motion(now, MotionPurpose::Settle, PresentPosition::Visible, Curve::EaseIn);
            }
        }
    }

    /// The single removal path.
    fn remove(&mut self) {
        self.phase = LifecyclePhase::Removed;
        self.position = PresentPosition::Prepare;
        if let Some(surface) = self.anchor.upgrade() {
            surface.borrow_mut().detach(self.id);
        }
        tracing::debug!(id = ?self.id, "indicator removed");
        if let Some(on_complete) = self.on_complete.take() {
            on_complete();
        }
    }
}

impl fmt::Debug for Indicator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Indicator")
            .field("id", &self.id)
            .field("content", &self.content)
            .field("phase", &self.phase)
            .field("position", &self.position)
            .field("motion", &self.motion)
            .field("drag", &self.drag)
            .field("anchor", &self.anchor)
            .field("bounds", &self.bounds)
            .field("dismiss_by_drag", &self.dismiss_by_drag)
            .finish_non_exhaustive()
    }
}
