// SPDX-License-Identifier: MPL-2.0
//! Lifecycle scenarios driven through the public indicator API.

use super::*;
use crate::domain::ui::newtypes::DisplayDuration;
use iced::Vector;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::{Duration, Instant};

const EPSILON: f32 = 1e-3;

struct Window {
    width: f32,
    inset: f32,
    children: Vec<IndicatorId>,
    detach_calls: usize,
}

impl GeometryProvider for Window {
    fn top_safe_area_inset(&self) -> f32 {
        self.inset
    }
}

impl AnchorSurface for Window {
    fn width(&self) -> f32 {
        self.width
    }

    fn attach(&mut self, id: IndicatorId) {
        self.children.push(id);
    }

    fn detach(&mut self, id: IndicatorId) {
        self.detach_calls += 1;
        self.children.retain(|child| *child != id);
    }
}

#[derive(Clone, Default)]
struct RecordingHaptics(Rc<RefCell<Vec<HapticKind>>>);

impl Haptics for RecordingHaptics {
    fn impact(&self, kind: HapticKind) {
        self.0.borrow_mut().push(kind);
    }
}

fn window(width: f32) -> Rc<RefCell<Window>> {
    Rc::new(RefCell::new(Window {
        width,
        inset: 47.0,
        children: Vec::new(),
        detach_calls: 0,
    }))
}

fn ms(millis: u64) -> Duration {
    Duration::from_millis(millis)
}

fn counter() -> (Rc<Cell<u32>>, Box<dyn FnOnce()>) {
    let count = Rc::new(Cell::new(0));
    let handle = Rc::clone(&count);
    (count, Box::new(move || handle.set(handle.get() + 1)))
}

fn drag(phase: DragPhase, y: f32) -> DragEvent {
    DragEvent::new(phase, Vector::new(0.0, y))
}

/// Presents a "Saved" indicator on a 390pt window and settles it.
fn visible_indicator(start: Instant) -> (Indicator, Rc<RefCell<Window>>, Rc<Cell<u32>>) {
    let window = window(390.0);
    let mut indicator = Indicator::with_preset("Saved", None, IconPreset::Done);
    indicator.set_anchor(AnchorHandle::new(&window));
    let (count, on_complete) = counter();
    indicator.present(start, PresentOptions::default(), Some(on_complete));
    indicator.tick(start + ms(700));
    assert_eq!(indicator.phase(), LifecyclePhase::Visible);
    (indicator, window, count)
}

#[test]
fn saved_indicator_presents_hides_and_completes_once() {
    let start = Instant::now();
    let window = window(390.0);
    let mut indicator = Indicator::with_preset("Saved", None, IconPreset::Done);
    indicator.set_anchor(AnchorHandle::new(&window));
    let (count, on_complete) = counter();

    indicator.present(
        start,
        PresentOptions::new(DisplayDuration::new(1.5), HapticKind::Success),
        Some(on_complete),
    );
    assert_eq!(indicator.phase(), LifecyclePhase::Presenting);
    assert_eq!(window.borrow().children, vec![indicator.id()]);
    assert!((indicator.translation_y(start) + 97.0).abs() < EPSILON);

    let midway = indicator.translation_y(start + ms(300));
    assert!(midway > -97.0 && midway < 44.0);

    indicator.tick(start + ms(700));
    assert_eq!(indicator.phase(), LifecyclePhase::Visible);
    assert!((indicator.translation_y(start + ms(700)) - 44.0).abs() < EPSILON);

    // Auto-hide is due 1.5 s after the present animation ended.
    indicator.tick(start + ms(2000));
    assert_eq!(indicator.phase(), LifecyclePhase::Visible);

    indicator.tick(start + ms(2200));
    assert_eq!(indicator.phase(), LifecyclePhase::Dismissing);
    assert_eq!(count.get(), 0);

    indicator.tick(start + ms(2900));
    assert_eq!(indicator.phase(), LifecyclePhase::Removed);
    assert!((indicator.translation_y(start + ms(2900)) + 97.0).abs() < EPSILON);
    assert_eq!(count.get(), 1);
    assert!(window.borrow().children.is_empty());
    assert!(!indicator.is_active());

    indicator.tick(start + ms(10_000));
    assert_eq!(count.get(), 1);
}

#[test]
fn single_late_tick_runs_the_whole_lifecycle() {
    let start = Instant::now();
    let window = window(390.0);
    let mut indicator = Indicator::message("Copied", None);
    indicator.set_anchor(AnchorHandle::new(&window));
    let (count, on_complete) = counter();

    indicator.present(start, PresentOptions::default(), Some(on_complete));
    indicator.tick(start + Duration::from_secs(30));

    assert_eq!(indicator.phase(), LifecyclePhase::Removed);
    assert_eq!(count.get(), 1);
    assert_eq!(window.borrow().detach_calls, 1);
}

#[test]
fn double_dismiss_completes_once() {
    let start = Instant::now();
    let (mut indicator, window, count) = visible_indicator(start);

    indicator.dismiss(start + ms(800));
    indicator.dismiss(start + ms(850));
    assert_eq!(indicator.phase(), LifecyclePhase::Dismissing);

    indicator.tick(start + Duration::from_secs(10));
    indicator.dismiss(start + Duration::from_secs(11));
    indicator.tick(start + Duration::from_secs(12));

    assert_eq!(count.get(), 1);
    assert_eq!(window.borrow().detach_calls, 1);
}

#[test]
fn dismiss_during_present_starts_from_current_translation() {
    let start = Instant::now();
    let window = window(390.0);
    let mut indicator = Indicator::with_preset("Saved", None, IconPreset::Done);
    indicator.set_anchor(AnchorHandle::new(&window));
    indicator.present(start, PresentOptions::default(), None);

    let at = start + ms(300);
    let before = indicator.translation_y(at);
    indicator.dismiss(at);
    assert_eq!(indicator.phase(), LifecyclePhase::Dismissing);
    assert!((indicator.translation_y(at) - before).abs() < EPSILON);

    indicator.tick(at + ms(700));
    assert_eq!(indicator.phase(), LifecyclePhase::Removed);
}

#[test]
fn narrow_anchor_switches_to_leading_layout() {
    let window = window(160.0);
    let mut indicator = Indicator::with_preset(
        "Saved",
        Some("All changes stored".to_string()),
        IconPreset::Done,
    );
    indicator.set_anchor(AnchorHandle::new(&window));
    indicator.present(Instant::now(), PresentOptions::default(), None);

    let arrangement = indicator.arrangement().copied().expect("laid out");
    assert_eq!(arrangement.grid, LayoutGrid::IconTitleMessageLeading);
    assert_eq!(
        arrangement.title.expect("title").alignment,
        TextAlignment::Left
    );
    assert_eq!(indicator.bounds().width, 160.0);
}

#[test]
fn wide_anchor_keeps_centered_layout() {
    let window = window(390.0);
    let mut indicator = Indicator::with_preset(
        "Saved",
        Some("All changes stored".to_string()),
        IconPreset::Done,
    );
    indicator.set_anchor(AnchorHandle::new(&window));
    indicator.present(Instant::now(), PresentOptions::default(), None);

    let arrangement = indicator.arrangement().copied().expect("laid out");
    assert_eq!(arrangement.grid, LayoutGrid::IconTitleMessageCentered);
    assert_eq!(indicator.bounds(), iced::Size::new(260.0, 50.0));
}

#[test]
fn frame_is_centered_in_anchor() {
    let start = Instant::now();
    let (indicator, _window, _count) = visible_indicator(start);

    let frame = indicator.frame(start + ms(700)).expect("anchor alive");
    assert_eq!(frame.width, 196.0);
    assert!((frame.x - 97.0).abs() < EPSILON);
    assert!((frame.y - 44.0).abs() < EPSILON);
}

#[test]
fn present_without_live_anchor_is_a_no_op() {
    let window = window(390.0);
    let handle = AnchorHandle::new(&window);
    drop(window);

    let haptics = RecordingHaptics::default();
    let mut indicator = Indicator::with_preset("Saved", None, IconPreset::Done);
    indicator.set_anchor(handle);
    indicator.set_haptics(haptics.clone());
    indicator.present(Instant::now(), PresentOptions::default(), None);

    assert_eq!(indicator.phase(), LifecyclePhase::Idle);
    assert!(haptics.0.borrow().is_empty());
}

#[test]
fn anchor_dropped_while_visible_still_completes() {
    let start = Instant::now();
    let (mut indicator, window, count) = visible_indicator(start);
    drop(window);

    indicator.tick(start + Duration::from_secs(10));
    assert_eq!(indicator.phase(), LifecyclePhase::Removed);
    assert_eq!(count.get(), 1);
    assert!(indicator.frame(start + Duration::from_secs(10)).is_none());
}

#[test]
fn second_present_is_ignored() {
    let start = Instant::now();
    let window = window(390.0);
    let haptics = RecordingHaptics::default();
    let mut indicator = Indicator::with_preset("Saved", None, IconPreset::Error);
    indicator.set_anchor(AnchorHandle::new(&window));
    indicator.set_haptics(haptics.clone());

    let options = PresentOptions::new(DisplayDuration::default(), HapticKind::Error);
    indicator.present(start, options, None);
    indicator.present(start + ms(100), options, None);

    assert_eq!(*haptics.0.borrow(), vec![HapticKind::Error]);
    assert_eq!(window.borrow().children.len(), 1);
}

#[test]
fn haptic_fires_when_presenting_starts() {
    let window = window(390.0);
    let haptics = RecordingHaptics::default();
    let mut indicator = Indicator::message("Copied", None);
    indicator.set_anchor(AnchorHandle::new(&window));
    indicator.set_haptics(haptics.clone());

    indicator.present(
        Instant::now(),
        PresentOptions::new(DisplayDuration::default(), HapticKind::Warning),
        None,
    );
    assert_eq!(indicator.phase(), LifecyclePhase::Presenting);
    assert_eq!(*haptics.0.borrow(), vec![HapticKind::Warning]);
}

#[test]
fn present_callback_replaces_stored_one() {
    let start = Instant::now();
    let window = window(390.0);
    let mut indicator = Indicator::message("Copied", None);
    indicator.set_anchor(AnchorHandle::new(&window));

    let (stored, stored_callback) = counter();
    indicator.set_on_complete(stored_callback);
    let (passed, passed_callback) = counter();
    indicator.present(start, PresentOptions::default(), Some(passed_callback));
    indicator.tick(start + Duration::from_secs(10));

    assert_eq!(stored.get(), 0);
    assert_eq!(passed.get(), 1);
}

#[test]
fn stored_callback_is_kept_without_replacement() {
    let start = Instant::now();
    let window = window(390.0);
    let mut indicator = Indicator::message("Copied", None);
    indicator.set_anchor(AnchorHandle::new(&window));

    let (stored, stored_callback) = counter();
    indicator.set_on_complete(stored_callback);
    indicator.present(start, PresentOptions::default(), None);
    indicator.tick(start + Duration::from_secs(10));

    assert_eq!(stored.get(), 1);
}

#[test]
fn icon_animates_a_third_into_present() {
    let start = Instant::now();
    let window = window(390.0);
    let mut indicator = Indicator::with_preset("Saved", None, IconPreset::Done);
    indicator.set_anchor(AnchorHandle::new(&window));
    indicator.present(start, PresentOptions::default(), None);

    indicator.tick(start + ms(150));
    match indicator.icon_shape(start + ms(150)) {
        Some(IconShape::Stroke { progress, .. }) => assert_eq!(progress, 0.0),
        other => panic!("unexpected icon shape: {other:?}"),
    }

    indicator.tick(start + ms(500));
    match indicator.icon_shape(start + ms(500)) {
        Some(IconShape::Stroke { progress, .. }) => assert!(progress > 0.0),
        other => panic!("unexpected icon shape: {other:?}"),
    }
}

#[test]
fn icon_still_animates_when_dismissed_early() {
    let start = Instant::now();
    let window = window(390.0);
    let mut indicator = Indicator::with_preset("Saved", None, IconPreset::Done);
    indicator.set_anchor(AnchorHandle::new(&window));
    indicator.present(start, PresentOptions::default(), None);

    indicator.dismiss(start + ms(100));
    indicator.tick(start + ms(300));

    assert_eq!(indicator.phase(), LifecyclePhase::Dismissing);
    match indicator.icon_shape(start + ms(300)) {
        Some(IconShape::Stroke { progress, .. }) => assert!(progress > 0.0),
        other => panic!("unexpected icon shape: {other:?}"),
    }
}

#[test]
fn custom_glyph_icon_stays_static() {
    let start = Instant::now();
    let window = window(390.0);
    let mut indicator = Indicator::with_preset("Muted", None, IconPreset::Custom('M'));
    indicator.set_anchor(AnchorHandle::new(&window));
    indicator.present(start, PresentOptions::default(), None);
    indicator.tick(start + ms(700));

    assert_eq!(
        indicator.icon_shape(start + ms(700)),
        Some(IconShape::Glyph('M'))
    );
}

#[test]
fn upward_drag_past_threshold_dismisses() {
    let start = Instant::now();
    let (mut indicator, window, count) = visible_indicator(start);

    indicator.handle_drag(drag(DragPhase::Began, -5.0), start + ms(800));
    indicator.handle_drag(drag(DragPhase::Changed, -12.0), start + ms(850));
    assert!(indicator.is_dragging());
    assert!((indicator.translation_y(start + ms(850)) - 32.0).abs() < EPSILON);

    indicator.handle_drag(drag(DragPhase::Ended, -15.0), start + ms(900));
    assert_eq!(indicator.phase(), LifecyclePhase::Dismissing);
    assert!(!indicator.is_dragging());

    indicator.tick(start + ms(1600));
    assert_eq!(indicator.phase(), LifecyclePhase::Removed);
    assert_eq!(count.get(), 1);
    assert!(window.borrow().children.is_empty());
}

#[test]
fn short_drag_snaps_back() {
    let start = Instant::now();
    let (mut indicator, _window, count) = visible_indicator(start);

    indicator.handle_drag(drag(DragPhase::Began, -5.0), start + ms(800));
    indicator.handle_drag(drag(DragPhase::Ended, -5.0), start + ms(850));
    assert_eq!(indicator.phase(), LifecyclePhase::Visible);
    assert_eq!(indicator.position(), PresentPosition::Visible);

    indicator.tick(start + ms(1500));
    assert!((indicator.translation_y(start + ms(1500)) - 44.0).abs() < EPSILON);
    assert_eq!(count.get(), 0);
}

#[test]
fn downward_drag_is_damped() {
    let start = Instant::now();
    let (mut indicator, _window, _count) = visible_indicator(start);

    indicator.handle_drag(drag(DragPhase::Began, 100.0), start + ms(800));
    assert_eq!(indicator.position(), PresentPosition::FromVisible(10.0));

    indicator.handle_drag(drag(DragPhase::Changed, 10_000.0), start + ms(850));
    assert_eq!(indicator.position(), PresentPosition::FromVisible(60.0));
    assert!((indicator.translation_y(start + ms(850)) - 104.0).abs() < EPSILON);
}

#[test]
fn auto_hide_during_drag_waits_for_release() {
    let start = Instant::now();
    let (mut indicator, _window, count) = visible_indicator(start);

    indicator.handle_drag(drag(DragPhase::Began, 20.0), start + ms(1000));
    indicator.tick(start + ms(2500));
    assert_eq!(indicator.phase(), LifecyclePhase::Visible);
    assert!(indicator.is_dragging());

    // Released with a downward offset: the deferred hide still wins.
    indicator.handle_drag(drag(DragPhase::Ended, 5.0), start + ms(2600));
    assert_eq!(indicator.phase(), LifecyclePhase::Dismissing);

    indicator.tick(start + ms(3400));
    assert_eq!(indicator.phase(), LifecyclePhase::Removed);
    assert_eq!(count.get(), 1);
}

#[test]
fn drag_during_present_settles_it_first() {
    let start = Instant::now();
    let window = window(390.0);
    let mut indicator = Indicator::with_preset("Saved", None, IconPreset::Done);
    indicator.set_anchor(AnchorHandle::new(&window));
    indicator.present(start, PresentOptions::default(), None);

    indicator.handle_drag(drag(DragPhase::Began, 0.0), start + ms(300));
    assert_eq!(indicator.phase(), LifecyclePhase::Visible);
    assert!((indicator.translation_y(start + ms(300)) - 44.0).abs() < EPSILON);

    indicator.handle_drag(drag(DragPhase::Ended, 0.0), start + ms(400));
    // Auto-hide was armed when the drag took over at 300 ms.
    indicator.tick(start + ms(1700));
    assert_eq!(indicator.phase(), LifecyclePhase::Visible);
    indicator.tick(start + ms(1900));
    assert_eq!(indicator.phase(), LifecyclePhase::Dismissing);
}

#[test]
fn cancelled_drag_snaps_back() {
    let start = Instant::now();
    let (mut indicator, _window, _count) = visible_indicator(start);

    indicator.handle_drag(drag(DragPhase::Began, -40.0), start + ms(800));
    indicator.handle_drag(drag(DragPhase::Cancelled, -40.0), start + ms(850));

    assert_eq!(indicator.phase(), LifecyclePhase::Visible);
    assert!(!indicator.is_dragging());
    assert_eq!(indicator.position(), PresentPosition::Visible);
}

#[test]
fn drag_is_ignored_when_disabled() {
    let start = Instant::now();
    let (mut indicator, _window, _count) = visible_indicator(start);

    indicator.set_dismiss_by_drag(false, start + ms(750));
    indicator.handle_drag(drag(DragPhase::Began, -40.0), start + ms(800));
    indicator.handle_drag(drag(DragPhase::Ended, -40.0), start + ms(850));

    assert!(!indicator.is_dragging());
    assert_eq!(indicator.phase(), LifecyclePhase::Visible);
    assert_eq!(indicator.position(), PresentPosition::Visible);
}

#[test]
fn disabling_drag_mid_gesture_cancels_it() {
    let start = Instant::now();
    let (mut indicator, _window, _count) = visible_indicator(start);

    indicator.handle_drag(drag(DragPhase::Began, -50.0), start + ms(800));
    indicator.set_dismiss_by_drag(false, start + ms(850));

    assert!(!indicator.is_dragging());
    assert_eq!(indicator.phase(), LifecyclePhase::Visible);

    indicator.handle_drag(drag(DragPhase::Changed, -80.0), start + ms(900));
    assert_eq!(indicator.position(), PresentPosition::Visible);
}

#[test]
fn drag_after_dismiss_is_ignored() {
    let start = Instant::now();
    let (mut indicator, _window, _count) = visible_indicator(start);

    indicator.dismiss(start + ms(800));
    indicator.handle_drag(drag(DragPhase::Began, 30.0), start + ms(850));

    assert!(!indicator.is_dragging());
    assert_eq!(indicator.position(), PresentPosition::Prepare);
}

#[test]
fn safe_area_change_is_picked_up_live() {
    let start = Instant::now();
    let (indicator, window, _count) = visible_indicator(start);

    window.borrow_mut().inset = 0.0;
    assert!((indicator.translation_y(start + ms(700)) - 17.0).abs() < EPSILON);
}

#[test]
fn text_direction_change_relayouts() {
    let window = window(160.0);
    let mut indicator = Indicator::with_preset(
        "Saved",
        Some("All changes stored".to_string()),
        IconPreset::Done,
    );
    indicator.set_anchor(AnchorHandle::new(&window));
    indicator.present(Instant::now(), PresentOptions::default(), None);

    indicator.set_text_direction(crate::i18n::TextDirection::RightToLeft);
    let arrangement = indicator.arrangement().copied().expect("laid out");
    assert_eq!(
        arrangement.title.expect("title").alignment,
        TextAlignment::Right
    );
}

#[test]
fn anchor_resize_is_applied_on_relayout() {
    let window = window(390.0);
    let mut indicator = Indicator::with_preset(
        "Saved",
        Some("All changes stored".to_string()),
        IconPreset::Done,
    );
    indicator.set_anchor(AnchorHandle::new(&window));
    indicator.present(Instant::now(), PresentOptions::default(), None);
    assert_eq!(
        indicator.arrangement().map(|arrangement| arrangement.grid),
        Some(LayoutGrid::IconTitleMessageCentered)
    );

    window.borrow_mut().width = 160.0;
    indicator.relayout();
    assert_eq!(
        indicator.arrangement().map(|arrangement| arrangement.grid),
        Some(LayoutGrid::IconTitleMessageLeading)
    );
}
