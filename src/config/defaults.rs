// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all indicator constants.
//!
//! This module serves as the single source of truth for the timings,
//! gesture thresholds and area metrics used by the indicator. Constants are
//! organized by category.
//!
//! # Categories
//!
//! - **Timing**: Display duration and present/dismiss animation
//! - **Position**: Hidden and visible anchor offsets
//! - **Gesture**: Drag thresholds
//! - **Area**: Indicator size bounds and spacing

// ==========================================================================
// Timing Defaults
// ==========================================================================

/// How long the indicator stays visible before auto-hiding (in seconds).
pub const DEFAULT_DISPLAY_DURATION_SECS: f32 = 1.5;

/// Upper bound accepted for the display duration (in seconds).
pub const MAX_DISPLAY_DURATION_SECS: f32 = 60.0;

/// Duration shared by the present, dismiss and drag-settle animations (in seconds).
pub const PRESENT_DISMISS_DURATION_SECS: f32 = 0.6;

/// Fraction of the present animation after which an animated icon starts.
pub const ICON_ANIMATE_FRACTION: f32 = 1.0 / 3.0;

// ==========================================================================
// Position Defaults
// ==========================================================================

/// Extra distance above the safe area used to fully hide the indicator.
pub const PREPARE_EXTRA_OFFSET: f32 = 50.0;

/// Smallest top inset the visible position is computed from.
pub const VISIBLE_MIN_TOP_INSET: f32 = 20.0;

/// Lift applied to the visible position so the pill tucks under the inset.
pub const VISIBLE_LIFT: f32 = 3.0;

// ==========================================================================
// Gesture Defaults
// ==========================================================================

/// Upward drag (negative) past which releasing dismisses the indicator.
pub const HIDE_DRAG_THRESHOLD: f32 = -10.0;

/// Largest downward offset a drag can produce.
pub const MAX_DOWNWARD_DRAG_OFFSET: f32 = 60.0;

// ==========================================================================
// Area Defaults
// ==========================================================================

/// Fixed indicator height.
pub const AREA_HEIGHT: f32 = 50.0;

/// Minimum width for icon presets.
pub const MIN_AREA_WIDTH: f32 = 196.0;

/// Minimum width for text-only indicators.
pub const MIN_MESSAGE_AREA_WIDTH: f32 = 100.0;

/// Maximum width for every indicator.
pub const MAX_AREA_WIDTH: f32 = 260.0;

/// Multiplier applied to the widest label for icon presets.
pub const TITLE_AREA_FACTOR: f32 = 2.5;

/// Multiplier applied to the widest label for text-only indicators.
pub const MESSAGE_TITLE_AREA_FACTOR: f32 = 1.8;

/// Vertical gap between title and subtitle.
pub const INTER_TITLE_SPACING: f32 = 1.0;

/// Horizontal gap between icon and labels.
pub const TITLE_ICON_SPACING: f32 = 16.0;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    // Timing validation
    assert!(DEFAULT_DISPLAY_DURATION_SECS > 0.0);
    assert!(DEFAULT_DISPLAY_DURATION_SECS <= MAX_DISPLAY_DURATION_SECS);
    assert!(PRESENT_DISMISS_DURATION_SECS > 0.0);
    assert!(ICON_ANIMATE_FRACTION > 0.0);
    assert!(ICON_ANIMATE_FRACTION < 1.0);

    // Position validation
    assert!(PREPARE_EXTRA_OFFSET > 0.0);
    assert!(VISIBLE_MIN_TOP_INSET > VISIBLE_LIFT);

    // Gesture validation
    assert!(HIDE_DRAG_THRESHOLD < 0.0);
    assert!(MAX_DOWNWARD_DRAG_OFFSET > 0.0);

    // Area validation
    assert!(AREA_HEIGHT > 0.0);
    assert!(MIN_MESSAGE_AREA_WIDTH > 0.0);
    assert!(MIN_MESSAGE_AREA_WIDTH <= MIN_AREA_WIDTH);
    assert!(MAX_AREA_WIDTH >= MIN_AREA_WIDTH);
    assert!(TITLE_AREA_FACTOR > 0.0);
    assert!(MESSAGE_TITLE_AREA_FACTOR > 0.0);
};
