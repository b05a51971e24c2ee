// SPDX-License-Identifier: MPL-2.0
//! Layout metrics selected by preset.

use super::icon::IconPreset;
use crate::config::{
    AREA_HEIGHT, INTER_TITLE_SPACING, MAX_AREA_WIDTH, MESSAGE_TITLE_AREA_FACTOR, MIN_AREA_WIDTH,
    MIN_MESSAGE_AREA_WIDTH, TITLE_AREA_FACTOR, TITLE_ICON_SPACING,
};
use iced::Size;

/// Insets between the pill edge and its content.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Margins {
    pub left: f32,
    pub right: f32,
    pub top: f32,
    pub bottom: f32,
}

impl Margins {
    #[must_use]
    pub const fn horizontal(left: f32, right: f32) -> Self {
        Self {
            left,
            right,
            top: 0.0,
            bottom: 0.0,
        }
    }
}

/// Size bounds, spacing and icon size of an indicator. Read-only once the
/// indicator is constructed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutMetrics {
    pub area_height: f32,
    pub min_width: f32,
    pub max_width: f32,
    pub title_area_factor: f32,
    pub inter_title_spacing: f32,
    pub title_icon_spacing: f32,
    pub margins: Margins,
    pub icon_size: Size,
}

impl Default for LayoutMetrics {
    fn default() -> Self {
        Self {
            area_height: AREA_HEIGHT,
            min_width: MIN_AREA_WIDTH,
            max_width: MAX_AREA_WIDTH,
            title_area_factor: TITLE_AREA_FACTOR,
            inter_title_spacing: INTER_TITLE_SPACING,
            title_icon_spacing: TITLE_ICON_SPACING,
            margins: Margins::horizontal(16.0, 18.0),
            icon_size: Size::new(20.0, 20.0),
        }
    }
}

impl LayoutMetrics {
    /// Metrics for an indicator showing `preset`.
    #[must_use]
    pub fn for_preset(preset: IconPreset) -> Self {
        match preset {
            IconPreset::Done | IconPreset::Error => Self {
                margins: Margins::horizontal(19.0, 21.0),
                icon_size: Size::new(14.0, 14.0),
                ..Self::default()
            },
            IconPreset::Custom(_) => Self::default(),
        }
    }

    /// Metrics for a text-only indicator.
    #[must_use]
    pub fn message() -> Self {
        Self {
            min_width: MIN_MESSAGE_AREA_WIDTH,
            title_area_factor: MESSAGE_TITLE_AREA_FACTOR,
            margins: Margins::horizontal(8.0, 8.0),
            ..Self::default()
        }
    }
}
