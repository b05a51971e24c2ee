// SPDX-License-Identifier: MPL-2.0
//! Logical positions of the indicator and the translations they map to.

use crate::config::{PREPARE_EXTRA_OFFSET, VISIBLE_LIFT, VISIBLE_MIN_TOP_INSET};
use iced::Vector;

/// Where the indicator sits vertically.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum PresentPosition {
    /// Fully hidden above the safe area.
    #[default]
    Prepare,
    /// Settled anchor position.
    Visible,
    /// Visible position shifted by a live drag offset.
    FromVisible(f32),
}

impl PresentPosition {
    /// Vertical translation for this position given the top safe-area inset.
    #[must_use]
    pub fn translation_y(self, top_inset: f32) -> f32 {
        match self {
            PresentPosition::Prepare => -(top_inset + PREPARE_EXTRA_OFFSET),
            PresentPosition::Visible => visible_translation_y(top_inset),
            PresentPosition::FromVisible(offset) => visible_translation_y(top_inset) + offset,
        }
    }

    /// Pure vertical translation transform for this position.
    #[must_use]
    pub fn to_transform(self, top_inset: f32) -> Vector {
        Vector::new(0.0, self.translation_y(top_inset))
    }
}

/// Translation of the settled position: never closer than the minimum inset.
#[must_use]
pub fn visible_translation_y(top_inset: f32) -> f32 {
    top_inset.max(VISIBLE_MIN_TOP_INSET) - VISIBLE_LIFT
}
