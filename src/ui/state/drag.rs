// SPDX-License-Identifier: MPL-2.0
//! Drag state management
//!
//! Tracks an in-progress dismiss drag on the indicator and whether the
//! auto-hide timer fired while the user was still holding it.

use iced::Vector;

/// What a finished drag leaves behind.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragRelease {
    /// Cumulative translation since the drag started.
    pub translation: Vector,
    /// The auto-hide timer fired during the drag.
    pub hide_requested: bool,
}

/// Manages dismiss-drag state
#[derive(Debug, Clone, Default)]
pub struct DragState {
    /// Whether a drag operation is currently active
    pub is_dragging: bool,

    /// Set when auto-hide fired mid-drag; consumed when the drag finishes
    pub pending_hide_after_drag: bool,

    /// Cumulative translation since the drag started
    pub translation: Vector,
}

impl DragState {
    /// Records a begin/change sample of the drag.
    pub fn update(&mut self, translation: Vector) {
        self.is_dragging = true;
        self.translation = translation;
    }

    /// Defers an auto-hide until the drag finishes.
    ///
    /// Returns `false` when no drag is active, in which case the caller
    /// should hide right away.
    pub fn defer_hide(&mut self) -> bool {
        if self.is_dragging {
            self.pending_hide_after_drag = true;
        }
        self.is_dragging
    }

    /// Ends the drag and returns what it leaves behind.
    pub fn finish(&mut self) -> DragRelease {
        let release = DragRelease {
            translation: self.translation,
            hide_requested: self.pending_hide_after_drag,
        };
        *self = Self::default();
        release
    }
}
