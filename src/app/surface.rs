// SPDX-License-Identifier: MPL-2.0
//! Host collaborators backing the demo window.

use crate::ui::indicator::{AnchorSurface, GeometryProvider, HapticKind, Haptics, IndicatorId};

/// The demo window seen as an anchor surface.
#[derive(Debug, Clone, PartialEq)]
pub struct DemoSurface {
    pub width: f32,
    pub top_inset: f32,
    children: Vec<IndicatorId>,
}

impl DemoSurface {
    #[must_use]
    pub fn new(width: f32, top_inset: f32) -> Self {
        Self {
            width,
            top_inset: top_inset.max(0.0),
            children: Vec::new(),
        }
    }

    /// Indicators currently attached.
    #[must_use]
    pub fn children(&self) -> &[IndicatorId] {
        &self.children
    }
}

impl GeometryProvider for DemoSurface {
    fn top_safe_area_inset(&self) -> f32 {
        self.top_inset
    }
}

impl AnchorSurface for DemoSurface {
    fn width(&self) -> f32 {
        self.width
    }

    fn attach(&mut self, id: IndicatorId) {
        if !self.children.contains(&id) {
            self.children.push(id);
        }
    }

    fn detach(&mut self, id: IndicatorId) {
        self.children.retain(|child| *child != id);
    }
}

/// Desktop stand-in for a haptic engine: logs the requested pattern.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogHaptics;

impl Haptics for LogHaptics {
    fn impact(&self, kind: HapticKind) {
        if kind != HapticKind::None {
            tracing::info!(?kind, "haptic feedback");
        }
    }
}
