// SPDX-License-Identifier: MPL-2.0
//! Collaborators supplied by the host: screen geometry, the anchor surface the
//! indicator is attached to, and haptic feedback.

use super::IndicatorId;
use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};

/// Reports the reserved margin at the top of the screen.
pub trait GeometryProvider {
    /// Top safe-area inset in points.
    fn top_safe_area_inset(&self) -> f32;
}

/// The surface (window) an indicator is attached to while presented.
pub trait AnchorSurface: GeometryProvider {
    /// Width of the surface in points.
    fn width(&self) -> f32;

    /// Adds the indicator as a child of the surface.
    fn attach(&mut self, id: IndicatorId);

    /// Removes the indicator from the surface.
    fn detach(&mut self, id: IndicatorId);
}

/// Non-owning handle to an [`AnchorSurface`].
///
/// The indicator only looks the surface up when it needs it; once the host
/// drops the surface every lookup returns `None`.
#[derive(Clone, Default)]
pub struct AnchorHandle {
    surface: Option<Weak<RefCell<dyn AnchorSurface>>>,
}

impl AnchorHandle {
    /// Creates a handle that does not keep `surface` alive.
    pub fn new<S: AnchorSurface + 'static>(surface: &Rc<RefCell<S>>) -> Self {
        let weak: Weak<RefCell<S>> = Rc::downgrade(surface);
        let weak: Weak<RefCell<dyn AnchorSurface>> = weak;
        Self {
            surface: Some(weak),
        }
    }

    /// A handle that never resolves.
    #[must_use]
    pub fn detached() -> Self {
        Self::default()
    }

    /// Returns the surface if the host still owns it.
    #[must_use]
    pub fn upgrade(&self) -> Option<Rc<RefCell<dyn AnchorSurface>>> {
        self.surface.as_ref().and_then(Weak::upgrade)
    }

    /// Top inset of the surface, or zero once it is gone.
    #[must_use]
    pub fn top_safe_area_inset(&self) -> f32 {
        self.upgrade()
            .map_or(0.0, |surface| surface.borrow().top_safe_area_inset())
    }

    /// Width of the surface, if it is still alive.
    #[must_use]
    pub fn width(&self) -> Option<f32> {
        self.upgrade().map(|surface| surface.borrow().width())
    }
}

impl fmt::Debug for AnchorHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AnchorHandle")
            .field("alive", &self.upgrade().is_some())
            .finish()
    }
}

/// Haptic pattern played when an indicator is presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HapticKind {
    #[default]
    Success,
    Warning,
    Error,
    None,
}

/// Platform haptic engine.
pub trait Haptics {
    fn impact(&self, kind: HapticKind);
}

/// Haptics implementation for hosts without a haptic engine.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoHaptics;

impl Haptics for NoHaptics {
    fn impact(&self, _kind: HapticKind) {}
}
