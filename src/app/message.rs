// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the demo application.

use iced::{Point, Size};
use std::time::Instant;

/// Kind of indicator the demo presents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DemoKind {
    Done,
    Error,
    Message,
}

/// Top-level messages consumed by `App::update`.
#[derive(Debug, Clone)]
pub enum Message {
    Present(DemoKind),
    Dismiss,
    ToggleDismissByDrag,
    Tick(Instant), // Periodic tick driving animations and auto-hide
    PointerPressed,
    PointerMoved(Point),
    PointerReleased,
    /// The cursor left the window; an active drag is cancelled.
    PointerLeft,
    WindowResized(Size),
}

/// Runtime flags passed in from the CLI.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `ar`, `en-US`).
    pub lang: Option<String>,
    /// Simulated top safe-area inset in points.
    pub safe_area: Option<f32>,
}
