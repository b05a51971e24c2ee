// SPDX-License-Identifier: MPL-2.0
//! UI state management modules
//!
//! Interaction state kept apart from the indicator's lifecycle logic.

pub mod drag;

// Re-export commonly used types for convenience
pub use drag::{DragRelease, DragState};
