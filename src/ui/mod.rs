// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! - [`indicator`] - The indicator: layout, animation, gestures and lifecycle
//! - [`state`] - Reusable interaction state (drag)
//! - [`design_tokens`] - Design system constants (colors, opacity, typography)

pub mod design_tokens;
pub mod indicator;
pub mod state;
