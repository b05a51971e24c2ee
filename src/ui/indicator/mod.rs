// SPDX-License-Identifier: MPL-2.0
//! Pill-shaped notification that slides in from the top of its anchor.
//!
//! An [`Indicator`] shows a title, an optional subtitle and an optional icon.
//! It sizes itself from its labels, picks one of six [`LayoutGrid`]
//! arrangements, slides in, hides itself after a delay and can be flicked
//! away with an upward drag.
//!
//! # Example
//!
//! ```
//! use iced_indicator::ui::indicator::{
//!     AnchorHandle, AnchorSurface, GeometryProvider, IconPreset, Indicator, IndicatorId,
//!     LifecyclePhase, PresentOptions,
//! };
//! use std::cell::RefCell;
//! use std::rc::Rc;
//! use std::time::{Duration, Instant};
//!
//! struct Window;
//!
//! impl GeometryProvider for Window {
//!     fn top_safe_area_inset(&self) -> f32 {
//!         47.0
//!     }
//! }
//!
//! impl AnchorSurface for Window {
//!     fn width(&self) -> f32 {
//!         390.0
//!     }
//!     fn attach(&mut self, _id: IndicatorId) {}
//!     fn detach(&mut self, _id: IndicatorId) {}
//! }
//!
//! let window = Rc::new(RefCell::new(Window));
//! let mut indicator = Indicator::with_preset("Saved", None, IconPreset::Done);
//! indicator.set_anchor(AnchorHandle::new(&window));
//!
//! let start = Instant::now();
//! indicator.present(start, PresentOptions::default(), None);
//! indicator.tick(start + Duration::from_secs(3));
//! assert_eq!(indicator.phase(), LifecyclePhase::Removed);
//! ```

pub mod canvas;
mod content;
mod controller;
pub mod gesture;
mod host;
pub mod icon;
pub mod layout;
mod metrics;
pub mod motion;
mod position;
pub mod schedule;
mod size;
pub mod text;

#[cfg(test)]
mod tests;

pub use canvas::IndicatorCanvas;
pub use content::{ContentFlags, IndicatorContent};
pub use controller::{Indicator, IndicatorId, LifecyclePhase, PresentOptions};
pub use gesture::{drag_offset, DragEvent, DragPhase, ReleaseDecision};
pub use host::{AnchorHandle, AnchorSurface, GeometryProvider, HapticKind, Haptics, NoHaptics};
pub use icon::{AnimatedIcon, IconPreset, IconShape, IconWidget};
pub use layout::{select_layout, Arrangement, Arranger, LabelFrame, LayoutGrid};
pub use metrics::{LayoutMetrics, Margins};
pub use position::{visible_translation_y, PresentPosition};
pub use size::resolve_size;
pub use text::{EstimatedTextMetrics, TextAlignment, TextMeasure};
