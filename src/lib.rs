// SPDX-License-Identifier: MPL-2.0
//! `iced_indicator` is a pill-shaped, auto-dismissing notification for Iced.
//!
//! The indicator slides in from the top of its anchor surface, lays out an
//! optional icon with a title and subtitle, hides itself after a delay and can
//! be flicked away with a drag. The state machine is renderer-agnostic and
//! driven by explicit instants; [`ui::indicator::IndicatorCanvas`] draws it in
//! an Iced canvas and the [`app`] module hosts it in a demo window.

#![doc(html_root_url = "https://docs.rs/iced_indicator/0.1.0")]

pub mod app;
pub mod config;
pub mod domain;
pub mod error;
pub mod i18n;
pub mod ui;
