// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support for the indicator.
//!
//! Localization of the indicator is limited to the writing direction: the
//! leading layouts mirror their text alignment for right-to-left locales.
//!
//! # Features
//!
//! - Locale detection from CLI, config, or system settings
//! - Left-to-right fallback when no locale can be parsed

pub mod direction;

pub use direction::{resolve_direction, TextDirection};
