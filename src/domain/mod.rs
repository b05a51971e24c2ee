// SPDX-License-Identifier: MPL-2.0
//! Domain layer - value objects with no presentation dependencies.
//!
//! # Modules
//!
//! - [`ui`]: UI value objects ([`DisplayDuration`](ui::newtypes::DisplayDuration))

pub mod ui;
