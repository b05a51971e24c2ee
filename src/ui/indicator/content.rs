// SPDX-License-Identifier: MPL-2.0
//! What an indicator shows.

use super::icon::{IconPreset, IconWidget};
use super::metrics::LayoutMetrics;

/// Title, optional subtitle and optional icon of an indicator.
///
/// Set once at construction; the indicator never changes its content.
#[derive(Debug)]
pub struct IndicatorContent {
    title: String,
    subtitle: Option<String>,
    icon: Option<IconWidget>,
    preset: Option<IconPreset>,
    metrics: LayoutMetrics,
}

impl IndicatorContent {
    /// Content with an icon created from `preset`.
    pub fn with_preset(
        title: impl Into<String>,
        subtitle: Option<String>,
        preset: IconPreset,
    ) -> Self {
        Self {
            title: title.into(),
            subtitle,
            icon: Some(preset.create_widget()),
            preset: Some(preset),
            metrics: LayoutMetrics::for_preset(preset),
        }
    }

    /// Text-only content.
    pub fn message(title: impl Into<String>, subtitle: Option<String>) -> Self {
        Self {
            title: title.into(),
            subtitle,
            icon: None,
            preset: None,
            metrics: LayoutMetrics::message(),
        }
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn subtitle(&self) -> Option<&str> {
        self.subtitle.as_deref()
    }

    #[must_use]
    pub fn icon(&self) -> Option<&IconWidget> {
        self.icon.as_ref()
    }

    pub fn icon_mut(&mut self) -> Option<&mut IconWidget> {
        self.icon.as_mut()
    }

    #[must_use]
    pub fn preset(&self) -> Option<IconPreset> {
        self.preset
    }

    #[must_use]
    pub fn metrics(&self) -> &LayoutMetrics {
        &self.metrics
    }

    /// Which elements are present.
    #[must_use]
    pub fn flags(&self) -> ContentFlags {
        ContentFlags {
            has_icon: self.icon.is_some(),
            has_title: true,
            has_subtitle: self.subtitle.is_some(),
        }
    }
}

/// Presence of each element, as seen by the layout selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ContentFlags {
    pub has_icon: bool,
    pub has_title: bool,
    pub has_subtitle: bool,
}
