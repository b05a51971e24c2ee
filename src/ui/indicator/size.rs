// SPDX-License-Identifier: MPL-2.0
//! Natural size of an indicator.

use super::content::IndicatorContent;
use super::metrics::LayoutMetrics;
use super::text::TextMeasure;
use iced::Size;

/// Computes the indicator's natural size from its labels.
///
/// The widest label is scaled by the title-area factor, rounded and clamped
/// to the metric bounds. The height is fixed.
pub fn resolve_size(content: &IndicatorContent, measure: &dyn TextMeasure) -> Size {
    let title_width = measure.natural_width(content.title());
    let subtitle_width = content
        .subtitle()
        .map_or(0.0, |subtitle| measure.natural_width(subtitle));
    resolve_from_widths(title_width, subtitle_width, content.metrics())
}

fn resolve_from_widths(title_width: f32, subtitle_width: f32, metrics: &LayoutMetrics) -> Size {
    let width = (title_width.max(subtitle_width) * metrics.title_area_factor).round();
    let width = clamp_width(width, metrics);
    Size::new(width, metrics.area_height)
}

/// Clamps `width` into `[min_width, max_width]`; the minimum wins if the
/// bounds are inverted.
fn clamp_width(width: f32, metrics: &LayoutMetrics) -> f32 {
    width.min(metrics.max_width).max(metrics.min_width)
}
