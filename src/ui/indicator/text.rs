// SPDX-License-Identifier: MPL-2.0
//! Label measurement.
//!
//! Layout needs two numbers from the text system: the natural single-line
//! width of a string and the height of one line. Hosts with a real shaping
//! engine implement [`TextMeasure`]; everything else falls back to
//! [`EstimatedTextMetrics`].

use crate::ui::design_tokens::typography;
use unicode_width::UnicodeWidthStr;

/// Appended to a line cut at the tail.
pub const ELLIPSIS: char = '\u{2026}';

/// Horizontal alignment of a label inside its frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextAlignment {
    Left,
    #[default]
    Center,
    Right,
}

/// Measures single-line text for layout.
pub trait TextMeasure {
    /// Width of `text` laid out on one line.
    fn natural_width(&self, text: &str) -> f32;

    /// Height of a single line.
    fn line_height(&self) -> f32;

    /// Number of lines `text` occupies when wrapped to `width`, at most `max_lines`.
    fn line_count(&self, text: &str, width: f32, max_lines: u16) -> u16 {
        let max_lines = max_lines.max(1);
        let natural = self.natural_width(text);
        if width <= 0.0 || natural <= width {
            return 1;
        }
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        // ratio is positive and bounded by max_lines
        let needed = (natural / width).ceil().min(f32::from(max_lines)) as u16;
        needed.max(1)
    }

    /// Height of `text` wrapped to `width`, limited to `max_lines` lines.
    fn wrapped_height(&self, text: &str, width: f32, max_lines: u16, line_spacing: f32) -> f32 {
        let lines = self.line_count(text, width, max_lines);
        f32::from(lines) * self.line_height() + f32::from(lines - 1) * line_spacing
    }

    /// Breaks `text` into at most `max_lines` lines no wider than `width`.
    ///
    /// Lines break at whitespace when possible. Whatever does not fit on the
    /// last line is cut at the tail and replaced by [`ELLIPSIS`]. Text that
    /// already fits on one line comes back unchanged.
    fn fit_lines(&self, text: &str, width: f32, max_lines: u16) -> Vec<String> {
        if width <= 0.0 || self.natural_width(text) <= width {
            return vec![text.to_string()];
        }
        let max_lines = usize::from(max_lines.max(1));

        let mut lines = Vec::with_capacity(max_lines);
        let mut rest = text.trim_start();
        while !rest.is_empty() && lines.len() + 1 < max_lines {
            let split = break_index(self, rest, width);
            lines.push(rest[..split].trim_end().to_string());
            rest = rest[split..].trim_start();
        }
        if !rest.is_empty() {
            lines.push(truncate_tail(self, rest, width));
        }
        lines
    }
}

/// Byte index where the first line of `text` ends when wrapped to `width`.
fn break_index<M: TextMeasure + ?Sized>(measure: &M, text: &str, width: f32) -> usize {
    let mut fit = 0;
    for (index, ch) in text.char_indices() {
        let end = index + ch.len_utf8();
        if measure.natural_width(&text[..end]) > width {
            break;
        }
        fit = end;
    }

    if fit == text.len() || text[fit..].starts_with(char::is_whitespace) {
        return fit;
    }
    if fit == 0 {
        // Always consume one character so wrapping makes progress.
        return text.chars().next().map_or(0, char::len_utf8);
    }
    text[..fit]
        .rfind(char::is_whitespace)
        .filter(|&at| at > 0)
        .unwrap_or(fit)
}

/// Cuts `text` so that it plus [`ELLIPSIS`] fits in `width`.
fn truncate_tail<M: TextMeasure + ?Sized>(measure: &M, text: &str, width: f32) -> String {
    if measure.natural_width(text) <= width {
        return text.to_string();
    }
    let mut best = ELLIPSIS.to_string();
    for (index, _) in text.char_indices().skip(1) {
        let candidate = format!("{}{ELLIPSIS}", text[..index].trim_end());
        if measure.natural_width(&candidate) > width {
            break;
        }
        best = candidate;
    }
    best
}

/// Width estimate based on terminal-style column widths.
///
/// Each column is assumed to advance by a fixed fraction of the font size,
/// which keeps results deterministic across platforms.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EstimatedTextMetrics {
    pub font_size: f32,
    /// Average glyph advance as a fraction of the font size.
    pub advance_factor: f32,
    /// Line height as a multiple of the font size.
    pub line_height_factor: f32,
}

impl Default for EstimatedTextMetrics {
    fn default() -> Self {
        Self {
            font_size: typography::FOOTNOTE,
            advance_factor: 0.55,
            line_height_factor: 1.2,
        }
    }
}

impl TextMeasure for EstimatedTextMetrics {
    fn natural_width(&self, text: &str) -> f32 {
        #[allow(clippy::cast_precision_loss)]
        // label text is a few dozen columns at most
        let columns = UnicodeWidthStr::width(text) as f32;
        columns * self.font_size * self.advance_factor
    }

    fn line_height(&self) -> f32 {
        self.font_size * self.line_height_factor
    }
}
