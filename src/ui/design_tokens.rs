// SPDX-License-Identifier: MPL-2.0
#![doc = r#"
# Design Tokens

This module defines the visual tokens of the indicator pill, following the
W3C Design Tokens standard.

## Organization

- **Palette**: Base colors
- **Opacity**: Label and surface opacity levels
- **Typography**: Font sizes and line spacing
- **Stroke**: Icon stroke widths
- **Shadow**: Drop shadow under the pill

## Examples

```
use iced_indicator::ui::design_tokens::{opacity, palette};
use iced::Color;

let title_color = Color {
    a: opacity::TITLE,
    ..palette::LABEL
};
assert!(title_color.a > opacity::SUBTITLE);
```
"#]

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    pub const BLACK: Color = Color::BLACK;

    /// Primary label color; labels apply their own opacity on top.
    pub const LABEL: Color = Color::from_rgb(0.0, 0.0, 0.0);

    /// Thick material surface behind the labels.
    pub const SURFACE: Color = Color::from_rgb(0.97, 0.97, 0.98);

    // Semantic colors
    pub const ERROR_500: Color = Color::from_rgb(0.898, 0.224, 0.208);
    pub const SUCCESS_500: Color = Color::from_rgb(0.263, 0.702, 0.404);
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const TRANSPARENT: f32 = 0.0;
    pub const OPAQUE: f32 = 1.0;

    /// Title label
    pub const TITLE: f32 = 0.6;

    /// Subtitle label
    pub const SUBTITLE: f32 = 0.3;

    /// Background surface of the pill
    pub const SURFACE: f32 = 0.95;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    /// Footnote - title and subtitle of the indicator
    pub const FOOTNOTE: f32 = 13.0;

    /// Extra spacing between title lines
    pub const TITLE_LINE_SPACING: f32 = 3.0;

    /// Extra spacing between subtitle lines
    pub const SUBTITLE_LINE_SPACING: f32 = 2.0;
}

// ============================================================================
// Stroke Scale
// ============================================================================

pub mod stroke {
    /// Checkmark and cross icons
    pub const ICON: f32 = 2.0;
}

// ============================================================================
// Shadow Definitions
// ============================================================================

pub mod shadow {
    use super::palette;
    use iced::{Color, Shadow, Vector};

    /// Soft shadow under the pill.
    pub const INDICATOR: Shadow = Shadow {
        color: Color {
            a: 0.22,
            ..palette::BLACK
        },
        offset: Vector { x: 0.0, y: 7.0 },
        blur_radius: 40.0,
    };
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    // Opacity validation
    assert!(opacity::TRANSPARENT == 0.0);
    assert!(opacity::OPAQUE == 1.0);
    assert!(opacity::TITLE > opacity::SUBTITLE);
    assert!(opacity::SURFACE > 0.0 && opacity::SURFACE < 1.0);

    // Typography validation
    assert!(typography::FOOTNOTE > 0.0);
    assert!(typography::TITLE_LINE_SPACING > typography::SUBTITLE_LINE_SPACING);

    // Shadow validation
    assert!(shadow::INDICATOR.blur_radius > 0.0);
};
