// SPDX-License-Identifier: MPL-2.0
//! Layout selection and arrangement of the icon and labels.
//!
//! Every layout pass first picks one of six [`LayoutGrid`] arrangements from
//! the content flags and the available width, then places each element
//! inside the indicator bounds:
//!
//! | icon | subtitle | fits compact width | grid                        |
//! |------|----------|--------------------|-----------------------------|
//! | yes  | yes      | yes                | `IconTitleMessageCentered`  |
//! | yes  | yes      | no                 | `IconTitleMessageLeading`   |
//! | yes  | no       | -                  | `IconTitleCentered`         |
//! | no   | no       | -                  | `Title`                     |
//! | no   | yes      | -                  | `TitleMessage`              |
//!
//! `IconTitleLeading` is never selected automatically; it is only used when a
//! caller forces it through [`Arranger::arrange_with`].

use super::content::{ContentFlags, IndicatorContent};
use super::text::{TextAlignment, TextMeasure};
use crate::i18n::TextDirection;
use crate::ui::design_tokens::typography;
use iced::{Point, Rectangle, Size};

/// The six ways the icon and labels can be arranged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutGrid {
    IconTitleMessageCentered,
    IconTitleMessageLeading,
    IconTitleCentered,
    IconTitleLeading,
    Title,
    TitleMessage,
}

impl LayoutGrid {
    /// Lines the title may wrap to in this arrangement.
    #[must_use]
    pub fn title_max_lines(self) -> u16 {
        match self {
            LayoutGrid::IconTitleCentered | LayoutGrid::IconTitleLeading | LayoutGrid::Title => 2,
            LayoutGrid::IconTitleMessageCentered
            | LayoutGrid::IconTitleMessageLeading
            | LayoutGrid::TitleMessage => 1,
        }
    }

    #[must_use]
    pub fn shows_icon(self) -> bool {
        !matches!(self, LayoutGrid::Title | LayoutGrid::TitleMessage)
    }

    #[must_use]
    pub fn shows_subtitle(self) -> bool {
        matches!(
            self,
            LayoutGrid::IconTitleMessageCentered
                | LayoutGrid::IconTitleMessageLeading
                | LayoutGrid::TitleMessage
        )
    }
}

/// Picks the arrangement for the given content.
#[must_use]
pub fn select_layout(flags: ContentFlags, overflows_compact_width: bool) -> LayoutGrid {
    match (flags.has_icon, flags.has_title, flags.has_subtitle) {
        (true, true, true) if !overflows_compact_width => LayoutGrid::IconTitleMessageCentered,
        (true, true, true) => LayoutGrid::IconTitleMessageLeading,
        (true, true, false) => LayoutGrid::IconTitleCentered,
        (false, true, false) => LayoutGrid::Title,
        (false, true, true) => LayoutGrid::TitleMessage,
        // Without a title nothing above matches; keep the icon centered.
        (_, false, _) => LayoutGrid::IconTitleCentered,
    }
}

/// Position, alignment and line limit of a label.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LabelFrame {
    pub frame: Rectangle,
    pub alignment: TextAlignment,
    pub max_lines: u16,
}

/// Result of a layout pass, in the indicator's own coordinate space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Arrangement {
    pub grid: LayoutGrid,
    pub bounds: Size,
    /// Half the height: the pill is a capsule.
    pub corner_radius: f32,
    /// Background surface; fills the bounds exactly.
    pub background: Rectangle,
    pub icon: Option<Rectangle>,
    pub title: Option<LabelFrame>,
    pub subtitle: Option<LabelFrame>,
}

/// Places the indicator's elements inside `bounds`.
pub struct Arranger<'a> {
    content: &'a IndicatorContent,
    measure: &'a dyn TextMeasure,
    direction: TextDirection,
    bounds: Size,
}

impl<'a> Arranger<'a> {
    pub fn new(
        content: &'a IndicatorContent,
        measure: &'a dyn TextMeasure,
        direction: TextDirection,
        bounds: Size,
    ) -> Self {
        Self {
            content,
            measure,
            direction,
            bounds,
        }
    }

    /// Icon frame: at the left margin, vertically centered.
    fn icon_frame(&self) -> Option<Rectangle> {
        self.content.icon()?;
        let metrics = self.content.metrics();
        let size = metrics.icon_size;
        Some(Rectangle::new(
            Point::new(metrics.margins.left, (self.bounds.height - size.height) / 2.0),
            size,
        ))
    }

    fn icon_right_edge(&self) -> Option<f32> {
        self.icon_frame().map(|frame| frame.x + frame.width)
    }

    /// Width available to text centered between symmetric icon-sized margins.
    #[must_use]
    pub fn compact_width(&self) -> f32 {
        let metrics = self.content.metrics();
        let width = match self.icon_right_edge() {
            Some(right_edge) => {
                self.bounds.width - 2.0 * (right_edge + metrics.title_icon_spacing)
            }
            None => self.bounds.width - metrics.margins.left - metrics.margins.right,
        };
        width.max(0.0)
    }

    /// Width available to text from the icon to the right margin.
    #[must_use]
    pub fn full_width(&self) -> f32 {
        let metrics = self.content.metrics();
        match self.icon_right_edge() {
            Some(right_edge) => (self.bounds.width
                - right_edge
                - metrics.title_icon_spacing
                - metrics.margins.right)
                .max(0.0),
            None => self.compact_width(),
        }
    }

    /// Whether the title or subtitle, on a single line, does not fit the compact width.
    #[must_use]
    pub fn overflows_compact_width(&self) -> bool {
        let compact = self.compact_width();
        let overflows = |text: &str| self.measure.natural_width(text) >= compact;
        overflows(self.content.title()) || self.content.subtitle().is_some_and(overflows)
    }

    #[must_use]
    pub fn select(&self) -> LayoutGrid {
        select_layout(self.content.flags(), self.overflows_compact_width())
    }

    /// Runs a full layout pass with the automatically selected grid.
    #[must_use]
    pub fn arrange(&self) -> Arrangement {
        self.arrange_with(self.select())
    }

    /// Runs a layout pass with a specific grid.
    #[must_use]
    pub fn arrange_with(&self, grid: LayoutGrid) -> Arrangement {
        let icon = if grid.shows_icon() {
            self.icon_frame()
        } else {
            None
        };

        let max_lines = grid.title_max_lines();
        let mut title = match grid {
            LayoutGrid::IconTitleMessageCentered | LayoutGrid::IconTitleCentered => {
                self.title_centered(self.compact_width(), max_lines)
            }
            LayoutGrid::IconTitleMessageLeading | LayoutGrid::IconTitleLeading => {
                self.title_leading(max_lines)
            }
            LayoutGrid::Title | LayoutGrid::TitleMessage => {
                self.title_centered(self.full_width(), max_lines)
            }
        };

        let mut subtitle = if grid.shows_subtitle() {
            self.subtitle_below(&title)
        } else {
            None
        };

        self.stack_vertically(&mut title, subtitle.as_mut());

        Arrangement {
            grid,
            bounds: self.bounds,
            corner_radius: self.bounds.height / 2.0,
            background: Rectangle::new(Point::ORIGIN, self.bounds),
            icon,
            title: Some(title),
            subtitle,
        }
    }

    fn title_height(&self, width: f32, max_lines: u16) -> f32 {
        self.measure.wrapped_height(
            self.content.title(),
            width,
            max_lines,
            typography::TITLE_LINE_SPACING,
        )
    }

    fn title_centered(&self, width: f32, max_lines: u16) -> LabelFrame {
        LabelFrame {
            frame: Rectangle {
                x: (self.bounds.width - width) / 2.0,
                y: 0.0,
                width,
                height: self.title_height(width, max_lines),
            },
            alignment: TextAlignment::Center,
            max_lines,
        }
    }

    fn title_leading(&self, max_lines: u16) -> LabelFrame {
        let metrics = self.content.metrics();
        let width = self.full_width();
        let x = match self.icon_frame() {
            Some(icon) => metrics.margins.left + icon.width + metrics.title_icon_spacing,
            None => metrics.margins.left,
        };
        let alignment = if self.direction.is_right_to_left() {
            TextAlignment::Right
        } else {
            TextAlignment::Left
        };
        LabelFrame {
            frame: Rectangle {
                x,
                y: 0.0,
                width,
                height: self.title_height(width, max_lines),
            },
            alignment,
            max_lines,
        }
    }

    /// Subtitle shares the title's horizontal origin, width and alignment.
    fn subtitle_below(&self, title: &LabelFrame) -> Option<LabelFrame> {
        let text = self.content.subtitle()?;
        let width = title.frame.width;
        Some(LabelFrame {
            frame: Rectangle {
                x: title.frame.x,
                y: 0.0,
                width,
                height: self.measure.wrapped_height(
                    text,
                    width,
                    1,
                    typography::SUBTITLE_LINE_SPACING,
                ),
            },
            alignment: title.alignment,
            max_lines: 1,
        })
    }

    fn stack_vertically(&self, title: &mut LabelFrame, subtitle: Option<&mut LabelFrame>) {
        let spacing = self.content.metrics().inter_title_spacing;
        match subtitle {
            Some(subtitle) => {
                let total = title.frame.height + subtitle.frame.height + spacing;
                title.frame.y = (self.bounds.height - total) / 2.0;
                subtitle.frame.y = title.frame.y + title.frame.height + spacing;
            }
            None => {
                title.frame.y = (self.bounds.height - title.frame.height) / 2.0;
            }
        }
    }
}
