// SPDX-License-Identifier: MPL-2.0
//! Canvas program that draws an indicator at a given instant.

use super::controller::Indicator;
use super::icon::{IconShape, StrokeShape};
use super::layout::LabelFrame;
use super::text::{TextAlignment, TextMeasure};
use crate::ui::design_tokens::{opacity, palette, shadow, stroke, typography};
use iced::font::Weight;
use iced::widget::canvas::{self, Frame, Geometry, Path, Stroke};
use iced::widget::text;
use iced::{mouse, Color, Font, Point, Rectangle, Renderer, Size, Theme, Vector};
use std::time::Instant;

/// Number of translucent layers used to fake the blurred shadow.
const SHADOW_LAYERS: u8 = 4;

/// Draws `indicator` as it looks at `now`, in anchor coordinates.
pub struct IndicatorCanvas<'a> {
    indicator: &'a Indicator,
    now: Instant,
}

impl<'a> IndicatorCanvas<'a> {
    #[must_use]
    pub fn new(indicator: &'a Indicator, now: Instant) -> Self {
        Self { indicator, now }
    }

    fn draw_shadow(frame: &mut Frame, bounds: Rectangle, radius: f32) {
        let spec = shadow::INDICATOR;
        let step = spec.blur_radius / (2.0 * f32::from(SHADOW_LAYERS));
        for layer in 1..=SHADOW_LAYERS {
            let spread = step * f32::from(layer);
            let path = Path::rounded_rectangle(
                Point::new(
                    bounds.x + spec.offset.x - spread,
                    bounds.y + spec.offset.y - spread,
                ),
                Size::new(bounds.width + 2.0 * spread, bounds.height + 2.0 * spread),
                (radius + spread).into(),
            );
            frame.fill(
                &path,
                Color {
                    a: spec.color.a / f32::from(SHADOW_LAYERS * 2),
                    ..spec.color
                },
            );
        }
    }

    fn draw_icon(frame: &mut Frame, area: Rectangle, shape: IconShape) {
        match shape {
            IconShape::Glyph(glyph) => {
                frame.fill_text(canvas::Text {
                    content: glyph.to_string(),
                    position: Point::new(area.x, area.y),
                    color: Color {
                        a: opacity::TITLE,
                        ..palette::LABEL
                    },
                    size: area.height.into(),
                    ..canvas::Text::default()
                });
            }
            IconShape::Stroke {
                shape,
                progress,
                color,
            } => {
                let mut builder = canvas::path::Builder::new();
                for [start, end] in visible_segments(shape, progress) {
                    builder.move_to(to_area(area, start));
                    builder.line_to(to_area(area, end));
                }
                frame.stroke(
                    &builder.build(),
                    Stroke::default()
                        .with_width(stroke::ICON)
                        .with_color(color)
                        .with_line_cap(canvas::LineCap::Round),
                );
            }
        }
    }

    fn draw_label(
        &self,
        frame: &mut Frame,
        origin: Vector,
        text: &str,
        label: &LabelFrame,
        line_spacing: f32,
        alpha: f32,
    ) {
        let measure = self.indicator.measure();
        let step = measure.line_height() + line_spacing;
        let x = anchor_x(label);
        let lines = measure.fit_lines(text, label.frame.width, label.max_lines);
        for (index, line) in lines.into_iter().enumerate() {
            #[allow(clippy::cast_precision_loss)]
            let y = label.frame.y + index as f32 * step;
            frame.fill_text(canvas::Text {
                content: line,
                position: Point::new(x, y) + origin,
                max_width: label.frame.width,
                color: Color {
                    a: alpha,
                    ..palette::LABEL
                },
                size: typography::FOOTNOTE.into(),
                font: Font {
                    weight: Weight::Semibold,
                    ..Font::DEFAULT
                },
                align_x: text_alignment(label.alignment),
                ..canvas::Text::default()
            });
        }
    }
}

impl<Message> canvas::Program<Message> for IndicatorCanvas<'_> {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());

        if !self.indicator.is_active() {
            return vec![frame.into_geometry()];
        }
        let (Some(pill), Some(arrangement)) = (
            self.indicator.frame(self.now),
            self.indicator.arrangement(),
        ) else {
            return vec![frame.into_geometry()];
        };
        let origin = Vector::new(pill.x, pill.y);

        Self::draw_shadow(&mut frame, pill, arrangement.corner_radius);
        let background = Path::rounded_rectangle(
            Point::new(pill.x, pill.y),
            arrangement.background.size(),
            arrangement.corner_radius.into(),
        );
        frame.fill(
            &background,
            Color {
                a: opacity::SURFACE,
                ..palette::SURFACE
            },
        );

        if let (Some(area), Some(shape)) = (arrangement.icon, self.indicator.icon_shape(self.now)) {
            Self::draw_icon(&mut frame, area + origin, shape);
        }

        let content = self.indicator.content();
        if let Some(title) = &arrangement.title {
            self.draw_label(
                &mut frame,
                origin,
                content.title(),
                title,
                typography::TITLE_LINE_SPACING,
                opacity::TITLE,
            );
        }
        if let (Some(subtitle), Some(text)) = (&arrangement.subtitle, content.subtitle()) {
            self.draw_label(
                &mut frame,
                origin,
                text,
                subtitle,
                typography::SUBTITLE_LINE_SPACING,
                opacity::SUBTITLE,
            );
        }

        vec![frame.into_geometry()]
    }
}

/// X the text is anchored at; the renderer aligns each line around it.
fn anchor_x(label: &LabelFrame) -> f32 {
    match label.alignment {
        TextAlignment::Left => label.frame.x,
        TextAlignment::Center => label.frame.center_x(),
        TextAlignment::Right => label.frame.x + label.frame.width,
    }
}

fn text_alignment(alignment: TextAlignment) -> text::Alignment {
    match alignment {
        TextAlignment::Left => text::Alignment::Left,
        TextAlignment::Center => text::Alignment::Center,
        TextAlignment::Right => text::Alignment::Right,
    }
}

fn to_area(area: Rectangle, (x, y): (f32, f32)) -> Point {
    Point::new(area.x + x * area.width, area.y + y * area.height)
}

/// Segments drawn so far; strokes are drawn one after another.
fn visible_segments(shape: StrokeShape, progress: f32) -> Vec<[(f32, f32); 2]> {
    let segments = shape.segments();
    #[allow(clippy::cast_precision_loss)]
    let drawn = progress.clamp(0.0, 1.0) * segments.len() as f32;
    segments
        .iter()
        .enumerate()
        .filter_map(|(index, &[start, end])| {
            #[allow(clippy::cast_precision_loss)]
            let fraction = (drawn - index as f32).clamp(0.0, 1.0);
            (fraction > 0.0).then(|| {
                let tip = (
                    start.0 + (end.0 - start.0) * fraction,
                    start.1 + (end.1 - start.1) * fraction,
                );
                [start, tip]
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::indicator::text::EstimatedTextMetrics;

    fn label(alignment: TextAlignment) -> LabelFrame {
        LabelFrame {
            frame: Rectangle::new(Point::new(10.0, 5.0), Size::new(100.0, 16.0)),
            alignment,
            max_lines: 1,
        }
    }

    #[test]
    fn anchor_follows_alignment() {
        assert_eq!(anchor_x(&label(TextAlignment::Left)), 10.0);
        assert_eq!(anchor_x(&label(TextAlignment::Center)), 60.0);
        assert_eq!(anchor_x(&label(TextAlignment::Right)), 110.0);
    }

    #[test]
    fn alignment_maps_to_renderer_alignment() {
        assert_eq!(text_alignment(TextAlignment::Left), text::Alignment::Left);
        assert_eq!(text_alignment(TextAlignment::Center), text::Alignment::Center);
        assert_eq!(text_alignment(TextAlignment::Right), text::Alignment::Right);
    }

    #[test]
    fn narrow_subtitle_draws_one_truncated_line() {
        let metrics = EstimatedTextMetrics::default();
        let subtitle = LabelFrame {
            frame: Rectangle::new(Point::new(49.0, 25.0), Size::new(90.0, 15.6)),
            alignment: TextAlignment::Left,
            max_lines: 1,
        };
        let lines = metrics.fit_lines(
            "All changes stored",
            subtitle.frame.width,
            subtitle.max_lines,
        );

        assert_eq!(lines.len(), 1);
        assert!(lines[0].ends_with('\u{2026}'));
        assert!(metrics.natural_width(&lines[0]) <= subtitle.frame.width);
    }

    #[test]
    fn no_segments_before_animation() {
        assert!(visible_segments(StrokeShape::Check, 0.0).is_empty());
    }

    #[test]
    fn segments_draw_in_sequence() {
        let half = visible_segments(StrokeShape::Cross, 0.5);
        assert_eq!(half.len(), 1);
        assert_eq!(half[0], [(0.0, 0.0), (1.0, 1.0)]);

        let quarter = visible_segments(StrokeShape::Cross, 0.25);
        assert_eq!(quarter[0], [(0.0, 0.0), (0.5, 0.5)]);

        assert_eq!(visible_segments(StrokeShape::Check, 1.0).len(), 2);
    }

    #[test]
    fn to_area_maps_unit_square() {
        let area = Rectangle::new(Point::new(19.0, 18.0), Size::new(14.0, 14.0));
        assert_eq!(to_area(area, (0.0, 0.0)), Point::new(19.0, 18.0));
        assert_eq!(to_area(area, (1.0, 1.0)), Point::new(33.0, 32.0));
    }
}
