// SPDX-License-Identifier: MPL-2.0
//! Icon presets and the icon widgets they create.
//!
//! An icon widget either stays still or supports being animated once after
//! the indicator starts appearing. The capability is part of the type, so the
//! indicator decides whether to animate by matching on [`IconWidget`].

use crate::config::PRESENT_DISMISS_DURATION_SECS;
use crate::ui::design_tokens::palette;
use iced::Color;
use std::fmt;
use std::time::{Duration, Instant};

/// Named icon shown on the leading side of the indicator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconPreset {
    /// Checkmark.
    Done,
    /// Cross.
    Error,
    /// A single glyph supplied by the caller.
    Custom(char),
}

impl IconPreset {
    /// Creates the widget drawn for this preset.
    #[must_use]
    pub fn create_widget(self) -> IconWidget {
        match self {
            IconPreset::Done => IconWidget::Animated(Box::new(StrokeIcon::new(StrokeShape::Check))),
            IconPreset::Error => IconWidget::Animated(Box::new(StrokeIcon::new(StrokeShape::Cross))),
            IconPreset::Custom(glyph) => IconWidget::Static(GlyphIcon { glyph }),
        }
    }
}

/// Icon widgets that can play an appearance animation.
pub trait AnimatedIcon: fmt::Debug {
    /// Starts the animation at `now`.
    fn animate(&mut self, now: Instant);

    /// Shape to draw at `now`.
    fn shape(&self, now: Instant) -> IconShape;
}

/// The icon view owned by an indicator.
#[derive(Debug)]
pub enum IconWidget {
    Static(GlyphIcon),
    Animated(Box<dyn AnimatedIcon>),
}

impl IconWidget {
    /// Triggers the animation if the widget supports one.
    pub fn animate_if_supported(&mut self, now: Instant) -> bool {
        match self {
            IconWidget::Animated(icon) => {
                icon.animate(now);
                true
            }
            IconWidget::Static(_) => false,
        }
    }

    /// Shape to draw at `now`.
    #[must_use]
    pub fn shape(&self, now: Instant) -> IconShape {
        match self {
            IconWidget::Static(icon) => IconShape::Glyph(icon.glyph),
            IconWidget::Animated(icon) => icon.shape(now),
        }
    }
}

/// Renderer-independent description of what an icon looks like.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum IconShape {
    Glyph(char),
    /// A stroked shape drawn up to `progress` (0.0 to 1.0).
    Stroke {
        shape: StrokeShape,
        progress: f32,
        color: Color,
    },
}

/// A static glyph icon.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GlyphIcon {
    pub glyph: char,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrokeShape {
    Check,
    Cross,
}

impl StrokeShape {
    /// Polyline segments in unit coordinates (0.0 to 1.0 on both axes).
    #[must_use]
    pub fn segments(self) -> &'static [[(f32, f32); 2]] {
        match self {
            StrokeShape::Check => &[[(0.0, 0.55), (0.35, 0.9)], [(0.35, 0.9), (1.0, 0.1)]],
            StrokeShape::Cross => &[[(0.0, 0.0), (1.0, 1.0)], [(1.0, 0.0), (0.0, 1.0)]],
        }
    }

    fn color(self) -> Color {
        match self {
            StrokeShape::Check => palette::SUCCESS_500,
            StrokeShape::Cross => palette::ERROR_500,
        }
    }
}

/// Checkmark or cross that draws its strokes in when animated.
///
/// Before `animate` is called the shape is hidden; afterwards it is drawn in
/// over the same duration as the present animation.
#[derive(Debug, Clone, PartialEq)]
pub struct StrokeIcon {
    shape: StrokeShape,
    animated_at: Option<Instant>,
    draw_duration: Duration,
}

impl StrokeIcon {
    #[must_use]
    pub fn new(shape: StrokeShape) -> Self {
        Self {
            shape,
            animated_at: None,
            draw_duration: Duration::from_secs_f32(PRESENT_DISMISS_DURATION_SECS),
        }
    }

    /// Stroke progress at `now`.
    #[must_use]
    pub fn progress(&self, now: Instant) -> f32 {
        match self.animated_at {
            None => 0.0,
            Some(start) => {
                let elapsed = now.saturating_duration_since(start).as_secs_f32();
                (elapsed / self.draw_duration.as_secs_f32()).clamp(0.0, 1.0)
            }
        }
    }
}

impl AnimatedIcon for StrokeIcon {
    fn animate(&mut self, now: Instant) {
        self.animated_at = Some(now);
    }

    fn shape(&self, now: Instant) -> IconShape {
        IconShape::Stroke {
            shape: self.shape,
            progress: self.progress(now),
            color: self.shape.color(),
        }
    }
}
