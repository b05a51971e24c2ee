// SPDX-License-Identifier: MPL-2.0
//! Demo application hosting an indicator in an Iced window.
//!
//! The `App` owns the anchor surface, presents indicators from buttons,
//! forwards the mouse as drag input and ticks the indicator while it is on
//! screen.

mod message;
mod subscription;
mod surface;
mod view;

pub use message::{DemoKind, Flags, Message};
pub use surface::{DemoSurface, LogHaptics};

use crate::config::{self, Config};
use crate::i18n::{resolve_direction, TextDirection};
use crate::ui::indicator::{
    AnchorHandle, DragEvent, DragPhase, IconPreset, Indicator, PresentOptions,
};
use iced::{window, Element, Point, Subscription, Task, Theme, Vector};
use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::Rc;
use std::time::Instant;

pub const WINDOW_DEFAULT_HEIGHT: u32 = 480;
pub const WINDOW_DEFAULT_WIDTH: u32 = 420;
pub const MIN_WINDOW_HEIGHT: u32 = 240;
pub const MIN_WINDOW_WIDTH: u32 = 160;

/// Safe-area inset simulated when none is given on the command line.
pub const DEFAULT_SAFE_AREA: f32 = 24.0;

/// Root Iced application state.
pub struct App {
    config: Config,
    direction: TextDirection,
    surface: Rc<RefCell<DemoSurface>>,
    indicator: Option<Indicator>,
    /// Cursor position when the current drag started.
    drag_origin: Option<Point>,
    cursor: Point,
    dismiss_by_drag: bool,
    /// Number of indicators that finished.
    completed: Rc<Cell<u32>>,
    now: Instant,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("direction", &self.direction)
            .field("indicator", &self.indicator.as_ref().map(Indicator::phase))
            .field("completed", &self.completed.get())
            .finish()
    }
}

/// Builds the window settings
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    // iced requires an Fn boot closure; flags are consumed on the first call.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let config = config::load().unwrap_or_else(|err| {
            tracing::warn!(%err, "failed to load settings, using defaults");
            Config::default()
        });
        (Self::with_config(flags, config), Task::none())
    }

    /// Builds the application state from already loaded settings.
    #[must_use]
    pub fn with_config(flags: Flags, config: Config) -> Self {
        let direction = resolve_direction(flags.lang.as_deref(), &config);
        let surface = DemoSurface::new(
            WINDOW_DEFAULT_WIDTH as f32,
            flags.safe_area.unwrap_or(DEFAULT_SAFE_AREA),
        );
        let dismiss_by_drag = config.indicator.dismiss_by_drag();
        Self {
            config,
            direction,
            surface: Rc::new(RefCell::new(surface)),
            indicator: None,
            drag_origin: None,
            cursor: Point::ORIGIN,
            dismiss_by_drag,
            completed: Rc::new(Cell::new(0)),
            now: Instant::now(),
        }
    }

    fn title(&self) -> String {
        String::from("Iced Indicator")
    }

    fn theme(&self) -> Theme {
        Theme::Light
    }

    fn subscription(&self) -> Subscription<Message> {
        let has_indicator = self
            .indicator
            .as_ref()
            .is_some_and(Indicator::is_active);
        Subscription::batch([
            subscription::create_event_subscription(),
            subscription::create_tick_subscription(has_indicator),
        ])
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        let now = Instant::now();
        self.handle(message, now);
        Task::none()
    }

    /// Applies `message` at `now`.
    pub fn handle(&mut self, message: Message, now: Instant) {
        self.now = now;
        match message {
            Message::Present(kind) => self.present(kind, now),
            Message::Dismiss => {
                if let Some(indicator) = &mut self.indicator {
                    indicator.dismiss(now);
                }
            }
            Message::ToggleDismissByDrag => {
                self.dismiss_by_drag = !self.dismiss_by_drag;
                if let Some(indicator) = &mut self.indicator {
                    indicator.set_dismiss_by_drag(self.dismiss_by_drag, now);
                }
                if !self.dismiss_by_drag {
                    self.drag_origin = None;
                }
            }
            Message::Tick(_) => {
                if let Some(indicator) = &mut self.indicator {
                    indicator.tick(now);
                }
            }
            Message::PointerPressed => self.begin_drag(now),
            Message::PointerMoved(position) => {
                self.cursor = position;
                self.forward_drag(DragPhase::Changed, now);
            }
            Message::PointerReleased => {
                self.forward_drag(DragPhase::Ended, now);
                self.drag_origin = None;
            }
            Message::PointerLeft => {
                self.forward_drag(DragPhase::Cancelled, now);
                self.drag_origin = None;
            }
            Message::WindowResized(size) => {
                self.surface.borrow_mut().width = size.width;
                if let Some(indicator) = &mut self.indicator {
                    if indicator.is_active() {
                        indicator.relayout();
                    }
                }
            }
        }
    }

    fn present(&mut self, kind: DemoKind, now: Instant) {
        if self.indicator.as_ref().is_some_and(Indicator::is_active) {
            tracing::debug!(?kind, "indicator already on screen");
            return;
        }

        let mut indicator = match kind {
            DemoKind::Done => Indicator::with_preset(
                "Saved",
                Some("All changes stored".to_string()),
                IconPreset::Done,
            ),
            DemoKind::Error => Indicator::with_preset(
                "Failed",
                Some("Try again later".to_string()),
                IconPreset::Error,
            ),
            DemoKind::Message => Indicator::message("Copied to clipboard", None),
        };
        indicator.set_anchor(AnchorHandle::new(&self.surface));
        indicator.set_haptics(LogHaptics);
        indicator.set_text_direction(self.direction);
        indicator.configure(&self.config.indicator, now);
        indicator.set_dismiss_by_drag(self.dismiss_by_drag, now);

        let completed = Rc::clone(&self.completed);
        indicator.present(
            now,
            PresentOptions::from(&self.config.indicator),
            Some(Box::new(move || completed.set(completed.get() + 1))),
        );
        self.indicator = Some(indicator);
    }

    fn begin_drag(&mut self, now: Instant) {
        let Some(indicator) = &mut self.indicator else {
            return;
        };
        let hit = indicator
            .frame(now)
            .is_some_and(|frame| frame.contains(self.cursor));
        if hit && indicator.dismiss_by_drag() {
            self.drag_origin = Some(self.cursor);
            indicator.handle_drag(DragEvent::new(DragPhase::Began, Vector::ZERO), now);
        }
    }

    fn forward_drag(&mut self, phase: DragPhase, now: Instant) {
        let (Some(origin), Some(indicator)) = (self.drag_origin, &mut self.indicator) else {
            return;
        };
        let translation = self.cursor - origin;
        indicator.handle_drag(DragEvent::new(phase, translation), now);
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            indicator: self.indicator.as_ref(),
            now: self.now,
            dismiss_by_drag: self.dismiss_by_drag,
            completed: self.completed.get(),
        })
    }

    /// Number of indicators that completed.
    #[must_use]
    pub fn completed(&self) -> u32 {
        self.completed.get()
    }

    #[must_use]
    pub fn indicator(&self) -> Option<&Indicator> {
        self.indicator.as_ref()
    }

    #[must_use]
    pub fn surface(&self) -> &Rc<RefCell<DemoSurface>> {
        &self.surface
    }
}
