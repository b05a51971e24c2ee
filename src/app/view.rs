// SPDX-License-Identifier: MPL-2.0
//! View rendering for the demo application.

use super::message::DemoKind;
use super::Message;
use crate::ui::indicator::{Indicator, IndicatorCanvas};
use iced::widget::{button, canvas::Canvas, stack, text, Column, Container, Row};
use iced::{alignment, Element, Length};
use std::time::Instant;

/// Context required to render the demo view.
pub struct ViewContext<'a> {
    pub indicator: Option<&'a Indicator>,
    pub now: Instant,
    pub dismiss_by_drag: bool,
    pub completed: u32,
}

/// Renders the controls with the indicator layered on top.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let presets = Row::new()
        .spacing(8.0)
        .push(button(text("Done")).on_press(Message::Present(DemoKind::Done)))
        .push(button(text("Error")).on_press(Message::Present(DemoKind::Error)))
        .push(button(text("Message")).on_press(Message::Present(DemoKind::Message)))
        .push(button(text("Dismiss")).on_press(Message::Dismiss));

    let drag_label = if ctx.dismiss_by_drag {
        "Drag to dismiss: on"
    } else {
        "Drag to dismiss: off"
    };

    let controls = Column::new()
        .spacing(12.0)
        .align_x(alignment::Horizontal::Center)
        .push(presets)
        .push(button(text(drag_label)).on_press(Message::ToggleDismissByDrag))
        .push(text(format!("Completed: {}", ctx.completed)));

    let controls = Container::new(controls)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center);

    match ctx.indicator {
        Some(indicator) => {
            let overlay = Canvas::new(IndicatorCanvas::new(indicator, ctx.now))
                .width(Length::Fill)
                .height(Length::Fill);
            stack![controls, overlay].into()
        }
        None => controls.into(),
    }
}
