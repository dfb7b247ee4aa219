//! Status badge and status dot

use crate::gui::app::Message;
use crate::gui::theme;
use crate::registry::ComponentStatus;
use iced::widget::{container, text, Space};
use iced::{Color, Element};

pub fn status_color(status: ComponentStatus) -> Color {
    match status {
        ComponentStatus::Running => theme::SUCCESS,
        ComponentStatus::Warning => theme::WARNING,
        ComponentStatus::Error => theme::DANGER,
        ComponentStatus::Stopped => theme::GRAY_500,
    }
}

/// Colored pill with the status label
pub fn status_badge(status: ComponentStatus) -> Element<'static, Message> {
    container(text(status.label()).size(12))
        .padding([2, 10])
        .style(iced::theme::Container::Custom(Box::new(
            theme::BadgeContainer(status_color(status)),
        )))
        .into()
}

pub fn status_dot(status: ComponentStatus) -> Element<'static, Message> {
    container(Space::new(8, 8))
        .style(iced::theme::Container::Custom(Box::new(theme::FillContainer {
            color: status_color(status),
            radius: 4.0,
        })))
        .into()
}
