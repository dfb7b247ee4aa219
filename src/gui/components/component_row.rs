//! One row of the overview component table

use crate::gui::app::{Message, View};
use crate::gui::components::status_badge;
use crate::gui::theme;
use crate::metrics::ComponentMetrics;
use crate::registry::Component;
use crate::utils::format_memory_mb;
use iced::widget::{button, container, row, text, toggler};
use iced::{Alignment, Element, Length};

pub const NAME_WIDTH: f32 = 200.0;
pub const STATUS_WIDTH: f32 = 110.0;
pub const CPU_WIDTH: f32 = 70.0;
pub const MEMORY_WIDTH: f32 = 90.0;
pub const UPTIME_WIDTH: f32 = 110.0;

/// CPU and memory text for a component, preferring the newest sample
pub fn usage_labels(
    component: &Component,
    latest: Option<&ComponentMetrics>,
) -> (String, String) {
    if !component.is_running() {
        return ("-".to_string(), "-".to_string());
    }
    match latest {
        Some(sample) => (
            format!("{}%", sample.cpu_usage),
            format_memory_mb(sample.memory_usage_mb),
        ),
        None => (
            component
                .cpu_usage
                .map(|cpu| format!("{}%", cpu))
                .unwrap_or_else(|| "-".to_string()),
            component
                .memory_usage
                .clone()
                .unwrap_or_else(|| "-".to_string()),
        ),
    }
}

pub fn header_row() -> Element<'static, Message> {
    let cell = |label: &'static str, width: f32| {
        text(label)
            .size(12)
            .style(theme::TEXT_SECONDARY)
            .width(Length::Fixed(width))
    };
    row![
        cell("Component", NAME_WIDTH),
        cell("Status", STATUS_WIDTH),
        cell("CPU", CPU_WIDTH),
        cell("Memory", MEMORY_WIDTH),
        cell("Uptime", UPTIME_WIDTH),
        text("Enabled").size(12).style(theme::TEXT_SECONDARY),
    ]
    .spacing(12)
    .padding([0, 12])
    .into()
}

pub fn component_row(
    component: &Component,
    latest: Option<&ComponentMetrics>,
    busy: bool,
) -> Element<'static, Message> {
    let id = component.id;
    let (cpu, memory) = usage_labels(component, latest);

    // Flips are ignored while a start or stop is in flight
    let enable = toggler(None::<String>, component.enabled, move |enabled| {
        if busy {
            Message::Noop
        } else {
            Message::ToggleComponent(id, enabled)
        }
    })
    .width(Length::Shrink);

    let row = row![
        button(text(&component.display_name).size(14))
            .on_press(Message::Navigate(View::Component(id)))
            .padding(0)
            .width(Length::Fixed(NAME_WIDTH))
            .style(iced::theme::Button::Custom(Box::new(theme::LinkButton))),
        container(status_badge::status_badge(component.status)).width(Length::Fixed(STATUS_WIDTH)),
        text(cpu).size(13).width(Length::Fixed(CPU_WIDTH)),
        text(memory).size(13).width(Length::Fixed(MEMORY_WIDTH)),
        text(component.uptime.clone().unwrap_or_else(|| "-".to_string()))
            .size(13)
            .width(Length::Fixed(UPTIME_WIDTH)),
        enable,
    ]
    .spacing(12)
    .align_items(Alignment::Center);

    container(row)
        .padding([10, 12])
        .width(Length::Fill)
        .style(iced::theme::Container::Custom(Box::new(theme::CardContainer)))
        .into()
}
