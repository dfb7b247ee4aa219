//! Overview page: system summary, CPU history and the component table

use crate::gui::app::Message;
use crate::gui::components::component_row::header_row;
use crate::gui::components::{component_row, history_strip, summary_card, SummaryCard, Trend};
use crate::gui::theme;
use crate::metrics::{MetricsSnapshot, SystemMetrics, SystemSample};
use crate::registry::Component;
use iced::widget::{button, column, container, row, scrollable, text, Space};
use iced::{Alignment, Element, Length};
use std::collections::HashSet;

fn cards(latest: &SystemMetrics, previous: Option<&SystemMetrics>) -> Vec<SummaryCard> {
    vec![
        SummaryCard {
            title: "CPU Usage",
            value: format!("{}%", latest.cpu_usage),
            detail: "All cores".to_string(),
            trend: Trend::between(
                latest.cpu_usage as f64,
                previous.map(|p| p.cpu_usage as f64),
            ),
            unit: "%",
            percent: Some(latest.cpu_usage as f32),
        },
        SummaryCard {
            title: "Memory",
            value: format!("{:.1} GB", latest.memory_used_gb),
            detail: format!("of {:.0} GB", latest.memory_total_gb),
            trend: Trend::between(latest.memory_used_gb, previous.map(|p| p.memory_used_gb)),
            unit: "GB",
            percent: Some(latest.memory_percent() as f32),
        },
        SummaryCard {
            title: "Disk",
            value: format!("{}%", latest.disk_usage),
            detail: format!("of {:.0} GB", latest.disk_total_gb),
            trend: Trend::between(
                latest.disk_usage as f64,
                previous.map(|p| p.disk_usage as f64),
            ),
            unit: "%",
            percent: Some(latest.disk_usage as f32),
        },
        SummaryCard {
            title: "Network I/O",
            value: format!("{} MB/s", latest.network_io_mbps),
            detail: "All interfaces".to_string(),
            trend: Trend::between(
                latest.network_io_mbps as f64,
                previous.map(|p| p.network_io_mbps as f64),
            ),
            unit: "MB/s",
            percent: None,
        },
    ]
}

pub fn overview_view(
    components: &[Component],
    metrics: &MetricsSnapshot,
    busy: &HashSet<u32>,
) -> Element<'static, Message> {
    let latest = metrics
        .latest
        .clone()
        .unwrap_or_else(|| SystemSample::initial().with_id(0));

    let running = components.iter().filter(|c| c.is_running()).count();

    let header = row![
        column![
            text("Overview").size(28).style(theme::TEXT_PRIMARY),
            text(format!(
                "{} of {} components running",
                running,
                components.len()
            ))
            .size(14)
            .style(theme::TEXT_SECONDARY),
        ]
        .spacing(4),
        Space::with_width(Length::Fill),
        button(text("Refresh").size(14))
            .on_press(Message::RefreshComponents)
            .padding([8, 16])
            .style(iced::theme::Button::Custom(Box::new(theme::SecondaryButton))),
    ]
    .align_items(Alignment::Center);

    let summary = cards(&latest, metrics.previous())
        .into_iter()
        .fold(row![].spacing(16), |cards, card| cards.push(summary_card(card)));

    let cpu_history: Vec<f64> = metrics
        .system_history
        .iter()
        .map(|m| m.cpu_usage as f64)
        .collect();
    let history = container(
        column![
            text("CPU History").size(16).style(theme::TEXT_PRIMARY),
            history_strip(&cpu_history, 100.0, theme::ACCENT),
        ]
        .spacing(12),
    )
    .padding(16)
    .width(Length::Fill)
    .style(iced::theme::Container::Custom(Box::new(theme::CardContainer)));

    let table = components.iter().fold(
        column![
            text("Components").size(16).style(theme::TEXT_PRIMARY),
            header_row()
        ]
        .spacing(8),
        |table, component| {
            let latest = metrics.component(component.id).last();
            table.push(component_row(component, latest, busy.contains(&component.id)))
        },
    );

    scrollable(
        column![header, summary, history, table]
            .spacing(24)
            .padding([0, 16, 16, 0]),
    )
    .height(Length::Fill)
    .style(iced::theme::Scrollable::Custom(Box::new(theme::ScrollableStyle)))
    .into()
}
