//! Component detail page

use crate::gui::app::{Message, View};
use crate::gui::components::{history_strip, status_badge};
use crate::gui::theme;
use crate::metrics::ComponentMetrics;
use crate::registry::Component;
use iced::widget::{button, column, container, row, scrollable, text, toggler, Space};
use iced::{Alignment, Element, Font, Length};

/// Log panel state for the selected component
#[derive(Debug, Clone, Default, PartialEq)]
pub enum LogState {
    #[default]
    Idle,
    Loading,
    Loaded(Vec<String>),
    Failed(String),
}

impl LogState {
    pub fn lines(&self) -> Option<&[String]> {
        match self {
            LogState::Loaded(lines) => Some(lines),
            _ => None,
        }
    }
}

fn join_or_dash(items: &[String]) -> String {
    if items.is_empty() {
        "-".to_string()
    } else {
        items.join(", ")
    }
}

/// Label and value pairs for the details grid
pub fn detail_rows(component: &Component) -> Vec<(&'static str, String)> {
    let configuration = match &component.configuration {
        serde_json::Value::Object(map) if map.is_empty() => "-".to_string(),
        serde_json::Value::Null => "-".to_string(),
        other => other.to_string(),
    };

    vec![
        ("Image", component.image.clone()),
        (
            "Container ID",
            component.short_container_id().unwrap_or("-").to_string(),
        ),
        ("Ports", join_or_dash(&component.ports)),
        ("Volumes", join_or_dash(&component.volumes)),
        (
            "Network",
            component.network_name.clone().unwrap_or_else(|| "-".to_string()),
        ),
        (
            "Created",
            component
                .created_at
                .map(|at| at.format("%Y-%m-%d %H:%M").to_string())
                .unwrap_or_else(|| "-".to_string()),
        ),
        ("Configuration", configuration),
    ]
}

fn card<'a>(content: impl Into<Element<'a, Message>>) -> Element<'a, Message> {
    container(content)
        .padding(16)
        .width(Length::Fill)
        .style(iced::theme::Container::Custom(Box::new(theme::CardContainer)))
        .into()
}

pub fn component_view(
    component: &Component,
    history: &[ComponentMetrics],
    logs: &LogState,
    busy: bool,
) -> Element<'static, Message> {
    let id = component.id;

    let header = row![
        button(text("← Back").size(14))
            .on_press(Message::Navigate(View::Overview))
            .padding([8, 12])
            .style(iced::theme::Button::Custom(Box::new(theme::SecondaryButton))),
        column![
            row![
                text(&component.display_name).size(26).style(theme::TEXT_PRIMARY),
                status_badge(component.status),
            ]
            .spacing(12)
            .align_items(Alignment::Center),
            text(&component.description).size(13).style(theme::TEXT_SECONDARY),
        ]
        .spacing(4),
        Space::with_width(Length::Fill),
        toggler(
            Some("Enabled".to_string()),
            component.enabled,
            move |enabled| if busy {
                Message::Noop
            } else {
                Message::ToggleComponent(id, enabled)
            }
        )
        .width(Length::Shrink),
        button(text("Restart").size(14))
            .on_press_maybe((!busy).then_some(Message::RestartComponent(id)))
            .padding([8, 16])
            .style(iced::theme::Button::Custom(Box::new(theme::SecondaryButton))),
        button(text("Open Web UI").size(14))
            .on_press_maybe(component.web_url().map(Message::OpenWebUi))
            .padding([8, 16])
            .style(iced::theme::Button::Custom(Box::new(theme::PrimaryButton))),
    ]
    .spacing(12)
    .align_items(Alignment::Center);

    let details = detail_rows(component).into_iter().fold(
        column![text("Details").size(16).style(theme::TEXT_PRIMARY)].spacing(8),
        |grid, (label, value)| {
            grid.push(
                row![
                    text(label)
                        .size(13)
                        .style(theme::TEXT_SECONDARY)
                        .width(Length::Fixed(140.0)),
                    text(value).size(13),
                ]
                .spacing(12),
            )
        },
    );

    let cpu: Vec<f64> = history.iter().map(|m| m.cpu_usage as f64).collect();
    let usage = column![
        text("CPU History").size(16).style(theme::TEXT_PRIMARY),
        history_strip(&cpu, 100.0, theme::ACCENT),
    ]
    .spacing(12);

    let log_body: Element<'static, Message> = match logs {
        LogState::Idle | LogState::Loading => text("Loading logs...")
            .size(13)
            .style(theme::TEXT_SECONDARY)
            .into(),
        LogState::Failed(error) => text(error).size(13).style(theme::DANGER).into(),
        LogState::Loaded(lines) if lines.is_empty() => text("No log output")
            .size(13)
            .style(theme::TEXT_SECONDARY)
            .into(),
        LogState::Loaded(lines) => scrollable(
            lines
                .iter()
                .fold(column![].spacing(2), |col, line| {
                    col.push(text(line).size(12).font(Font::MONOSPACE))
                })
                .width(Length::Fill),
        )
        .height(Length::Fixed(280.0))
        .style(iced::theme::Scrollable::Custom(Box::new(theme::ScrollableStyle)))
        .into(),
    };

    let log_panel = column![
        row![
            text("Logs").size(16).style(theme::TEXT_PRIMARY),
            Space::with_width(Length::Fill),
            button(text("Refresh").size(13))
                .on_press(Message::RefreshLogs(id))
                .padding([6, 12])
                .style(iced::theme::Button::Custom(Box::new(theme::SecondaryButton))),
            button(text("Copy").size(13))
                .on_press_maybe(logs.lines().map(|_| Message::CopyLogs))
                .padding([6, 12])
                .style(iced::theme::Button::Custom(Box::new(theme::SecondaryButton))),
        ]
        .spacing(8)
        .align_items(Alignment::Center),
        container(log_body)
            .padding(12)
            .width(Length::Fill)
            .style(iced::theme::Container::Custom(Box::new(theme::LogContainer))),
    ]
    .spacing(12);

    scrollable(
        column![header, card(details), card(usage), card(log_panel)]
            .spacing(20)
            .padding([0, 16, 16, 0]),
    )
    .height(Length::Fill)
    .style(iced::theme::Scrollable::Custom(Box::new(theme::ScrollableStyle)))
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::default_components;

    fn component(name: &str) -> Component {
        default_components()
            .into_iter()
            .find(|c| c.name == name)
            .map(|c| c.into_component(1))
            .unwrap()
    }

    #[test]
    fn details_show_short_container_id_and_ports() {
        let spark = component("spark");
        let rows = detail_rows(&spark);
        let get = |label: &str| {
            rows.iter()
                .find(|(l, _)| *l == label)
                .map(|(_, v)| v.clone())
                .unwrap()
        };
        assert_eq!(get("Container ID"), "8a3dcb7fe49a");
        assert!(get("Ports").starts_with("7077:7077"));
        assert_eq!(get("Network"), "bigdata_network");
    }

    #[test]
    fn missing_values_render_as_dash() {
        let mut hive = component("hive");
        hive.container_id = None;
        hive.volumes.clear();
        let rows = detail_rows(&hive);
        assert!(rows.contains(&("Container ID", "-".to_string())));
        assert!(rows.contains(&("Volumes", "-".to_string())));
    }

    #[test]
    fn only_loaded_logs_can_be_copied() {
        assert!(LogState::Loading.lines().is_none());
        assert!(LogState::Failed("x".into()).lines().is_none());
        assert_eq!(
            LogState::Loaded(vec!["a".into()]).lines(),
            Some(&["a".to_string()][..])
        );
    }
}
