//! Settings page

use crate::gui::app::Message;
use crate::gui::theme;
use crate::utils::{AppSettings, DelocError};
use iced::widget::{button, column, container, row, slider, text, text_input, Space};
use iced::{Alignment, Element, Length};

/// Editable copy of the settings while the page is open
#[derive(Debug, Clone, PartialEq)]
pub struct SettingsDraft {
    pub docker_host: String,
    pub metrics_interval_secs: u32,
    pub history_limit: u32,
    pub cpu_alert_threshold: u32,
    pub memory_alert_threshold: u32,
    pub disk_alert_threshold: u32,
}

impl From<&AppSettings> for SettingsDraft {
    fn from(settings: &AppSettings) -> Self {
        Self {
            docker_host: settings.docker_host.clone().unwrap_or_default(),
            metrics_interval_secs: settings.metrics_interval_secs as u32,
            history_limit: settings.history_limit as u32,
            cpu_alert_threshold: settings.cpu_alert_threshold,
            memory_alert_threshold: settings.memory_alert_threshold,
            disk_alert_threshold: settings.disk_alert_threshold,
        }
    }
}

impl SettingsDraft {
    /// Validate the draft. An empty host selects the simulated driver.
    pub fn to_settings(&self) -> Result<AppSettings, DelocError> {
        let host = self.docker_host.trim();
        if !host.is_empty() && !(host.starts_with("http://") || host.starts_with("https://")) {
            return Err(DelocError::InvalidSetting(
                "Docker host must start with http:// or https://".to_string(),
            ));
        }

        Ok(AppSettings {
            docker_host: (!host.is_empty()).then(|| host.to_string()),
            metrics_interval_secs: self.metrics_interval_secs as u64,
            history_limit: self.history_limit as usize,
            cpu_alert_threshold: self.cpu_alert_threshold,
            memory_alert_threshold: self.memory_alert_threshold,
            disk_alert_threshold: self.disk_alert_threshold,
        }
        .normalized())
    }
}

fn slider_row<'a>(
    label: &str,
    value: u32,
    suffix: &str,
    range: std::ops::RangeInclusive<u32>,
    on_change: impl Fn(u32) -> Message + 'a,
) -> Element<'a, Message> {
    column![
        row![
            text(label).size(14),
            Space::with_width(Length::Fill),
            text(format!("{}{}", value, suffix))
                .size(14)
                .style(theme::TEXT_SECONDARY),
        ],
        slider(range, value, on_change),
    ]
    .spacing(6)
    .into()
}

fn section<'a>(title: &str, body: Element<'a, Message>) -> Element<'a, Message> {
    container(
        column![text(title).size(16).style(theme::TEXT_PRIMARY), body].spacing(12),
    )
    .padding(20)
    .width(Length::Fill)
    .style(iced::theme::Container::Custom(Box::new(theme::CardContainer)))
    .into()
}

pub fn settings_view(
    draft: &SettingsDraft,
    current: &AppSettings,
    dirty: bool,
) -> Element<'static, Message> {
    let driver = section(
        "Container Engine",
        column![
            text("Docker host").size(14),
            text_input("Leave empty to simulate the stack", &draft.docker_host)
                .on_input(Message::DockerHostChanged)
                .padding(10)
                .style(iced::theme::TextInput::Custom(Box::new(theme::InputStyle))),
            text(format!("Currently using: {}", current.driver_label()))
                .size(12)
                .style(theme::TEXT_SECONDARY),
        ]
        .spacing(8)
        .into(),
    );

    let metrics = section(
        "Metrics",
        column![
            slider_row(
                "Collection interval",
                draft.metrics_interval_secs,
                " s",
                AppSettings::MIN_INTERVAL_SECS as u32..=AppSettings::MAX_INTERVAL_SECS as u32,
                Message::IntervalChanged,
            ),
            slider_row(
                "History samples",
                draft.history_limit,
                "",
                1..=AppSettings::MAX_HISTORY as u32,
                Message::HistoryLimitChanged,
            ),
        ]
        .spacing(16)
        .into(),
    );

    let alerts = section(
        "Alert Thresholds",
        column![
            slider_row(
                "CPU",
                draft.cpu_alert_threshold,
                "%",
                1..=100,
                Message::CpuThresholdChanged,
            ),
            slider_row(
                "Memory",
                draft.memory_alert_threshold,
                "%",
                1..=100,
                Message::MemoryThresholdChanged,
            ),
            slider_row(
                "Disk",
                draft.disk_alert_threshold,
                "%",
                1..=100,
                Message::DiskThresholdChanged,
            ),
        ]
        .spacing(16)
        .into(),
    );

    let actions = row![
        Space::with_width(Length::Fill),
        button(text("Save").size(14))
            .on_press_maybe(dirty.then_some(Message::SaveSettings))
            .padding([10, 24])
            .style(iced::theme::Button::Custom(Box::new(theme::PrimaryButton))),
    ]
    .align_items(Alignment::Center);

    column![
        text("Settings").size(28).style(theme::TEXT_PRIMARY),
        driver,
        metrics,
        alerts,
        actions,
    ]
    .spacing(20)
    .max_width(720.0)
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn draft_round_trips_defaults() {
        let settings = AppSettings::default();
        let draft = SettingsDraft::from(&settings);
        assert_eq!(draft.docker_host, "");
        assert_eq!(draft.to_settings().unwrap(), settings);
    }

    #[test]
    fn host_must_be_http() {
        let mut draft = SettingsDraft::from(&AppSettings::default());
        draft.docker_host = "tcp://localhost:2375".to_string();
        assert!(matches!(
            draft.to_settings(),
            Err(DelocError::InvalidSetting(_))
        ));

        draft.docker_host = " http://localhost:2375/ ".to_string();
        let settings = draft.to_settings().unwrap();
        assert_eq!(settings.docker_host.as_deref(), Some("http://localhost:2375"));
        assert!(!settings.is_simulated());
    }
}
