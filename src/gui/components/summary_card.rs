//! System summary card

use crate::gui::app::Message;
use crate::gui::theme;
use iced::widget::{column, container, progress_bar, row, text, Space};
use iced::{Alignment, Element, Length};

/// Direction of a metric against the previous sample
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Trend {
    Up(f64),
    Down(f64),
    Flat,
}

impl Trend {
    pub fn between(current: f64, previous: Option<f64>) -> Self {
        match previous {
            Some(previous) if current - previous > 0.05 => Trend::Up(current - previous),
            Some(previous) if previous - current > 0.05 => Trend::Down(previous - current),
            _ => Trend::Flat,
        }
    }

    pub fn label(&self, unit: &str) -> String {
        match self {
            Trend::Up(delta) => format!("▲ {} {}", trim_number(*delta), unit),
            Trend::Down(delta) => format!("▼ {} {}", trim_number(*delta), unit),
            Trend::Flat => "steady".to_string(),
        }
    }
}

/// Whole numbers print without decimals, everything else with one
fn trim_number(value: f64) -> String {
    if (value - value.round()).abs() < 0.05 {
        format!("{:.0}", value)
    } else {
        format!("{:.1}", value)
    }
}

pub struct SummaryCard {
    pub title: &'static str,
    pub value: String,
    pub detail: String,
    pub trend: Trend,
    pub unit: &'static str,
    /// Fill level for the usage meter, if the metric has a ceiling
    pub percent: Option<f32>,
}

pub fn summary_card(card: SummaryCard) -> Element<'static, Message> {
    let trend_color = match card.trend {
        Trend::Up(_) => theme::WARNING,
        Trend::Down(_) => theme::SUCCESS,
        Trend::Flat => theme::TEXT_SECONDARY,
    };

    let mut body = column![
        text(card.title).size(13).style(theme::TEXT_SECONDARY),
        row![
            text(card.value).size(26).style(theme::TEXT_PRIMARY),
            Space::with_width(Length::Fill),
            text(card.trend.label(card.unit)).size(12).style(trend_color),
        ]
        .align_items(Alignment::Center),
        text(card.detail).size(12).style(theme::TEXT_SECONDARY),
    ]
    .spacing(6);

    if let Some(percent) = card.percent {
        body = body.push(
            progress_bar(0.0..=100.0, percent)
                .height(Length::Fixed(6.0))
                .style(iced::theme::ProgressBar::Custom(Box::new(theme::UsageBar(
                    percent,
                )))),
        );
    }

    container(body)
        .padding(16)
        .width(Length::Fill)
        .style(iced::theme::Container::Custom(Box::new(theme::CardContainer)))
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trend_compares_with_previous_sample() {
        assert_eq!(Trend::between(40.0, Some(32.0)), Trend::Up(8.0));
        assert_eq!(Trend::between(30.0, Some(32.0)), Trend::Down(2.0));
        assert_eq!(Trend::between(30.0, Some(30.0)), Trend::Flat);
        assert_eq!(Trend::between(30.0, None), Trend::Flat);
    }

    #[test]
    fn trend_labels() {
        assert_eq!(Trend::Up(8.0).label("%"), "▲ 8 %");
        assert_eq!(Trend::Down(0.4).label("GB"), "▼ 0.4 GB");
        assert_eq!(Trend::Flat.label("%"), "steady");
    }
}
