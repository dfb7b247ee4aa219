//! Bar strip for metric history

use crate::gui::app::Message;
use crate::gui::theme;
use iced::widget::{container, row, text, Space};
use iced::{Alignment, Color, Element, Length};

pub const STRIP_HEIGHT: f32 = 64.0;

/// Scale values to bar heights; every bar keeps at least one pixel
pub fn bar_heights(values: &[f64], max: f64, height: f32) -> Vec<f32> {
    let max = if max > 0.0 {
        max
    } else {
        values.iter().cloned().fold(1.0, f64::max)
    };
    values
        .iter()
        .map(|v| ((v.max(0.0) / max).min(1.0) as f32 * height).max(1.0))
        .collect()
}

/// Oldest sample on the left
pub fn history_strip(values: &[f64], max: f64, color: Color) -> Element<'static, Message> {
    if values.is_empty() {
        return container(text("No samples yet").size(12).style(theme::TEXT_SECONDARY))
            .height(Length::Fixed(STRIP_HEIGHT))
            .center_y()
            .into();
    }

    let bars = bar_heights(values, max, STRIP_HEIGHT)
        .into_iter()
        .fold(row![].spacing(2), |strip, h| {
            strip.push(
                container(Space::with_width(Length::Fill))
                    .width(Length::Fill)
                    .height(Length::Fixed(h))
                    .style(iced::theme::Container::Custom(Box::new(
                        theme::FillContainer { color, radius: 2.0 },
                    ))),
            )
        });

    bars.height(Length::Fixed(STRIP_HEIGHT))
        .width(Length::Fill)
        .align_items(Alignment::End)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn heights_scale_against_max() {
        assert_eq!(bar_heights(&[50.0, 100.0, 0.0], 100.0, 64.0), vec![32.0, 64.0, 1.0]);
    }

    #[test]
    fn values_over_max_are_capped() {
        assert_eq!(bar_heights(&[250.0], 100.0, 10.0), vec![10.0]);
    }

    #[test]
    fn zero_max_uses_largest_value() {
        assert_eq!(bar_heights(&[2.0, 4.0], 0.0, 8.0), vec![4.0, 8.0]);
    }
}
