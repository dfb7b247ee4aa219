//! Navigation sidebar

use crate::gui::app::{Message, View};
use crate::gui::components::status_badge::status_dot;
use crate::gui::theme;
use crate::registry::Component;
use iced::widget::{button, column, container, row, scrollable, text, Space};
use iced::{Alignment, Element, Length};

pub const SIDEBAR_WIDTH: f32 = 240.0;

fn nav_style(active: bool) -> iced::theme::Button {
    iced::theme::Button::Custom(Box::new(if active {
        theme::SidebarButtonStyle::Active
    } else {
        theme::SidebarButtonStyle::Inactive
    }))
}

fn section_label(label: &str) -> Element<'static, Message> {
    container(text(label.to_uppercase()).size(11).style(theme::TEXT_SECONDARY))
        .padding([12, 12, 4, 12])
        .into()
}

/// Badge text for the unread count; large counts are capped
pub fn unread_label(unread: usize) -> Option<String> {
    match unread {
        0 => None,
        1..=99 => Some(unread.to_string()),
        _ => Some("99+".to_string()),
    }
}

pub fn sidebar(
    current: &View,
    components: &[Component],
    unread: usize,
) -> Element<'static, Message> {
    let mut notifications_label = row![text("Notifications").size(14)].align_items(Alignment::Center);
    if let Some(badge) = unread_label(unread) {
        notifications_label = notifications_label.push(Space::with_width(Length::Fill)).push(
            container(text(badge).size(11))
                .padding([1, 8])
                .style(iced::theme::Container::Custom(Box::new(
                    theme::BadgeContainer(theme::DANGER),
                ))),
        );
    }

    let system = column![
        section_label("System"),
        button(text("Overview").size(14))
            .style(nav_style(*current == View::Overview))
            .width(Length::Fill)
            .padding([8, 12])
            .on_press(Message::Navigate(View::Overview)),
        button(notifications_label)
            .style(nav_style(*current == View::Notifications))
            .width(Length::Fill)
            .padding([8, 12])
            .on_press(Message::Navigate(View::Notifications)),
        button(text("Settings").size(14))
            .style(nav_style(*current == View::Settings))
            .width(Length::Fill)
            .padding([8, 12])
            .on_press(Message::Navigate(View::Settings)),
    ]
    .spacing(2);

    let component_list = components.iter().fold(
        column![section_label("Components")].spacing(2),
        |list, component| {
            let view = View::Component(component.id);
            list.push(
                button(
                    row![status_dot(component.status), text(&component.display_name).size(14)]
                        .spacing(10)
                        .align_items(Alignment::Center),
                )
                .style(nav_style(*current == view))
                .width(Length::Fill)
                .padding([8, 12])
                .on_press(Message::Navigate(view)),
            )
        },
    );

    container(
        column![
            container(
                column![
                    text("DELoc").size(24).style(theme::TEXT_PRIMARY),
                    text("Big Data Environment Manager")
                        .size(12)
                        .style(theme::TEXT_SECONDARY),
                ]
                .spacing(2)
            )
            .padding([20, 12]),
            system,
            scrollable(component_list)
                .height(Length::Fill)
                .style(iced::theme::Scrollable::Custom(Box::new(
                    theme::ScrollableStyle
                ))),
        ]
        .spacing(8)
        .padding(10),
    )
    .width(Length::Fixed(SIDEBAR_WIDTH))
    .height(Length::Fill)
    .style(iced::theme::Container::Custom(Box::new(
        theme::SidebarContainer,
    )))
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unread_badge_hides_at_zero_and_caps() {
        assert_eq!(unread_label(0), None);
        assert_eq!(unread_label(7).as_deref(), Some("7"));
        assert_eq!(unread_label(120).as_deref(), Some("99+"));
    }
}
