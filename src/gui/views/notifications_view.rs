//! Notifications page

use crate::gui::app::Message;
use crate::gui::theme;
use crate::notifications::{Notification, NotificationFilter, NotificationKind, NotificationStore};
use chrono::{DateTime, Utc};
use iced::widget::{button, column, container, pick_list, row, scrollable, text, Space};
use iced::{Alignment, Color, Element, Length};

pub fn kind_color(kind: NotificationKind) -> Color {
    match kind {
        NotificationKind::Info => theme::INFO,
        NotificationKind::Success => theme::SUCCESS,
        NotificationKind::Warning => theme::WARNING,
        NotificationKind::Error => theme::DANGER,
    }
}

/// "just now", "5m ago", "3h ago", "2d ago"
pub fn relative_time(timestamp: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let seconds = (now - timestamp).num_seconds().max(0);
    match seconds {
        0..=59 => "just now".to_string(),
        60..=3_599 => format!("{}m ago", seconds / 60),
        3_600..=86_399 => format!("{}h ago", seconds / 3_600),
        _ => format!("{}d ago", seconds / 86_400),
    }
}

fn notification_row(notification: &Notification, now: DateTime<Utc>) -> Element<'static, Message> {
    let id = notification.id;
    let title_color = if notification.is_read {
        theme::TEXT_SECONDARY
    } else {
        theme::TEXT_PRIMARY
    };

    let mut actions = row![].spacing(6);
    if !notification.is_read {
        actions = actions.push(
            button(text("Mark read").size(12))
                .on_press(Message::MarkNotificationRead(id))
                .padding([4, 10])
                .style(iced::theme::Button::Custom(Box::new(theme::SecondaryButton))),
        );
    }
    actions = actions.push(
        button(text("Delete").size(12))
            .on_press(Message::DeleteNotification(id))
            .padding([4, 10])
            .style(iced::theme::Button::Custom(Box::new(theme::DestructiveButton))),
    );

    container(
        row![
            container(text(notification.kind.to_string()).size(11))
                .padding([2, 8])
                .width(Length::Fixed(80.0))
                .center_x()
                .style(iced::theme::Container::Custom(Box::new(
                    theme::BadgeContainer(kind_color(notification.kind)),
                ))),
            column![
                text(&notification.title).size(14).style(title_color),
                text(&notification.message).size(13).style(theme::TEXT_SECONDARY),
                text(format!(
                    "{} · {}",
                    notification.source,
                    relative_time(notification.timestamp, now)
                ))
                .size(11)
                .style(theme::TEXT_SECONDARY),
            ]
            .spacing(4)
            .width(Length::Fill),
            actions,
        ]
        .spacing(12)
        .align_items(Alignment::Center),
    )
    .padding(12)
    .width(Length::Fill)
    .style(iced::theme::Container::Custom(Box::new(theme::CardContainer)))
    .into()
}

pub fn notifications_view(
    notifications: &NotificationStore,
    filter: NotificationFilter,
) -> Element<'static, Message> {
    let unread = notifications.unread_count();
    let now = Utc::now();

    let header = row![
        column![
            text("Notifications").size(28).style(theme::TEXT_PRIMARY),
            text(format!("{} unread", unread))
                .size(14)
                .style(theme::TEXT_SECONDARY),
        ]
        .spacing(4),
        Space::with_width(Length::Fill),
        pick_list(
            NotificationFilter::OPTIONS.to_vec(),
            Some(filter),
            Message::NotificationFilterChanged,
        )
        .text_size(13)
        .padding([6, 10]),
        button(text("Mark all read").size(14))
            .on_press_maybe((unread > 0).then_some(Message::MarkAllNotificationsRead))
            .padding([8, 16])
            .style(iced::theme::Button::Custom(Box::new(theme::SecondaryButton))),
    ]
    .spacing(12)
    .align_items(Alignment::Center);

    let visible = notifications.filtered(filter);

    let list: Element<'static, Message> = if visible.is_empty() {
        container(
            text("No notifications")
                .size(16)
                .style(theme::TEXT_SECONDARY),
        )
        .width(Length::Fill)
        .height(Length::Fill)
        .center_x()
        .center_y()
        .into()
    } else {
        scrollable(
            visible
                .into_iter()
                .fold(column![].spacing(8), |list, n| {
                    list.push(notification_row(&n, now))
                })
                .padding([0, 16, 16, 0]),
        )
        .height(Length::Fill)
        .style(iced::theme::Scrollable::Custom(Box::new(theme::ScrollableStyle)))
        .into()
    };

    column![header, list].spacing(24).into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn relative_time_buckets() {
        let now = Utc::now();
        assert_eq!(relative_time(now, now), "just now");
        assert_eq!(relative_time(now - Duration::minutes(5), now), "5m ago");
        assert_eq!(relative_time(now - Duration::hours(3), now), "3h ago");
        assert_eq!(relative_time(now - Duration::days(2), now), "2d ago");
        // Clock skew never yields a negative age
        assert_eq!(relative_time(now + Duration::minutes(1), now), "just now");
    }
}
