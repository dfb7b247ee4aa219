#![allow(clippy::approx_constant)]

//! Custom theme definitions for the application - Dark Slate Theme

use iced::widget::{button, container, scrollable, text_input};
use iced::{Background, Border, Color, Gradient, Shadow, Theme, Vector};

// --- Dark Slate Palette ---

// Background gradient - deep slate to navy
pub const BACKGROUND_START: Color = Color::from_rgb(0.059, 0.090, 0.165); // Slate 900
pub const BACKGROUND_END: Color = Color::from_rgb(0.067, 0.094, 0.153); // Gray 900

// Surfaces
pub const SLATE_800: Color = Color::from_rgb(0.118, 0.161, 0.231); // Cards
pub const SLATE_700: Color = Color::from_rgb(0.200, 0.255, 0.333); // Borders
pub const SLATE_600: Color = Color::from_rgb(0.278, 0.333, 0.412); // Hover
pub const SLATE_950: Color = Color::from_rgb(0.008, 0.024, 0.090); // Sidebar, logs

// Primary - Blue
pub const BLUE_500: Color = Color::from_rgb(0.231, 0.510, 0.965); // Primary actions
pub const BLUE_400: Color = Color::from_rgb(0.376, 0.647, 0.980); // Hover / focus
pub const BLUE_900: Color = Color::from_rgb(0.118, 0.227, 0.541); // Subtle backgrounds

// Status
pub const GREEN_500: Color = Color::from_rgb(0.133, 0.773, 0.369); // Running
pub const AMBER_500: Color = Color::from_rgb(0.961, 0.620, 0.043); // Warning
pub const RED_500: Color = Color::from_rgb(0.937, 0.267, 0.267); // Error
pub const RED_900: Color = Color::from_rgb(0.498, 0.114, 0.114); // Danger background
pub const GRAY_500: Color = Color::from_rgb(0.420, 0.447, 0.502); // Stopped

// Text
pub const SLATE_100: Color = Color::from_rgb(0.945, 0.961, 0.976); // Primary text
pub const SLATE_300: Color = Color::from_rgb(0.796, 0.835, 0.882); // Secondary text
pub const SLATE_400: Color = Color::from_rgb(0.580, 0.639, 0.722); // Muted text
pub const WHITE: Color = Color::from_rgb(1.0, 1.0, 1.0);

pub const TEXT_PRIMARY: Color = SLATE_100;
pub const TEXT_SECONDARY: Color = SLATE_400;

pub const ACCENT: Color = BLUE_500;
pub const SUCCESS: Color = GREEN_500;
pub const WARNING: Color = AMBER_500;
pub const DANGER: Color = RED_500;
pub const INFO: Color = BLUE_400;

// --- Container Styles ---

pub struct MainGradientContainer;

impl container::StyleSheet for MainGradientContainer {
    type Style = Theme;

    fn appearance(&self, _style: &Self::Style) -> container::Appearance {
        container::Appearance {
            text_color: Some(SLATE_100),
            background: Some(Background::Gradient(Gradient::Linear(
                iced::gradient::Linear::new(iced::Radians(2.356)) // 135 degrees
                    .add_stop(0.0, BACKGROUND_START)
                    .add_stop(1.0, BACKGROUND_END),
            ))),
            ..Default::default()
        }
    }
}

pub struct CardContainer;

impl container::StyleSheet for CardContainer {
    type Style = Theme;

    fn appearance(&self, _style: &Self::Style) -> container::Appearance {
        container::Appearance {
            text_color: Some(SLATE_100),
            background: Some(Background::Color(SLATE_800)),
            border: Border {
                color: SLATE_700,
                width: 1.0,
                radius: 12.0.into(),
            },
            shadow: Shadow {
                color: Color::from_rgba(0.0, 0.0, 0.0, 0.25),
                offset: Vector::new(0.0, 4.0),
                blur_radius: 12.0,
            },
        }
    }
}

pub struct SidebarContainer;

impl container::StyleSheet for SidebarContainer {
    type Style = Theme;

    fn appearance(&self, _style: &Self::Style) -> container::Appearance {
        container::Appearance {
            text_color: Some(SLATE_300),
            background: Some(Background::Color(SLATE_950)),
            border: Border {
                color: SLATE_700,
                width: 1.0,
                radius: 0.0.into(),
            },
            ..Default::default()
        }
    }
}

/// Monospace log panel
pub struct LogContainer;

impl container::StyleSheet for LogContainer {
    type Style = Theme;

    fn appearance(&self, _style: &Self::Style) -> container::Appearance {
        container::Appearance {
            text_color: Some(SLATE_300),
            background: Some(Background::Color(SLATE_950)),
            border: Border {
                color: SLATE_700,
                width: 1.0,
                radius: 8.0.into(),
            },
            ..Default::default()
        }
    }
}

/// Pill with a tinted background, used for status and kind badges
pub struct BadgeContainer(pub Color);

impl container::StyleSheet for BadgeContainer {
    type Style = Theme;

    fn appearance(&self, _style: &Self::Style) -> container::Appearance {
        let color = self.0;
        container::Appearance {
            text_color: Some(color),
            background: Some(Background::Color(Color { a: 0.15, ..color })),
            border: Border {
                color: Color { a: 0.4, ..color },
                width: 1.0,
                radius: 999.0.into(),
            },
            ..Default::default()
        }
    }
}

/// Solid fill, used for status dots and history bars
pub struct FillContainer {
    pub color: Color,
    pub radius: f32,
}

impl container::StyleSheet for FillContainer {
    type Style = Theme;

    fn appearance(&self, _style: &Self::Style) -> container::Appearance {
        container::Appearance {
            background: Some(Background::Color(self.color)),
            border: Border {
                radius: self.radius.into(),
                ..Default::default()
            },
            ..Default::default()
        }
    }
}

// --- Button Styles ---

pub struct PrimaryButton;

impl button::StyleSheet for PrimaryButton {
    type Style = Theme;

    fn active(&self, _style: &Self::Style) -> button::Appearance {
        button::Appearance {
            background: Some(Background::Color(BLUE_500)),
            text_color: WHITE,
            border: Border {
                radius: 8.0.into(),
                ..Default::default()
            },
            shadow: Shadow {
                color: Color::from_rgba(0.231, 0.510, 0.965, 0.3),
                offset: Vector::new(0.0, 2.0),
                blur_radius: 8.0,
            },
            shadow_offset: Vector::new(0.0, 0.0),
        }
    }

    fn hovered(&self, style: &Self::Style) -> button::Appearance {
        button::Appearance {
            background: Some(Background::Color(BLUE_400)),
            ..self.active(style)
        }
    }

    fn disabled(&self, style: &Self::Style) -> button::Appearance {
        button::Appearance {
            background: Some(Background::Color(SLATE_700)),
            text_color: SLATE_400,
            shadow: Shadow::default(),
            ..self.active(style)
        }
    }
}

pub struct SecondaryButton;

impl button::StyleSheet for SecondaryButton {
    type Style = Theme;

    fn active(&self, _style: &Self::Style) -> button::Appearance {
        button::Appearance {
            background: Some(Background::Color(SLATE_800)),
            text_color: SLATE_300,
            border: Border {
                radius: 8.0.into(),
                color: SLATE_700,
                width: 1.0,
            },
            ..Default::default()
        }
    }

    fn hovered(&self, style: &Self::Style) -> button::Appearance {
        button::Appearance {
            background: Some(Background::Color(SLATE_700)),
            text_color: SLATE_100,
            ..self.active(style)
        }
    }

    fn disabled(&self, style: &Self::Style) -> button::Appearance {
        button::Appearance {
            text_color: SLATE_600,
            ..self.active(style)
        }
    }
}

pub enum SidebarButtonStyle {
    Active,
    Inactive,
}

impl button::StyleSheet for SidebarButtonStyle {
    type Style = Theme;

    fn active(&self, _style: &Self::Style) -> button::Appearance {
        match self {
            Self::Active => button::Appearance {
                background: Some(Background::Color(Color::from_rgba(
                    0.231, 0.510, 0.965, 0.2,
                ))),
                text_color: SLATE_100,
                border: Border {
                    radius: 8.0.into(),
                    ..Default::default()
                },
                ..Default::default()
            },
            Self::Inactive => button::Appearance {
                background: None,
                text_color: SLATE_400,
                border: Border {
                    radius: 8.0.into(),
                    ..Default::default()
                },
                ..Default::default()
            },
        }
    }

    fn hovered(&self, style: &Self::Style) -> button::Appearance {
        match self {
            Self::Active => self.active(style),
            Self::Inactive => button::Appearance {
                text_color: SLATE_100,
                background: Some(Background::Color(SLATE_800)),
                border: Border {
                    radius: 8.0.into(),
                    ..Default::default()
                },
                ..Default::default()
            },
        }
    }
}

/// Text-only button, used for links inside tables
pub struct LinkButton;

impl button::StyleSheet for LinkButton {
    type Style = Theme;

    fn active(&self, _style: &Self::Style) -> button::Appearance {
        button::Appearance {
            background: None,
            text_color: SLATE_100,
            ..Default::default()
        }
    }

    fn hovered(&self, style: &Self::Style) -> button::Appearance {
        button::Appearance {
            text_color: BLUE_400,
            ..self.active(style)
        }
    }
}

pub struct DestructiveButton;

impl button::StyleSheet for DestructiveButton {
    type Style = Theme;

    fn active(&self, _style: &Self::Style) -> button::Appearance {
        button::Appearance {
            background: None,
            text_color: RED_500,
            border: Border {
                radius: 8.0.into(),
                ..Default::default()
            },
            ..Default::default()
        }
    }

    fn hovered(&self, _style: &Self::Style) -> button::Appearance {
        button::Appearance {
            background: Some(Background::Color(RED_900)),
            text_color: WHITE,
            border: Border {
                radius: 8.0.into(),
                ..Default::default()
            },
            ..Default::default()
        }
    }
}

// --- Input Styles ---

pub struct InputStyle;

impl text_input::StyleSheet for InputStyle {
    type Style = Theme;

    fn active(&self, _style: &Self::Style) -> text_input::Appearance {
        text_input::Appearance {
            background: Background::Color(SLATE_950),
            border: Border {
                radius: 8.0.into(),
                width: 1.0,
                color: SLATE_700,
            },
            icon_color: SLATE_400,
        }
    }

    fn focused(&self, style: &Self::Style) -> text_input::Appearance {
        let active = self.active(style);
        text_input::Appearance {
            border: Border {
                color: BLUE_400,
                ..active.border
            },
            ..active
        }
    }

    fn placeholder_color(&self, _style: &Self::Style) -> Color {
        SLATE_600
    }

    fn value_color(&self, _style: &Self::Style) -> Color {
        SLATE_100
    }

    fn selection_color(&self, _style: &Self::Style) -> Color {
        Color::from_rgba(0.231, 0.510, 0.965, 0.4)
    }

    fn disabled(&self, style: &Self::Style) -> text_input::Appearance {
        let active = self.active(style);
        text_input::Appearance {
            background: Background::Color(SLATE_800),
            ..active
        }
    }

    fn disabled_color(&self, _style: &Self::Style) -> Color {
        SLATE_600
    }
}

// --- Scrollable Styles ---

pub struct ScrollableStyle;

impl scrollable::StyleSheet for ScrollableStyle {
    type Style = Theme;

    fn active(&self, _style: &Self::Style) -> scrollable::Appearance {
        scrollable::Appearance {
            container: container::Appearance::default(),
            scrollbar: scrollable::Scrollbar {
                background: Some(Background::Color(Color::TRANSPARENT)),
                border: Border::default(),
                scroller: scrollable::Scroller {
                    color: Color::from_rgba(0.580, 0.639, 0.722, 0.3),
                    border: Border {
                        radius: 4.0.into(),
                        ..Default::default()
                    },
                },
            },
            gap: None,
        }
    }

    fn hovered(
        &self,
        style: &Self::Style,
        is_mouse_over_scrollbar: bool,
    ) -> scrollable::Appearance {
        let active = self.active(style);
        if is_mouse_over_scrollbar {
            scrollable::Appearance {
                scrollbar: scrollable::Scrollbar {
                    scroller: scrollable::Scroller {
                        color: Color::from_rgba(0.580, 0.639, 0.722, 0.5),
                        ..active.scrollbar.scroller
                    },
                    ..active.scrollbar
                },
                ..active
            }
        } else {
            active
        }
    }
}

// --- Progress Bar Styles ---

/// Usage meter that turns amber and red as it fills
pub struct UsageBar(pub f32);

impl iced::widget::progress_bar::StyleSheet for UsageBar {
    type Style = Theme;

    fn appearance(&self, _style: &Self::Style) -> iced::widget::progress_bar::Appearance {
        iced::widget::progress_bar::Appearance {
            background: Background::Color(SLATE_700),
            bar: Background::Color(usage_color(self.0)),
            border_radius: 4.0.into(),
        }
    }
}

/// Green under 60%, amber under 80%, red above
pub fn usage_color(percent: f32) -> Color {
    if percent >= 80.0 {
        DANGER
    } else if percent >= 60.0 {
        WARNING
    } else {
        SUCCESS
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn usage_color_steps_at_60_and_80() {
        assert_eq!(usage_color(12.0), SUCCESS);
        assert_eq!(usage_color(60.0), WARNING);
        assert_eq!(usage_color(79.9), WARNING);
        assert_eq!(usage_color(95.0), DANGER);
    }
}
