// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::{
    palette::{self, WHITE},
    radius, shadow,
};
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

/// Solid button in `base` that lightens on hover and greys out when disabled.
fn filled(base: Color, hover: Color, edge: Color, theme: &Theme, status: button::Status) -> button::Style {
    let is_light = matches!(theme, Theme::Light);

    match status {
        button::Status::Active | button::Status::Pressed => button::Style {
            background: Some(Background::Color(base)),
            text_color: WHITE,
            border: Border {
                color: edge,
                width: 1.0,
                radius: radius::SM.into(),
            },
            shadow: shadow::SM,
            snap: true,
        },
        button::Status::Hovered => button::Style {
            background: Some(Background::Color(hover)),
            text_color: WHITE,
            border: Border {
                color: base,
                width: 1.0,
                radius: radius::SM.into(),
            },
            shadow: shadow::MD,
            snap: true,
        },
        button::Status::Disabled => button::Style {
            background: Some(Background::Color(if is_light {
                palette::GRAY_200
            } else {
                palette::GRAY_700
            })),
            text_color: palette::GRAY_400,
            border: Border {
                color: palette::GRAY_400,
                width: 1.0,
                radius: radius::SM.into(),
            },
            shadow: shadow::NONE,
            snap: true,
        },
    }
}

/// Style pour bouton primaire (action principale).
pub fn primary(theme: &Theme, status: button::Status) -> button::Style {
    filled(
        palette::PRIMARY_500,
        palette::PRIMARY_400,
        palette::PRIMARY_600,
        theme,
        status,
    )
}

/// Print action.
pub fn success(theme: &Theme, status: button::Status) -> button::Style {
    filled(
        palette::SUCCESS_600,
        palette::SUCCESS_500,
        palette::SUCCESS_700,
        theme,
        status,
    )
}

/// Destructive actions: remove, clear all, confirm clear.
pub fn danger(theme: &Theme, status: button::Status) -> button::Style {
    filled(
        palette::ERROR_500,
        palette::ERROR_400,
        palette::ERROR_600,
        theme,
        status,
    )
}

/// Style for secondary actions such as Cancel.
/// Adapts to light/dark theme while maintaining consistency.
pub fn secondary(theme: &Theme, status: button::Status) -> button::Style {
    let is_light = matches!(theme, Theme::Light);

    let (bg_color, text_color, border_color) = if is_light {
        (palette::GRAY_100, palette::GRAY_900, palette::GRAY_400)
    } else {
        (palette::GRAY_700, WHITE, palette::GRAY_400)
    };

    let hover_bg = if is_light {
        palette::GRAY_200
    } else {
        Color::from_rgb(0.35, 0.35, 0.35)
    };

    match status {
        button::Status::Active | button::Status::Pressed | button::Status::Disabled => {
            button::Style {
                background: Some(Background::Color(bg_color)),
                text_color,
                border: Border {
                    color: border_color,
                    width: 1.0,
                    radius: radius::SM.into(),
                },
                shadow: shadow::NONE,
                snap: true,
            }
        }
        button::Status::Hovered => button::Style {
            background: Some(Background::Color(hover_bg)),
            text_color,
            border: Border {
                color: palette::PRIMARY_500,
                width: 1.0,
                radius: radius::SM.into(),
            },
            shadow: shadow::SM,
            snap: true,
        },
    }
}
