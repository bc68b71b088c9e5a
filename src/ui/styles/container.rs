// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::{border, opacity, palette, radius, shadow};
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Generic panel surface used for the header and the confirmation dialog.
///
/// The color is derived from the active Iced `Theme` background, with a slight
/// opacity, so panels stay readable in both light and dark modes without
/// hard-coding colors.
pub fn panel(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();
    let base = palette.background.base.color;

    container::Style {
        background: Some(Background::Color(Color::from_rgba(
            base.r,
            base.g,
            base.b,
            opacity::SURFACE,
        ))),
        border: Border {
            radius: radius::LG.into(),
            ..Default::default()
        },
        shadow: shadow::LG,
        ..Default::default()
    }
}

/// White label card around one code, as it looks on paper.
pub fn card(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::WHITE)),
        text_color: Some(palette::GRAY_900),
        border: Border {
            color: palette::GRAY_200,
            width: border::WIDTH_SM,
            radius: radius::NONE.into(),
        },
        shadow: shadow::SM,
        ..Default::default()
    }
}

/// Grey box shown instead of a code that could not be encoded.
pub fn code_placeholder(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::GRAY_100)),
        text_color: Some(palette::ERROR_500),
        ..Default::default()
    }
}

/// Dimmed layer behind modal dialogs.
pub fn modal_backdrop(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::OVERLAY_MEDIUM,
            ..palette::BLACK
        })),
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn card_is_white_in_both_themes() {
        for theme in [Theme::Light, Theme::Dark] {
            assert_eq!(
                card(&theme).background,
                Some(Background::Color(palette::WHITE))
            );
        }
    }

    #[test]
    fn backdrop_is_translucent() {
        match modal_backdrop(&Theme::Light).background {
            Some(Background::Color(color)) => assert!(color.a > 0.0 && color.a < 1.0),
            other => panic!("unexpected backdrop {other:?}"),
        }
    }
}
