use iced::border::{Border, Radius};
use iced::widget::{button, container, text_input};
use iced::{Background, Color, Shadow, Vector};

use crate::app::theme::Palette;

pub(super) fn with_alpha(color: Color, alpha: f32) -> Color {
    Color { a: alpha, ..color }
}

pub(super) fn darken(color: Color, factor: f32) -> Color {
    let clamp = |value: f32| value.clamp(0.0, 1.0);
    Color {
        r: clamp(color.r * factor),
        g: clamp(color.g * factor),
        b: clamp(color.b * factor),
        ..color
    }
}

pub(super) fn primary_button_style(palette: Palette, status: button::Status) -> button::Style {
    let mut style = button::Style {
        background: Some(Background::Color(palette.primary)),
        border: Border {
            color: palette.primary,
            width: 0.0,
            radius: Radius::from(8.0),
        },
        text_color: palette.primary_text,
        shadow: Shadow {
            offset: Vector::new(0.0, 1.0),
            ..Shadow::default()
        },
        ..button::Style::default()
    };

    match status {
        button::Status::Hovered => {
            style.background = Some(Background::Color(palette.primary_hover));
            style.border.color = palette.primary_hover;
        }
        button::Status::Pressed => {
            let pressed = darken(palette.primary_hover, 0.9);
            style.background = Some(Background::Color(pressed));
            style.border.color = pressed;
            style.shadow.offset = Vector::new(0.0, 0.0);
        }
        button::Status::Disabled => {
            let disabled = with_alpha(palette.primary, 0.6);
            style.background = Some(Background::Color(disabled));
            style.border.color = disabled;
            style.text_color = with_alpha(palette.primary_text, 0.6);
            style.shadow.offset = Vector::new(0.0, 0.0);
        }
        button::Status::Active => {}
    }

    style
}

pub(super) fn ghost_button_style(palette: Palette, status: button::Status) -> button::Style {
    let mut style = button::Style {
        background: None,
        border: Border {
            color: palette.border,
            width: 0.0,
            radius: Radius::from(8.0),
        },
        text_color: palette.nav_text,
        shadow: Shadow::default(),
        ..button::Style::default()
    };

    match status {
        button::Status::Hovered | button::Status::Pressed => {
            style.background = Some(Background::Color(palette.nav_hover));
            style.text_color = palette.text_primary;
        }
        button::Status::Disabled => {
            style.text_color = with_alpha(palette.nav_text, 0.6);
        }
        button::Status::Active => {}
    }

    style
}

pub(super) fn text_input_style(palette: Palette, status: text_input::Status) -> text_input::Style {
    let mut style = text_input::Style {
        background: Background::Color(palette.field),
        border: Border {
            color: palette.field_border,
            width: 1.0,
            radius: Radius::from(8.0),
        },
        icon: palette.text_muted,
        placeholder: palette.text_muted,
        value: palette.text_primary,
        selection: with_alpha(palette.primary, 0.35),
    };

    match status {
        text_input::Status::Focused { is_hovered } => {
            style.border.color = if is_hovered {
                palette.primary_hover
            } else {
                palette.primary
            };
        }
        text_input::Status::Hovered => {
            style.border.color = palette.primary_hover;
        }
        text_input::Status::Disabled => {
            style.background = Background::Color(with_alpha(palette.field, 0.6));
            style.border.color = with_alpha(palette.field_border, 0.3);
            style.value = with_alpha(palette.text_primary, 0.6);
            style.placeholder = with_alpha(palette.text_muted, 0.5);
            style.icon = with_alpha(palette.text_muted, 0.5);
        }
        text_input::Status::Active => {}
    }

    style
}

pub(super) fn card_style(palette: Palette) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette.surface)),
        border: Border {
            color: palette.border,
            width: 1.0,
            radius: Radius::from(12.0),
        },
        shadow: Shadow::default(),
        ..container::Style::default()
    }
}
