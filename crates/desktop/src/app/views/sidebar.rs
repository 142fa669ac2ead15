use iced::alignment::Horizontal;
use iced::border::{Border, Radius};
use iced::font::Weight as FontWeight;
use iced::widget::{button, column, row, text, Space};
use iced::{Alignment, Background, Element, Font, Length, Shadow};

use crate::app::message::Message;
use crate::app::state::NavTab;
use crate::app::theme::Palette;

use super::super::desktop::DaybookDesktop;
use super::styles::{ghost_button_style, with_alpha};

impl DaybookDesktop {
    pub(crate) fn sidebar(&self) -> Element<'_, Message> {
        let palette = self.palette;
        let collapsed = self.sidebar_collapsed;

        let collapse_glyph = if collapsed { "▶" } else { "◀" };
        let collapse_button = button(text(collapse_glyph).size(14).color(palette.accent))
            .padding([6, 8])
            .on_press(Message::SidebarToggled)
            .style(move |_, status| ghost_button_style(palette, status));

        let header: Element<'_, Message> = if collapsed {
            row![
                Space::new().width(Length::Fill),
                collapse_button,
                Space::new().width(Length::Fill),
            ]
            .align_y(Alignment::Center)
            .into()
        } else {
            row![
                text("🗂️ Daybook")
                    .size(22)
                    .color(palette.accent)
                    .font(Font {
                        weight: FontWeight::Bold,
                        ..Font::DEFAULT
                    }),
                Space::new().width(Length::Fill),
                collapse_button,
            ]
            .align_y(Alignment::Center)
            .into()
        };

        let mut nav = column![].spacing(8).align_x(Alignment::Start);
        for tab in NavTab::ALL {
            let active = *tab == self.active;
            let label: Element<'_, Message> = if collapsed {
                text(tab.icon())
                    .size(18)
                    .width(Length::Fill)
                    .align_x(Horizontal::Center)
                    .into()
            } else {
                row![
                    text(tab.icon()).size(16),
                    text(tab.title()).size(15).color(if active {
                        palette.text_primary
                    } else {
                        palette.nav_text
                    }),
                ]
                .spacing(12)
                .align_y(Alignment::Center)
                .into()
            };

            let entry = button(label)
                .padding([8, 12])
                .width(Length::Fill)
                .on_press(Message::TabSelected(*tab))
                .style(move |_, status| nav_button_style(palette, active, status));

            nav = nav.push(entry);
        }

        let theme_label = match (self.mode.is_dark(), collapsed) {
            (true, true) => "☀️",
            (true, false) => "☀️ Light mode",
            (false, true) => "🌙",
            (false, false) => "🌙 Dark mode",
        };
        let theme_button = button(
            text(theme_label)
                .size(14)
                .color(palette.nav_text)
                .width(Length::Fill)
                .align_x(if collapsed {
                    Horizontal::Center
                } else {
                    Horizontal::Left
                }),
        )
        .padding([8, 12])
        .width(Length::Fill)
        .on_press(Message::ThemeToggled)
        .style(move |_, status| ghost_button_style(palette, status));

        column![header, nav, Space::new().height(Length::Fill), theme_button]
            .spacing(20)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }
}

fn nav_button_style(palette: Palette, active: bool, status: button::Status) -> button::Style {
    let mut style = button::Style {
        background: None,
        border: Border {
            color: palette.border,
            width: 0.0,
            radius: Radius::from(12.0),
        },
        text_color: if active {
            palette.text_primary
        } else {
            palette.nav_text
        },
        shadow: Shadow::default(),
        ..button::Style::default()
    };

    if active {
        style.background = Some(Background::Color(palette.nav_active));
    }

    match status {
        button::Status::Hovered | button::Status::Pressed => {
            if !active {
                style.background = Some(Background::Color(palette.nav_hover));
                style.text_color = palette.text_primary;
            }
        }
        button::Status::Disabled => {
            style.text_color = with_alpha(style.text_color, 0.6);
        }
        button::Status::Active => {}
    }

    style
}
