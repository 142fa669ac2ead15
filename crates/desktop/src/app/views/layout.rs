use iced::border::{Border, Radius};
use iced::widget::{container, row};
use iced::{Background, Element, Length, Shadow};

use crate::app::message::Message;
use crate::app::theme::Palette;

use super::super::desktop::DaybookDesktop;

const SIDEBAR_EXPANDED_WIDTH: f32 = 256.0;
const SIDEBAR_COLLAPSED_WIDTH: f32 = 80.0;

pub(crate) fn compose(app: &DaybookDesktop) -> Element<'_, Message> {
    let sidebar_width = if app.sidebar_collapsed {
        SIDEBAR_COLLAPSED_WIDTH
    } else {
        SIDEBAR_EXPANDED_WIDTH
    };

    let sidebar = container(app.sidebar())
        .width(Length::Fixed(sidebar_width))
        .height(Length::Fill)
        .padding(16)
        .style(move |_| sidebar_container_style(app.palette));

    let page = container(app.page())
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(24)
        .style(move |_| page_container_style(app.palette));

    container(
        row![sidebar, page]
            .spacing(0)
            .width(Length::Fill)
            .height(Length::Fill),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .style(move |_| app_background_style(app.palette))
    .into()
}

fn sidebar_container_style(palette: Palette) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette.surface)),
        border: Border {
            color: palette.border,
            width: 1.0,
            radius: Radius::from(0.0),
        },
        shadow: Shadow::default(),
        ..container::Style::default()
    }
}

fn page_container_style(palette: Palette) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette.background)),
        border: Border {
            color: palette.border,
            width: 0.0,
            radius: Radius::from(0.0),
        },
        shadow: Shadow::default(),
        ..container::Style::default()
    }
}

fn app_background_style(palette: Palette) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette.background)),
        border: Border::default(),
        shadow: Shadow::default(),
        ..container::Style::default()
    }
}
