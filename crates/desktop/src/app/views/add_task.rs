use iced::widget::{button, column, row, text, text_input, Space};
use iced::{Alignment, Element, Length};

use crate::app::message::Message;

use super::super::desktop::DaybookDesktop;
use super::styles::{primary_button_style, text_input_style};

impl DaybookDesktop {
    pub(super) fn add_task_page(&self) -> Element<'_, Message> {
        let palette = self.palette;

        let name_input = text_input("Task name", &self.draft.text)
            .id(self.draft_input_id.clone())
            .on_input(Message::DraftTextChanged)
            .on_submit(Message::DraftSubmitted)
            .padding([10, 14])
            .size(15)
            .width(Length::Fill)
            .style(move |_, status| text_input_style(palette, status));

        let date_input = text_input("YYYY-MM-DD", &self.draft.date)
            .on_input(Message::DraftDateChanged)
            .padding([10, 14])
            .size(15)
            .width(Length::Fixed(150.0))
            .style(move |_, status| text_input_style(palette, status));

        let time_input = text_input("HH:MM", &self.draft.time)
            .on_input(Message::DraftTimeChanged)
            .padding([10, 14])
            .size(15)
            .width(Length::Fixed(110.0))
            .style(move |_, status| text_input_style(palette, status));

        let add_button = button(text("Add").size(15).color(palette.primary_text))
            .padding([10, 24])
            .on_press(Message::DraftSubmitted)
            .style(move |_, status| primary_button_style(palette, status));

        let form = row![name_input, date_input, time_input, add_button]
            .spacing(12)
            .align_y(Alignment::Center);

        let notice: Element<'_, Message> = if self.added_notice.is_visible() {
            text("✅ Task added!")
                .size(15)
                .color(palette.success)
                .into()
        } else {
            Space::new().height(Length::Shrink).into()
        };

        column![self.page_heading("➕ Add a New Task"), form, notice]
            .spacing(20)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }
}
