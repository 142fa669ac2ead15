use iced::widget::{column, text, text_input};
use iced::{Element, Length};

use daybook_core::{search, SearchOutcome};

use crate::app::message::Message;

use super::super::desktop::DaybookDesktop;
use super::styles::text_input_style;

impl DaybookDesktop {
    pub(super) fn search_page(&self) -> Element<'_, Message> {
        let palette = self.palette;

        let input = text_input("Search by task name", &self.search)
            .id(self.search_input_id.clone())
            .on_input(Message::SearchChanged)
            .padding([10, 14])
            .size(15)
            .width(Length::Fill)
            .style(move |_, status| text_input_style(palette, status));

        let body: Element<'_, Message> = match search(&self.book, &self.search) {
            SearchOutcome::Prompt => text("Type to search for tasks...")
                .size(15)
                .color(palette.text_muted)
                .into(),
            SearchOutcome::NoMatches => text("No matching tasks found.")
                .size(15)
                .color(palette.text_muted)
                .into(),
            SearchOutcome::Matches(tasks) => self.task_list(&tasks),
        };

        column![self.page_heading("🔍 Search Tasks"), input, body]
            .spacing(16)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }
}
