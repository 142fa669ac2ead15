use iced::alignment::Horizontal;
use iced::font::{Style as FontStyle, Weight as FontWeight};
use iced::widget::{column, container, text};
use iced::{Alignment, Element, Font, Length};

use daybook_core::{local_date_stamp, TaskFilter};

use crate::app::message::Message;
use crate::app::state::NavTab;

use super::super::desktop::DaybookDesktop;

impl DaybookDesktop {
    pub(crate) fn page(&self) -> Element<'_, Message> {
        match self.active {
            NavTab::Home => self.home_page(),
            NavTab::Search => self.search_page(),
            NavTab::AddTask => self.add_task_page(),
            NavTab::Today => self.today_page(),
            NavTab::Upcoming => self.upcoming_page(),
            NavTab::MyTasks => self.my_tasks_page(),
        }
    }

    fn home_page(&self) -> Element<'_, Message> {
        let palette = self.palette;
        let tasks = self.book.select(&TaskFilter::All);

        let body: Element<'_, Message> = if tasks.is_empty() {
            self.empty_line("No tasks added yet.")
        } else {
            container(self.task_list(&tasks))
                .width(Length::Fixed(576.0))
                .height(Length::Fill)
                .into()
        };

        column![
            text("🎉 Welcome!")
                .size(34)
                .color(palette.accent)
                .font(Font {
                    weight: FontWeight::Bold,
                    ..Font::DEFAULT
                })
                .width(Length::Fill)
                .align_x(Horizontal::Center),
            text("Start by clicking \"Add Task\"")
                .size(17)
                .color(palette.text_muted)
                .width(Length::Fill)
                .align_x(Horizontal::Center),
            body,
        ]
        .spacing(16)
        .align_x(Alignment::Center)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
    }

    fn today_page(&self) -> Element<'_, Message> {
        let tasks = self.book.select(&TaskFilter::DueOn(local_date_stamp()));
        let body: Element<'_, Message> = if tasks.is_empty() {
            self.empty_line("No tasks scheduled for today.")
        } else {
            self.task_list(&tasks)
        };

        column![self.page_heading("📅 Today's Tasks"), body]
            .spacing(16)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }

    fn upcoming_page(&self) -> Element<'_, Message> {
        let tasks = self.book.select(&TaskFilter::DueAfter(local_date_stamp()));
        let body: Element<'_, Message> = if tasks.is_empty() {
            self.empty_line("No upcoming tasks found.")
        } else {
            self.task_list(&tasks)
        };

        column![self.page_heading("🗓 Upcoming Tasks"), body]
            .spacing(16)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }

    fn my_tasks_page(&self) -> Element<'_, Message> {
        let tasks = self.book.select(&TaskFilter::All);
        let body: Element<'_, Message> = if tasks.is_empty() {
            self.empty_line("No tasks added yet.")
        } else {
            self.task_list(&tasks)
        };

        column![self.page_heading("📋 All My Tasks"), body]
            .spacing(16)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }

    pub(super) fn page_heading(&self, title: &'static str) -> Element<'_, Message> {
        text(title)
            .size(28)
            .color(self.palette.accent)
            .font(Font {
                weight: FontWeight::Bold,
                ..Font::DEFAULT
            })
            .into()
    }

    pub(super) fn empty_line(&self, message: &'static str) -> Element<'_, Message> {
        text(message)
            .size(15)
            .color(self.palette.text_muted)
            .font(Font {
                style: FontStyle::Italic,
                ..Font::DEFAULT
            })
            .width(Length::Fill)
            .align_x(Horizontal::Center)
            .into()
    }
}
