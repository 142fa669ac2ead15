use iced::font::Weight as FontWeight;
use iced::widget::{column, container, lazy, row, scrollable, text};
use iced::{Alignment, Element, Font, Length};

use daybook_core::{local_date_stamp, Task, ThemeMode};

use crate::app::message::Message;
use crate::app::state::NavTab;
use crate::app::theme::Palette;

use super::super::desktop::DaybookDesktop;
use super::styles::card_style;

impl DaybookDesktop {
    pub(super) fn task_list(&self, tasks: &[&Task]) -> Element<'_, Message> {
        let palette = self.palette;
        let owned: Vec<Task> = tasks.iter().map(|task| (*task).clone()).collect();
        let dependency = cards_key(
            self.active,
            self.revision,
            self.mode,
            &self.search,
            local_date_stamp(),
        );

        let list = lazy(dependency, move |_| render_cards(&owned, palette));

        scrollable(list).height(Length::Fill).into()
    }
}

type CardsKey = (NavTab, u64, ThemeMode, String, String);

/// Cache key for the rendered card stack. The date stamp participates so the
/// Today and Upcoming lists fall out of cache when the calendar day rolls
/// over, not just when the shell state changes.
fn cards_key(
    active: NavTab,
    revision: u64,
    mode: ThemeMode,
    search: &str,
    stamp: String,
) -> CardsKey {
    (active, revision, mode, search.to_string(), stamp)
}

fn render_cards(tasks: &[Task], palette: Palette) -> Element<'static, Message> {
    tasks
        .iter()
        .fold(column![].spacing(12), |column, task| {
            column.push(task_card(task, palette))
        })
        .width(Length::Fill)
        .into()
}

fn task_card(task: &Task, palette: Palette) -> Element<'static, Message> {
    let body = row![
        text("📝").size(18).color(palette.accent),
        column![
            text(task.text.clone())
                .size(15)
                .color(palette.text_primary)
                .font(Font {
                    weight: FontWeight::Semibold,
                    ..Font::DEFAULT
                }),
            text(format_schedule(task)).size(13).color(palette.text_muted),
        ]
        .spacing(2),
    ]
    .spacing(10)
    .align_y(Alignment::Center);

    container(body)
        .width(Length::Fill)
        .padding([12, 16])
        .style(move |_| card_style(palette))
        .into()
}

/// Card meta line: the date (or "No date") with the time appended when one is set.
fn format_schedule(task: &Task) -> String {
    let date = task.date.as_deref().unwrap_or("No date");
    match task.time.as_deref() {
        Some(time) => format!("{date} at {time}"),
        None => date.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use daybook_core::{TaskBook, TaskDraft, ThemeMode};
    use pretty_assertions::assert_eq;

    use crate::app::state::NavTab;

    use super::{cards_key, format_schedule};

    fn filed(book: &mut TaskBook, text: &str, date: &str, time: &str) -> daybook_core::Task {
        book.add(&TaskDraft::new(text, date, time))
            .cloned()
            .unwrap()
    }

    #[test]
    fn schedule_line_covers_every_date_time_combination() {
        let mut book = TaskBook::new();

        let bare = filed(&mut book, "water plants", "", "");
        let dated = filed(&mut book, "dentist", "2025-07-01", "");
        let timed = filed(&mut book, "standup", "", "09:30");
        let both = filed(&mut book, "flight", "2025-07-02", "10:00");

        assert_eq!(format_schedule(&bare), "No date");
        assert_eq!(format_schedule(&dated), "2025-07-01");
        assert_eq!(format_schedule(&timed), "No date at 09:30");
        assert_eq!(format_schedule(&both), "2025-07-02 at 10:00");
    }

    #[test]
    fn cards_key_tracks_the_calendar_day() {
        let key =
            |stamp: &str| cards_key(NavTab::Today, 3, ThemeMode::Light, "walk", stamp.to_string());

        assert_eq!(key("2025-08-25"), key("2025-08-25"));
        assert_ne!(key("2025-08-25"), key("2025-08-26"));
    }
}
