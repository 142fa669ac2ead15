//! Message dispatch; every state transition funnels through [`DaybookDesktop::react`].

use iced::widget::operation::{focus, move_cursor_to_end};
use iced::widget::Id;

use crate::app::commands::expire_notice_command;
use crate::app::message::{Effect, Message};
use crate::app::state::NavTab;
use crate::app::theme::Palette;
use crate::telemetry::Event as TelemetryEvent;

use super::desktop::DaybookDesktop;

impl DaybookDesktop {
    pub(super) fn react(&mut self, message: Message) -> Effect {
        match message {
            Message::TabSelected(tab) => self.switch_tab(tab),
            Message::SidebarToggled => self.toggle_sidebar(),
            Message::ThemeToggled => self.toggle_theme(),
            Message::DraftTextChanged(value) => {
                self.draft.text = value;
                Effect::none()
            }
            Message::DraftDateChanged(value) => {
                self.draft.date = value;
                Effect::none()
            }
            Message::DraftTimeChanged(value) => {
                self.draft.time = value;
                Effect::none()
            }
            Message::DraftSubmitted => self.submit_draft(),
            Message::AddedNoticeExpired(serial) => {
                self.added_notice.expire(serial);
                Effect::none()
            }
            Message::SearchChanged(value) => {
                self.search = value;
                Effect::none()
            }
        }
    }

    pub(super) fn switch_tab(&mut self, tab: NavTab) -> Effect {
        self.active = tab;
        self.telemetry.record(TelemetryEvent::TabSelected(tab.title()));
        match tab {
            NavTab::AddTask => focus_input(self.draft_input_id.clone()),
            NavTab::Search => focus_input(self.search_input_id.clone()),
            _ => Effect::none(),
        }
    }

    pub(super) fn toggle_sidebar(&mut self) -> Effect {
        self.sidebar_collapsed = !self.sidebar_collapsed;
        self.telemetry
            .record(TelemetryEvent::SidebarToggled(self.sidebar_collapsed));
        Effect::none()
    }

    pub(super) fn toggle_theme(&mut self) -> Effect {
        self.mode = self.mode.toggled();
        self.palette = Palette::for_mode(self.mode);
        self.telemetry.record(TelemetryEvent::ThemeToggled(self.mode));
        if let Some(store) = self.prefs.as_ref() {
            if let Err(err) = store.save_theme(self.mode) {
                tracing::warn!(error = %err, "failed to persist theme choice");
            }
        }
        Effect::none()
    }

    pub(super) fn submit_draft(&mut self) -> Effect {
        let draft = self.draft.to_draft();
        let id = match self.book.add(&draft) {
            Some(task) => task.id,
            // Blank name: nothing is filed and the form keeps its values.
            None => return Effect::none(),
        };
        self.telemetry.record(TelemetryEvent::TaskAdded(id));
        self.draft.clear();
        self.revision = self.revision.wrapping_add(1);
        let serial = self.added_notice.arm();
        expire_notice_command(serial)
    }
}

fn focus_input(id: Id) -> Effect {
    Effect::batch(vec![focus(id.clone()), move_cursor_to_end(id)])
}
