//! Shared state models that keep the Daybook window in sync with the task book.

use daybook_core::TaskDraft;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) enum NavTab {
    Home,
    Search,
    AddTask,
    Today,
    Upcoming,
    MyTasks,
}

impl NavTab {
    pub(crate) const ALL: &'static [NavTab] = &[
        NavTab::Home,
        NavTab::Search,
        NavTab::AddTask,
        NavTab::Today,
        NavTab::Upcoming,
        NavTab::MyTasks,
    ];

    pub(crate) fn title(self) -> &'static str {
        match self {
            NavTab::Home => "Home",
            NavTab::Search => "Search",
            NavTab::AddTask => "Add Task",
            NavTab::Today => "Today",
            NavTab::Upcoming => "Upcoming",
            NavTab::MyTasks => "My Tasks",
        }
    }

    pub(crate) fn icon(self) -> &'static str {
        match self {
            NavTab::Home => "🏠",
            NavTab::Search => "🔍",
            NavTab::AddTask => "➕",
            NavTab::Today => "📅",
            NavTab::Upcoming => "🗓",
            NavTab::MyTasks => "📋",
        }
    }
}

/// The three form fields of the add-task page, exactly as typed.
#[derive(Debug, Clone, Default)]
pub(crate) struct DraftState {
    pub(crate) text: String,
    pub(crate) date: String,
    pub(crate) time: String,
}

impl DraftState {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn clear(&mut self) {
        self.text.clear();
        self.date.clear();
        self.time.clear();
    }

    pub(crate) fn to_draft(&self) -> TaskDraft {
        TaskDraft::new(self.text.clone(), self.date.clone(), self.time.clone())
    }
}

/// Transient "task added" acknowledgement. Every add bumps the serial and an
/// expiry only hides the notice when its serial is still current, so a quick
/// second add keeps the notice up for its own full interval.
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct AddedNotice {
    serial: u64,
    visible: bool,
}

impl AddedNotice {
    pub(crate) fn arm(&mut self) -> u64 {
        self.serial = self.serial.wrapping_add(1);
        self.visible = true;
        self.serial
    }

    pub(crate) fn expire(&mut self, serial: u64) {
        if serial == self.serial {
            self.visible = false;
        }
    }

    pub(crate) fn is_visible(&self) -> bool {
        self.visible
    }

    #[cfg(test)]
    pub(crate) fn serial(&self) -> u64 {
        self.serial
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stale_expiry_does_not_hide_a_newer_notice() {
        let mut notice = AddedNotice::default();
        let first = notice.arm();
        let second = notice.arm();
        assert_ne!(first, second);

        notice.expire(first);
        assert!(notice.is_visible());

        notice.expire(second);
        assert!(!notice.is_visible());
    }

    #[test]
    fn draft_fields_round_trip_and_clear_together() {
        let mut draft = DraftState::new();
        draft.text = "water plants".into();
        draft.date = "2025-08-30".into();
        draft.time = "18:00".into();

        let value = draft.to_draft();
        assert_eq!(value.text, "water plants");
        assert_eq!(value.date, "2025-08-30");

        draft.clear();
        assert!(draft.to_draft().is_blank());
        assert!(draft.time.is_empty());
    }
}
