//! Message definitions passed around the desktop update loop.

use iced::Task;

use crate::app::state::NavTab;

#[derive(Debug, Clone)]
pub(crate) enum Message {
    TabSelected(NavTab),
    SidebarToggled,
    ThemeToggled,
    DraftTextChanged(String),
    DraftDateChanged(String),
    DraftTimeChanged(String),
    DraftSubmitted,
    AddedNoticeExpired(u64),
    SearchChanged(String),
}

pub(crate) type Effect = Task<Message>;
