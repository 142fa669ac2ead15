//! View composition for the desktop shell, mirroring the Daybook single-window layout.

mod add_task;
mod layout;
mod pages;
mod search;
mod sidebar;
mod styles;
mod task_list;

pub(crate) use layout::compose as compose_root;
