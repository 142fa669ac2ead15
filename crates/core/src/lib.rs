pub mod book;
pub mod filter;
pub mod model;
pub mod prefs;
pub mod theme;

pub use book::TaskBook;
pub use filter::{local_date_stamp, search, SearchOutcome, TaskFilter};
pub use model::{Task, TaskDraft, TaskId};
pub use prefs::PrefsStore;
pub use theme::ThemeMode;
