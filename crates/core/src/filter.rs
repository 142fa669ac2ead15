use chrono::Local;

use crate::book::TaskBook;
use crate::model::Task;

/// Today's date in the machine's local timezone, as an ISO `YYYY-MM-DD`
/// stamp. Comparing these stamps lexicographically orders them by calendar
/// day, which is all the date views need.
pub fn local_date_stamp() -> String {
    Local::now().format("%Y-%m-%d").to_string()
}

/// Predicate over tasks, one variant per list view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskFilter {
    /// Every task.
    All,
    /// Tasks dated exactly the given stamp.
    DueOn(String),
    /// Tasks dated strictly after the given stamp. Undated tasks never
    /// qualify.
    DueAfter(String),
    /// Case-insensitive substring match on the task text. The needle is
    /// used as typed, surrounding whitespace included.
    Matching(String),
}

impl TaskFilter {
    pub fn matches(&self, task: &Task) -> bool {
        match self {
            TaskFilter::All => true,
            TaskFilter::DueOn(stamp) => task.date.as_deref() == Some(stamp.as_str()),
            TaskFilter::DueAfter(stamp) => {
                task.date.as_deref().is_some_and(|date| date > stamp.as_str())
            }
            TaskFilter::Matching(needle) => task
                .text
                .to_lowercase()
                .contains(&needle.to_lowercase()),
        }
    }
}

/// What the search view should show for a given query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome<'a> {
    /// Nothing typed yet (or only whitespace): invite the user to type
    /// instead of dumping the whole book.
    Prompt,
    /// A real query that matched nothing.
    NoMatches,
    /// Matching tasks, newest first.
    Matches(Vec<&'a Task>),
}

pub fn search<'a>(book: &'a TaskBook, query: &str) -> SearchOutcome<'a> {
    if query.trim().is_empty() {
        return SearchOutcome::Prompt;
    }
    let hits = book.select(&TaskFilter::Matching(query.to_string()));
    if hits.is_empty() {
        SearchOutcome::NoMatches
    } else {
        SearchOutcome::Matches(hits)
    }
}
