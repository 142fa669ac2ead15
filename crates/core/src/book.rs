use crate::filter::TaskFilter;
use crate::model::{none_if_blank, Task, TaskDraft, TaskId};

/// Newest-first, in-memory collection of the session's tasks.
///
/// The book only grows. Tasks live for the lifetime of the process and are
/// never edited, so callers can hand out `&Task` freely between mutations.
#[derive(Debug, Clone, Default)]
pub struct TaskBook {
    tasks: Vec<Task>,
    last_id: Option<TaskId>,
}

impl TaskBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a task from `draft` and prepends it, returning the new entry.
    ///
    /// Blank drafts are refused and leave the book untouched. Text is stored
    /// exactly as typed; trimming only feeds the blank check. Empty date and
    /// time fields become `None`.
    pub fn add(&mut self, draft: &TaskDraft) -> Option<&Task> {
        if draft.is_blank() {
            return None;
        }
        let id = fence(TaskId::now(), self.last_id);
        self.last_id = Some(id);
        self.tasks.insert(
            0,
            Task {
                id,
                text: draft.text.clone(),
                date: none_if_blank(&draft.date),
                time: none_if_blank(&draft.time),
            },
        );
        Some(&self.tasks[0])
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Tasks passing `filter`, preserving newest-first order.
    pub fn select(&self, filter: &TaskFilter) -> Vec<&Task> {
        self.tasks.iter().filter(|task| filter.matches(task)).collect()
    }
}

/// Keeps ids strictly increasing when the clock hands out the same
/// millisecond twice (or steps backwards).
fn fence(candidate: TaskId, last: Option<TaskId>) -> TaskId {
    match last {
        Some(prev) if candidate <= prev => TaskId::from_millis(prev.as_millis() + 1),
        _ => candidate,
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn draft(text: &str) -> TaskDraft {
        TaskDraft::new(text, "", "")
    }

    #[test]
    fn add_prepends_newest_first() {
        let mut book = TaskBook::new();
        book.add(&draft("first"));
        book.add(&draft("second"));
        book.add(&draft("third"));

        let texts: Vec<&str> = book.tasks().iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, vec!["third", "second", "first"]);
    }

    #[test]
    fn add_refuses_blank_drafts() {
        let mut book = TaskBook::new();
        assert!(book.add(&draft("   ")).is_none());
        assert!(book.add(&TaskDraft::new("", "2025-08-25", "10:00")).is_none());
        assert!(book.is_empty());
    }

    #[test]
    fn add_keeps_text_raw_and_drops_blank_fields() {
        let mut book = TaskBook::new();
        let task = book
            .add(&TaskDraft::new("  buy milk  ", " ", "10:00"))
            .cloned()
            .unwrap();

        assert_eq!(task.text, "  buy milk  ");
        assert_eq!(task.date, None);
        assert_eq!(task.time, Some("10:00".to_string()));
    }

    #[test]
    fn ids_are_strictly_increasing_even_within_one_millisecond() {
        let mut book = TaskBook::new();
        let mut previous = None;
        for n in 0..50 {
            let id = book.add(&draft(&format!("task {n}"))).map(|t| t.id);
            assert!(id > previous, "id {id:?} did not advance past {previous:?}");
            previous = id;
        }
    }

    #[test]
    fn fence_bumps_past_collisions_and_clock_steps() {
        let prev = TaskId::from_millis(1_000);
        assert_eq!(fence(TaskId::from_millis(1_000), Some(prev)).as_millis(), 1_001);
        assert_eq!(fence(TaskId::from_millis(990), Some(prev)).as_millis(), 1_001);
        assert_eq!(fence(TaskId::from_millis(1_005), Some(prev)).as_millis(), 1_005);
        assert_eq!(fence(TaskId::from_millis(1_000), None).as_millis(), 1_000);
    }
}
