use std::fmt;

use chrono::Utc;
use serde::Serialize;

/// Creation-time identifier: milliseconds since the Unix epoch.
///
/// [`TaskBook`](crate::book::TaskBook) keeps the value unique by bumping it
/// past the previous id when two adds land in the same millisecond.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct TaskId(i64);

impl TaskId {
    pub fn from_millis(millis: i64) -> Self {
        Self(millis)
    }

    pub fn now() -> Self {
        Self(Utc::now().timestamp_millis())
    }

    pub fn as_millis(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A user-created reminder. Immutable once constructed: the application has
/// no edit or delete path.
///
/// `date` is expected to be an ISO `YYYY-MM-DD` stamp and `time` a display
/// string such as `10:00`, but neither is validated beyond being non-blank.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Task {
    pub id: TaskId,
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,
}

/// Uncommitted input values for a task that has not been created yet.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskDraft {
    pub text: String,
    pub date: String,
    pub time: String,
}

impl TaskDraft {
    pub fn new(
        text: impl Into<String>,
        date: impl Into<String>,
        time: impl Into<String>,
    ) -> Self {
        Self {
            text: text.into(),
            date: date.into(),
            time: time.into(),
        }
    }

    /// True when the text field holds nothing but whitespace. Blank drafts
    /// create no task.
    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }
}

pub(crate) fn none_if_blank(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_detection_ignores_surrounding_whitespace() {
        assert!(TaskDraft::new("", "", "").is_blank());
        assert!(TaskDraft::new("   \t", "2025-08-25", "10:00").is_blank());
        assert!(!TaskDraft::new(" call mom ", "", "").is_blank());
    }

    #[test]
    fn optional_fields_normalize_blank_to_none() {
        assert_eq!(none_if_blank("  "), None);
        assert_eq!(none_if_blank(""), None);
        assert_eq!(none_if_blank(" 2025-08-25 "), Some("2025-08-25".to_string()));
    }

    #[test]
    fn task_ids_order_by_creation_time() {
        let earlier = TaskId::from_millis(1_000);
        let later = TaskId::from_millis(1_001);
        assert!(earlier < later);
        assert_eq!(later.to_string(), "1001");
    }

    #[test]
    fn serialized_tasks_use_bare_ids_and_omit_unset_fields() {
        let task = Task {
            id: TaskId::from_millis(1_724_500_000_000),
            text: "buy milk".to_string(),
            date: Some("2025-08-30".to_string()),
            time: None,
        };

        let value = serde_json::to_value(&task).unwrap();
        assert_eq!(value["id"], 1_724_500_000_000_i64);
        assert_eq!(value["text"], "buy milk");
        assert_eq!(value["date"], "2025-08-30");
        assert!(value.get("time").is_none());
    }
}
