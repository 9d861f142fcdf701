use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single to-do item.
///
/// `text` is always trimmed and non-empty; the store enforces this on
/// every path that writes it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Opaque identifier, unique within one collection
    pub id: String,
    /// Display text
    pub text: String,
    /// Completion flag
    #[serde(default)]
    pub completed: bool,
    /// Creation time; absent when the timestamps variant is off
    #[serde(rename = "createdAt", default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl Task {
    pub fn new(id: impl Into<String>, text: impl Into<String>) -> Self {
        Task {
            id: id.into(),
            text: text.into(),
            completed: false,
            created_at: None,
        }
    }
}

/// View selector narrowing which tasks are displayed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Filter {
    #[default]
    All,
    Active,
    Completed,
}

impl Filter {
    /// Tab order, left to right
    pub const ORDER: [Filter; 3] = [Filter::All, Filter::Active, Filter::Completed];

    pub fn label(self) -> &'static str {
        match self {
            Filter::All => "All",
            Filter::Active => "Active",
            Filter::Completed => "Completed",
        }
    }

    /// Does this filter admit the given task?
    pub fn admits(self, task: &Task) -> bool {
        match self {
            Filter::All => true,
            Filter::Active => !task.completed,
            Filter::Completed => task.completed,
        }
    }

    /// Next tab, wrapping around
    pub fn next(self) -> Filter {
        match self {
            Filter::All => Filter::Active,
            Filter::Active => Filter::Completed,
            Filter::Completed => Filter::All,
        }
    }
}

/// Live tallies over the whole collection, independent of the filter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Counts {
    pub active: usize,
    pub completed: usize,
    pub total: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filter_admits_by_completion() {
        let mut task = Task::new("t-1", "water plants");
        assert!(Filter::All.admits(&task));
        assert!(Filter::Active.admits(&task));
        assert!(!Filter::Completed.admits(&task));

        task.completed = true;
        assert!(Filter::All.admits(&task));
        assert!(!Filter::Active.admits(&task));
        assert!(Filter::Completed.admits(&task));
    }

    #[test]
    fn filter_next_cycles_through_all_tabs() {
        let mut filter = Filter::All;
        for expected in [Filter::Active, Filter::Completed, Filter::All] {
            filter = filter.next();
            assert_eq!(filter, expected);
        }
    }

    #[test]
    fn task_serializes_with_wire_field_names() {
        let mut task = Task::new("t-3", "buy milk");
        task.created_at = Some("2026-02-01T09:30:00Z".parse().unwrap());
        let json = serde_json::to_string(&task).unwrap();
        assert!(json.contains("\"createdAt\""));
        assert!(!json.contains("created_at"));
    }

    #[test]
    fn task_created_at_omitted_when_absent() {
        let task = Task::new("t-1", "buy milk");
        let json = serde_json::to_string(&task).unwrap();
        assert!(!json.contains("createdAt"));
    }

    #[test]
    fn task_deserializes_with_missing_optional_fields() {
        let task: Task = serde_json::from_str(r#"{"id":"t-9","text":"call home"}"#).unwrap();
        assert_eq!(task.id, "t-9");
        assert!(!task.completed);
        assert!(task.created_at.is_none());
    }
}
