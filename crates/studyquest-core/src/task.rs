//! Task model, status vocabulary, and creation-time validation.
//!
//! A task's reward fields (`xp_reward`, `show_on_quest_board`) are derived
//! from its priority exactly once, when the task is built. Editing a task
//! later never recomputes them, so completed history keeps the value it was
//! earned at.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::duration::DurationParser;
use crate::error::ValidationError;
use crate::reward::{Priority, RewardCalculator};

/// Lifecycle and display status of a task.
///
/// Statuses partition display behavior only; there is no transition graph.
/// Rows imported from elsewhere may carry labels outside this set, which
/// [`TaskStatus::normalize`] maps to `Pending`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum TaskStatus {
    /// Newly created, not yet started
    Todo,
    /// Actively being worked
    InProgress,
    /// Finished and rewarded
    Completed,
    /// Past its expected completion
    Overdue,
    /// Diverted by a reroute strategy; shown as a side quest
    Rerouted,
    /// Moved to a later session
    Rescheduled,
    /// Session passed without work
    Missed,
    /// Highlighted in the current session
    Active,
    /// Waiting for a future session
    Upcoming,
    /// Fallback bucket for anything unrecognized
    Pending,
}

impl TaskStatus {
    /// Every known status, in display order.
    pub const ALL: [TaskStatus; 10] = [
        TaskStatus::Todo,
        TaskStatus::InProgress,
        TaskStatus::Completed,
        TaskStatus::Overdue,
        TaskStatus::Rerouted,
        TaskStatus::Rescheduled,
        TaskStatus::Missed,
        TaskStatus::Active,
        TaskStatus::Upcoming,
        TaskStatus::Pending,
    ];

    /// Canonical label as stored and displayed.
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskStatus::Todo => "todo",
            TaskStatus::InProgress => "in-progress",
            TaskStatus::Completed => "completed",
            TaskStatus::Overdue => "overdue",
            TaskStatus::Rerouted => "rerouted",
            TaskStatus::Rescheduled => "rescheduled",
            TaskStatus::Missed => "missed",
            TaskStatus::Active => "active",
            TaskStatus::Upcoming => "upcoming",
            TaskStatus::Pending => "pending",
        }
    }

    /// Parse a known status label.
    pub fn from_label(label: &str) -> Option<TaskStatus> {
        TaskStatus::ALL.into_iter().find(|s| s.as_str() == label)
    }

    /// Parse a status label, mapping anything unknown to `Pending`.
    pub fn normalize(label: &str) -> TaskStatus {
        TaskStatus::from_label(label).unwrap_or(TaskStatus::Pending)
    }

    /// Whether this status counts as finished work.
    pub fn is_completed(&self) -> bool {
        matches!(self, TaskStatus::Completed)
    }
}

impl Default for TaskStatus {
    fn default() -> Self {
        TaskStatus::Todo
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TaskStatus {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TaskStatus::from_label(s).ok_or_else(|| ValidationError::InvalidValue {
            field: "status".to_string(),
            message: format!("unknown status '{}'", s),
        })
    }
}

/// A study task with its reward fields frozen at creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    /// Unique id (UUID v4 string)
    pub id: String,
    /// Short title
    pub title: String,
    /// Optional longer description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Subject the task belongs to
    pub subject_name: String,
    /// Priority chosen at creation
    pub priority: Priority,
    /// Parsed duration estimate, absent when none was given or understood
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estimated_minutes: Option<u32>,
    /// Current status
    pub status: TaskStatus,
    /// XP credited when the task completes; fixed at creation
    pub xp_reward: u32,
    /// Whether the task appears on the quest board; fixed at creation
    pub show_on_quest_board: bool,
    /// Set by the adaptation pass when the subject is heavy for the
    /// player's current state
    #[serde(default)]
    pub is_high_cognitive_load: bool,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
}

/// Form input for creating a task, before validation and reward derivation.
#[derive(Debug, Clone, Default)]
pub struct TaskDraft {
    /// Title as typed
    pub title: String,
    /// Subject name as typed
    pub subject_name: String,
    /// Priority label, validated against the four known labels
    pub priority: String,
    /// Optional description
    pub description: Option<String>,
    /// Free-text duration, e.g. "45 mins" or "1h 30m"
    pub duration_text: Option<String>,
}

impl TaskDraft {
    /// Validate the draft and build a persistable task.
    ///
    /// Duration text the parser does not understand is an absent estimate,
    /// not an error. Everything else wrong with the form accumulates into
    /// one validation failure so the caller can report every problem at
    /// once.
    pub fn build(self, parser: &DurationParser) -> Result<Task, ValidationError> {
        let mut problems = Vec::new();

        if self.title.trim().is_empty() {
            problems.push("Title is required".to_string());
        }
        if self.subject_name.trim().is_empty() {
            problems.push("Subject is required".to_string());
        }

        let estimated_minutes = self
            .duration_text
            .as_deref()
            .and_then(|text| parser.parse(text));
        if estimated_minutes == Some(0) {
            problems.push("Estimated minutes must be a positive integer".to_string());
        }

        let parsed_priority = self.priority.parse::<Priority>();
        if parsed_priority.is_err() {
            problems.push("Priority must be one of: Low, Medium, High, Urgent".to_string());
        }

        if !problems.is_empty() {
            return Err(ValidationError::Multiple { messages: problems });
        }

        // Reachable only when the parse above succeeded
        let priority = parsed_priority.map_err(|e| ValidationError::InvalidValue {
            field: "priority".to_string(),
            message: e.to_string(),
        })?;

        let reward = RewardCalculator::reward_for_priority(priority);

        Ok(Task {
            id: Uuid::new_v4().to_string(),
            title: self.title.trim().to_string(),
            description: self.description.filter(|d| !d.trim().is_empty()),
            subject_name: self.subject_name.trim().to_string(),
            priority,
            estimated_minutes,
            status: TaskStatus::Todo,
            xp_reward: reward.xp,
            show_on_quest_board: reward.show_on_quest_board,
            is_high_cognitive_load: false,
            created_at: Utc::now(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_draft(title: &str, subject: &str, priority: &str) -> TaskDraft {
        TaskDraft {
            title: title.to_string(),
            subject_name: subject.to_string(),
            priority: priority.to_string(),
            description: None,
            duration_text: None,
        }
    }

    #[test]
    fn test_build_derives_reward_from_priority() {
        let parser = DurationParser::new();
        let task = make_draft("Revise optics", "Physics", "High")
            .build(&parser)
            .unwrap();

        assert_eq!(task.xp_reward, 1000);
        assert!(task.show_on_quest_board);
        assert_eq!(task.status, TaskStatus::Todo);
        assert_eq!(task.estimated_minutes, None);
        assert!(!task.is_high_cognitive_load);
    }

    #[test]
    fn test_build_parses_duration_text() {
        let parser = DurationParser::new();
        let mut draft = make_draft("Practice problems", "Math", "Medium");
        draft.duration_text = Some("1h 30m".to_string());

        let task = draft.build(&parser).unwrap();
        assert_eq!(task.estimated_minutes, Some(90));
    }

    #[test]
    fn test_build_keeps_unparseable_duration_absent() {
        // A high-priority task whose duration text means nothing still
        // builds: full reward, board visibility, no estimate.
        let parser = DurationParser::new();
        let mut draft = make_draft("Essay outline", "English", "High");
        draft.duration_text = Some("whenever I get to it".to_string());

        let task = draft.build(&parser).unwrap();
        assert_eq!(task.xp_reward, 1000);
        assert!(task.show_on_quest_board);
        assert_eq!(task.estimated_minutes, None);
    }

    #[test]
    fn test_build_accumulates_validation_problems() {
        let parser = DurationParser::new();
        let err = make_draft("   ", "", "Critical").build(&parser).unwrap_err();

        match err {
            ValidationError::Multiple { messages } => {
                assert_eq!(messages.len(), 3);
                assert!(messages[0].contains("Title"));
                assert!(messages[1].contains("Subject"));
                assert!(messages[2].contains("Priority"));
            }
            other => panic!("expected accumulated messages, got {other:?}"),
        }
    }

    #[test]
    fn test_build_rejects_zero_minute_estimate() {
        let parser = DurationParser::new();
        let mut draft = make_draft("Skim notes", "History", "Low");
        draft.duration_text = Some("0 mins".to_string());

        let err = draft.build(&parser).unwrap_err();
        assert!(err.to_string().contains("positive integer"));
    }

    #[test]
    fn test_build_trims_title_and_subject() {
        let parser = DurationParser::new();
        let task = make_draft("  Derivatives  ", " Math ", "Low")
            .build(&parser)
            .unwrap();

        assert_eq!(task.title, "Derivatives");
        assert_eq!(task.subject_name, "Math");
    }

    #[test]
    fn test_status_labels_round_trip() {
        for status in TaskStatus::ALL {
            assert_eq!(TaskStatus::from_label(status.as_str()), Some(status));
        }
    }

    #[test]
    fn test_status_normalize_maps_unknown_to_pending() {
        assert_eq!(TaskStatus::normalize("archived"), TaskStatus::Pending);
        assert_eq!(TaskStatus::normalize(""), TaskStatus::Pending);
        assert_eq!(TaskStatus::normalize("Completed"), TaskStatus::Pending);
        assert_eq!(TaskStatus::normalize("completed"), TaskStatus::Completed);
    }

    #[test]
    fn test_status_from_str_rejects_unknown() {
        assert!("todo".parse::<TaskStatus>().is_ok());
        let err = "done".parse::<TaskStatus>().unwrap_err();
        assert!(err.to_string().contains("done"));
    }

    #[test]
    fn test_task_serde_defaults_adaptation_flag() {
        let json = r#"{
            "id": "t-1",
            "title": "Read chapter 4",
            "subject_name": "Biology",
            "priority": "Medium",
            "status": "todo",
            "xp_reward": 500,
            "show_on_quest_board": false,
            "created_at": "2025-03-01T09:00:00Z"
        }"#;

        let task: Task = serde_json::from_str(json).unwrap();
        assert!(!task.is_high_cognitive_load);
        assert_eq!(task.estimated_minutes, None);
        assert_eq!(task.description, None);
    }
}
