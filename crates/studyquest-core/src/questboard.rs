//! Quest board projection of tasks.
//!
//! The board renders tasks as quests. The mapping is one-way and lossy:
//! a quest is a display row derived from a task, never stored, so board
//! cosmetics can change without touching task data.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::task::{Task, TaskStatus};

/// XP above which a quest earns the champion badge.
pub const CHAMPION_XP_THRESHOLD: u32 = 300;

/// Default countdown shown for quests without a deadline.
pub const DEFAULT_DAYS_LEFT: u32 = 7;

/// Progress shown for a quest, out of [`QuestView::PROGRESS_TOTAL`].
const COMPLETED_PROGRESS: u32 = 100;
const REROUTED_PROGRESS: u32 = 20;
const IN_FLIGHT_PROGRESS: u32 = 50;

/// Main-line vs side quest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum QuestKind {
    /// Regular task on the main line
    Main,
    /// Rerouted task, shown off to the side
    Side,
}

impl fmt::Display for QuestKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            QuestKind::Main => "Main",
            QuestKind::Side => "Side",
        })
    }
}

/// Difficulty tag derived from the quest's XP.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum QuestDifficulty {
    Easy,
    Medium,
    Hard,
}

impl QuestDifficulty {
    /// XP above this is Hard.
    pub const HARD_XP: u32 = 300;
    /// XP above this (but not Hard) is Medium.
    pub const MEDIUM_XP: u32 = 150;

    /// Classify by XP reward.
    pub fn from_xp(xp: u32) -> QuestDifficulty {
        if xp > Self::HARD_XP {
            QuestDifficulty::Hard
        } else if xp > Self::MEDIUM_XP {
            QuestDifficulty::Medium
        } else {
            QuestDifficulty::Easy
        }
    }
}

impl fmt::Display for QuestDifficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            QuestDifficulty::Easy => "Easy",
            QuestDifficulty::Medium => "Medium",
            QuestDifficulty::Hard => "Hard",
        })
    }
}

/// A task rendered as a quest board row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestView {
    /// Id of the underlying task
    pub task_id: String,
    /// Quest title (the task title)
    pub title: String,
    /// Description, falling back to a subject blurb
    pub description: String,
    /// Subject studied
    pub subject_name: String,
    /// Main or side quest
    pub kind: QuestKind,
    /// Difficulty tag
    pub difficulty: QuestDifficulty,
    /// Progress out of [`QuestView::PROGRESS_TOTAL`]
    pub progress: u32,
    /// Badge name, when earned
    pub badge: Option<String>,
    /// Countdown display
    pub days_left: u32,
    /// XP on completion
    pub xp_reward: u32,
}

impl QuestView {
    /// Denominator for the progress bar.
    pub const PROGRESS_TOTAL: u32 = 100;

    /// Project a task onto the quest board.
    pub fn from_task(task: &Task) -> QuestView {
        let kind = if task.status == TaskStatus::Rerouted {
            QuestKind::Side
        } else {
            QuestKind::Main
        };

        let progress = match task.status {
            TaskStatus::Completed => COMPLETED_PROGRESS,
            TaskStatus::Rerouted => REROUTED_PROGRESS,
            _ => IN_FLIGHT_PROGRESS,
        };

        let badge = (task.xp_reward > CHAMPION_XP_THRESHOLD).then(|| "Champion".to_string());

        let description = task.description.clone().unwrap_or_else(|| {
            format!("Improve your understanding of {}", task.subject_name)
        });

        QuestView {
            task_id: task.id.clone(),
            title: task.title.clone(),
            description,
            subject_name: task.subject_name.clone(),
            kind,
            difficulty: QuestDifficulty::from_xp(task.xp_reward),
            progress,
            badge,
            days_left: DEFAULT_DAYS_LEFT,
            xp_reward: task.xp_reward,
        }
    }
}
