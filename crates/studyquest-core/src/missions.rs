//! Auto-generated study missions from the player's interests.
//!
//! Two flavors: deep-work drafts (one long session per interest, rewarded
//! through the subject bonus formula) and daily missions (short sessions
//! for the first few interests, rewarded at a flat rate). The two reward
//! paths stay separate on purpose; see [`crate::reward`].

use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::reward::{Priority, RewardCalculator};
use crate::task::{Task, TaskStatus};

/// How many interests receive a daily mission.
pub const DAILY_MISSION_LIMIT: usize = 3;

/// Deep-work session length in hardcore mode, minutes.
pub const HARDCORE_MISSION_MINUTES: u32 = 90;

/// Deep-work session length in casual mode, minutes.
pub const CASUAL_MISSION_MINUTES: u32 = 30;

/// Daily mission session length, minutes.
pub const DAILY_MISSION_MINUTES: u32 = 25;

/// A mission suggestion, ready to be turned into a task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MissionPlan {
    /// Suggested task title
    pub title: String,
    /// Subject the mission studies
    pub subject_name: String,
    /// Session length in minutes
    pub estimated_minutes: u32,
    /// XP on completion
    pub xp_reward: u32,
}

impl MissionPlan {
    /// Convert the plan into a pending high-priority quest board task.
    ///
    /// The task keeps the mission's own reward rather than the one the
    /// priority table would assign.
    pub fn into_task(self) -> Task {
        Task {
            id: Uuid::new_v4().to_string(),
            title: self.title,
            description: None,
            subject_name: self.subject_name,
            priority: Priority::High,
            estimated_minutes: Some(self.estimated_minutes),
            status: TaskStatus::Todo,
            xp_reward: self.xp_reward,
            show_on_quest_board: true,
            is_high_cognitive_load: false,
            created_at: Utc::now(),
        }
    }
}

/// Builds mission plans for a player.
pub struct MissionGenerator {
    hardcore: bool,
}

impl MissionGenerator {
    /// Create a generator for the given difficulty.
    pub fn new(hardcore: bool) -> Self {
        Self { hardcore }
    }

    /// One deep-work plan per interest, in interest order.
    pub fn draft_plans(&self, interests: &[String]) -> Vec<MissionPlan> {
        let minutes = if self.hardcore {
            HARDCORE_MISSION_MINUTES
        } else {
            CASUAL_MISSION_MINUTES
        };

        interests
            .iter()
            .map(|subject| MissionPlan {
                title: format!("Deep Work: {}", subject),
                subject_name: subject.clone(),
                estimated_minutes: minutes,
                xp_reward: RewardCalculator::mission_reward(subject, self.hardcore, interests),
            })
            .collect()
    }

    /// Short daily missions for the first [`DAILY_MISSION_LIMIT`]
    /// interests. Flat XP, no subject bonus.
    pub fn daily_missions(&self, interests: &[String]) -> Vec<MissionPlan> {
        let xp = RewardCalculator::daily_mission_xp(self.hardcore);

        interests
            .iter()
            .take(DAILY_MISSION_LIMIT)
            .map(|subject| MissionPlan {
                title: format!("Deep Work: {}", subject),
                subject_name: subject.clone(),
                estimated_minutes: DAILY_MISSION_MINUTES,
                xp_reward: xp,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn interests(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_draft_plans_one_per_interest() {
        let generator = MissionGenerator::new(false);
        let plans = generator.draft_plans(&interests(&["History", "English"]));

        assert_eq!(plans.len(), 2);
        assert_eq!(plans[0].title, "Deep Work: History");
        assert_eq!(plans[0].subject_name, "History");
        assert_eq!(plans[0].estimated_minutes, 30);
        assert_eq!(plans[0].xp_reward, 50);
    }

    #[test]
    fn test_draft_plans_hardcore_lengthens_and_multiplies() {
        let generator = MissionGenerator::new(true);
        let plans = generator.draft_plans(&interests(&["History"]));

        assert_eq!(plans[0].estimated_minutes, 90);
        assert_eq!(plans[0].xp_reward, 75); // 50 * 1.5
    }

    #[test]
    fn test_draft_plans_core_interest_earns_bonus() {
        let generator = MissionGenerator::new(true);
        let plans = generator.draft_plans(&interests(&["Physics", "History"]));

        assert_eq!(plans[0].xp_reward, 95); // 50 * 1.5 + 20
        assert_eq!(plans[1].xp_reward, 75); // 50 * 1.5
    }

    #[test]
    fn test_daily_missions_cap_at_limit() {
        let generator = MissionGenerator::new(false);
        let many = interests(&["A", "B", "C", "D", "E"]);

        let plans = generator.daily_missions(&many);
        assert_eq!(plans.len(), 3);
        assert_eq!(plans[0].subject_name, "A");
        assert_eq!(plans[2].subject_name, "C");
    }

    #[test]
    fn test_daily_missions_use_flat_xp() {
        let casual = MissionGenerator::new(false);
        let hardcore = MissionGenerator::new(true);
        let subjects = interests(&["Physics"]);

        // Flat rate even for a core interest; the bonus formula does not
        // apply to dailies
        assert_eq!(casual.daily_missions(&subjects)[0].xp_reward, 50);
        assert_eq!(hardcore.daily_missions(&subjects)[0].xp_reward, 100);

        assert_eq!(casual.daily_missions(&subjects)[0].estimated_minutes, 25);
    }

    #[test]
    fn test_no_interests_no_missions() {
        let generator = MissionGenerator::new(false);
        assert!(generator.draft_plans(&[]).is_empty());
        assert!(generator.daily_missions(&[]).is_empty());
    }
}
