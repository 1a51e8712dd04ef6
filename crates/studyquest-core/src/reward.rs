//! XP reward engine for task completion and level progression.
//!
//! Rewards are looked up from a fixed priority table, mission XP is a small
//! bonus formula on top of a flat base, and levels are derived from lifetime
//! XP. Two level curves are supported:
//!
//! - **Flat**: every level costs the same [`RewardCalculator::XP_PER_LEVEL`].
//!   Used for the profile header and progress bars.
//! - **Geometric**: each level costs 20% more than the previous one. Used for
//!   the long-term progression view where early levels should come quickly.
//!
//! ## Priority Table
//!
//! | Priority | XP | Quest board |
//! |----------|------|-------------|
//! | Urgent | 1500 | yes |
//! | High | 1000 | yes |
//! | Medium | 500 | no |
//! | Low | 250 | no |

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::RewardError;

/// Subjects that qualify for the core-subject mission bonus.
///
/// Both "Math" and "Mathematics" appear because grade catalogs use the short
/// form for senior Science and the long form everywhere else.
pub const CORE_SUBJECTS: [&str; 5] = [
    "Physics",
    "Economics",
    "Mathematics",
    "Math",
    "Computer Science",
];

/// Task priority level.
///
/// Priorities arrive as strings from the CLI and stored task rows; parsing
/// rejects anything outside the four known labels so a typo fails loudly at
/// the boundary instead of silently earning zero XP.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Priority {
    /// Background work, lowest reward
    Low,
    /// Default priority for new tasks
    Medium,
    /// Important work, shown on the quest board
    High,
    /// Drop-everything work, highest reward
    Urgent,
}

impl Priority {
    /// Canonical label as used in storage and the CLI
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Low => "Low",
            Priority::Medium => "Medium",
            Priority::High => "High",
            Priority::Urgent => "Urgent",
        }
    }
}

impl Default for Priority {
    fn default() -> Self {
        Priority::Medium
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Priority {
    type Err = RewardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Low" => Ok(Priority::Low),
            "Medium" => Ok(Priority::Medium),
            "High" => Ok(Priority::High),
            "Urgent" => Ok(Priority::Urgent),
            other => Err(RewardError::InvalidPriority(other.to_string())),
        }
    }
}

/// Reward granted for completing a task of a given priority.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriorityReward {
    /// XP credited on completion
    pub xp: u32,
    /// Whether tasks of this priority appear on the quest board
    pub show_on_quest_board: bool,
}

/// Position within the flat level curve.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LevelProgress {
    /// Current level (starts at 1)
    pub level: u32,
    /// XP earned inside the current level
    pub xp_into_level: u32,
    /// XP still needed to reach the next level
    pub xp_to_next_level: u32,
    /// Progress through the current level, 0.0 to 100.0
    pub progress_percent: f64,
}

/// Position within the geometric level curve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeometricLevel {
    /// Current level (starts at 1)
    pub level: u32,
    /// XP earned inside the current level
    pub xp_into_level: i64,
    /// Total cost of the current level
    pub xp_for_next_level: i64,
}

/// Reward calculation engine.
pub struct RewardCalculator;

impl RewardCalculator {
    /// XP required per level on the flat curve
    pub const XP_PER_LEVEL: i64 = 1000;

    /// Base XP for a focus mission before multipliers
    pub const MISSION_BASE_XP: f64 = 50.0;

    /// Mission XP multiplier in hardcore mode
    pub const HARDCORE_MULTIPLIER: f64 = 1.5;

    /// Extra mission XP when the subject is both core and a declared interest
    pub const CORE_INTEREST_BONUS: f64 = 20.0;

    /// Flat XP for a daily mission in casual mode
    pub const DAILY_MISSION_CASUAL_XP: u32 = 50;

    /// Flat XP for a daily mission in hardcore mode
    pub const DAILY_MISSION_HARDCORE_XP: u32 = 100;

    /// Cost of the first level on the geometric curve
    pub const GEOMETRIC_FIRST_LEVEL_XP: i64 = 1000;

    /// Per-level cost growth factor on the geometric curve
    pub const GEOMETRIC_GROWTH: f64 = 1.2;

    /// Look up the completion reward for a priority.
    pub fn reward_for_priority(priority: Priority) -> PriorityReward {
        match priority {
            Priority::Urgent => PriorityReward {
                xp: 1500,
                show_on_quest_board: true,
            },
            Priority::High => PriorityReward {
                xp: 1000,
                show_on_quest_board: true,
            },
            Priority::Medium => PriorityReward {
                xp: 500,
                show_on_quest_board: false,
            },
            Priority::Low => PriorityReward {
                xp: 250,
                show_on_quest_board: false,
            },
        }
    }

    /// Whether a subject qualifies for the core-subject bonus.
    ///
    /// Matching is exact: subject names come from the grade catalog, not
    /// free-form user input.
    pub fn is_core_subject(subject: &str) -> bool {
        CORE_SUBJECTS.contains(&subject)
    }

    /// XP for a focus mission on `subject`.
    ///
    /// The base reward is multiplied for hardcore mode, and a flat bonus is
    /// added when the subject is a core subject the player has also declared
    /// as an interest. Rounding happens once on the final value.
    pub fn mission_reward(subject: &str, hardcore: bool, interests: &[String]) -> u32 {
        let multiplier = if hardcore {
            Self::HARDCORE_MULTIPLIER
        } else {
            1.0
        };
        let base = Self::MISSION_BASE_XP * multiplier;

        let bonus = if Self::is_core_subject(subject) && interests.iter().any(|i| i == subject) {
            Self::CORE_INTEREST_BONUS
        } else {
            0.0
        };

        (base + bonus).round() as u32
    }

    /// Flat XP for a daily mission.
    pub fn daily_mission_xp(hardcore: bool) -> u32 {
        if hardcore {
            Self::DAILY_MISSION_HARDCORE_XP
        } else {
            Self::DAILY_MISSION_CASUAL_XP
        }
    }

    /// Derive flat-curve level progress from lifetime XP.
    ///
    /// Negative XP is rejected: lifetime XP is additive-only, so a negative
    /// total means upstream accounting is corrupt and rendering a progress
    /// bar from it would hide the bug.
    pub fn level_from_xp(total_xp: i64) -> Result<LevelProgress, RewardError> {
        if total_xp < 0 {
            return Err(RewardError::InvalidXp(total_xp));
        }

        let level = total_xp / Self::XP_PER_LEVEL + 1;
        let xp_into_level = total_xp % Self::XP_PER_LEVEL;
        let xp_to_next_level = Self::XP_PER_LEVEL - xp_into_level;
        let progress_percent =
            (xp_into_level as f64 / Self::XP_PER_LEVEL as f64 * 100.0).min(100.0);

        Ok(LevelProgress {
            level: level as u32,
            xp_into_level: xp_into_level as u32,
            xp_to_next_level: xp_to_next_level as u32,
            progress_percent,
        })
    }

    /// Derive geometric-curve level progress from lifetime XP.
    ///
    /// Unlike [`Self::level_from_xp`] this clamps negative input to zero:
    /// the geometric view is purely cosmetic and tolerates whatever the
    /// caller hands it. Fractional XP is floored before walking the ladder.
    pub fn geometric_level_from_xp(total_xp: f64) -> GeometricLevel {
        let mut remaining = total_xp.floor().max(0.0) as i64;
        let mut level: u32 = 1;
        let mut xp_for_next = Self::GEOMETRIC_FIRST_LEVEL_XP;

        while remaining >= xp_for_next {
            remaining -= xp_for_next;
            level += 1;
            xp_for_next = (xp_for_next as f64 * Self::GEOMETRIC_GROWTH).floor() as i64;
        }

        GeometricLevel {
            level,
            xp_into_level: remaining,
            xp_for_next_level: xp_for_next,
        }
    }
}

impl Default for RewardCalculator {
    fn default() -> Self {
        Self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn interests(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_priority_reward_table() {
        assert_eq!(
            RewardCalculator::reward_for_priority(Priority::Urgent),
            PriorityReward {
                xp: 1500,
                show_on_quest_board: true
            }
        );
        assert_eq!(
            RewardCalculator::reward_for_priority(Priority::High),
            PriorityReward {
                xp: 1000,
                show_on_quest_board: true
            }
        );
        assert_eq!(
            RewardCalculator::reward_for_priority(Priority::Medium),
            PriorityReward {
                xp: 500,
                show_on_quest_board: false
            }
        );
        assert_eq!(
            RewardCalculator::reward_for_priority(Priority::Low),
            PriorityReward {
                xp: 250,
                show_on_quest_board: false
            }
        );
    }

    #[test]
    fn test_quest_board_flag_only_for_high_and_urgent() {
        let on_board: Vec<Priority> = [
            Priority::Low,
            Priority::Medium,
            Priority::High,
            Priority::Urgent,
        ]
        .into_iter()
        .filter(|p| RewardCalculator::reward_for_priority(*p).show_on_quest_board)
        .collect();

        assert_eq!(on_board, vec![Priority::High, Priority::Urgent]);
    }

    #[test]
    fn test_priority_parses_canonical_labels() {
        assert_eq!("Low".parse::<Priority>().unwrap(), Priority::Low);
        assert_eq!("Medium".parse::<Priority>().unwrap(), Priority::Medium);
        assert_eq!("High".parse::<Priority>().unwrap(), Priority::High);
        assert_eq!("Urgent".parse::<Priority>().unwrap(), Priority::Urgent);
    }

    #[test]
    fn test_priority_rejects_unknown_labels() {
        for bad in ["urgent", "HIGH", "Critical", "", " High"] {
            let err = bad.parse::<Priority>().unwrap_err();
            assert_eq!(err, RewardError::InvalidPriority(bad.to_string()));
        }
    }

    #[test]
    fn test_priority_display_round_trips() {
        for p in [
            Priority::Low,
            Priority::Medium,
            Priority::High,
            Priority::Urgent,
        ] {
            assert_eq!(p.to_string().parse::<Priority>().unwrap(), p);
        }
    }

    #[test]
    fn test_level_from_xp_at_zero() {
        let progress = RewardCalculator::level_from_xp(0).unwrap();
        assert_eq!(progress.level, 1);
        assert_eq!(progress.xp_into_level, 0);
        assert_eq!(progress.xp_to_next_level, 1000);
        assert_eq!(progress.progress_percent, 0.0);
    }

    #[test]
    fn test_level_from_xp_at_exact_boundary() {
        // 1000 XP starts level 2 with a full bar ahead
        let progress = RewardCalculator::level_from_xp(1000).unwrap();
        assert_eq!(progress.level, 2);
        assert_eq!(progress.xp_into_level, 0);
        assert_eq!(progress.xp_to_next_level, 1000);
        assert_eq!(progress.progress_percent, 0.0);
    }

    #[test]
    fn test_level_from_xp_mid_level() {
        let progress = RewardCalculator::level_from_xp(7234).unwrap();
        assert_eq!(progress.level, 8); // 7234 / 1000 + 1
        assert_eq!(progress.xp_into_level, 234);
        assert_eq!(progress.xp_to_next_level, 766); // 1000 - 234
        assert!((progress.progress_percent - 23.4).abs() < 1e-9);
    }

    #[test]
    fn test_level_from_xp_rejects_negative() {
        let err = RewardCalculator::level_from_xp(-5).unwrap_err();
        assert_eq!(err, RewardError::InvalidXp(-5));
    }

    #[test]
    fn test_mission_reward_base_cases() {
        // Non-core subject, casual: base only
        assert_eq!(
            RewardCalculator::mission_reward("History", false, &interests(&["History"])),
            50
        );
        // Hardcore multiplies the base: 50 * 1.5
        assert_eq!(RewardCalculator::mission_reward("History", true, &[]), 75);
    }

    #[test]
    fn test_mission_reward_core_interest_bonus() {
        // Core subject declared as an interest earns the bonus: 50 + 20
        assert_eq!(
            RewardCalculator::mission_reward("Physics", false, &interests(&["Physics"])),
            70
        );
        // Both multiplier and bonus: round(75 + 20)
        assert_eq!(
            RewardCalculator::mission_reward("Physics", true, &interests(&["Physics"])),
            95
        );
    }

    #[test]
    fn test_mission_reward_bonus_requires_both_core_and_interest() {
        // Core subject but not an interest
        assert_eq!(
            RewardCalculator::mission_reward("Physics", false, &interests(&["History"])),
            50
        );
        // Interest but not a core subject
        assert_eq!(
            RewardCalculator::mission_reward("English", false, &interests(&["English"])),
            50
        );
    }

    #[test]
    fn test_core_subject_matching_is_exact() {
        assert!(RewardCalculator::is_core_subject("Physics"));
        assert!(RewardCalculator::is_core_subject("Math"));
        assert!(RewardCalculator::is_core_subject("Mathematics"));
        assert!(RewardCalculator::is_core_subject("Economics"));
        assert!(RewardCalculator::is_core_subject("Computer Science"));
        assert!(!RewardCalculator::is_core_subject("physics"));
        assert!(!RewardCalculator::is_core_subject("History"));
    }

    #[test]
    fn test_daily_mission_xp() {
        assert_eq!(RewardCalculator::daily_mission_xp(false), 50);
        assert_eq!(RewardCalculator::daily_mission_xp(true), 100);
    }

    #[test]
    fn test_geometric_level_boundaries() {
        let at_zero = RewardCalculator::geometric_level_from_xp(0.0);
        assert_eq!(at_zero.level, 1);
        assert_eq!(at_zero.xp_into_level, 0);
        assert_eq!(at_zero.xp_for_next_level, 1000);

        let just_below = RewardCalculator::geometric_level_from_xp(999.0);
        assert_eq!(just_below.level, 1);
        assert_eq!(just_below.xp_into_level, 999);

        let at_boundary = RewardCalculator::geometric_level_from_xp(1000.0);
        assert_eq!(at_boundary.level, 2);
        assert_eq!(at_boundary.xp_into_level, 0);
        assert_eq!(at_boundary.xp_for_next_level, 1200); // floor(1000 * 1.2)
    }

    #[test]
    fn test_geometric_level_walks_the_ladder() {
        // 1000 + 1200 = 2200 spent reaching level 3
        let result = RewardCalculator::geometric_level_from_xp(2200.0);
        assert_eq!(result.level, 3);
        assert_eq!(result.xp_into_level, 0);
        assert_eq!(result.xp_for_next_level, 1440); // floor(1200 * 1.2)
    }

    #[test]
    fn test_geometric_level_clamps_and_floors_input() {
        // Negative input clamps to zero instead of erroring
        let negative = RewardCalculator::geometric_level_from_xp(-50.0);
        assert_eq!(negative.level, 1);
        assert_eq!(negative.xp_into_level, 0);

        // Fractional XP floors before the walk
        let fractional = RewardCalculator::geometric_level_from_xp(1000.9);
        assert_eq!(fractional.level, 2);
        assert_eq!(fractional.xp_into_level, 0);
    }
}
