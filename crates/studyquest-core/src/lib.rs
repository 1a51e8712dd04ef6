//! # StudyQuest Core Library
//!
//! This library provides the core logic for StudyQuest, a gamified study
//! planner. It implements a CLI-first philosophy where all operations are
//! available via a standalone CLI binary, with any richer front end being a
//! thin layer over the same core library.
//!
//! ## Architecture
//!
//! - **Rewards**: Priority-based XP rules, level curves and an additive
//!   XP ledger that only ever grows
//! - **Adaptation**: Check-in driven cognitive modes that reorder and defer
//!   the task list under fatigue
//! - **Planning**: Mission drafting, quest board projection and spaced
//!   revision tracking
//! - **Storage**: SQLite-based progress storage and TOML-based configuration
//!
//! ## Key Components
//!
//! - [`RewardCalculator`]: XP and level arithmetic
//! - [`AdaptationPolicy`]: Task reordering under cognitive load
//! - [`Database`]: Task, check-in and ledger persistence
//! - [`Config`]: Application configuration management

pub mod reward;
pub mod adaptation;
pub mod task;
pub mod subject;
pub mod duration;
pub mod checkin;
pub mod fatigue;
pub mod missions;
pub mod questboard;
pub mod memory;
pub mod onboarding;
pub mod availability;
pub mod storage;
pub mod error;

pub use reward::{GeometricLevel, LevelProgress, Priority, PriorityReward, RewardCalculator};
pub use adaptation::{AdaptationPolicy, CognitiveMode};
pub use task::{Task, TaskDraft, TaskStatus};
pub use subject::SubjectLoadTable;
pub use duration::DurationParser;
pub use checkin::{CheckinTracker, CheckinUpdate};
pub use fatigue::{FatigueLevel, LoadBand};
pub use missions::{MissionGenerator, MissionPlan};
pub use questboard::{QuestDifficulty, QuestKind, QuestView};
pub use memory::MemoryRecord;
pub use onboarding::{SetupForm, Stream};
pub use availability::DaySlot;
pub use storage::{CheckinRecord, Config, Database, Difficulty, PlayerProfile};
pub use error::{
    ConfigError, CoreError, DatabaseError, Result, RewardError, ValidationError,
};
