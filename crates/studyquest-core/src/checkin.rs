//! Cognitive check-in state.
//!
//! A check-in is a self-report of how the player is doing: a cognitive
//! state index (CSI), a mode label, and optional burnout details. The
//! tracker merges partial updates, so a quick "just the CSI" check-in
//! never wipes the rest of the picture.
//!
//! Completing a daily quest grants a small temporary CSI boost. The boost
//! stacks, but any fresh check-in resets it: a new self-report supersedes
//! whatever the quests were papering over.

use indoc::indoc;
use serde::{Deserialize, Serialize};

use crate::adaptation::CognitiveMode;

/// Temporary CSI granted per completed daily quest.
pub const QUEST_BOOST_CSI: u32 = 5;

/// Partial check-in payload. Only present fields apply.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CheckinUpdate {
    /// Cognitive state index, 0-100 self-report
    pub csi: Option<u32>,

    /// Mode label as reported; parsed lazily, unknown labels are kept
    pub mode: Option<String>,

    /// Burnout questionnaire score
    pub burnout_score: Option<u32>,

    /// Chosen reroute strategy label
    pub reroute_strategy: Option<String>,

    /// How many tasks to shed from today's plan
    pub task_reduction: Option<u32>,
}

/// Latest self-reported cognitive state, plus quest-boost bookkeeping.
///
/// Every field except the boost and streak starts absent: there is no
/// state to speak of until the first check-in lands.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckinTracker {
    /// Cognitive state index from the latest check-in
    pub csi: Option<u32>,

    /// Raw mode label from the latest check-in
    pub mode: Option<String>,

    /// Burnout questionnaire score
    pub burnout_score: Option<u32>,

    /// Reroute strategy label
    pub reroute_strategy: Option<String>,

    /// Requested task reduction
    pub task_reduction: Option<u32>,

    /// Stacked quest boosts since the last check-in
    #[serde(default)]
    pub temporary_csi_boost: u32,

    /// Consecutive days with a completed daily quest
    #[serde(default)]
    pub daily_quest_streak: u32,
}

impl CheckinTracker {
    /// Create an empty tracker.
    pub fn new() -> Self {
        Self::default()
    }

    /// Merge a check-in. Present fields overwrite, absent fields are left
    /// alone, and any temporary boost is cleared: the fresh self-report is
    /// the new baseline.
    pub fn apply(&mut self, update: CheckinUpdate) {
        if let Some(csi) = update.csi {
            self.csi = Some(csi);
        }
        if let Some(mode) = update.mode {
            self.mode = Some(mode);
        }
        if let Some(score) = update.burnout_score {
            self.burnout_score = Some(score);
        }
        if let Some(strategy) = update.reroute_strategy {
            self.reroute_strategy = Some(strategy);
        }
        if let Some(reduction) = update.task_reduction {
            self.task_reduction = Some(reduction);
        }

        self.temporary_csi_boost = 0;
    }

    /// Credit a completed daily quest: the boost stacks and the streak
    /// advances.
    pub fn apply_quest_boost(&mut self) {
        self.temporary_csi_boost += QUEST_BOOST_CSI;
        self.daily_quest_streak += 1;
    }

    /// Clear the temporary boost without touching anything else.
    pub fn reset_temporary_boost(&mut self) {
        self.temporary_csi_boost = 0;
    }

    /// Overwrite the streak, e.g. when a missed day breaks it.
    pub fn set_daily_quest_streak(&mut self, streak: u32) {
        self.daily_quest_streak = streak;
    }

    /// CSI with the quest boost applied. `None` until the first check-in
    /// reports one. Deliberately unclamped: downstream displays decide how
    /// to render an inflated score.
    pub fn effective_csi(&self) -> Option<u32> {
        self.csi.map(|csi| csi + self.temporary_csi_boost)
    }

    /// Parse the stored mode label. Unknown labels yield `None`, which
    /// downstream ordering treats as "no adaptation".
    pub fn cognitive_mode(&self) -> Option<CognitiveMode> {
        self.mode.as_deref().and_then(CognitiveMode::from_label)
    }
}

/// Built-in reroute guidance shown alongside a check-in.
pub fn reroute_strategy_hint(mode: CognitiveMode) -> &'static str {
    match mode {
        CognitiveMode::Peak => indoc! {"
            Ride the momentum. Put the heaviest subject first while the
            energy lasts, and bank the lighter work for later.
        "},
        CognitiveMode::Stable => indoc! {"
            Business as usual. Work the plan in order and keep sessions to
            their estimates.
        "},
        CognitiveMode::Fatigue => indoc! {"
            Ease off. Start with light subjects, push heavy ones to the end
            of the day, and take the full break between sessions.
        "},
        CognitiveMode::Burnout => indoc! {"
            Stop digging. Heavy subjects wait, today's plan shrinks, and a
            short win on an easy task beats grinding a hard one.
        "},
    }
}
