//! Display tiers for fatigue and cognitive load scores.
//!
//! Pure classification over self-reported scores. Tiers drive styling and
//! wording only; nothing downstream branches on them for scheduling.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Severity tier for a burnout questionnaire score (0-100).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum FatigueLevel {
    /// Nothing to worry about
    Minimal,
    /// Noticeable but manageable
    Low,
    /// Worth easing the plan
    Moderate,
    /// Plan should shrink
    High,
    /// Stop and recover
    Critical,
}

impl FatigueLevel {
    /// Classify a burnout score.
    pub fn from_score(score: u32) -> FatigueLevel {
        match score {
            80.. => FatigueLevel::Critical,
            60..=79 => FatigueLevel::High,
            40..=59 => FatigueLevel::Moderate,
            20..=39 => FatigueLevel::Low,
            _ => FatigueLevel::Minimal,
        }
    }

    /// Display label.
    pub fn label(&self) -> &'static str {
        match self {
            FatigueLevel::Minimal => "Minimal",
            FatigueLevel::Low => "Low",
            FatigueLevel::Moderate => "Moderate",
            FatigueLevel::High => "High",
            FatigueLevel::Critical => "Critical",
        }
    }
}

impl fmt::Display for FatigueLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Styling band over a task's relative load multiplier.
///
/// The multiplier compares a task's complexity against the day's average;
/// 1.0 means typical.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum LoadBand {
    /// At or below the usual load
    Steady,
    /// Somewhat above usual
    Elevated,
    /// Well above usual
    Intense,
}

impl LoadBand {
    /// Classify a load multiplier. `NaN` falls through to `Steady`.
    pub fn from_score(score: f64) -> LoadBand {
        if score >= 1.5 {
            LoadBand::Intense
        } else if score >= 1.2 {
            LoadBand::Elevated
        } else {
            LoadBand::Steady
        }
    }

    /// Display label.
    pub fn label(&self) -> &'static str {
        match self {
            LoadBand::Steady => "Steady",
            LoadBand::Elevated => "Elevated",
            LoadBand::Intense => "Intense",
        }
    }
}

impl fmt::Display for LoadBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
