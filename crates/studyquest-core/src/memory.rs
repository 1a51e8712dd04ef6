//! Spaced-repetition memory tracking per topic.
//!
//! Each reviewed topic keeps a retention score and a decay constant. A
//! review bumps the score, slows the decay, and schedules the next
//! revision a few days out; first-time topics get a slightly tighter
//! follow-up so new material is seen again sooner.

use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Retention score granted on first review.
pub const INITIAL_RETENTION: u32 = 60;

/// Retention gained per repeat review.
pub const RETENTION_GAIN: u32 = 5;

/// Retention ceiling.
pub const MAX_RETENTION: u32 = 100;

/// Decay constant for a fresh topic.
pub const INITIAL_DECAY: f64 = 0.1;

/// How much each review slows the decay.
pub const DECAY_STEP: f64 = 0.01;

/// Decay never drops below this.
pub const MIN_DECAY: f64 = 0.01;

/// Days until the next revision after a repeat review.
pub const REVIEW_INTERVAL_DAYS: i64 = 3;

/// Days until the next revision after a first review.
pub const FIRST_REVIEW_INTERVAL_DAYS: i64 = 2;

/// Review history for one topic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MemoryRecord {
    /// Unique id (UUID v4 string)
    pub id: String,
    /// Topic under review
    pub topic: String,
    /// How many times the topic has been reviewed
    pub revision_count: u32,
    /// Current retention score, 0-100
    pub retention_score: u32,
    /// Exponential forgetting rate; lower is stickier
    pub decay_constant: f64,
    /// Date of the latest review
    pub last_revision_date: NaiveDate,
    /// When the topic is due again
    pub next_revision_date: NaiveDate,
}

impl MemoryRecord {
    /// Retention projected onto a future date, following the forgetting
    /// curve `score * e^(-decay * days)`. Dates at or before the last
    /// review project the full score.
    pub fn projected_retention(&self, on: NaiveDate) -> f64 {
        let days = (on - self.last_revision_date).num_days();
        if days <= 0 {
            return self.retention_score as f64;
        }
        self.retention_score as f64 * (-self.decay_constant * days as f64).exp()
    }

    /// Whether the topic is due for revision on the given date.
    pub fn is_due(&self, on: NaiveDate) -> bool {
        on >= self.next_revision_date
    }
}

/// Fold a review into a topic's record.
///
/// A repeat review strengthens the existing record; a first review seeds
/// one. Either way `last_revision_date` becomes `today` and the next
/// revision is scheduled from it.
pub fn record_review(existing: Option<MemoryRecord>, topic: &str, today: NaiveDate) -> MemoryRecord {
    match existing {
        Some(mut record) => {
            record.revision_count += 1;
            record.retention_score = (record.retention_score + RETENTION_GAIN).min(MAX_RETENTION);
            record.decay_constant = (record.decay_constant - DECAY_STEP).max(MIN_DECAY);
            record.last_revision_date = today;
            record.next_revision_date = today + Duration::days(REVIEW_INTERVAL_DAYS);
            record
        }
        None => MemoryRecord {
            id: Uuid::new_v4().to_string(),
            topic: topic.to_string(),
            revision_count: 1,
            retention_score: INITIAL_RETENTION,
            decay_constant: INITIAL_DECAY,
            last_revision_date: today,
            next_revision_date: today + Duration::days(FIRST_REVIEW_INTERVAL_DAYS),
        },
    }
}
