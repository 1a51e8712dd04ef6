//! Cognitive-load-aware task ordering.
//!
//! When a check-in reports the player is fatigued or burnt out, the day's
//! task list is reordered so light subjects come first and heavy subjects
//! are deferred to the back. The reorder is a stable partition: relative
//! order inside each group is preserved, nothing is dropped or duplicated,
//! and the only field touched is the `is_high_cognitive_load` annotation.
//!
//! In every other state the list passes through untouched.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::subject::SubjectLoadTable;
use crate::task::Task;

/// Player state reported by a cognitive check-in.
///
/// Check-ins store the raw label; labels outside this set are treated as
/// "no adaptation" rather than an error, so a stale or misspelled mode can
/// never scramble the task list.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum CognitiveMode {
    /// Fully rested, take on anything
    Peak,
    /// Normal working state
    Stable,
    /// Tired; heavy subjects should wait
    Fatigue,
    /// Exhausted; heavy subjects must wait
    Burnout,
}

impl CognitiveMode {
    /// Canonical label as stored by check-ins.
    pub fn as_str(&self) -> &'static str {
        match self {
            CognitiveMode::Peak => "Peak",
            CognitiveMode::Stable => "Stable",
            CognitiveMode::Fatigue => "Fatigue",
            CognitiveMode::Burnout => "Burnout",
        }
    }

    /// Parse a check-in mode label. Matching is exact.
    pub fn from_label(label: &str) -> Option<CognitiveMode> {
        match label {
            "Peak" => Some(CognitiveMode::Peak),
            "Stable" => Some(CognitiveMode::Stable),
            "Fatigue" => Some(CognitiveMode::Fatigue),
            "Burnout" => Some(CognitiveMode::Burnout),
            _ => None,
        }
    }

    /// Whether this mode triggers the low-load-first ordering.
    pub fn defers_high_load(&self) -> bool {
        matches!(self, CognitiveMode::Fatigue | CognitiveMode::Burnout)
    }
}

impl fmt::Display for CognitiveMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Task ordering policy driven by subject load scores.
pub struct AdaptationPolicy {
    loads: SubjectLoadTable,
}

impl AdaptationPolicy {
    /// Load scores above this defer a subject when fatigued.
    pub const HIGH_LOAD_THRESHOLD: u8 = 7;

    /// Create a policy over the given load table.
    pub fn new(loads: SubjectLoadTable) -> Self {
        Self { loads }
    }

    /// The load table this policy consults.
    pub fn loads(&self) -> &SubjectLoadTable {
        &self.loads
    }

    /// Whether a subject counts as heavy. Subjects missing from the table
    /// take the default load, so this never fails.
    pub fn is_high_load(&self, subject: &str) -> bool {
        self.loads.load_for(subject) > Self::HIGH_LOAD_THRESHOLD
    }

    /// Reorder tasks for the given mode.
    ///
    /// Peak and Stable return the list untouched. Fatigue and Burnout
    /// stable-partition it: low-load tasks first in their original order
    /// with the annotation cleared, high-load tasks appended in their
    /// original order with the annotation set. The result is always a
    /// permutation of the input and re-applying it is a fixed point.
    pub fn adapt(&self, tasks: Vec<Task>, mode: CognitiveMode) -> Vec<Task> {
        if mode.defers_high_load() {
            self.defer_high_load(tasks)
        } else {
            tasks
        }
    }

    /// Reorder tasks for a raw mode label. Labels outside the recognized
    /// set leave the list untouched.
    pub fn adapt_labelled(&self, tasks: Vec<Task>, label: &str) -> Vec<Task> {
        match CognitiveMode::from_label(label) {
            Some(mode) => self.adapt(tasks, mode),
            None => tasks,
        }
    }

    fn defer_high_load(&self, tasks: Vec<Task>) -> Vec<Task> {
        let mut ordered = Vec::with_capacity(tasks.len());
        let mut deferred = Vec::new();

        for mut task in tasks {
            if self.is_high_load(&task.subject_name) {
                task.is_high_cognitive_load = true;
                deferred.push(task);
            } else {
                task.is_high_cognitive_load = false;
                ordered.push(task);
            }
        }

        ordered.append(&mut deferred);
        ordered
    }
}

impl Default for AdaptationPolicy {
    fn default() -> Self {
        Self::new(SubjectLoadTable::builtin())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reward::Priority;
    use crate::task::TaskStatus;
    use chrono::Utc;

    fn make_task(id: &str, subject: &str) -> Task {
        Task {
            id: id.to_string(),
            title: format!("Task {}", id),
            description: None,
            subject_name: subject.to_string(),
            priority: Priority::Medium,
            estimated_minutes: Some(30),
            status: TaskStatus::Todo,
            xp_reward: 500,
            show_on_quest_board: false,
            is_high_cognitive_load: false,
            created_at: Utc::now(),
        }
    }

    fn ids(tasks: &[Task]) -> Vec<&str> {
        tasks.iter().map(|t| t.id.as_str()).collect()
    }

    fn scored_policy() -> AdaptationPolicy {
        AdaptationPolicy::new(SubjectLoadTable::from_pairs([
            ("Economics", 9),
            ("Physics", 9),
            ("English", 4),
        ]))
    }

    #[test]
    fn test_peak_and_stable_are_identity() {
        let policy = scored_policy();
        let mut flagged = make_task("1", "Economics");
        flagged.is_high_cognitive_load = true;
        let tasks = vec![flagged.clone(), make_task("2", "English")];

        for mode in [CognitiveMode::Peak, CognitiveMode::Stable] {
            let out = policy.adapt(tasks.clone(), mode);
            // Untouched means untouched: even a stale annotation survives
            assert_eq!(out, tasks);
        }
    }

    #[test]
    fn test_burnout_defers_unscored_subject_last_of_all_scored() {
        // Math is absent from the table, so it takes the default load of 5
        // and stays ahead of Economics at 9.
        let policy = AdaptationPolicy::new(SubjectLoadTable::from_pairs([("Economics", 9)]));
        let tasks = vec![make_task("econ", "Economics"), make_task("math", "Math")];

        let out = policy.adapt(tasks, CognitiveMode::Burnout);

        assert_eq!(ids(&out), vec!["math", "econ"]);
        assert!(!out[0].is_high_cognitive_load);
        assert!(out[1].is_high_cognitive_load);
    }

    #[test]
    fn test_fatigue_partition_is_stable() {
        let policy = scored_policy();
        let tasks = vec![
            make_task("1", "Physics"),
            make_task("2", "English"),
            make_task("3", "Economics"),
            make_task("4", "English"),
            make_task("5", "Physics"),
        ];

        let out = policy.adapt(tasks, CognitiveMode::Fatigue);

        // Low-load keeps 2 before 4; high-load keeps 1 before 3 before 5
        assert_eq!(ids(&out), vec!["2", "4", "1", "3", "5"]);
    }

    #[test]
    fn test_annotations_overwritten_each_pass() {
        let policy = scored_policy();
        let mut stale = make_task("1", "English");
        stale.is_high_cognitive_load = true;

        let out = policy.adapt(vec![stale], CognitiveMode::Fatigue);
        assert!(!out[0].is_high_cognitive_load);
    }

    #[test]
    fn test_adapt_is_idempotent() {
        let policy = scored_policy();
        let tasks = vec![
            make_task("1", "Economics"),
            make_task("2", "English"),
            make_task("3", "Physics"),
        ];

        let once = policy.adapt(tasks, CognitiveMode::Burnout);
        let twice = policy.adapt(once.clone(), CognitiveMode::Burnout);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_adapt_preserves_contents() {
        let policy = scored_policy();
        let tasks = vec![
            make_task("1", "Economics"),
            make_task("2", "English"),
            make_task("3", "Physics"),
        ];

        let out = policy.adapt(tasks.clone(), CognitiveMode::Fatigue);

        assert_eq!(out.len(), tasks.len());
        let mut in_ids: Vec<_> = tasks.iter().map(|t| t.id.clone()).collect();
        let mut out_ids: Vec<_> = out.iter().map(|t| t.id.clone()).collect();
        in_ids.sort();
        out_ids.sort();
        assert_eq!(in_ids, out_ids);

        // Titles and estimates ride along unchanged
        for task in &out {
            let original = tasks.iter().find(|t| t.id == task.id).unwrap();
            assert_eq!(task.title, original.title);
            assert_eq!(task.estimated_minutes, original.estimated_minutes);
            assert_eq!(task.priority, original.priority);
        }
    }

    #[test]
    fn test_unknown_label_is_identity() {
        let policy = scored_policy();
        let tasks = vec![make_task("1", "Economics"), make_task("2", "English")];

        for label in ["Recovery", "burnout", "", "PEAK"] {
            let out = policy.adapt_labelled(tasks.clone(), label);
            assert_eq!(out, tasks);
        }
    }

    #[test]
    fn test_labelled_dispatches_known_modes() {
        let policy = scored_policy();
        let tasks = vec![make_task("1", "Economics"), make_task("2", "English")];

        let out = policy.adapt_labelled(tasks, "Burnout");
        assert_eq!(ids(&out), vec!["2", "1"]);
    }

    #[test]
    fn test_mode_labels_round_trip() {
        for mode in [
            CognitiveMode::Peak,
            CognitiveMode::Stable,
            CognitiveMode::Fatigue,
            CognitiveMode::Burnout,
        ] {
            assert_eq!(CognitiveMode::from_label(mode.as_str()), Some(mode));
        }
        assert_eq!(CognitiveMode::from_label("Tired"), None);
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        const SUBJECT_POOL: [&str; 6] = [
            "Physics",
            "Economics",
            "English",
            "History",
            "Math",
            "Geography",
        ];

        fn arbitrary_tasks() -> impl Strategy<Value = Vec<Task>> {
            prop::collection::vec(0usize..SUBJECT_POOL.len(), 0..20).prop_map(|picks| {
                picks
                    .into_iter()
                    .enumerate()
                    .map(|(i, pick)| make_task(&i.to_string(), SUBJECT_POOL[pick]))
                    .collect()
            })
        }

        fn arbitrary_table() -> impl Strategy<Value = SubjectLoadTable> {
            prop::collection::vec(0u8..=10, SUBJECT_POOL.len()).prop_map(|scores| {
                SubjectLoadTable::from_pairs(
                    SUBJECT_POOL.iter().copied().zip(scores.into_iter()),
                )
            })
        }

        proptest! {
            #[test]
            fn adapt_is_a_permutation(tasks in arbitrary_tasks(), table in arbitrary_table()) {
                let policy = AdaptationPolicy::new(table);
                let out = policy.adapt(tasks.clone(), CognitiveMode::Fatigue);

                let mut before: Vec<_> = tasks.iter().map(|t| t.id.clone()).collect();
                let mut after: Vec<_> = out.iter().map(|t| t.id.clone()).collect();
                before.sort();
                after.sort();
                prop_assert_eq!(before, after);
            }

            #[test]
            fn flagged_tasks_sort_after_unflagged(
                tasks in arbitrary_tasks(),
                table in arbitrary_table(),
            ) {
                let policy = AdaptationPolicy::new(table);
                let out = policy.adapt(tasks, CognitiveMode::Burnout);

                let first_flagged = out.iter().position(|t| t.is_high_cognitive_load);
                if let Some(boundary) = first_flagged {
                    prop_assert!(out[boundary..].iter().all(|t| t.is_high_cognitive_load));
                    prop_assert!(out[..boundary].iter().all(|t| !t.is_high_cognitive_load));
                }
            }

            #[test]
            fn flag_tracks_load_threshold(
                tasks in arbitrary_tasks(),
                table in arbitrary_table(),
            ) {
                let policy = AdaptationPolicy::new(table);
                let out = policy.adapt(tasks, CognitiveMode::Fatigue);

                for task in &out {
                    let expected = policy.loads().load_for(&task.subject_name)
                        > AdaptationPolicy::HIGH_LOAD_THRESHOLD;
                    prop_assert_eq!(task.is_high_cognitive_load, expected);
                }
            }
        }
    }
}
