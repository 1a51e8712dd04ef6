//! Subject cognitive-load table.
//!
//! Static mapping from subject name to an integer load score in [0, 10],
//! used by the adaptation policy to segregate demanding subjects. Subjects
//! missing from the table always resolve to a fixed fallback score.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Load score assumed for subjects absent from the table.
pub const DEFAULT_LOAD: u8 = 5;

/// Immutable subject -> cognitive load score mapping.
///
/// Built once at startup and treated as fixed configuration. Lookups never
/// fail: unknown subjects resolve to [`DEFAULT_LOAD`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubjectLoadTable {
    scores: HashMap<String, u8>,
    fallback: u8,
}

impl Default for SubjectLoadTable {
    fn default() -> Self {
        Self::builtin()
    }
}

impl SubjectLoadTable {
    /// Create an empty table (every lookup returns the fallback).
    pub fn new() -> Self {
        Self {
            scores: HashMap::new(),
            fallback: DEFAULT_LOAD,
        }
    }

    /// Build a table from explicit (subject, score) pairs.
    ///
    /// Scores are clamped into [0, 10].
    pub fn from_pairs<I, S>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (S, u8)>,
        S: Into<String>,
    {
        let scores = pairs
            .into_iter()
            .map(|(name, score)| (name.into(), score.min(10)))
            .collect();
        Self {
            scores,
            fallback: DEFAULT_LOAD,
        }
    }

    /// The built-in table covering the onboarding subject catalog.
    pub fn builtin() -> Self {
        Self::from_pairs([
            ("Physics", 9),
            ("Economics", 9),
            ("Math", 8),
            ("Mathematics", 8),
            ("Chemistry", 8),
            ("Computer Science", 8),
            ("Science (Phy/Chem/Bio)", 8),
            ("Biology", 7),
            ("Accountancy", 7),
            ("Business Studies", 6),
            ("Social Science", 6),
            ("History", 6),
            ("Political Science", 6),
            ("Psychology", 6),
            ("Sociology", 5),
            ("Geography", 5),
            ("Language 2", 5),
            ("English", 4),
            ("Environmental Studies", 4),
            ("Fine Arts", 3),
            ("Home Science", 3),
            ("Arts", 3),
        ])
    }

    /// Load score for a subject; absent subjects resolve to the fallback.
    pub fn load_for(&self, subject: &str) -> u8 {
        self.scores.get(subject).copied().unwrap_or(self.fallback)
    }

    /// Whether the table has an explicit entry for a subject.
    pub fn contains(&self, subject: &str) -> bool {
        self.scores.contains_key(subject)
    }

    /// Number of explicit entries.
    pub fn len(&self) -> usize {
        self.scores.len()
    }

    /// Whether the table has no explicit entries.
    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_subject_falls_back_to_default() {
        let table = SubjectLoadTable::new();
        assert_eq!(table.load_for("Underwater Basket Weaving"), DEFAULT_LOAD);
    }

    #[test]
    fn explicit_entry_wins_over_fallback() {
        let table = SubjectLoadTable::from_pairs([("Economics", 9)]);
        assert_eq!(table.load_for("Economics"), 9);
        assert_eq!(table.load_for("English"), DEFAULT_LOAD);
    }

    #[test]
    fn scores_clamped_to_ten() {
        let table = SubjectLoadTable::from_pairs([("Physics", 14)]);
        assert_eq!(table.load_for("Physics"), 10);
    }

    #[test]
    fn builtin_covers_catalog_extremes() {
        let table = SubjectLoadTable::builtin();
        assert_eq!(table.load_for("Physics"), 9);
        assert_eq!(table.load_for("Arts"), 3);
        assert!(table.load_for("Fine Arts") <= 10);
    }

    #[test]
    fn lookup_is_case_sensitive() {
        let table = SubjectLoadTable::builtin();
        // Catalog names are stored verbatim; "physics" is a different key.
        assert_eq!(table.load_for("physics"), DEFAULT_LOAD);
    }
}
