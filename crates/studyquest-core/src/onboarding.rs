//! Player onboarding: grade-level subject catalog and setup validation.
//!
//! The catalog follows a CBSE-style progression: one shared list for
//! primary grades, one for middle and secondary grades, and per-stream
//! lists for senior secondary (grades 11-12), where no subjects are
//! available until a stream is chosen.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Lowest supported grade.
pub const MIN_GRADE: u8 = 1;
/// Highest supported grade.
pub const MAX_GRADE: u8 = 12;
/// First senior secondary grade; streams apply from here.
pub const SENIOR_SECONDARY_START: u8 = 11;
/// Minimum daily study goal in hours.
pub const MIN_STUDY_HOURS: u32 = 1;
/// Maximum daily study goal in hours.
pub const MAX_STUDY_HOURS: u32 = 6;

const PRIMARY_LAST_GRADE: u8 = 5;
const SECONDARY_LAST_GRADE: u8 = 10;

const LOWER_GRADE_SUBJECTS: [&str; 4] =
    ["Environmental Studies", "Mathematics", "English", "Arts"];

const MIDDLE_GRADE_SUBJECTS: [&str; 5] = [
    "Mathematics",
    "Science (Phy/Chem/Bio)",
    "Social Science",
    "English",
    "Language 2",
];

const SCIENCE_SUBJECTS: [&str; 5] =
    ["Physics", "Chemistry", "Math", "Biology", "Computer Science"];

const COMMERCE_SUBJECTS: [&str; 3] = ["Accountancy", "Business Studies", "Economics"];

const ARTS_SUBJECTS: [&str; 8] = [
    "English",
    "History",
    "Political Science",
    "Psychology",
    "Sociology",
    "Fine Arts",
    "Geography",
    "Home Science",
];

/// Senior secondary stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Stream {
    /// Physics/Chemistry/Math track.
    Science,
    /// Accountancy/Business/Economics track.
    Commerce,
    /// Humanities track.
    Arts,
}

impl Stream {
    /// Every stream, in display order.
    pub const ALL: [Stream; 3] = [Stream::Science, Stream::Commerce, Stream::Arts];

    /// Canonical label.
    pub fn as_str(&self) -> &'static str {
        match self {
            Stream::Science => "Science",
            Stream::Commerce => "Commerce",
            Stream::Arts => "Arts",
        }
    }

    /// Subjects taught in this stream.
    pub fn subjects(&self) -> &'static [&'static str] {
        match self {
            Stream::Science => &SCIENCE_SUBJECTS,
            Stream::Commerce => &COMMERCE_SUBJECTS,
            Stream::Arts => &ARTS_SUBJECTS,
        }
    }
}

impl fmt::Display for Stream {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Stream {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Science" => Ok(Stream::Science),
            "Commerce" => Ok(Stream::Commerce),
            "Arts" => Ok(Stream::Arts),
            other => Err(ValidationError::InvalidValue {
                field: "stream".to_string(),
                message: format!("unknown stream '{}' (expected Science, Commerce or Arts)", other),
            }),
        }
    }
}

/// Subjects available at a grade level.
///
/// Senior secondary grades have no subjects until a stream is chosen.
/// Grade bounds are the caller's concern ([`SetupForm::validate`] checks
/// them); anything above the secondary cutoff falls into the senior
/// branch.
pub fn subjects_for_grade(grade: u8, stream: Option<Stream>) -> Vec<&'static str> {
    if grade <= PRIMARY_LAST_GRADE {
        LOWER_GRADE_SUBJECTS.to_vec()
    } else if grade <= SECONDARY_LAST_GRADE {
        MIDDLE_GRADE_SUBJECTS.to_vec()
    } else {
        stream.map(|s| s.subjects().to_vec()).unwrap_or_default()
    }
}

/// Player setup collected during onboarding.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SetupForm {
    /// Player display name.
    pub name: String,
    /// School grade, 1 through 12.
    pub grade: u8,
    /// Stream, required from grade 11.
    pub stream: Option<Stream>,
    /// Subjects the player wants to improve in.
    pub interests: Vec<String>,
    /// Daily study goal in hours.
    pub daily_goal_hours: u32,
}

impl SetupForm {
    /// Validate the form, accumulating every problem into one failure.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let mut problems = Vec::new();

        if self.name.trim().is_empty() {
            problems.push("Name is required".to_string());
        }
        if !(MIN_GRADE..=MAX_GRADE).contains(&self.grade) {
            problems.push(format!(
                "Grade must be between {} and {}",
                MIN_GRADE, MAX_GRADE
            ));
        }
        if self.grade >= SENIOR_SECONDARY_START && self.stream.is_none() {
            problems.push("Stream is required for grades 11 and 12".to_string());
        }
        if self.interests.is_empty() {
            problems.push("Pick at least one interest".to_string());
        }
        if !(MIN_STUDY_HOURS..=MAX_STUDY_HOURS).contains(&self.daily_goal_hours) {
            problems.push(format!(
                "Daily goal must be between {} and {} hours",
                MIN_STUDY_HOURS, MAX_STUDY_HOURS
            ));
        }

        if problems.is_empty() {
            Ok(())
        } else {
            Err(ValidationError::Multiple { messages: problems })
        }
    }

    /// Subjects available to this player's grade and stream.
    pub fn available_subjects(&self) -> Vec<&'static str> {
        subjects_for_grade(self.grade, self.stream)
    }
}
