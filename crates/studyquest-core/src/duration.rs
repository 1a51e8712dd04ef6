//! Free-text duration parsing.
//!
//! Turns user-typed duration descriptions ("45 mins", "1.5 hours", "1h 30m",
//! bare "90") into whole minutes. Parsing is best-effort: text that matches
//! no known shape yields `None` rather than an error, so callers can keep
//! the raw text, re-prompt, or store no estimate.

use regex::Regex;

/// Parser for free-text duration descriptions.
///
/// Patterns are tried in a fixed order and the first match wins:
/// 1. `<number> min(s)` -> minutes
/// 2. `<number> hour(s)` -> number * 60
/// 3. `<number>h <number>m` (also `hr`, `hrs`) -> hours * 60 + minutes
/// 4. bare number -> minutes
///
/// Matching happens on the lowercased, trimmed input. Rounding is applied
/// once, on the final computed value, half away from zero.
#[derive(Debug, Clone)]
pub struct DurationParser {
    minutes: Regex,
    hours: Regex,
    combined: Regex,
    bare_number: Regex,
}

impl DurationParser {
    /// Create a parser with the standard patterns.
    ///
    /// # Panics
    /// Panics if the built-in patterns fail to compile, which cannot happen
    /// for the shipped literals. Use [`try_new`](Self::try_new) for a
    /// non-panicking version.
    pub fn new() -> Self {
        Self::try_new().expect("built-in duration patterns compile")
    }

    /// Create a parser, returning a Result.
    ///
    /// # Errors
    /// Returns an error if a pattern fails to compile.
    pub fn try_new() -> Result<Self, regex::Error> {
        Ok(Self {
            minutes: Regex::new(r"([0-9]+\.?[0-9]*)\s*mins?")?,
            hours: Regex::new(r"([0-9]+\.?[0-9]*)\s*hours?")?,
            combined: Regex::new(r"([0-9]+\.?[0-9]*)\s*h[rs]*\s*([0-9]+\.?[0-9]*)\s*m")?,
            bare_number: Regex::new(r"^([0-9]+\.?[0-9]*)$")?,
        })
    }

    /// Parse duration text into whole minutes.
    ///
    /// Returns `None` when no pattern matches. Unparseable input is an
    /// absent value, not an error.
    pub fn parse(&self, text: &str) -> Option<u32> {
        let trimmed = text.trim().to_lowercase();
        if trimmed.is_empty() {
            return None;
        }

        if let Some(caps) = self.minutes.captures(&trimmed) {
            let minutes: f64 = caps[1].parse().ok()?;
            return Some(round_minutes(minutes));
        }

        if let Some(caps) = self.hours.captures(&trimmed) {
            let hours: f64 = caps[1].parse().ok()?;
            return Some(round_minutes(hours * 60.0));
        }

        if let Some(caps) = self.combined.captures(&trimmed) {
            let hours: f64 = caps[1].parse().ok()?;
            let minutes: f64 = caps[2].parse().ok()?;
            return Some(round_minutes(hours * 60.0 + minutes));
        }

        if let Some(caps) = self.bare_number.captures(&trimmed) {
            let minutes: f64 = caps[1].parse().ok()?;
            return Some(round_minutes(minutes));
        }

        None
    }
}

impl Default for DurationParser {
    fn default() -> Self {
        Self::new()
    }
}

/// Round a computed minute value half away from zero.
///
/// Inputs are always non-negative (the patterns have no sign), so this is
/// plain `f64::round` with a saturating cast.
fn round_minutes(value: f64) -> u32 {
    value.round() as u32
}
