//! Study availability slots.
//!
//! Fixed day partitions used when asking the player when they study and
//! when suggesting session times. Hours are inclusive on both ends; late
//! night (23:00 through 05:00) belongs to no slot.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Weekday labels, Sunday first.
pub const WEEKDAYS: [&str; 7] = [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];

/// A block of the day available for study.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DaySlot {
    /// 06:00 through 11:00
    Morning,
    /// 12:00 through 17:00
    Afternoon,
    /// 18:00 through 22:00
    Evening,
}

impl DaySlot {
    /// Every slot, in day order.
    pub const ALL: [DaySlot; 3] = [DaySlot::Morning, DaySlot::Afternoon, DaySlot::Evening];

    /// First hour of the slot.
    pub fn start_hour(&self) -> u32 {
        match self {
            DaySlot::Morning => 6,
            DaySlot::Afternoon => 12,
            DaySlot::Evening => 18,
        }
    }

    /// Last hour of the slot, inclusive.
    pub fn end_hour(&self) -> u32 {
        match self {
            DaySlot::Morning => 11,
            DaySlot::Afternoon => 17,
            DaySlot::Evening => 22,
        }
    }

    /// Whether an hour of the day falls in this slot.
    pub fn contains(&self, hour: u32) -> bool {
        (self.start_hour()..=self.end_hour()).contains(&hour)
    }

    /// The slot covering an hour, if any.
    pub fn from_hour(hour: u32) -> Option<DaySlot> {
        DaySlot::ALL.into_iter().find(|slot| slot.contains(hour))
    }

    /// Display label.
    pub fn as_str(&self) -> &'static str {
        match self {
            DaySlot::Morning => "Morning",
            DaySlot::Afternoon => "Afternoon",
            DaySlot::Evening => "Evening",
        }
    }
}

impl fmt::Display for DaySlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DaySlot {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DaySlot::ALL
            .into_iter()
            .find(|slot| slot.as_str() == s)
            .ok_or_else(|| ValidationError::InvalidValue {
                field: "slot".to_string(),
                message: format!("unknown slot '{}' (expected Morning, Afternoon or Evening)", s),
            })
    }
}
