use serde::{Deserialize, Serialize};
use std::fmt;

/// Coarse time-of-day label used for flavour text and slot lookups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeOfDay {
    Morning,
    Lunchtime,
    Evening,
}

impl TimeOfDay {
    pub const ALL: [TimeOfDay; 3] = [TimeOfDay::Morning, TimeOfDay::Lunchtime, TimeOfDay::Evening];

    pub fn label(&self) -> &'static str {
        match self {
            TimeOfDay::Morning => "morning",
            TimeOfDay::Lunchtime => "lunchtime",
            TimeOfDay::Evening => "evening",
        }
    }

    /// Label with only its first letter upper-cased, for the start of a sentence.
    pub fn capitalized(&self) -> String {
        let label = self.label();
        let mut chars = label.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Hour boundaries splitting the day: `[0, lunchtime_from)` is morning,
/// `[lunchtime_from, evening_from)` lunchtime, the rest evening.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayPartition {
    pub lunchtime_from: u32,
    pub evening_from: u32,
}

impl Default for DayPartition {
    fn default() -> Self {
        Self {
            lunchtime_from: 11,
            evening_from: 14,
        }
    }
}

impl DayPartition {
    /// Returns `None` unless `0 < lunchtime_from < evening_from <= 24`.
    pub fn new(lunchtime_from: u32, evening_from: u32) -> Option<Self> {
        if lunchtime_from == 0 || lunchtime_from >= evening_from || evening_from > 24 {
            return None;
        }
        Some(Self {
            lunchtime_from,
            evening_from,
        })
    }

    pub fn slot_for_hour(&self, hour: u32) -> TimeOfDay {
        if hour < self.lunchtime_from {
            TimeOfDay::Morning
        } else if hour < self.evening_from {
            TimeOfDay::Lunchtime
        } else {
            TimeOfDay::Evening
        }
    }
}
