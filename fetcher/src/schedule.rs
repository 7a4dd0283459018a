use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Job {
    /// Classify the current readings and post an advisory.
    Sensor,
    /// Post an educational fact.
    Fact,
    /// Classify the current readings and post only if the mean is an emergency.
    Emergency,
}

impl Job {
    pub fn as_str(&self) -> &'static str {
        match self {
            Job::Sensor => "sensor",
            Job::Fact => "fact",
            Job::Emergency => "emergency",
        }
    }
}

/// Posting windows as `[start, end)` local hours.
const WINDOWS: &[(u32, u32, Job)] = &[
    (8, 9, Job::Sensor),
    (12, 13, Job::Sensor),
    (16, 17, Job::Sensor),
    (18, 19, Job::Fact),
];

pub fn job_for_hour(hour: u32, emergency_checks: bool) -> Option<Job> {
    WINDOWS
        .iter()
        .find(|(start, end, _)| (*start..*end).contains(&hour))
        .map(|(_, _, job)| *job)
        .or(emergency_checks.then_some(Job::Emergency))
}

/// Optional manual override carried by the invocation payload, e.g. `{"job": "fact"}`.
#[derive(Debug, Default, Deserialize)]
pub struct Invocation {
    #[serde(default)]
    pub job: Option<Job>,
}
