use crate::EngineError;
use crate::daypart::TimeOfDay;
use crate::tier::SeverityTier;
use serde::{Deserialize, Serialize};

const LOW: &[&str] = &[
    "The air in Water Orton is fresh and clean this {time_of_day}. A great time for outdoor activities.",
    "Water Orton is enjoying excellent air quality today. Perfect for a jog or a walk.",
    "Crisp air and clear skies in Water Orton make today ideal for outdoor plans.",
    "{Time_of_day} air in Water Orton is pristine. A wonderful time to enjoy nature.",
    "Water Orton's air is perfect today. Take a deep breath and enjoy the fresh conditions.",
    "Clear and clean air surrounds Water Orton this {time_of_day}. A fantastic time to be outdoors.",
    "The air quality in Water Orton is as good as it gets. Time to make the most of it.",
    "Fresh air and sunshine make today perfect for outdoor fun.",
    "Excellent air conditions mean it's a great time to connect with nature.",
    "The air feels crisp and clean this {time_of_day}. Perfect for exploring the outdoors.",
    "Today's air quality is fantastic. Time to step outside and enjoy!",
    "Breathe deeply and enjoy this {time_of_day}'s excellent air quality.",
    "With air this clean, it's an ideal day for outdoor relaxation.",
    "Fresh, clean air means it's a great time for outdoor activities.",
    "The outdoors is calling with air quality this refreshing.",
];

const MODERATE: &[&str] = &[
    "Water Orton's air quality is moderate this {time_of_day}. Sensitive individuals may want to stay indoors.",
    "Air quality in Water Orton is fair but manageable. Take precautions if spending time outdoors.",
    "Moderate pollution in Water Orton means shorter outdoor activities are ideal.",
    "Water Orton's air is hovering in the moderate range today. Limit exposure if sensitive.",
    "{Time_of_day} conditions in Water Orton are fair. Consider breaks indoors during outdoor plans.",
    "Today's air quality in Water Orton isn't perfect, but it's manageable for most.",
    "Moderate air quality this {time_of_day}. Light outdoor activities are fine, but pace yourself.",
    "Conditions are fair, but prolonged exposure outdoors may cause discomfort.",
    "Average pollution levels persist. Sensitive groups should take it easy.",
    "Not the best air day, but manageable for most. Take breaks if necessary.",
    "Air pollution is manageable today. Pace yourself and stay hydrated.",
    "Outdoor activities are okay this {time_of_day}, but sensitive groups should monitor exposure.",
    "Mild pollution levels persist. Take precautions if you feel irritation outdoors.",
    "Moderate air conditions mean light outdoor activities are ideal.",
];

const HIGH: &[&str] = &[
    "Air quality in Water Orton is poor this {time_of_day}. Limit outdoor plans where possible.",
    "Pollution levels are elevated in Water Orton. Take precautions and reduce exposure.",
    "Water Orton's air today is unhealthy. Masks are recommended for outdoor activities.",
    "Poor air quality in Water Orton means sensitive groups should stay indoors.",
    "{Time_of_day} pollution in Water Orton is concerning. Plan your day with safety in mind.",
    "Today's air is unhealthy in Water Orton. Avoid exertion and limit exposure outside.",
    "Poor air quality persists. Stay safe and minimize time outdoors.",
    "High pollution levels call for reduced outdoor exposure and frequent breaks indoors.",
    "Limit your time outdoors this {time_of_day} as poor air conditions persist.",
    "Sensitive individuals should avoid outdoor exposure entirely during today's high pollution.",
    "Elevated pollution levels mean indoor activities are a safer option.",
    "Poor air quality means it's best to avoid vigorous activities outdoors.",
    "Protect your health today. Reduce outdoor exposure and consider indoor alternatives.",
];

const EMERGENCY: &[&str] = &[
    "Dangerous air pollution levels detected in Water Orton. Avoid outdoor exposure entirely.",
    "Critical pollution persists in Water Orton this {time_of_day}. Everyone is advised to stay indoors.",
    "Emergency alert for Water Orton: air quality is hazardous. Limit all exposure immediately.",
    "Severe air conditions in Water Orton pose significant health risks. Take care indoors.",
    "Water Orton's air is dangerously unhealthy. Close all windows and prioritize safety.",
    "{Time_of_day} pollution in Water Orton is extreme. Masks and air purifiers are essential.",
    "Critical air pollution levels require everyone to limit outdoor exposure entirely.",
    "Emergency air pollution alert. Stay indoors and minimize exposure completely.",
    "Hazardous air conditions call for vigilance. Close windows and use air purifiers if possible.",
    "Everyone is advised to remain indoors and avoid exertion due to extreme pollution.",
    "Dangerous pollution levels require staying indoors and minimizing risks completely.",
];

/// Randomly sampled phrases, one pool per tier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhrasePools {
    pub low: Vec<String>,
    pub moderate: Vec<String>,
    pub high: Vec<String>,
    pub emergency: Vec<String>,
}

impl Default for PhrasePools {
    fn default() -> Self {
        let owned = |pool: &[&str]| -> Vec<String> { pool.iter().map(|s| s.to_string()).collect() };
        Self {
            low: owned(LOW),
            moderate: owned(MODERATE),
            high: owned(HIGH),
            emergency: owned(EMERGENCY),
        }
    }
}

impl PhrasePools {
    pub fn pool(&self, tier: SeverityTier) -> &[String] {
        match tier {
            SeverityTier::Low => &self.low,
            SeverityTier::Moderate => &self.moderate,
            SeverityTier::High => &self.high,
            SeverityTier::Emergency => &self.emergency,
        }
    }

    fn validate(&self) -> Result<(), EngineError> {
        for tier in SeverityTier::ALL {
            if self.pool(tier).is_empty() {
                return Err(EngineError::InvalidPhrases(format!("{tier} pool is empty")));
            }
        }
        Ok(())
    }
}

/// Fixed messages for one time slot. Emergency is not per slot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SlotMessages {
    pub low: String,
    pub moderate: String,
    pub high: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SlotTable {
    pub morning: SlotMessages,
    pub lunchtime: SlotMessages,
    pub evening: SlotMessages,
    pub emergency: String,
}

impl Default for SlotTable {
    fn default() -> Self {
        let slot = |low: &str, moderate: &str, high: &str| SlotMessages {
            low: low.to_string(),
            moderate: moderate.to_string(),
            high: high.to_string(),
        };
        Self {
            morning: slot(
                "Good morning Water Orton! The air is clean, a great start for the school run or a morning walk.",
                "Good morning Water Orton. Air quality is moderate, sensitive groups should take it easy on the way to work or school.",
                "Good morning Water Orton. Pollution is high this morning, consider limiting time outdoors and avoiding busy roads.",
            ),
            lunchtime: slot(
                "Lunchtime in Water Orton and the air is fresh. Enjoy your break outdoors.",
                "Air quality in Water Orton is moderate this lunchtime. A short walk is fine, sensitive groups should pace themselves.",
                "Pollution is high in Water Orton this lunchtime. Consider taking your break indoors.",
            ),
            evening: slot(
                "The air in Water Orton is clean this evening. A lovely time to be outside.",
                "Air quality in Water Orton is moderate this evening. Keep outdoor exercise light if you are sensitive.",
                "Pollution is high in Water Orton this evening. Keep windows closed and limit time outdoors.",
            ),
            emergency: "Emergency air pollution alert for Water Orton. Everyone should stay indoors, close windows and avoid all outdoor exertion until levels fall.".to_string(),
        }
    }
}

impl SlotTable {
    /// Emergency resolves to the single global message whatever the slot.
    pub fn message(&self, slot: TimeOfDay, tier: SeverityTier) -> &str {
        let messages = match slot {
            TimeOfDay::Morning => &self.morning,
            TimeOfDay::Lunchtime => &self.lunchtime,
            TimeOfDay::Evening => &self.evening,
        };
        match tier {
            SeverityTier::Low => &messages.low,
            SeverityTier::Moderate => &messages.moderate,
            SeverityTier::High => &messages.high,
            SeverityTier::Emergency => &self.emergency,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PhraseBook {
    pub pools: PhrasePools,
    pub slots: SlotTable,
}

#[derive(Deserialize)]
struct PhraseBookOverride {
    pools: Option<PhrasePools>,
    slots: Option<SlotsOverride>,
    emergency: Option<String>,
}

#[derive(Deserialize)]
struct SlotsOverride {
    morning: Option<SlotMessages>,
    lunchtime: Option<SlotMessages>,
    evening: Option<SlotMessages>,
}

impl PhraseBook {
    /// Parses an override document; omitted sections keep the built-in data.
    pub fn from_json(raw: &str) -> Result<Self, EngineError> {
        let parsed: PhraseBookOverride = serde_json::from_str(raw)?;
        let mut book = Self::default();
        if let Some(pools) = parsed.pools {
            pools.validate()?;
            book.pools = pools;
        }
        if let Some(slots) = parsed.slots {
            if let Some(morning) = slots.morning {
                book.slots.morning = morning;
            }
            if let Some(lunchtime) = slots.lunchtime {
                book.slots.lunchtime = lunchtime;
            }
            if let Some(evening) = slots.evening {
                book.slots.evening = evening;
            }
        }
        if let Some(emergency) = parsed.emergency {
            if emergency.trim().is_empty() {
                return Err(EngineError::InvalidPhrases(
                    "emergency message is empty".to_string(),
                ));
            }
            book.slots.emergency = emergency;
        }
        Ok(book)
    }
}
