use crate::aggregate::AggregateSummary;
use crate::classify::{ThresholdTable, classify};
use crate::daypart::{DayPartition, TimeOfDay};
use crate::phrases::PhraseBook;
use crate::template::AdvisoryTemplate;
use crate::tier::SeverityTier;
use crate::{DATA_UNAVAILABLE_MESSAGE, EngineError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AdvisoryMode {
    /// Random phrase from the tier pool, with an outlier note.
    #[default]
    Pool,
    /// Fixed message per (time slot, tier).
    Slot,
}

impl AdvisoryMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            AdvisoryMode::Pool => "pool",
            AdvisoryMode::Slot => "slot",
        }
    }
}

impl fmt::Display for AdvisoryMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AdvisoryMode {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "pool" => Ok(AdvisoryMode::Pool),
            "slot" => Ok(AdvisoryMode::Slot),
            other => Err(format!("unknown advisory mode '{other}'")),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AdvisoryConfig {
    pub mode: AdvisoryMode,
    pub thresholds: ThresholdTable,
    pub phrases: PhraseBook,
    pub partition: DayPartition,
}

/// A finished message plus what produced it. `tier` is `None` when no data was available.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Advisory {
    pub text: String,
    pub tier: Option<SeverityTier>,
    pub outlier: Option<String>,
}

impl Advisory {
    pub fn unavailable() -> Self {
        Self {
            text: DATA_UNAVAILABLE_MESSAGE.to_string(),
            tier: None,
            outlier: None,
        }
    }
}

pub fn outlier_note(sensor_name: &str) -> String {
    format!(" Note: {sensor_name} reports higher pollution levels.")
}

/// Builds the advisory for one cycle in the configured mode. `NoData` always yields the
/// unavailable message.
pub fn advise(
    summary: Result<AggregateSummary<'_>, EngineError>,
    time_of_day: TimeOfDay,
    config: &AdvisoryConfig,
    rng: &mut fastrand::Rng,
) -> Advisory {
    let Ok(summary) = summary else {
        return Advisory::unavailable();
    };
    match config.mode {
        AdvisoryMode::Pool => pool_advisory(&summary, time_of_day, config, rng),
        AdvisoryMode::Slot => slot_advisory(&summary, time_of_day, config),
    }
}

/// Classifies the mean and the outlier separately; when they disagree the outlier's tier
/// is reported and the outlier is named in a trailing note.
pub fn pool_advisory(
    summary: &AggregateSummary<'_>,
    time_of_day: TimeOfDay,
    config: &AdvisoryConfig,
    rng: &mut fastrand::Rng,
) -> Advisory {
    let mean_tier = classify(&summary.mean, &config.thresholds);
    let outlier_tier = classify(&summary.outlier.reading, &config.thresholds);
    let diverges = outlier_tier != mean_tier;
    let tier = if diverges { outlier_tier } else { mean_tier };

    let pool = config.phrases.pools.pool(tier);
    let mut text = if pool.is_empty() {
        config.phrases.slots.message(time_of_day, tier).to_string()
    } else {
        let phrase = &pool[rng.usize(..pool.len())];
        AdvisoryTemplate::new(tier, phrase).render(time_of_day)
    };

    let outlier = if diverges {
        text.push_str(&outlier_note(&summary.outlier.name));
        Some(summary.outlier.name.clone())
    } else {
        None
    };

    Advisory {
        text,
        tier: Some(tier),
        outlier,
    }
}

/// Deterministic lookup on the mean tier only. No outlier note.
pub fn slot_advisory(
    summary: &AggregateSummary<'_>,
    time_of_day: TimeOfDay,
    config: &AdvisoryConfig,
) -> Advisory {
    let tier = classify(&summary.mean, &config.thresholds);
    Advisory {
        text: config.phrases.slots.message(time_of_day, tier).to_string(),
        tier: Some(tier),
        outlier: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregate::aggregate;
    use crate::phrases::PhrasePools;
    use crate::pollutant::{Pollutant, SensorSample};

    fn sample(name: &str, values: &[(Pollutant, f64)]) -> SensorSample {
        SensorSample::new(name, values.iter().copied().collect())
    }

    fn config(mode: AdvisoryMode) -> AdvisoryConfig {
        AdvisoryConfig {
            mode,
            ..AdvisoryConfig::default()
        }
    }

    fn single_phrase_pools() -> PhrasePools {
        PhrasePools {
            low: vec!["Clean {time_of_day} air.".to_string()],
            moderate: vec!["Moderate air.".to_string()],
            high: vec!["{Time_of_day} air is poor.".to_string()],
            emergency: vec!["Stay indoors.".to_string()],
        }
    }

    #[test]
    fn no_data_is_unavailable_in_every_mode() {
        let mut rng = fastrand::Rng::with_seed(1);
        for mode in [AdvisoryMode::Pool, AdvisoryMode::Slot] {
            let advisory = advise(aggregate(&[]), TimeOfDay::Morning, &config(mode), &mut rng);
            assert_eq!(advisory.text, DATA_UNAVAILABLE_MESSAGE);
            assert_eq!(advisory.tier, None);
        }
    }

    #[test]
    fn pool_mode_without_divergence_has_no_note() {
        let samples = vec![
            sample("Marsh Lane", &[(Pollutant::Pm25, 4.0)]),
            sample("Plank Lane", &[(Pollutant::Pm25, 6.0)]),
        ];
        let mut config = config(AdvisoryMode::Pool);
        config.phrases.pools = single_phrase_pools();
        let advisory = advise(
            aggregate(&samples),
            TimeOfDay::Lunchtime,
            &config,
            &mut fastrand::Rng::with_seed(3),
        );
        assert_eq!(advisory.text, "Clean lunchtime air.");
        assert_eq!(advisory.tier, Some(SeverityTier::Low));
        assert_eq!(advisory.outlier, None);
    }

    #[test]
    fn pool_mode_names_divergent_outlier() {
        let samples = vec![
            sample("Birmingham Road ", &[(Pollutant::Pm25, 2.0)]),
            sample("Mytton Road", &[(Pollutant::Pm25, 30.0)]),
            sample("Marsh Lane", &[(Pollutant::Pm25, 2.0)]),
            sample("Plank Lane", &[(Pollutant::Pm25, 2.0)]),
            sample("Watton Lane", &[(Pollutant::Pm25, 2.0)]),
        ];
        let mut config = config(AdvisoryMode::Pool);
        config.phrases.pools = single_phrase_pools();
        let advisory = advise(
            aggregate(&samples),
            TimeOfDay::Evening,
            &config,
            &mut fastrand::Rng::with_seed(9),
        );
        assert_eq!(advisory.tier, Some(SeverityTier::High));
        assert_eq!(advisory.outlier.as_deref(), Some("Mytton Road"));
        assert_eq!(
            advisory.text,
            "Evening air is poor. Note: Mytton Road reports higher pollution levels."
        );
    }

    #[test]
    fn pool_mode_picks_from_the_reported_tier_pool() {
        let samples = vec![sample("Marsh Lane", &[(Pollutant::No2, 150.0)])];
        let config = config(AdvisoryMode::Pool);
        let rendered: Vec<String> = config
            .phrases
            .pools
            .high
            .iter()
            .map(|phrase| AdvisoryTemplate::new(SeverityTier::High, phrase).render(TimeOfDay::Morning))
            .collect();
        let mut rng = fastrand::Rng::with_seed(11);
        for _ in 0..25 {
            let advisory = advise(aggregate(&samples), TimeOfDay::Morning, &config, &mut rng);
            assert!(rendered.contains(&advisory.text), "unexpected: {}", advisory.text);
            assert!(!advisory.text.contains('{'));
        }
    }

    #[test]
    fn pool_mode_is_reproducible_with_a_seed() {
        let samples = vec![sample("Marsh Lane", &[(Pollutant::Pm10, 20.0)])];
        let config = config(AdvisoryMode::Pool);
        let first = advise(
            aggregate(&samples),
            TimeOfDay::Morning,
            &config,
            &mut fastrand::Rng::with_seed(5),
        );
        let second = advise(
            aggregate(&samples),
            TimeOfDay::Morning,
            &config,
            &mut fastrand::Rng::with_seed(5),
        );
        assert_eq!(first, second);
    }

    #[test]
    fn slot_mode_looks_up_by_slot_and_tier() {
        let samples = vec![sample("Marsh Lane", &[(Pollutant::Pm25, 15.0)])];
        let config = config(AdvisoryMode::Slot);
        let advisory = advise(
            aggregate(&samples),
            TimeOfDay::Lunchtime,
            &config,
            &mut fastrand::Rng::with_seed(0),
        );
        assert_eq!(advisory.tier, Some(SeverityTier::Moderate));
        assert_eq!(advisory.text, config.phrases.slots.lunchtime.moderate);
    }

    #[test]
    fn slot_mode_emergency_ignores_slot_and_outlier() {
        let samples = vec![
            sample("Marsh Lane", &[(Pollutant::Pm25, 80.0)]),
            sample("Mytton Road", &[(Pollutant::Pm25, 120.0)]),
        ];
        let config = config(AdvisoryMode::Slot);
        for slot in TimeOfDay::ALL {
            let advisory = advise(
                aggregate(&samples),
                slot,
                &config,
                &mut fastrand::Rng::with_seed(0),
            );
            assert_eq!(advisory.text, config.phrases.slots.emergency);
            assert_eq!(advisory.outlier, None);
        }
    }

    #[test]
    fn slot_mode_uses_mean_not_outlier() {
        let samples = vec![
            sample("Marsh Lane", &[(Pollutant::Pm25, 2.0)]),
            sample("Mytton Road", &[(Pollutant::Pm25, 20.0)]),
        ];
        let config = config(AdvisoryMode::Slot);
        let summary = aggregate(&samples).unwrap();
        let advisory = slot_advisory(&summary, TimeOfDay::Morning, &config);
        assert_eq!(advisory.tier, Some(SeverityTier::Low));
    }

    #[test]
    fn mode_parses_case_insensitively() {
        assert_eq!("Slot".parse::<AdvisoryMode>(), Ok(AdvisoryMode::Slot));
        assert_eq!(" pool ".parse::<AdvisoryMode>(), Ok(AdvisoryMode::Pool));
        assert!("random".parse::<AdvisoryMode>().is_err());
    }
}
