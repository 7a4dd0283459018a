use crate::pollutant::{Pollutant, PollutantReading};
use crate::tier::SeverityTier;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Ascending cut points for one pollutant, in µg/m³. A value must be strictly above a cut point to reach it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Thresholds {
    pub moderate: f64,
    pub high: f64,
    pub emergency: f64,
}

impl Thresholds {
    pub const fn new(moderate: f64, high: f64, emergency: f64) -> Self {
        Self {
            moderate,
            high,
            emergency,
        }
    }

    pub fn verdict(&self, value: f64) -> SeverityTier {
        if value > self.emergency {
            SeverityTier::Emergency
        } else if value > self.high {
            SeverityTier::High
        } else if value > self.moderate {
            SeverityTier::Moderate
        } else {
            SeverityTier::Low
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThresholdTable(BTreeMap<Pollutant, Thresholds>);

impl Default for ThresholdTable {
    /// DEFRA banding.
    fn default() -> Self {
        Self(BTreeMap::from([
            (Pollutant::Pm25, Thresholds::new(12.0, 24.0, 36.0)),
            (Pollutant::Pm10, Thresholds::new(17.0, 34.0, 50.0)),
            (Pollutant::No2, Thresholds::new(67.0, 134.0, 200.0)),
            (Pollutant::No, Thresholds::new(25.0, 50.0, 75.0)),
        ]))
    }
}

impl ThresholdTable {
    pub fn empty() -> Self {
        Self(BTreeMap::new())
    }

    pub fn with(mut self, pollutant: Pollutant, thresholds: Thresholds) -> Self {
        self.0.insert(pollutant, thresholds);
        self
    }

    pub fn get(&self, pollutant: Pollutant) -> Option<&Thresholds> {
        self.0.get(&pollutant)
    }
}

/// Tier of a reading: the worst verdict of any single pollutant. Pollutants without a
/// threshold row are skipped, and the first emergency ends the scan.
pub fn classify(reading: &PollutantReading, table: &ThresholdTable) -> SeverityTier {
    let mut tier = SeverityTier::Low;
    for (pollutant, value) in reading.iter() {
        let Some(thresholds) = table.get(pollutant) else {
            continue;
        };
        let verdict = thresholds.verdict(value);
        if verdict.is_emergency() {
            return SeverityTier::Emergency;
        }
        tier = tier.merge(verdict);
    }
    tier
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reading(values: &[(Pollutant, f64)]) -> PollutantReading {
        values.iter().copied().collect()
    }

    #[test]
    fn empty_reading_is_low() {
        assert_eq!(
            classify(&PollutantReading::new(), &ThresholdTable::default()),
            SeverityTier::Low
        );
    }

    #[test]
    fn pm25_between_high_and_emergency_is_high() {
        let tier = classify(&reading(&[(Pollutant::Pm25, 30.0)]), &ThresholdTable::default());
        assert_eq!(tier, SeverityTier::High);
    }

    #[test]
    fn emergency_short_circuits() {
        let tier = classify(
            &reading(&[(Pollutant::Pm25, 40.0), (Pollutant::No2, 10.0)]),
            &ThresholdTable::default(),
        );
        assert_eq!(tier, SeverityTier::Emergency);
    }

    #[test]
    fn cut_points_are_strict() {
        let table = ThresholdTable::default();
        assert_eq!(classify(&reading(&[(Pollutant::Pm25, 12.0)]), &table), SeverityTier::Low);
        assert_eq!(
            classify(&reading(&[(Pollutant::Pm25, 12.01)]), &table),
            SeverityTier::Moderate
        );
        assert_eq!(classify(&reading(&[(Pollutant::No, 75.0)]), &table), SeverityTier::High);
        assert_eq!(
            classify(&reading(&[(Pollutant::No, 75.5)]), &table),
            SeverityTier::Emergency
        );
    }

    #[test]
    fn moderate_never_overwrites_high() {
        // PM2.5 is scanned before PM10 and NO2.
        let tier = classify(
            &reading(&[
                (Pollutant::Pm25, 25.0),
                (Pollutant::Pm10, 20.0),
                (Pollutant::No2, 70.0),
            ]),
            &ThresholdTable::default(),
        );
        assert_eq!(tier, SeverityTier::High);
    }

    #[test]
    fn pollutants_without_thresholds_are_ignored() {
        let table = ThresholdTable::empty().with(Pollutant::Pm10, Thresholds::new(17.0, 34.0, 50.0));
        let tier = classify(
            &reading(&[(Pollutant::Pm25, 500.0), (Pollutant::Pm10, 20.0)]),
            &table,
        );
        assert_eq!(tier, SeverityTier::Moderate);
    }

    #[test]
    fn raising_one_value_never_lowers_the_tier() {
        let table = ThresholdTable::default();
        let others = [(Pollutant::Pm10, 20.0), (Pollutant::No2, 140.0)];
        let mut previous = SeverityTier::Low;
        for step in 0..100 {
            let mut values = others.to_vec();
            values.push((Pollutant::Pm25, step as f64 * 0.5));
            let tier = classify(&reading(&values), &table);
            assert!(tier >= previous, "tier dropped at PM2.5={}", step as f64 * 0.5);
            previous = tier;
        }
        assert_eq!(previous, SeverityTier::Emergency);
    }
}
