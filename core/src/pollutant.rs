use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Pollutant {
    #[serde(rename = "PM2.5")]
    Pm25,
    #[serde(rename = "PM10")]
    Pm10,
    #[serde(rename = "NO2")]
    No2,
    #[serde(rename = "NO")]
    No,
}

impl Pollutant {
    pub const ALL: [Pollutant; 4] = [Pollutant::Pm25, Pollutant::Pm10, Pollutant::No2, Pollutant::No];

    pub fn as_str(&self) -> &'static str {
        match self {
            Pollutant::Pm25 => "PM2.5",
            Pollutant::Pm10 => "PM10",
            Pollutant::No2 => "NO2",
            Pollutant::No => "NO",
        }
    }

    /// Maps an upstream measurement name to a pollutant, `None` for anything we don't track.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.as_str() == name)
    }
}

impl fmt::Display for Pollutant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Concentrations in µg/m³, keyed only by the pollutants the source actually reported.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PollutantReading(BTreeMap<Pollutant, f64>);

impl PollutantReading {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a concentration. Negative or non-finite values are treated as not reported.
    pub fn insert(&mut self, pollutant: Pollutant, value: f64) -> bool {
        if !value.is_finite() || value < 0.0 {
            return false;
        }
        self.0.insert(pollutant, value);
        true
    }

    pub fn with(mut self, pollutant: Pollutant, value: f64) -> Self {
        self.insert(pollutant, value);
        self
    }

    pub fn get(&self, pollutant: Pollutant) -> Option<f64> {
        self.0.get(&pollutant).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Pollutant, f64)> + '_ {
        self.0.iter().map(|(p, v)| (*p, *v))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Highest single concentration, zero when nothing was reported.
    pub fn peak(&self) -> f64 {
        self.0.values().copied().fold(0.0, f64::max)
    }
}

impl FromIterator<(Pollutant, f64)> for PollutantReading {
    fn from_iter<I: IntoIterator<Item = (Pollutant, f64)>>(iter: I) -> Self {
        let mut reading = Self::new();
        for (pollutant, value) in iter {
            reading.insert(pollutant, value);
        }
        reading
    }
}

/// One sensor's reading for a single polling cycle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SensorSample {
    pub name: String,
    pub reading: PollutantReading,
}

impl SensorSample {
    pub fn new(name: impl Into<String>, reading: PollutantReading) -> Self {
        Self {
            name: name.into(),
            reading,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_name_only_knows_tracked_pollutants() {
        assert_eq!(Pollutant::from_name("PM2.5"), Some(Pollutant::Pm25));
        assert_eq!(Pollutant::from_name("NO"), Some(Pollutant::No));
        assert_eq!(Pollutant::from_name("O3"), None);
        assert_eq!(Pollutant::from_name("pm10"), None);
    }

    #[test]
    fn insert_drops_invalid_values() {
        let mut reading = PollutantReading::new();
        assert!(!reading.insert(Pollutant::Pm25, -1.0));
        assert!(!reading.insert(Pollutant::Pm10, f64::NAN));
        assert!(reading.insert(Pollutant::No2, 0.0));
        assert_eq!(reading.len(), 1);
        assert_eq!(reading.get(Pollutant::Pm25), None);
    }

    #[test]
    fn peak_defaults_to_zero() {
        assert_eq!(PollutantReading::new().peak(), 0.0);
        let reading = PollutantReading::new()
            .with(Pollutant::Pm25, 3.5)
            .with(Pollutant::No2, 40.0);
        assert_eq!(reading.peak(), 40.0);
    }

    #[test]
    fn reading_serializes_with_upstream_names() {
        let reading = PollutantReading::new().with(Pollutant::Pm25, 12.5);
        let value = serde_json::to_value(&reading).unwrap();
        assert_eq!(value, serde_json::json!({"PM2.5": 12.5}));
    }
}
