use orton_core::pollutant::{Pollutant, PollutantReading, SensorSample};
use serde::Deserialize;

/// Body of `GET /v2/measurements/installation`.
#[derive(Debug, Default, Deserialize)]
pub struct Measurements {
    #[serde(default)]
    pub current: Option<CurrentMeasurements>,
}

#[derive(Debug, Default, Deserialize)]
pub struct CurrentMeasurements {
    #[serde(default)]
    pub values: Vec<MeasurementValue>,
}

#[derive(Debug, Deserialize)]
pub struct MeasurementValue {
    pub name: String,
    pub value: Option<f64>,
}

impl Measurements {
    /// Keeps the tracked pollutants only; nulls and unusable values stay absent.
    pub fn into_reading(self) -> PollutantReading {
        self.current
            .map(|current| current.values)
            .unwrap_or_default()
            .into_iter()
            .filter_map(|entry| Some((Pollutant::from_name(&entry.name)?, entry.value?)))
            .collect()
    }

    pub fn into_sample(self, sensor_name: &str) -> SensorSample {
        SensorSample::new(sensor_name, self.into_reading())
    }
}
