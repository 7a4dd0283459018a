use crate::{
    config::{Config, Sensor},
    logging,
    sensor::Measurements,
};
use anyhow::{Context, Result};
use futures::StreamExt;
use orton_core::pollutant::SensorSample;
use reqwest::Client as HTTPClient;

const MEASUREMENTS_PATH: &str = "/v2/measurements/installation";
const CONCURRENCY_LIMIT: usize = 5;

/// Polls every configured sensor concurrently. Samples come back in configured order;
/// sensors that fail are logged and left out, so a total outage yields an empty list.
pub async fn fetch_samples(http_client: &HTTPClient, config: &Config) -> Result<Vec<SensorSample>> {
    let Some(api_key) = config.airly_api_key.as_deref() else {
        logging::Logger::new()
            .reporting(0)
            .warn("sensor.fetch_failed", "AIRLY_API_KEY is not set, no sensor polled");
        return Ok(Vec::new());
    };

    let fetch_futures = config
        .sensors
        .iter()
        .map(|sensor| fetch_sample(http_client, &config.airly_api_base, api_key, sensor));

    let results: Vec<_> = futures::stream::iter(fetch_futures)
        .buffered(CONCURRENCY_LIMIT)
        .collect()
        .await;

    Ok(keep_reporting(results, &config.sensors))
}

/// Pairs each result with its sensor and drops the failures, preserving order.
fn keep_reporting(results: Vec<Result<SensorSample>>, sensors: &[Sensor]) -> Vec<SensorSample> {
    results
        .into_iter()
        .zip(sensors)
        .filter_map(|(result, sensor)| match result {
            Ok(sample) => Some(sample),
            Err(err) => {
                logging::Logger::new()
                    .sensor(&sensor.name)
                    .sensor_id(sensor.id)
                    .error_text(err.to_string())
                    .error("sensor.fetch_failed", &err, "Error fetching data for sensor");
                None
            }
        })
        .collect()
}

async fn fetch_sample(
    client: &HTTPClient,
    api_base: &str,
    api_key: &str,
    sensor: &Sensor,
) -> Result<SensorSample> {
    let url = measurements_url(api_base, sensor.id);
    let response = client
        .get(&url)
        .header("apikey", api_key)
        .header("Accept", "application/json")
        .send()
        .await
        .with_context(|| format!("requesting measurements for installation {}", sensor.id))?;
    response.error_for_status_ref()?;

    let measurements: Measurements = response
        .json()
        .await
        .with_context(|| format!("decoding measurements for installation {}", sensor.id))?;
    Ok(measurements.into_sample(&sensor.name))
}

fn measurements_url(api_base: &str, installation_id: u64) -> String {
    format!("{api_base}{MEASUREMENTS_PATH}?installationId={installation_id}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::anyhow;
    use orton_core::pollutant::{Pollutant, PollutantReading};

    #[test]
    fn measurements_url_targets_installation() {
        assert_eq!(
            measurements_url("https://airapi.airly.eu", 118482),
            "https://airapi.airly.eu/v2/measurements/installation?installationId=118482"
        );
    }

    fn sensors(names: &[&str]) -> Vec<Sensor> {
        names
            .iter()
            .enumerate()
            .map(|(id, name)| Sensor {
                id: id as u64,
                name: name.to_string(),
            })
            .collect()
    }

    fn ok_sample(name: &str, pm25: f64) -> Result<SensorSample> {
        Ok(SensorSample::new(
            name,
            PollutantReading::new().with(Pollutant::Pm25, pm25),
        ))
    }

    #[tokio::test]
    async fn fetch_without_api_key_yields_no_samples() {
        let config = Config::from_lookup(|_| None).unwrap();
        let samples = fetch_samples(&HTTPClient::new(), &config).await.unwrap();
        assert!(samples.is_empty());
    }

    #[test]
    fn keep_reporting_drops_failed_sensor_and_keeps_order() {
        let sensors = sensors(&["Birmingham Road", "Mytton Road", "Marsh Lane"]);
        let results = vec![
            ok_sample("Birmingham Road", 4.0),
            Err(anyhow!("status 500")),
            ok_sample("Marsh Lane", 9.0),
        ];
        let samples = keep_reporting(results, &sensors);
        let names: Vec<&str> = samples.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["Birmingham Road", "Marsh Lane"]);
    }

    #[test]
    fn keep_reporting_all_failed_is_empty() {
        let sensors = sensors(&["Plank Lane", "Watton Lane"]);
        let results = vec![Err(anyhow!("timeout")), Err(anyhow!("timeout"))];
        assert!(keep_reporting(results, &sensors).is_empty());
    }
}
