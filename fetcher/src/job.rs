use crate::{
    airly,
    config::Config,
    logging,
    publisher::{Publisher, PublishReceipt},
    schedule::Job,
};
use anyhow::{Context, Result};
use orton_core::{
    advisory::{Advisory, AdvisoryConfig, advise},
    aggregate::aggregate,
    classify::classify,
    daypart::TimeOfDay,
    facts::pick_fact,
    pollutant::SensorSample,
    tier::SeverityTier,
};
use reqwest::Client as HTTPClient;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct CycleReport {
    pub message: String,
    pub job: Option<Job>,
    pub sensors_polled: usize,
    pub sensors_reporting: usize,
    pub tier: Option<SeverityTier>,
    pub published: bool,
    pub message_id: Option<i64>,
    pub status_code: i64,
}

impl CycleReport {
    fn skipped(job: Option<Job>, message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            job,
            sensors_polled: 0,
            sensors_reporting: 0,
            tier: None,
            published: false,
            message_id: None,
            status_code: 204,
        }
    }
}

pub struct Cycle<'a, P: Publisher> {
    pub http_client: &'a HTTPClient,
    pub config: &'a Config,
    pub publisher: &'a P,
}

impl<P: Publisher> Cycle<'_, P> {
    pub async fn run(&self, job: Option<Job>, hour: u32) -> Result<CycleReport> {
        let Some(job) = job else {
            logging::Logger::new().info("schedule.idle", "Current time not in any posting window");
            return Ok(CycleReport::skipped(None, "No posting window at this hour"));
        };
        let time_of_day = self.config.advisory.partition.slot_for_hour(hour);
        let mut rng = fastrand::Rng::new();

        match job {
            Job::Fact => {
                let text = pick_fact(&mut rng);
                let receipt = self.publish(job, None, text).await?;
                Ok(CycleReport {
                    message: "Fact posted".to_string(),
                    job: Some(job),
                    sensors_polled: 0,
                    sensors_reporting: 0,
                    tier: None,
                    published: true,
                    message_id: receipt.message_id,
                    status_code: 200,
                })
            }
            Job::Sensor | Job::Emergency => {
                let samples = airly::fetch_samples(self.http_client, self.config).await?;
                let polled = self.config.sensors.len();
                let reporting = samples.len();
                let status_code = cycle_status(polled, reporting);

                let emergency_only = job == Job::Emergency;
                let Some(advisory) = prepare_advisory(
                    &samples,
                    time_of_day,
                    &self.config.advisory,
                    emergency_only,
                    &mut rng,
                ) else {
                    logging::Logger::new()
                        .job(job.as_str())
                        .reporting(reporting)
                        .info("emergency.clear", "No emergency detected");
                    return Ok(CycleReport {
                        sensors_polled: polled,
                        sensors_reporting: reporting,
                        ..CycleReport::skipped(Some(job), "No emergency detected")
                    });
                };

                let receipt = self.publish(job, advisory.tier, &advisory.text).await?;
                Ok(CycleReport {
                    message: format!("Advisory posted from {reporting} of {polled} sensors"),
                    job: Some(job),
                    sensors_polled: polled,
                    sensors_reporting: reporting,
                    tier: advisory.tier,
                    published: true,
                    message_id: receipt.message_id,
                    status_code,
                })
            }
        }
    }

    async fn publish(
        &self,
        job: Job,
        tier: Option<SeverityTier>,
        text: &str,
    ) -> Result<PublishReceipt> {
        let mut logger = logging::Logger::new()
            .job(job.as_str())
            .mode(self.config.advisory.mode.as_str())
            .length(text.chars().count());
        if let Some(tier) = tier {
            logger = logger.tier(tier.as_str());
        }

        let receipt = self
            .publisher
            .publish(text)
            .await
            .inspect_err(|err| logger.error("advisory.publish_failed", err, "Failed to publish"))
            .with_context(|| format!("publishing via {}", self.publisher.name()))?;
        logger.info("advisory.published", text);
        Ok(receipt)
    }
}

/// 206 when some sensors did not report, 200 otherwise.
fn cycle_status(polled: usize, reporting: usize) -> i64 {
    if reporting < polled { 206 } else { 200 }
}

/// Turns one cycle's samples into an advisory. With `emergency_only` the advisory is only
/// produced when the mean reading is an emergency.
pub fn prepare_advisory(
    samples: &[SensorSample],
    time_of_day: TimeOfDay,
    config: &AdvisoryConfig,
    emergency_only: bool,
    rng: &mut fastrand::Rng,
) -> Option<Advisory> {
    let summary = aggregate(samples);
    if emergency_only {
        let summary = summary.as_ref().ok()?;
        if !classify(&summary.mean, &config.thresholds).is_emergency() {
            return None;
        }
    }
    Some(advise(summary, time_of_day, config, rng))
}
