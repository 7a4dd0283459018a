use tracing::{error, info, warn};

pub(crate) const TARGET: &str = "orton_fetcher";

#[derive(Clone, Default)]
pub(crate) struct Logger {
    job: Option<&'static str>,
    mode: Option<&'static str>,
    sensor: Option<String>,
    sensor_id: Option<u64>,
    tier: Option<&'static str>,
    reporting: Option<usize>,
    length: Option<usize>,
    error_text: Option<String>,
}

impl Logger {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn job(mut self, job: &'static str) -> Self {
        self.job = Some(job);
        self
    }

    pub(crate) fn mode(mut self, mode: &'static str) -> Self {
        self.mode = Some(mode);
        self
    }

    pub(crate) fn sensor(mut self, sensor: impl Into<String>) -> Self {
        self.sensor = Some(sensor.into());
        self
    }

    pub(crate) fn sensor_id(mut self, sensor_id: u64) -> Self {
        self.sensor_id = Some(sensor_id);
        self
    }

    pub(crate) fn tier(mut self, tier: &'static str) -> Self {
        self.tier = Some(tier);
        self
    }

    pub(crate) fn reporting(mut self, reporting: usize) -> Self {
        self.reporting = Some(reporting);
        self
    }

    pub(crate) fn length(mut self, length: usize) -> Self {
        self.length = Some(length);
        self
    }

    pub(crate) fn error_text(mut self, error_text: impl Into<String>) -> Self {
        self.error_text = Some(error_text.into());
        self
    }

    pub(crate) fn info(&self, event: &'static str, message: &str) {
        info!(
            target: TARGET,
            event,
            job = self.job,
            mode = self.mode,
            sensor = self.sensor.as_deref(),
            sensor_id = self.sensor_id,
            tier = self.tier,
            reporting = self.reporting,
            length = self.length,
            error_text = ?self.error_text,
            "{}",
            message
        );
    }

    pub(crate) fn warn(&self, event: &'static str, message: &str) {
        warn!(
            target: TARGET,
            event,
            job = self.job,
            mode = self.mode,
            sensor = self.sensor.as_deref(),
            sensor_id = self.sensor_id,
            tier = self.tier,
            reporting = self.reporting,
            error_text = ?self.error_text,
            "{}",
            message
        );
    }

    pub(crate) fn error<E: std::fmt::Debug>(&self, event: &'static str, err: &E, message: &str) {
        error!(
            target: TARGET,
            event,
            job = self.job,
            mode = self.mode,
            sensor = self.sensor.as_deref(),
            sensor_id = self.sensor_id,
            tier = self.tier,
            reporting = self.reporting,
            error_text = ?self.error_text,
            error = ?err,
            "{}",
            message
        );
    }
}
