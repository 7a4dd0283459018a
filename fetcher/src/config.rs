use anyhow::{Context, Result, anyhow};
use chrono_tz::Tz;
use orton_core::advisory::{AdvisoryConfig, AdvisoryMode};
use orton_core::classify::ThresholdTable;
use orton_core::daypart::DayPartition;
use orton_core::phrases::PhraseBook;

const DEFAULT_AIRLY_API_BASE: &str = "https://airapi.airly.eu";
const DEFAULT_TIMEZONE: Tz = chrono_tz::Europe::London;
const DEFAULT_SENSORS: &[(u64, &str)] = &[
    (118480, "Birmingham Road"),
    (118482, "Mytton Road"),
    (118495, "Marsh Lane"),
    (118483, "Plank Lane"),
    (118484, "Watton Lane"),
];

/// An Airly installation polled every cycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sensor {
    pub id: u64,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TelegramConfig {
    pub token: String,
    pub chat_id: i64,
    pub thread_id: Option<i32>,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub airly_api_key: Option<String>,
    pub airly_api_base: String,
    pub sensors: Vec<Sensor>,
    pub advisory: AdvisoryConfig,
    pub timezone: Tz,
    pub emergency_checks: bool,
    pub telegram: Option<TelegramConfig>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the configuration from any variable source; blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str| {
            lookup(name)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let sensors = match lookup("ORTON_SENSORS").filter(|raw| !raw.trim().is_empty()) {
            Some(raw) => parse_sensors(&raw)?,
            None => DEFAULT_SENSORS
                .iter()
                .map(|(id, name)| Sensor {
                    id: *id,
                    name: name.to_string(),
                })
                .collect(),
        };

        let mode = match var("ADVISORY_MODE") {
            Some(raw) => raw.parse::<AdvisoryMode>().map_err(|e| anyhow!(e))?,
            None => AdvisoryMode::default(),
        };

        let phrases = match var("ORTON_PHRASES_FILE") {
            Some(path) => {
                let raw = std::fs::read_to_string(&path)
                    .with_context(|| format!("reading phrases file {path}"))?;
                PhraseBook::from_json(&raw).with_context(|| format!("parsing phrases file {path}"))?
            }
            None => PhraseBook::default(),
        };

        let defaults = DayPartition::default();
        let lunchtime_from = parse_hour(var("DAY_LUNCHTIME_FROM"), "DAY_LUNCHTIME_FROM")?
            .unwrap_or(defaults.lunchtime_from);
        let evening_from = parse_hour(var("DAY_EVENING_FROM"), "DAY_EVENING_FROM")?
            .unwrap_or(defaults.evening_from);
        let partition = DayPartition::new(lunchtime_from, evening_from).ok_or_else(|| {
            anyhow!("invalid day partition: lunchtime from {lunchtime_from}, evening from {evening_from}")
        })?;

        let timezone = match var("ORTON_TIMEZONE") {
            Some(raw) => raw
                .parse::<Tz>()
                .map_err(|_| anyhow!("invalid ORTON_TIMEZONE '{raw}'"))?,
            None => DEFAULT_TIMEZONE,
        };

        let emergency_checks = var("EMERGENCY_CHECKS")
            .map(|raw| matches!(raw.to_ascii_lowercase().as_str(), "1" | "true" | "yes"))
            .unwrap_or(false);

        let telegram = match (var("TELOXIDE_TOKEN"), var("TELEGRAM_CHAT_ID")) {
            (Some(token), Some(chat_id)) => Some(TelegramConfig {
                token,
                chat_id: chat_id
                    .parse::<i64>()
                    .with_context(|| format!("invalid TELEGRAM_CHAT_ID '{chat_id}'"))?,
                thread_id: var("TELEGRAM_THREAD_ID")
                    .map(|raw| {
                        raw.parse::<i32>()
                            .with_context(|| format!("invalid TELEGRAM_THREAD_ID '{raw}'"))
                    })
                    .transpose()?,
            }),
            _ => None,
        };

        Ok(Self {
            airly_api_key: var("AIRLY_API_KEY"),
            airly_api_base: var("AIRLY_API_BASE")
                .map(|base| base.trim_end_matches('/').to_string())
                .unwrap_or_else(|| DEFAULT_AIRLY_API_BASE.to_string()),
            sensors,
            advisory: AdvisoryConfig {
                mode,
                thresholds: ThresholdTable::default(),
                phrases,
                partition,
            },
            timezone,
            emergency_checks,
            telegram,
        })
    }
}

/// Parses `id:name;id:name`. Names are kept as written apart from surrounding whitespace.
fn parse_sensors(raw: &str) -> Result<Vec<Sensor>> {
    let sensors = raw
        .split(';')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(|entry| {
            let (id, name) = entry
                .split_once(':')
                .ok_or_else(|| anyhow!("sensor entry '{entry}' is not in the form id:name"))?;
            let id = id
                .trim()
                .parse::<u64>()
                .with_context(|| format!("invalid sensor id in '{entry}'"))?;
            let name = name.trim();
            if name.is_empty() {
                return Err(anyhow!("sensor {id} has no name"));
            }
            Ok(Sensor {
                id,
                name: name.to_string(),
            })
        })
        .collect::<Result<Vec<_>>>()?;

    if sensors.is_empty() {
        return Err(anyhow!("ORTON_SENSORS lists no sensors"));
    }
    Ok(sensors)
}

fn parse_hour(raw: Option<String>, name: &str) -> Result<Option<u32>> {
    raw.map(|value| {
        value
            .parse::<u32>()
            .with_context(|| format!("invalid {name} '{value}'"))
    })
    .transpose()
}
