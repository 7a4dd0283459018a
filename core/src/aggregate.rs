use crate::EngineError;
use crate::pollutant::{Pollutant, PollutantReading, SensorSample};
use std::collections::BTreeMap;

/// Per-pollutant means for one cycle and the sample holding the worst single value.
#[derive(Debug, Clone, PartialEq)]
pub struct AggregateSummary<'a> {
    pub mean: PollutantReading,
    pub outlier: &'a SensorSample,
}

/// Averages each pollutant over the samples that reported it, and picks the outlier.
///
/// The outlier is the first sample whose peak value is the highest of the cycle. A
/// sample that reported nothing peaks at zero but loses a tie to one that reported.
pub fn aggregate(samples: &[SensorSample]) -> Result<AggregateSummary<'_>, EngineError> {
    let mut outlier = samples.first().ok_or(EngineError::NoData)?;

    let mut totals: BTreeMap<Pollutant, (f64, usize)> = BTreeMap::new();
    for sample in samples {
        for (pollutant, value) in sample.reading.iter() {
            let entry = totals.entry(pollutant).or_insert((0.0, 0));
            entry.0 += value;
            entry.1 += 1;
        }
        let (peak, best) = (sample.reading.peak(), outlier.reading.peak());
        let fills_silent = peak == best && outlier.reading.is_empty() && !sample.reading.is_empty();
        if peak > best || fills_silent {
            outlier = sample;
        }
    }

    let mean = totals
        .into_iter()
        .map(|(pollutant, (sum, count))| (pollutant, sum / count as f64))
        .collect();

    Ok(AggregateSummary { mean, outlier })
}
