use std::io::Read;
use std::path::Path;

use anyhow::Context;
use chrono::{DateTime, Utc};
use tracing::{debug, info, warn};

use crate::models::{PeriodKind, Sample};

pub fn load_csv(csv_path: &Path) -> anyhow::Result<Vec<Sample>> {
    let file = std::fs::File::open(csv_path)
        .with_context(|| format!("failed to open {}", csv_path.display()))?;
    let samples = read_csv(file).with_context(|| format!("failed to read {}", csv_path.display()))?;
    info!(path = %csv_path.display(), count = samples.len(), "loaded samples");
    Ok(samples)
}

pub fn read_csv<R: Read>(input: R) -> anyhow::Result<Vec<Sample>> {
    let mut reader = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(input);
    let mut samples = Vec::new();

    for (index, result) in reader.deserialize::<Sample>().enumerate() {
        // header is line 1
        let line = index + 2;
        let sample: Sample = result.with_context(|| format!("invalid sample on line {line}"))?;

        if !sample.value.is_finite() {
            warn!(line, value = sample.value, "skipping non-finite sample");
            continue;
        }

        samples.push(sample);
    }

    Ok(samples)
}

/// Samples inside `[as_of - lookback, as_of]`, in input order.
pub fn within_period(samples: &[Sample], period: PeriodKind, as_of: DateTime<Utc>) -> Vec<Sample> {
    let cutoff = as_of - period.lookback();
    let window: Vec<Sample> = samples
        .iter()
        .filter(|s| s.timestamp >= cutoff && s.timestamp <= as_of)
        .copied()
        .collect();
    debug!(?period, %cutoff, kept = window.len(), total = samples.len(), "applied period window");
    window
}

/// Anchor for the period windows: the newest sample, or now for an empty set.
pub fn latest_timestamp(samples: &[Sample]) -> DateTime<Utc> {
    samples
        .iter()
        .map(|s| s.timestamp)
        .max()
        .unwrap_or_else(Utc::now)
}
