use crate::models::{PeriodKind, Sample, StatsConfig, SummaryStats};

const MILLIS_PER_DAY: f64 = 86_400_000.0;

pub fn compute(samples: &[Sample], period: PeriodKind) -> SummaryStats {
    compute_with(samples, period, &StatsConfig::default())
}

/// Rate, trend and extremum statistics for a sample set.
///
/// Total over its input: empty sets yield the zero result and a single
/// sample yields its value as the trend with no rate. A floor that is not
/// finite and positive is replaced by the default, so rates stay finite.
/// `period` only picks the presented rate later on and does not influence
/// the numbers here.
pub fn compute_with(samples: &[Sample], _period: PeriodKind, config: &StatsConfig) -> SummaryStats {
    match samples {
        [] => SummaryStats::default(),
        [only] => SummaryStats {
            daily_rate: 0.0,
            weekly_rate: 0.0,
            trend: only.value,
            highest: only.value,
            lowest: only.value,
            sample_count: 1,
        },
        _ => {
            let mut sorted = samples.to_vec();
            sorted.sort_by(|a, b| {
                a.timestamp
                    .cmp(&b.timestamp)
                    .then_with(|| a.value.total_cmp(&b.value))
            });

            let first = sorted[0];
            let last = sorted[sorted.len() - 1];
            let elapsed_days = elapsed_days(&first, &last).max(config.elapsed_floor_days());
            let delta = last.value - first.value;
            let daily_rate = delta / elapsed_days;

            let highest = sorted.iter().map(|s| s.value).fold(f64::NEG_INFINITY, f64::max);
            let lowest = sorted.iter().map(|s| s.value).fold(f64::INFINITY, f64::min);

            SummaryStats {
                daily_rate,
                weekly_rate: daily_rate * 7.0,
                trend: delta,
                highest,
                lowest,
                sample_count: sorted.len(),
            }
        }
    }
}

fn elapsed_days(first: &Sample, last: &Sample) -> f64 {
    (last.timestamp - first.timestamp).num_milliseconds() as f64 / MILLIS_PER_DAY
}
