use std::fmt::Write;

use chrono::{DateTime, Utc};

use crate::format::StatsView;
use crate::models::{PeriodKind, Sample, StatsConfig};
use crate::samples;
use crate::stats;

pub fn period_views(
    all_samples: &[Sample],
    as_of: DateTime<Utc>,
    config: &StatsConfig,
) -> Vec<StatsView> {
    PeriodKind::ALL
        .iter()
        .map(|&period| {
            let window = samples::within_period(all_samples, period, as_of);
            let summary = stats::compute_with(&window, period, config);
            StatsView::new(&summary, period)
        })
        .collect()
}

pub fn build_report(
    label: Option<&str>,
    as_of: DateTime<Utc>,
    all_samples: &[Sample],
    config: &StatsConfig,
) -> String {
    let views = period_views(all_samples, as_of, config);

    let mut output = String::new();
    let label = label.unwrap_or("all samples");

    let _ = writeln!(output, "# Impact Summary Report");
    let _ = writeln!(
        output,
        "Generated for {} ({} samples, as of {})",
        label,
        all_samples.len(),
        as_of.format("%Y-%m-%d %H:%M UTC")
    );

    for view in views.iter() {
        let _ = writeln!(output);
        let _ = writeln!(output, "## {}", view.period.label());

        if view.sample_count == 0 {
            let _ = writeln!(output, "No samples in this period.");
        }

        let _ = writeln!(output, "- Rate: {}", view.rate);
        let _ = writeln!(output, "- Trend: {}", view.trend);
        let _ = writeln!(output, "- Highest: {}", view.highest);
        let _ = writeln!(output, "- Lowest: {}", view.lowest);
        let _ = writeln!(output, "- Samples: {}", view.sample_count);
    }

    output
}
