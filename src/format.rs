use crate::models::{PeriodKind, SummaryStats};

const ZERO_BAND: f64 = 0.1;

/// Rates and trends: values inside the zero band read as "0.0", everything
/// else carries an explicit sign.
pub fn format_change(value: f64) -> String {
    if value.abs() < ZERO_BAND {
        "0.0".to_string()
    } else {
        format!("{:+.1}", value)
    }
}

pub fn format_extremum(value: f64) -> String {
    format!("{:.1}", value)
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RateDisplay {
    pub value: f64,
    pub unit: &'static str,
}

impl RateDisplay {
    pub fn select(stats: &SummaryStats, period: PeriodKind) -> Self {
        if period.uses_weekly_rate() {
            Self {
                value: stats.weekly_rate,
                unit: "/wk",
            }
        } else {
            Self {
                value: stats.daily_rate,
                unit: "/day",
            }
        }
    }
}

/// Display strings for one period, ready to bind into a chart header.
#[derive(Debug, Clone, PartialEq)]
pub struct StatsView {
    pub period: PeriodKind,
    pub rate: String,
    pub trend: String,
    pub highest: String,
    pub lowest: String,
    pub sample_count: usize,
}

impl StatsView {
    pub fn new(stats: &SummaryStats, period: PeriodKind) -> Self {
        let rate = RateDisplay::select(stats, period);
        Self {
            period,
            rate: format!("{}{}", format_change(rate.value), rate.unit),
            trend: format_change(stats.trend),
            highest: format_extremum(stats.highest),
            lowest: format_extremum(stats.lowest),
            sample_count: stats.sample_count,
        }
    }
}
