use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

pub const DEFAULT_MIN_ELAPSED_DAYS: f64 = 0.1;

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct Sample {
    pub timestamp: DateTime<Utc>,
    pub value: f64,
}

impl Sample {
    pub fn new(timestamp: DateTime<Utc>, value: f64) -> Self {
        Self { timestamp, value }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct SummaryStats {
    pub daily_rate: f64,
    pub weekly_rate: f64,
    pub trend: f64,
    pub highest: f64,
    pub lowest: f64,
    pub sample_count: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, clap::ValueEnum)]
pub enum PeriodKind {
    Day,
    Month,
    ThreeMonth,
    Year,
}

impl PeriodKind {
    pub const ALL: [PeriodKind; 4] = [
        PeriodKind::Day,
        PeriodKind::Month,
        PeriodKind::ThreeMonth,
        PeriodKind::Year,
    ];

    /// Only the year view shows a weekly rate; shorter periods show daily.
    pub fn uses_weekly_rate(self) -> bool {
        matches!(self, PeriodKind::Year)
    }

    pub fn lookback(self) -> Duration {
        match self {
            PeriodKind::Day => Duration::days(1),
            PeriodKind::Month => Duration::days(30),
            PeriodKind::ThreeMonth => Duration::days(90),
            PeriodKind::Year => Duration::days(365),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            PeriodKind::Day => "Day",
            PeriodKind::Month => "Month",
            PeriodKind::ThreeMonth => "3 Months",
            PeriodKind::Year => "Year",
        }
    }
}

/// Tunables for the stats calculator, passed explicitly to every call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StatsConfig {
    /// Floor applied to the span between first and last sample, in days.
    pub min_elapsed_days: f64,
}

impl Default for StatsConfig {
    fn default() -> Self {
        Self {
            min_elapsed_days: DEFAULT_MIN_ELAPSED_DAYS,
        }
    }
}

impl StatsConfig {
    /// The floor actually applied: an unusable value falls back to the default.
    pub fn elapsed_floor_days(&self) -> f64 {
        if self.min_elapsed_days.is_finite() && self.min_elapsed_days > 0.0 {
            self.min_elapsed_days
        } else {
            DEFAULT_MIN_ELAPSED_DAYS
        }
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        anyhow::ensure!(
            self.min_elapsed_days.is_finite() && self.min_elapsed_days > 0.0,
            "min elapsed days must be a positive number, got {}",
            self.min_elapsed_days
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_year_uses_weekly_rate() {
        assert!(!PeriodKind::Day.uses_weekly_rate());
        assert!(!PeriodKind::Month.uses_weekly_rate());
        assert!(!PeriodKind::ThreeMonth.uses_weekly_rate());
        assert!(PeriodKind::Year.uses_weekly_rate());
    }

    #[test]
    fn lookbacks_grow_with_period() {
        assert_eq!(PeriodKind::Day.lookback(), Duration::days(1));
        assert_eq!(PeriodKind::Month.lookback(), Duration::days(30));
        assert_eq!(PeriodKind::ThreeMonth.lookback(), Duration::days(90));
        assert_eq!(PeriodKind::Year.lookback(), Duration::days(365));
    }

    #[test]
    fn config_rejects_non_positive_floor() {
        assert!(StatsConfig::default().validate().is_ok());
        assert!(StatsConfig { min_elapsed_days: 0.0 }.validate().is_err());
        assert!(StatsConfig { min_elapsed_days: -1.0 }.validate().is_err());
        assert!(StatsConfig { min_elapsed_days: f64::NAN }.validate().is_err());
    }

    #[test]
    fn unusable_floor_falls_back_to_default() {
        assert_eq!(StatsConfig { min_elapsed_days: 0.5 }.elapsed_floor_days(), 0.5);
        for bad in [0.0, -2.0, f64::NAN, f64::INFINITY] {
            let config = StatsConfig { min_elapsed_days: bad };
            assert_eq!(config.elapsed_floor_days(), DEFAULT_MIN_ELAPSED_DAYS);
        }
    }
}
