use std::path::PathBuf;

use anyhow::Context;
use chrono::{DateTime, Utc};
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

use impact_stats::format::StatsView;
use impact_stats::models::{PeriodKind, StatsConfig, DEFAULT_MIN_ELAPSED_DAYS};
use impact_stats::{report, samples, stats};

#[derive(Parser)]
#[command(name = "impact-stats")]
#[command(about = "Rate, trend and extremum statistics for impact samples", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Summarise samples for one chart period
    Summary {
        #[arg(long)]
        csv: PathBuf,
        #[arg(long, value_enum, default_value_t = PeriodKind::Month)]
        period: PeriodKind,
        /// End of the period window (RFC 3339); defaults to the newest sample
        #[arg(long)]
        as_of: Option<DateTime<Utc>>,
        #[arg(long, default_value_t = DEFAULT_MIN_ELAPSED_DAYS)]
        min_elapsed_days: f64,
        /// Print raw statistics as JSON
        #[arg(long)]
        json: bool,
    },
    /// Generate a markdown report covering every period
    Report {
        #[arg(long)]
        csv: PathBuf,
        #[arg(long)]
        label: Option<String>,
        #[arg(long)]
        as_of: Option<DateTime<Utc>>,
        #[arg(long, default_value_t = DEFAULT_MIN_ELAPSED_DAYS)]
        min_elapsed_days: f64,
        #[arg(long, default_value = "report.md")]
        out: PathBuf,
    },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Summary {
            csv,
            period,
            as_of,
            min_elapsed_days,
            json,
        } => {
            let config = StatsConfig { min_elapsed_days };
            config.validate()?;

            let all = samples::load_csv(&csv)?;
            let as_of = as_of.unwrap_or_else(|| samples::latest_timestamp(&all));
            let window = samples::within_period(&all, period, as_of);
            let summary = stats::compute_with(&window, period, &config);

            if json {
                let body = serde_json::to_string_pretty(&summary)
                    .context("failed to serialize summary")?;
                println!("{body}");
                return Ok(());
            }

            let view = StatsView::new(&summary, period);
            println!("{} ending {}", period.label(), as_of.format("%Y-%m-%d %H:%M UTC"));
            println!("- rate {}", view.rate);
            println!("- trend {}", view.trend);
            println!("- highest {} / lowest {}", view.highest, view.lowest);
            println!("- {} samples", view.sample_count);
        }
        Commands::Report {
            csv,
            label,
            as_of,
            min_elapsed_days,
            out,
        } => {
            let config = StatsConfig { min_elapsed_days };
            config.validate()?;

            let all = samples::load_csv(&csv)?;
            let as_of = as_of.unwrap_or_else(|| samples::latest_timestamp(&all));
            let report = report::build_report(label.as_deref(), as_of, &all, &config);
            std::fs::write(&out, report)
                .with_context(|| format!("failed to write {}", out.display()))?;
            info!(path = %out.display(), "report written");
            println!("Report written to {}.", out.display());
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_defaults_to_month_and_standard_floor() {
        let cli = Cli::try_parse_from(["impact-stats", "summary", "--csv", "samples.csv"]).unwrap();
        match cli.command {
            Commands::Summary {
                period,
                as_of,
                min_elapsed_days,
                json,
                ..
            } => {
                assert_eq!(period, PeriodKind::Month);
                assert!(as_of.is_none());
                assert_eq!(min_elapsed_days, 0.1);
                assert!(!json);
            }
            Commands::Report { .. } => panic!("expected summary"),
        }
    }

    #[test]
    fn parses_three_month_period_and_as_of() {
        let cli = Cli::try_parse_from([
            "impact-stats",
            "summary",
            "--csv",
            "samples.csv",
            "--period",
            "three-month",
            "--as-of",
            "2026-06-30T12:00:00Z",
        ])
        .unwrap();
        match cli.command {
            Commands::Summary { period, as_of, .. } => {
                assert_eq!(period, PeriodKind::ThreeMonth);
                assert_eq!(as_of.unwrap().to_rfc3339(), "2026-06-30T12:00:00+00:00");
            }
            Commands::Report { .. } => panic!("expected summary"),
        }
    }

    #[test]
    fn rejects_unknown_period() {
        let result = Cli::try_parse_from([
            "impact-stats",
            "summary",
            "--csv",
            "samples.csv",
            "--period",
            "week",
        ]);
        assert!(result.is_err());
    }
}
