use anyhow::{Context, Result};
use cardlens_finance::{upcoming_payments, AggregateStats, ChartData, StatsDisplay};
use cardlens_ingest::{StatementLoader, StatementSource};
use clap::{Args, Parser, Subcommand};
use serde::Serialize;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod config;
mod render;
mod state;

#[derive(Parser, Debug)]
#[command(name = "cardlens", version, about = "Credit card statement analytics")]
struct Cli {
    #[command(flatten)]
    source: SourceArgs,

    /// Emit JSON instead of text
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Args, Debug)]
struct SourceArgs {
    /// Read extractor output from a local CSV instead of the configured URL
    #[arg(long, global = true, conflicts_with = "url")]
    csv: Option<PathBuf>,

    /// Fetch extractor output from this URL
    #[arg(long, global = true)]
    url: Option<String>,

    /// Request this URL first so the extractor regenerates its output
    #[arg(long, global = true, requires = "url")]
    parse_url: Option<String>,
}

#[derive(Subcommand, Debug)]
enum Command {
    #[command(flatten)]
    View(View),

    /// Configuration file commands
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

#[derive(Subcommand, Debug)]
enum View {
    /// Totals, minimum due and average utilization
    Summary,

    /// Per-card dues, per-issuer distribution and utilization series
    Charts,

    /// Upcoming payments, earliest due date first
    Payments,

    /// Every normalized statement
    Statements,
}

#[derive(Subcommand, Debug)]
enum ConfigCommand {
    /// Write ~/.cardlens/config.toml with defaults
    Init,

    /// Print the effective configuration
    Show,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let cfg = config::load_config()?;
    init_logging(&cfg.output.log_level);

    match cli.command {
        Command::Config { command } => match command {
            ConfigCommand::Init => config::init_config(),
            ConfigCommand::Show => {
                print!("{}", toml::to_string_pretty(&cfg).context("serialize config")?);
                Ok(())
            }
        },
        Command::View(view) => {
            let source = cli.source.resolve(&cfg);
            run_view(view, &source, &cfg, cli.json || cfg.output.json).await
        }
    }
}

impl SourceArgs {
    /// Flags win over the config file.
    fn resolve(&self, cfg: &config::Config) -> StatementSource {
        if let Some(path) = &self.csv {
            return StatementSource::file(path);
        }
        match (&self.url, &self.parse_url) {
            (Some(url), Some(parse_url)) => StatementSource::url(url).with_parse_trigger(parse_url),
            (Some(url), None) => StatementSource::url(url),
            _ => cfg.source.statement_source(),
        }
    }
}

async fn run_view(view: View, source: &StatementSource, cfg: &config::Config, json: bool) -> Result<()> {
    let loader = StatementLoader::new().delimiter(cfg.source.delimiter_byte()?);
    let statements = loader
        .load_statements(source)
        .await
        .with_context(|| format!("Could not load statements from {}", source.describe()))?;

    if statements.is_empty() {
        tracing::warn!("No valid data found in CSV.");
    }

    match view {
        View::Summary => {
            let stats = AggregateStats::compute(&statements);
            if json {
                #[derive(Serialize)]
                struct SummaryOut<'a> {
                    stats: &'a AggregateStats,
                    display: StatsDisplay,
                }
                emit_json(&SummaryOut {
                    stats: &stats,
                    display: stats.display(),
                })
            } else {
                print!("{}", render::summary(&stats));
                Ok(())
            }
        }

        View::Charts => {
            let charts = ChartData::build(&statements);
            if json {
                emit_json(&charts)
            } else {
                print!("{}", render::charts(&charts));
                Ok(())
            }
        }

        View::Payments => {
            let payments = upcoming_payments(&statements);
            if json {
                emit_json(&payments)
            } else {
                print!("{}", render::payments(&payments));
                Ok(())
            }
        }

        View::Statements => {
            if json {
                emit_json(&statements)
            } else {
                print!("{}", render::statements(&statements));
                Ok(())
            }
        }
    }
}

fn emit_json<T: Serialize>(value: &T) -> Result<()> {
    let s = serde_json::to_string_pretty(value).context("serialize output")?;
    println!("{s}");
    Ok(())
}

/// Logs go to stderr so `--json` output stays machine-readable.
fn init_logging(default_level: &str) {
    let filter = EnvFilter::try_from_env("CARDLENS_LOG")
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("cardlens").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_csv_flag_wins() {
        let cli = parse(&["summary", "--csv", "statements.csv"]);
        let source = cli.source.resolve(&config::Config::default());
        assert_eq!(source, StatementSource::file("statements.csv"));
    }

    #[test]
    fn test_url_flag_without_trigger() {
        let cli = parse(&["--url", "http://host/out.csv", "payments"]);
        let source = cli.source.resolve(&config::Config::default());
        assert_eq!(source, StatementSource::url("http://host/out.csv"));
    }

    #[test]
    fn test_url_flag_with_trigger() {
        let cli = parse(&["charts", "--url", "http://host/out.csv", "--parse-url", "http://host/parse"]);
        let source = cli.source.resolve(&config::Config::default());
        assert_eq!(
            source,
            StatementSource::url("http://host/out.csv").with_parse_trigger("http://host/parse")
        );
    }

    #[test]
    fn test_falls_back_to_config() {
        let cli = parse(&["summary", "--json"]);
        assert!(cli.json);
        let cfg = config::Config::default();
        assert_eq!(cli.source.resolve(&cfg), cfg.source.statement_source());
    }

    #[test]
    fn test_config_subcommand_parses() {
        let cli = parse(&["config", "init"]);
        assert!(matches!(cli.command, Command::Config { command: ConfigCommand::Init }));
    }

    #[test]
    fn test_csv_and_url_conflict() {
        let res = Cli::try_parse_from(["cardlens", "summary", "--csv", "a.csv", "--url", "http://x"]);
        assert!(res.is_err());
    }
}
