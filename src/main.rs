//! CLI entry point for the Singapore wet-bulb monitor.
//!
//! Provides subcommands for evaluating current or historical conditions,
//! refreshing a live dashboard, and running the calculator offline.

use anyhow::{Context, Result};
use chrono::Utc;
use clap::{Parser, Subcommand};
use std::ffi::OsStr;
use std::path::Path;
use tracing::{error, info};
use tracing_subscriber::{
    EnvFilter, Layer,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};
use wetbulb_sg::{
    analyzers::{
        risk::classify,
        types::{AggregateSample, Report},
        wetbulb::compute_wetbulb,
    },
    fetch::BasicClient,
    output::{print_pretty, render, to_json},
    pipeline::evaluate,
    weather::{DEFAULT_BASE_URL, WeatherClient, parse_timestamp, singapore_timestamp},
};

#[derive(Parser)]
#[command(name = "wetbulb_sg")]
#[command(about = "Live wet-bulb temperature and heat-stress risk for Singapore", long_about = None)]
struct Cli {
    /// Base URL of the data.gov.sg API (defaults to $WETBULB_API_BASE_URL, then the public API)
    #[arg(long, global = true)]
    base_url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Evaluate conditions for the current Singapore time
    Now {
        /// Print the report as JSON
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// Evaluate conditions for a given Singapore-local time
    At {
        /// Local timestamp, e.g. 2024-05-01T12:00:00
        #[arg(value_name = "TIMESTAMP")]
        timestamp: String,

        /// Print the report as JSON
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// Refresh the dashboard at a fixed interval
    Watch {
        /// Seconds between refreshes
        #[arg(short, long, default_value_t = 300)]
        refresh: u64,

        /// Number of refreshes (0 = until interrupted)
        #[arg(short = 'n', long, default_value_t = 0)]
        num_samples: usize,

        /// Print each report as JSON
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// Compute wet-bulb temperature and risk from supplied values, offline
    Calc {
        /// Air temperature in °C
        #[arg(short, long, allow_negative_numbers = true)]
        temperature: f64,

        /// Relative humidity in %
        #[arg(short = 'H', long, allow_negative_numbers = true)]
        humidity: f64,

        /// Print the report as JSON
        #[arg(long, default_value_t = false)]
        json: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok(); // Load .env file

    // Logging setup: colored stderr + JSON rolling log file
    let log_file_path =
        std::env::var("LOG_FILE_PATH").unwrap_or_else(|_| "logs/wetbulb_sg.log".to_string());
    let log_dir = Path::new(&log_file_path)
        .parent()
        .unwrap_or(Path::new("logs"));
    let log_file_name = Path::new(&log_file_path)
        .file_name()
        .unwrap_or(OsStr::new("wetbulb_sg.log"));

    let file_appender = tracing_appender::rolling::daily(log_dir, log_file_name);
    let (non_blocking_file, _file_guard) = tracing_appender::non_blocking(file_appender);

    let stderr_layer = fmt::layer()
        .with_target(true)
        .with_span_events(FmtSpan::CLOSE)
        .with_ansi(true)
        .with_writer(std::io::stderr)
        .with_filter(EnvFilter::from_env("RUST_LOG").add_directive("info".parse()?));

    let json_layer = fmt::layer()
        .json()
        .with_current_span(true)
        .with_span_list(true)
        .with_writer(non_blocking_file)
        .with_filter(EnvFilter::from_env("RUST_LOG_JSON").add_directive("debug".parse()?));

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(json_layer)
        .init();

    let cli = Cli::parse();
    let base_url = cli
        .base_url
        .or_else(|| std::env::var("WETBULB_API_BASE_URL").ok())
        .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

    match cli.command {
        Commands::Now { json } => {
            let client = WeatherClient::with_base_url(BasicClient::new(), base_url);
            let timestamp = singapore_timestamp(Utc::now());
            let report = evaluate(&client, &timestamp).await?;
            present(&report, json)?;
        }
        Commands::At { timestamp, json } => {
            parse_timestamp(&timestamp)
                .with_context(|| format!("'{timestamp}' is not a YYYY-MM-DDTHH:MM:SS timestamp"))?;
            let client = WeatherClient::with_base_url(BasicClient::new(), base_url);
            let report = evaluate(&client, &timestamp).await?;
            present(&report, json)?;
        }
        Commands::Watch {
            refresh,
            num_samples,
            json,
        } => {
            let client = WeatherClient::with_base_url(BasicClient::new(), base_url);
            watch(&client, refresh, num_samples, json).await?;
        }
        Commands::Calc {
            temperature,
            humidity,
            json,
        } => {
            let wetbulb = compute_wetbulb(temperature, humidity)?;
            let (tier, guidance) = classify(wetbulb);
            let report = Report {
                timestamp: None,
                sample: AggregateSample {
                    avg_temperature: temperature,
                    avg_humidity: humidity,
                },
                wetbulb,
                tier,
                guidance,
            };
            present(&report, json)?;
        }
    }

    Ok(())
}

/// Writes a report to stdout as JSON or as the text dashboard.
fn present(report: &Report, json: bool) -> Result<()> {
    print_pretty(report);
    if json {
        println!("{}", to_json(report)?);
    } else {
        print!("{}", render(report));
    }
    Ok(())
}

/// Re-evaluates on a fixed interval. A failed round is reported and the next
/// round acts as the retry.
#[tracing::instrument(skip(client, json))]
async fn watch(
    client: &WeatherClient<BasicClient>,
    refresh: u64,
    num_samples: usize,
    json: bool,
) -> Result<()> {
    if num_samples == 0 {
        info!(refresh, "Refreshing until interrupted. Press Ctrl+C to stop.");
    }

    let mut sample_count = 0;

    loop {
        if num_samples > 0 && sample_count >= num_samples {
            break;
        }
        sample_count += 1;

        let timestamp = singapore_timestamp(Utc::now());
        info!(sample = sample_count, %timestamp, "Refreshing");

        match evaluate(client, &timestamp).await {
            Ok(report) => present(&report, json)?,
            Err(e) => {
                error!(error = %e, "Refresh failed");
                println!("Unable to load readings for {timestamp}: {e}");
            }
        }

        if num_samples == 0 || sample_count < num_samples {
            tokio::time::sleep(tokio::time::Duration::from_secs(refresh)).await;
        }
    }

    Ok(())
}
