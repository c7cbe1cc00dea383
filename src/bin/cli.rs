//! Floodcast CLI - offline predictions and forecast lookups

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use std::path::PathBuf;

use floodcast::flood::{FloodClient, FloodClientConfig};
use floodcast::models::PredictionRequest;
use floodcast::Predictor;

/// Default model artifact location (relative to the project root)
const DEFAULT_MODEL_PATH: &str = "models/flood_model.onnx";

#[derive(Parser)]
#[command(name = "floodcast")]
#[command(author, version, about = "Flood prediction utilities", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a single prediction from a JSON input file
    Predict {
        /// Path to a JSON file with the 20 input fields
        #[arg(short, long)]
        input: PathBuf,

        /// Path to the model artifact
        #[arg(short, long, default_value = DEFAULT_MODEL_PATH)]
        model: PathBuf,
    },

    /// Fetch the river discharge forecast for a location
    Weather {
        /// Latitude in decimal degrees
        #[arg(long)]
        latitude: f64,

        /// Longitude in decimal degrees
        #[arg(long)]
        longitude: f64,

        /// Print the full flattened report as JSON
        #[arg(long)]
        json: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Predict { input, model } => predict(&input, &model),
        Commands::Weather {
            latitude,
            longitude,
            json,
        } => weather(latitude, longitude, json).await,
    }
}

fn predict(input: &PathBuf, model: &PathBuf) -> Result<()> {
    let raw = std::fs::read_to_string(input)
        .with_context(|| format!("failed to read input file {:?}", input))?;
    let request: PredictionRequest =
        serde_json::from_str(&raw).context("input file is not a valid prediction request")?;

    let mut predictor =
        Predictor::load(model).with_context(|| format!("failed to load model {:?}", model))?;
    let probability = predictor.predict(&request)?;

    println!(
        "{} {:.4}",
        "Predicted flood probability:".bold(),
        probability
    );

    Ok(())
}

async fn weather(latitude: f64, longitude: f64, json: bool) -> Result<()> {
    let client = FloodClient::new(FloodClientConfig::default());
    let report = client
        .fetch_forecast(latitude, longitude)
        .await
        .context("forecast fetch failed")?
        .into_report();

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!(
        "{} {} daily records for ({}, {})",
        "Forecast:".bold(),
        report.daily_data.len(),
        latitude,
        longitude
    );

    for record in report.daily_data.iter().take(7) {
        let discharge = record
            .river_discharge
            .value()
            .map(|v| format!("{:.2}", v))
            .unwrap_or_else(|| "-".to_string());
        println!("  {}  river discharge {}", record.date, discharge);
    }
    if report.daily_data.len() > 7 {
        println!("  ... ({} more)", report.daily_data.len() - 7);
    }

    Ok(())
}
