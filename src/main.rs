use anyhow::Context;
use clap::Parser;
use hclust::{DistanceMatrix, MetricRegistry, Vector};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::{debug, info, Level};
use tracing_subscriber::FmtSubscriber;

/// Pairwise dissimilarities for hierarchical clustering
#[derive(Parser, Debug)]
#[command(name = "hclust")]
#[command(about = "Compute a pairwise distance matrix over named vectors", long_about = None)]
struct Args {
    /// JSON file holding `[{"name": ..., "vector": [...]}, ...]`
    #[arg(short, long, required_unless_present = "list_metrics")]
    input: Option<PathBuf>,

    /// Distance metric
    #[arg(short, long, default_value = "euclidean")]
    metric: String,

    /// Print the available metrics and exit
    #[arg(long)]
    list_metrics: bool,

    /// Log level
    #[arg(long, default_value = "info")]
    log_level: String,
}

#[derive(Debug, Deserialize)]
struct Item {
    name: String,
    vector: Vector,
}

#[derive(Debug, Serialize)]
struct Report {
    metric: String,
    names: Vec<String>,
    matrix: Vec<Vec<f64>>,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let log_level = match args.log_level.as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let registry = MetricRegistry::global();
    // clap only lets `input` be absent alongside --list-metrics
    let Some(input) = args.input.as_ref().filter(|_| !args.list_metrics) else {
        for name in registry.names() {
            println!("{}", name);
        }
        return Ok(());
    };
    let metric = registry
        .get(&args.metric)
        .with_context(|| format!("available metrics: {}", registry.names().join(", ")))?;

    info!("Reading vectors from {:?}", input);
    let raw = std::fs::read_to_string(input)
        .with_context(|| format!("failed to read {}", input.display()))?;
    let items: Vec<Item> = serde_json::from_str(&raw)
        .with_context(|| format!("failed to parse {}", input.display()))?;
    debug!("Loaded {} vectors", items.len());

    let (names, vectors): (Vec<String>, Vec<Vector>) =
        items.into_iter().map(|item| (item.name, item.vector)).unzip();

    let matrix = DistanceMatrix::compute(&vectors, metric)
        .with_context(|| format!("failed to compute {} distances", metric.name()))?;
    info!(
        "Computed {} pairwise {} distances",
        matrix.condensed().len(),
        metric.name()
    );

    let report = Report {
        metric: metric.name().to_string(),
        names,
        matrix: matrix.to_square(),
    };
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
