use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::info;
use tracing_subscriber::EnvFilter;

use kmeans_explorer::{
    demo_customers, write_clustered_csv, Dataset, Explorer, ExplorerReport, RunConfig, ScaleMode,
};

#[derive(Parser)]
#[command(name = "kmeans-explorer", version, about = "Explore k-means segmentations of a numeric table")]
struct Cli {
    /// Log at debug level regardless of RUST_LOG
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Cluster a CSV/TSV file and print diagnostics
    Run(RunArgs),
    /// Write the synthetic three-segment customer dataset
    Demo(DemoArgs),
}

#[derive(Args)]
struct RunArgs {
    /// Input table with a header row; every column must be numeric
    input: PathBuf,

    /// JSON file with run settings; flags below override it
    #[arg(long)]
    config: Option<PathBuf>,

    /// Comma-separated column names to cluster on (default: all)
    #[arg(long, value_delimiter = ',')]
    features: Option<Vec<String>>,

    #[arg(short, long)]
    k: Option<usize>,

    #[arg(long)]
    k_min: Option<usize>,

    #[arg(long)]
    k_max: Option<usize>,

    #[arg(long, value_enum)]
    scale: Option<ScaleMode>,

    #[arg(long)]
    restarts: Option<usize>,

    #[arg(long)]
    max_iterations: Option<usize>,

    #[arg(long)]
    seed: Option<u64>,

    /// Write the input rows with cluster_id and distance_to_centroid columns
    #[arg(long)]
    export: Option<PathBuf>,

    /// Print the full report as JSON instead of text
    #[arg(long)]
    json: bool,
}

#[derive(Args)]
struct DemoArgs {
    /// Destination file; stdout when omitted
    #[arg(short, long)]
    output: Option<PathBuf>,

    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Command::Run(args) => run(args),
        Command::Demo(args) => demo(args),
    }
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn build_config(args: &RunArgs) -> Result<RunConfig> {
    let mut config = match &args.config {
        Some(path) => RunConfig::from_json_file(path)?,
        None => RunConfig::default(),
    };

    if let Some(features) = &args.features {
        config.features = features.clone();
    }
    if let Some(k) = args.k {
        config.k = k;
    }
    if let Some(k_min) = args.k_min {
        config.k_min = k_min;
    }
    if let Some(k_max) = args.k_max {
        config.k_max = k_max;
    }
    if let Some(scale) = args.scale {
        config.scale = scale;
    }
    if let Some(restarts) = args.restarts {
        config.restarts = restarts;
    }
    if let Some(max_iterations) = args.max_iterations {
        config.max_iterations = max_iterations;
    }
    if args.seed.is_some() {
        config.seed = args.seed;
    }

    Ok(config)
}

fn run(args: RunArgs) -> Result<()> {
    let start = Instant::now();

    let dataset = Dataset::from_path(&args.input)?;
    info!(
        rows = dataset.len(),
        columns = dataset.headers.len(),
        skipped = dataset.skipped.len(),
        "loaded {}",
        args.input.display()
    );
    for message in &dataset.skipped {
        tracing::warn!("{}", message);
    }

    let config = build_config(&args)?;
    let report = Explorer::new(config).run(&dataset)?;

    if let Some(path) = &args.export {
        write_clustered_csv(path, &dataset, &report.feature_rows, &report.solution.assignments)?;
        info!("wrote clustered results to {}", path.display());
    }

    if args.json {
        let json = serde_json::to_string_pretty(&report).context("Failed to serialize report")?;
        println!("{}", json);
    } else {
        print_report(&report);
        println!("\nTotal execution:      {:.3}s", start.elapsed().as_secs_f64());
    }

    Ok(())
}

fn print_report(report: &ExplorerReport) {
    println!("=== k-Means Clustering Explorer ===\n");
    println!("Observations:         {}", report.n_observations);
    println!("Features:             {}", report.features.join(", "));
    println!("Scaling:              {}", report.standardization.mode.label());
    println!("k:                    {}", report.solution.k());
    println!("WCSS:                 {:.1}", report.solution.wcss);
    println!("Avg silhouette:       {:.3}", report.silhouette);
    println!(
        "Largest cluster:      {}",
        report.solution.cluster_sizes.iter().max().copied().unwrap_or(0)
    );

    println!("\n=== Elbow (WCSS by k) ===");
    for point in &report.elbow {
        let marker = if point.k == report.resolved.k { " <" } else { "" };
        println!("  k = {:>2}: {:>12.2}{}", point.k, point.wcss, marker);
    }

    println!("\n=== Silhouette by k ===");
    for point in &report.silhouettes {
        let marker = if point.k == report.resolved.k { " <" } else { "" };
        println!("  k = {:>2}: {:>8.3}{}", point.k, point.silhouette, marker);
    }

    println!("\n=== Cluster Profiles ===");
    for profile in &report.profiles {
        println!("  Cluster {} ({} observations)", profile.label, profile.size);
        for (j, name) in report.features.iter().enumerate() {
            println!(
                "    {:<20} mean {:>10.2}  sd {:>10.2}",
                name, profile.means[j], profile.sds[j]
            );
        }
        println!("    avg distance to centroid: {:.2}", profile.mean_distance);
    }

    println!("\n=== Summary ===");
    println!("{}", report.summary.apa);
    println!();
    println!("{}", report.summary.managerial);
}

fn demo(args: DemoArgs) -> Result<()> {
    let mut rng = match args.seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed),
        None => ChaCha8Rng::from_entropy(),
    };
    let dataset = demo_customers(&mut rng);
    let csv = dataset.to_csv(Some(3));

    match &args.output {
        Some(path) => {
            std::fs::write(path, csv)
                .with_context(|| format!("Failed to write demo data to {}", path.display()))?;
            info!(rows = dataset.len(), "wrote demo dataset to {}", path.display());
        }
        None => println!("{}", csv),
    }

    Ok(())
}
