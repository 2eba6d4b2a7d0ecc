use anyhow::Result;
use clap::Parser;
use flightlog::{
    pipeline::{self, PipelineConfig},
    schema::InferenceOptions,
};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser)]
#[command(
    author,
    version,
    about = "Reconstruct a 3D flight trajectory from a telemetry CSV"
)]
struct Args {
    /// Telemetry log to read
    path: PathBuf,

    /// Comma-separated column names, for files without a header row
    #[arg(long, value_delimiter = ',')]
    header: Option<Vec<String>>,

    /// Number of raw rows to echo after loading
    #[arg(long, default_value_t = 5)]
    preview_rows: usize,

    /// Write the renderer hand-off as JSON to this file
    #[arg(long)]
    plan_out: Option<PathBuf>,
}

fn main() -> Result<()> {
    // ─── 1) init logging ─────────────────────────────────────────────
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt::Subscriber::builder()
        .with_env_filter(env)
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    info!(path = %args.path.display(), "reading telemetry");

    // ─── 2) load + infer, plan only on success ───────────────────────
    let config = PipelineConfig {
        inference: InferenceOptions {
            header: args.header,
        },
        preview_rows: args.preview_rows,
    };
    let inference = pipeline::run_and_plan(&args.path, &config, args.plan_out.as_deref())?;

    // ─── 3) summary ──────────────────────────────────────────────────
    let trajectory = &inference.trajectory;
    let ranges = trajectory.ranges();
    println!("Column mapping ({:?}): {}", inference.roles.strategy(), inference.roles);
    println!("Plotting {} data points", trajectory.len());
    println!("X range: {}", ranges.x);
    println!("Y range: {}", ranges.y);
    println!("Altitude range: {}", ranges.altitude);
    if let Some(out) = &args.plan_out {
        println!("Render plan written to {}", out.display());
    }

    Ok(())
}
