// src/pipeline.rs
use anyhow::Context;
use std::path::Path;
use tracing::info;

use crate::error::PipelineError;
use crate::process::{self, RawTable};
use crate::schema::{self, Inference, InferenceOptions};
use crate::trajectory::{write_render_plan, RenderPlan};

/// Options for a full load → infer run.
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    pub inference: InferenceOptions,
    /// Rows echoed to the diagnostics channel after loading.
    pub preview_rows: usize,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            inference: InferenceOptions::default(),
            preview_rows: 5,
        }
    }
}

/// Load `path`, infer its roles and return the validated trajectory.
#[tracing::instrument(level = "info", skip(path, config), fields(path = %path.as_ref().display()))]
pub fn run<P: AsRef<Path>>(path: P, config: &PipelineConfig) -> Result<Inference, PipelineError> {
    let table = process::load(&path)?;
    run_table(&table, config)
}

/// Run the pipeline and, only when it succeeds, hand the trajectory to the
/// renderer by writing a plan to `plan_out`.
pub fn run_and_plan<P: AsRef<Path>>(
    path: P,
    config: &PipelineConfig,
    plan_out: Option<&Path>,
) -> anyhow::Result<Inference> {
    let inference = run(&path, config)
        .with_context(|| format!("processing {}", path.as_ref().display()))?;
    if let Some(out) = plan_out {
        write_render_plan(&RenderPlan::new(&inference.trajectory), out)?;
    }
    Ok(inference)
}

/// Same as [`run`], for an already loaded table.
pub fn run_table(table: &RawTable, config: &PipelineConfig) -> Result<Inference, PipelineError> {
    let (rows, columns) = table.shape();
    info!(rows, columns, stage = ?table.stage(), "data shape");
    preview(table, config.preview_rows);

    let inference = schema::infer_and_coerce(table, &config.inference)?;

    let ranges = inference.trajectory.ranges();
    info!(points = inference.trajectory.len(), "trajectory ready");
    info!(x = %ranges.x, y = %ranges.y, altitude = %ranges.altitude, "ranges");
    Ok(inference)
}

fn preview(table: &RawTable, n: usize) {
    for (idx, row) in table.rows().iter().take(n).enumerate() {
        info!(row = idx, cells = ?row, "preview");
    }
}
