//! Reconstructs a 3D flight trajectory from loosely structured telemetry logs.
//!
//! The pipeline runs in two stages:
//!
//! - [`process`] loads raw bytes into a rectangular [`RawTable`], falling back
//!   from strict UTF-8 to a legacy single-byte encoding to line-by-line recovery.
//! - [`schema`] decides which columns hold altitude and the planar coordinates,
//!   coerces them to numbers and keeps only complete rows.
//!
//! The validated [`Trajectory`] can be handed to a renderer as a [`RenderPlan`].
//!
//! ```rust,no_run
//! use flightlog::pipeline::{run, PipelineConfig};
//!
//! let inference = run("telemetry.csv", &PipelineConfig::default())?;
//! println!("{} points, mapping {}", inference.trajectory.len(), inference.roles);
//! # Ok::<(), flightlog::error::PipelineError>(())
//! ```

pub mod error;
pub mod pipeline;
pub mod process;
pub mod schema;
pub mod trajectory;

pub use error::{LoadError, PipelineError, SchemaError};
pub use process::{load, load_bytes, LoadStage, RawTable};
pub use schema::{infer_and_coerce, ColumnRole, ColumnRoleMap, InferenceOptions, NumericTable};
pub use trajectory::{RenderPlan, Trajectory, TrajectoryPoint};
