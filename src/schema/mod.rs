pub mod alias;
pub mod coerce;
pub mod derive;
pub mod types;

use serde::Serialize;
use tracing::{debug, info, warn};

use crate::error::SchemaError;
use crate::process::RawTable;
use crate::trajectory::Trajectory;

pub use coerce::{NumericCell, NumericTable};
pub use types::{ColumnAssignment, ColumnRole, ColumnRoleMap, Strategy};

/// Fewest columns that can hold altitude, x and y.
pub const MIN_COLUMNS: usize = 3;

#[derive(Debug, Clone, Default)]
pub struct InferenceOptions {
    /// Column names supplied from outside the file. When set, every row of
    /// the table is data.
    pub header: Option<Vec<String>>,
}

/// Diagnostics about one inference run. Reporting never feeds back into the roles.
#[derive(Debug, Clone, Serialize)]
pub struct InferenceReport {
    pub strategy: Strategy,
    pub columns: Vec<ColumnAssignment>,
    pub data_rows: usize,
    pub surviving_rows: usize,
    pub dropped_rows: usize,
    /// Non-empty cells per column that failed numeric coercion.
    pub coercion_failures: Vec<usize>,
}

impl InferenceReport {
    pub fn log(&self) {
        info!(strategy = ?self.strategy, "inferred column roles");
        for col in &self.columns {
            let failures = self.coercion_failures.get(col.index).copied().unwrap_or(0);
            debug!(
                column = col.index,
                label = %col.label,
                role = %col.role,
                failures,
                "column"
            );
            let required = matches!(
                col.role,
                ColumnRole::Altitude | ColumnRole::PlanarX | ColumnRole::PlanarY
            );
            if required && failures > 0 {
                warn!(
                    label = %col.label,
                    role = %col.role,
                    failures,
                    "non-numeric cells in required column"
                );
            }
        }
        info!(
            data_rows = self.data_rows,
            surviving = self.surviving_rows,
            dropped = self.dropped_rows,
            "completeness filter"
        );
    }
}

/// Result of a successful inference.
#[derive(Debug, Clone)]
pub struct Inference {
    pub numeric: NumericTable,
    pub roles: ColumnRoleMap,
    pub trajectory: Trajectory,
    pub report: InferenceReport,
}

/// Assign column roles, coerce to numbers and keep complete rows.
///
/// Strategies, first success wins:
/// 1. declared names (external header, else the first row)
/// 2. fixed positions, for 8+ columns
/// 3. magnitude ranking, for 4–7 columns
#[tracing::instrument(level = "info", skip_all, fields(rows = table.len(), columns = table.width()))]
pub fn infer_and_coerce(
    table: &RawTable,
    options: &InferenceOptions,
) -> Result<Inference, SchemaError> {
    let width = table.width();
    if width < MIN_COLUMNS {
        warn!(columns = width, "need at least {} columns", MIN_COLUMNS);
        return Err(SchemaError::InsufficientColumns { columns: width });
    }

    let (roles, data_rows, numeric) = assign_roles(table, options)
        .ok_or(SchemaError::InsufficientColumns { columns: width })?;
    info!(mapping = %roles, "column mapping");

    let (x, y, altitude) = roles
        .required()
        .ok_or(SchemaError::InsufficientColumns { columns: width })?;

    let trajectory = Trajectory::from_numeric(&numeric, x, y, altitude).ok_or(
        SchemaError::NoValidRows {
            rows: data_rows.len(),
        },
    )?;

    let report = InferenceReport {
        strategy: roles.strategy(),
        columns: roles.columns().to_vec(),
        data_rows: data_rows.len(),
        surviving_rows: trajectory.len(),
        dropped_rows: data_rows.len() - trajectory.len(),
        coercion_failures: numeric.failures().to_vec(),
    };
    report.log();

    Ok(Inference {
        numeric,
        roles,
        trajectory,
        report,
    })
}

/// Pick a role map, the rows it applies to, and the coerced table.
fn assign_roles<'a>(
    table: &'a RawTable,
    options: &InferenceOptions,
) -> Option<(ColumnRoleMap, &'a [Vec<String>], NumericTable)> {
    let width = table.width();
    let rows = table.rows();

    // 1) declared names
    let declared = match &options.header {
        Some(header) => derive::assign_declared(header, width).map(|m| (m, rows)),
        None => rows
            .split_first()
            .and_then(|(first, rest)| derive::assign_declared(first, width).map(|m| (m, rest))),
    };
    if let Some((roles, data)) = declared {
        let numeric = NumericTable::coerce(data, width, &roles);
        return Some((roles, data, numeric));
    }
    debug!("no usable header, falling back to heuristics");

    // 2) fixed positions
    if let Some(roles) = derive::assign_positional(width) {
        let numeric = NumericTable::coerce(rows, width, &roles);
        return Some((roles, rows, numeric));
    }

    // 3) magnitude ranking, over every column
    let numeric = NumericTable::coerce_all(rows, width);
    let roles = derive::assign_by_magnitude(&numeric)?;
    Some((roles, rows, numeric))
}
