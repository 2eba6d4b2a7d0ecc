// src/trajectory/mod.rs
pub mod plan;

use serde::Serialize;

use crate::schema::coerce::NumericTable;

pub use plan::{write_render_plan, RenderPlan};

/// One validated position. Only built from rows where x, y and altitude all parsed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TrajectoryPoint {
    pub x: f64,
    pub y: f64,
    pub altitude: f64,
    /// Index of the source row among the data rows.
    pub row: usize,
}

impl TrajectoryPoint {
    pub fn as_tuple(&self) -> (f64, f64, f64) {
        (self.x, self.y, self.altitude)
    }
}

/// Min/max of one axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AxisRange {
    pub min: f64,
    pub max: f64,
}

impl std::fmt::Display for AxisRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:.2}, {:.2}]", self.min, self.max)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TrajectoryRanges {
    pub x: AxisRange,
    pub y: AxisRange,
    pub altitude: AxisRange,
}

/// Ordered, non-empty sequence of points in source row order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Trajectory {
    points: Vec<TrajectoryPoint>,
}

impl Trajectory {
    /// Keep only rows whose x, y and altitude cells are all present.
    /// Returns `None` when no row survives.
    pub fn from_numeric(
        numeric: &NumericTable,
        x: usize,
        y: usize,
        altitude: usize,
    ) -> Option<Self> {
        let points: Vec<TrajectoryPoint> = (0..numeric.len())
            .filter_map(|row| {
                Some(TrajectoryPoint {
                    x: numeric.get(row, x)?,
                    y: numeric.get(row, y)?,
                    altitude: numeric.get(row, altitude)?,
                    row,
                })
            })
            .collect();

        if points.is_empty() {
            None
        } else {
            Some(Self { points })
        }
    }

    pub fn points(&self) -> &[TrajectoryPoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// `from_numeric` only builds trajectories with at least one point, so
    /// this holds for every `Trajectory` value.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn start(&self) -> &TrajectoryPoint {
        &self.points[0]
    }

    pub fn end(&self) -> &TrajectoryPoint {
        &self.points[self.points.len() - 1]
    }

    pub fn ranges(&self) -> TrajectoryRanges {
        TrajectoryRanges {
            x: self.axis(|p| p.x),
            y: self.axis(|p| p.y),
            altitude: self.axis(|p| p.altitude),
        }
    }

    fn axis(&self, value: impl Fn(&TrajectoryPoint) -> f64) -> AxisRange {
        let first = value(self.start());
        self.points.iter().map(&value).fold(
            AxisRange {
                min: first,
                max: first,
            },
            |r, v| AxisRange {
                min: r.min.min(v),
                max: r.max.max(v),
            },
        )
    }
}
