use anyhow::{Context, Result};
use serde::Serialize;
use std::{
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};
use tracing::info;

use super::{Trajectory, TrajectoryPoint, TrajectoryRanges};

pub const TITLE: &str = "Rocket Trajectory - 3D Visualization";

#[derive(Debug, Clone, Serialize)]
pub struct AxisLabels {
    pub x: &'static str,
    pub y: &'static str,
    pub z: &'static str,
}

/// Everything a renderer needs to draw the path: the line itself, the two
/// endpoint markers, labels and extents. No decisions are left to the renderer.
#[derive(Debug, Clone, Serialize)]
pub struct RenderPlan {
    pub title: &'static str,
    pub axes: AxisLabels,
    /// `[x, y, altitude]` triples in flight order.
    pub path: Vec<[f64; 3]>,
    pub start: TrajectoryPoint,
    pub end: TrajectoryPoint,
    pub ranges: TrajectoryRanges,
}

impl RenderPlan {
    pub fn new(trajectory: &Trajectory) -> Self {
        Self {
            title: TITLE,
            axes: AxisLabels {
                x: "X Position (m)",
                y: "Y Position (m)",
                z: "Altitude (m)",
            },
            path: trajectory
                .points()
                .iter()
                .map(|p| [p.x, p.y, p.altitude])
                .collect(),
            start: *trajectory.start(),
            end: *trajectory.end(),
            ranges: trajectory.ranges(),
        }
    }
}

/// Write the plan as pretty JSON for an external renderer.
pub fn write_render_plan<P: AsRef<Path>>(plan: &RenderPlan, path: P) -> Result<()> {
    let path = path.as_ref();
    let file = File::create(path).with_context(|| format!("creating plan file {:?}", path))?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, plan)
        .with_context(|| format!("writing plan to {:?}", path))?;
    writer.flush()?;
    info!(path = %path.display(), points = plan.path.len(), "wrote render plan");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::coerce::NumericTable;
    use tempfile::tempdir;

    fn trajectory() -> Trajectory {
        let rows: Vec<Vec<String>> = [["0", "0", "10"], ["1", "2", "50"], ["2", "3", "40"]]
            .iter()
            .map(|r| r.iter().map(|s| s.to_string()).collect())
            .collect();
        let numeric = NumericTable::coerce_all(&rows, 3);
        Trajectory::from_numeric(&numeric, 0, 1, 2).unwrap()
    }

    #[test]
    fn test_plan_marks_endpoints() {
        let plan = RenderPlan::new(&trajectory());

        assert_eq!(plan.path.len(), 3);
        assert_eq!(plan.path[1], [1.0, 2.0, 50.0]);
        assert_eq!(plan.start.as_tuple(), (0.0, 0.0, 10.0));
        assert_eq!(plan.end.as_tuple(), (2.0, 3.0, 40.0));
        assert_eq!(plan.ranges.altitude.max, 50.0);
    }

    #[test]
    fn test_write_render_plan() -> Result<()> {
        let dir = tempdir()?;
        let out = dir.path().join("plan.json");
        write_render_plan(&RenderPlan::new(&trajectory()), &out)?;

        let value: serde_json::Value = serde_json::from_reader(File::open(&out)?)?;
        assert_eq!(value["title"], TITLE);
        assert_eq!(value["path"].as_array().map(Vec::len), Some(3));
        assert_eq!(value["end"]["altitude"], 40.0);
        assert_eq!(value["axes"]["z"], "Altitude (m)");
        Ok(())
    }
}
