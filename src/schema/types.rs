// src/schema/types.rs

use serde::Serialize;
use std::fmt;

/// Semantic meaning of a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ColumnRole {
    Time,
    Altitude,
    PlanarX,
    PlanarY,
    Latitude,
    Longitude,
    Auxiliary,
    Unassigned,
}

impl ColumnRole {
    /// Unassigned columns are never coerced.
    pub fn is_numeric(self) -> bool {
        self != ColumnRole::Unassigned
    }
}

impl fmt::Display for ColumnRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ColumnRole::Time => "time",
            ColumnRole::Altitude => "altitude",
            ColumnRole::PlanarX => "x",
            ColumnRole::PlanarY => "y",
            ColumnRole::Latitude => "latitude",
            ColumnRole::Longitude => "longitude",
            ColumnRole::Auxiliary => "auxiliary",
            ColumnRole::Unassigned => "unassigned",
        };
        f.write_str(s)
    }
}

/// Which role-assignment strategy produced a mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Strategy {
    /// Header names matched against the alias table
    DeclaredName,
    /// Fixed column positions for wide logs
    Positional,
    /// Largest mean magnitude is altitude
    Magnitude,
}

/// A single column's assigned role and the label it is reported under.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColumnAssignment {
    pub index: usize,
    pub label: String,
    pub role: ColumnRole,
}

/// Column index → role, fixed once inference picks a strategy.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColumnRoleMap {
    strategy: Strategy,
    columns: Vec<ColumnAssignment>,
}

impl ColumnRoleMap {
    pub(crate) fn new(strategy: Strategy, columns: Vec<ColumnAssignment>) -> Self {
        Self { strategy, columns }
    }

    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    pub fn columns(&self) -> &[ColumnAssignment] {
        &self.columns
    }

    pub fn role(&self, index: usize) -> Option<ColumnRole> {
        self.columns.get(index).map(|c| c.role)
    }

    /// Index of the (first) column holding `role`.
    pub fn index_of(&self, role: ColumnRole) -> Option<usize> {
        self.columns.iter().find(|c| c.role == role).map(|c| c.index)
    }

    pub fn label(&self, index: usize) -> Option<&str> {
        self.columns.get(index).map(|c| c.label.as_str())
    }

    /// Indices of (x, y, altitude) when all three are assigned.
    pub fn required(&self) -> Option<(usize, usize, usize)> {
        Some((
            self.index_of(ColumnRole::PlanarX)?,
            self.index_of(ColumnRole::PlanarY)?,
            self.index_of(ColumnRole::Altitude)?,
        ))
    }
}

impl fmt::Display for ColumnRoleMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self
            .columns
            .iter()
            .map(|c| format!("{}={}", c.label, c.role))
            .collect();
        write!(f, "[{}]", parts.join(", "))
    }
}
