use crate::process::utils::parse_finite;

use super::types::ColumnRoleMap;

/// A coerced cell: `None` is the missing marker.
pub type NumericCell = Option<f64>;

/// Same shape as the data rows it came from, every cell a finite number or missing.
#[derive(Debug, Clone, PartialEq)]
pub struct NumericTable {
    rows: Vec<Vec<NumericCell>>,
    width: usize,
    /// Cells per column that were non-empty text but failed to parse.
    failures: Vec<usize>,
}

impl NumericTable {
    /// Coerce every column. Used by the magnitude heuristic before roles exist.
    pub fn coerce_all(rows: &[Vec<String>], width: usize) -> Self {
        Self::coerce_with(rows, width, |_| true)
    }

    /// Coerce columns whose role carries numbers; other columns stay missing.
    pub fn coerce(rows: &[Vec<String>], width: usize, roles: &ColumnRoleMap) -> Self {
        Self::coerce_with(rows, width, |idx| {
            roles.role(idx).map_or(false, |role| role.is_numeric())
        })
    }

    fn coerce_with<F>(rows: &[Vec<String>], width: usize, include: F) -> Self
    where
        F: Fn(usize) -> bool,
    {
        let included: Vec<bool> = (0..width).map(&include).collect();
        let mut failures = vec![0usize; width];

        let rows = rows
            .iter()
            .map(|row| {
                (0..width)
                    .map(|idx| {
                        if !included[idx] {
                            return None;
                        }
                        let raw = row.get(idx).map(String::as_str).unwrap_or("");
                        let value = parse_finite(raw);
                        if value.is_none() && !raw.trim().is_empty() {
                            failures[idx] += 1;
                        }
                        value
                    })
                    .collect()
            })
            .collect();

        Self {
            rows,
            width,
            failures,
        }
    }

    pub fn rows(&self) -> &[Vec<NumericCell>] {
        &self.rows
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn get(&self, row: usize, column: usize) -> NumericCell {
        self.rows.get(row).and_then(|r| r.get(column)).copied().flatten()
    }

    /// Per-column count of non-empty cells that failed to parse.
    pub fn failures(&self) -> &[usize] {
        &self.failures
    }

    /// Present values of one column, in row order.
    pub fn column(&self, column: usize) -> impl Iterator<Item = f64> + '_ {
        self.rows.iter().filter_map(move |r| r.get(column).copied().flatten())
    }

    /// Mean absolute value over the present cells of a column.
    pub fn mean_abs(&self, column: usize) -> Option<f64> {
        let (sum, count) = self
            .column(column)
            .fold((0.0, 0usize), |(sum, count), v| (sum + v.abs(), count + 1));
        if count == 0 {
            None
        } else {
            Some(sum / count as f64)
        }
    }
}
