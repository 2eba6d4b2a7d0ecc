use tracing::debug;

use super::alias::role_for_header;
use super::coerce::NumericTable;
use super::types::{ColumnAssignment, ColumnRole, ColumnRoleMap, Strategy};

/// Minimum width for fixed-position assignment.
pub const POSITIONAL_MIN_COLUMNS: usize = 8;
/// Width range for the magnitude heuristic.
pub const MAGNITUDE_MIN_COLUMNS: usize = 4;
pub const MAGNITUDE_MAX_COLUMNS: usize = 7;

const POSITIONAL_ROLES: [ColumnRole; 5] = [
    ColumnRole::Time,
    ColumnRole::Altitude,
    ColumnRole::PlanarX,
    ColumnRole::PlanarY,
    ColumnRole::Latitude,
];
const POSITIONAL_LABELS: [&str; 8] = [
    "time",
    "altitude",
    "x_position",
    "y_position",
    "latitude",
    "longitude",
    "data_6",
    "data_7",
];

/// Match header names against the alias table. The first column to claim a
/// role keeps it; later claimants are left unassigned. Returns `None` unless
/// altitude, x and y are all claimed.
pub fn assign_declared(header: &[String], width: usize) -> Option<ColumnRoleMap> {
    let mut taken: Vec<ColumnRole> = Vec::new();
    let columns = (0..width)
        .map(|index| {
            let label = header.get(index).cloned().unwrap_or_default();
            let role = match role_for_header(&label) {
                Some(role) if taken.contains(&role) => {
                    debug!(column = index, %label, %role, "role already taken");
                    ColumnRole::Unassigned
                }
                Some(role) => {
                    taken.push(role);
                    role
                }
                None => ColumnRole::Auxiliary,
            };
            let label = if label.is_empty() {
                format!("col_{}", index)
            } else {
                label
            };
            ColumnAssignment { index, label, role }
        })
        .collect();

    let map = ColumnRoleMap::new(Strategy::DeclaredName, columns);
    map.required().map(|_| map)
}

/// Fixed positions: time, altitude, x, y, latitude; everything after is auxiliary.
pub fn assign_positional(width: usize) -> Option<ColumnRoleMap> {
    if width < POSITIONAL_MIN_COLUMNS {
        return None;
    }
    let columns = (0..width)
        .map(|index| ColumnAssignment {
            index,
            label: POSITIONAL_LABELS
                .get(index)
                .map(|s| s.to_string())
                .unwrap_or_else(|| format!("data_{}", index)),
            role: POSITIONAL_ROLES
                .get(index)
                .copied()
                .unwrap_or(ColumnRole::Auxiliary),
        })
        .collect();
    Some(ColumnRoleMap::new(Strategy::Positional, columns))
}

/// Largest mean |value| is altitude; the next two, in column order, are x then y.
pub fn assign_by_magnitude(numeric: &NumericTable) -> Option<ColumnRoleMap> {
    let width = numeric.width();
    if !(MAGNITUDE_MIN_COLUMNS..=MAGNITUDE_MAX_COLUMNS).contains(&width) {
        return None;
    }

    let mut ranked: Vec<(usize, f64)> = (0..width)
        .filter_map(|idx| numeric.mean_abs(idx).map(|m| (idx, m)))
        .collect();
    // stable sort keeps lower column index first on ties
    ranked.sort_by(|a, b| b.1.total_cmp(&a.1));
    debug!(?ranked, "column magnitudes");

    if ranked.len() < 3 {
        return None;
    }
    let altitude = ranked[0].0;
    let (x, y) = {
        let (a, b) = (ranked[1].0, ranked[2].0);
        (a.min(b), a.max(b))
    };

    let columns = (0..width)
        .map(|index| {
            let role = if index == altitude {
                ColumnRole::Altitude
            } else if index == x {
                ColumnRole::PlanarX
            } else if index == y {
                ColumnRole::PlanarY
            } else if numeric.mean_abs(index).is_none() {
                ColumnRole::Unassigned
            } else {
                ColumnRole::Auxiliary
            };
            ColumnAssignment {
                index,
                label: format!("col_{}", index),
                role,
            }
        })
        .collect();
    Some(ColumnRoleMap::new(Strategy::Magnitude, columns))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(cells: &[&str]) -> Vec<String> {
        cells.iter().map(|s| s.to_string()).collect()
    }

    fn numeric(data: &[&[&str]]) -> NumericTable {
        let rows: Vec<Vec<String>> = data.iter().map(|r| strings(r)).collect();
        let width = rows.iter().map(Vec::len).max().unwrap_or(0);
        NumericTable::coerce_all(&rows, width)
    }

    #[test]
    fn test_declared_matches_aliases() {
        let header = strings(&["Time", "Alt", "X Position", "y_position", "temp"]);
        let map = assign_declared(&header, 5).unwrap();

        assert_eq!(map.strategy(), Strategy::DeclaredName);
        assert_eq!(map.role(0), Some(ColumnRole::Time));
        assert_eq!(map.role(1), Some(ColumnRole::Altitude));
        assert_eq!(map.role(2), Some(ColumnRole::PlanarX));
        assert_eq!(map.role(3), Some(ColumnRole::PlanarY));
        assert_eq!(map.role(4), Some(ColumnRole::Auxiliary));
        assert_eq!(map.label(2), Some("X Position"));
    }

    #[test]
    fn test_declared_first_match_wins() {
        let header = strings(&["altitude", "x", "alt", "y"]);
        let map = assign_declared(&header, 4).unwrap();

        assert_eq!(map.index_of(ColumnRole::Altitude), Some(0));
        assert_eq!(map.role(2), Some(ColumnRole::Unassigned));
    }

    #[test]
    fn test_declared_fails_without_all_required() {
        let header = strings(&["time", "altitude", "x", "pressure"]);
        assert!(assign_declared(&header, 4).is_none());
        // numeric first row is not a header
        assert!(assign_declared(&strings(&["0", "100", "1", "2"]), 4).is_none());
    }

    #[test]
    fn test_positional_requires_eight_columns() {
        assert!(assign_positional(7).is_none());

        let map = assign_positional(9).unwrap();
        assert_eq!(map.required(), Some((2, 3, 1)));
        assert_eq!(map.role(0), Some(ColumnRole::Time));
        assert_eq!(map.role(4), Some(ColumnRole::Latitude));
        assert_eq!(map.role(5), Some(ColumnRole::Auxiliary));
        assert_eq!(map.label(5), Some("longitude"));
        assert_eq!(map.label(8), Some("data_8"));
    }

    #[test]
    fn test_magnitude_picks_largest_as_altitude() {
        let table = numeric(&[&["5", "1000", "2", "3"], &["5", "1010", "2", "3"]]);
        let map = assign_by_magnitude(&table).unwrap();

        assert_eq!(map.strategy(), Strategy::Magnitude);
        assert_eq!(map.role(1), Some(ColumnRole::Altitude));
        // next two largest are columns 0 (5) and 3 (3), x takes the lower index
        assert_eq!(map.role(0), Some(ColumnRole::PlanarX));
        assert_eq!(map.role(3), Some(ColumnRole::PlanarY));
        assert_eq!(map.role(2), Some(ColumnRole::Auxiliary));
    }

    #[test]
    fn test_magnitude_uses_absolute_values() {
        let table = numeric(&[&["1", "2", "-5000", "3"]]);
        let map = assign_by_magnitude(&table).unwrap();
        assert_eq!(map.index_of(ColumnRole::Altitude), Some(2));
        assert_eq!(map.index_of(ColumnRole::PlanarX), Some(1));
        assert_eq!(map.index_of(ColumnRole::PlanarY), Some(3));
    }

    #[test]
    fn test_magnitude_skips_text_columns() {
        let table = numeric(&[&["a", "b", "10", "1", "2"], &["c", "d", "20", "1", "2"]]);
        let map = assign_by_magnitude(&table).unwrap();

        assert_eq!(map.role(0), Some(ColumnRole::Unassigned));
        assert_eq!(map.role(1), Some(ColumnRole::Unassigned));
        assert_eq!(map.required(), Some((3, 4, 2)));
    }

    #[test]
    fn test_magnitude_needs_three_numeric_columns() {
        let table = numeric(&[&["a", "b", "10", "1"]]);
        assert!(assign_by_magnitude(&table).is_none());
    }

    #[test]
    fn test_magnitude_width_bounds() {
        assert!(assign_by_magnitude(&numeric(&[&["1", "2", "3"]])).is_none());
        assert!(assign_by_magnitude(&numeric(&[&["1", "2", "3", "4", "5", "6", "7", "8"]])).is_none());
    }
}
