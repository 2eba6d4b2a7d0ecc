use once_cell::sync::Lazy;
use regex::Regex;

use super::types::ColumnRole;

/// Trailing unit annotation such as `(m)` or `[deg]`.
static UNIT_SUFFIX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s*[\(\[][^\)\]]*[\)\]]\s*$").expect("valid unit regex"));
static SEPARATORS: Lazy<Regex> = Lazy::new(|| Regex::new(r"[\s_\-]+").expect("valid regex"));

const ALIASES: &[(ColumnRole, &[&str])] = &[
    (ColumnRole::Time, &["time", "t", "timestamp", "elapsed", "time s"]),
    (
        ColumnRole::Altitude,
        &["altitude", "alt", "z", "height", "z position"],
    ),
    (ColumnRole::PlanarX, &["x", "x position", "x pos", "pos x"]),
    (ColumnRole::PlanarY, &["y", "y position", "y pos", "pos y"]),
    (ColumnRole::Latitude, &["latitude", "lat"]),
    (ColumnRole::Longitude, &["longitude", "lon", "lng", "long"]),
];

/// Lower-case, drop a unit suffix, and fold `_`/`-`/whitespace runs into one space.
pub fn normalize_header(raw: &str) -> String {
    let lowered = raw.trim().to_lowercase();
    let stripped = UNIT_SUFFIX.replace(&lowered, "");
    SEPARATORS.replace_all(stripped.trim(), " ").into_owned()
}

/// Role named by a header cell, if any alias matches.
pub fn role_for_header(raw: &str) -> Option<ColumnRole> {
    let name = normalize_header(raw);
    ALIASES
        .iter()
        .find(|(_, names)| names.contains(&name.as_str()))
        .map(|(role, _)| *role)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_header() {
        assert_eq!(normalize_header("  Altitude (m) "), "altitude");
        assert_eq!(normalize_header("X_Position"), "x position");
        assert_eq!(normalize_header("y-pos [m]"), "y pos");
        assert_eq!(normalize_header("Time  (s)"), "time");
        assert_eq!(normalize_header("data"), "data");
    }

    #[test]
    fn test_role_for_header() {
        assert_eq!(role_for_header("ALT"), Some(ColumnRole::Altitude));
        assert_eq!(role_for_header("x position"), Some(ColumnRole::PlanarX));
        assert_eq!(role_for_header("x_position"), Some(ColumnRole::PlanarX));
        assert_eq!(role_for_header("Y"), Some(ColumnRole::PlanarY));
        assert_eq!(role_for_header("Lat"), Some(ColumnRole::Latitude));
        assert_eq!(role_for_header("lng"), Some(ColumnRole::Longitude));
        assert_eq!(role_for_header("pressure"), None);
        assert_eq!(role_for_header("1000"), None);
    }
}
