use tracing::{debug, warn};

use super::raw_table::{LoadStage, RawTable};
use super::utils::{clean_str, decode_legacy_lossy};

const DELIMITER: char = ',';

/// Why a single line was dropped during recovery.
#[derive(Debug, PartialEq, Eq)]
enum LineError {
    /// NUL bytes only show up in binary noise, never in hand-logged text
    BinaryContent,
}

impl std::fmt::Display for LineError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LineError::BinaryContent => write!(f, "line contains NUL bytes"),
        }
    }
}

/// Split one raw line into cleaned fields. `Ok(None)` for blank lines.
fn parse_line(raw: &[u8]) -> Result<Option<Vec<String>>, LineError> {
    if raw.contains(&0) {
        return Err(LineError::BinaryContent);
    }
    let line = decode_legacy_lossy(raw);
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }
    Ok(Some(line.split(DELIMITER).map(clean_str).collect()))
}

/// Walk the raw bytes line by line, keeping every line that can be split.
/// A bad line is logged and skipped; it never aborts the rest of the file.
pub fn recover_lines(data: &[u8]) -> RawTable {
    let mut rows = Vec::new();
    let mut skipped = 0usize;

    for (idx, raw) in data.split(|b| *b == b'\n').enumerate() {
        let line_num = idx + 1;
        let raw = raw.strip_suffix(b"\r").unwrap_or(raw);
        match parse_line(raw) {
            Ok(Some(row)) => rows.push(row),
            Ok(None) => {}
            Err(e) => {
                warn!(line = line_num, error = %e, "skipping line");
                skipped += 1;
            }
        }
    }

    debug!(rows = rows.len(), skipped, "manual recovery finished");
    RawTable::from_rows(rows, LoadStage::Recovered, skipped)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recover_ragged_lines() {
        let data = b"1,2,3\n4,5\n\n6,7,8,9\r\n";
        let table = recover_lines(data);

        assert_eq!(table.stage(), LoadStage::Recovered);
        assert_eq!(table.shape(), (3, 4));
        assert_eq!(table.rows()[1], vec!["4", "5", "", ""]);
        assert_eq!(table.rows()[2], vec!["6", "7", "8", "9"]);
    }

    #[test]
    fn test_recover_strips_quotes_per_field() {
        let table = recover_lines(b"\"time\", 'alt' ,  x \n");
        assert_eq!(table.rows()[0], vec!["time", "alt", "x"]);
    }

    #[test]
    fn test_binary_line_is_skipped_not_fatal() {
        let data = b"1,2,3\n\x00\x00garbage\n4,5,6\n";
        let table = recover_lines(data);

        assert_eq!(table.len(), 2);
        assert_eq!(table.skipped_lines(), 1);
        assert_eq!(table.rows()[1], vec!["4", "5", "6"]);
    }

    #[test]
    fn test_parse_line_blank() {
        assert_eq!(parse_line(b"   "), Ok(None));
        assert_eq!(parse_line(b"a\x00"), Err(LineError::BinaryContent));
    }

    #[test]
    fn test_only_blank_lines_yield_empty_table() {
        let table = recover_lines(b"\n \n\r\n");
        assert!(table.is_empty());
    }
}
