// src/process/mod.rs
pub mod raw_table;
pub mod recover;
pub mod utils;

use csv::{ReaderBuilder, Trim};
use std::{fs, path::Path};
use tracing::{debug, info, warn};

use crate::error::LoadError;
pub use raw_table::{LoadStage, RawTable};

/// Why a strict stage gave up and handed over to the next one.
#[derive(Debug)]
enum StageFailure {
    Utf8(std::str::Utf8Error),
    Parse(csv::Error),
    Empty,
}

impl std::fmt::Display for StageFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StageFailure::Utf8(e) => write!(f, "invalid UTF-8: {}", e),
            StageFailure::Parse(e) => write!(f, "CSV parse error: {}", e),
            StageFailure::Empty => write!(f, "no records"),
        }
    }
}

/// Read `path` fully into memory and run the staged loader over it.
#[tracing::instrument(level = "info", skip(path), fields(path = %path.as_ref().display()))]
pub fn load<P: AsRef<Path>>(path: P) -> Result<RawTable, LoadError> {
    let data = fs::read(&path).map_err(|source| LoadError::Io {
        path: path.as_ref().to_path_buf(),
        source,
    })?;
    debug!(bytes = data.len(), "read input");
    load_bytes(&data)
}

/// Staged fallback: strict UTF-8, strict legacy encoding, then line recovery.
/// Each stage only runs when the previous one fails.
pub fn load_bytes(data: &[u8]) -> Result<RawTable, LoadError> {
    let data = utils::strip_utf8_bom(data);

    // 1) strict UTF-8
    let failure = match std::str::from_utf8(data) {
        Ok(text) => match parse_strict(text) {
            Ok(rows) => return Ok(finish(rows, LoadStage::Utf8)),
            Err(e) => e,
        },
        Err(e) => StageFailure::Utf8(e),
    };
    debug!(reason = %failure, "strict UTF-8 stage failed, retrying with legacy encoding");

    // 2) strict legacy encoding
    let (text, had_errors) = utils::decode_legacy(data);
    if had_errors {
        return Err(LoadError::Decode(
            "legacy decoder reported malformed input".into(),
        ));
    }
    let failure = match parse_strict(&text) {
        Ok(rows) => return Ok(finish(rows, LoadStage::Legacy)),
        Err(e) => e,
    };
    warn!(reason = %failure, "strict parsing failed, attempting manual line recovery");

    // 3) manual recovery
    let table = recover::recover_lines(data);
    if table.is_empty() {
        return Err(LoadError::EmptyTable);
    }
    if table.skipped_lines() > 0 {
        warn!(skipped = table.skipped_lines(), "some lines could not be recovered");
    }
    info!(
        rows = table.len(),
        columns = table.width(),
        "recovered table line by line"
    );
    Ok(table)
}

/// Parse text as a rectangular CSV; any ragged record fails the whole stage.
/// Quotes are not an escape grammar here: they never join lines or hide
/// delimiters, and `clean_str` strips them per field.
fn parse_strict(text: &str) -> Result<Vec<Vec<String>>, StageFailure> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(false)
        .flexible(false)
        .quoting(false)
        .trim(Trim::All)
        .from_reader(text.as_bytes());

    let mut rows = Vec::new();
    for result in rdr.records() {
        let record = result.map_err(StageFailure::Parse)?;
        let row: Vec<String> = record.iter().map(utils::clean_str).collect();
        if row.iter().all(String::is_empty) {
            continue;
        }
        rows.push(row);
    }
    if rows.is_empty() {
        return Err(StageFailure::Empty);
    }
    Ok(rows)
}

fn finish(rows: Vec<Vec<String>>, stage: LoadStage) -> RawTable {
    let table = RawTable::from_rows(rows, stage, 0);
    info!(
        stage = ?stage,
        rows = table.len(),
        columns = table.width(),
        "loaded table"
    );
    table
}
