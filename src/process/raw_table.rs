use serde::Serialize;

/// Which loader stage produced a table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum LoadStage {
    /// Strict UTF-8 parse
    Utf8,
    /// Strict parse after Windows-1252 decode
    Legacy,
    /// Manual line-by-line recovery
    Recovered,
}

/// A rectangular table of string cells, exactly as the loader recovered it.
/// No header is assumed; the first row may or may not hold column names.
#[derive(Debug, Clone)]
pub struct RawTable {
    /// Each row, padded or truncated to `width` cells.
    rows: Vec<Vec<String>>,
    /// Maximum field count seen across all parsed lines.
    width: usize,
    stage: LoadStage,
    /// Lines the recovery stage had to drop.
    skipped_lines: usize,
}

impl RawTable {
    /// Build a table from ragged rows, normalizing every row to the widest one.
    pub fn from_rows(rows: Vec<Vec<String>>, stage: LoadStage, skipped_lines: usize) -> Self {
        let width = rows.iter().map(Vec::len).max().unwrap_or(0);
        let rows = rows
            .into_iter()
            .map(|mut row| {
                // truncate is a no-op for short rows, resize pads them
                row.truncate(width);
                row.resize(width, String::new());
                row
            })
            .collect();

        Self {
            rows,
            width,
            stage,
            skipped_lines,
        }
    }

    pub fn rows(&self) -> &[Vec<String>] {
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

    pub fn stage(&self) -> LoadStage {
        self.stage
    }

    pub fn skipped_lines(&self) -> usize {
        self.skipped_lines
    }

    /// `(rows, columns)`, like a dataframe shape.
    pub fn shape(&self) -> (usize, usize) {
        (self.rows.len(), self.width)
    }
}
