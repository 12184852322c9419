use std::fs::File;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use thiserror::Error;

use super::model::{BirthRecord, NatalityDataset, REQUIRED_FIELDS};

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Fatal load failures. Any of these stops the pipeline before rendering.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Dataset file not found in repository: {}", .path.display())]
    MissingSourceFile { path: PathBuf },

    #[error("Missing required logical fields: {}", .missing.join(", "))]
    Schema {
        missing: Vec<String>,
        /// Normalized labels that were actually present.
        found: Vec<String>,
    },

    #[error("reading {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("malformed CSV: {0}")]
    Csv(#[from] csv::Error),
}

// ---------------------------------------------------------------------------
// Column label normalization
// ---------------------------------------------------------------------------

/// Trim, lowercase and replace spaces with underscores.
///
/// `"  State of Residence "` → `"state_of_residence"`.  A byte order mark is
/// trimmed together with surrounding whitespace, so applying it twice yields
/// the same label.
pub fn normalize_column_label(label: &str) -> String {
    label
        .trim_matches(|c: char| c.is_whitespace() || c == '\u{feff}')
        .to_lowercase()
        .replace(' ', "_")
}

/// Required fields absent from `columns`, in declaration order.
pub fn missing_fields(columns: &[String]) -> Vec<String> {
    REQUIRED_FIELDS
        .iter()
        .filter(|field| !columns.iter().any(|c| c == *field))
        .map(|field| field.to_string())
        .collect()
}

/// Numeric coercion of a births cell. Unparseable text and NaN are missing.
pub fn coerce_births(cell: &str) -> Option<f64> {
    cell.trim().parse::<f64>().ok().filter(|v| !v.is_nan())
}

// ---------------------------------------------------------------------------
// Public entry-points
// ---------------------------------------------------------------------------

/// A validated dataset plus what the loader threw away on the way.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadedTable {
    pub dataset: NatalityDataset,
    /// Rows dropped for a missing or non-numeric births value.
    pub dropped_rows: usize,
}

// ---------------------------------------------------------------------------
// Readers
// ---------------------------------------------------------------------------

/// Load and validate the natality CSV at `path`.
pub fn load_csv(path: &Path) -> Result<LoadedTable, LoadError> {
    let file = File::open(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => LoadError::MissingSourceFile {
            path: path.to_path_buf(),
        },
        _ => LoadError::Io {
            path: path.to_path_buf(),
            source: e,
        },
    })?;
    read_csv(file)
}

/// Parse a natality table from any reader (header row first).
pub fn read_csv<R: Read>(source: R) -> Result<LoadedTable, LoadError> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_reader(source);

    let columns: Vec<String> = reader
        .headers()?
        .iter()
        .map(normalize_column_label)
        .collect();

    // First occurrence wins when two raw labels normalize to the same name.
    let positions = REQUIRED_FIELDS.map(|field| columns.iter().position(|c| c == field));
    let [
        Some(state_idx),
        Some(month_idx),
        Some(month_code_idx),
        Some(year_code_idx),
        Some(sex_idx),
        Some(births_idx),
    ] = positions
    else {
        return Err(LoadError::Schema {
            missing: missing_fields(&columns),
            found: columns,
        });
    };

    let mut records = Vec::new();
    let mut dropped = 0usize;

    for result in reader.records() {
        let row = result?;
        let cell = |idx: usize| row.get(idx).unwrap_or("").to_string();

        let Some(births) = coerce_births(row.get(births_idx).unwrap_or("")) else {
            dropped += 1;
            continue;
        };

        records.push(BirthRecord {
            state_of_residence: cell(state_idx),
            month: cell(month_idx),
            month_code: cell(month_code_idx),
            year_code: cell(year_code_idx),
            sex_of_infant: cell(sex_idx),
            births,
        });
    }

    if dropped > 0 {
        log::warn!("Dropped {dropped} rows with a missing or non-numeric births value");
    }

    Ok(LoadedTable {
        dataset: NatalityDataset::from_records(records, columns),
        dropped_rows: dropped,
    })
}
