use std::path::{Path, PathBuf};

use super::loader::{load_csv, LoadError, LoadedTable};
use super::model::NatalityDataset;

// ---------------------------------------------------------------------------
// DataStore – read-once access to the source dataset
// ---------------------------------------------------------------------------

/// Owns the dataset loaded from a fixed path.
///
/// Built once at startup and handed to whoever needs the data; the file is
/// read exactly once, inside [`DataStore::open`].  Picking up a changed file
/// requires a restart.
#[derive(Debug)]
pub struct DataStore {
    path: PathBuf,
    dataset: NatalityDataset,
}

impl DataStore {
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, LoadError> {
        let path = path.into();
        let LoadedTable {
            dataset,
            dropped_rows,
        } = load_csv(&path)?;
        log::info!(
            "Loaded {} records from {} ({} rows dropped) with columns {:?}",
            dataset.len(),
            path.display(),
            dropped_rows,
            dataset.columns
        );
        Ok(Self { path, dataset })
    }

    /// Wrap an already-loaded dataset.
    #[cfg(test)]
    pub fn from_dataset(path: impl Into<PathBuf>, dataset: NatalityDataset) -> Self {
        Self {
            path: path.into(),
            dataset,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The unfiltered dataset.
    pub fn dataset(&self) -> &NatalityDataset {
        &self.dataset
    }
}
