use std::path::PathBuf;
use std::sync::Arc;

use once_cell::unsync::OnceCell;

use super::loader::{self, DataLoadError};
use super::model::ObservationTable;

// ---------------------------------------------------------------------------
// Table sources
// ---------------------------------------------------------------------------

/// Something that can produce the observation table.
pub trait TableSource {
    /// Human readable origin, used in log lines.
    fn describe(&self) -> String;

    fn load(&self) -> Result<ObservationTable, DataLoadError>;
}

/// Reads the table from a file on disk.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl TableSource for FileSource {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    fn load(&self) -> Result<ObservationTable, DataLoadError> {
        loader::load_file(&self.path)
    }
}

// ---------------------------------------------------------------------------
// Single-slot cache
// ---------------------------------------------------------------------------

/// Lazily loads the table once and hands out the same outcome afterwards.
///
/// Failures are memoized as well: a broken source is not re-read until
/// [`TableCache::reset`] is called.
pub struct TableCache<S> {
    source: S,
    slot: OnceCell<Result<Arc<ObservationTable>, DataLoadError>>,
}

impl<S: TableSource> TableCache<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            slot: OnceCell::new(),
        }
    }

    /// Return the cached table, loading it on first use.
    pub fn get(&self) -> Result<Arc<ObservationTable>, DataLoadError> {
        self.slot
            .get_or_init(|| {
                let origin = self.source.describe();
                match self.source.load() {
                    Ok(table) => {
                        if table.is_empty() {
                            log::warn!("{origin} contains no observations");
                        }
                        log::info!("Loaded {} observations from {origin}", table.len());
                        Ok(Arc::new(table))
                    }
                    Err(e) => {
                        log::error!("Failed to load {origin}: {e}");
                        Err(e)
                    }
                }
            })
            .clone()
    }

    /// Whether a load has been attempted since construction or the last reset.
    #[cfg(test)]
    pub fn is_loaded(&self) -> bool {
        self.slot.get().is_some()
    }

    /// Drop the cached outcome so the next [`TableCache::get`] reloads.
    #[cfg(test)]
    pub fn reset(&mut self) {
        self.slot.take();
    }

    pub fn source(&self) -> &S {
        &self.source
    }
}
