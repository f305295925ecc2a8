use std::{
    ffi::OsString,
    fs::{self, File},
    io::{self, BufReader, BufWriter},
    path::{Path, PathBuf},
};

use log::{debug, warn};
use openapnea_types::history::HistoryLedger;

use crate::{read_history, write_history, HistoryStorage, StorageError};

/// Ledger kept in a flat CSV file.
///
/// Writes go to a sibling `.tmp` file which is then renamed over the target,
/// so an interrupted write leaves the previous ledger intact. There is no
/// locking: two processes persisting at once race and the last rename wins.
#[derive(Debug, Clone)]
pub struct CsvHistoryFile {
    path: PathBuf,
}

impl CsvHistoryFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(OsString::from)
            .unwrap_or_else(|| OsString::from("history.csv"));
        name.push(".tmp");
        self.path.with_file_name(name)
    }

    fn file_error(&self, source: io::Error) -> StorageError {
        StorageError::File {
            path: self.path.clone(),
            source,
        }
    }

    fn write_to(&self, temp_path: &Path, ledger: &HistoryLedger) -> Result<(), StorageError> {
        let file = File::create(temp_path).map_err(|e| self.file_error(e))?;
        let mut writer = BufWriter::new(file);
        write_history(ledger, &mut writer)?;

        let file = writer
            .into_inner()
            .map_err(|e| self.file_error(e.into_error()))?;
        file.sync_all().map_err(|e| self.file_error(e))?;
        Ok(())
    }
}

impl HistoryStorage for CsvHistoryFile {
    fn load(&self) -> Result<HistoryLedger, StorageError> {
        let file = match File::open(&self.path) {
            Ok(file) => file,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!("No history at {}, starting empty", self.path.display());
                return Ok(HistoryLedger::new());
            }
            Err(e) => return Err(self.file_error(e)),
        };

        read_history(BufReader::new(file))
    }

    fn persist(&self, ledger: &HistoryLedger) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| self.file_error(e))?;
        }

        let temp_path = self.temp_path();
        if let Err(e) = self.write_to(&temp_path, ledger) {
            if let Err(cleanup) = fs::remove_file(&temp_path) {
                warn!("Unable to remove {}: {}", temp_path.display(), cleanup);
            }
            return Err(e);
        }

        fs::rename(&temp_path, &self.path).map_err(|e| self.file_error(e))?;
        debug!(
            "Persisted {} history record(s) to {}",
            ledger.len(),
            self.path.display()
        );
        Ok(())
    }
}
