//! File-backed durable store: one JSON document per report, flat in a
//! configured directory, no index or manifest.
//!
//! File names are monotonic ULIDs, so two ingestions can never collide and
//! a name-sorted scan yields reports in acceptance order. Writes go to a
//! `.tmp` sibling first and are renamed into place, so a concurrent listing
//! scan never decodes a half-written document.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use thiserror::Error;
use tracing::{debug, error, info, warn};

use crate::ids::ReportId;
use crate::report::{decode_report, encode_report, ObservationReport};

const REPORT_EXT: &str = "json";

/// A report could not be written to durable storage.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to encode report: {0}")]
    Encode(#[from] serde_json::Error),
    #[error("failed to write report file: {0}")]
    Io(#[from] std::io::Error),
    #[error("report id generation overflowed within one clock tick")]
    IdExhausted,
}

/// Durable, file-backed persistence layer for observation reports.
pub struct ReportStore {
    dir: PathBuf,
    ids: Mutex<ulid::Generator>,
}

impl ReportStore {
    /// Open a store over `dir`, creating the directory if absent.
    ///
    /// Runs once at bootstrap, before the dispatcher is reachable; after
    /// this the store assumes the directory exists and stays accessible.
    pub fn open(dir: impl Into<PathBuf>) -> std::io::Result<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir)?;
        info!(dir = %dir.display(), "Report store opened");
        Ok(Self {
            dir,
            ids: Mutex::new(ulid::Generator::new()),
        })
    }

    /// Directory backing this store.
    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn next_id(&self) -> Result<ReportId, StoreError> {
        let mut ids = match self.ids.lock() {
            Ok(ids) => ids,
            Err(poisoned) => poisoned.into_inner(),
        };
        ids.generate()
            .map(ReportId::from_ulid)
            .map_err(|_| StoreError::IdExhausted)
    }

    /// Encode `report` and write it as a new file in the store directory.
    ///
    /// Returns the path of the created file. The write is atomic at the
    /// file level: content lands in a `.tmp` sibling and is renamed into
    /// its final name only once fully flushed.
    pub fn persist(&self, report: &ObservationReport) -> Result<PathBuf, StoreError> {
        let id = self.next_id()?;
        let document = encode_report(report)?;

        let path = self.dir.join(format!("{id}.{REPORT_EXT}"));
        let tmp = self.dir.join(format!("{id}.tmp"));
        fs::write(&tmp, document)?;
        if let Err(e) = fs::rename(&tmp, &path) {
            let _ = fs::remove_file(&tmp);
            return Err(e.into());
        }

        info!(
            report_id = %id,
            tool = ?report.tool,
            path = %path.display(),
            payload_bytes = report.observation_data.len(),
            "Report persisted"
        );
        Ok(path)
    }

    /// Enumerate every stored report, in acceptance order.
    ///
    /// A file that cannot be read or decoded is skipped and logged; it never
    /// aborts enumeration of the rest. An unreadable directory yields an
    /// empty listing; a partial result is preferable to failing the whole
    /// listing.
    #[must_use]
    pub fn list_all(&self) -> Vec<ObservationReport> {
        let entries = match fs::read_dir(&self.dir) {
            Ok(entries) => entries,
            Err(e) => {
                error!(dir = %self.dir.display(), error = %e, "Store directory unreadable");
                return Vec::new();
            }
        };

        let mut paths: Vec<PathBuf> = entries
            .filter_map(|entry| match entry {
                Ok(entry) => Some(entry.path()),
                Err(e) => {
                    warn!(dir = %self.dir.display(), error = %e, "Skipping unreadable directory entry");
                    None
                }
            })
            .filter(|path| {
                path.is_file() && path.extension().is_some_and(|ext| ext == REPORT_EXT)
            })
            .collect();

        // ULID file names are timestamp-major, so name order is acceptance order
        paths.sort();

        let mut reports = Vec::with_capacity(paths.len());
        for path in paths {
            let document = match fs::read_to_string(&path) {
                Ok(document) => document,
                Err(e) => {
                    warn!(path = %path.display(), error = %e, "Skipping unreadable report file");
                    continue;
                }
            };
            match decode_report(&document) {
                Ok(report) => reports.push(report),
                Err(e) => {
                    warn!(path = %path.display(), error = %e, "Skipping undecodable report file");
                }
            }
        }

        debug!(dir = %self.dir.display(), report_count = reports.len(), "Store enumerated");
        reports
    }
}
