//! Flat-file Roster Repository
//!
//! Persists the roster as one encoded line per record (see `line_codec`).
//! Saves rewrite the whole file: the new content is written to a temp file
//! next to the data file and renamed over it while `<file>.lock` is held.

use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use fs2::FileExt;
use tempfile::NamedTempFile;

use crate::domain::entities::EmployeeRecord;
use crate::domain::ports::{DecodedLine, LineProblem, RosterError, RosterRepository, StoredRoster};

use super::line_codec::{decode_line, encode_record};

/// Data file used when nothing else is configured
pub const DEFAULT_DATA_FILE: &str = "employees.txt";

pub struct FlatFileRosterRepository {
    path: PathBuf,
}

impl FlatFileRosterRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn lock_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".lock");
        self.path.with_file_name(name)
    }

    /// Directory holding the data file; `.` for a bare file name
    fn parent_dir(&self) -> &Path {
        match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        }
    }

    fn create_empty(&self) -> Result<(), RosterError> {
        fs::create_dir_all(self.parent_dir()).map_err(|e| RosterError::access(&self.path, e))?;
        fs::OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(false)
            .open(&self.path)
            .map_err(|e| RosterError::access(&self.path, e))?;
        Ok(())
    }

    fn write_to_disk(&self, records: &[EmployeeRecord]) -> Result<(), RosterError> {
        let mut content = String::new();
        for record in records {
            content.push_str(&encode_record(record));
            content.push('\n');
        }

        let mut tmp = NamedTempFile::new_in(self.parent_dir())
            .map_err(|e| RosterError::access(&self.path, e))?;
        tmp.write_all(content.as_bytes())
            .map_err(|e| RosterError::access(&self.path, e))?;
        tmp.as_file()
            .sync_all()
            .map_err(|e| RosterError::access(&self.path, e))?;
        tmp.persist(&self.path)
            .map_err(|e| RosterError::access(&self.path, e.error))?;
        Ok(())
    }
}

/// Decode one `\n`-separated chunk of the file; `None` for blank lines.
///
/// Bytes that are not UTF-8 only spoil their own line.
fn decode_raw_line(line_no: usize, raw: &[u8]) -> Option<DecodedLine> {
    let raw = raw.strip_suffix(b"\r").unwrap_or(raw);
    let (content, record) = match std::str::from_utf8(raw) {
        Ok(text) => (text.to_string(), decode_line(text)),
        Err(_) => (
            String::from_utf8_lossy(raw).into_owned(),
            Err(LineProblem::NotText),
        ),
    };
    if content.trim().is_empty() {
        return None;
    }
    Some(DecodedLine {
        line_no,
        content,
        record,
    })
}

impl Default for FlatFileRosterRepository {
    fn default() -> Self {
        Self::new(DEFAULT_DATA_FILE)
    }
}

impl RosterRepository for FlatFileRosterRepository {
    fn load(&self) -> Result<StoredRoster, RosterError> {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                self.create_empty()?;
                tracing::debug!(path = %self.path.display(), "created empty data file");
                return Ok(StoredRoster::Created);
            }
            Err(e) => return Err(RosterError::access(&self.path, e)),
        };

        let lines: Vec<DecodedLine> = bytes
            .split(|b| *b == b'\n')
            .enumerate()
            .filter_map(|(i, raw)| decode_raw_line(i + 1, raw))
            .collect();

        if lines.is_empty() {
            return Ok(StoredRoster::Empty);
        }
        tracing::debug!(path = %self.path.display(), lines = lines.len(), "read data file");
        Ok(StoredRoster::Lines(lines))
    }

    fn save(&self, records: &[EmployeeRecord]) -> Result<(), RosterError> {
        fs::create_dir_all(self.parent_dir()).map_err(|e| RosterError::access(&self.path, e))?;

        let lock_file = fs::File::create(self.lock_path())
            .map_err(|e| RosterError::access(&self.path, e))?;
        lock_file
            .lock_exclusive()
            .map_err(|e| RosterError::access(&self.path, e))?;

        // Dropping the handle releases the lock.
        let result = self.write_to_disk(records);
        drop(lock_file);
        if result.is_ok() {
            tracing::debug!(path = %self.path.display(), records = records.len(), "saved data file");
        }
        result
    }

    fn location(&self) -> &Path {
        &self.path
    }
}
