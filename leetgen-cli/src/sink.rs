use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use leetgen::PassphraseRecord;
use tempfile::NamedTempFile;
use tracing::{info, instrument};

use crate::error::Error;

/// Destination for a complete, in-memory list of records.
pub trait RecordSink {
    fn write_records(&mut self, records: &[PassphraseRecord]) -> Result<(), Error>;
}

/// Writes records as one pretty-printed JSON array.
///
/// The document is rendered in memory, written to a temporary file next to the
/// target and renamed over it, so a failed write never leaves a truncated file.
#[derive(Debug, Clone)]
pub struct JsonFileSink {
    path: PathBuf,
}

impl JsonFileSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// File name of the target, for reporting.
    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.path.display().to_string())
    }

    fn parent_dir(&self) -> &Path {
        match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        }
    }

    fn write_err(&self, source: std::io::Error) -> Error {
        Error::Write { path: self.path.clone(), source }
    }
}

impl RecordSink for JsonFileSink {
    #[instrument(skip_all, fields(path = %self.path.display(), count = records.len()))]
    fn write_records(&mut self, records: &[PassphraseRecord]) -> Result<(), Error> {
        let bytes = serde_json::to_vec_pretty(records)?;

        let parent = self.parent_dir();
        fs::create_dir_all(parent).map_err(|e| self.write_err(e))?;

        let mut temp_file = NamedTempFile::new_in(parent).map_err(|e| self.write_err(e))?;
        temp_file.write_all(&bytes).map_err(|e| self.write_err(e))?;
        temp_file.as_file().sync_all().map_err(|e| self.write_err(e))?;
        temp_file
            .persist(&self.path)
            .map_err(|source| Error::Persist { path: self.path.clone(), source })?;

        info!(bytes = bytes.len(), "wrote passphrase records");
        Ok(())
    }
}

#[cfg(test)]
#[derive(Debug, Default)]
pub(crate) struct MemorySink {
    pub records: Vec<PassphraseRecord>,
}

#[cfg(test)]
impl RecordSink for MemorySink {
    fn write_records(&mut self, records: &[PassphraseRecord]) -> Result<(), Error> {
        self.records = records.to_vec();
        Ok(())
    }
}
