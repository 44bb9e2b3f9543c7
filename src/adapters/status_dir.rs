//! Directory-backed status registry.
//!
//! Every daemon on the board drops a small text file into the status
//! directory (default `/tmp/status/`) whose content starts with its current
//! error code. This adapter lists the directory and opens each entry
//! read-only; parsing is left to [`crate::health`].
//!
//! Leading whitespace is skipped on the stream, however long, and then at
//! most [`RECORD_PREFIX_LEN`] bytes are kept from the first token on.

use std::fs::File;
use std::io::{self, BufRead, BufReader, ErrorKind, Read};
use std::path::{Path, PathBuf};

use log::debug;

use crate::app::ports::{RegistryError, StatusRegistry};
use crate::health::{StatusRecord, is_scanf_space};

/// Bytes kept from each record after its leading whitespace.
pub const RECORD_PREFIX_LEN: u64 = 64;

/// Status registry rooted at a directory.
#[derive(Debug, Clone)]
pub struct StatusDir {
    root: PathBuf,
}

impl StatusDir {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn read_record(path: &Path, name: String) -> StatusRecord {
        let file = match File::open(path) {
            Ok(f) => f,
            Err(e) => {
                debug!("status_dir: open {} failed: {}", path.display(), e);
                return StatusRecord::unopenable(name);
            }
        };

        let mut reader = BufReader::new(file);
        let mut prefix = Vec::new();
        let read = skip_leading_space(&mut reader)
            .and_then(|()| reader.take(RECORD_PREFIX_LEN).read_to_end(&mut prefix));
        if let Err(e) = read {
            // Opened but unreadable (e.g. a subdirectory): same as no integer.
            debug!("status_dir: read {} failed: {}", path.display(), e);
            prefix.clear();
        }
        StatusRecord::text(name, prefix)
    }
}

fn skip_leading_space<R: BufRead>(reader: &mut R) -> io::Result<()> {
    loop {
        let buf = reader.fill_buf()?;
        if buf.is_empty() {
            return Ok(());
        }
        let blanks = buf.iter().take_while(|b| is_scanf_space(**b)).count();
        let token_found = blanks < buf.len();
        reader.consume(blanks);
        if token_found {
            return Ok(());
        }
    }
}

impl StatusRegistry for StatusDir {
    fn scan(&self) -> Result<Vec<StatusRecord>, RegistryError> {
        let entries = std::fs::read_dir(&self.root).map_err(|e| match e.kind() {
            ErrorKind::NotFound => RegistryError::NotFound,
            _ => RegistryError::Unreadable(e.raw_os_error().unwrap_or(0)),
        })?;

        let mut records = Vec::new();
        for entry in entries {
            match entry {
                Ok(entry) => {
                    let name = entry.file_name().to_string_lossy().into_owned();
                    records.push(Self::read_record(&entry.path(), name));
                }
                Err(e) => {
                    debug!("status_dir: directory iteration error: {}", e);
                    records.push(StatusRecord::unopenable("<unlisted>"));
                }
            }
        }
        Ok(records)
    }
}
