//! Export delivery sinks.
//!
//! Serialization never fails; delivery can. The [`ExportSink`] trait is
//! the single outward capability the export flow needs, and [`DirSink`]
//! is the shipped adapter: it writes the UTF-8 text into a
//! capability-scoped directory using a temp-file-and-rename strategy so
//! a failed write never leaves a partial export behind.

use std::io::Write;
use std::time::{SystemTime, UNIX_EPOCH};

use camino::{Utf8Component, Utf8Path};
use cap_std::ambient_authority;
use cap_std::fs::{Dir, OpenOptions};
use thiserror::Error;

/// Errors raised while delivering an export.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExportError {
    /// The target directory could not be opened.
    #[error("failed to open export directory '{path}': {message}")]
    OpenDir {
        /// The directory that was requested.
        path: String,
        /// Description of the underlying error.
        message: String,
    },

    /// The export file could not be written.
    #[error("failed to write export '{filename}': {message}")]
    Write {
        /// The export filename.
        filename: String,
        /// Description of the underlying error.
        message: String,
    },

    /// The filename was not a single path component.
    #[error("export filename '{filename}' must be a bare file name")]
    InvalidFilename {
        /// The rejected filename.
        filename: String,
    },
}

/// Capability to deliver one serialized export.
pub trait ExportSink {
    /// Delivers the CSV text under the given filename.
    ///
    /// # Errors
    ///
    /// Returns [`ExportError`] when the delivery mechanism fails; the
    /// text itself is already fully assembled at this point.
    fn deliver(&self, filename: &str, contents: &str) -> Result<(), ExportError>;
}

/// Sink writing exports into a directory, atomically per file.
#[derive(Debug)]
pub struct DirSink {
    dir: Dir,
}

impl DirSink {
    /// Opens the target directory.
    ///
    /// # Errors
    ///
    /// Returns [`ExportError::OpenDir`] when the directory does not
    /// exist or is not accessible.
    pub fn open(path: &Utf8Path) -> Result<Self, ExportError> {
        let dir = Dir::open_ambient_dir(path.as_std_path(), ambient_authority()).map_err(
            |err| ExportError::OpenDir {
                path: path.to_string(),
                message: err.to_string(),
            },
        )?;
        Ok(Self { dir })
    }
}

impl ExportSink for DirSink {
    fn deliver(&self, filename: &str, contents: &str) -> Result<(), ExportError> {
        let mut components = Utf8Path::new(filename).components();
        let (Some(Utf8Component::Normal(name)), None) = (components.next(), components.next())
        else {
            return Err(ExportError::InvalidFilename {
                filename: filename.to_owned(),
            });
        };

        let suffix = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map_or(0, |elapsed| elapsed.as_nanos());
        let tmp_name = format!(".{}.tmp.{}.{}", name, std::process::id(), suffix);

        self.write_temp_file(&tmp_name, name, contents)?;
        if let Err(err) = self.dir.rename(&tmp_name, &self.dir, name) {
            // Best-effort cleanup of the temp file on rename failure.
            drop(self.dir.remove_file(&tmp_name));
            return Err(ExportError::Write {
                filename: name.to_owned(),
                message: err.to_string(),
            });
        }
        self.sync_directory();
        Ok(())
    }
}

impl DirSink {
    fn write_temp_file(
        &self,
        tmp_name: &str,
        target_name: &str,
        contents: &str,
    ) -> Result<(), ExportError> {
        let mut options = OpenOptions::new();
        options.write(true).create_new(true);
        let mut file =
            self.dir
                .open_with(tmp_name, &options)
                .map_err(|err| ExportError::Write {
                    filename: target_name.to_owned(),
                    message: err.to_string(),
                })?;

        let outcome = file
            .write_all(contents.as_bytes())
            .and_then(|()| file.sync_all());
        if let Err(err) = outcome {
            drop(file);
            drop(self.dir.remove_file(tmp_name));
            return Err(ExportError::Write {
                filename: target_name.to_owned(),
                message: err.to_string(),
            });
        }
        Ok(())
    }

    fn sync_directory(&self) {
        // Best-effort directory sync; ignore failures.
        if self.dir.open(".").and_then(|dir| dir.sync_all()).is_err() {
            // Ignore sync failures.
        }
    }
}
