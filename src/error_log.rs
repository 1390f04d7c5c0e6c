//! Append-only log of failed inputs
//!
//! Every input that failed validation or lookup gets one line:
//!
//! ```text
//! 2024-05-01 12:00:00 [dns] 1.1.1.1 HTTP 500: Server Error
//! ```

use crate::error::{Result, ResultExt};
use crate::types::QueryMode;
use chrono::Local;
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Default location of the error log
pub const DEFAULT_ERROR_LOG: &str = "ipthc-errors.log";

/// Writes failed inputs to a file
#[derive(Debug)]
pub struct ErrorLogger {
    file: File,
    path: PathBuf,
}

impl ErrorLogger {
    /// Open (or create) the log file for appending
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .with_context(|| format!("Failed to open log file {}", path.display()))?;

        Ok(Self {
            file,
            path: path.to_path_buf(),
        })
    }

    /// Path of the log file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append one entry
    pub fn log(&mut self, mode: QueryMode, input: &str, message: &str) -> Result<()> {
        let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S");
        writeln!(self.file, "{timestamp} [{mode}] {input} {message}")
            .context("Failed to write to log")?;
        Ok(())
    }
}
