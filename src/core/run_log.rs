//! Append-only command log.
//!
//! Opened once per process. Each run begins with a banner; every other line
//! is a command exactly as it was executed.

use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

const BANNER_WIDTH: usize = 80;

pub struct RunLog {
    path: PathBuf,
    file: File,
    lines: usize,
}

impl RunLog {
    /// Open (or create) the log for appending and write the run banner.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .map_err(|e| {
                Error::internal_io(e.to_string(), Some(format!("open {}", path.display())))
                    .with_hint("Pass --log-path with a writable file")
            })?;

        let mut log = Self {
            path,
            file,
            lines: 0,
        };
        log.write_raw(&format!("\n\n{}\n\n\n", "*".repeat(BANNER_WIDTH)))?;
        Ok(log)
    }

    /// Append one command line.
    pub fn record(&mut self, line: &str) -> Result<()> {
        self.write_raw(&format!("{}\n", line))?;
        self.lines += 1;
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Command lines recorded by this process.
    pub fn lines(&self) -> usize {
        self.lines
    }

    // Flushed per write so a killed retry loop still leaves its attempts on disk.
    fn write_raw(&mut self, text: &str) -> Result<()> {
        self.file
            .write_all(text.as_bytes())
            .and_then(|_| self.file.flush())
            .map_err(|e| {
                Error::internal_io(e.to_string(), Some(format!("write {}", self.path.display())))
            })
    }
}
