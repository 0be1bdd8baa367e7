//! Event sinks for human-readable status lines
//!
//! Every notable sync event (deletion, copy, completed folder, error) is
//! handed to a [`Reporter`] as a single line. The reporter is passed into
//! each pass explicitly; there is no process-wide log handle.

use std::fs::{File, OpenOptions};
use std::io::{self, Stdout, Write};
use std::path::Path;

use chrono::Local;
use tracing::warn;

use crate::{Error, Result};

/// Timestamp format for log file lines, e.g. `16-10-2026 14:03:59`
pub const TIMESTAMP_FORMAT: &str = "%d-%m-%Y %H:%M:%S";

/// Receives one message per sync event.
pub trait Reporter {
    /// Record a single event line.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Report`] if the line could not be recorded. The
    /// synchronizer treats this as fatal.
    fn report(&mut self, message: &str) -> Result<()>;
}

impl<R: Reporter + ?Sized> Reporter for &mut R {
    fn report(&mut self, message: &str) -> Result<()> {
        (**self).report(message)
    }
}

/// Appends timestamped lines to a log file and echoes them to stdout.
///
/// The file is opened once in append mode and flushed after every line. It
/// is closed when the reporter is dropped. Only failures on the log file are
/// reported; if the echo writer fails (a closed pipe, a detached terminal),
/// echoing is switched off and the pass carries on.
#[derive(Debug)]
pub struct LogFileReporter<W = Stdout> {
    file: File,
    echo: Option<W>,
}

impl LogFileReporter {
    /// Open (or create) the log file at `path` for appending.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(|e| Error::from(mirror_fs::Error::io(path, e)))?;
        Ok(Self {
            file,
            echo: Some(io::stdout()),
        })
    }
}

impl<W: Write> LogFileReporter<W> {
    /// Echo messages to `echo` instead of stdout.
    pub fn with_echo<E: Write>(self, echo: E) -> LogFileReporter<E> {
        LogFileReporter {
            file: self.file,
            echo: Some(echo),
        }
    }

    /// Stop echoing messages.
    pub fn without_echo(mut self) -> Self {
        self.echo = None;
        self
    }

    fn echo_line(&mut self, message: &str) {
        let Some(echo) = self.echo.as_mut() else {
            return;
        };
        let written = writeln!(echo, "{message}").and_then(|()| echo.flush());
        if let Err(e) = written {
            warn!(error = %e, "echo to stdout failed, echo disabled");
            self.echo = None;
        }
    }
}

impl<W: Write> Reporter for LogFileReporter<W> {
    fn report(&mut self, message: &str) -> Result<()> {
        let stamp = Local::now().format(TIMESTAMP_FORMAT);
        writeln!(self.file, "[{stamp}] {message}")
            .and_then(|()| self.file.flush())
            .map_err(|source| Error::Report { source })?;
        self.echo_line(message);
        Ok(())
    }
}

/// Collects messages in memory.
#[derive(Debug, Clone, Default)]
pub struct MemoryReporter {
    messages: Vec<String>,
}

impl MemoryReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    /// Drain and return everything recorded so far.
    pub fn take(&mut self) -> Vec<String> {
        std::mem::take(&mut self.messages)
    }
}

impl Reporter for MemoryReporter {
    fn report(&mut self, message: &str) -> Result<()> {
        self.messages.push(message.to_string());
        Ok(())
    }
}
