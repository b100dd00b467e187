//! Optional JSON-lines event log.
//!
//! One `serde_json` object per line. The first failed write disables the log
//! for the rest of the session; the game itself never sees the error.

use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;

use crate::types::LockEvent;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum LogRecord {
    Start {
        seed: u32,
        episode: u32,
    },
    Lock {
        kind: &'static str,
        lines: u32,
        points: u32,
        score: u32,
        level: u32,
        total_lines: u32,
    },
    Pause {
        paused: bool,
    },
    GameOver {
        score: u32,
        level: u32,
        lines: u32,
    },
}

impl LogRecord {
    /// Lock record from an engine event plus the totals after it.
    pub fn lock(event: &LockEvent, score: u32, level: u32, total_lines: u32) -> Self {
        LogRecord::Lock {
            kind: event.kind.as_str(),
            lines: event.lines_cleared,
            points: event.points,
            score,
            level,
            total_lines,
        }
    }
}

pub struct EventLog {
    writer: Option<BufWriter<File>>,
    buf: Vec<u8>,
}

impl EventLog {
    /// A log that drops every record.
    pub fn disabled() -> Self {
        Self {
            writer: None,
            buf: Vec::new(),
        }
    }

    /// Open `path` for appending, or return a disabled log for `None`.
    pub fn open(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::disabled());
        };

        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .with_context(|| format!("open event log {}", path.display()))?;

        Ok(Self {
            writer: Some(BufWriter::new(file)),
            buf: Vec::with_capacity(256),
        })
    }

    pub fn is_enabled(&self) -> bool {
        self.writer.is_some()
    }

    pub fn record(&mut self, record: &LogRecord) {
        let Some(writer) = self.writer.as_mut() else {
            return;
        };

        self.buf.clear();
        if serde_json::to_writer(&mut self.buf, record).is_err() {
            return;
        }
        self.buf.push(b'\n');

        if writer.write_all(&self.buf).is_err() {
            self.writer = None;
        }
    }

    pub fn flush(&mut self) {
        if let Some(writer) = self.writer.as_mut() {
            if writer.flush().is_err() {
                self.writer = None;
            }
        }
    }
}

impl Drop for EventLog {
    fn drop(&mut self) {
        self.flush();
    }
}
