//! Structured JSONL run log.
//!
//! One serde record per line: required timestamp/seq/level/event, optional
//! trial context. Absent optional fields are omitted from the output so the
//! log stays greppable and diff-friendly.

use std::io::Write;
use std::path::Path;

use serde::{Deserialize, Serialize};

/// Severity level for run events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Info,
    Warn,
    Error,
}

/// Canonical run log record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunEvent {
    pub timestamp: String,
    pub seq: u64,
    pub level: LogLevel,
    pub event: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub workload: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fork: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ops_per_ms_p50: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub checksum: Option<u64>,
}

impl RunEvent {
    /// Create an event with required fields only. The emitter stamps `seq`.
    #[must_use]
    pub fn new(level: LogLevel, event: impl Into<String>) -> Self {
        Self {
            timestamp: now_utc(),
            seq: 0,
            level,
            event: event.into(),
            workload: None,
            size: None,
            fork: None,
            ops_per_ms_p50: None,
            checksum: None,
        }
    }

    #[must_use]
    pub fn with_workload(mut self, workload: impl Into<String>) -> Self {
        self.workload = Some(workload.into());
        self
    }

    #[must_use]
    pub fn with_size(mut self, size: i64) -> Self {
        self.size = Some(size);
        self
    }

    #[must_use]
    pub fn with_fork(mut self, fork: u32) -> Self {
        self.fork = Some(fork);
        self
    }

    #[must_use]
    pub fn with_throughput(mut self, ops_per_ms_p50: f64) -> Self {
        self.ops_per_ms_p50 = Some(ops_per_ms_p50);
        self
    }

    #[must_use]
    pub fn with_checksum(mut self, checksum: u64) -> Self {
        self.checksum = Some(checksum);
        self
    }

    /// Serialize to a single JSONL line (no trailing newline).
    pub fn to_jsonl(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

/// Writes run events as JSONL, stamping monotonic sequence numbers.
pub struct RunLogEmitter {
    writer: Box<dyn Write>,
    seq: u64,
}

impl RunLogEmitter {
    /// Emitter writing to a file.
    pub fn to_file(path: &Path) -> std::io::Result<Self> {
        let file = std::fs::File::create(path)?;
        Ok(Self {
            writer: Box::new(std::io::BufWriter::new(file)),
            seq: 0,
        })
    }

    /// Emitter writing to an in-memory buffer (test seam).
    #[must_use]
    pub fn to_buffer() -> Self {
        Self {
            writer: Box::new(Vec::new()),
            seq: 0,
        }
    }

    /// Stamp the next sequence number and write the event.
    pub fn emit(&mut self, mut event: RunEvent) -> std::io::Result<RunEvent> {
        self.seq += 1;
        event.seq = self.seq;
        let line = event.to_jsonl().map_err(std::io::Error::other)?;
        writeln!(self.writer, "{line}")?;
        Ok(event)
    }

    /// Flush the underlying writer.
    pub fn flush(&mut self) -> std::io::Result<()> {
        self.writer.flush()
    }
}

fn now_utc() -> String {
    // Approximate UTC formatting; good enough for run logs without pulling
    // in a clock crate.
    let duration = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap_or_default();
    let secs = duration.as_secs();
    let millis = duration.subsec_millis();
    format!(
        "{:04}-{:02}-{:02}T{:02}:{:02}:{:02}.{:03}Z",
        1970 + secs / 31_557_600,
        (secs % 31_557_600) / 2_629_800 + 1,
        (secs % 2_629_800) / 86400 + 1,
        (secs % 86400) / 3600,
        (secs % 3600) / 60,
        secs % 60,
        millis,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn required_fields_serialize_and_optionals_are_omitted() {
        let event = RunEvent::new(LogLevel::Info, "run_start");
        let json = event.to_jsonl().expect("serializable event");
        let parsed: serde_json::Value = serde_json::from_str(&json).expect("valid json");
        assert!(parsed["timestamp"].is_string());
        assert_eq!(parsed["level"], "info");
        assert_eq!(parsed["event"], "run_start");
        assert!(parsed.get("workload").is_none());
        assert!(parsed.get("size").is_none());
        assert!(parsed.get("checksum").is_none());
    }

    #[test]
    fn populated_event_carries_trial_context() {
        let event = RunEvent::new(LogLevel::Info, "trial_complete")
            .with_workload("sum_via_indexing")
            .with_size(1000)
            .with_fork(1)
            .with_throughput(251.25)
            .with_checksum(0xFEED);
        let json = event.to_jsonl().expect("serializable event");
        let parsed: serde_json::Value = serde_json::from_str(&json).expect("valid json");
        assert_eq!(parsed["workload"], "sum_via_indexing");
        assert_eq!(parsed["size"], 1000);
        assert_eq!(parsed["fork"], 1);
        assert_eq!(parsed["checksum"], 0xFEED);
    }

    #[test]
    fn emitter_stamps_monotonic_sequence_numbers() {
        let mut emitter = RunLogEmitter::to_buffer();
        let first = emitter
            .emit(RunEvent::new(LogLevel::Info, "run_start"))
            .expect("emit");
        let second = emitter
            .emit(RunEvent::new(LogLevel::Info, "run_end"))
            .expect("emit");
        assert_eq!(first.seq, 1);
        assert_eq!(second.seq, 2);
    }

    #[test]
    fn event_roundtrips_through_json() {
        let event = RunEvent::new(LogLevel::Warn, "slow_trial").with_size(10_000);
        let json = event.to_jsonl().expect("serializable event");
        let restored: RunEvent = serde_json::from_str(&json).expect("valid event json");
        assert_eq!(restored.level, LogLevel::Warn);
        assert_eq!(restored.event, "slow_trial");
        assert_eq!(restored.size, Some(10_000));
        assert_eq!(restored.workload, None);
    }
}
