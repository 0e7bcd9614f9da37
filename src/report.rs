use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;
use time::format_description::well_known::Rfc3339;
use time::OffsetDateTime;

use crate::types::{PortResult, ScanReport};

/// Assemble the terminal report from collected probe results.
///
/// The timestamp is the wall clock at assembly time, UTC, RFC 3339. The
/// report host is taken from the first result, or the literal `"unknown"`
/// when the result set is empty. Results pass through unmodified.
pub fn assemble(results: Vec<PortResult>) -> ScanReport {
    ScanReport {
        timestamp: now_rfc3339(),
        host: results
            .first()
            .map(|r| r.host.clone())
            .unwrap_or_else(|| String::from("unknown")),
        scan_results: results,
    }
}

/// Serialize a report as JSON pretty-printed with 4-space indentation.
pub fn to_json_string(report: &ScanReport) -> Result<String> {
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    report
        .serialize(&mut ser)
        .context("failed to serialize scan report")?;
    String::from_utf8(buf).context("report JSON was not valid UTF-8")
}

/// Write the report to `path`. A write failure is fatal to the run; results
/// are not silently dropped.
pub fn write_json(path: impl AsRef<Path>, report: &ScanReport) -> Result<()> {
    let json = to_json_string(report)?;
    fs::write(path.as_ref(), json)
        .with_context(|| format!("failed to write report to {}", path.as_ref().display()))?;
    Ok(())
}

fn now_rfc3339() -> String {
    OffsetDateTime::now_utc()
        .format(&Rfc3339)
        .unwrap_or_else(|_| String::from("1970-01-01T00:00:00Z"))
}
