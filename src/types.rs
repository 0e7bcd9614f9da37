use serde::{Deserialize, Serialize};

/// Classification of a probed TCP port.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum PortStatus {
    Open,
    Closed,
}

/// Outcome of one TCP connect probe against a single (host, port) pair.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct PortResult {
    pub host: String,
    pub port: u16,
    pub status: PortStatus,
    pub service: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Terminal artifact of a scan run: written once, never mutated.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ScanReport {
    pub timestamp: String,
    pub host: String,
    pub scan_results: Vec<PortResult>,
}
