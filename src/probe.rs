use std::time::Duration;

use tokio::net::TcpStream;
use tokio::time;

use crate::services;
use crate::types::{PortResult, PortStatus};

/// Probe a single TCP port with one connect attempt bounded by `timeout`.
///
/// This function never fails: every failure mode (timeout, refusal,
/// unreachable network, socket-level name resolution) is folded into the
/// returned result's `error` field, so the coordinator can treat all probes
/// uniformly and one bad probe never aborts its siblings.
///
/// A successful connect is annotated with a service name from the static
/// well-known table; a miss there leaves the `"unknown"` default. The stream
/// is dropped on every exit path.
pub async fn probe_port(host: &str, port: u16, timeout: Duration) -> PortResult {
    let mut result = PortResult {
        host: host.to_string(),
        port,
        status: PortStatus::Closed,
        service: String::from("unknown"),
        error: None,
    };

    match time::timeout(timeout, TcpStream::connect((host, port))).await {
        Ok(Ok(_stream)) => {
            result.status = PortStatus::Open;
            if let Some(name) = services::lookup(port) {
                result.service = name.to_string();
            }
        }
        Ok(Err(e)) => {
            result.error = Some(e.to_string());
        }
        Err(_) => {
            result.error = Some(String::from("connection timed out"));
        }
    }

    result
}
