use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use tokio::sync::Semaphore;
use tokio::task::JoinSet;

use crate::probe;
use crate::types::PortResult;

/// Scan every TCP port in `[start, end]` inclusive using asynchronous
/// connects with a concurrency limit.
///
/// - Limits concurrent socket attempts using a `Semaphore`; each task holds
///   an owned permit for its whole lifetime.
/// - Waits for every probe to finish before returning. There is no overall
///   deadline and no cancellation, so a hung connect occupies its worker for
///   the full per-connect timeout.
/// - Results come back sorted by ascending port number regardless of
///   completion order; exactly one entry per requested port.
///
/// Input validation is the caller's job: this function scans whatever range
/// it is handed. Per-probe failures are encoded in each entry's `error`
/// field by the prober, so the only error path here is a panicked task.
pub async fn scan_range(
    host: &str,
    start: u16,
    end: u16,
    concurrency: usize,
    timeout: Duration,
) -> Result<Vec<PortResult>> {
    scan_range_with(host, start, end, concurrency, timeout, |host, port, timeout| {
        async move { probe::probe_port(&host, port, timeout).await }
    })
    .await
}

/// Coordinator core, generic over the prober so the admission gate can be
/// exercised with an instrumented prober.
async fn scan_range_with<F, Fut>(
    host: &str,
    start: u16,
    end: u16,
    concurrency: usize,
    timeout: Duration,
    probe_fn: F,
) -> Result<Vec<PortResult>>
where
    F: Fn(String, u16, Duration) -> Fut,
    Fut: Future<Output = PortResult> + Send + 'static,
{
    let sem = Arc::new(Semaphore::new(concurrency.clamp(1, 1_000)));
    let mut set = JoinSet::new();

    for port in start..=end {
        let permit = sem
            .clone()
            .acquire_owned()
            .await
            .expect("semaphore in scope");
        let fut = probe_fn(host.to_string(), port, timeout);

        set.spawn(async move {
            let _permit = permit; // keep permit until task completes
            fut.await
        });
    }

    let mut results = Vec::with_capacity(set.len());
    while let Some(res) = set.join_next().await {
        results.push(res?);
    }
    results.sort_by_key(|r| r.port);

    Ok(results)
}
