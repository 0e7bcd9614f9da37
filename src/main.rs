use std::net::ToSocketAddrs;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{bail, Context, Result};
use clap::Parser;

use port_scan_rs::types::PortStatus;
use port_scan_rs::{report, scanner};

/// port-scan-rs — concurrent TCP port scanner with JSON report export.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "port-scan-rs",
    version,
    about = "Concurrent TCP port scanner with JSON report export.",
    long_about = None
)]
struct Cli {
    /// Target host (e.g., 127.0.0.1 or example.com).
    host: String,

    /// Start port.
    #[arg(long, default_value_t = 1)]
    start: u16,

    /// End port.
    #[arg(long, default_value_t = 1024)]
    end: u16,

    /// Max concurrent probes.
    #[arg(long, default_value_t = 50)]
    threads: usize,

    /// Socket connect timeout in seconds.
    #[arg(long, default_value_t = 1.0)]
    timeout: f64,

    /// JSON output filename (default: scan_<host>.json).
    #[arg(long)]
    output: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    validate(&cli)?;

    // Fail fast on an unresolvable host before any probe is scheduled.
    (cli.host.as_str(), cli.start)
        .to_socket_addrs()
        .with_context(|| format!("cannot resolve host {}", cli.host))?;

    println!("Scanning {} (ports {}-{})...", cli.host, cli.start, cli.end);
    let results = scanner::scan_range(
        &cli.host,
        cli.start,
        cli.end,
        cli.threads,
        Duration::from_secs_f64(cli.timeout),
    )
    .await?;

    let scan_report = report::assemble(results);
    let path = output_path(&cli);
    report::write_json(&path, &scan_report)?;
    println!("Results saved to {}", path.display());

    let open_ports: Vec<u16> = scan_report
        .scan_results
        .iter()
        .filter(|r| r.status == PortStatus::Open)
        .map(|r| r.port)
        .collect();
    println!(
        "\nSummary: {} open ports found: {:?}",
        open_ports.len(),
        open_ports
    );

    Ok(())
}

/// Reject bad arguments before any network activity.
///
/// `end > 65535` cannot be expressed at all: clap already rejects values
/// that do not fit in a `u16`.
fn validate(cli: &Cli) -> Result<()> {
    if cli.start < 1 || cli.start > cli.end {
        bail!(
            "invalid port range {}-{}: ports must be between 1-65535 and start <= end",
            cli.start,
            cli.end
        );
    }
    if cli.threads < 1 || cli.threads > 1000 {
        bail!("threads must be between 1 and 1000, got {}", cli.threads);
    }
    if !(cli.timeout > 0.0 && cli.timeout.is_finite()) {
        bail!("timeout must be a positive number of seconds, got {}", cli.timeout);
    }
    Ok(())
}

fn output_path(cli: &Cli) -> PathBuf {
    cli.output
        .clone()
        .unwrap_or_else(|| PathBuf::from(format!("scan_{}.json", cli.host)))
}
