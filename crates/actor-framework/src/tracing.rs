//! # Observability & Tracing
//!
//! Subscriber setup shared by every binary built on the framework.
//!
//! The actor loop logs each request with structured fields (`entity_type`, `id`, `size`,
//! `error`), so the output stays readable without module paths: targets are hidden.
//!
//! ```bash
//! RUST_LOG=info cargo run                          # lifecycle + successful mutations
//! RUST_LOG=debug cargo run                         # full payloads (params, actions)
//! SHOP_LOG_FORMAT=json RUST_LOG=info cargo run     # one JSON object per line
//! ```
//!
//! With `RUST_LOG=info` a purchase reads like:
//!
//! ```text
//! INFO purchase: Sending purchase to invoice actor
//! INFO Action ok entity_type="Product" id=product_1
//! INFO Action ok entity_type="Customer" id=customer_1
//! INFO Created entity_type="Invoice" id=invoice_1 size=1
//! ```

use std::fmt;
use std::str::FromStr;
use tracing_subscriber::EnvFilter;

/// Output format of the process-wide subscriber.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    /// Single-line human output with spans inline.
    #[default]
    Compact,
    /// Newline-delimited JSON for log shippers.
    Json,
}

impl FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "compact" => Ok(LogFormat::Compact),
            "json" => Ok(LogFormat::Json),
            other => Err(format!("unknown log format `{}` (expected compact or json)", other)),
        }
    }
}

impl fmt::Display for LogFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogFormat::Compact => f.write_str("compact"),
            LogFormat::Json => f.write_str("json"),
        }
    }
}

/// Installs the global subscriber, filtered by `RUST_LOG` (default `info`).
///
/// Safe to call more than once; later calls are no-ops.
pub fn setup_tracing(format: LogFormat) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false);

    let _ = match format {
        LogFormat::Compact => builder.compact().try_init(),
        LogFormat::Json => builder.json().try_init(),
    };
}
