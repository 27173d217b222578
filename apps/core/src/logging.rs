//! Tracing setup.
//!
//! Logs go to stderr so they never interleave with the chat transcript on
//! stdout. `RUST_LOG` overrides the default filter; `KINDRED_LOG_FORMAT=json`
//! switches to JSON lines.

use std::env;
use tracing_subscriber::{fmt, EnvFilter};

pub const ENV_LOG_FORMAT: &str = "KINDRED_LOG_FORMAT";

/// Installs the global subscriber. Calling it twice is a no-op.
pub fn init_tracing(default_directive: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive));

    let json = env::var(ENV_LOG_FORMAT).is_ok_and(|v| v.eq_ignore_ascii_case("json"));

    let result = if json {
        fmt()
            .json()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .try_init()
    } else {
        fmt()
            .with_env_filter(filter)
            .with_target(true)
            .with_writer(std::io::stderr)
            .try_init()
    };

    // Already installed by an earlier call or a test harness
    let _ = result;
}
