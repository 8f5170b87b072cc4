#![allow(clippy::multiple_crate_versions)]

//! Deskpet command-line entry point.
//!
//! Logging goes to stderr and is controlled by the `DESKPET_LOG` environment
//! variable (an `EnvFilter` directive, `info` by default).

use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter.
const LOG_ENV: &str = "DESKPET_LOG";

fn main() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).init();

    if let Err(err) = deskpet_lib::cli::run() {
        eprintln!("deskpet: {err}");
        std::process::exit(1);
    }
}
