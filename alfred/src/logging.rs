//! Logging setup for the CLI.
//!
//! Library crates only emit `tracing` events; the subscriber lives here.
//! Verbosity flags pick the default level and `RUST_LOG` overrides them.

use std::io::IsTerminal;

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Crates whose events pass the default filter.
const CRATES: [&str; 5] = [
    "alfred",
    "alfred_codegen",
    "alfred_codegen_java",
    "alfred_core",
    "alfred_manifest",
];

/// Verbosity requested on the command line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Verbosity {
    /// Number of `-v` flags.
    pub verbose: u8,
    pub quiet: bool,
}

/// Install the global subscriber, writing to stderr.
///
/// Does nothing if a subscriber is already installed.
pub fn init(verbosity: Verbosity) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives(level(verbosity))));

    let fmt_layer = fmt::layer()
        .with_target(false)
        .with_ansi(std::io::stderr().is_terminal())
        .with_writer(std::io::stderr);

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init();
}

fn level(verbosity: Verbosity) -> &'static str {
    if verbosity.quiet {
        return "error";
    }
    match verbosity.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

fn default_directives(level: &str) -> String {
    let crates: Vec<String> = CRATES.iter().map(|c| format!("{c}={level}")).collect();
    format!("warn,{}", crates.join(","))
}
