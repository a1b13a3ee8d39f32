//! CLI entry point for the header splitter.

use openvr_header_splitter::cli;
use tracing_subscriber::EnvFilter;

fn main() {
    // Progress notices are logged at INFO to stderr, respecting RUST_LOG
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = cli::run() {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
