//! rWorkTracker main entrypoint.

use rworktracker::run;
use tracing_subscriber::EnvFilter;

fn main() {
    // diagnostics go to stderr, `RUST_LOG` overrides the default level
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    println!();
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
