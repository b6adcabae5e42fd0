use icontacts::prelude::run_app;
use std::process::exit;
use tracing_subscriber::EnvFilter;

fn main() {
    // Logs go to stderr; stdout is for command output
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run_app() {
        eprintln!("Error: {e}");
        exit(1);
    }
}
