use clap::Parser;

use csvconv::cli::{handle_error, log_directive, run, Args};
use csvconv::logging::init_tracing;

fn main() {
    let args = Args::parse();

    // Set up logging
    init_tracing(log_directive(&args));

    if let Err(err) = run(&args) {
        tracing::debug!(error = ?err, "command failed");
        handle_error(&err);
        std::process::exit(1);
    }
}
