//! Entry point for the command-line interface.
#![forbid(unsafe_code)]

use itinerant_cli::CliError;

fn main() {
    match itinerant_cli::run() {
        Ok(()) => {}
        Err(CliError::ArgumentParsing(err)) => err.exit(),
        Err(err) => {
            eprintln!("itinerant: {err}");
            std::process::exit(1);
        }
    }
}
