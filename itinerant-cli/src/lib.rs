//! Command-line interface for the Itinerant planner.
//!
//! The `plan` subcommand reads a JSON trip request and a JSON pool catalog,
//! runs the core planner and prints the itinerary as JSON or Markdown.
#![forbid(unsafe_code)]

use clap::{Parser, Subcommand};

mod error;
mod fs;
mod logging;
mod plan;
mod render;

pub use error::CliError;

use plan::PlanArgs;

const ARG_PLAN_REQUEST: &str = "request";
const ARG_PLAN_CATALOG: &str = "catalog";
const ARG_PLAN_FORMAT: &str = "format";
const ARG_PLAN_SEED: &str = "seed";
const ARG_PLAN_OUTPUT: &str = "output";
const ENV_PLAN_REQUEST: &str = "ITINERANT_CMDS_PLAN_REQUEST_PATH";
const ENV_PLAN_CATALOG: &str = "ITINERANT_CMDS_PLAN_CATALOG";

/// Run the Itinerant CLI with the current process arguments and environment.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    logging::init_logging();
    match cli.command {
        Command::Plan(args) => plan::run_plan(args),
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "itinerant",
    about = "Budget-aware, day-by-day itinerary planning",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Build an itinerary from a trip request and a pool catalog.
    Plan(PlanArgs),
}

#[cfg(test)]
mod tests;
