//! Plan command implementation for the Itinerant CLI.

use std::io::{BufReader, Write};

use camino::{Utf8Path, Utf8PathBuf};
use clap::{Parser, ValueEnum};
use itinerant_core::{Itinerary, ItineraryPlanner, Planner, PlannerConfig, PoolCatalog, TripRequest};
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};

use crate::fs::{create_utf8_file, file_is_file, open_utf8_file};
use crate::render::write_markdown;
use crate::{
    ARG_PLAN_CATALOG, ARG_PLAN_FORMAT, ARG_PLAN_OUTPUT, ARG_PLAN_REQUEST, ARG_PLAN_SEED,
    CliError, ENV_PLAN_CATALOG, ENV_PLAN_REQUEST,
};

/// How the itinerary is printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub(crate) enum OutputFormat {
    /// Pretty-printed JSON.
    #[default]
    Json,
    /// A readable Markdown schedule.
    Markdown,
}

/// CLI arguments for the `plan` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Build a day-by-day itinerary from a JSON trip request and a \
                 JSON catalog of candidate places per city. Paths can come \
                 from CLI flags, configuration files, or environment \
                 variables.",
    about = "Plan a budget-aware itinerary"
)]
#[ortho_config(prefix = "ITINERANT")]
pub(crate) struct PlanArgs {
    /// Path to a JSON file containing a TripRequest.
    #[arg(value_name = "path")]
    #[serde(default)]
    pub(crate) request_path: Option<Utf8PathBuf>,
    /// Path to a JSON file mapping city names to candidate pools.
    #[arg(long = ARG_PLAN_CATALOG, value_name = "path")]
    #[serde(default)]
    pub(crate) catalog: Option<Utf8PathBuf>,
    /// Output format.
    #[arg(long = ARG_PLAN_FORMAT, value_enum)]
    #[serde(default)]
    pub(crate) format: Option<OutputFormat>,
    /// Seed for an alternative, reproducible ordering of candidates.
    #[arg(long = ARG_PLAN_SEED, value_name = "n")]
    #[serde(default)]
    pub(crate) seed: Option<u64>,
    /// Write the itinerary here instead of stdout.
    #[arg(long = ARG_PLAN_OUTPUT, value_name = "path")]
    #[serde(default)]
    pub(crate) output: Option<Utf8PathBuf>,
}

impl PlanArgs {
    pub(crate) fn into_config(self) -> Result<PlanConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        PlanConfig::try_from(merged)
    }
}

/// Resolved `plan` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct PlanConfig {
    /// Path to the JSON trip request.
    pub(crate) request_path: Utf8PathBuf,
    /// Path to the JSON pool catalog.
    pub(crate) catalog: Utf8PathBuf,
    /// Output format.
    pub(crate) format: OutputFormat,
    /// Trip seed.
    pub(crate) seed: u64,
    /// Optional output file.
    pub(crate) output: Option<Utf8PathBuf>,
}

impl PlanConfig {
    pub(crate) fn validate_sources(&self) -> Result<(), CliError> {
        Self::require_existing(&self.request_path, ARG_PLAN_REQUEST)?;
        Self::require_existing(&self.catalog, ARG_PLAN_CATALOG)?;
        Ok(())
    }

    fn require_existing(path: &Utf8Path, field: &'static str) -> Result<(), CliError> {
        match file_is_file(path) {
            Ok(true) => Ok(()),
            Ok(false) => Err(CliError::SourcePathNotFile {
                field,
                path: path.to_path_buf(),
            }),
            Err(source) if source.kind() == std::io::ErrorKind::NotFound => {
                Err(CliError::MissingSourceFile {
                    field,
                    path: path.to_path_buf(),
                })
            }
            Err(source) => Err(CliError::InspectSourcePath {
                field,
                path: path.to_path_buf(),
                source,
            }),
        }
    }

    fn planner_config(&self) -> PlannerConfig {
        PlannerConfig::default().with_seed(self.seed)
    }
}

impl TryFrom<PlanArgs> for PlanConfig {
    type Error = CliError;

    fn try_from(args: PlanArgs) -> Result<Self, Self::Error> {
        let request_path = args.request_path.ok_or(CliError::MissingArgument {
            field: ARG_PLAN_REQUEST,
            env: ENV_PLAN_REQUEST,
        })?;
        let catalog = args.catalog.ok_or(CliError::MissingArgument {
            field: ARG_PLAN_CATALOG,
            env: ENV_PLAN_CATALOG,
        })?;
        Ok(Self {
            request_path,
            catalog,
            format: args.format.unwrap_or_default(),
            seed: args.seed.unwrap_or_default(),
            output: args.output,
        })
    }
}

pub(super) fn run_plan(args: PlanArgs) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    run_plan_with(args, &mut stdout)
}

/// Plan and print to `stdout`, or to the configured output file.
pub(super) fn run_plan_with(args: PlanArgs, stdout: &mut dyn Write) -> Result<(), CliError> {
    let config = resolve_plan_config(args)?;
    let itinerary = execute_plan(&config)?;
    match &config.output {
        Some(path) => {
            let mut file = create_utf8_file(path).map_err(|source| CliError::CreateOutput {
                path: path.clone(),
                source,
            })?;
            write_itinerary(&mut file, &itinerary, config.format)?;
            log::info!("wrote itinerary to {path}");
            Ok(())
        }
        None => write_itinerary(stdout, &itinerary, config.format),
    }
}

fn resolve_plan_config(args: PlanArgs) -> Result<PlanConfig, CliError> {
    let config = args.into_config()?;
    config.validate_sources()?;
    Ok(config)
}

fn execute_plan(config: &PlanConfig) -> Result<Itinerary, CliError> {
    let request = load_trip_request(&config.request_path)?;
    request
        .validate()
        .map_err(|source| CliError::InvalidTripRequest {
            path: config.request_path.clone(),
            source,
        })?;
    let catalog = load_pool_catalog(&config.catalog)?;
    log::debug!(
        "loaded {} cities from {}",
        catalog.len(),
        config.catalog
    );
    let planner = ItineraryPlanner::with_config(catalog, config.planner_config());
    planner
        .plan(&request)
        .map_err(|source| CliError::Plan { source })
}

/// Loads a JSON-encoded [`TripRequest`] from disk.
pub(super) fn load_trip_request(path: &Utf8Path) -> Result<TripRequest, CliError> {
    let file = open_utf8_file(path).map_err(|source| CliError::OpenTripRequest {
        path: path.to_path_buf(),
        source,
    })?;
    let reader = BufReader::new(file);
    serde_json::from_reader(reader).map_err(|source| CliError::ParseTripRequest {
        path: path.to_path_buf(),
        source,
    })
}

/// Loads a JSON-encoded [`PoolCatalog`] from disk.
pub(super) fn load_pool_catalog(path: &Utf8Path) -> Result<PoolCatalog, CliError> {
    let file = open_utf8_file(path).map_err(|source| CliError::OpenCatalog {
        path: path.to_path_buf(),
        source,
    })?;
    let reader = BufReader::new(file);
    serde_json::from_reader(reader).map_err(|source| CliError::ParseCatalog {
        path: path.to_path_buf(),
        source,
    })
}

fn write_itinerary(
    writer: &mut dyn Write,
    itinerary: &Itinerary,
    format: OutputFormat,
) -> Result<(), CliError> {
    match format {
        OutputFormat::Json => {
            let payload = serde_json::to_string_pretty(itinerary)
                .map_err(CliError::SerialiseItinerary)?;
            writer
                .write_all(payload.as_bytes())
                .map_err(CliError::WriteOutput)?;
            writer.write_all(b"\n").map_err(CliError::WriteOutput)
        }
        OutputFormat::Markdown => write_markdown(writer, itinerary).map_err(CliError::WriteOutput),
    }
}

#[cfg(test)]
pub(crate) fn config_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<PlanConfig, CliError> {
    let merged = PlanArgs::merge_from_layers(layers).map_err(CliError::from)?;
    PlanConfig::try_from(merged)
}
