//! Focused unit tests covering plan CLI configuration, input loading and
//! output.

use super::helpers::{Workspace, lisbon_request, write_utf8};
use super::*;
use crate::plan::{
    OutputFormat, PlanArgs, PlanConfig, config_from_layers_for_test, load_pool_catalog,
    load_trip_request, run_plan_with,
};
use camino::Utf8PathBuf;
use itinerant_core::{Itinerary, TripRequestError};
use rstest::rstest;

fn args_for(workspace: &Workspace) -> PlanArgs {
    PlanArgs {
        request_path: Some(workspace.request_path.clone()),
        catalog: Some(workspace.catalog_path.clone()),
        ..PlanArgs::default()
    }
}

fn run_to_string(args: PlanArgs) -> Result<String, CliError> {
    let mut buffer = Vec::new();
    run_plan_with(args, &mut buffer)?;
    Ok(String::from_utf8(buffer).expect("stdout utf-8"))
}

#[rstest]
fn converting_plan_without_request_errors() {
    let args = PlanArgs {
        catalog: Some(Utf8PathBuf::from("catalog.json")),
        ..PlanArgs::default()
    };

    let err = PlanConfig::try_from(args).expect_err("missing request should error");
    match err {
        CliError::MissingArgument { field, env } => {
            assert_eq!(field, ARG_PLAN_REQUEST);
            assert_eq!(env, ENV_PLAN_REQUEST);
        }
        other => panic!("expected MissingArgument, found {other:?}"),
    }
}

#[rstest]
fn converting_plan_without_catalog_errors() {
    let args = PlanArgs {
        request_path: Some(Utf8PathBuf::from("request.json")),
        ..PlanArgs::default()
    };

    let err = PlanConfig::try_from(args).expect_err("missing catalog should error");
    match err {
        CliError::MissingArgument { field, env } => {
            assert_eq!(field, ARG_PLAN_CATALOG);
            assert_eq!(env, ENV_PLAN_CATALOG);
        }
        other => panic!("expected MissingArgument, found {other:?}"),
    }
}

#[rstest]
fn plan_config_fills_defaults() {
    let args = PlanArgs {
        request_path: Some(Utf8PathBuf::from("request.json")),
        catalog: Some(Utf8PathBuf::from("catalog.json")),
        ..PlanArgs::default()
    };

    let config = PlanConfig::try_from(args).expect("config should build");
    assert_eq!(config.format, OutputFormat::Json);
    assert_eq!(config.seed, 0);
    assert_eq!(config.output, None);
}

#[rstest]
fn validate_sources_reports_missing_catalog() {
    let workspace = Workspace::new();
    workspace.write_request(&lisbon_request());
    let config = PlanConfig::try_from(args_for(&workspace)).expect("config should build");

    let err = config
        .validate_sources()
        .expect_err("missing catalog should fail validation");
    match err {
        CliError::MissingSourceFile { field, path } => {
            assert_eq!(field, ARG_PLAN_CATALOG);
            assert_eq!(path, workspace.catalog_path);
        }
        other => panic!("expected MissingSourceFile, found {other:?}"),
    }
}

#[rstest]
fn validate_sources_reports_not_file() {
    let workspace = Workspace::new();
    let args = PlanArgs {
        request_path: Some(workspace.root.clone()),
        catalog: Some(workspace.catalog_path.clone()),
        ..PlanArgs::default()
    };
    let config = PlanConfig::try_from(args).expect("config should build");

    let err = config
        .validate_sources()
        .expect_err("directory should fail validation");
    match err {
        CliError::SourcePathNotFile { field, path } => {
            assert_eq!(field, ARG_PLAN_REQUEST);
            assert_eq!(path, workspace.root);
        }
        other => panic!("expected SourcePathNotFile, found {other:?}"),
    }
}

#[rstest]
fn load_trip_request_decodes_json() {
    let workspace = Workspace::new();
    workspace.write_request(&lisbon_request());

    let request = load_trip_request(&workspace.request_path).expect("request should load");
    assert_eq!(request, lisbon_request());
}

#[rstest]
fn load_trip_request_rejects_invalid_json() {
    let workspace = Workspace::new();
    write_utf8(&workspace.request_path, b"{ not valid json");

    let err = load_trip_request(&workspace.request_path).expect_err("invalid JSON should error");
    match err {
        CliError::ParseTripRequest { path, .. } => assert_eq!(path, workspace.request_path),
        other => panic!("expected ParseTripRequest, found {other:?}"),
    }
}

#[rstest]
fn load_trip_request_io_error_returns_open_error() {
    let workspace = Workspace::new();

    let err = load_trip_request(&workspace.request_path).expect_err("missing file should error");
    match err {
        CliError::OpenTripRequest { path, .. } => assert_eq!(path, workspace.request_path),
        other => panic!("expected OpenTripRequest, found {other:?}"),
    }
}

#[rstest]
fn load_pool_catalog_decodes_cities() {
    let workspace = Workspace::with_sample_inputs();

    let catalog = load_pool_catalog(&workspace.catalog_path).expect("catalog should load");
    assert_eq!(catalog.len(), 2);
}

#[rstest]
fn load_pool_catalog_rejects_invalid_json() {
    let workspace = Workspace::new();
    write_utf8(&workspace.catalog_path, b"[1, 2, 3]");

    let err = load_pool_catalog(&workspace.catalog_path).expect_err("array should not decode");
    match err {
        CliError::ParseCatalog { path, .. } => assert_eq!(path, workspace.catalog_path),
        other => panic!("expected ParseCatalog, found {other:?}"),
    }
}

#[rstest]
fn merge_layers_maps_configuration_errors() {
    use ortho_config::MergeComposer;
    use serde_json::json;

    let mut composer = MergeComposer::new();
    composer.push_cli(json!({ "seed": "many" }));

    let err = config_from_layers_for_test(composer.layers())
        .expect_err("invalid config layer should map to CliError::Configuration");
    match err {
        CliError::Configuration(_) => {}
        other => panic!("expected CliError::Configuration, found {other:?}"),
    }
}

#[rstest]
fn merge_layers_honours_precedence() {
    use ortho_config::MergeComposer;
    use serde_json::json;

    let workspace = Workspace::new();
    let env_request = workspace.root.join("from-env-request.json");
    let cli_catalog = workspace.root.join("from-cli-catalog.json");
    let mut composer = MergeComposer::new();
    composer.push_file(
        json!({
            "catalog": workspace.root.join("from-file-catalog.json").as_str(),
            "format": "markdown",
        }),
        None,
    );
    composer.push_environment(json!({
        "request_path": env_request.as_str(),
        "seed": 7,
    }));
    composer.push_cli(json!({
        "catalog": cli_catalog.as_str(),
    }));

    let config =
        config_from_layers_for_test(composer.layers()).expect("merged config should build");
    assert_eq!(config.request_path, env_request);
    assert_eq!(config.catalog, cli_catalog);
    assert_eq!(config.format, OutputFormat::Markdown);
    assert_eq!(config.seed, 7);
}

#[rstest]
fn run_plan_prints_itinerary_json() {
    let workspace = Workspace::with_sample_inputs();

    let stdout = run_to_string(args_for(&workspace)).expect("plan should succeed");
    let itinerary: Itinerary = serde_json::from_str(&stdout).expect("output should be JSON");
    assert_eq!(itinerary.trip_metadata.destination, "Lisbon");
    let numbers: Vec<u32> = itinerary.days.iter().map(|day| day.day_number).collect();
    assert_eq!(numbers, vec![1, 2]);
    assert!(stdout.ends_with('\n'));
}

#[rstest]
fn run_plan_is_repeatable_for_a_seed() {
    let workspace = Workspace::with_sample_inputs();
    let seeded = || PlanArgs {
        seed: Some(42),
        ..args_for(&workspace)
    };

    let first: Itinerary =
        serde_json::from_str(&run_to_string(seeded()).expect("first plan")).expect("json");
    let second: Itinerary =
        serde_json::from_str(&run_to_string(seeded()).expect("second plan")).expect("json");
    assert_eq!(first.days, second.days);
}

#[rstest]
fn run_plan_renders_markdown() {
    let workspace = Workspace::with_sample_inputs();
    let args = PlanArgs {
        format: Some(OutputFormat::Markdown),
        ..args_for(&workspace)
    };

    let stdout = run_to_string(args).expect("plan should succeed");
    assert!(stdout.starts_with("# Lisbon\n"));
    assert!(stdout.contains("## Day 1: Arrival and First Impressions (Lisbon)"));
    assert!(stdout.contains("### Morning (09:00-12:00)"));
}

#[rstest]
fn run_plan_writes_output_file() {
    let workspace = Workspace::with_sample_inputs();
    let output = workspace.root.join("out").join("trip.json");
    let args = PlanArgs {
        output: Some(output.clone()),
        ..args_for(&workspace)
    };

    let stdout = run_to_string(args).expect("plan should succeed");
    assert!(stdout.is_empty());
    let written = std::fs::read_to_string(output.as_std_path()).expect("output written");
    let itinerary: Itinerary = serde_json::from_str(&written).expect("file should be JSON");
    assert_eq!(itinerary.days.len(), 2);
}

#[rstest]
fn run_plan_rejects_invalid_requests() {
    let workspace = Workspace::with_sample_inputs();
    workspace.write_request(&lisbon_request().with_party_size(0));

    let err = run_to_string(args_for(&workspace)).expect_err("empty party should fail");
    match err {
        CliError::InvalidTripRequest { source, .. } => {
            assert_eq!(source, TripRequestError::ZeroPartySize);
        }
        other => panic!("expected InvalidTripRequest, found {other:?}"),
    }
}

#[rstest]
fn cli_parses_plan_flags() {
    let cli = Cli::try_parse_from([
        "itinerant",
        "plan",
        "trip.json",
        "--catalog",
        "catalog.json",
        "--format",
        "markdown",
        "--seed",
        "9",
    ])
    .expect("arguments should parse");
    match cli.command {
        Command::Plan(args) => {
            assert_eq!(args.request_path, Some(Utf8PathBuf::from("trip.json")));
            assert_eq!(args.catalog, Some(Utf8PathBuf::from("catalog.json")));
            assert_eq!(args.format, Some(OutputFormat::Markdown));
            assert_eq!(args.seed, Some(9));
        }
    }
}
