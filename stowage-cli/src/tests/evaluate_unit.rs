//! Focused unit tests covering evaluate configuration and input loading.

use super::helpers::{Inputs, MANIFEST_JSON, write_utf8};
use super::*;
use rstest::rstest;
use stowage_fitness::{ScoreWeights, ScoreWeightsError};

fn args_for(inputs: &Inputs) -> EvaluateArgs {
    EvaluateArgs {
        manifest: Some(inputs.manifest().to_path_buf()),
        decision: Some(inputs.decision().to_path_buf()),
        ..EvaluateArgs::default()
    }
}

#[rstest]
#[case::manifest(ARG_MANIFEST, ENV_MANIFEST)]
#[case::decision(ARG_DECISION, ENV_DECISION)]
fn converting_without_required_path_errors(
    #[case] expected_field: &'static str,
    #[case] expected_env: &'static str,
) {
    let inputs = Inputs::new();
    let mut args = args_for(&inputs);
    if expected_field == ARG_MANIFEST {
        args.manifest = None;
    } else {
        args.decision = None;
    }

    let err = EvaluateConfig::try_from(args).expect_err("missing path should error");
    match err {
        CliError::MissingArgument { field, env, .. } => {
            assert_eq!(field, expected_field);
            assert_eq!(env, expected_env);
        }
        other => panic!("expected MissingArgument, found {other:?}"),
    }
}

#[rstest]
#[case::manifest(ARG_MANIFEST, "a manifest path as the first argument")]
#[case::decision(ARG_DECISION, "--decision <path>")]
fn missing_path_message_names_a_real_option(
    #[case] missing_field: &'static str,
    #[case] expected_usage: &str,
) {
    let inputs = Inputs::new();
    let mut args = args_for(&inputs);
    if missing_field == ARG_MANIFEST {
        args.manifest = None;
    } else {
        args.decision = None;
    }

    let message = EvaluateConfig::try_from(args)
        .expect_err("missing path should error")
        .to_string();
    assert!(message.contains(expected_usage), "message: {message}");
    assert!(!message.contains("--manifest"), "message: {message}");
}

#[rstest]
fn manifest_has_no_long_flag() {
    let parsed = Cli::try_parse_from(["stowage", "evaluate", "--manifest", "m.json"]);
    assert!(parsed.is_err());
}

#[rstest]
fn conversion_fills_default_weights() {
    let inputs = Inputs::new();
    let config = EvaluateConfig::try_from(args_for(&inputs)).expect("config should build");
    assert_eq!(config.weights, ScoreWeights::default());
    assert!(!config.trace);
}

#[rstest]
fn conversion_rejects_non_positive_weights() {
    let inputs = Inputs::new();
    let args = EvaluateArgs {
        layout_weight: Some(0.0),
        ..args_for(&inputs)
    };

    let err = EvaluateConfig::try_from(args).expect_err("zero weight should error");
    match err {
        CliError::InvalidWeights(ScoreWeightsError::NonPositive { term, .. }) => {
            assert_eq!(term, "layout");
        }
        other => panic!("expected InvalidWeights, found {other:?}"),
    }
}

#[rstest]
fn validate_sources_reports_missing_decision() {
    let inputs = Inputs::new();
    write_utf8(inputs.manifest(), b"{}");

    let config = EvaluateConfig::try_from(args_for(&inputs)).expect("config should build");
    let err = config.validate_sources().expect_err("decision is missing");
    match err {
        CliError::MissingSourceFile { field, path } => {
            assert_eq!(field, ARG_DECISION);
            assert_eq!(path.as_path(), inputs.decision());
        }
        other => panic!("expected MissingSourceFile, found {other:?}"),
    }
}

#[rstest]
fn validate_sources_reports_not_file() {
    let inputs = Inputs::new();
    std::fs::create_dir(inputs.manifest().as_std_path()).expect("manifest directory");

    let config = EvaluateConfig::try_from(args_for(&inputs)).expect("config should build");
    let err = config
        .validate_sources()
        .expect_err("expected directory path to fail validation");
    match err {
        CliError::SourcePathNotFile { field, .. } => assert_eq!(field, ARG_MANIFEST),
        other => panic!("expected SourcePathNotFile, found {other:?}"),
    }
}

#[rstest]
fn load_manifest_decodes_json() {
    let inputs = Inputs::with_decision("[0.1, 0.9]");
    let manifest = load_manifest(inputs.manifest()).expect("manifest should decode");
    assert_eq!(manifest.title(), Some("two items"));
    assert_eq!(manifest.total_items(), 2);
}

#[rstest]
fn load_manifest_rejects_invalid_items() {
    let inputs = Inputs::new();
    let payload = MANIFEST_JSON.replace(r#""drop_off_stop": 2"#, r#""drop_off_stop": 1"#);
    write_utf8(inputs.manifest(), payload.as_bytes());

    let err = load_manifest(inputs.manifest()).expect_err("reversed stops should error");
    match err {
        CliError::ParseManifest { path, .. } => assert_eq!(path.as_path(), inputs.manifest()),
        other => panic!("expected ParseManifest, found {other:?}"),
    }
}

#[rstest]
fn load_decision_io_error_returns_open_error() {
    let inputs = Inputs::new();
    let err = load_decision(inputs.decision()).expect_err("missing decision should error");
    match err {
        CliError::OpenInput { field, .. } => assert_eq!(field, ARG_DECISION),
        other => panic!("expected OpenInput, found {other:?}"),
    }
}

#[rstest]
fn load_decision_rejects_non_numeric_json() {
    let inputs = Inputs::with_decision(r#"["left", "right"]"#);
    let err = load_decision(inputs.decision()).expect_err("strings are not decisions");
    assert!(matches!(err, CliError::ParseDecision { .. }));
}

#[rstest]
#[case(false, 0)]
#[case(true, 3)]
fn run_writes_the_evaluation_as_json(#[case] trace: bool, #[case] expected_stops: usize) {
    let inputs = Inputs::with_decision("[0.1, 0.9]");
    let args = EvaluateArgs {
        trace,
        ..args_for(&inputs)
    };
    let mut buffer = Vec::new();

    run_evaluate_with(args, &mut buffer).expect("evaluation succeeds");

    let output: serde_json::Value = serde_json::from_slice(&buffer).expect("output is JSON");
    assert_eq!(output["score"], 39);
    assert_eq!(output["movements"], 4);
    let stops = output
        .get("stops")
        .and_then(serde_json::Value::as_array)
        .map_or(0, Vec::len);
    assert_eq!(stops, expected_stops);
}

#[rstest]
fn run_surfaces_evaluation_errors() {
    let inputs = Inputs::with_decision("[0.1]");
    let mut buffer = Vec::new();

    let err = run_evaluate_with(args_for(&inputs), &mut buffer).expect_err("short vector");
    assert!(matches!(err, CliError::Evaluate(_)));
    assert!(buffer.is_empty());
}

#[rstest]
fn merge_layers_maps_configuration_errors() {
    use ortho_config::MergeComposer;
    use serde_json::json;

    let mut composer = MergeComposer::new();
    composer.push_cli(json!({ "manifest": 42 }));

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

    let inputs = Inputs::new();
    let env_manifest = inputs.root().join("from-env.json");
    let cli_decision = inputs.root().join("from-cli.json");
    let mut composer = MergeComposer::new();
    composer.push_file(
        json!({
            "decision": inputs.root().join("from-file.json").as_str(),
            "movement_weight": 2.0,
            "layout_weight": 4.0,
            "trace": true,
        }),
        None,
    );
    composer.push_environment(json!({
        "manifest": env_manifest.as_str(),
        "layout_weight": 6.0,
    }));
    composer.push_cli(json!({
        "decision": cli_decision.as_str(),
    }));

    let config =
        config_from_layers_for_test(composer.layers()).expect("merged config should build");
    assert_eq!(config.manifest, env_manifest);
    assert_eq!(config.decision, cli_decision);
    assert_eq!(
        config.weights,
        ScoreWeights {
            movements: 2.0,
            layout: 6.0,
            weight: 3.0,
        }
    );
    assert!(config.trace);
}

#[rstest]
fn stacked_decision_reports_extra_movements() {
    let inputs = Inputs::with_decision("[0.1, 0.2]");
    let mut buffer = Vec::new();
    run_evaluate_with(args_for(&inputs), &mut buffer).expect("evaluation succeeds");

    let output: serde_json::Value = serde_json::from_slice(&buffer).expect("output is JSON");
    assert_eq!(output["movements"], 6);
    assert_eq!(output["layout_imbalance"], 3.0);
    assert_eq!(output["score"], 60);
}
