//! CLI tests for the `closure-playground` binary.
//!
//! Spawns the binary in a temporary directory and verifies stdout and exit
//! codes for evaluation, checks, and the ad-hoc commands.

use std::process::{Command, Output};

use playground::exit_codes;
use playground::io::config::load_config;
use playground::test_support::{TestDir, config_with};

fn playground(dir: &TestDir, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_closure-playground"))
        .current_dir(dir.path())
        .args(args)
        .output()
        .expect("spawn closure-playground")
}

fn stdout(output: &Output) -> String {
    String::from_utf8(output.stdout.clone()).expect("utf8 stdout")
}

#[test]
fn run_without_config_uses_tutorial_data() {
    let dir = TestDir::new().expect("dir");
    let output = playground(&dir, &["run"]);

    assert_eq!(output.status.code(), Some(exit_codes::OK));
    let text = stdout(&output);
    assert!(text.starts_with("== capturing_values: Capturing values\n"));
    assert!(text.contains("also_increment_by_10() // clone of increment_by_10 => 40\n"));
    assert!(text.contains(
        "sorted_by(names, operator_method) => [\"Ewa\", \"Daniella\", \"Chris\", \"Barry\", \"Alex\"]"
    ));
    assert!(text.contains("[\"OneSix\", \"FiveEight\", \"FiveOneZero\"]"));
}

#[test]
fn run_single_snippet_as_json() {
    let dir = TestDir::new().expect("dir");
    let output = playground(
        &dir,
        &["run", "--snippet", "closures_are_reference_types", "--format", "json"],
    );

    assert_eq!(output.status.code(), Some(exit_codes::OK));
    let json: serde_json::Value = serde_json::from_str(&stdout(&output)).expect("json");
    let outcomes = json.as_array().expect("array");
    assert_eq!(outcomes.len(), 1);
    let values: Vec<&str> = outcomes[0]["results"]
        .as_array()
        .expect("results")
        .iter()
        .map(|result| result["value"].as_str().expect("value"))
        .collect();
    assert_eq!(values, vec!["10", "20", "30", "40", "50"]);
}

#[test]
fn run_reads_config_file() {
    let dir = TestDir::new().expect("dir");
    dir.write_config(&config_with(&["b", "c", "a"], &[0, 42]))
        .expect("write config");
    let output = playground(&dir, &["run", "--snippet", "map_digit_names"]);

    assert_eq!(output.status.code(), Some(exit_codes::OK));
    assert!(stdout(&output).contains("=> [\"Zero\", \"FourTwo\"]"));
}

#[test]
fn check_passes_for_defaults() {
    let dir = TestDir::new().expect("dir");
    let output = playground(&dir, &["check"]);

    assert_eq!(output.status.code(), Some(exit_codes::OK));
    assert_eq!(stdout(&output), "check: ok\n");
}

#[test]
fn invalid_config_exits_with_invalid_code() {
    let dir = TestDir::new().expect("dir");
    dir.write_raw_config("digit_names = [\"Zero\"]\n")
        .expect("write config");
    let output = playground(&dir, &["check"]);

    assert_eq!(output.status.code(), Some(exit_codes::INVALID));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("exactly 10 entries"), "{stderr}");
}

#[test]
fn init_writes_default_config_once() {
    let dir = TestDir::new().expect("dir");
    let first = playground(&dir, &["init"]);
    assert_eq!(first.status.code(), Some(exit_codes::OK));
    let cfg = load_config(&dir.config_path()).expect("load");
    assert_eq!(cfg.numbers, vec![16, 58, 510]);

    let second = playground(&dir, &["init"]);
    assert_eq!(second.status.code(), Some(exit_codes::INVALID));

    let forced = playground(&dir, &["init", "--force"]);
    assert_eq!(forced.status.code(), Some(exit_codes::OK));
}

#[test]
fn ad_hoc_commands_print_one_value_per_line() {
    let dir = TestDir::new().expect("dir");

    let sorted = playground(&dir, &["sort", "--style", "named-function", "Alex", "Ewa", "Chris"]);
    assert_eq!(sorted.status.code(), Some(exit_codes::OK));
    assert_eq!(stdout(&sorted), "Ewa\nChris\nAlex\n");

    let digits = playground(&dir, &["digits", "16", "58", "510"]);
    assert_eq!(digits.status.code(), Some(exit_codes::OK));
    assert_eq!(stdout(&digits), "OneSix\nFiveEight\nFiveOneZero\n");

    let counted = playground(&dir, &["count", "--step", "7", "--times", "2"]);
    assert_eq!(counted.status.code(), Some(exit_codes::OK));
    assert_eq!(stdout(&counted), "7\n14\n");
}
