use std::fs;
use std::path::PathBuf;
use std::process::{Command, Output};

fn fixture() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("../swag-core/tests/fixtures/game-api.swagger.json")
}

/// Run the binary inside `dir` so no stray `.swag-gen.yaml` is picked up.
fn run(dir: &tempfile::TempDir, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_swag-gen"))
        .args(args)
        .current_dir(dir.path())
        .output()
        .expect("failed to run swag-gen")
}

#[test]
fn no_input_prints_usage() {
    let dir = tempfile::tempdir().unwrap();
    let out = run(&dir, &[]);

    assert!(out.status.success());
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("No input file found."));
    assert!(stdout.contains("--output"));
}

#[test]
fn generates_to_stdout() {
    let dir = tempfile::tempdir().unwrap();
    let input = fixture();
    let out = run(&dir, &[input.to_str().unwrap()]);

    assert!(out.status.success());
    let stdout = String::from_utf8(out.stdout).unwrap();
    assert!(stdout.starts_with("/* Code generated by swag-gen. DO NOT EDIT. */"));
    assert!(stdout.contains("internal class ApiSession : IApiSession"));
}

#[test]
fn output_file_is_byte_identical_across_runs() {
    let dir = tempfile::tempdir().unwrap();
    let input = fixture();
    let target = dir.path().join("Models.cs");
    let args = [
        input.to_str().unwrap(),
        "--output",
        target.to_str().unwrap(),
    ];

    assert!(run(&dir, &args).status.success());
    let first = fs::read(&target).unwrap();
    assert!(run(&dir, &args).status.success());
    let second = fs::read(&target).unwrap();

    assert!(!first.is_empty());
    assert_eq!(first, second);
}

#[test]
fn extra_inputs_are_ignored() {
    let dir = tempfile::tempdir().unwrap();
    let input = fixture();
    let out = run(&dir, &[input.to_str().unwrap(), "does-not-exist.json"]);

    assert!(out.status.success());
    assert!(String::from_utf8_lossy(&out.stdout).contains("IApiAccount"));
}

#[test]
fn invalid_json_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("broken.json");
    fs::write(&input, "{ \"definitions\": ").unwrap();
    let target = dir.path().join("Models.cs");

    let out = run(
        &dir,
        &[
            input.to_str().unwrap(),
            "--output",
            target.to_str().unwrap(),
        ],
    );

    assert!(!out.status.success());
    assert!(!target.exists());
    assert!(!out.stderr.is_empty());
    assert!(String::from_utf8_lossy(&out.stderr).contains("unable to decode input"));
}

#[test]
fn missing_input_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    let out = run(&dir, &["missing.json"]);

    assert!(!out.status.success());
    assert!(String::from_utf8_lossy(&out.stderr).contains("missing.json"));
}

#[test]
fn config_file_and_namespace_flag() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join(".swag-gen.yaml"),
        "namespace: nakama\nordering: alphabetical\n",
    )
    .unwrap();
    let input = fixture();

    let out = run(&dir, &[input.to_str().unwrap()]);
    assert!(out.status.success());
    let stdout = String::from_utf8(out.stdout).unwrap();
    assert!(stdout.contains("namespace Nakama\n"));
    let account = stdout.find("interface IApiAccount\n").unwrap();
    let user = stdout.find("interface IApiUser\n").unwrap();
    assert!(account < user, "alphabetical ordering should apply");

    let out = run(&dir, &[input.to_str().unwrap(), "--namespace", "Game.Api"]);
    assert!(String::from_utf8(out.stdout).unwrap().contains("namespace Game.Api\n"));
}

#[test]
fn missing_explicit_config_fails() {
    let dir = tempfile::tempdir().unwrap();
    let input = fixture();
    let out = run(&dir, &[input.to_str().unwrap(), "--config", "nope.yaml"]);

    assert!(!out.status.success());
    assert!(String::from_utf8_lossy(&out.stderr).contains("nope.yaml"));
}

#[test]
fn inspect_json() {
    let dir = tempfile::tempdir().unwrap();
    let input = fixture();
    let out = run(&dir, &[input.to_str().unwrap(), "--inspect", "json"]);

    assert!(out.status.success());
    let value: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(value["models"][0]["class_name"], "ApiUser");
    assert_eq!(value["models"][0]["fields"][2]["field_name"], "EdgeCount");
    assert_eq!(value["models"][0]["fields"][2]["kind"]["kind"], "integer");
    assert_eq!(value["operations"][2]["method_name"], "AuthenticateDevice");
}

#[test]
fn unwritable_output_fails() {
    let dir = tempfile::tempdir().unwrap();
    let input = fixture();
    let target = dir.path().join("no/such/dir/Models.cs");

    let out = run(
        &dir,
        &[
            input.to_str().unwrap(),
            "--output",
            target.to_str().unwrap(),
        ],
    );

    assert!(!out.status.success());
    assert!(out.stdout.is_empty());
    assert!(String::from_utf8_lossy(&out.stderr).contains("unable to create file"));
    assert!(!target.exists());
}

#[test]
fn empty_namespace_uses_default() {
    let dir = tempfile::tempdir().unwrap();
    let input = fixture();
    let out = run(&dir, &[input.to_str().unwrap(), "--namespace", ""]);

    assert!(out.status.success());
    assert!(String::from_utf8(out.stdout).unwrap().contains("namespace Api\n{\n"));
}
