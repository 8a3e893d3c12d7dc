use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::tempdir;

#[test]
fn test_paths_command_prints_artifact_paths() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;

    let mut cmd = Command::cargo_bin("gantry")?;
    cmd.args(["--base-path", temp.path().to_str().unwrap(), "paths"]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("config.json"))
        .stdout(predicate::str::contains("routes.json"))
        .stdout(predicate::str::contains("compiled.json"))
        .stdout(predicate::str::contains("services.json"));

    // Printing the paths resolves the cache dir, which creates it.
    assert!(temp.path().join("bootstrap").join("cache").is_dir());

    Ok(())
}

#[test]
fn test_paths_command_json_output() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;

    let mut cmd = Command::cargo_bin("gantry")?;
    cmd.args(["--base-path", temp.path().to_str().unwrap(), "paths", "--json"]);

    let output = cmd.assert().success().get_output().stdout.clone();
    let value: serde_json::Value = serde_json::from_slice(&output)?;

    let cache_dir = temp.path().join("bootstrap").join("cache");
    assert_eq!(
        value["services"],
        serde_json::json!(cache_dir.join("services.json"))
    );
    assert_eq!(
        value["runtime_dir"],
        serde_json::json!(temp.path().join("bootstrap"))
    );

    Ok(())
}

#[test]
fn test_call_about_command() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;

    let mut cmd = Command::cargo_bin("gantry")?;
    cmd.args(["--base-path", temp.path().to_str().unwrap(), "call", "about"]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Gantry"))
        .stdout(predicate::str::contains("runtime dir"));

    Ok(())
}

#[test]
fn test_call_unknown_command_exits_nonzero() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;

    let mut cmd = Command::cargo_bin("gantry")?;
    cmd.args([
        "--base-path",
        temp.path().to_str().unwrap(),
        "call",
        "no-such-command",
    ]);

    cmd.assert().code(1);

    Ok(())
}

#[test]
fn test_default_run_reports_readiness() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;

    let mut cmd = Command::cargo_bin("gantry")?;
    cmd.args(["--base-path", temp.path().to_str().unwrap()]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Application ready"));

    Ok(())
}

#[test]
fn test_malformed_override_aborts_startup() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    let bootstrap_dir = temp.path().join("bootstrap");
    std::fs::create_dir_all(&bootstrap_dir)?;
    std::fs::write(bootstrap_dir.join("runtime_dir.toml"), "path = \"\"\n")?;

    let mut cmd = Command::cargo_bin("gantry")?;
    cmd.args(["--base-path", temp.path().to_str().unwrap(), "paths"]);

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("runtime_dir.toml"));

    Ok(())
}
