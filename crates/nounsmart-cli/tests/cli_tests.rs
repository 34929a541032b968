//! CLI integration tests using assert_cmd.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Run in an empty directory with an empty HOME so no stray config is read.
fn nounsmart(dir: &TempDir) -> Command {
    #[allow(deprecated)]
    let mut cmd = Command::cargo_bin("nounsmart").unwrap();
    cmd.current_dir(dir.path())
        .env("HOME", dir.path())
        .env_remove("NOUNSMART_CSV_URL")
        .env_remove("RUST_LOG");
    cmd
}

fn write_csv(dir: &TempDir, content: &str) -> std::path::PathBuf {
    let path = dir.path().join("nouns.csv");
    std::fs::write(&path, content).unwrap();
    path
}

#[test]
fn play_scripted_session() {
    let dir = TempDir::new().unwrap();
    let csv = write_csv(&dir, "singular,level\nbus,es\ncat,s\n");

    nounsmart(&dir)
        .arg("play")
        .arg("--level")
        .arg("es")
        .arg("--source")
        .arg(&csv)
        .write_stdin("buss\nbuses\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("What's the plural form of 'bus'?"))
        .stdout(predicate::str::contains(
            "Incorrect. The correct plural form is 'buses' for 'bus'. (Score: 0/1)",
        ))
        .stdout(predicate::str::contains(
            "Correct! 'buses' is the plural form of 'bus'. (Score: 1/2)",
        ))
        .stdout(predicate::str::contains(
            "All nouns have been answered correctly. Great job!",
        ))
        .stdout(predicate::str::contains(
            "Overall Score: s(0/0), es(1/2), ies(0/0)",
        ));
}

#[test]
fn play_level_switch_to_empty_level() {
    let dir = TempDir::new().unwrap();
    let csv = write_csv(&dir, "singular,level\nbus,es\n");

    nounsmart(&dir)
        .arg("play")
        .arg("--source")
        .arg(&csv)
        .write_stdin(":level ies\n:level es\nbuses\n:quit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "No nouns available for the Level: ies.",
        ))
        .stdout(predicate::str::contains("es(1/1)"));
}

#[test]
fn play_uses_config_defaults() {
    let dir = TempDir::new().unwrap();
    write_csv(&dir, "singular,level\ncity,ies\n");
    std::fs::write(
        dir.path().join("nounsmart.toml"),
        "default_level = \"ies\"\nseed = 3\n[source]\ntype = \"file\"\npath = \"nouns.csv\"\n",
    )
    .unwrap();

    nounsmart(&dir)
        .arg("play")
        .write_stdin("cities\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Level ies selected (1 items)"))
        .stdout(predicate::str::contains("ies(1/1)"));
}

#[test]
fn play_with_missing_source_fails() {
    let dir = TempDir::new().unwrap();

    nounsmart(&dir)
        .arg("play")
        .arg("--source")
        .arg("no_such_file.csv")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error"))
        .stderr(predicate::str::contains("failed to load the CSV file"));
}

#[test]
fn play_rejects_bad_level() {
    let dir = TempDir::new().unwrap();

    nounsmart(&dir)
        .arg("play")
        .arg("--level")
        .arg("ves")
        .arg("--source")
        .arg("builtin")
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown level"));
}

#[test]
fn levels_builtin() {
    let dir = TempDir::new().unwrap();

    nounsmart(&dir)
        .arg("levels")
        .arg("--source")
        .arg("builtin")
        .assert()
        .success()
        .stdout(predicate::str::contains("builtin sample"))
        .stdout(predicate::str::contains("ies"))
        .stdout(predicate::str::contains("20"));
}

#[test]
fn levels_json() {
    let dir = TempDir::new().unwrap();
    let csv = write_csv(&dir, "Singular,Level\nbox,es\nfox,es\ncat,s\n");

    let output = nounsmart(&dir)
        .arg("levels")
        .arg("--source")
        .arg(&csv)
        .arg("--format")
        .arg("json")
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["total"], 3);
    assert_eq!(json["levels"][1]["level"], "es");
    assert_eq!(json["levels"][1]["count"], 2);
    assert_eq!(json["levels"][2]["count"], 0);
}

#[test]
fn plural_words() {
    let dir = TempDir::new().unwrap();

    nounsmart(&dir)
        .arg("plural")
        .arg("church")
        .arg("city")
        .arg("boy")
        .assert()
        .success()
        .stdout(predicate::str::contains("church -> churches (es)"))
        .stdout(predicate::str::contains("city -> cities (ies)"))
        .stdout(predicate::str::contains("boy -> boys (s)"));
}

#[test]
fn plural_requires_a_word() {
    let dir = TempDir::new().unwrap();

    nounsmart(&dir).arg("plural").assert().failure();
}

#[test]
fn validate_reports_misfiled_nouns() {
    let dir = TempDir::new().unwrap();
    let csv = write_csv(&dir, "singular,level\nboy,ies\ncat,s\ncat,s\n");

    nounsmart(&dir)
        .arg("validate")
        .arg("--source")
        .arg(&csv)
        .assert()
        .success()
        .stdout(predicate::str::contains("(3 nouns)"))
        .stdout(predicate::str::contains("[row 1: boy] WARNING"))
        .stdout(predicate::str::contains("duplicate noun"))
        .stdout(predicate::str::contains("2 warning(s) found."));
}

#[test]
fn validate_builtin_is_clean() {
    let dir = TempDir::new().unwrap();

    nounsmart(&dir)
        .arg("validate")
        .arg("--source")
        .arg("builtin")
        .assert()
        .success()
        .stdout(predicate::str::contains("All nouns valid."));
}

#[test]
fn init_creates_config() {
    let dir = TempDir::new().unwrap();

    nounsmart(&dir)
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Created nounsmart.toml"));
    assert!(dir.path().join("nounsmart.toml").exists());

    nounsmart(&dir)
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("already exists"));
}

#[test]
fn help_output() {
    let dir = TempDir::new().unwrap();

    nounsmart(&dir)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Practice regular plural nouns"));
}

#[test]
fn version_output() {
    let dir = TempDir::new().unwrap();

    nounsmart(&dir)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("nounsmart"));
}
