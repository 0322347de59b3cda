use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;
use tempfile::NamedTempFile;

fn boolsynth_cmd() -> Command {
    Command::cargo_bin("boolsynth").unwrap()
}

fn csv_file(lines: &[&str]) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "input,output,dont_care").unwrap();
    for line in lines {
        writeln!(file, "{line}").unwrap();
    }
    file.flush().unwrap();
    file
}

#[test]
fn help_command_succeeds() {
    boolsynth_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Synthesize a layered Boolean circuit"));
}

#[test]
fn version_command_succeeds() {
    boolsynth_cmd().arg("--version").assert().success();
}

#[test]
fn finds_identity_circuit() {
    let file = csv_file(&["0,0,0", "1,1,0"]);
    boolsynth_cmd()
        .arg(file.path())
        .args(["--layers", "1,1"])
        .args(["--modes", "AND"])
        .assert()
        .success()
        .stdout(predicate::str::contains("layer 0:"))
        .stdout(predicate::str::contains("layer 1:"));
}

#[test]
fn reports_failure_with_nonzero_exit_when_unsatisfiable() {
    let file = csv_file(&["0,1,0", "1,1,0"]);
    boolsynth_cmd()
        .arg(file.path())
        .args(["--layers", "1,1"])
        .args(["--modes", "AND"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("no circuit solution found"));
}

#[test]
fn rejects_unknown_mode_name() {
    let file = csv_file(&["0,0,0"]);
    boolsynth_cmd()
        .arg(file.path())
        .args(["--layers", "1,1"])
        .args(["--modes", "BOGUS"])
        .assert()
        .code(2);
}
