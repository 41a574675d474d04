//! Integration tests for the `check` command.

mod common;

use common::TestEnv;
use predicates::prelude::*;

const RULES: &str = "# home\n+ C:\\Users\\me\\\n- C:\\Users\\me\\AppData\\\n* cache\n/legacy/line\n";

#[test]
fn test_check_text_report() {
    let env = TestEnv::new();
    env.write("input_rules.rsync", RULES);

    env.command()
        .args(["--quiet", "check"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "input_rules.rsync: 1 include, 1 exclude, 1 partial exclude",
        ))
        .stdout(predicate::str::contains(
            "line 5: unrecognized rule '/legacy/line'",
        ));
}

#[test]
fn test_check_json_report() {
    let env = TestEnv::new();
    env.write("rules.rsync", RULES);

    let output = env
        .command()
        .args(["--quiet", "check", "-i", "rules.rsync", "--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["input"], "rules.rsync");
    assert_eq!(report["rules"]["include"], 1);
    assert_eq!(report["rules"]["partial_exclude"], 1);
    assert_eq!(report["unrecognized"][0]["line_number"], 5);
    assert_eq!(report["unrecognized"][0]["content"], "/legacy/line");
}

#[test]
fn test_check_strict_fails_on_unrecognized() {
    let env = TestEnv::new();
    env.write("input_rules.rsync", RULES);

    env.command()
        .args(["check", "--strict"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("line 5"))
        .stderr(predicate::str::contains("1 unrecognized rule line(s)"));
}

#[test]
fn test_check_strict_passes_clean_file() {
    let env = TestEnv::new();
    env.write("input_rules.rsync", "+ /srv/www/\n* .git\n");

    env.command().args(["check", "--strict"]).assert().success();
}

#[test]
fn test_check_missing_file() {
    let env = TestEnv::new();

    env.command()
        .args(["check", "-i", "nope.rsync"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("nope.rsync"));
}

#[test]
fn test_check_does_not_write_output() {
    let env = TestEnv::new();
    env.write("input_rules.rsync", "+ /srv/www/\n");

    env.command().arg("check").assert().success();
    assert!(!env.path("pattern_rules.rsync").exists());
}
