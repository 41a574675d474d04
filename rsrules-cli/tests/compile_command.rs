//! Integration tests for the `compile` command.

mod common;

use common::TestEnv;
use predicates::prelude::*;

/// A small tree under `data/` with scratch space and a cache to drop.
fn backup_env() -> TestEnv {
    let env = TestEnv::new();
    env.create_file("data/notes.txt");
    env.create_file("data/docs/report.pdf");
    env.create_file("data/tmp/scratch.bin");
    env.create_file("data/photos/cache/thumb.jpg");
    env.create_file("data/photos/2024/beach.jpg");
    env
}

fn backup_rules(env: &TestEnv) -> String {
    format!(
        "# nightly\n+ {}\n- {}\n* cache\n",
        env.dir_token("data"),
        env.dir_token("data/tmp")
    )
}

#[test]
fn test_compile_with_default_paths() {
    let env = backup_env();
    env.write("input_rules.rsync", &backup_rules(&env));

    env.command().arg("compile").assert().success();

    let lines = env.read_lines("pattern_rules.rsync");
    let data = env.dir_token("data");
    assert_eq!(lines.last().map(String::as_str), Some("- *"));
    assert!(lines.contains(&format!("+ {data}")));
    assert!(lines.contains(&format!("+ {data}*")));
    assert!(lines.contains(&format!("+ {data}photos/2024/*")));
    assert!(!lines.iter().any(|l| l.starts_with(&format!("+ {data}tmp/"))));
    assert!(!lines.iter().any(|l| l.contains("/cache/")));
}

#[test]
fn test_compile_progress_messages_are_timestamped() {
    let env = backup_env();
    env.write("input_rules.rsync", &backup_rules(&env));

    env.command()
        .arg("compile")
        .assert()
        .success()
        .stderr(predicate::str::is_match(r"\[\d{2}\.\d{2}\.\d{2}\]: Processing rules file\.\.\.").unwrap())
        .stderr(predicate::str::contains("Finding all paths to include..."))
        .stderr(predicate::str::contains("Finding all paths to exclude..."))
        .stderr(predicate::str::contains("Generating pattern rules..."))
        .stderr(predicate::str::contains("Writing pattern rules to pattern_rules.rsync..."));
}

#[test]
fn test_compile_quiet_prints_nothing() {
    let env = backup_env();
    env.write("input_rules.rsync", &backup_rules(&env));

    env.command()
        .args(["--quiet", "compile"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::is_empty());
}

#[test]
fn test_compile_echo_matches_file() {
    let env = backup_env();
    env.write("rules.rsync", &backup_rules(&env));

    let output = env
        .command()
        .args(["--quiet", "compile", "-i", "rules.rsync", "-o", "filter.rsync", "--echo"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let echoed: Vec<String> = String::from_utf8(output.stdout)
        .unwrap()
        .lines()
        .map(str::to_string)
        .collect();
    assert_eq!(echoed, env.read_lines("filter.rsync"));
}

#[test]
fn test_compile_empty_rules_writes_catch_all_only() {
    let env = TestEnv::new();
    env.write("input_rules.rsync", "# nothing yet\n\n");

    env.command().arg("compile").assert().success();

    assert_eq!(env.read_lines("pattern_rules.rsync"), vec!["- *"]);
}

#[test]
fn test_compile_missing_input_exit_code() {
    let env = TestEnv::new();

    env.command()
        .arg("compile")
        .assert()
        .code(3)
        .stderr(predicate::str::contains("rule file not found"));
    assert!(!env.path("pattern_rules.rsync").exists());
}

#[test]
fn test_compile_lenient_skips_unrecognized_lines() {
    let env = backup_env();
    env.write(
        "input_rules.rsync",
        &format!("{}/old/style/line\n", backup_rules(&env)),
    );

    env.command()
        .arg("compile")
        .assert()
        .success()
        .stderr(predicate::str::contains("Ignoring unrecognized rule on line 5"));
    assert!(env.path("pattern_rules.rsync").exists());
}

#[test]
fn test_compile_strict_rejects_unrecognized_lines() {
    let env = backup_env();
    env.write(
        "input_rules.rsync",
        &format!("{}/old/style/line\n", backup_rules(&env)),
    );

    env.command()
        .args(["compile", "--strict"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("unrecognized rule on line 5"));
    assert!(!env.path("pattern_rules.rsync").exists());
}

#[test]
fn test_compile_bare_marker_is_invalid_path() {
    let env = TestEnv::new();
    env.write("input_rules.rsync", "+\n");

    env.command()
        .arg("compile")
        .assert()
        .code(6)
        .stderr(predicate::str::contains("invalid path"));
}

#[test]
fn test_compile_unwritable_output_exit_code() {
    let env = backup_env();
    env.write("input_rules.rsync", &backup_rules(&env));

    env.command()
        .args(["compile", "-o", "no-such-dir/filter.rsync"])
        .assert()
        .code(5)
        .stderr(predicate::str::contains("cannot write filter file"));
}

#[test]
fn test_compile_output_same_as_input_is_config_error() {
    let env = TestEnv::new();
    env.write("rules.rsync", "+ /srv/\n");

    env.command()
        .args(["compile", "-i", "rules.rsync", "-o", "rules.rsync"])
        .assert()
        .code(7)
        .stderr(predicate::str::contains("Configuration error"));
    assert_eq!(env.read_lines("rules.rsync"), vec!["+ /srv/"]);
}

#[test]
fn test_compile_reads_project_config() {
    let env = backup_env();
    env.create_dir("rules");
    env.write("rules/home.rsync", &backup_rules(&env));
    env.write("rsrules.yaml", "input: rules/home.rsync\noutput: out/filter.rsync\n");
    env.create_dir("out");

    env.command().arg("compile").assert().success();

    assert!(env.path("out/filter.rsync").exists());
    assert!(!env.path("pattern_rules.rsync").exists());
}

#[test]
fn test_compile_flags_override_config_and_env() {
    let env = backup_env();
    env.write("input_rules.rsync", &backup_rules(&env));
    env.write("rsrules.yaml", "output: from-config.rsync\n");

    env.command()
        .env("RSRULES_OUTPUT", "from-env.rsync")
        .args(["compile", "-o", "from-flag.rsync"])
        .assert()
        .success();

    assert!(env.path("from-flag.rsync").exists());
    assert!(!env.path("from-env.rsync").exists());
    assert!(!env.path("from-config.rsync").exists());
}

#[test]
fn test_compile_env_overrides_config() {
    let env = backup_env();
    env.write("input_rules.rsync", &backup_rules(&env));
    env.write("rsrules.yaml", "output: from-config.rsync\n");

    env.command()
        .env("RSRULES_OUTPUT", "from-env.rsync")
        .arg("compile")
        .assert()
        .success();

    assert!(env.path("from-env.rsync").exists());
    assert!(!env.path("from-config.rsync").exists());
}

#[test]
fn test_compile_user_config_strict() {
    let env = backup_env();
    env.write("input_rules.rsync", "+ /srv/\nlegacy line\n");
    std::fs::create_dir_all(env.home_dir.join(".rsrules")).unwrap();
    std::fs::write(env.home_dir.join(".rsrules/config.yaml"), "strict: true\n").unwrap();

    env.command().arg("compile").assert().code(1);
}

#[test]
fn test_compile_invalid_config_exit_code() {
    let env = TestEnv::new();
    env.write("input_rules.rsync", "+ /srv/\n");
    env.write("rsrules.yaml", "outputs: typo.rsync\n");

    env.command()
        .arg("compile")
        .assert()
        .code(7)
        .stderr(predicate::str::contains("Configuration error"));
}

#[test]
fn test_compile_no_atomic_overwrites_in_place() {
    let env = backup_env();
    env.write("input_rules.rsync", &backup_rules(&env));
    env.write("pattern_rules.rsync", "stale\n");

    env.command()
        .args(["compile", "--no-atomic"])
        .assert()
        .success();

    let lines = env.read_lines("pattern_rules.rsync");
    assert!(!lines.contains(&"stale".to_string()));
    assert_eq!(lines.last().map(String::as_str), Some("- *"));
}

#[test]
fn test_compile_verbose_reports_counts() {
    let env = backup_env();
    env.write("input_rules.rsync", &backup_rules(&env));

    env.command()
        .args(["--verbose", "compile"])
        .assert()
        .success()
        .stderr(predicate::str::contains("removed by partial exclude"))
        .stderr(predicate::str::contains("filter lines to pattern_rules.rsync"));
}
