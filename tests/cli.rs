use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::io::Write;

#[test]
fn demo_prints_default_inputs() {
    let mut cmd = cargo_bin_cmd!("intbox");
    cmd.arg("demo");

    let output_pred = predicate::str::contains("try_parse(\"2147483647\") = true; box = 2147483647")
        .and(predicate::str::contains(
            "try_parse(\"2147483648\") = false; box = 2147483647  (number out of range)",
        ))
        .and(predicate::str::contains("try_parse(\"-007\") = true; box = -7"));

    cmd.assert().success().stdout(output_pred);
}

#[test]
fn demo_table_strategy_matches_direct() {
    let direct = cargo_bin_cmd!("intbox")
        .args(["demo", "--strategy", "direct"])
        .output()
        .expect("run demo");
    let table = cargo_bin_cmd!("intbox")
        .args(["demo", "--strategy", "table"])
        .output()
        .expect("run demo");
    assert!(direct.status.success());
    assert_eq!(direct.stdout, table.stdout);
}

#[test]
fn demo_json_output_parses() {
    let output = cargo_bin_cmd!("intbox")
        .args(["demo", "--format", "json"])
        .output()
        .expect("run demo");
    assert!(output.status.success());

    let reports: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("stdout to be JSON");
    let reports = reports.as_array().expect("an array of reports");
    assert_eq!(reports.len(), 12);
    assert_eq!(reports[4]["input"], "-2147483648");
    assert_eq!(reports[4]["value"], -2147483648i64);
    assert_eq!(reports[7]["accepted"], false);
}

#[test]
fn demo_reads_config_file() {
    let mut file = tempfile::Builder::new()
        .suffix(".toml")
        .tempfile()
        .expect("temp file");
    writeln!(file, "[demo]\nwidth = \"i8\"\ninputs = [\"5\"]").expect("write config");

    let mut cmd = cargo_bin_cmd!("intbox");
    cmd.arg("demo").arg("--config").arg(file.path());

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("try_parse(\"5\") = true; box = 5"));
}

#[test]
fn demo_missing_config_file_fails() {
    let mut cmd = cargo_bin_cmd!("intbox");
    cmd.args(["demo", "--config", "/nonexistent/intbox.toml"]);

    cmd.assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("invalid configuration"));
}

#[test]
fn parse_accepts_all_inputs() {
    let mut cmd = cargo_bin_cmd!("intbox");
    cmd.args(["parse", "--width", "i8", "--", "127", "-128", " 007 "]);

    cmd.assert().success().stdout(
        predicate::str::contains("try_parse(\"-128\") = true; box = -128")
            .and(predicate::str::contains("try_parse(\" 007 \") = true; box = 7")),
    );
}

#[test]
fn parse_reports_rejection_with_exit_code() {
    let mut cmd = cargo_bin_cmd!("intbox");
    cmd.args(["parse", "42", "2a"]);

    cmd.assert().code(2).stdout(predicate::str::contains(
        "try_parse(\"2a\") = false; box = 42  (invalid digit at byte 1)",
    ));
}

#[test]
fn constants_for_i16() {
    let mut cmd = cargo_bin_cmd!("intbox");
    cmd.args(["constants", "--width", "i16"]);

    cmd.assert().success().stdout(
        predicate::str::contains("max              32767")
            .and(predicate::str::contains("min last dec     -2768")),
    );
}

#[test]
fn rejects_unknown_strategy() {
    let mut cmd = cargo_bin_cmd!("intbox");
    cmd.args(["demo", "--strategy", "forward"]);

    cmd.assert().failure();
}
