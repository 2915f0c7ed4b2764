use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn default_run_prints_one_line_per_engine_in_registry_order() {
    let assert = Command::cargo_bin("rxbench")
        .expect("rxbench binary")
        .assert()
        .success()
        .stdout(predicate::str::contains(" took: "));

    let stdout = String::from_utf8(assert.get_output().stdout.clone()).expect("utf-8 stdout");
    let lines: Vec<&str> = stdout.lines().collect();
    let expected = ["Rust Regex", "Regex Lite", "Fancy Regex"];
    assert_eq!(lines.len(), expected.len(), "stdout was: {stdout}");

    for (line, label) in lines.iter().zip(expected) {
        let prefix = format!("{label} took: ");
        assert!(line.starts_with(&prefix), "unexpected line: {line}");
        assert!(line.ends_with("ms"), "unexpected line: {line}");

        let value = &line[prefix.len()..line.len() - 2];
        let (whole, frac) = value.split_once('.').expect("decimal point in latency");
        assert!(whole.chars().all(|c| c.is_ascii_digit()), "line: {line}");
        assert_eq!(frac.len(), 4, "four decimal places in: {line}");
        assert!(frac.chars().all(|c| c.is_ascii_digit()), "line: {line}");
    }
}
