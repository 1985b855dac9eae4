//! End-to-end tests driving the compiled binary, mirroring the
//! concrete scenarios and ambient-stack properties from the design
//! notes' testable-properties section.

use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;
use tempfile::NamedTempFile;

fn lumina_file(src: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("create temp source file");
    write!(file, "{src}").expect("write temp source file");
    file
}

#[test]
fn scenario_1_variable_arithmetic() {
    let file = lumina_file("x: 10\n!PRINTLINE x * 2\n");
    Command::cargo_bin("lumina")
        .unwrap()
        .arg(file.path())
        .assert()
        .success()
        .stdout(predicate::eq("20\n"));
}

#[test]
fn scenario_2_delete_of_a_variable_falls_back_to_the_literal() {
    let file = lumina_file("3: 55\n!PRINTLINE 3\nDELETE 3\n!PRINTLINE 3\n");
    Command::cargo_bin("lumina")
        .unwrap()
        .arg(file.path())
        .assert()
        .success()
        .stdout(predicate::eq("55\n3\n"));
}

#[test]
fn scenario_3_reverse_reexecutes_earlier_lines() {
    let file = lumina_file(
        "!PRINTLINE 1\n!PRINTLINE 2\nREVERSE\n!PRINTLINE 3\n!PRINTLINE 4\n",
    );
    Command::cargo_bin("lumina")
        .unwrap()
        .arg(file.path())
        .assert()
        .success()
        .stdout(predicate::eq("1\n2\n2\n1\n"));
}

#[test]
fn scenario_4_number_words_and_concatenation() {
    let file = lumina_file("!PRINTLINE one\n!PRINTLINE two+two\n");
    Command::cargo_bin("lumina")
        .unwrap()
        .arg(file.path())
        .assert()
        .success()
        .stdout(predicate::eq("1\n4\n"));
}

#[test]
fn scenario_5_function_definition_and_call() {
    let file = lumina_file("FN hi\n  !PRINTLINE \"hey\"\nEND\n!hi\n");
    Command::cargo_bin("lumina")
        .unwrap()
        .arg(file.path())
        .assert()
        .success()
        .stdout(predicate::eq("hey\n"));
}

#[test]
fn property_9_nonexistent_path_exits_1_with_stderr_diagnostic() {
    Command::cargo_bin("lumina")
        .unwrap()
        .arg("/no/such/file.lum")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("error:"));
}

#[test]
fn property_10_nonzero_last_return_maps_to_exit_code() {
    let file = lumina_file("RETURN 7\n");
    Command::cargo_bin("lumina")
        .unwrap()
        .arg(file.path())
        .assert()
        .code(7);
}

#[test]
fn property_11_lumina_log_does_not_change_stdout() {
    let file = lumina_file("x: 10\n!PRINTLINE x * 2\n");
    Command::cargo_bin("lumina")
        .unwrap()
        .arg(file.path())
        .env("LUMINA_LOG", "trace")
        .assert()
        .success()
        .stdout(predicate::eq("20\n"));
}
