use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// A command wired to a throwaway home so dictionaries, config and
/// vocabulary never touch the real user directories.
fn sheetspell(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("sheetspell").unwrap();
    cmd.env("HOME", home.path())
        .env("XDG_DATA_HOME", home.path().join("data"))
        .env("XDG_CONFIG_HOME", home.path().join("config"))
        .env("XDG_CACHE_HOME", home.path().join("cache"));
    cmd
}

fn write_csv(home: &TempDir, name: &str, contents: &str) -> PathBuf {
    let path = home.path().join(name);
    fs::write(&path, contents).unwrap();
    path
}

const MISSPELLED: &str = "notes,amount\nthe cat sat on teh mat,42\nall good,7\n";

#[test]
fn help_describes_the_tool() {
    let home = TempDir::new().unwrap();
    sheetspell(&home)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Spelling correction"));
}

#[test]
fn check_reports_misspelling_and_fails() {
    let home = TempDir::new().unwrap();
    let csv = write_csv(&home, "data.csv", MISSPELLED);

    sheetspell(&home)
        .arg(&csv)
        .arg("--no-color")
        .assert()
        .code(1)
        .stdout(predicate::str::contains("teh"));
}

#[test]
fn no_fail_keeps_exit_code_zero() {
    let home = TempDir::new().unwrap();
    let csv = write_csv(&home, "data.csv", MISSPELLED);

    sheetspell(&home)
        .arg(&csv)
        .arg("--no-color")
        .arg("--no-fail")
        .assert()
        .success()
        .stdout(predicate::str::contains("teh"));
}

#[test]
fn json_report_lists_the_word() {
    let home = TempDir::new().unwrap();
    let csv = write_csv(&home, "data.csv", MISSPELLED);

    sheetspell(&home)
        .arg(&csv)
        .arg("--format")
        .arg("json")
        .arg("--no-fail")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"total_misspellings\": 1"))
        .stdout(predicate::str::contains("\"word\": \"teh\""));
}

#[test]
fn fix_writes_a_corrected_copy() {
    let home = TempDir::new().unwrap();
    let csv = write_csv(&home, "data.csv", MISSPELLED);

    sheetspell(&home)
        .arg(&csv)
        .arg("--fix")
        .arg("--no-color")
        .assert()
        .success();

    let corrected = home.path().join("corrected_data.csv");
    let contents = fs::read_to_string(&corrected).unwrap();
    assert!(contents.contains("the cat sat on the mat"));

    // the input itself is never rewritten
    let original = fs::read_to_string(&csv).unwrap();
    assert!(original.contains("teh"));
}

#[test]
fn fix_respects_explicit_output_path() {
    let home = TempDir::new().unwrap();
    let csv = write_csv(&home, "data.csv", MISSPELLED);
    let out = home.path().join("fixed.csv");

    sheetspell(&home)
        .arg(&csv)
        .arg("--fix")
        .arg("--no-color")
        .arg("--output")
        .arg(&out)
        .assert()
        .success();

    let contents = fs::read_to_string(&out).unwrap();
    assert!(contents.contains("the cat sat on the mat"));
}

#[test]
fn clean_file_reports_no_errors() {
    let home = TempDir::new().unwrap();
    let csv = write_csv(&home, "clean.csv", "notes\nthe cat sat\n");

    sheetspell(&home)
        .arg(&csv)
        .arg("--no-color")
        .assert()
        .success()
        .stdout(predicate::str::contains("No spelling errors found"));
}

#[test]
fn vocabulary_words_are_not_flagged() {
    let home = TempDir::new().unwrap();
    let csv = write_csv(&home, "data.csv", "notes\nacme makes the mat\n");
    let vocab = write_csv(&home, "vocab.txt", "# domain terms\nacme\nmakes\n");

    sheetspell(&home)
        .arg(&csv)
        .arg("--no-color")
        .arg("--vocab")
        .arg(&vocab)
        .assert()
        .success()
        .stdout(predicate::str::contains("No spelling errors found"));
}
