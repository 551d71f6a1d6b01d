//! CLI integration tests for the repeatscan binary

use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;
use tempfile::NamedTempFile;

fn fasta_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

fn repeatscan() -> Command {
    Command::cargo_bin("repeatscan").unwrap()
}

#[test]
fn test_homopolymer_output() {
    let input = fasta_file(">chr1\nAAAANAAA\n");

    repeatscan()
        .args(["1", "3"])
        .arg(input.path())
        .assert()
        .success()
        .stdout("#repeat_length: 1\n#total_length: 3\nchr1\t0\t4\tunit=A\nchr1\t5\t8\tunit=A\n")
        .stderr(predicate::str::contains("Parsing chromosome chr1"));
}

#[test]
fn test_stdin_input() {
    repeatscan()
        .args(["2", "4", "-"])
        .write_stdin(">chr7\nATATATG\n")
        .assert()
        .success()
        .stdout(predicate::str::ends_with("chr7\t0\t6\tunit=AT\n"));
}

#[test]
fn test_output_file() {
    let input = fasta_file(">chr1\nAATTAATTAATT\n");
    let output = NamedTempFile::new().unwrap();

    repeatscan()
        .args(["-q", "4", "8"])
        .arg(input.path())
        .arg("--output")
        .arg(output.path())
        .assert()
        .success()
        .stdout("")
        .stderr("");

    let text = std::fs::read_to_string(output.path()).unwrap();
    assert_eq!(text, "#repeat_length: 4\n#total_length: 8\nchr1\t0\t12\tunit=AATT\n");
}

#[test]
fn test_invalid_period_fails_before_reading() {
    // The input path does not exist; the period error must win
    repeatscan()
        .args(["5", "10", "/nonexistent/genome.fa"])
        .assert()
        .failure()
        .stdout("")
        .stderr(predicate::str::contains("Repeat length must be in [1,4]"));
}

#[test]
fn test_threshold_not_above_period() {
    repeatscan()
        .args(["3", "3", "-"])
        .write_stdin(">chr1\nCAGCAG\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("must be greater than"));
}

#[test]
fn test_missing_input_file() {
    repeatscan()
        .args(["2", "6", "/nonexistent/genome.fa"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("I/O error"));
}

#[test]
fn test_label_too_long() {
    let input = fasta_file(&format!(">{}\nACGT\n", "c".repeat(40)));

    repeatscan()
        .args(["1", "2"])
        .arg(input.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("exceeds 31 characters"));
}
