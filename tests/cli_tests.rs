//! Command-line tests for the `greedy-assembler` binary.

use std::io::Write;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::NamedTempFile;

fn cmd() -> Command {
    Command::cargo_bin("greedy-assembler").expect("binary should build")
}

fn temp_input(suffix: &str, content: &[u8]) -> NamedTempFile {
    let mut temp = NamedTempFile::with_suffix(suffix).expect("Failed to create temp file");
    temp.write_all(content).expect("Failed to write temp file");
    temp.flush().expect("Failed to flush temp file");
    temp
}

#[test]
fn test_assemble_lines_file() {
    let input = temp_input(".txt", b"AAGCT\nCTTAG\nTAGCC\n");

    cmd()
        .arg("assemble")
        .arg(input.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Input fragments: 3"))
        .stdout(predicate::str::contains("Merges performed: 2"))
        .stdout(predicate::str::contains("AAGCTTAGCC"));
}

#[test]
fn test_assemble_fasta_file_as_fasta() {
    let input = temp_input(".fa", b">a\nAAGCT\n>b\nCTTAG\n>c\nTAGCC\n");

    cmd()
        .args(["--format", "fasta", "assemble"])
        .arg(input.path())
        .assert()
        .success()
        .stdout(predicate::eq(">contig_1 length=10\nAAGCTTAGCC\n"));
}

#[test]
fn test_assemble_json_output() {
    let input = temp_input(".txt", b"CAA\nAAG\n");

    let output = cmd()
        .args(["assemble", "--format", "json"])
        .arg(input.path())
        .output()
        .expect("command should run");
    assert!(output.status.success());

    let json: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("stdout should be JSON");
    assert_eq!(json["input_fragments"], 2);
    assert_eq!(json["merges"], 1);
    assert_eq!(json["fragments"][0]["sequence"], "CAAG");
    assert_eq!(json["fragments"][0]["length"], 4);
}

#[test]
fn test_assemble_from_stdin() {
    cmd()
        .args(["assemble", "-"])
        .write_stdin("AAGCT\nCTTAG\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("AAGCTTAG"));
}

#[test]
fn test_assemble_max_steps() {
    let input = temp_input(".txt", b"AAGCT\nCTTAG\nTAGCC\n");

    cmd()
        .args(["assemble", "--max-steps", "1"])
        .arg(input.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Merges performed: 1"))
        .stdout(predicate::str::contains("Resulting fragments: 2"));
}

#[test]
fn test_assemble_min_overlap() {
    let input = temp_input(".txt", b"AAGCT\nCTTAG\n");

    cmd()
        .args(["assemble", "--min-overlap", "3"])
        .arg(input.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Merges performed: 0"));
}

#[test]
fn test_assemble_rejects_zero_min_overlap() {
    let input = temp_input(".txt", b"AAGCT\n");

    cmd()
        .args(["assemble", "--min-overlap", "0"])
        .arg(input.path())
        .assert()
        .failure();
}

#[test]
fn test_assemble_invalid_sequence_fails() {
    let input = temp_input(".txt", b"AAGCT\nGAXT\n");

    cmd()
        .arg("assemble")
        .arg(input.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("record 2"))
        .stderr(predicate::str::contains("'X' at position 2"));
}

#[test]
fn test_assemble_missing_file_fails() {
    cmd()
        .args(["assemble", "/nonexistent/reads.fa"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load fragments"));
}

#[test]
fn test_overlap_command() {
    cmd()
        .args(["overlap", "CAA", "AAG"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Left -> Right overlap: 2"))
        .stdout(predicate::str::contains("Right -> Left overlap: 0"))
        .stdout(predicate::str::contains("Merged: CAAG (4 bp)"));
}

#[test]
fn test_overlap_invalid_sequence() {
    cmd()
        .args(["overlap", "CAA", "AXG"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid right sequence"));
}
