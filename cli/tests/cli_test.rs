//! End-to-end tests for the vitae binary.

use std::fs;
use std::path::Path;
use std::process::{Command, Output};

use tempfile::TempDir;

const RESUME: &str = r#"{
    "name": "Jane Doe",
    "address": "1 Main St",
    "phone": "5551234567",
    "email": "jane@example.com",
    "summary": "See https://example.com/x",
    "education": [],
    "experience": [],
    "skills": [],
    "publications": []
}"#;

fn vitae(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_vitae"))
        .current_dir(dir)
        .args(args)
        .env_remove("VITAE_PREAMBLE")
        .output()
        .unwrap()
}

#[test]
fn test_plaintext_to_stdout_with_default_input() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("resume.json"), RESUME).unwrap();

    let out = vitae(dir.path(), &["-p"]);
    assert_eq!(out.status.code(), Some(0));
    let stdout = String::from_utf8(out.stdout).unwrap();
    assert!(stdout.lines().any(|l| l == "Phone: (555)123-4567"));
    assert!(stdout.contains("https://example.com/x"));
}

#[test]
fn test_latex_to_file() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("data.json"), RESUME).unwrap();

    let out = vitae(dir.path(), &["-o", "resume.tex", "data.json"]);
    assert_eq!(out.status.code(), Some(0));
    assert!(out.stdout.is_empty());

    let latex = fs::read_to_string(dir.path().join("resume.tex")).unwrap();
    assert!(latex.contains(r"\url{https://example.com/x}"));
    assert!(latex.contains("tel:+15551234567"));
}

#[test]
fn test_letter_and_references_conflict() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("resume.json"), RESUME).unwrap();

    let out = vitae(dir.path(), &["--letter", "--references", "-o", "out.tex"]);
    assert_eq!(out.status.code(), Some(2));
    assert!(out.stdout.is_empty());
    let stderr = String::from_utf8(out.stderr).unwrap();
    assert!(stderr.contains("conflict"));
    assert!(stderr.contains("Usage"));
    assert!(!dir.path().join("out.tex").exists());
}

#[test]
fn test_missing_input_exits_one() {
    let dir = TempDir::new().unwrap();

    let out = vitae(dir.path(), &["--references"]);
    assert_eq!(out.status.code(), Some(1));
    let stderr = String::from_utf8(out.stderr).unwrap();
    assert!(stderr.contains("vitae"));
    assert!(stderr.contains("references.json"));
}

#[test]
fn test_unknown_flag_exits_two() {
    let dir = TempDir::new().unwrap();
    let out = vitae(dir.path(), &["--bogus"]);
    assert_eq!(out.status.code(), Some(2));
}
