//! Tests for the texttool binary.

use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use predicates::prelude::*;
use pretty_assertions::assert_eq;

fn fixture_path(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

fn texttool() -> Command {
    Command::cargo_bin("texttool").unwrap()
}

#[test]
fn test_count_file() {
    texttool()
        .arg("count")
        .arg(fixture_path("chapter.txt"))
        .assert()
        .success()
        .stdout("38\n");
}

#[test]
fn test_count_stdin() {
    texttool()
        .arg("count")
        .write_stdin("  one\ttwo \n\n three  ")
        .assert()
        .success()
        .stdout("3\n");
}

#[test]
fn test_count_missing_file() {
    texttool()
        .args(["count", "does-not-exist.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::starts_with("Error:"));
}

#[test]
fn test_replace_with_settings() {
    texttool()
        .arg("replace")
        .arg(fixture_path("chapter.txt"))
        .arg("--settings")
        .arg(fixture_path("settings.json"))
        .assert()
        .success()
        .stdout(predicate::str::contains(
            r#"Hắn <span class="highlight">không</span> biết"#,
        ))
        .stdout(predicate::str::contains(r#"<span class="highlight">được</span>"#))
        .stderr(predicate::str::contains("Replaced 3 matches using 2 rules"));
}

#[test]
fn test_replace_inline_rules_from_stdin() {
    texttool()
        .args(["replace", "--rule", "cat=dog", "--whole-word"])
        .write_stdin("cat concat\nCat")
        .assert()
        .success()
        .stdout(
            "<p><span class=\"highlight\">dog</span> concat<br>\
             <span class=\"highlight\">dog</span></p>\n",
        );
}

#[test]
fn test_replace_match_case() {
    texttool()
        .args(["replace", "-r", "Cat=Dog", "--match-case"])
        .write_stdin("cat Cat")
        .assert()
        .success()
        .stdout("<p>cat <span class=\"highlight\">Dog</span></p>\n");
}

#[test]
fn test_replace_to_output_file() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("out.html");

    texttool()
        .args(["replace", "--rule", "a=b", "--output"])
        .arg(&output)
        .write_stdin("a\n\nc")
        .assert()
        .success()
        .stdout("")
        .stderr(predicate::str::contains("Saved to:"));

    assert_eq!(
        fs::read_to_string(&output).unwrap(),
        r#"<p><span class="highlight">b</span></p><p>c</p>"#
    );
}

#[test]
fn test_replace_unknown_mode() {
    texttool()
        .arg("replace")
        .arg("--settings")
        .arg(fixture_path("settings.json"))
        .args(["--mode", "Missing"])
        .write_stdin("text")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown mode: 'Missing'"));
}

#[test]
fn test_split_to_stdout() {
    texttool()
        .arg("split")
        .arg(fixture_path("chapter.txt"))
        .args(["--parts", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Part 1/2 (22 words)"))
        .stdout(predicate::str::contains("Chương 12.1: Trốn chạy"))
        .stdout(predicate::str::contains("Chương 12.2: Trốn chạy"));
}

#[test]
fn test_split_to_directory() {
    let dir = tempfile::tempdir().unwrap();

    texttool()
        .arg("split")
        .arg(fixture_path("chapter.txt"))
        .args(["-p", "2", "--output-dir"])
        .arg(dir.path())
        .assert()
        .success()
        .stdout("");

    assert_eq!(
        fs::read_to_string(dir.path().join("part_1.txt")).unwrap(),
        "Chương 12.1: Trốn chạy\n\n\
         Hắn ko biết phải làm gì. Trời đã tối.\n\n\
         Cô ấy nói rằng dc rồi, cứ đi đi."
    );
    assert_eq!(
        fs::read_to_string(dir.path().join("part_2.txt")).unwrap(),
        "Chương 12.2: Trốn chạy\n\n\
         Hai người rời khỏi thành trong đêm, ko ai nhìn thấy.\n\n\
         Sáng hôm sau, trời mưa."
    );
    assert!(!dir.path().join("part_3.txt").exists());
}

#[test]
fn test_split_custom_keyword() {
    texttool()
        .args(["split", "-p", "1", "-k", "Quyển"])
        .write_stdin("Quyển 3 - Mở đầu\n\nmột hai ba")
        .assert()
        .success()
        .stdout(predicate::str::contains("Quyển 3.1- Mở đầu\n\nmột hai ba"));
}

#[test]
fn test_split_rejects_zero_parts() {
    texttool()
        .args(["split", "--parts", "0"])
        .write_stdin("Chapter 1\n\ntext")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid split count: 0"));
}

#[test]
fn test_split_rejects_blank_keyword() {
    texttool()
        .args(["split", "--parts", "2", "--keyword", " "])
        .write_stdin("Chapter 1\n\ntext")
        .assert()
        .failure();
}

#[test]
fn test_split_empty_input() {
    texttool()
        .args(["split", "--parts", "3"])
        .write_stdin("   \n")
        .assert()
        .success()
        .stdout("")
        .stderr(predicate::str::contains("Nothing to split"));
}
