//! End-to-end tests for the fs-slice binary.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn fs_slice() -> Command {
    let mut cmd = Command::cargo_bin("fs-slice").unwrap();
    cmd.env_remove("RUST_LOG").env_remove("FS_SLICE_CONFIG");
    cmd
}

#[test]
fn test_starts_with_match() {
    fs_slice()
        .args(["starts-with", "a", "b"])
        .write_stdin("a\nb\nc\n")
        .assert()
        .success()
        .stdout("true\n");
}

#[test]
fn test_starts_with_no_match_exit_code() {
    fs_slice()
        .args(["starts-with", "b"])
        .write_stdin("a\nb\n")
        .assert()
        .code(1)
        .stdout("false\n");
}

#[test]
fn test_ends_with_comma_separator() {
    fs_slice()
        .args(["--separator", "comma", "ends-with", "3", "4"])
        .write_stdin("1, 2, 3, 4\n")
        .assert()
        .success()
        .stdout("true\n");
}

#[test]
fn test_longer_pattern_is_no_match_not_error() {
    fs_slice()
        .args(["ends-with", "a", "b", "c"])
        .write_stdin("b\nc\n")
        .assert()
        .code(1)
        .stdout("false\n");
}

#[test]
fn test_drop_prefix() {
    fs_slice()
        .args(["--separator", "comma", "drop-prefix", "1", "2"])
        .write_stdin("1,2,3")
        .assert()
        .success()
        .stdout("3\n");
}

#[test]
fn test_drop_prefix_without_match_keeps_input() {
    fs_slice()
        .args(["--separator", "comma", "drop-prefix", "9"])
        .write_stdin("1,2,3")
        .assert()
        .success()
        .stdout("1,2,3\n");
}

#[test]
fn test_drop_suffix_json() {
    fs_slice()
        .args(["--format", "json", "drop-suffix", "end"])
        .write_stdin("x\nend\nend\n")
        .assert()
        .success()
        .stdout("{\"result\":[\"x\",\"end\"]}\n");
}

#[test]
fn test_drop_first_default_count() {
    fs_slice()
        .args(["--separator", "whitespace", "drop-first"])
        .write_stdin("a b c")
        .assert()
        .success()
        .stdout("b c\n");
}

#[test]
fn test_drop_first_past_length_is_empty() {
    fs_slice()
        .args(["--format", "json", "drop-first", "5"])
        .write_stdin("a\nb\nc\n")
        .assert()
        .success()
        .stdout("{\"result\":[]}\n");
}

#[test]
fn test_drop_last_negative_count_is_invalid_argument() {
    fs_slice()
        .args(["drop-last", "-1"])
        .write_stdin("a\nb\n")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Invalid argument"));
}

#[test]
fn test_reads_input_file() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("list.txt");
    fs::write(&input, "a\nb\nc\n").unwrap();

    fs_slice()
        .arg("--input")
        .arg(&input)
        .args(["drop-last", "2"])
        .assert()
        .success()
        .stdout("a\n");
}

#[test]
fn test_config_file_sets_defaults() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("fs-slice.toml");
    fs::write(&config, "separator = \"|\"\nformat = \"json\"\n").unwrap();

    fs_slice()
        .arg("--config")
        .arg(&config)
        .args(["starts-with", "a"])
        .write_stdin("a|b")
        .assert()
        .success()
        .stdout("{\"result\":true}\n");
}

#[test]
fn test_strip_dry_run_leaves_files() {
    let dir = TempDir::new().unwrap();
    let header = dir.path().join("header.txt");
    let file = dir.path().join("a.kt");
    fs::write(&header, "// generated\n").unwrap();
    fs::write(&file, "// generated\nval x = 1\n").unwrap();

    fs_slice()
        .arg("strip")
        .arg("--prefix-file")
        .arg(&header)
        .arg(&file)
        .assert()
        .success()
        .stdout(predicate::str::contains("would strip 1 element(s)"));

    assert_eq!(fs::read_to_string(&file).unwrap(), "// generated\nval x = 1\n");
}

#[test]
fn test_strip_write_removes_header_and_footer_once() {
    let dir = TempDir::new().unwrap();
    let header = dir.path().join("header.txt");
    let footer = dir.path().join("footer.txt");
    let first = dir.path().join("a.kt");
    let second = dir.path().join("b.kt");
    fs::write(&header, "// generated\n").unwrap();
    fs::write(&footer, "// eof\n").unwrap();
    fs::write(&first, "// generated\n// generated\nval x = 1\n// eof\n").unwrap();
    fs::write(&second, "val y = 2\n").unwrap();

    fs_slice()
        .arg("--format")
        .arg("json")
        .arg("strip")
        .arg("--write")
        .arg("--prefix-file")
        .arg(&header)
        .arg("--suffix-file")
        .arg(&footer)
        .arg(&first)
        .arg(&second)
        .assert()
        .success()
        .stdout(predicate::str::contains("\"removed\": 2"));

    assert_eq!(fs::read_to_string(&first).unwrap(), "// generated\nval x = 1\n");
    assert_eq!(fs::read_to_string(&second).unwrap(), "val y = 2\n");
}

#[test]
fn test_strip_write_keeps_layout_with_whitespace_separator() {
    let dir = TempDir::new().unwrap();
    let header = dir.path().join("header.txt");
    let file = dir.path().join("main.rs");
    fs::write(&header, "HEADER\n").unwrap();
    fs::write(&file, "HEADER\nfn main() {\n    body();\n}\n").unwrap();

    fs_slice()
        .args(["--separator", "whitespace", "strip", "--write", "--prefix-file"])
        .arg(&header)
        .arg(&file)
        .assert()
        .success();

    assert_eq!(fs::read_to_string(&file).unwrap(), "fn main() {\n    body();\n}\n");
}

#[test]
fn test_strip_write_keeps_crlf_line_endings() {
    let dir = TempDir::new().unwrap();
    let header = dir.path().join("header.txt");
    let footer = dir.path().join("footer.txt");
    let file = dir.path().join("a.txt");
    fs::write(&header, "HEADER\n").unwrap();
    fs::write(&footer, "FOOTER\n").unwrap();
    fs::write(&file, "HEADER\r\na\r\nb\r\nFOOTER\r\n").unwrap();

    fs_slice()
        .args(["strip", "--write", "--prefix-file"])
        .arg(&header)
        .arg("--suffix-file")
        .arg(&footer)
        .arg(&file)
        .assert()
        .success();

    assert_eq!(fs::read_to_string(&file).unwrap(), "a\r\nb\r\n");
}

#[test]
fn test_strip_write_keeps_comma_spacing() {
    let dir = TempDir::new().unwrap();
    let header = dir.path().join("header.txt");
    let file = dir.path().join("list.csv");
    fs::write(&header, "id").unwrap();
    fs::write(&file, "id, a , b\n").unwrap();

    fs_slice()
        .args(["--separator", "comma", "strip", "--write", "--prefix-file"])
        .arg(&header)
        .arg(&file)
        .assert()
        .success();

    assert_eq!(fs::read_to_string(&file).unwrap(), "a , b\n");
}

#[test]
fn test_single_empty_element_prints_empty_line() {
    fs_slice()
        .arg("drop-first")
        .write_stdin("a\n\n")
        .assert()
        .success()
        .stdout("\n");
}

#[test]
fn test_empty_result_prints_nothing() {
    fs_slice()
        .args(["drop-first", "2"])
        .write_stdin("a\nb\n")
        .assert()
        .success()
        .stdout("");
}

#[test]
fn test_strip_requires_a_pattern_file() {
    let dir = TempDir::new().unwrap();
    let file = dir.path().join("a.txt");
    fs::write(&file, "x\n").unwrap();

    fs_slice()
        .arg("strip")
        .arg(&file)
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Nothing to strip"));
}

#[test]
fn test_invalid_separator_is_rejected() {
    fs_slice()
        .args(["--separator", "tabs", "drop-first"])
        .write_stdin("a")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid separator"));
}
