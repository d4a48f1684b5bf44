//! Integration tests for myls


use assert_cmd::Command;
use harness::{TestDir, run_myls};
use predicates::prelude::*;

fn sample() -> TestDir {
    let dir = TestDir::new();
    dir.add_file(".hidden", "");
    dir.add_file("b.txt", "bbb");
    dir.add_file("a.txt", "a");
    dir
}

#[test]
fn test_default_listing() {
    let dir = sample();
    let (stdout, stderr, code) = run_myls(dir.path(), &[]);
    assert_eq!(code, 0, "stderr: {}", stderr);
    assert_eq!(stdout, "a.txt  b.txt\n");
}

#[test]
fn test_show_all() {
    let dir = sample();
    let (stdout, _stderr, code) = run_myls(dir.path(), &["-a"]);
    assert_eq!(code, 0);
    assert_eq!(stdout, ".  ..  .hidden  a.txt  b.txt\n");
}

#[test]
fn test_almost_all() {
    let dir = sample();
    let (stdout, _stderr, _) = run_myls(dir.path(), &["-A"]);
    assert_eq!(stdout, ".hidden  a.txt  b.txt\n");
}

#[test]
fn test_long_format_lines() {
    let dir = sample();
    Command::cargo_bin("myls")
        .unwrap()
        .current_dir(dir.path())
        .env("NO_COLOR", "1")
        .arg("-l")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("total "))
        .stdout(
            predicate::str::is_match(
                r"(?m)^-[rwxsStT-]{9} \d+ \S+ \S+ 1 [A-Z][a-z]{2} \d{2} \d{2}:\d{2} a\.txt$",
            )
            .unwrap(),
        )
        .stdout(
            predicate::str::is_match(r"(?m) 3 [A-Z][a-z]{2} \d{2} \d{2}:\d{2} b\.txt$").unwrap(),
        );
}

#[test]
fn test_long_format_directory_mode() {
    let dir = TestDir::new();
    dir.add_dir("sub");
    let (stdout, _stderr, _) = run_myls(dir.path(), &["-l"]);
    let line = stdout.lines().nth(1).expect("entry line");
    assert!(line.starts_with('d'), "got: {}", line);
    assert!(line.ends_with(" sub"));
}

#[test]
fn test_recursive_listing() {
    let dir = TestDir::new();
    dir.add_file("root/a.txt", "");
    dir.add_file("root/sub/c.txt", "");

    let (stdout, _stderr, code) = run_myls(dir.path(), &["-R", "root"]);
    assert_eq!(code, 0);
    assert_eq!(stdout, "root:\na.txt  sub\n\nroot/sub:\nc.txt\n");
}

#[test]
fn test_recursive_long_has_totals_per_directory() {
    let dir = TestDir::new();
    dir.add_file("root/a.txt", "");
    dir.add_file("root/sub/c.txt", "");

    let (stdout, _stderr, _) = run_myls(dir.path(), &["-lR", "root"]);
    let totals = stdout.lines().filter(|l| l.starts_with("total ")).count();
    assert_eq!(totals, 2, "output:\n{}", stdout);
    assert!(stdout.starts_with("root:\ntotal "));
    assert!(stdout.contains("\n\nroot/sub:\ntotal "));
}

#[test]
fn test_time_sort_newest_first() {
    let dir = TestDir::new();
    dir.add_file("old", "");
    dir.add_file("newest", "");
    dir.add_file("middle", "");
    dir.set_age("old", 3000);
    dir.set_age("middle", 2000);
    dir.set_age("newest", 1000);

    let (stdout, _stderr, _) = run_myls(dir.path(), &["-t"]);
    assert_eq!(stdout, "newest  middle  old\n");
}

#[test]
fn test_reverse_sorts_names_descending() {
    let dir = sample();
    let (stdout, _stderr, _) = run_myls(dir.path(), &["-r"]);
    assert_eq!(stdout, "b.txt  a.txt\n");
}

#[test]
fn test_reverse_with_time_sort_is_name_descending() {
    // -r re-sorts by name even after -t, so age plays no part here
    let dir = TestDir::new();
    dir.add_file("alpha", "");
    dir.add_file("beta", "");
    dir.add_file("gamma", "");
    dir.set_age("gamma", 3000);
    dir.set_age("alpha", 1000);
    dir.set_age("beta", 2000);

    let (stdout, _stderr, _) = run_myls(dir.path(), &["-t", "-r"]);
    assert_eq!(stdout, "gamma  beta  alpha\n");
}

#[test]
fn test_combined_short_flags() {
    let dir = sample();
    let (stdout, _stderr, code) = run_myls(dir.path(), &["-la"]);
    assert_eq!(code, 0);
    assert!(stdout.contains(" .hidden\n"));
    assert!(stdout.lines().any(|l| l.ends_with(" ..")));
}

#[test]
fn test_abbreviated_long_options() {
    let dir = sample();
    let (stdout, _stderr, code) = run_myls(dir.path(), &["--rev"]);
    assert_eq!(code, 0);
    assert_eq!(stdout, "b.txt  a.txt\n");
}

#[test]
fn test_ambiguous_long_option_rejected() {
    let dir = sample();
    let (_stdout, stderr, code) = run_myls(dir.path(), &["--re"]);
    assert_eq!(code, 2);
    assert!(!stderr.is_empty());
}

#[test]
fn test_unknown_flag_rejected() {
    let dir = sample();
    Command::cargo_bin("myls")
        .unwrap()
        .current_dir(dir.path())
        .arg("-z")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("-z"));
}

#[test]
fn test_missing_path_reports_error() {
    let dir = sample();
    let (stdout, stderr, code) = run_myls(dir.path(), &["nope"]);
    assert_eq!(code, 2);
    assert!(stdout.is_empty());
    assert_eq!(
        stderr.trim_end(),
        "myls: cannot access 'nope': No such file or directory"
    );
}

#[test]
fn test_missing_path_does_not_stop_other_paths() {
    let dir = TestDir::new();
    dir.add_file("real/x", "");
    let (stdout, stderr, code) = run_myls(dir.path(), &["ghost", "real"]);
    assert_eq!(code, 2);
    assert!(stderr.contains("ghost"));
    assert_eq!(stdout, "real:\nx\n");
}

#[test]
fn test_multiple_directories() {
    let dir = TestDir::new();
    dir.add_file("one/a", "");
    dir.add_file("two/b", "");
    let (stdout, _stderr, _) = run_myls(dir.path(), &["one", "two"]);
    assert_eq!(stdout, "one:\na\n\ntwo:\nb\n");
}

#[test]
fn test_ignore_pattern() {
    let dir = sample();
    dir.add_file("debug.log", "");
    let (stdout, _stderr, _) = run_myls(dir.path(), &["-I", "*.log"]);
    assert_eq!(stdout, "a.txt  b.txt\n");
}

#[test]
fn test_json_output() {
    let dir = sample();
    let (stdout, _stderr, code) = run_myls(dir.path(), &["--json", "-l"]);
    assert_eq!(code, 0);

    let value: serde_json::Value = serde_json::from_str(&stdout).expect("valid JSON");
    let sections = value.as_array().unwrap();
    assert_eq!(sections.len(), 1);
    assert!(sections[0]["total"].is_number());
    let names: Vec<&str> = sections[0]["entries"]
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["a.txt", "b.txt"]);
}

#[test]
fn test_color_always_marks_directories() {
    let dir = TestDir::new();
    dir.add_dir("sub");
    dir.add_file("file", "");
    Command::cargo_bin("myls")
        .unwrap()
        .current_dir(dir.path())
        .args(["--color", "always"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\x1b["))
        .stdout(predicate::str::starts_with("file  "));
}

#[test]
fn test_help() {
    Command::cargo_bin("myls")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--recursive"))
        .stdout(predicate::str::contains("--reverse"));
}
