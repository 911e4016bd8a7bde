use predicates::prelude::*;
use std::io::Write;
use std::process::Command;
use tempfile::{NamedTempFile, TempDir};

fn cmd() -> assert_cmd::Command {
    assert_cmd::Command::from(Command::new(env!("CARGO_BIN_EXE_doxyhtml")))
}

fn fixture_path(name: &str) -> String {
    format!("{}/tests/fixtures/{}", env!("CARGO_MANIFEST_DIR"), name)
}

fn stdout_of(assert: assert_cmd::assert::Assert) -> String {
    String::from_utf8(assert.get_output().stdout.clone()).unwrap()
}

// -- stdin mode --

#[test]
fn stdin_doxygen_comment() {
    let input = "/**\n* Document main(int,char**) here...\n*\n* @param argc\n* @param argv\n* @return ...\n*\n*/";
    let output = stdout_of(
        cmd()
            .args(["--kind", "doxygen"])
            .write_stdin(input)
            .assert()
            .success(),
    );
    assert_eq!(
        output,
        concat!(
            "<p>Document main(int,char**) here...</p>",
            "<p><strong>Parameter:</strong><br>&nbsp;  <i>argc</i></p>",
            "<p><strong>Parameter:</strong><br>&nbsp;  <i>argv</i></p>",
            "<p><strong>Returns:</strong><br>&nbsp;  ...</p>",
            "<p><strong>Author:</strong><br>&nbsp;  thp</p>\n",
        )
    );
}

#[test]
fn stdin_kind_is_guessed() {
    let output = stdout_of(
        cmd()
            .write_stdin("/**\\verbatim\n* 2<1>3\n* \\endverbatim\n*/")
            .assert()
            .success(),
    );
    assert_eq!(output, "<p><pre>2&lt;1&gt;3\n</pre></p>\n");
}

#[test]
fn stdin_escaped_brackets() {
    let output = stdout_of(
        cmd()
            .args(["-k", "doxygen"])
            .write_stdin("/**\n* 2\\<1\\>3\n* \n*/")
            .assert()
            .success(),
    );
    assert_eq!(output, "<p>2&lt;<1&gt;>3</p>\n");
}

#[test]
fn stdin_author_override() {
    let input = "/** Thing.\n * @return 1\n */";
    let output = stdout_of(cmd().args(["--author", "jane"]).write_stdin(input).assert().success());
    assert!(output.contains("<strong>Author:</strong><br>&nbsp;  jane"));

    let output = stdout_of(cmd().arg("--no-author").write_stdin(input).assert().success());
    assert!(!output.contains("Author:"));
}

#[test]
fn stdin_line_comment_kind() {
    let output = stdout_of(
        cmd()
            .args(["--kind", "doxygen-line"])
            .write_stdin("/// First.\n/// @unimplemented xyz\n")
            .assert()
            .success(),
    );
    assert_eq!(
        output,
        "<p>First.</p><p><strong>unimplemented:</strong><br>&nbsp;  xyz</p>\n"
    );
}

#[test]
fn stdin_invalid_kind_fails() {
    cmd()
        .args(["--kind", "rst"])
        .write_stdin("/** x */")
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value"));
}

#[test]
fn stdin_extract_mode() {
    let input = std::fs::read_to_string(fixture_path("list.h")).unwrap();
    let expected = std::fs::read_to_string(fixture_path("list.expected.frag.html")).unwrap();

    let output = stdout_of(cmd().arg("--extract").write_stdin(input).assert().success());
    assert_eq!(output, expected);
}

#[test]
fn stdin_extract_json() {
    let input = std::fs::read_to_string(fixture_path("list.h")).unwrap();
    let output = stdout_of(
        cmd()
            .args(["--extract", "-f", "json"])
            .write_stdin(input)
            .assert()
            .success(),
    );
    let v: serde_json::Value = serde_json::from_str(&output).unwrap();
    let comments = v["comments"].as_array().unwrap();
    assert_eq!(comments.len(), 4);
    assert_eq!(comments[1]["subject"], "int list_push(struct list *l, int value);");
    assert_eq!(comments[2]["kind"], "doxygen_line_comment");
}

// -- file mode --

#[test]
fn file_mode_creates_output() {
    let dir = TempDir::new().unwrap();

    cmd()
        .args(["-o", dir.path().to_str().unwrap()])
        .arg(fixture_path("list.h"))
        .assert()
        .success();

    let output = std::fs::read_to_string(dir.path().join("list.frag.html")).unwrap();
    let expected = std::fs::read_to_string(fixture_path("list.expected.frag.html")).unwrap();
    assert_eq!(output, expected);
}

#[test]
fn file_mode_requires_output() {
    cmd()
        .arg(fixture_path("list.h"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("--output is required"));
}

#[test]
fn file_mode_html_format() {
    let dir = TempDir::new().unwrap();

    cmd()
        .args(["-o", dir.path().to_str().unwrap()])
        .args(["-f", "html"])
        .arg(fixture_path("list.h"))
        .assert()
        .success();

    let output_path = dir.path().join("list.html");
    assert!(output_path.exists(), "Should create .html file");
    let output = std::fs::read_to_string(output_path).unwrap();
    assert!(output.contains("<!DOCTYPE html>"));
    assert!(output.contains("<title>list</title>"));
    assert!(output.contains("<code>struct list;</code>"));
}

#[test]
fn file_mode_skips_files_without_doc_comments() {
    let dir = TempDir::new().unwrap();
    let mut input = NamedTempFile::with_suffix(".c").unwrap();
    input.write_all(b"// only a plain comment\nint x;\n").unwrap();

    cmd()
        .args(["-o", dir.path().to_str().unwrap()])
        .arg(input.path().to_str().unwrap())
        .assert()
        .success();

    let entries: Vec<_> = std::fs::read_dir(dir.path()).unwrap().collect();
    assert!(entries.is_empty(), "No output expected for undocumented files");
}

#[test]
fn file_mode_all_comments() {
    let dir = TempDir::new().unwrap();
    let mut input = NamedTempFile::with_suffix(".c").unwrap();
    input.write_all(b"// only a plain comment\nint x;\n").unwrap();

    cmd()
        .args(["-o", dir.path().to_str().unwrap()])
        .arg("--all-comments")
        .arg(input.path().to_str().unwrap())
        .assert()
        .success();

    let entries: Vec<_> = std::fs::read_dir(dir.path())
        .unwrap()
        .filter_map(|e| e.ok())
        .collect();
    assert_eq!(entries.len(), 1);
    let output = std::fs::read_to_string(entries[0].path()).unwrap();
    assert_eq!(output, "<p>only a plain comment</p>\n");
}

#[test]
fn file_mode_directory_input() {
    let src = TempDir::new().unwrap();
    let out = TempDir::new().unwrap();
    std::fs::write(src.path().join("a.h"), "/** A. */\nint a;\n").unwrap();
    std::fs::write(src.path().join("notes.txt"), "/** not source */\n").unwrap();

    cmd()
        .args(["-o", out.path().to_str().unwrap()])
        .arg(src.path().to_str().unwrap())
        .assert()
        .success();

    assert!(out.path().join("a.frag.html").exists());
    assert!(!out.path().join("notes.frag.html").exists());
}

#[test]
fn file_mode_merges_same_stem_inputs() {
    let src = TempDir::new().unwrap();
    let out = TempDir::new().unwrap();
    std::fs::write(src.path().join("list.c"), "/** From C. */\nint c;\n").unwrap();
    std::fs::write(src.path().join("list.h"), "/** From H. */\nint h;\n").unwrap();

    cmd()
        .env_remove("RUST_LOG")
        .args(["-v", "-o", out.path().to_str().unwrap()])
        .arg(src.path().to_str().unwrap())
        .assert()
        .success()
        .stderr(predicate::str::contains("merging"));

    let entries: Vec<_> = std::fs::read_dir(out.path())
        .unwrap()
        .filter_map(|e| e.ok())
        .map(|e| e.file_name().to_string_lossy().to_string())
        .collect();
    assert_eq!(entries, vec!["list.frag.html"]);
    let output = std::fs::read_to_string(out.path().join("list.frag.html")).unwrap();
    assert_eq!(output, "<p>From C.</p>\n<p>From H.</p>\n");
}

#[test]
fn file_mode_merges_same_stem_across_directories() {
    let a = TempDir::new().unwrap();
    let b = TempDir::new().unwrap();
    let out = TempDir::new().unwrap();
    std::fs::write(a.path().join("list.h"), "/** First. */\nint a;\n").unwrap();
    std::fs::write(b.path().join("list.h"), "/** Second. */\nint b;\n").unwrap();

    cmd()
        .args(["-o", out.path().to_str().unwrap(), "-f", "json"])
        .arg(a.path().join("list.h").to_str().unwrap())
        .arg(b.path().join("list.h").to_str().unwrap())
        .assert()
        .success();

    let output = std::fs::read_to_string(out.path().join("list.json")).unwrap();
    let v: serde_json::Value = serde_json::from_str(&output).unwrap();
    let comments = v["comments"].as_array().unwrap();
    assert_eq!(comments.len(), 2);
    assert!(comments.iter().all(|c| c["source"].as_str().is_some_and(|s| s.ends_with("list.h"))));
    assert_ne!(comments[0]["source"], comments[1]["source"]);
}

#[test]
fn unsupported_file_warns_and_continues() {
    let dir = TempDir::new().unwrap();
    let mut input = NamedTempFile::with_suffix(".txt").unwrap();
    input.write_all(b"/** text */\n").unwrap();

    cmd()
        .args(["-o", dir.path().to_str().unwrap()])
        .arg(input.path().to_str().unwrap())
        .assert()
        .success()
        .stderr(predicate::str::contains("unsupported file type"));
}

#[test]
fn unmatched_glob_warns() {
    let dir = TempDir::new().unwrap();

    cmd()
        .args(["-o", dir.path().to_str().unwrap()])
        .arg(format!("{}/*.nothing", dir.path().display()))
        .assert()
        .success()
        .stderr(predicate::str::contains("no files matched"));
}

#[test]
fn invalid_format_fails() {
    let dir = TempDir::new().unwrap();

    cmd()
        .args(["-o", dir.path().to_str().unwrap()])
        .args(["-f", "xml"])
        .arg(fixture_path("list.h"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown format"));
}
