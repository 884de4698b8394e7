//! CLI tests for the `theme-schema preview` subcommand.

use std::fs;
use std::process::Command;

use assert_cmd::cargo;

fn theme_schema_cmd() -> Command {
    Command::new(cargo::cargo_bin!("theme-schema"))
}

const SECTION_DOC: &str = "{% schema %}\n{\n  \"name\": \"Hero\",\n  \"settings\": [\n    { \"type\": \"text\", \"id\": \"heading\", \"label\": \"Heading\", \"default\": \"Welcome\" },\n    { \"type\": \"widget\", \"id\": \"odd\" }\n  ]\n}\n{% endschema %}\n";

#[test]
fn preview_writes_a_complete_html_document() {
    let dir = tempfile::tempdir().expect("tempdir");
    let input = dir.path().join("hero.liquid");
    let out = dir.path().join("preview.html");
    fs::write(&input, SECTION_DOC).expect("write fixture");

    let output = theme_schema_cmd()
        .args([
            "preview",
            &input.to_string_lossy(),
            "--out",
            &out.to_string_lossy(),
            "--output",
            "json",
        ])
        .output()
        .expect("run preview");
    assert!(
        output.status.success(),
        "stderr={}",
        String::from_utf8_lossy(&output.stderr)
    );

    let html = fs::read_to_string(&out).expect("read preview");
    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains("<h1>Hero</h1>"));
    assert!(html.contains("Unsupported setting type: <code>widget</code>"));
}

#[test]
fn preview_without_out_prints_html_to_stdout() {
    let dir = tempfile::tempdir().expect("tempdir");
    let input = dir.path().join("hero.liquid");
    fs::write(&input, SECTION_DOC).expect("write fixture");

    let output = theme_schema_cmd()
        .args(["preview", &input.to_string_lossy(), "--output", "json"])
        .output()
        .expect("run preview");
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.starts_with("<!DOCTYPE html>"));
}

#[test]
fn preview_of_schemaless_file_writes_nothing() {
    let dir = tempfile::tempdir().expect("tempdir");
    let input = dir.path().join("plain.liquid");
    let out = dir.path().join("preview.html");
    fs::write(&input, "<div></div>").expect("write fixture");

    let output = theme_schema_cmd()
        .args([
            "preview",
            &input.to_string_lossy(),
            "--out",
            &out.to_string_lossy(),
            "--output",
            "json",
        ])
        .output()
        .expect("run preview");
    assert!(output.status.success());
    assert!(!out.exists());

    let output = theme_schema_cmd()
        .args([
            "preview",
            &input.to_string_lossy(),
            "--require-schema",
            "--output",
            "json",
        ])
        .output()
        .expect("run preview --require-schema");
    assert_eq!(output.status.code(), Some(2));
}

#[test]
fn preview_help_names_the_pipeline_flags() {
    let output = theme_schema_cmd()
        .args(["preview", "--help"])
        .output()
        .expect("run preview help");
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("--base-dir"), "missing --base-dir: {stdout}");
    assert!(stdout.contains("--out"), "missing --out: {stdout}");
}
