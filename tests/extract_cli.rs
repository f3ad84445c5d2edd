use assert_cmd::prelude::*;
use std::fs;
use std::path::PathBuf;
use std::process::Command;

fn extract() -> Command {
    Command::new(env!("CARGO_BIN_EXE_extract"))
}

fn write_svg(dir: &tempfile::TempDir, name: &str, body: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(
        &path,
        format!(
            "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"128\" height=\"128\">\n{}\n</svg>\n",
            body
        ),
    )
    .expect("write svg");
    path
}

#[test]
fn cli_emits_arrays() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let svg = write_svg(
        &tmp,
        "panel.svg",
        r#"<g transform="scale(2)">
  <g transform="translate(1,0)">
    <circle cx="1" cy="1" r="0.5"/>
  </g>
  <circle cx="10" r="1"/>
</g>
<circle cx="3.25" cy="-4" r="1"/>"#,
    );

    extract()
        .args([svg.to_string_lossy().as_ref(), "4"])
        .assert()
        .success()
        .stdout(
            "static constexpr float circle_xs_4[] = {4.000000, 3.250000};\n\
             static constexpr float circle_ys_4[] = {2.000000, -4.000000};\n\
             static constexpr int num_circles_4 = 2;\n",
        );
}

#[test]
fn cli_no_circles() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let svg = write_svg(&tmp, "empty.svg", r#"<rect x="0" y="0" width="1" height="1"/>"#);

    extract()
        .args([svg.to_string_lossy().as_ref(), "0"])
        .assert()
        .success()
        .stdout(
            "static constexpr float circle_xs_0[] = {};\n\
             static constexpr float circle_ys_0[] = {};\n\
             static constexpr int num_circles_0 = 0;\n",
        );
}

#[test]
fn cli_wrong_argument_count() {
    let output = extract().arg("only-one.svg").output().expect("run extract");
    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Usage:"));

    extract().assert().code(1);
    extract().args(["a.svg", "1", "extra"]).assert().code(1);
}

#[test]
fn cli_identifier_must_be_integer() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let svg = write_svg(&tmp, "one.svg", r#"<circle cx="1" cy="1"/>"#);
    extract()
        .args([svg.to_string_lossy().as_ref(), "two"])
        .assert()
        .code(1);
}

#[test]
fn cli_missing_file_fails() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let missing = tmp.path().join("nope.svg");
    let output = extract()
        .args([missing.to_string_lossy().as_ref(), "1"])
        .output()
        .expect("run extract");
    assert_eq!(output.status.code(), Some(2));
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).contains("nope.svg"));
}

#[test]
fn cli_bad_transform_fails() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let svg = write_svg(&tmp, "bad.svg", r#"<g transform="rotate(1, 2)"><circle cx="1" cy="1"/></g>"#);
    extract()
        .args([svg.to_string_lossy().as_ref(), "1"])
        .assert()
        .code(2);
}

#[test]
fn cli_short_matrix_skips_circle() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let svg = write_svg(
        &tmp,
        "short.svg",
        r#"<g transform="matrix(1 0 0 1)"><circle cx="1" cy="1"/></g><circle cx="2" cy="2"/>"#,
    );
    extract()
        .args([svg.to_string_lossy().as_ref(), "5"])
        .assert()
        .success()
        .stdout(
            "static constexpr float circle_xs_5[] = {2.000000};\n\
             static constexpr float circle_ys_5[] = {2.000000};\n\
             static constexpr int num_circles_5 = 1;\n",
        );
}
