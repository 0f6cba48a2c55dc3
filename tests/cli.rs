//! End-to-end tests for the `diwire` binary

use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;
use tempfile::NamedTempFile;

fn diwire_file(source: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(".diwire")
        .tempfile()
        .expect("temp file");
    file.write_all(source.as_bytes()).expect("write source");
    file
}

fn diwire() -> Command {
    Command::cargo_bin("diwire").expect("binary to build")
}

const SOURCE: &str = "import p \"my/pkg\"\nroot p.Main All\nreg A p.NewA\nlist All A\n";

#[test]
fn test_parse_default_format_is_dsl() {
    let file = diwire_file(SOURCE);

    diwire()
        .arg("parse")
        .arg(file.path())
        .assert()
        .success()
        .stdout("import (\n    p \"my/pkg\"\n)\n\nroot p.Main All\n\nreg A p.NewA\nlist All A\n");
}

#[test]
fn test_parse_json() {
    let file = diwire_file(SOURCE);

    diwire()
        .args(["parse", "--format", "json"])
        .arg(file.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("\"resolve_to\": [\n        \"A\"\n      ]"));
}

#[test]
fn test_format_from_config_file() {
    let file = diwire_file(SOURCE);
    let mut config = tempfile::Builder::new()
        .suffix(".toml")
        .tempfile()
        .expect("temp config");
    writeln!(config, "[output]\nformat = \"tag\"").expect("write config");

    diwire()
        .arg("--config")
        .arg(config.path())
        .arg("parse")
        .arg(file.path())
        .assert()
        .success()
        .stdout(predicate::str::starts_with("<container>"));
}

#[test]
fn test_parse_error_exits_with_status_1() {
    let file = diwire_file("import \"p\"\nroot p\n");

    diwire()
        .arg("parse")
        .arg(file.path())
        .assert()
        .code(1)
        .stderr(predicate::str::contains(
            ":3:1: Got token 'EOF' but expected one of 'Period'",
        ));
}

#[test]
fn test_unknown_format() {
    let file = diwire_file(SOURCE);

    diwire()
        .args(["parse", "-f", "xml"])
        .arg(file.path())
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Error: Format 'xml' not found"));
}

#[test]
fn test_tokens() {
    let file = diwire_file("list A, B C");

    diwire()
        .arg("tokens")
        .arg(file.path())
        .assert()
        .success()
        .stdout("List\nIdent(A)\nComma\nIdent(B)\nIdent(C)\n");
}

#[test]
fn test_list_formats() {
    diwire()
        .arg("list-formats")
        .assert()
        .success()
        .stdout(predicate::str::contains("dsl").and(predicate::str::contains("yaml")));
}

#[test]
fn test_missing_file() {
    diwire()
        .args(["parse", "/definitely/not/here.diwire"])
        .assert()
        .code(1)
        .stderr(predicate::str::starts_with("Error: /definitely/not/here.diwire"));
}
