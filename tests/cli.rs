mod common;

use std::fs;

use assert_cmd::Command;
use common::{TestWorkspace, contacts_csv, vcf_files};
use predicates::str::contains;

const ROWS: &[&[(&str, &str)]] = &[
    &[
        ("Family Name", "Doe"),
        ("Given Name", "Jane"),
        ("Name Prefix", "Ms."),
        ("Phone 1 - Type", "Mobile"),
        ("Phone 1 - Value", "555-1234"),
    ],
    &[("Family Name", "Roe"), ("Given Name", "Richard")],
];

#[test]
fn converts_rows_into_outdir() {
    let ws = TestWorkspace::new();
    let input = ws.write("contacts.csv", &contacts_csv(ROWS));
    let outdir = ws.dir("cards");

    Command::cargo_bin("csv2vcard")
        .expect("binary exists")
        .args([input.to_str().unwrap(), "--outdir", outdir.to_str().unwrap()])
        .assert()
        .success();

    let files = vcf_files(&outdir);
    assert_eq!(files.len(), 2);
    let texts: Vec<String> = files
        .iter()
        .map(|path| fs::read_to_string(path).expect("read card"))
        .collect();
    assert!(texts.iter().any(|text| text.contains("FN:Ms. Jane Doe\r\n")));
    assert!(texts.iter().any(|text| text.contains("FN: Richard Roe\r\n")));
}

#[test]
fn outdir_defaults_to_working_directory() {
    let ws = TestWorkspace::new();
    let input = ws.write("contacts.csv", &contacts_csv(ROWS));

    Command::cargo_bin("csv2vcard")
        .expect("binary exists")
        .current_dir(ws.path())
        .arg(input.to_str().unwrap())
        .assert()
        .success();

    assert_eq!(vcf_files(ws.path()).len(), 2);
}

#[test]
fn custom_delimiter_is_honoured() {
    let ws = TestWorkspace::new();
    let input = ws.write("contacts.csv", &contacts_csv(ROWS).replace(';', ","));
    let outdir = ws.dir("cards");

    Command::cargo_bin("csv2vcard")
        .expect("binary exists")
        .args([
            input.to_str().unwrap(),
            "--outdir",
            outdir.to_str().unwrap(),
            "--delimiter",
            "comma",
        ])
        .assert()
        .success();

    assert_eq!(vcf_files(&outdir).len(), 2);
}

#[test]
fn dry_run_leaves_outdir_empty() {
    let ws = TestWorkspace::new();
    let input = ws.write("contacts.csv", &contacts_csv(ROWS));
    let outdir = ws.dir("cards");

    Command::cargo_bin("csv2vcard")
        .expect("binary exists")
        .args([
            input.to_str().unwrap(),
            "--outdir",
            outdir.to_str().unwrap(),
            "--dry-run",
        ])
        .assert()
        .success();

    assert!(vcf_files(&outdir).is_empty());
}

#[test]
fn missing_input_exits_non_zero() {
    let ws = TestWorkspace::new();

    Command::cargo_bin("csv2vcard")
        .expect("binary exists")
        .args([
            ws.path().join("absent.csv").to_str().unwrap(),
            "--outdir",
            ws.path().to_str().unwrap(),
        ])
        .assert()
        .failure()
        .code(1)
        .stderr(contains("error:"))
        .stderr(contains("absent.csv"));
}

#[test]
fn missing_column_is_reported_and_nothing_written() {
    let ws = TestWorkspace::new();
    let text = contacts_csv(ROWS).replacen("Notes", "Comments", 1);
    let input = ws.write("contacts.csv", &text);
    let outdir = ws.dir("cards");

    Command::cargo_bin("csv2vcard")
        .expect("binary exists")
        .args([input.to_str().unwrap(), "--outdir", outdir.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(contains("missing required column(s): Notes"));

    assert!(vcf_files(&outdir).is_empty());
}

#[test]
fn missing_outdir_fails() {
    let ws = TestWorkspace::new();
    let input = ws.write("contacts.csv", &contacts_csv(ROWS));

    Command::cargo_bin("csv2vcard")
        .expect("binary exists")
        .args([
            input.to_str().unwrap(),
            "--outdir",
            ws.path().join("absent").to_str().unwrap(),
        ])
        .assert()
        .failure()
        .stderr(contains("cannot access"));
}
