#![allow(dead_code)]

use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use csv2vcard::columns::required_columns;
use tempfile::{TempDir, tempdir};

/// Scratch directory helper that cleans up files automatically on drop.
pub struct TestWorkspace {
    temp_dir: TempDir,
}

impl TestWorkspace {
    /// Creates a fresh scratch directory for the current test case.
    pub fn new() -> Self {
        Self {
            temp_dir: tempdir().expect("temp dir"),
        }
    }

    /// Returns the root path for all files owned by this workspace.
    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Writes `contents` into a file under the workspace and returns the path.
    pub fn write(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.temp_dir.path().join(name);
        let mut file = File::create(&path).expect("create temp file");
        file.write_all(contents.as_bytes())
            .expect("write temp file contents");
        path
    }

    /// Creates an empty subdirectory and returns its path.
    pub fn dir(&self, name: &str) -> PathBuf {
        let path = self.temp_dir.path().join(name);
        fs::create_dir_all(&path).expect("create subdirectory");
        path
    }
}

/// Renders a full-schema contact CSV, one row per slice of `(column, value)`.
pub fn contacts_csv(rows: &[&[(&str, &str)]]) -> String {
    let headers = required_columns();
    let mut text = headers.join(";");
    text.push('\n');
    for row in rows {
        let values: Vec<&str> = headers
            .iter()
            .map(|header| {
                row.iter()
                    .find(|(name, _)| name == header)
                    .map(|(_, value)| *value)
                    .unwrap_or("")
            })
            .collect();
        text.push_str(&values.join(";"));
        text.push('\n');
    }
    text
}

/// Lists the `.vcf` files in `dir`.
pub fn vcf_files(dir: &Path) -> Vec<PathBuf> {
    let mut files: Vec<PathBuf> = fs::read_dir(dir)
        .expect("read output dir")
        .map(|entry| entry.expect("dir entry").path())
        .filter(|path| path.extension().is_some_and(|ext| ext == "vcf"))
        .collect();
    files.sort();
    files
}

/// One parsed content line: name, `TYPE` parameter and raw value.
#[derive(Debug, Clone, PartialEq)]
pub struct Property {
    pub name: String,
    pub kind: Option<String>,
    pub value: String,
}

impl Property {
    /// Splits an escaped value on unescaped `separator` and unescapes each part.
    pub fn components(&self, separator: char) -> Vec<String> {
        let mut parts = vec![String::new()];
        let mut chars = self.value.chars();
        while let Some(c) = chars.next() {
            match c {
                '\\' => match chars.next() {
                    Some('n') | Some('N') => parts.last_mut().unwrap().push('\n'),
                    Some(other) => parts.last_mut().unwrap().push(other),
                    None => {}
                },
                c if c == separator => parts.push(String::new()),
                c => parts.last_mut().unwrap().push(c),
            }
        }
        parts
    }

    /// The whole value unescaped as a single text.
    pub fn text(&self) -> String {
        self.components('\u{0}').remove(0)
    }
}

/// Minimal vCard reader: unfolds lines and splits name, TYPE and value.
pub fn parse_card(text: &str) -> Vec<Property> {
    let unfolded = text.replace("\r\n ", "");
    unfolded
        .split("\r\n")
        .filter(|line| !line.is_empty())
        .map(|line| {
            let (head, value) = split_head(line);
            let mut params = head.split(';');
            let name = params.next().unwrap_or_default().to_string();
            let kind = params
                .find_map(|param| param.strip_prefix("TYPE="))
                .map(|kind| kind.trim_matches('"').to_string());
            Property {
                name,
                kind,
                value: value.to_string(),
            }
        })
        .collect()
}

fn split_head(line: &str) -> (&str, &str) {
    let mut in_quotes = false;
    for (idx, c) in line.char_indices() {
        match c {
            '"' => in_quotes = !in_quotes,
            ':' if !in_quotes => return (&line[..idx], &line[idx + 1..]),
            _ => {}
        }
    }
    (line, "")
}

/// All properties named `name`.
pub fn properties<'a>(card: &'a [Property], name: &str) -> Vec<&'a Property> {
    card.iter().filter(|prop| prop.name == name).collect()
}

/// The single property named `name`.
pub fn property<'a>(card: &'a [Property], name: &str) -> &'a Property {
    let found = properties(card, name);
    assert_eq!(found.len(), 1, "expected exactly one {name} in {card:?}");
    found[0]
}
