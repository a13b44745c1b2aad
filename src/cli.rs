use std::path::PathBuf;

use clap::Parser;

#[derive(Debug, Parser)]
#[command(
    author,
    version,
    about = "Convert a CSV of contacts into vCard files",
    long_about = None
)]
pub struct Cli {
    /// CSV file with one contact per row
    pub infile: PathBuf,
    /// Directory that receives one <uuid>.vcf file per row
    #[arg(long, default_value = ".")]
    pub outdir: PathBuf,
    /// CSV delimiter character (supports ';', ',', 'tab', '|')
    #[arg(long, value_parser = parse_delimiter, default_value = ";")]
    pub delimiter: u8,
    /// Read, map and serialize every row without writing any file
    #[arg(long = "dry-run")]
    pub dry_run: bool,
}

pub fn parse_delimiter(value: &str) -> Result<u8, String> {
    match value {
        "tab" | "\t" => Ok(b'\t'),
        "comma" | "," => Ok(b','),
        "|" | "pipe" => Ok(b'|'),
        ";" | "semicolon" => Ok(b';'),
        other => {
            let mut chars = other.chars();
            let first = chars
                .next()
                .ok_or_else(|| "Delimiter cannot be empty".to_string())?;
            if chars.next().is_some() {
                return Err("Delimiter must be a single character".to_string());
            }
            if !first.is_ascii() {
                return Err("Delimiter must be ASCII".to_string());
            }
            Ok(first as u8)
        }
    }
}
