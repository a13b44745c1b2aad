pub mod cli;
pub mod columns;
pub mod contact;
pub mod error;
pub mod io_utils;
pub mod mapper;
pub mod vcard;
pub mod writer;

use std::{
    env,
    path::{Path, PathBuf},
    sync::OnceLock,
};

use anyhow::{Context, Result};
use clap::Parser;
use log::{LevelFilter, info};

pub use crate::contact::{ContactRecord, read_contacts};
pub use crate::error::ConvertError;
pub use crate::mapper::map_contact;
pub use crate::writer::write_card;

use crate::cli::Cli;

static LOGGER: OnceLock<()> = OnceLock::new();

fn init_logging() {
    LOGGER.get_or_init(|| {
        let mut builder = env_logger::Builder::from_env(env_logger::Env::default());
        if env::var("RUST_LOG").is_err() {
            builder.filter_module("csv2vcard", LevelFilter::Info);
        }
        let _ = builder.format_timestamp_millis().try_init();
    });
}

#[derive(Debug, Clone)]
pub struct ConvertOptions {
    pub delimiter: u8,
    /// Serialize every card but write nothing.
    pub dry_run: bool,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        ConvertOptions {
            delimiter: io_utils::DEFAULT_CSV_DELIMITER,
            dry_run: false,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct ConvertSummary {
    pub rows: usize,
    pub written: Vec<PathBuf>,
}

/// Converts every row of `input` into a `<uuid>.vcf` file under `outdir`.
///
/// All rows are read and serialized before the first file is written, so a
/// schema or parse error leaves `outdir` untouched. A write failure aborts
/// the run and keeps the files already written.
pub fn convert(
    input: &Path,
    outdir: &Path,
    options: &ConvertOptions,
) -> Result<ConvertSummary, ConvertError> {
    let contacts = read_contacts(input, options.delimiter)?;
    let cards: Vec<String> = contacts
        .iter()
        .map(|contact| vcard::serialize_single(&map_contact(contact)))
        .collect();

    let written = if options.dry_run {
        Vec::new()
    } else {
        writer::write_cards(&cards, outdir)?
    };

    Ok(ConvertSummary {
        rows: contacts.len(),
        written,
    })
}

pub fn run() -> Result<()> {
    init_logging();
    let cli = Cli::parse();
    info!(
        "Converting '{}' into vCards under '{}' (delimiter '{}')",
        cli.infile.display(),
        cli.outdir.display(),
        printable_delimiter(cli.delimiter)
    );
    let options = ConvertOptions {
        delimiter: cli.delimiter,
        dry_run: cli.dry_run,
    };
    let summary = convert(&cli.infile, &cli.outdir, &options)
        .with_context(|| format!("Converting {:?}", cli.infile))?;

    if options.dry_run {
        info!("Dry run: {} card(s) serialized, none written", summary.rows);
    } else {
        info!(
            "Wrote {} vCard file(s) to {:?}",
            summary.written.len(),
            cli.outdir
        );
    }
    Ok(())
}

pub(crate) fn printable_delimiter(delimiter: u8) -> String {
    match delimiter {
        b'\t' => "\\t".to_string(),
        other => (other as char).to_string(),
    }
}
