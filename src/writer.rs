use std::path::{Path, PathBuf};

use log::debug;

use crate::{error::Result, io_utils};

/// Writes one serialized card to a new `<uuid>.vcf` file in `outdir`.
pub fn write_card(card: &str, outdir: &Path) -> Result<PathBuf> {
    let path = io_utils::card_path(outdir);
    io_utils::write_file(&path, card)?;
    debug!("Wrote {path:?}");
    Ok(path)
}

/// Writes every card in order, stopping at the first failure.
///
/// Files written before a failure are left in place.
pub fn write_cards(cards: &[String], outdir: &Path) -> Result<Vec<PathBuf>> {
    cards.iter().map(|card| write_card(card, outdir)).collect()
}
