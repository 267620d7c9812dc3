use crate::args::InputSource;

use std::{
    fs::File,
    io::{self, Read},
};

use anyhow::{Context, Result};
use csv::{Reader, ReaderBuilder, Trim};

/// Builds a reader for command records. Rows may leave out trailing empty fields.
pub fn build_csv_reader(source: InputSource) -> Result<Reader<Box<dyn Read>>> {
    let input: Box<dyn Read> = match source {
        InputSource::File(path) => Box::new(
            File::open(&path).with_context(|| format!("Couldn't open input file {path:?}"))?,
        ),
        InputSource::Stdin => Box::new(io::stdin()),
    };

    let reader = ReaderBuilder::new()
        .trim(Trim::All)
        .flexible(true)
        .from_reader(input);

    return Ok(reader);
}
