use crate::output::StatementLine;

use anyhow::Result;
use csv::Writer;

pub fn build_csv_writer() -> Writer<Vec<u8>> {
    return Writer::from_writer(vec![]);
}

pub fn write_to_string(writer: Writer<Vec<u8>>) -> Result<String> {
    let utf8 = writer.into_inner()?;
    let string = String::from_utf8(utf8)?;
    return Ok(string);
}

/// Serializes statement lines into one CSV table, header included
pub fn write_statements(lines: &[StatementLine]) -> Result<String> {
    let mut wtr = build_csv_writer();

    for line in lines {
        log::debug!("Serializing statement line: {line:?}");
        wtr.serialize(line)?;
    }

    write_to_string(wtr)
}
