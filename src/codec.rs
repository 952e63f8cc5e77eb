//! CSV codec for fixlet files
//!
//! The first line is a header whose content is not validated. Every line after
//! it must hold exactly [`Fixlet::FIELD_COUNT`] fields. Fields containing the
//! delimiter, a quote, or a newline are quoted with interior quotes doubled.
//!
//! # Examples
//!
//! ```
//! use fixlet::{Fixlet, codec};
//!
//! let fixlets = vec![Fixlet::new("site123", "fixlet001", "Fixlet 1", "High", "100")];
//! let mut buf = Vec::new();
//! codec::encode(&mut buf, &fixlets).unwrap();
//! assert_eq!(codec::decode(buf.as_slice()).unwrap(), fixlets);
//! ```

use std::io;

use crate::error::{Error, Result};
use crate::models::Fixlet;

/// Decode every fixlet from delimited text
///
/// A header-only (or empty) input yields an empty sequence. Nothing is
/// returned if any row is malformed.
pub fn decode<R: io::Read>(reader: R) -> Result<Vec<Fixlet>> {
    // Flexible so field counts are checked against the fixed width, not the header
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let mut fixlets = Vec::new();
    for result in reader.records() {
        let record = result.map_err(csv_error)?;
        let fixlet = Fixlet::from_fields(record.iter()).ok_or_else(|| Error::MalformedRecord {
            line: record.position().map_or(0, csv::Position::line),
            expected: Fixlet::FIELD_COUNT,
            found: record.len(),
        })?;
        fixlets.push(fixlet);
    }

    log::debug!("decoded {} fixlet(s)", fixlets.len());
    Ok(fixlets)
}

/// Encode the header row followed by one row per fixlet
///
/// Only fails if the underlying writer fails.
pub fn encode<W: io::Write>(writer: W, fixlets: &[Fixlet]) -> Result<()> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(writer);

    writer.write_record(Fixlet::HEADER).map_err(csv_error)?;
    for fixlet in fixlets {
        writer.write_record(fixlet.fields()).map_err(csv_error)?;
    }
    writer.flush()?;

    log::debug!("encoded {} fixlet(s)", fixlets.len());
    Ok(())
}

/// Collapse a csv error into the crate taxonomy
///
/// Everything the reader can report besides an I/O failure means the content
/// could not be read as text (e.g. invalid UTF-8).
fn csv_error(err: csv::Error) -> Error {
    let line = err.position().map(csv::Position::line);
    match err.into_kind() {
        csv::ErrorKind::Io(err) => Error::Io(err),
        kind => {
            let message = match line {
                Some(line) => format!("unreadable content on line {line}: {kind:?}"),
                None => format!("unreadable content: {kind:?}"),
            };
            Error::Io(io::Error::new(io::ErrorKind::InvalidData, message))
        }
    }
}
