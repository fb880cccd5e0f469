use std::fs::File;
use std::io::Write;
use std::path::Path;

use ohlc_core::Frame;

use crate::error::LoadError;

/// Write every column of `frame` with a header row; nulls become empty cells.
pub fn write_ohlc<W: Write>(frame: &Frame, writer: W) -> Result<(), LoadError> {
    let mut wtr = csv::Writer::from_writer(writer);
    wtr.write_record(frame.names())?;

    let columns: Vec<_> = frame.columns().map(|(_, c)| c).collect();
    for row in 0..frame.height() {
        wtr.write_record(columns.iter().map(|c| c.display(row).unwrap_or_default()))?;
    }
    wtr.flush()?;
    Ok(())
}

pub fn write_ohlc_csv(frame: &Frame, path: impl AsRef<Path>) -> Result<(), LoadError> {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    write_ohlc(frame, File::create(path)?)
}
