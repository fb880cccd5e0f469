use std::fs::File;
use std::io::Read;
use std::path::Path;

use ohlc_core::types::OHLC_COLUMNS;
use ohlc_core::{Column, Frame, OhlcError, Sink};

use crate::error::LoadError;
use crate::options::{Header, ReadOptions};

#[derive(Debug, serde::Deserialize)]
struct OhlcRow {
    timestamp: i64,
    open: Option<f32>,
    high: Option<f32>,
    low: Option<f32>,
    close: Option<f32>,
    volume: Option<f32>,
}

/// Read an OHLC CSV file.
///
/// `.gz` не поддерживается: в стеке нет gzip кодека.
pub fn read_ohlc_csv(
    path: impl AsRef<Path>,
    opts: &ReadOptions,
    sink: &mut impl Sink,
) -> Result<Frame, LoadError> {
    let path = path.as_ref();
    if path.extension().is_some_and(|ext| ext.eq_ignore_ascii_case("gz")) {
        return Err(OhlcError::NotSupported(format!(
            "Compressed input is not supported: {}",
            path.display()
        ))
        .into());
    }

    tracing::debug!(path = %path.display(), "reading OHLC csv");
    read_ohlc(File::open(path)?, opts, sink)
}

/// Read OHLC rows from any reader, sort them by time and build the time index.
pub fn read_ohlc<R: Read>(
    reader: R,
    opts: &ReadOptions,
    sink: &mut impl Sink,
) -> Result<Frame, LoadError> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(false)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let records = rdr.records().collect::<Result<Vec<_>, _>>()?;
    let data_start = match opts.header {
        Header::None => 0,
        Header::Row(n) => n + 1,
        Header::Auto => match records.first() {
            Some(first) if first.get(0).is_some_and(|c| c.parse::<f64>().is_err()) => 1,
            _ => 0,
        },
    };

    let mut rows = Vec::new();
    for (i, record) in records.iter().enumerate().skip(data_start) {
        let row: OhlcRow = record.deserialize(None).map_err(|err| parse_error(i, err))?;
        rows.push(row);
    }

    if rows.is_empty() {
        return Err(OhlcError::EmptyTable.into());
    }

    // стабильная сортировка: дубликаты сохраняют порядок файла
    rows.sort_by_key(|r| r.timestamp);

    let frame = Frame::from_columns(vec![
        (OHLC_COLUMNS[0], Column::Int64(rows.iter().map(|r| Some(r.timestamp)).collect())),
        (OHLC_COLUMNS[1], Column::Float32(rows.iter().map(|r| r.open).collect())),
        (OHLC_COLUMNS[2], Column::Float32(rows.iter().map(|r| r.high).collect())),
        (OHLC_COLUMNS[3], Column::Float32(rows.iter().map(|r| r.low).collect())),
        (OHLC_COLUMNS[4], Column::Float32(rows.iter().map(|r| r.close).collect())),
        (OHLC_COLUMNS[5], Column::Float32(rows.iter().map(|r| r.volume).collect())),
    ])?
    .with_time_index(rows.iter().map(|r| r.timestamp).collect())?;

    if let Some(tf) = &opts.timeframe {
        let requested = timeframe::parse_timeframe(tf)?;
        let step = integrity::infer_native_interval(&frame)?;
        timeframe::validate_timeframe(step, requested, sink)?;
    }

    tracing::debug!(rows = frame.height(), "OHLC csv loaded");
    Ok(frame)
}

fn parse_error(row: usize, err: csv::Error) -> LoadError {
    let column = match err.kind() {
        csv::ErrorKind::Deserialize { err, .. } => err
            .field()
            .and_then(|f| OHLC_COLUMNS.get(f as usize))
            .map_or("?", |c| *c),
        _ => "?",
    };

    LoadError::Parse {
        row: row as u64,
        column: column.to_string(),
        reason: err.to_string(),
    }
}
