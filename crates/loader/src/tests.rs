use ohlc_core::{DType, Discard, Finding, OhlcError};

use crate::*;

const ROWS: &str = "\
1736208060,102228.0,102228.0,102228.0,102228.0,0.00114705
1736208120,102214.0,102225.0,102214.0,102215.0,0.42548035
1736208180,102214.0,102220.0,102214.0,102220.0,0.24356262
1736208240,102214.0,102214.0,102163.0,102163.0,0.03850259
";

const HEADER: &str = "timestamp,open,high,low,close,volume\n";

fn read(text: &str, opts: &ReadOptions) -> Result<ohlc_core::Frame, LoadError> {
    read_ohlc(text.as_bytes(), opts, &mut Discard)
}

#[test]
fn reads_without_header() {
    let frame = read(ROWS, &ReadOptions::default()).unwrap();

    assert_eq!(frame.height(), 4);
    assert_eq!(frame.names(), ["timestamp", "open", "high", "low", "close", "volume"]);
    assert_eq!(frame.dtype("timestamp"), Some(DType::Int64));
    assert_eq!(frame.dtype("close"), Some(DType::Float32));
    assert_eq!(frame.time_index().unwrap()[0], 1736208060);
    assert!(frame.is_time_ordered());
}

#[test]
fn detected_and_explicit_header_read_the_same() {
    let plain = read(ROWS, &ReadOptions::default()).unwrap();
    let text = format!("{HEADER}{ROWS}");

    let auto = read(&text, &ReadOptions::default()).unwrap();
    let explicit = read(&text, &ReadOptions::default().with_header(Header::Row(0))).unwrap();

    assert_eq!(auto, plain);
    assert_eq!(explicit, plain);
}

#[test]
fn header_past_the_end_is_empty() {
    let text = format!("{HEADER}{ROWS}");
    let err = read(&text, &ReadOptions::default().with_header(Header::Row(5))).unwrap_err();
    assert!(matches!(err.as_ohlc(), Some(OhlcError::EmptyTable)));
}

#[test]
fn empty_input_is_an_error() {
    assert!(matches!(
        read("", &ReadOptions::default()).unwrap_err().as_ohlc(),
        Some(OhlcError::EmptyTable)
    ));
}

#[test]
fn bad_cell_names_row_and_column() {
    let text = "1736208060,102228.0,abc,102228.0,102228.0,0.1\n";
    let err = read(text, &ReadOptions::default().with_header(Header::None)).unwrap_err();

    match err {
        LoadError::Parse { row, column, .. } => {
            assert_eq!(row, 0);
            assert_eq!(column, "high");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn empty_cells_are_nulls() {
    let text = "1736208060,1,2,0,,5\n1736208120,1,2,0,1.5,5\n";
    let frame = read(text, &ReadOptions::default()).unwrap();

    assert_eq!(frame.column("close").unwrap().null_count(), 1);
}

#[test]
fn rows_are_sorted_by_timestamp() {
    let text = "1736208120,2,2,2,2,2\n1736208060,1,1,1,1,1\n";
    let frame = read(text, &ReadOptions::default()).unwrap();

    assert_eq!(frame.timestamps().unwrap(), vec![Some(1736208060), Some(1736208120)]);
    assert_eq!(frame.value("open", 0), Some(1.0));
}

#[test]
fn timeframe_is_checked_on_load() {
    let ok = read(ROWS, &ReadOptions::default().with_timeframe("1m"));
    assert!(ok.is_ok());

    let err = read(ROWS, &ReadOptions::default().with_timeframe("30s")).unwrap_err();
    assert_eq!(
        err.to_string(),
        "Requested timeframe (30s) should not be smaller than time step (60s)."
    );

    let err = read(ROWS, &ReadOptions::default().with_timeframe("1x")).unwrap_err();
    assert_eq!(err.to_string(), "Invalid timeframe format: 1x");
}

#[test]
fn non_multiple_timeframe_only_warns() {
    let mut sink: Vec<Finding> = Vec::new();
    let opts = ReadOptions::default().with_timeframe("70s");

    let frame = read_ohlc(ROWS.as_bytes(), &opts, &mut sink).unwrap();

    assert_eq!(frame.height(), 4);
    assert_eq!(
        sink,
        vec![Finding::NonMultipleTimeframe {
            requested: 70,
            base: 60
        }]
    );
}

#[test]
fn gzip_paths_are_not_supported() {
    let mut sink: Vec<Finding> = Vec::new();
    let err = read_ohlc_csv("data.csv.gz", &ReadOptions::default(), &mut sink).unwrap_err();
    assert!(matches!(err.as_ohlc(), Some(OhlcError::NotSupported(_))));
}

#[test]
fn missing_file_is_io_error() {
    let mut sink: Vec<Finding> = Vec::new();
    let err = read_ohlc_csv("no/such/file.csv", &ReadOptions::default(), &mut sink).unwrap_err();
    assert!(matches!(err, LoadError::Io(_)));
}

#[test]
fn written_csv_reads_back() {
    let frame = read(ROWS, &ReadOptions::default()).unwrap();

    let mut out = Vec::new();
    write_ohlc(&frame, &mut out).unwrap();
    let text = String::from_utf8(out).unwrap();

    assert!(text.starts_with(HEADER));
    assert_eq!(read(&text, &ReadOptions::default()).unwrap(), frame);
}
