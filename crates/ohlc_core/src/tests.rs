use crate::candle::Candle;
use crate::column::Column;
use crate::error::OhlcError;
use crate::frame::Frame;
use crate::sink::{Finding, Sink};
use crate::types::DType;

fn sample() -> Frame {
    Frame::from_candles(&[
        Candle::new(180, 3.0, 4.0, 2.0, 3.5, 30.0),
        Candle::new(60, 1.0, 2.0, 0.5, 1.5, 10.0),
        Candle::new(120, 2.0, 3.0, 1.0, 2.5, 20.0),
    ])
}

#[test]
fn from_candles_has_ohlc_schema() {
    let f = sample();
    assert_eq!(f.height(), 3);
    assert_eq!(f.names(), vec!["timestamp", "open", "high", "low", "close", "volume"]);
    assert_eq!(f.dtype("timestamp"), Some(DType::Int64));
    assert_eq!(f.dtype("close"), Some(DType::Float64));
}

#[test]
fn missing_column_is_reported_by_name() {
    let f = sample().without_column("timestamp");
    let err = f.timestamps().unwrap_err();
    assert_eq!(err, OhlcError::MissingColumn("timestamp".into()));
    assert_eq!(err.to_string(), "timestamp column not found in frame.");
}

#[test]
fn text_timestamps_are_a_type_mismatch() {
    let f = sample()
        .with_column("timestamp", Column::Utf8(vec![Some("a".into()); 3]))
        .unwrap();
    assert!(matches!(f.timestamps(), Err(OhlcError::TypeMismatch(_))));
}

#[test]
fn with_column_rejects_length_mismatch() {
    let err = sample()
        .with_column("extra", Column::Int64(vec![Some(1)]))
        .unwrap_err();
    assert!(matches!(err, OhlcError::LengthMismatch { expected: 3, actual: 1, .. }));
}

#[test]
fn take_moves_time_index_with_rows() {
    let f = sample().with_time_index(vec![180, 60, 120]).unwrap();
    assert!(!f.is_time_ordered());

    let sorted = f.take(&[1, 2, 0]);
    assert_eq!(sorted.time_index(), Some(&[60, 120, 180][..]));
    assert!(sorted.is_time_ordered());
    assert_eq!(sorted.value("open", 0), Some(1.0));
}

#[test]
fn cast_keeps_nulls_and_narrows_floats() {
    let c = Column::Float64(vec![Some(1.5), None, Some(f64::NAN)]);
    assert_eq!(c.null_count(), 2);

    assert_eq!(c.cast(DType::Float32), Column::Float32(vec![Some(1.5), None, None]));
    assert_eq!(c.cast(DType::Int64), Column::Int64(vec![Some(1), None, None]));

    let ints = Column::Int64(vec![Some(1_736_208_060), Some(i64::MAX)]);
    assert_eq!(ints.cast(DType::Int32), Column::Int32(vec![Some(1_736_208_060), None]));
}

#[test]
fn text_cast_parses_or_nulls() {
    let c = Column::Utf8(vec![Some(" 42 ".into()), Some("x".into()), None]);
    assert_eq!(c.cast(DType::Int64), Column::Int64(vec![Some(42), None, None]));
}

#[test]
fn vec_sink_collects_findings() {
    let mut sink: Vec<Finding> = Vec::new();
    sink.report(Finding::NonMultipleTimeframe {
        requested: 25,
        base: 10,
    });

    assert_eq!(
        sink[0].to_string(),
        "Note: Requested timeframe (25s) is not a multiple of the time step (10s); values may not be suitable."
    );
}

#[test]
fn replaced_timestamps_invalidate_the_index() {
    let f = sample().take(&[1, 2, 0]).with_time_index(vec![60, 120, 180]).unwrap();
    assert!(f.is_time_ordered());

    let stale = f
        .with_column("timestamp", Column::Int64(vec![Some(180), Some(60), Some(120)]))
        .unwrap();
    assert!(!stale.is_time_ordered());

    // индекс упорядочен, но не совпадает с колонкой
    let mismatched = sample().with_time_index(vec![1, 2, 3]).unwrap();
    assert!(!mismatched.is_time_ordered());
}

#[test]
fn float_timestamps_read_as_integers() {
    let f = sample()
        .with_column("timestamp", Column::Float64(vec![Some(180.0), None, Some(f64::NAN)]))
        .unwrap();
    assert_eq!(f.timestamps().unwrap(), vec![Some(180), None, None]);

    let f = sample()
        .with_column("timestamp", Column::Float32(vec![Some(60.25), Some(120.0), Some(180.0)]))
        .unwrap();
    assert_eq!(f.timestamps().unwrap_err(), OhlcError::fractional_timestamps());
}

#[test]
fn value_reads_one_cell_of_any_numeric_column() {
    let f = sample()
        .with_column("n", Column::Int32(vec![Some(7), None, Some(9)]))
        .unwrap()
        .with_column("x", Column::Float32(vec![Some(0.5), Some(f32::NAN), None]))
        .unwrap()
        .with_column("s", Column::Utf8(vec![Some("1".into()); 3]))
        .unwrap();

    assert_eq!(f.value("timestamp", 1), Some(60.0));
    assert_eq!(f.value("n", 2), Some(9.0));
    assert_eq!(f.value("n", 1), None);
    assert_eq!(f.value("x", 0), Some(0.5));
    assert_eq!(f.value("x", 1), None);
    assert_eq!(f.value("s", 0), None);
    assert_eq!(f.value("close", 3), None);
    assert_eq!(f.value("nope", 0), None);
}
