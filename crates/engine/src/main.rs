use std::io;

use anyhow::{Context, Result};
use chrono::DateTime;
use clap::Parser;

use engine::{TracingSink, logging, transform};
use loader::{Header, ReadOptions, read_ohlc_csv, write_ohlc, write_ohlc_csv};
use ohlc_core::{Column, Frame};
use returns::{ReturnParams, percentage_return};
use timeframe::{MINUTE_SECONDS, Timeframe};

#[derive(Parser, Debug)]
#[command(name = "resample", about = "Resample OHLC csv to a coarser timeframe")]
struct Args {
    #[arg(long)]
    input: String,
    /// `1h`, `4h30m`, или число базовых шагов
    #[arg(long)]
    timeframe: String,
    /// Input rows between emitted rows
    #[arg(long, default_value_t = 1)]
    step: u32,
    /// Output csv, stdout if omitted
    #[arg(long)]
    output: Option<String>,
    /// Header row index; auto-detected if omitted
    #[arg(long)]
    header_row: Option<usize>,
    /// Append `pct_return_{n}` over this many minutes
    #[arg(long)]
    future_return: Option<u32>,
}

fn fmt_ts(ts: Option<i64>) -> String {
    ts.and_then(|t| DateTime::from_timestamp(t, 0))
        .map(|d| d.to_rfc3339())
        .unwrap_or_else(|| "-".to_string())
}

fn with_future_return(frame: Frame, step_minutes: u32, minutes: u32) -> Result<Frame> {
    let close = frame.values("close")?;
    let series = percentage_return(&close, ReturnParams::new(step_minutes, minutes))
        .context("percentage return failed")?;
    let name = format!("pct_return_{minutes}");

    tracing::info!(indicator = %series.name, column = %name, "future return added");
    Ok(frame.with_column(name, Column::Float64(series.values))?)
}

fn main() -> Result<()> {
    logging::init();
    let args = Args::parse();

    let timeframe: Timeframe = args
        .timeframe
        .parse()
        .with_context(|| format!("bad timeframe: {}", args.timeframe))?;

    let opts = ReadOptions {
        header: args.header_row.map_or(Header::Auto, Header::Row),
        timeframe: None,
    };

    let mut sink = TracingSink;
    let input = read_ohlc_csv(&args.input, &opts, &mut sink)
        .with_context(|| format!("read {} failed", args.input))?;
    tracing::info!(rows = input.height(), path = %args.input, "loaded");

    let mut out = transform(&input, timeframe.clone(), args.step, &mut sink)
        .context("transform failed")?;

    if let Some(minutes) = args.future_return {
        let native = integrity::infer_native_interval(&input).context("native interval")?;
        let step_minutes = u32::try_from(i64::from(args.step) * native / MINUTE_SECONDS)
            .context("step does not fit in minutes")?;
        out = with_future_return(out, step_minutes, minutes)?;
    }

    let ts = out.timestamps().unwrap_or_default();
    tracing::info!(
        timeframe = %timeframe,
        step = args.step,
        rows = out.height(),
        from = %fmt_ts(ts.first().copied().flatten()),
        to = %fmt_ts(ts.last().copied().flatten()),
        "resampled"
    );

    match &args.output {
        Some(path) => write_ohlc_csv(&out, path).with_context(|| format!("write {path} failed"))?,
        None => write_ohlc(&out, io::stdout().lock()).context("write stdout failed")?,
    }

    Ok(())
}
