//! Parquet storage for trade ticks and pivots

use arrow::array::{ArrayRef, StringArray, TimestampMicrosecondArray, UInt64Array};
use arrow::datatypes::{DataType, Field, Schema, TimeUnit};
use arrow::record_batch::RecordBatch;
use chrono::{DateTime, NaiveDate, Utc};
use parquet::arrow::ArrowWriter;
use parquet::basic::Compression;
use parquet::file::properties::WriterProperties;
use rust_decimal::Decimal;
use std::fs::{self, File};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::session::TradeTick;

/// Trade tick schema fields
pub fn trade_tick_schema() -> Schema {
    Schema::new(vec![
        Field::new(
            "timestamp",
            DataType::Timestamp(TimeUnit::Microsecond, Some("UTC".into())),
            false,
        ),
        Field::new("symbol", DataType::Utf8, false),
        Field::new("price", DataType::Utf8, false), // Store as string for Decimal precision
        Field::new("size", DataType::Utf8, false),
    ])
}

/// Pivot schema fields
pub fn pivot_schema() -> Schema {
    Schema::new(vec![
        Field::new(
            "timestamp",
            DataType::Timestamp(TimeUnit::Microsecond, Some("UTC".into())),
            false,
        ),
        Field::new("symbol", DataType::Utf8, false),
        Field::new("index", DataType::UInt64, false),
        Field::new("price", DataType::Utf8, false),
    ])
}

/// A detected pivot with the tick it sits on
#[derive(Debug, Clone, PartialEq)]
pub struct PivotRecord {
    pub timestamp: DateTime<Utc>,
    pub symbol: String,
    /// Position within the analyzed session series
    pub index: usize,
    pub price: Decimal,
}

impl PivotRecord {
    /// Build records for `indices` into a prepared session's ticks
    pub fn from_session(ticks: &[TradeTick], indices: &[usize]) -> Vec<Self> {
        indices
            .iter()
            .filter_map(|&i| ticks.get(i).map(|t| (i, t)))
            .map(|(index, t)| PivotRecord {
                timestamp: t.timestamp,
                symbol: t.symbol.clone(),
                index,
                price: t.price,
            })
            .collect()
    }
}

fn writer_props() -> WriterProperties {
    WriterProperties::builder()
        .set_compression(Compression::SNAPPY)
        .build()
}

/// Parquet writer for tick and pivot files
pub struct TickWriter {
    output_dir: PathBuf,
}

impl TickWriter {
    /// Create a new writer rooted at `output_dir`
    pub fn new(output_dir: PathBuf) -> Self {
        Self { output_dir }
    }

    /// Ensure output directory exists
    pub fn ensure_dir(&self) -> anyhow::Result<()> {
        fs::create_dir_all(&self.output_dir)?;
        Ok(())
    }

    /// File path for a symbol-session
    pub fn file_path(&self, prefix: &str, symbol: &str, date: NaiveDate) -> PathBuf {
        let filename = format!("{}_{}_{}.parquet", prefix, symbol, date.format("%Y%m%d"));
        self.output_dir.join(filename)
    }

    /// Write trade ticks to a Parquet file
    pub fn write_ticks(&self, path: &Path, ticks: &[TradeTick]) -> anyhow::Result<()> {
        if ticks.is_empty() {
            return Ok(());
        }

        self.ensure_dir()?;

        let schema = Arc::new(trade_tick_schema());
        let file = File::create(path)?;
        let mut writer = ArrowWriter::try_new(file, schema.clone(), Some(writer_props()))?;

        let timestamps: Vec<i64> = ticks
            .iter()
            .map(|t| t.timestamp.timestamp_micros())
            .collect();
        let symbols: Vec<&str> = ticks.iter().map(|t| t.symbol.as_str()).collect();
        let prices: Vec<String> = ticks.iter().map(|t| t.price.to_string()).collect();
        let sizes: Vec<String> = ticks.iter().map(|t| t.size.to_string()).collect();

        let batch = RecordBatch::try_new(
            schema,
            vec![
                Arc::new(TimestampMicrosecondArray::from(timestamps).with_timezone("UTC"))
                    as ArrayRef,
                Arc::new(StringArray::from(symbols)) as ArrayRef,
                Arc::new(StringArray::from(
                    prices.iter().map(|s| s.as_str()).collect::<Vec<_>>(),
                )) as ArrayRef,
                Arc::new(StringArray::from(
                    sizes.iter().map(|s| s.as_str()).collect::<Vec<_>>(),
                )) as ArrayRef,
            ],
        )?;

        writer.write(&batch)?;
        writer.close()?;

        tracing::debug!(path = ?path, count = ticks.len(), "Wrote trade ticks to Parquet");

        Ok(())
    }

    /// Write pivot records to a Parquet file
    pub fn write_pivots(&self, path: &Path, pivots: &[PivotRecord]) -> anyhow::Result<()> {
        if pivots.is_empty() {
            return Ok(());
        }

        self.ensure_dir()?;

        let schema = Arc::new(pivot_schema());
        let file = File::create(path)?;
        let mut writer = ArrowWriter::try_new(file, schema.clone(), Some(writer_props()))?;

        let timestamps: Vec<i64> = pivots
            .iter()
            .map(|p| p.timestamp.timestamp_micros())
            .collect();
        let symbols: Vec<&str> = pivots.iter().map(|p| p.symbol.as_str()).collect();
        let indices: Vec<u64> = pivots.iter().map(|p| p.index as u64).collect();
        let prices: Vec<String> = pivots.iter().map(|p| p.price.to_string()).collect();

        let batch = RecordBatch::try_new(
            schema,
            vec![
                Arc::new(TimestampMicrosecondArray::from(timestamps).with_timezone("UTC"))
                    as ArrayRef,
                Arc::new(StringArray::from(symbols)) as ArrayRef,
                Arc::new(UInt64Array::from(indices)) as ArrayRef,
                Arc::new(StringArray::from(
                    prices.iter().map(|s| s.as_str()).collect::<Vec<_>>(),
                )) as ArrayRef,
            ],
        )?;

        writer.write(&batch)?;
        writer.close()?;

        tracing::debug!(path = ?path, count = pivots.len(), "Wrote pivots to Parquet");

        Ok(())
    }
}

/// Reader for trade tick Parquet files
pub struct TickReader {
    path: PathBuf,
}

impl TickReader {
    /// Create a new reader for a Parquet file
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Read trade ticks in file order
    pub fn read_ticks(&self) -> anyhow::Result<Vec<TradeTick>> {
        use parquet::arrow::arrow_reader::ParquetRecordBatchReaderBuilder;
        use std::str::FromStr;

        let file = File::open(&self.path)?;
        let builder = ParquetRecordBatchReaderBuilder::try_new(file)?;
        let reader = builder.build()?;

        let mut ticks = Vec::new();

        for batch_result in reader {
            let batch = batch_result?;

            let timestamps = batch
                .column(0)
                .as_any()
                .downcast_ref::<TimestampMicrosecondArray>()
                .ok_or_else(|| anyhow::anyhow!("Invalid timestamp column"))?;

            let symbols = batch
                .column(1)
                .as_any()
                .downcast_ref::<StringArray>()
                .ok_or_else(|| anyhow::anyhow!("Invalid symbol column"))?;

            let prices = batch
                .column(2)
                .as_any()
                .downcast_ref::<StringArray>()
                .ok_or_else(|| anyhow::anyhow!("Invalid price column"))?;

            let sizes = batch
                .column(3)
                .as_any()
                .downcast_ref::<StringArray>()
                .ok_or_else(|| anyhow::anyhow!("Invalid size column"))?;

            for i in 0..batch.num_rows() {
                let timestamp = DateTime::from_timestamp_micros(timestamps.value(i))
                    .ok_or_else(|| anyhow::anyhow!("Invalid timestamp"))?;

                ticks.push(TradeTick {
                    timestamp,
                    symbol: symbols.value(i).to_string(),
                    price: Decimal::from_str(prices.value(i))?,
                    size: Decimal::from_str(sizes.value(i))?,
                });
            }
        }

        tracing::debug!(path = ?self.path, count = ticks.len(), "Read trade ticks from Parquet");

        Ok(ticks)
    }

    /// Get the file path
    pub fn path(&self) -> &Path {
        &self.path
    }
}
