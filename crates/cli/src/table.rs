//! Per-shape tables via polars; the format follows the file extension.

use std::fs::{self, File};
use std::path::Path;

use anyhow::{bail, Context, Result};
use isohedral::api::TilingCase;
use polars::prelude::*;

use crate::batch::Row;

/// Columns: `line`, `cells`, `word`, `isohedral`, `first_case`, plus one
/// boolean column per tiling case when `classify` is set.
pub fn frame(rows: &[Row], classify: bool) -> Result<DataFrame> {
    let mut columns = vec![
        Series::new("line".into(), rows.iter().map(|r| r.line as u64).collect::<Vec<_>>()),
        Series::new("cells".into(), rows.iter().map(|r| r.cells as u32).collect::<Vec<_>>()),
        Series::new("word".into(), rows.iter().map(|r| r.word.as_str()).collect::<Vec<_>>()),
        Series::new("isohedral".into(), rows.iter().map(Row::isohedral).collect::<Vec<_>>()),
        Series::new(
            "first_case".into(),
            rows.iter()
                .map(|r| r.first_case().map(TilingCase::name))
                .collect::<Vec<_>>(),
        ),
    ];
    if classify {
        for case in TilingCase::ALL {
            columns.push(Series::new(
                case.name().into(),
                rows.iter().map(|r| r.cases.contains(&case)).collect::<Vec<_>>(),
            ));
        }
    }
    Ok(DataFrame::new(columns)?)
}

/// Writes `df` as CSV or Parquet depending on `path`'s extension.
pub fn write(df: &mut DataFrame, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating output dir {}", parent.display()))?;
        }
    }
    let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");
    if !matches!(ext, "csv" | "parquet") {
        bail!("unsupported table format '{}' (use .csv or .parquet)", path.display());
    }
    let mut file = File::create(path).with_context(|| format!("creating {}", path.display()))?;
    if ext == "csv" {
        CsvWriter::new(&mut file).finish(df)?;
    } else {
        ParquetWriter::new(&mut file).finish(df)?;
    }
    tracing::info!(out = %path.display(), rows = df.height(), cols = df.width(), "table written");
    Ok(())
}
