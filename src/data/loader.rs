use std::path::Path;

use anyhow::{anyhow, Context, Result};
use calamine::{open_workbook, Data, Reader, Xlsx};
use thiserror::Error;

use super::model::{CellValue, Dataset};

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Why a file could not be turned into a [`Dataset`].  Both variants skip
/// the file and let the run continue; `Unsupported` is expected for stray
/// selections, `Read` means the content itself is bad.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("unsupported file extension: .{0}")]
    Unsupported(String),
    #[error(transparent)]
    Read(#[from] anyhow::Error),
}

/// Load a tabular file.  Dispatch by extension.
///
/// Supported formats:
/// * `.csv`  – header row, comma-separated
/// * `.xlsx` – first worksheet, first row is the header
pub fn load_file(path: &Path) -> Result<Dataset, LoadError> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    match ext.as_str() {
        "csv" => Ok(load_csv(path)?),
        "xlsx" => Ok(load_xlsx(path)?),
        other => Err(LoadError::Unsupported(other.to_string())),
    }
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("upload")
        .to_string()
}

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

fn load_csv(path: &Path) -> Result<Dataset> {
    let mut reader = csv::Reader::from_path(path).context("opening CSV")?;
    let columns: Vec<String> = reader
        .headers()
        .context("reading CSV headers")?
        .iter()
        .map(|h| h.to_string())
        .collect();

    let mut rows = Vec::new();
    for (row_no, result) in reader.records().enumerate() {
        let record = result.with_context(|| format!("CSV row {row_no}"))?;
        rows.push(record.iter().map(guess_cell_type).collect());
    }

    Ok(Dataset::new(file_name(path), columns, rows))
}

/// Untyped CSV text → the closest [`CellValue`] dtype.
fn guess_cell_type(s: &str) -> CellValue {
    if s.is_empty() {
        return CellValue::Empty;
    }
    if let Ok(i) = s.parse::<i64>() {
        return CellValue::Integer(i);
    }
    if let Ok(f) = s.parse::<f64>() {
        return CellValue::Float(f);
    }
    if s == "true" || s == "false" {
        return CellValue::Bool(s == "true");
    }
    CellValue::Text(s.to_string())
}

// ---------------------------------------------------------------------------
// XLSX loader
// ---------------------------------------------------------------------------

fn load_xlsx(path: &Path) -> Result<Dataset> {
    let mut workbook: Xlsx<_> = open_workbook(path).context("opening xlsx file")?;
    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| anyhow!("workbook has no worksheets"))?
        .context("reading worksheet range")?;

    let mut row_iter = range.rows();
    let columns: Vec<String> = match row_iter.next() {
        Some(header) => header.iter().map(|c| c.to_string()).collect(),
        None => return Ok(Dataset::new(file_name(path), Vec::new(), Vec::new())),
    };

    let rows: Vec<Vec<CellValue>> = row_iter
        .map(|row| row.iter().map(convert_xlsx_cell).collect())
        .collect();

    Ok(Dataset::new(file_name(path), columns, rows))
}

fn convert_xlsx_cell(cell: &Data) -> CellValue {
    match cell {
        Data::Empty => CellValue::Empty,
        Data::String(s) if s.is_empty() => CellValue::Empty,
        Data::String(s) => CellValue::Text(s.clone()),
        Data::Int(i) => CellValue::Integer(*i),
        // Spreadsheets store most numbers as floats; collapse whole ones so
        // their textual form carries no trailing `.0`.
        Data::Float(f) if f.fract() == 0.0 && f.abs() < i64::MAX as f64 => {
            CellValue::Integer(*f as i64)
        }
        Data::Float(f) => CellValue::Float(*f),
        Data::Bool(b) => CellValue::Bool(*b),
        Data::DateTime(_) => CellValue::Text(cell.to_string()),
        Data::DateTimeIso(s) | Data::DurationIso(s) => CellValue::Text(s.clone()),
        Data::Error(_) => CellValue::Empty,
    }
}
