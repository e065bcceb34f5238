use std::fmt;
use std::path::Path;

// ---------------------------------------------------------------------------
// CellValue – a single cell of a tabular file
// ---------------------------------------------------------------------------

/// A dynamically-typed cell value mirroring common spreadsheet dtypes.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Text(String),
    Integer(i64),
    Float(f64),
    Bool(bool),
    /// Missing / blank cell.  Missing dedup keys never match each other.
    Empty,
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Text(s) => write!(f, "{s}"),
            CellValue::Integer(i) => write!(f, "{i}"),
            CellValue::Float(v) => write!(f, "{v}"),
            CellValue::Bool(b) => write!(f, "{b}"),
            CellValue::Empty => Ok(()),
        }
    }
}

impl CellValue {
    pub fn is_empty(&self) -> bool {
        matches!(self, CellValue::Empty)
    }
}

// ---------------------------------------------------------------------------
// Dataset – one loaded tabular file
// ---------------------------------------------------------------------------

/// A fully-loaded tabular file: ordered columns and positionally-aligned
/// rows.  The first column is the dedup key source; `name` is the original
/// file name (extension included) and drives output naming.
#[derive(Debug, Clone)]
pub struct Dataset {
    pub name: String,
    pub columns: Vec<String>,
    pub rows: Vec<Vec<CellValue>>,
}

impl Dataset {
    pub fn new(name: impl Into<String>, columns: Vec<String>, rows: Vec<Vec<CellValue>>) -> Self {
        Dataset {
            name: name.into(),
            columns,
            rows,
        }
    }

    /// Number of data rows (header excluded).
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// First-column cells in row order.  Rows shorter than the header
    /// yield a missing cell.
    pub fn first_column(&self) -> impl Iterator<Item = &CellValue> {
        self.rows
            .iter()
            .map(|row| row.first().unwrap_or(&CellValue::Empty))
    }

    /// File extension of the source file, dot included (`".csv"`); empty
    /// string when the name has none.
    pub fn extension(&self) -> String {
        Path::new(&self.name)
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| format!(".{e}"))
            .unwrap_or_default()
    }

    /// File name without its extension.
    pub fn base_name(&self) -> String {
        Path::new(&self.name)
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or(&self.name)
            .to_string()
    }
}
