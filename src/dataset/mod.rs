pub mod csv;
pub mod xlsx;

use crate::error::DatasetError;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Xlsx,
    Csv,
}

impl Format {
    /// Detect spreadsheet format from file extension
    pub fn from_path(path: &Path) -> Result<Self, DatasetError> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("")
            .to_lowercase();

        match ext.as_str() {
            "xlsx" | "xlsm" => Ok(Format::Xlsx),
            "csv" => Ok(Format::Csv),
            _ => Err(DatasetError::UnsupportedFormat { extension: ext }),
        }
    }
}

/// A single spreadsheet value. Only `Text` cells are ever scanned or
/// rewritten; everything else passes through substitution untouched.
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Empty,
    Text(String),
    Number(f64),
    Bool(bool),
    /// Excel serial date. Kept numeric so a correction pass can never
    /// corrupt it.
    DateTime(f64),
}

impl Cell {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Cell::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Cell::Empty)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    pub name: String,
    pub cells: Vec<Cell>,
}

impl Column {
    pub fn new(name: impl Into<String>, cells: Vec<Cell>) -> Self {
        Self {
            name: name.into(),
            cells,
        }
    }
}

/// An ordered collection of named columns with equal row counts.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    columns: Vec<Column>,
}

impl Dataset {
    /// Build a dataset, enforcing unique column names and a rectangular
    /// shape.
    pub fn new(columns: Vec<Column>) -> Result<Self, DatasetError> {
        let mut seen = std::collections::HashSet::new();
        for column in &columns {
            if !seen.insert(column.name.as_str()) {
                return Err(DatasetError::DuplicateColumn(column.name.clone()));
            }
        }

        if let Some(first) = columns.first() {
            let expected = first.cells.len();
            for column in &columns {
                if column.cells.len() != expected {
                    return Err(DatasetError::RaggedColumns {
                        name: column.name.clone(),
                        expected,
                        actual: column.cells.len(),
                    });
                }
            }
        }

        Ok(Self { columns })
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name == name)
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    pub fn row_count(&self) -> usize {
        self.columns.first().map_or(0, |c| c.cells.len())
    }

    /// Rebuild with the same column names but new cells, preserving order.
    /// Callers guarantee the replacement columns keep the original shape.
    pub(crate) fn with_columns(columns: Vec<Column>) -> Self {
        Self { columns }
    }
}

/// Read a spreadsheet from disk, dispatching on extension.
pub fn load(path: &Path) -> Result<Dataset, DatasetError> {
    match Format::from_path(path)? {
        Format::Xlsx => xlsx::load(path),
        Format::Csv => csv::load(path),
    }
}

/// Write a dataset back to disk in the format implied by the extension.
pub fn save(dataset: &Dataset, path: &Path) -> Result<(), DatasetError> {
    match Format::from_path(path)? {
        Format::Xlsx => xlsx::save(dataset, path),
        Format::Csv => csv::save(dataset, path),
    }
}
