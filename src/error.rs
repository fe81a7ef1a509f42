//! Error types for the correction pipeline.
//!
//! Core modules return these typed errors; the binary wraps them with
//! `anyhow` context at the edge. Conversion is automatic via `From`
//! implementations, allowing `?` to work across error boundaries.

use std::path::PathBuf;
use thiserror::Error;

/// Errors while loading or saving a spreadsheet.
#[derive(Debug, Error)]
pub enum DatasetError {
    /// Failed to read or open the file.
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file could not be parsed as tabular data.
    #[error("cannot parse {} as a spreadsheet: {message}", path.display())]
    InputFormat { path: PathBuf, message: String },

    /// File extension is not one we know how to read or write.
    #[error("unsupported file extension {extension:?} (expected .xlsx or .csv)")]
    UnsupportedFormat { extension: String },

    /// Two columns share a name.
    #[error("duplicate column name: {0}")]
    DuplicateColumn(String),

    /// Columns disagree on row count.
    #[error("column '{name}' has {actual} rows, expected {expected}")]
    RaggedColumns {
        name: String,
        expected: usize,
        actual: usize,
    },

    /// Failed to write the corrected file.
    #[error("failed to write {}: {message}", path.display())]
    Output { path: PathBuf, message: String },
}

/// Errors from the spellchecking capability.
#[derive(Debug, Error)]
pub enum SpellcheckError {
    /// The dictionary failed to initialize; no corrections can be offered.
    #[error("spelling dictionary unavailable: {0}")]
    DictionaryUnavailable(String),
}

/// Errors while building or applying a correction mapping.
#[derive(Debug, Error)]
pub enum CorrectionError {
    /// Substitution was requested while flagged words still lack a decision.
    #[error("no decision recorded for: {}", unresolved.join(", "))]
    IncompleteDecision { unresolved: Vec<String> },
}
