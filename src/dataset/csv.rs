use super::{Cell, Column, Dataset};
use crate::error::DatasetError;
use std::fs::File;
use std::path::Path;

/// Read a comma-separated file into a dataset. The first record is the
/// header row; short records are padded with empty cells.
pub fn load(path: &Path) -> Result<Dataset, DatasetError> {
    let file = File::open(path).map_err(|source| DatasetError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let mut reader = ::csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(file);

    let names: Vec<String> = reader
        .headers()
        .map_err(|e| parse_error(path, e))?
        .iter()
        .enumerate()
        .map(|(i, h)| {
            if h.is_empty() {
                format!("column_{}", i + 1)
            } else {
                h.to_string()
            }
        })
        .collect();

    let mut cells: Vec<Vec<Cell>> = vec![Vec::new(); names.len()];
    for record in reader.records() {
        let record = record.map_err(|e| parse_error(path, e))?;
        for (i, column_cells) in cells.iter_mut().enumerate() {
            column_cells.push(record.get(i).map_or(Cell::Empty, classify));
        }
    }

    let columns = names
        .into_iter()
        .zip(cells)
        .map(|(name, cells)| Column::new(name, cells))
        .collect();

    Dataset::new(columns)
}

/// Write a dataset back out as csv, header row first.
pub fn save(dataset: &Dataset, path: &Path) -> Result<(), DatasetError> {
    let mut writer = ::csv::WriterBuilder::new()
        .from_path(path)
        .map_err(|e| write_error(path, e))?;

    let names: Vec<&str> = dataset.columns().iter().map(|c| c.name.as_str()).collect();
    writer
        .write_record(&names)
        .map_err(|e| write_error(path, e))?;

    for row in 0..dataset.row_count() {
        let record: Vec<String> = dataset
            .columns()
            .iter()
            .map(|c| render(&c.cells[row]))
            .collect();
        writer
            .write_record(&record)
            .map_err(|e| write_error(path, e))?;
    }

    writer.flush().map_err(|source| DatasetError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(())
}

/// CSV carries no types; recover the ones the correction pass must not
/// touch. Anything that isn't empty or numeric stays text.
fn classify(raw: &str) -> Cell {
    if raw.is_empty() {
        return Cell::Empty;
    }
    if let Ok(n) = raw.trim().parse::<f64>() {
        return Cell::Number(n);
    }
    Cell::Text(raw.to_string())
}

fn render(cell: &Cell) -> String {
    match cell {
        Cell::Empty => String::new(),
        Cell::Text(s) => s.clone(),
        Cell::Number(n) => n.to_string(),
        Cell::Bool(b) => b.to_string(),
        Cell::DateTime(serial) => serial.to_string(),
    }
}

fn parse_error(path: &Path, e: ::csv::Error) -> DatasetError {
    DatasetError::InputFormat {
        path: path.to_path_buf(),
        message: e.to_string(),
    }
}

fn write_error(path: &Path, e: ::csv::Error) -> DatasetError {
    DatasetError::Output {
        path: path.to_path_buf(),
        message: e.to_string(),
    }
}
