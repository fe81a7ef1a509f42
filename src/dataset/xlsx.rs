use super::{Cell, Column, Dataset};
use crate::error::DatasetError;
use calamine::{open_workbook_auto, Data, Reader};
use std::path::Path;

/// Sheet name used for corrected output.
const OUTPUT_SHEET: &str = "Corrected Data";

/// Read the first worksheet of an xlsx workbook into a dataset. The first
/// row is the header row; unnamed header cells get positional names.
pub fn load(path: &Path) -> Result<Dataset, DatasetError> {
    let mut workbook = open_workbook_auto(path).map_err(|e| DatasetError::InputFormat {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let sheet_name = workbook
        .sheet_names()
        .first()
        .cloned()
        .ok_or_else(|| DatasetError::InputFormat {
            path: path.to_path_buf(),
            message: "workbook has no sheets".to_string(),
        })?;

    let range = workbook
        .worksheet_range(&sheet_name)
        .map_err(|e| DatasetError::InputFormat {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

    let mut rows = range.rows();
    let header_row = rows.next().ok_or_else(|| DatasetError::InputFormat {
        path: path.to_path_buf(),
        message: format!("sheet '{}' is empty", sheet_name),
    })?;

    let names: Vec<String> = header_row
        .iter()
        .enumerate()
        .map(|(i, data)| match data {
            Data::Empty => format!("column_{}", i + 1),
            other => other.to_string(),
        })
        .collect();

    let mut cells: Vec<Vec<Cell>> = vec![Vec::new(); names.len()];
    for row in rows {
        for (i, column_cells) in cells.iter_mut().enumerate() {
            let value = row.get(i).map_or(Cell::Empty, convert);
            column_cells.push(value);
        }
    }

    let columns = names
        .into_iter()
        .zip(cells)
        .map(|(name, cells)| Column::new(name, cells))
        .collect();

    Dataset::new(columns)
}

/// Write a dataset as a single-sheet workbook, header row first.
pub fn save(dataset: &Dataset, path: &Path) -> Result<(), DatasetError> {
    let mut workbook = rust_xlsxwriter::Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet
        .set_name(OUTPUT_SHEET)
        .map_err(|e| output_error(path, e))?;

    for (col, column) in dataset.columns().iter().enumerate() {
        let col = col as u16;
        worksheet
            .write_string(0, col, &column.name)
            .map_err(|e| output_error(path, e))?;

        for (row, cell) in column.cells.iter().enumerate() {
            let row = row as u32 + 1;
            match cell {
                Cell::Empty => {}
                Cell::Text(s) => {
                    worksheet
                        .write_string(row, col, s)
                        .map_err(|e| output_error(path, e))?;
                }
                Cell::Number(n) => {
                    worksheet
                        .write_number(row, col, *n)
                        .map_err(|e| output_error(path, e))?;
                }
                Cell::Bool(b) => {
                    worksheet
                        .write_boolean(row, col, *b)
                        .map_err(|e| output_error(path, e))?;
                }
                // Serial dates survive as numbers; cell formatting is not
                // carried through a correction pass.
                Cell::DateTime(serial) => {
                    worksheet
                        .write_number(row, col, *serial)
                        .map_err(|e| output_error(path, e))?;
                }
            }
        }
    }

    workbook.save(path).map_err(|e| output_error(path, e))?;
    Ok(())
}

fn convert(data: &Data) -> Cell {
    match data {
        Data::Empty => Cell::Empty,
        Data::String(s) => Cell::Text(s.clone()),
        Data::Float(f) => Cell::Number(*f),
        Data::Int(i) => Cell::Number(*i as f64),
        Data::Bool(b) => Cell::Bool(*b),
        Data::DateTime(dt) => Cell::DateTime(dt.as_f64()),
        // ISO datetimes and durations arrive as strings; keep them textual
        // (the scanner still skips them as structured).
        Data::DateTimeIso(s) | Data::DurationIso(s) => Cell::Text(s.clone()),
        Data::Error(e) => Cell::Text(e.to_string()),
    }
}

fn output_error(path: &Path, e: rust_xlsxwriter::XlsxError) -> DatasetError {
    DatasetError::Output {
        path: path.to_path_buf(),
        message: e.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_xlsx_round_trip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("round_trip.xlsx");

        let dataset = Dataset::new(vec![
            Column::new(
                "notes",
                vec![Cell::Text("teh cat".into()), Cell::Text("fine".into())],
            ),
            Column::new("amount", vec![Cell::Number(42.0), Cell::Empty]),
        ])
        .unwrap();

        save(&dataset, &path).unwrap();
        let loaded = load(&path).unwrap();

        assert_eq!(loaded.column_count(), 2);
        assert_eq!(loaded.row_count(), 2);
        assert_eq!(loaded.columns()[0].name, "notes");
        assert_eq!(
            loaded.columns()[0].cells[0],
            Cell::Text("teh cat".to_string())
        );
        assert_eq!(loaded.columns()[1].cells[0], Cell::Number(42.0));
        assert_eq!(loaded.columns()[1].cells[1], Cell::Empty);
    }

    #[test]
    fn test_missing_file_is_input_format_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nope.xlsx");
        assert!(matches!(
            load(&path),
            Err(DatasetError::InputFormat { .. })
        ));
    }
}
