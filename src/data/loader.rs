use std::fs::File;
use std::path::Path;

use super::error::DataError;
use super::model::VariantArray;

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load one variant grid from a comma-separated text file.
///
/// Layout: no header row, one grid row per line, the same number of
/// floating-point cells on every line.
///
/// ```text
/// 0.0,0.5,1.0
/// 0.25,0.75,1.0
/// ```
///
/// Lines starting with `#` and blank lines are skipped; whitespace around
/// a cell is ignored. Ragged rows, non-numeric cells and files without any
/// rows are errors.
pub fn load_array(path: &Path) -> Result<VariantArray, DataError> {
    let file = File::open(path).map_err(|source| DataError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let array = read_grid(file, path)?;
    log::debug!(
        "Loaded {} ({}x{})",
        path.display(),
        array.rows(),
        array.cols()
    );
    Ok(array)
}

// ---------------------------------------------------------------------------
// CSV grid reader
// ---------------------------------------------------------------------------

/// Parse a grid from any reader; `path` only labels errors.
fn read_grid<R: std::io::Read>(input: R, path: &Path) -> Result<VariantArray, DataError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .comment(Some(b'#'))
        .trim(csv::Trim::All)
        .from_reader(input);

    let mut rows: Vec<Vec<f64>> = Vec::new();

    for (row_no, result) in reader.records().enumerate() {
        let record = result.map_err(|source| DataError::Csv {
            path: path.to_path_buf(),
            source,
        })?;
        // Whitespace-only lines trim down to a single empty field.
        if record.len() == 1 && record[0].is_empty() {
            continue;
        }
        // Report the line in the file, falling back to the data row count.
        let line = record
            .position()
            .map_or(row_no + 1, |pos| pos.line() as usize);

        let row = record
            .iter()
            .enumerate()
            .map(|(col, tok)| {
                tok.parse::<f64>().map_err(|_| DataError::BadNumber {
                    path: path.to_path_buf(),
                    row: line,
                    column: col + 1,
                    token: tok.to_string(),
                })
            })
            .collect::<Result<Vec<f64>, DataError>>()?;

        if let Some(first) = rows.first() {
            if row.len() != first.len() {
                return Err(DataError::Ragged {
                    path: path.to_path_buf(),
                    row: line,
                    expected: first.len(),
                    found: row.len(),
                });
            }
        }
        rows.push(row);
    }

    if rows.is_empty() {
        return Err(DataError::EmptyFile {
            path: path.to_path_buf(),
        });
    }

    Ok(VariantArray::from_rows(rows))
}
