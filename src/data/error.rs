use std::num::ParseIntError;
use std::path::PathBuf;

/// Everything that can go wrong between the folder on disk and a loaded set
/// of variants. Every variant is fatal for the run.
#[derive(Debug, thiserror::Error)]
pub enum DataError {
    #[error("cannot list directory {}", path.display())]
    ReadDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("variant file name {file_name:?} does not embed an integer index")]
    BadIndex {
        file_name: String,
        #[source]
        source: ParseIntError,
    },

    #[error("cannot read {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed CSV in {}", path.display())]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("{}: row {row}, column {column}: {token:?} is not a number", path.display())]
    BadNumber {
        path: PathBuf,
        row: usize,
        column: usize,
        token: String,
    },

    #[error("{}: row {row} has {found} values, expected {expected}", path.display())]
    Ragged {
        path: PathBuf,
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("{} contains no data rows", path.display())]
    EmptyFile { path: PathBuf },

    #[error("no brush_variant_<N>.csv files found in {}", path.display())]
    NoVariants { path: PathBuf },

    #[error("no numeric values to derive a colour scale from")]
    NoValues,
}
