use std::path::PathBuf;

// ---------------------------------------------------------------------------
// VariantFile – a discovered file on disk
// ---------------------------------------------------------------------------

/// A `brush_variant_<index>.csv` file found during discovery.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariantFile {
    /// Integer embedded in the file name.
    pub index: u64,
    pub path: PathBuf,
}

impl VariantFile {
    /// File name for display; falls back to the full path.
    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.path.display().to_string())
    }
}

// ---------------------------------------------------------------------------
// VariantArray – one loaded grid
// ---------------------------------------------------------------------------

/// A dense row-major grid of `f64` values loaded from one variant file.
#[derive(Debug, Clone, PartialEq)]
pub struct VariantArray {
    rows: usize,
    cols: usize,
    values: Vec<f64>,
}

impl VariantArray {
    /// Build from equal-length rows. Callers guarantee the shape; the loader
    /// reports ragged input before getting here.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Self {
        let n_rows = rows.len();
        let n_cols = rows.first().map_or(0, Vec::len);
        debug_assert!(rows.iter().all(|r| r.len() == n_cols));
        VariantArray {
            rows: n_rows,
            cols: n_cols,
            values: rows.into_iter().flatten().collect(),
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Value at `(row, col)`, or `None` outside the grid.
    pub fn get(&self, row: usize, col: usize) -> Option<f64> {
        if row < self.rows && col < self.cols {
            self.values.get(row * self.cols + col).copied()
        } else {
            None
        }
    }

    /// All cells in row-major order.
    pub fn values(&self) -> &[f64] {
        &self.values
    }
}

// ---------------------------------------------------------------------------
// Variant – file + grid, in render order
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub struct Variant {
    pub file: VariantFile,
    pub array: VariantArray,
}

// ---------------------------------------------------------------------------
// GlobalScale – colour range shared by every panel
// ---------------------------------------------------------------------------

/// Shared `(min, max)` colour range. Invariant: `min <= max`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GlobalScale {
    pub min: f64,
    pub max: f64,
}

impl GlobalScale {
    /// Map a value onto `0.0..=1.0`. A degenerate range maps everything to
    /// `0.0`; NaN has no colour.
    pub fn normalize(&self, value: f64) -> Option<f64> {
        if value.is_nan() {
            return None;
        }
        let range = self.max - self.min;
        if range <= 0.0 || !range.is_finite() {
            return Some(0.0);
        }
        Some(((value - self.min) / range).clamp(0.0, 1.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn get_is_row_major() {
        let arr = VariantArray::from_rows(vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]]);
        assert_eq!((arr.rows(), arr.cols()), (2, 3));
        assert_eq!(arr.get(0, 2), Some(3.0));
        assert_eq!(arr.get(1, 0), Some(4.0));
        assert_eq!(arr.get(2, 0), None);
        assert_eq!(arr.get(0, 3), None);
    }

    #[test]
    fn normalize_clamps_and_handles_flat_range() {
        let scale = GlobalScale { min: 0.0, max: 10.0 };
        assert_eq!(scale.normalize(5.0), Some(0.5));
        assert_eq!(scale.normalize(-3.0), Some(0.0));
        assert_eq!(scale.normalize(42.0), Some(1.0));
        assert_eq!(scale.normalize(f64::NAN), None);

        let flat = GlobalScale { min: 3.0, max: 3.0 };
        assert_eq!(flat.normalize(3.0), Some(0.0));
    }

    #[test]
    fn file_name_strips_directory() {
        let file = VariantFile {
            index: 7,
            path: PathBuf::from("array_thermalbrush/brush_variant_7.csv"),
        };
        assert_eq!(file.file_name(), "brush_variant_7.csv");
    }
}
