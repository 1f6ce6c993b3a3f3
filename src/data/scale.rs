use super::error::DataError;
use super::model::{GlobalScale, VariantArray};

impl GlobalScale {
    /// Smallest and largest cell over every array. NaN cells are skipped.
    pub fn from_arrays<'a, I>(arrays: I) -> Result<Self, DataError>
    where
        I: IntoIterator<Item = &'a VariantArray>,
    {
        let (min, max) = arrays
            .into_iter()
            .flat_map(|arr| arr.values().iter().copied())
            .filter(|v| !v.is_nan())
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(min, max), v| {
                (min.min(v), max.max(v))
            });

        if min > max {
            return Err(DataError::NoValues);
        }
        Ok(GlobalScale { min, max })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid(rows: &[&[f64]]) -> VariantArray {
        VariantArray::from_rows(rows.iter().map(|r| r.to_vec()).collect())
    }

    #[test]
    fn bounds_are_attained_and_cover_every_cell() {
        let arrays = vec![
            grid(&[&[3.0, 1.5], &[2.0, 4.0]]),
            grid(&[&[-0.5, 9.25, 0.0]]),
            grid(&[&[7.0], &[6.0]]),
        ];
        let scale = GlobalScale::from_arrays(&arrays).unwrap();
        assert_eq!((scale.min, scale.max), (-0.5, 9.25));

        let cells: Vec<f64> = arrays.iter().flat_map(|a| a.values().to_vec()).collect();
        assert!(cells.iter().all(|&v| scale.min <= v && v <= scale.max));
        assert!(cells.contains(&scale.min));
        assert!(cells.contains(&scale.max));
    }

    #[test]
    fn single_value_gives_flat_scale() {
        let arrays = vec![grid(&[&[2.5]])];
        let scale = GlobalScale::from_arrays(&arrays).unwrap();
        assert_eq!((scale.min, scale.max), (2.5, 2.5));
    }

    #[test]
    fn nan_cells_are_ignored() {
        let arrays = vec![grid(&[&[f64::NAN, 1.0], &[5.0, f64::NAN]])];
        let scale = GlobalScale::from_arrays(&arrays).unwrap();
        assert_eq!((scale.min, scale.max), (1.0, 5.0));
    }

    #[test]
    fn nothing_to_reduce_is_an_error() {
        let empty: Vec<VariantArray> = Vec::new();
        assert!(matches!(
            GlobalScale::from_arrays(&empty),
            Err(DataError::NoValues)
        ));

        let all_nan = vec![grid(&[&[f64::NAN]])];
        assert!(matches!(
            GlobalScale::from_arrays(&all_nan),
            Err(DataError::NoValues)
        ));
    }
}
