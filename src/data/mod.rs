/// Data layer: discovery, loading, and the shared colour scale.
///
/// Architecture:
/// ```text
///  array_thermalbrush/brush_variant_<N>.csv
///        │
///        ▼
///   ┌───────────┐
///   │ discovery │  list + sort by embedded index → Vec<VariantFile>
///   └───────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  loader  │  parse comma-separated grid → VariantArray
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  scale   │  min / max over every cell → GlobalScale
///   └──────────┘
/// ```

pub mod discovery;
pub mod error;
pub mod loader;
pub mod model;
pub mod scale;

use std::path::Path;

use error::DataError;
use model::{GlobalScale, Variant};

/// Discover, load and reduce every variant in `dir`.
///
/// All-or-nothing: the first failing file aborts the whole run.
pub fn load_folder(dir: &Path) -> Result<(Vec<Variant>, GlobalScale), DataError> {
    let files = discovery::discover(dir)?;
    if files.is_empty() {
        return Err(DataError::NoVariants {
            path: dir.to_path_buf(),
        });
    }
    log::info!("Found {} variant files in {}", files.len(), dir.display());

    let variants = files
        .into_iter()
        .map(|file| {
            let array = loader::load_array(&file.path)?;
            Ok(Variant { file, array })
        })
        .collect::<Result<Vec<_>, DataError>>()?;

    let arrays: Vec<_> = variants.iter().map(|v| &v.array).collect();
    let scale = GlobalScale::from_arrays(arrays)?;
    log::info!("Global scale: [{}, {}]", scale.min, scale.max);

    Ok((variants, scale))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn write(dir: &Path, name: &str, body: &str) {
        fs::write(dir.join(name), body).unwrap();
    }

    #[test]
    fn zeros_and_tens_share_one_scale() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "brush_variant_0.csv", "0,0\n0,0\n");
        write(dir.path(), "brush_variant_1.csv", "10,10\n10,10\n");

        let (variants, scale) = load_folder(dir.path()).unwrap();
        assert_eq!(variants.len(), 2);
        assert_eq!((scale.min, scale.max), (0.0, 10.0));
        assert_eq!(variants[0].file.index, 0);
        assert_eq!(variants[1].array.get(1, 1), Some(10.0));
    }

    #[test]
    fn empty_folder_fails_fast() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "notes.txt", "not a variant");

        let err = load_folder(dir.path()).unwrap_err();
        assert!(matches!(err, DataError::NoVariants { .. }), "{err}");
    }

    #[test]
    fn one_bad_file_aborts_the_run() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "brush_variant_0.csv", "1,2\n3,4\n");
        write(dir.path(), "brush_variant_1.csv", "1,2\n3\n");

        let err = load_folder(dir.path()).unwrap_err();
        assert!(matches!(err, DataError::Ragged { .. }), "{err}");
    }
}
