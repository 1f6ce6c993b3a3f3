use std::path::Path;

use super::error::DataError;
use super::model::VariantFile;

pub const FILE_PREFIX: &str = "brush_variant_";
pub const FILE_SUFFIX: &str = ".csv";

/// List every `brush_variant_<N>.csv` file in `dir`, ordered by `N`
/// numerically (so `_10` comes after `_9`).
pub fn discover(dir: &Path) -> Result<Vec<VariantFile>, DataError> {
    let read_dir_err = |source: std::io::Error| DataError::ReadDir {
        path: dir.to_path_buf(),
        source,
    };

    let mut files = Vec::new();
    for entry in std::fs::read_dir(dir).map_err(read_dir_err)? {
        let entry = entry.map_err(read_dir_err)?;
        let name = entry.file_name();
        let Some(name) = name.to_str() else {
            continue;
        };
        let Some(index) = parse_index(name)? else {
            continue;
        };

        let is_file = entry.file_type().map_err(read_dir_err)?.is_file();
        if !is_file {
            log::debug!("Skipping non-file entry {name}");
            continue;
        }

        files.push(VariantFile {
            index,
            path: entry.path(),
        });
    }

    // Tie-break on the path so `_1` and `_01` order deterministically.
    files.sort_by(|a, b| a.index.cmp(&b.index).then_with(|| a.path.cmp(&b.path)));

    for f in &files {
        log::debug!("Variant {} → {}", f.index, f.path.display());
    }
    Ok(files)
}

/// `Ok(None)` for names outside the naming convention, `Ok(Some(n))` for a
/// match, and an error when a match has a non-integer index.
pub fn parse_index(file_name: &str) -> Result<Option<u64>, DataError> {
    let Some(middle) = file_name
        .strip_prefix(FILE_PREFIX)
        .and_then(|rest| rest.strip_suffix(FILE_SUFFIX))
    else {
        return Ok(None);
    };

    middle
        .parse::<u64>()
        .map(Some)
        .map_err(|source| DataError::BadIndex {
            file_name: file_name.to_string(),
            source,
        })
}
