//! File input and output: count table reading, matrix serialization, and
//! GTF annotation extraction.
//!
//! Output files are never left half-written: writers serialize into a
//! temporary file in the destination directory and persist it by rename.

pub mod annotation;
pub mod counts;

use std::path::Path;

use tempfile::NamedTempFile;

use crate::error::{
    CountMatError,
    Result,
};

/// Runs `write_fn` against a temporary file next to `path`, then renames it
/// into place. On any failure the temporary file is removed by its RAII
/// guard and the destination stays untouched.
pub(crate) fn write_atomic<F>(
    path: &Path,
    write_fn: F,
) -> Result<()>
where
    F: FnOnce(&mut NamedTempFile) -> Result<()>, {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut tmp = NamedTempFile::new_in(dir)?;
    write_fn(&mut tmp)?;
    tmp.persist(path)
        .map_err(|e| CountMatError::Io(e.error))?;

    Ok(())
}
