//! Atomic header output.

use crate::error::CodegenError;
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

/// Writes `text` to `path` through a temporary file in the same directory.
///
/// The destination either keeps its previous contents or holds the
/// complete new text; it is never left half written.
///
/// # Errors
/// Returns `CodegenError` if the temporary file cannot be written or moved
/// into place.
pub fn write_atomic(path: &Path, text: &str) -> Result<(), CodegenError> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut file = NamedTempFile::new_in(dir)?;
    file.write_all(text.as_bytes())?;
    file.as_file().sync_all()?;
    file.persist(path).map_err(|e| CodegenError::Persist {
        path: path.to_path_buf(),
        source: e.error,
    })?;

    tracing::debug!(path = %path.display(), bytes = text.len(), "header written");
    Ok(())
}
