// src/export/fs_utils.rs

use crate::errors::{AppError, AppResult};
use crate::utils::path::ensure_parent_dir;
use std::path::Path;

/// Check that the output file may be written.
///
/// - file missing → Ok (parent directory is created)
/// - file present and `force` → Ok
/// - file present without `force` → error, nothing is overwritten
pub(crate) fn ensure_writable(path: &Path, force: bool) -> AppResult<()> {
    if path.exists() && !force {
        return Err(AppError::Export(format!(
            "'{}' already exists (use --force to overwrite)",
            path.display()
        )));
    }
    ensure_parent_dir(path)?;
    Ok(())
}
