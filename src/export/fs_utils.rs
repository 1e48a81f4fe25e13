// src/export/fs_utils.rs

use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, warning};
use std::io::{self, Write};
use std::path::Path;

/// Check that the output file may be created or overwritten.
///
/// - path must be absolute
/// - missing file → Ok
/// - existing file with `force` → Ok
/// - existing file without `force` → ask the user
pub(crate) fn ensure_writable(path: &Path, force: bool) -> AppResult<()> {
    if !path.is_absolute() {
        return Err(AppError::Export(format!(
            "Output file path must be absolute: {}",
            path.display()
        )));
    }

    if !path.exists() || force {
        return Ok(());
    }

    warning(format!("The file '{}' already exists.", path.display()));

    print!("Overwrite? [y/N]: ");
    io::stdout().flush().ok();

    let mut answer = String::new();
    io::stdin().read_line(&mut answer)?;
    let ans = answer.trim().to_ascii_lowercase();

    if ans == "y" || ans == "yes" {
        info("Existing file will be overwritten.");
        Ok(())
    } else {
        Err(AppError::Export(
            "Export cancelled: existing file not overwritten".into(),
        ))
    }
}
