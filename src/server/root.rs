// Serving root module
// Anchors relative file resolution to the executable's directory

use crate::error::{Result, ServeError};
use std::path::PathBuf;

/// Directory containing the running executable
pub fn serving_root() -> Result<PathBuf> {
    let exe = std::env::current_exe()?;
    let exe = exe.canonicalize().unwrap_or(exe);
    exe.parent()
        .map(PathBuf::from)
        .ok_or_else(|| ServeError::RootDir(format!("{} has no parent directory", exe.display())))
}

/// Resolve the serving root and make it the process working directory.
///
/// Called once at startup, before the runtime starts.
pub fn enter_serving_root() -> Result<PathBuf> {
    let root = serving_root()?;
    std::env::set_current_dir(&root)
        .map_err(|e| ServeError::RootDir(format!("cannot enter {}: {e}", root.display())))?;
    Ok(root)
}
