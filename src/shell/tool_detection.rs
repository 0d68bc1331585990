//! External tool detection.
//!
//! Locates the `npm` executable that drives the native shell build.

use crate::error::{NatppError, Result};
use std::path::PathBuf;

/// Locate `npm` on `PATH`.
///
/// On Windows `which` resolves `npm.cmd` through `PATHEXT`.
pub fn find_npm() -> Result<PathBuf> {
    match which::which("npm") {
        Ok(path) => {
            log::debug!("Found npm at: {}", path.display());
            Ok(path)
        }
        Err(e) => Err(NatppError::ToolNotFound {
            tool: "npm".to_string(),
            reason: format!("{}. Install Node.js to build the native app", e),
        }),
    }
}
