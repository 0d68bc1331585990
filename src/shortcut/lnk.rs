//! Shell Link (.lnk) file writing.
//!
//! Shortcuts are only written on Windows; elsewhere [`write_lnk`] fails with
//! [`NatppError::Shortcut`] after the rest of the pipeline has run.

use super::ShortcutSpec;
use crate::error::{NatppError, Result};
use std::path::Path;

/// Write `spec` as a Windows shortcut at `path`.
///
/// The containing folder must exist. The target must exist too: its
/// attributes are recorded in the link header.
#[cfg(windows)]
pub fn write_lnk(spec: &ShortcutSpec, path: &Path) -> Result<()> {
    use mslnk::ShellLink;

    let shortcut_error = |reason: String| NatppError::Shortcut {
        path: path.to_path_buf(),
        reason,
    };

    let mut link = ShellLink::new(spec.target())
        .map_err(|e| shortcut_error(format!("target {}: {}", spec.target().display(), e)))?;
    link.set_arguments(Some(spec.arguments().to_string()));
    link.set_name(Some(spec.description().to_string()));
    if let Some(icon) = spec.icon() {
        link.set_icon_location(Some(icon.to_string()));
    }

    link.create_lnk(path)
        .map_err(|e| shortcut_error(e.to_string()))?;

    log::info!("Wrote shortcut {}", path.display());
    Ok(())
}

/// `.lnk` files are a Windows format; other hosts cannot write them.
#[cfg(not(windows))]
pub fn write_lnk(spec: &ShortcutSpec, path: &Path) -> Result<()> {
    log::debug!("Skipping shortcut to {}", spec.target().display());
    Err(NatppError::Shortcut {
        path: path.to_path_buf(),
        reason: "shortcuts can only be created on Windows".to_string(),
    })
}
