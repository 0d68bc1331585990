//! Native shell build execution.
//!
//! Runs the npm build script that packages the shell for one architecture.

use super::tool_detection::find_npm;
use crate::error::{NatppError, Result};
use crate::settings::Arch;
use std::path::Path;

/// Run `npm run build:<bits>` in the install directory and wait for it.
///
/// # Arguments
/// - `home` - Install directory containing `package.json`
/// - `arch` - Bucket selecting the build script
///
/// # Errors
/// - `ToolNotFound` when npm is not installed
/// - `CommandFailed` when npm cannot be started
/// - `BuildFailed` when the script exits unsuccessfully
pub async fn run_build(home: &Path, arch: Arch) -> Result<()> {
    let npm = find_npm()?;
    let script = arch.build_script();
    let command = format!("npm run {}", script);

    log::info!("Running `{}` in {}", command, home.display());

    let output = tokio::process::Command::new(&npm)
        .args(["run", script])
        .current_dir(home)
        .output()
        .await
        .map_err(|error| NatppError::CommandFailed {
            command: command.clone(),
            error,
        })?;

    let stdout = String::from_utf8_lossy(&output.stdout);
    if !stdout.trim().is_empty() {
        log::debug!("{} stdout:\n{}", command, stdout.trim_end());
    }

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(NatppError::BuildFailed {
            command,
            reason: format!("{} {}", output.status, stderr.trim()).trim().to_string(),
        });
    }

    Ok(())
}
