//! Prebuilt native shell location and first-run build.
//!
//! The shell lives in `<home>/natpp-win32-<arch>/natpp.exe`. When the
//! architecture directory is missing the shell is built once with npm before
//! any shortcut is written.

mod build;
mod tool_detection;

pub use build::run_build;
pub use tool_detection::find_npm;

use crate::error::Result;
use crate::settings::Arch;
use std::path::PathBuf;

/// Executable name inside the shell directory.
pub const SHELL_EXECUTABLE: &str = "natpp.exe";

/// Outcome of [`NativeShell::ensure_built`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum BuildStatus {
    /// Shell directory was already present
    Present,
    /// Shell was built during this run
    Built,
}

/// Native shell install for one architecture bucket.
#[derive(Clone, Debug)]
pub struct NativeShell {
    home: PathBuf,
    arch: Arch,
}

impl NativeShell {
    pub fn new(home: impl Into<PathBuf>, arch: Arch) -> Self {
        Self {
            home: home.into(),
            arch,
        }
    }

    /// `<home>/natpp-win32-<arch>`
    pub fn dir(&self) -> PathBuf {
        self.home.join(self.arch.shell_dir_name())
    }

    /// Shortcut target.
    pub fn executable(&self) -> PathBuf {
        self.dir().join(SHELL_EXECUTABLE)
    }

    /// Existence of the architecture directory is the only check made.
    pub fn is_built(&self) -> bool {
        self.dir().exists()
    }

    /// Build the shell unless its directory already exists.
    ///
    /// Blocks until the build finishes. There is no locking: two concurrent
    /// first runs will both build.
    pub async fn ensure_built(&self) -> Result<BuildStatus> {
        if self.is_built() {
            log::debug!("Native shell present at {}", self.dir().display());
            return Ok(BuildStatus::Present);
        }

        run_build(&self.home, self.arch).await?;
        log::info!("Native shell built at {}", self.dir().display());
        Ok(BuildStatus::Built)
    }
}
