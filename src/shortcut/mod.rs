//! Desktop shortcut creation.
//!
//! A shortcut points at the native shell executable and passes the site and
//! window size as a single argument string:
//!
//! ```text
//! url=<url> w=<width> h=<height>
//! ```

mod lnk;

pub use lnk::write_lnk;

use crate::error::{ErrorExt, NatppError, Result};
use crate::settings::AppSettings;
use crate::shell::NativeShell;
use std::path::{Path, PathBuf};

/// Shortcut file extension.
pub const SHORTCUT_EXTENSION: &str = "lnk";

/// Everything written into one shortcut file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ShortcutSpec {
    target: PathBuf,
    arguments: String,
    description: String,
    icon: Option<String>,
}

impl ShortcutSpec {
    pub fn new(settings: &AppSettings, shell: &NativeShell, icon: Option<String>) -> Self {
        Self {
            target: shell.executable(),
            arguments: launch_arguments(settings.url().as_str(), settings.width(), settings.height()),
            description: settings.description().to_string(),
            icon,
        }
    }

    pub fn target(&self) -> &Path {
        &self.target
    }

    pub fn arguments(&self) -> &str {
        &self.arguments
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// `None` leaves the platform default icon.
    pub fn icon(&self) -> Option<&str> {
        self.icon.as_deref()
    }
}

/// Launch arguments understood by the native shell.
pub fn launch_arguments(url: &str, width: i32, height: i32) -> String {
    format!("url={} w={} h={}", url, width, height)
}

/// `<desktop>/<name>.lnk`
pub fn shortcut_path(desktop: &Path, name: &str) -> PathBuf {
    desktop.join(format!("{}.{}", name, SHORTCUT_EXTENSION))
}

/// Create the desktop folder if it is missing. Nothing below it is created.
pub fn prepare_desktop(desktop: &Path) -> Result<()> {
    std::fs::create_dir_all(desktop).fs_context("creating desktop directory", desktop)
}

/// The current user's desktop folder.
///
/// Falls back to `~/Desktop` when the platform reports none.
pub fn desktop_dir() -> Result<PathBuf> {
    dirs::desktop_dir()
        .or_else(|| dirs::home_dir().map(|home| home.join("Desktop")))
        .ok_or_else(|| {
            NatppError::Io(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                "cannot locate the desktop folder, pass one with --desktop",
            ))
        })
}
