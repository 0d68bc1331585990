//! Host architecture bucket for the native shell.

use std::fmt;

/// Architecture bucket selecting which prebuilt native shell to use.
///
/// Only two shells are produced: a 64-bit x86 one and a 32-bit fallback used
/// for every other host.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Arch {
    /// x86_64 / AMD64 hosts
    X64,
    /// Everything else
    Ia32,
}

impl Arch {
    /// Bucket for the machine natpp is running on.
    pub fn detect() -> Self {
        Self::from_host_arch(std::env::consts::ARCH)
    }

    /// Maps a host architecture string (`std::env::consts::ARCH` style, or the
    /// short `x64` form) to a bucket.
    pub fn from_host_arch(arch: &str) -> Self {
        match arch {
            "x86_64" | "x64" => Arch::X64,
            _ => Arch::Ia32,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Arch::X64 => "x64",
            Arch::Ia32 => "ia32",
        }
    }

    /// Directory holding the prebuilt shell, relative to the install directory.
    pub fn shell_dir_name(self) -> String {
        format!("natpp-win32-{}", self.as_str())
    }

    /// npm script that builds the shell for this bucket.
    pub fn build_script(self) -> &'static str {
        match self {
            Arch::X64 => "build:64",
            Arch::Ia32 => "build:32",
        }
    }
}

impl fmt::Display for Arch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
