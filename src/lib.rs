//! Desktop shortcuts for web apps.
//!
//! This library provides the pieces behind the `natpp` command:
//! - URL gating and hostname extraction ([`site`])
//! - Immutable run settings and the architecture bucket ([`settings`])
//! - Locating and building the native shell ([`shell`])
//! - Favicon discovery ([`favicon`])
//! - Writing the `.lnk` shortcut ([`shortcut`])

pub mod cli;
pub mod error;
pub mod favicon;
pub mod settings;
pub mod shell;
pub mod shortcut;
pub mod site;

// Re-export commonly used types
pub use error::{CliError, NatppError, Result};
