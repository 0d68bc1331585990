//! Configuration for a single shortcut run.
//!
//! [`AppSettings`] is built once from the parsed command line by
//! [`SettingsBuilder`] and passed by reference to every later step.
//! [`Arch`] picks which prebuilt native shell the shortcut points at.

mod arch;
mod builder;
mod core;

pub use arch::Arch;
pub use builder::SettingsBuilder;
pub use self::core::{AppSettings, DEFAULT_DESCRIPTION, DEFAULT_HEIGHT, DEFAULT_WIDTH};
