//! Command line argument parsing and validation.
//!
//! `-h` sets the window height, so help is only available as `--help` and
//! version is `-v/--version`.

use clap::{ArgAction, CommandFactory, Parser};
use std::path::PathBuf;

const EXAMPLES: &str = "\
Examples:
  $ natpp https://example.com/
  $ natpp https://example.com/ -n myapp
  $ natpp https://example.com/ -n myapp -w 100
  $ natpp https://example.com/ -h 200
  $ natpp https://example.com/ -d \"this is my app\"";

/// Turn a web URL into a desktop shortcut for a native app window
#[derive(Parser, Debug)]
#[command(
    name = "natpp",
    version,
    about = "Turn a web URL into a desktop shortcut for a native app window",
    override_usage = "natpp [OPTIONS] <URL>\n       natpp -v",
    disable_help_flag = true,
    disable_version_flag = true,
    after_help = EXAMPLES
)]
pub struct Args {
    /// Web page the app opens (must contain "http")
    #[arg(value_name = "URL")]
    pub url: Option<String>,

    /// Set app name (default: web hostname)
    #[arg(short = 'n', long, value_name = "NAME")]
    pub name: Option<String>,

    /// Set app width in pixels
    #[arg(
        short = 'w',
        long,
        value_name = "PIXELS",
        default_value_t = crate::settings::DEFAULT_WIDTH,
        allow_negative_numbers = true
    )]
    pub width: i32,

    /// Set app height in pixels
    #[arg(
        short = 'h',
        long,
        value_name = "PIXELS",
        default_value_t = crate::settings::DEFAULT_HEIGHT,
        allow_negative_numbers = true
    )]
    pub height: i32,

    /// Set app description
    #[arg(short = 'd', long = "desc", value_name = "TEXT")]
    pub desc: Option<String>,

    /// Install directory holding the native shell builds (default: next to this executable)
    #[arg(long, env = "NATPP_HOME", value_name = "DIR")]
    pub home: Option<PathBuf>,

    /// Folder the shortcut is written to (default: your desktop)
    #[arg(long, env = "NATPP_DESKTOP", value_name = "DIR")]
    pub desktop: Option<PathBuf>,

    /// Show app version
    #[arg(short = 'v', long, action = ArgAction::Version)]
    pub version: Option<bool>,

    /// Print help
    #[arg(long, action = ArgAction::Help)]
    pub help: Option<bool>,
}

impl Args {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Render the help text shown for `--help` and for a bare `natpp`.
    pub fn help_text() -> String {
        Self::command().render_help().to_string()
    }
}
