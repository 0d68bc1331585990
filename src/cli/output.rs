//! Coloured console output.
//!
//! User-facing progress lines go to stdout, errors to stderr. Colour is only
//! emitted when the stream is a terminal.

use std::io::{self, IsTerminal, Write};
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

/// Writes the labelled progress lines of a run.
#[derive(Debug, Clone)]
pub struct OutputManager {
    stdout_choice: ColorChoice,
    stderr_choice: ColorChoice,
}

impl Default for OutputManager {
    fn default() -> Self {
        Self::new()
    }
}

impl OutputManager {
    pub fn new() -> Self {
        Self {
            stdout_choice: color_choice(io::stdout().is_terminal()),
            stderr_choice: color_choice(io::stderr().is_terminal()),
        }
    }

    /// Yellow headline, e.g. `Create link ...`
    pub fn progress(&self, message: &str) -> io::Result<()> {
        let mut out = StandardStream::stdout(self.stdout_choice);
        write_painted(&mut out, Color::Yellow, message, None)
    }

    /// Yellow tag followed by plain text, e.g. `Build the native app`
    pub fn tagged(&self, tag: &str, message: &str) -> io::Result<()> {
        let mut out = StandardStream::stdout(self.stdout_choice);
        write_painted(&mut out, Color::Yellow, tag, Some(message))
    }

    /// Blue `label -` followed by the value
    pub fn field(&self, label: &str, value: &str) -> io::Result<()> {
        let mut out = StandardStream::stdout(self.stdout_choice);
        write_painted(&mut out, Color::Blue, &format!("{} -", label), Some(value))
    }

    /// Separator between the header and the field listing
    pub fn rule(&self) -> io::Result<()> {
        let mut out = StandardStream::stdout(self.stdout_choice);
        writeln!(out, "-")
    }

    pub fn success(&self, message: &str) -> io::Result<()> {
        let mut out = StandardStream::stdout(self.stdout_choice);
        write_painted(&mut out, Color::Green, "Success ✔️", Some(message))
    }

    /// Red `error:` prefix on stderr
    pub fn error(&self, message: &str) -> io::Result<()> {
        let mut err = StandardStream::stderr(self.stderr_choice);
        write_painted(&mut err, Color::Red, "error:", Some(message))
    }

    /// Uncoloured text on stdout
    pub fn plain(&self, text: &str) -> io::Result<()> {
        let mut out = StandardStream::stdout(self.stdout_choice);
        writeln!(out, "{}", text)
    }
}

fn color_choice(is_terminal: bool) -> ColorChoice {
    if is_terminal {
        ColorChoice::Auto
    } else {
        ColorChoice::Never
    }
}

fn write_painted(
    stream: &mut StandardStream,
    color: Color,
    painted: &str,
    rest: Option<&str>,
) -> io::Result<()> {
    stream.set_color(ColorSpec::new().set_fg(Some(color)))?;
    write!(stream, "{}", painted)?;
    stream.reset()?;
    match rest {
        Some(rest) => writeln!(stream, " {}", rest),
        None => writeln!(stream),
    }
}
