//! Command line interface for natpp.
//!
//! Runs the shortcut pipeline top to bottom:
//! parse → validate URL → build gate → resolve name → favicon → write shortcut.
//! Usage errors stop the run before anything touches the filesystem; every
//! later failure is returned to `main` and aborts the process.

mod args;
mod output;

pub use args::Args;
pub use output::OutputManager;

use crate::error::{ErrorExt, NatppError, Result};
use crate::favicon;
use crate::settings::{AppSettings, Arch, SettingsBuilder};
use crate::shell::NativeShell;
use crate::shortcut::{self, ShortcutSpec};
use crate::site::SiteUrl;
use path_absolutize::Absolutize;
use std::path::PathBuf;

/// Main CLI entry point
pub async fn run() -> Result<i32> {
    let args = Args::parse_args();
    run_with(args, &OutputManager::new()).await
}

/// Run the pipeline for already-parsed arguments.
///
/// Returns the process exit code: 0 on success, when only help was shown or
/// when the argument is not a web URL; 1 for the remaining usage errors.
pub async fn run_with(args: Args, output: &OutputManager) -> Result<i32> {
    let Some(raw_url) = args.url.as_deref() else {
        output.plain(&Args::help_text())?;
        return Ok(0);
    };

    let settings = match resolve_settings(raw_url, &args) {
        Ok(settings) => settings,
        Err(NatppError::Cli(e)) => {
            output.error(&e.to_string())?;
            return Ok(e.exit_code());
        }
        Err(e) => return Err(e),
    };

    let shell = NativeShell::new(install_dir(&args)?, Arch::detect());
    if !shell.is_built() {
        output.tagged("Build", "the native app (only first time)")?;
    }
    shell.ensure_built().await?;

    report_settings(&settings, output)?;

    let client = favicon::client()?;
    let discovered = favicon::discover(&client, settings.url().as_str()).await?;
    let icon = favicon::select_icon(&discovered);
    output.field("icon", icon.as_deref().unwrap_or("use default"))?;
    output.rule()?;

    let desktop = match &args.desktop {
        Some(dir) => absolute(dir)?,
        None => shortcut::desktop_dir()?,
    };
    shortcut::prepare_desktop(&desktop)?;
    let path = shortcut::shortcut_path(&desktop, settings.name());
    let spec = ShortcutSpec::new(&settings, &shell, icon);
    shortcut::write_lnk(&spec, &path)?;

    output.success(&path.display().to_string())?;
    Ok(0)
}

fn resolve_settings(raw_url: &str, args: &Args) -> Result<AppSettings> {
    SettingsBuilder::new()
        .url(SiteUrl::parse(raw_url)?)
        .name(args.name.clone())
        .width(args.width)
        .height(args.height)
        .description(args.desc.clone())
        .build()
}

fn report_settings(settings: &AppSettings, output: &OutputManager) -> Result<()> {
    output.progress("Create link ...")?;
    output.rule()?;
    output.field("url", settings.url().as_str())?;
    output.field("name", settings.name())?;
    output.field("width", &settings.width().to_string())?;
    output.field("height", &settings.height().to_string())?;
    output.field("description", settings.description())?;
    Ok(())
}

/// `--home` if given, otherwise the directory of the running executable.
fn install_dir(args: &Args) -> Result<PathBuf> {
    if let Some(home) = &args.home {
        return absolute(home);
    }

    let exe = std::env::current_exe()?;
    exe.parent().map(|dir| dir.to_path_buf()).ok_or_else(|| {
        NatppError::Io(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            format!("{} has no parent directory", exe.display()),
        ))
    })
}

fn absolute(path: &std::path::Path) -> Result<PathBuf> {
    Ok(path
        .absolutize()
        .fs_context("resolving absolute path", path)?
        .into_owned())
}
