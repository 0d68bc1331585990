//! Builder for constructing AppSettings.

use super::AppSettings;
use super::core::{DEFAULT_DESCRIPTION, DEFAULT_HEIGHT, DEFAULT_WIDTH};
use crate::error::{CliError, Result};
use crate::site::SiteUrl;

/// Builder for constructing [`AppSettings`].
///
/// Unset fields fall back to the defaults (800x600, "a native web app").
/// A missing name is resolved from the URL's hostname.
#[derive(Default)]
pub struct SettingsBuilder {
    url: Option<SiteUrl>,
    name: Option<String>,
    width: Option<i32>,
    height: Option<i32>,
    description: Option<String>,
}

impl SettingsBuilder {
    /// Creates a new settings builder.
    pub fn new() -> Self {
        Default::default()
    }

    /// Sets the target URL.
    ///
    /// # Required
    ///
    /// This field is required for building.
    pub fn url(mut self, url: SiteUrl) -> Self {
        self.url = Some(url);
        self
    }

    /// Sets the app name. Used verbatim when present.
    ///
    /// Default: hostname of the URL
    pub fn name(mut self, name: Option<String>) -> Self {
        self.name = name;
        self
    }

    /// Default: 800
    pub fn width(mut self, width: i32) -> Self {
        self.width = Some(width);
        self
    }

    /// Default: 600
    pub fn height(mut self, height: i32) -> Self {
        self.height = Some(height);
        self
    }

    /// Default: "a native web app"
    pub fn description(mut self, description: Option<String>) -> Self {
        self.description = description;
        self
    }

    /// Builds the settings.
    ///
    /// # Errors
    ///
    /// - `InvalidArguments` if no URL was set
    /// - `UnresolvedName` if no name was given and the URL has no extractable hostname
    /// - `InvalidName` if the name would not stay a single file on the desktop
    pub fn build(self) -> Result<AppSettings> {
        let url = self.url.ok_or_else(|| CliError::InvalidArguments {
            reason: "url is required".to_string(),
        })?;

        let name = match self.name {
            Some(name) => name,
            None => url.hostname().ok_or_else(|| CliError::UnresolvedName {
                url: url.to_string(),
            })?,
        };
        if !is_file_stem(&name) {
            return Err(CliError::InvalidName { name }.into());
        }
        log::debug!("Resolved app name: {}", name);

        Ok(AppSettings::new(
            url,
            name,
            self.width.unwrap_or(DEFAULT_WIDTH),
            self.height.unwrap_or(DEFAULT_HEIGHT),
            self.description
                .unwrap_or_else(|| DEFAULT_DESCRIPTION.to_string()),
        ))
    }
}

/// Name usable as `<name>.lnk` directly inside the desktop folder.
fn is_file_stem(name: &str) -> bool {
    !name.is_empty() && name != "." && name != ".." && !name.contains(['/', '\\'])
}
