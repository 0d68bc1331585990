//! Resolved application settings.

use crate::site::SiteUrl;

/// Default window width in pixels.
pub const DEFAULT_WIDTH: i32 = 800;

/// Default window height in pixels.
pub const DEFAULT_HEIGHT: i32 = 600;

/// Default shortcut description.
pub const DEFAULT_DESCRIPTION: &str = "a native web app";

/// Settings for one shortcut, constructed via [`SettingsBuilder`].
///
/// Immutable once built: every pipeline step receives it by reference.
///
/// # Examples
///
/// ```no_run
/// use natpp::settings::SettingsBuilder;
/// use natpp::site::SiteUrl;
///
/// # fn example() -> natpp::Result<()> {
/// let settings = SettingsBuilder::new()
///     .url(SiteUrl::parse("https://example.com/")?)
///     .width(1024)
///     .build()?;
/// assert_eq!(settings.name(), "example.com");
/// # Ok(())
/// # }
/// ```
///
/// [`SettingsBuilder`]: super::SettingsBuilder
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppSettings {
    url: SiteUrl,
    name: String,
    width: i32,
    height: i32,
    description: String,
}

impl AppSettings {
    pub fn url(&self) -> &SiteUrl {
        &self.url
    }

    /// App name, also the shortcut file stem.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Window width in pixels. Not range checked.
    pub fn width(&self) -> i32 {
        self.width
    }

    /// Window height in pixels. Not range checked.
    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub(super) fn new(
        url: SiteUrl,
        name: String,
        width: i32,
        height: i32,
        description: String,
    ) -> Self {
        Self {
            url,
            name,
            width,
            height,
            description,
        }
    }
}
