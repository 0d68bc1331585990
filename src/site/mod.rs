//! Target site URL handling

use crate::error::{CliError, Result};
use regex::Regex;
use std::fmt;
use std::sync::LazyLock;

/// Scheme separator, optional `www`/`www<digit>` prefix, then everything up to `/` or `:`.
static HOSTNAME_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)://(www[0-9]?\.)?(.[^/:]+)").expect("hostname pattern is valid")
});

/// URL the shortcut opens, kept verbatim as the user typed it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteUrl(String);

impl SiteUrl {
    /// Accepts any argument containing `http` somewhere in it.
    ///
    /// This is a loose gate rather than URL validation: scheme-less input and
    /// malformed URLs that happen to contain the substring still pass.
    pub fn parse(raw: &str) -> Result<Self> {
        if !raw.contains("http") {
            return Err(CliError::InvalidUrl {
                url: raw.to_string(),
            }
            .into());
        }
        Ok(Self(raw.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Hostname used as the fallback app name.
    pub fn hostname(&self) -> Option<String> {
        extract_hostname(&self.0)
    }
}

impl fmt::Display for SiteUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Extract the hostname from a URL, dropping a leading `www.` or `www<digit>.`.
///
/// Returns `None` when the URL has no `://` or the host is a single character.
/// Hosts are not otherwise interpreted, so IPv6 literals come back as whatever
/// the pattern captures.
pub fn extract_hostname(url: &str) -> Option<String> {
    HOSTNAME_PATTERN
        .captures(url)
        .and_then(|caps| caps.get(2))
        .map(|m| m.as_str())
        .filter(|host| !host.is_empty())
        .map(str::to_string)
}
