//! Favicon discovery for the target site.
//!
//! The page is requested once. The first `<link rel="icon">` (or
//! `rel="shortcut icon"`) href wins; otherwise the site's `/favicon.ico` is
//! assumed. Only `.ico` locations are accepted for the shortcut.

mod http;

pub use http::{Page, client, fetch_page};

use crate::error::Result;
use regex::Regex;
use std::sync::LazyLock;
use url::Url;

/// Regions whose text is not markup: comments and raw-text elements.
static NON_MARKUP: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)<!--.*?-->|<script\b.*?</script\s*>|<style\b.*?</style\s*>")
        .expect("non-markup pattern is valid")
});

static LINK_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<link\b[^>]*>").expect("link tag pattern is valid"));

static TAG_ATTRIBUTE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?is)\b(rel|href)\s*=\s*(?:"([^"]*)"|'([^']*)'|([^\s"'>]+))"#)
        .expect("attribute pattern is valid")
});

/// Discover the favicon location for `site`.
///
/// # Errors
///
/// Fails when `site` is not a parseable URL or the request itself fails.
pub async fn discover(client: &reqwest::Client, site: &str) -> Result<String> {
    let url = Url::parse(site)?;
    let page = fetch_page(client, &url).await?;

    let icon = page
        .body
        .as_deref()
        .and_then(find_icon_href)
        .and_then(|href| match page.url.join(&href) {
            Ok(resolved) => Some(resolved),
            Err(e) => {
                log::warn!("Ignoring icon href {:?}: {}", href, e);
                None
            }
        });

    let icon = match icon {
        Some(icon) => icon,
        None => {
            log::debug!("No icon link found, using /favicon.ico");
            page.url.join("/favicon.ico")?
        }
    };

    Ok(icon.to_string())
}

/// First `href` of a `<link>` tag whose `rel` tokens include `icon`.
///
/// Tags inside comments, `<script>` or `<style>` are not links and are skipped.
pub fn find_icon_href(html: &str) -> Option<String> {
    let markup = NON_MARKUP.replace_all(html, " ");
    LINK_TAG.find_iter(&markup).find_map(|tag| {
        let mut rel = None;
        let mut href = None;
        for caps in TAG_ATTRIBUTE.captures_iter(tag.as_str()) {
            let value = caps
                .get(2)
                .or_else(|| caps.get(3))
                .or_else(|| caps.get(4))
                .map(|m| m.as_str().trim().to_string());
            match caps[1].to_ascii_lowercase().as_str() {
                "rel" => rel = rel.or(value),
                _ => href = href.or(value),
            }
        }

        let is_icon = rel?
            .split_ascii_whitespace()
            .any(|token| token.eq_ignore_ascii_case("icon"));
        href.filter(|href| is_icon && !href.is_empty())
    })
}

/// Keep the icon only if it looks like an `.ico` resource.
///
/// A plain substring test: `favicon.ico?v=2` passes, and so does anything
/// else that happens to contain `.ico`. `None` means the platform default icon.
pub fn select_icon(candidate: &str) -> Option<String> {
    candidate.contains(".ico").then(|| candidate.to_string())
}
