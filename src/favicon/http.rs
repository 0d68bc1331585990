//! HTTP utilities for favicon discovery.

use crate::error::Result;
use url::Url;

/// User agent sent with the page request.
const USER_AGENT: &str = concat!("natpp/", env!("CARGO_PKG_VERSION"));

/// Fetched page: final URL after redirects plus body when the status was a success.
#[derive(Debug)]
pub struct Page {
    /// URL the response came from, used to resolve relative hrefs.
    pub url: Url,
    /// `None` for non-success statuses.
    pub body: Option<String>,
}

/// Client used for the favicon request.
pub fn client() -> Result<reqwest::Client> {
    Ok(reqwest::Client::builder().user_agent(USER_AGENT).build()?)
}

/// Fetches a page for `<link>` scanning.
///
/// Transport failures are errors. A non-success status is not: the caller
/// falls back to the conventional `/favicon.ico` location instead.
pub async fn fetch_page(client: &reqwest::Client, url: &Url) -> Result<Page> {
    log::info!("Fetching {}", url);

    let response = client.get(url.clone()).send().await?;
    let final_url = response.url().clone();
    let status = response.status();

    if !status.is_success() {
        log::warn!("{} responded with {}", final_url, status);
        return Ok(Page {
            url: final_url,
            body: None,
        });
    }

    let body = response.text().await?;
    Ok(Page {
        url: final_url,
        body: Some(body),
    })
}
