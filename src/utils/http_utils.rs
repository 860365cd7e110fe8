use anyhow::{Context, Result};
use reqwest::header::{ACCEPT, USER_AGENT};
use reqwest::Client;

pub const AUDIT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) DominionAudit/1.0";
pub const BOT_USER_AGENT: &str = "Mozilla/5.0 DominionBot/1.0";
pub const BROWSER_USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36";

/// GETs a page as a browser would and returns its body.
pub async fn fetch_page(client: &Client, url: &str) -> Result<String> {
    let response = client
        .get(url)
        .header(USER_AGENT, AUDIT_USER_AGENT)
        .header(ACCEPT, "text/html,application/xhtml+xml")
        .send()
        .await
        .with_context(|| format!("failed to fetch {}", url))?
        .error_for_status()
        .with_context(|| format!("{} answered with an error status", url))?;

    response
        .text()
        .await
        .with_context(|| format!("failed to read body of {}", url))
}

/// Scheme check used by the security scoring.
pub fn is_https(url: &str) -> bool {
    url.starts_with("https://")
}
