use crate::models::pagespeed::{PrimaryScores, Root};
use crate::utils::{looks_like_html, BOT_USER_AGENT};
use anyhow::{bail, Context, Result};
use log::debug;
use reqwest::header::{ACCEPT, USER_AGENT};
use reqwest::Client;

pub const AUDIT_CATEGORIES: [&str; 3] = ["PERFORMANCE", "SEO", "ACCESSIBILITY"];
pub const COMPREHENSIVE_CATEGORIES: [&str; 4] =
    ["performance", "seo", "accessibility", "best-practices"];

/// Calls `runPagespeed` and parses the report. An HTML body (PageSpeed error
/// pages, captive portals) is rejected before JSON parsing.
pub async fn fetch_report(
    client: &Client,
    endpoint: &str,
    key: Option<&str>,
    url: &str,
    categories: &[&str],
    strategy: Option<&str>,
) -> Result<Root> {
    let mut query: Vec<(&str, &str)> = vec![("url", url)];
    query.extend(categories.iter().map(|category| ("category", *category)));
    if let Some(strategy) = strategy {
        query.push(("strategy", strategy));
    }
    if let Some(key) = key {
        query.push(("key", key));
    }

    let body = client
        .get(endpoint)
        .query(&query)
        .header(USER_AGENT, BOT_USER_AGENT)
        .header(ACCEPT, "application/json")
        .send()
        .await
        .context("PageSpeed request failed")?
        .text()
        .await
        .context("failed to read PageSpeed body")?;

    parse_report(&body)
}

pub fn parse_report(body: &str) -> Result<Root> {
    if looks_like_html(body) {
        bail!("HTML returned instead of JSON");
    }
    let root: Root = serde_json::from_str(body).context("malformed PageSpeed JSON")?;
    debug!(
        "PageSpeed categories received: {:?}",
        root.categories().map(|c| (c.performance(), c.seo(), c.accessibility()))
    );
    Ok(root)
}

/// Performance and accessibility, only when both were measured.
pub fn primary_scores(root: &Root) -> Option<PrimaryScores> {
    let categories = root.categories()?;
    Some(PrimaryScores {
        performance: categories.performance()?,
        accessibility: categories.accessibility()?,
    })
}

pub const PERFORMANCE_FEEDBACK: &str = "Site speed and Core Web Vitals";
pub const ACCESSIBILITY_FEEDBACK: &str = "Mobile-friendliness and ADA compliance";
