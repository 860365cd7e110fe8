use crate::models::pagespeed::Categories;
use crate::models::score::PageSpeedSummary;
use crate::utils::{fetch_page, looks_like_html, BOT_USER_AGENT};
use anyhow::{anyhow, Context, Result};
use log::warn;
use reqwest::header::{ACCEPT, USER_AGENT};
use reqwest::Client;

const BLOCKED_NOTE: &str = "Fallback mode: site blocked PageSpeed, estimated via direct crawl.";

/// Desktop performance and SEO for one URL. When PageSpeed answers with an
/// HTML page the site itself is fetched and roughly estimated instead.
pub async fn summarize(
    client: &Client,
    endpoint: &str,
    key: Option<&str>,
    url: &str,
) -> Result<PageSpeedSummary> {
    let mut query = vec![
        ("url", url),
        ("category", "performance"),
        ("category", "seo"),
        ("strategy", "desktop"),
    ];
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
        .await?;

    if looks_like_html(&body) {
        warn!("PageSpeed returned HTML for {}, estimating from the page", url);
        let html = fetch_page(client, url).await?;
        return Ok(estimate(url, &html));
    }

    let value: serde_json::Value = serde_json::from_str(&body).context("malformed PageSpeed JSON")?;
    let categories: Categories = value
        .pointer("/lighthouseResult/categories")
        .cloned()
        .map(serde_json::from_value::<Categories>)
        .transpose()?
        .ok_or_else(|| anyhow!("Missing expected data in PageSpeed response. Try another site."))?;

    Ok(PageSpeedSummary {
        url: url.to_string(),
        performance: percent(Categories::raw(&categories.performance)),
        seo: percent(Categories::raw(&categories.seo)),
        fallback: false,
        note: None,
    })
}

fn percent(raw: f64) -> u8 {
    (raw * 100.0).round().clamp(0.0, 100.0) as u8
}

/// Script tags suggest a heavier page; meta or title tags suggest basic SEO.
pub fn estimate(url: &str, html: &str) -> PageSpeedSummary {
    let has_meta = html.contains("<meta") || html.contains("<title>");
    let has_scripts = html.contains("<script");
    PageSpeedSummary {
        url: url.to_string(),
        performance: if has_scripts { 60 } else { 80 },
        seo: if has_meta { 75 } else { 50 },
        fallback: true,
        note: Some(BLOCKED_NOTE.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{spawn_upstream, state_for, JOES_PIZZA_HTML, PAGESPEED_REPORT};
    use axum::routing::get;
    use axum::Router;

    #[test]
    fn estimates_from_markup() {
        let summary = estimate("https://a.com", "<title>A</title><script></script>");
        assert_eq!((summary.performance, summary.seo), (60, 75));
        assert!(summary.fallback);

        let bare = estimate("https://a.com", "<p>hello</p>");
        assert_eq!((bare.performance, bare.seo), (80, 50));
    }

    #[tokio::test]
    async fn reads_desktop_scores() {
        let base = spawn_upstream(Router::new().route("/pagespeed", get(|| async { PAGESPEED_REPORT }))).await;
        let state = state_for(&base);

        let summary = summarize(&state.http, &state.config.endpoints.pagespeed, None, "https://a.com")
            .await
            .unwrap();
        assert_eq!((summary.performance, summary.seo), (90, 92));
        assert!(!summary.fallback);
    }

    #[tokio::test]
    async fn html_answer_falls_back_to_the_page() {
        let router = Router::new()
            .route("/pagespeed", get(|| async { "<!DOCTYPE html><html>blocked</html>" }))
            .route("/site", get(|| async { axum::response::Html(JOES_PIZZA_HTML) }));
        let base = spawn_upstream(router).await;
        let state = state_for(&base);
        let url = format!("{}/site", base);

        let summary = summarize(&state.http, &state.config.endpoints.pagespeed, None, &url)
            .await
            .unwrap();
        assert!(summary.fallback);
        assert_eq!((summary.performance, summary.seo), (60, 75));
    }

    #[tokio::test]
    async fn missing_categories_is_an_error() {
        let base = spawn_upstream(
            Router::new().route("/pagespeed", get(|| async { r#"{"error":{"code":500}}"# })),
        )
        .await;
        let state = state_for(&base);

        let err = summarize(&state.http, &state.config.endpoints.pagespeed, None, "https://a.com")
            .await
            .unwrap_err();
        assert!(err.to_string().contains("Missing expected data"));
    }
}
