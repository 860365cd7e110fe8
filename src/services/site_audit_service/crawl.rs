use crate::models::audit::Category;
use crate::models::crawl::CrawlResponse;
use crate::services::site_audit_service::compute::CRAWL_WEIGHTS;
use crate::utils::AUDIT_USER_AGENT;
use anyhow::{Context, Result};
use log::debug;
use reqwest::header::{ACCEPT, USER_AGENT};
use reqwest::Client;
use scraper::{Html, Selector};
use std::sync::LazyLock;

const CRAWL_NOTE: &str =
    "Fallback crawl mode used. Approximate score based on live HTML scan.";

fn selector(css: &str) -> Selector {
    Selector::parse(css).expect("static selector")
}

static TITLE: LazyLock<Selector> = LazyLock::new(|| selector("title"));
static META_DESCRIPTION: LazyLock<Selector> =
    LazyLock::new(|| selector(r#"meta[name="description"]"#));
static H1: LazyLock<Selector> = LazyLock::new(|| selector("h1"));
static IMG: LazyLock<Selector> = LazyLock::new(|| selector("img"));
static SCRIPT: LazyLock<Selector> = LazyLock::new(|| selector("script"));

/// Fetches the page and scans whatever body comes back, error pages included.
pub async fn crawl(client: &Client, url: &str) -> Result<CrawlResponse> {
    let response = client
        .get(url)
        .header(USER_AGENT, AUDIT_USER_AGENT)
        .header(ACCEPT, "text/html,application/xhtml+xml")
        .send()
        .await
        .with_context(|| format!("failed to fetch {}", url))?;
    debug!("crawl of {} answered {}", url, response.status());
    let html = response
        .text()
        .await
        .with_context(|| format!("failed to read body of {}", url))?;
    scan(url, &html)
}

/// Structural scan: heading, image and script counts plus title and meta
/// description, scored with the crawl weight table.
pub fn scan(url: &str, html: &str) -> Result<CrawlResponse> {
    let document = Html::parse_document(html);
    let title = document
        .select(&TITLE)
        .flat_map(|title| title.text())
        .collect::<String>()
        .trim()
        .to_string();
    let meta_desc = document
        .select(&META_DESCRIPTION)
        .next()
        .and_then(|meta| meta.value().attr("content"))
        .unwrap_or_default()
        .to_string();
    let h1_count = document.select(&H1).count();
    let img_count = document.select(&IMG).count();
    let script_count = document.select(&SCRIPT).count();

    let seo_score = ((if meta_desc.chars().count() > 50 { 80 } else { 50 }) + h1_count * 5).min(100);
    let content_score = ((if title.is_empty() { 0 } else { 20 }) + (img_count * 2).min(40)).min(100);
    let tech_score = (script_count * 4).min(100);

    let overall = CRAWL_WEIGHTS.overall(&[
        (Category::Seo, seo_score as f64),
        (Category::Content, content_score as f64),
        (Category::Technology, tech_score as f64),
    ])?;

    Ok(CrawlResponse {
        url: url.to_string(),
        fallback: true,
        title,
        meta_desc,
        h1_count,
        img_count,
        script_count,
        seo_score: seo_score as u8,
        content_score: content_score as u8,
        tech_score: tech_score as u8,
        overall,
        note: CRAWL_NOTE.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scans_page_structure() {
        let html = r#"<html><head><title> Joe's Pizza </title>
            <meta content="Family-owned pizzeria serving classic New York slices since 1975" name="description">
            <script src="/app.js"></script><script>track()</script></head>
            <body><h1>Joe's</h1><h1 class="x">Menu</h1><img src="a.jpg"><img/></body></html>"#;
        let result = scan("https://joespizzanyc.com", html).unwrap();

        assert_eq!(result.title, "Joe's Pizza");
        assert!(result.meta_desc.starts_with("Family-owned"));
        assert_eq!((result.h1_count, result.img_count, result.script_count), (2, 2, 2));
        assert_eq!(result.seo_score, 90);
        assert_eq!(result.content_score, 24);
        assert_eq!(result.tech_score, 8);
        // 90*.4 + 24*.3 + 8*.3
        assert_eq!(result.overall, 46);
        assert!(result.fallback);
    }

    #[test]
    fn empty_page_scores_floor() {
        let result = scan("https://example.com", "").unwrap();
        assert_eq!(result.seo_score, 50);
        assert_eq!(result.content_score, 0);
        assert_eq!(result.overall, 20);
    }

    #[test]
    fn scores_saturate() {
        let html = format!("<title>t</title>{}{}", "<img>".repeat(50), "<script></script>".repeat(40));
        let result = scan("https://example.com", &html).unwrap();
        assert_eq!(result.content_score, 60);
        assert_eq!(result.tech_score, 100);
    }

    #[test]
    fn entities_and_unquoted_attributes_are_decoded() {
        let html = r#"<title>Joe &amp; Sons</title>
            <meta name=description content="Pizza &amp; pasta from the same oven since 1975, family owned and run">"#;
        let result = scan("https://joeandsons.com", html).unwrap();

        assert_eq!(result.title, "Joe & Sons");
        assert_eq!(
            result.meta_desc,
            "Pizza & pasta from the same oven since 1975, family owned and run"
        );
        assert_eq!(result.seo_score, 80);
    }

    #[tokio::test]
    async fn error_pages_are_still_scanned() {
        use crate::test_support::{spawn_upstream, state_for};
        use axum::http::StatusCode;
        use axum::response::Html as HtmlBody;
        use axum::routing::get;
        use axum::Router;

        let router = Router::new().route(
            "/gone",
            get(|| async { (StatusCode::NOT_FOUND, HtmlBody("<title>Not Found</title><h1>404</h1>")) }),
        );
        let base = spawn_upstream(router).await;
        let state = state_for(&base);

        let result = crawl(&state.http, &format!("{}/gone", base)).await.unwrap();
        assert_eq!(result.title, "Not Found");
        assert_eq!(result.h1_count, 1);
    }
}
