use crate::models::audit::ContentMetrics;
use crate::utils::{strip_tags, visible_text};
use regex::Regex;
use std::sync::LazyLock;

static CALLS_TO_ACTION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)book now|get a quote|contact us|call now|schedule|order now|buy now|sign up|learn more|get started",
    )
    .expect("cta regex")
});

pub fn analyze_content(html: &str) -> ContentMetrics {
    ContentMetrics {
        content_depth: visible_text(html).split_whitespace().count(),
        cta_count: CALLS_TO_ACTION.find_iter(html).count(),
    }
}

/// Performance proxy used when PageSpeed is unavailable: 50 plus 10 per full
/// 2500 characters of tag-stripped text, capped at 100.
pub fn content_proxy_score(html: &str) -> u8 {
    let length = strip_tags(html).chars().count();
    (length / 2500 * 10 + 50).min(100) as u8
}
