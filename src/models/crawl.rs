use serde::{Deserialize, Serialize};

/// Structural scan of a single page.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CrawlResponse {
    pub url: String,
    pub fallback: bool,
    pub title: String,
    pub meta_desc: String,
    pub h1_count: usize,
    pub img_count: usize,
    pub script_count: usize,
    pub seo_score: u8,
    pub content_score: u8,
    pub tech_score: u8,
    pub overall: u8,
    pub note: String,
}
