use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreResponse {
    pub business_name: String,
    #[serde(rename = "websiteURL")]
    pub website_url: String,
    pub performance: f64,
    pub seo: f64,
    pub tech_depth: f64,
    pub visibility: f64,
    pub total_score: u8,
    pub insights: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageSpeedSummary {
    pub url: String,
    pub performance: u8,
    pub seo: u8,
    pub fallback: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}
