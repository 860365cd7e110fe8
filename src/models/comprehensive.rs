use crate::models::pagespeed::Categories;
use serde::{Deserialize, Serialize};

/// First suggestion from the Clearbit autocomplete API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClearbitCompany {
    pub name: Option<String>,
    pub domain: Option<String>,
    #[serde(default)]
    pub logo: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DomainAge {
    pub created: Option<String>,
    pub updated: Option<String>,
    pub expires: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct YelpCategory {
    pub title: String,
}

/// Top Yelp Fusion search hit, kept close to the upstream shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct YelpBusiness {
    pub name: Option<String>,
    #[serde(default)]
    pub rating: f64,
    #[serde(default)]
    pub review_count: u64,
    #[serde(default)]
    pub categories: Vec<YelpCategory>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SafeBrowsingStatus {
    Safe,
    ThreatFound,
    Unknown,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComprehensiveAuditResponse {
    pub final_score: u8,
    pub on_page_seo_score: u8,
    pub brand_clarity_score: u8,
    pub local_seo_score: u8,
    pub safety_score: u8,
    pub logo_url: Option<String>,
    pub company_data: Option<ClearbitCompany>,
    pub pagespeed_data: Option<Categories>,
    pub domain_age_data: Option<DomainAge>,
    pub safe_browsing_status: SafeBrowsingStatus,
    pub yelp_data: Option<YelpBusiness>,
}
