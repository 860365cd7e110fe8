use crate::models::audit::breakdown::BreakdownItem;
use crate::models::audit::category::Label;
use crate::models::audit::probe::{
    FirmographicData, LocalListingData, NycData, ReviewData, SocialMediaData,
};
use serde::Serialize;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryRatings {
    pub performance: f64,
    pub seo: f64,
    pub accessibility: f64,
    pub reputation: f64,
    pub local_visibility: f64,
    pub social: f64,
}

/// Response of a website-mode audit.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditResult {
    pub audit_id: Uuid,
    pub url: String,
    pub business_name: String,
    pub overall_score: u8,
    /// Illustrative estimate, not a measured statistic.
    pub percentile: u8,
    pub label: Label,
    pub breakdown: Vec<BreakdownItem>,
    pub recommendations: Vec<String>,
    pub source: String,
    pub used_fallback: bool,
    pub category_ratings: CategoryRatings,
    pub firmographic_data: FirmographicData,
    pub local_listing_data: LocalListingData,
    pub nyc_data: NycData,
    pub yelp_data: ReviewData,
    pub google_business_data: ReviewData,
    pub social_media_data: SocialMediaData,
}

/// Response of a business-mode audit.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BusinessResult {
    pub audit_id: Uuid,
    pub business_name: String,
    pub overall_score: u8,
    pub label: Label,
    pub breakdown: Vec<BreakdownItem>,
    pub recommendations: Vec<String>,
    pub source: String,
    pub found_website: Option<String>,
    pub firmographic_data: FirmographicData,
    pub nyc_data: NycData,
}

/// Response of a social-mode audit.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SocialResult {
    pub mode: &'static str,
    pub business_name: String,
    pub overall_score: u8,
    pub label: Label,
    pub breakdown: Vec<BreakdownItem>,
    pub summary: String,
    pub recommendations: Vec<String>,
}
