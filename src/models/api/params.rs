use serde::{Deserialize, Serialize};

pub const UNKNOWN_BUSINESS: &str = "Unknown Business";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    #[default]
    Website,
    Business,
    Social,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct SocialHandles {
    pub instagram: Option<String>,
    pub tiktok: Option<String>,
    pub facebook: Option<String>,
    pub linkedin: Option<String>,
}

/// Query string of `GET /api/check` and `GET /api/analyze-social`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParamsCheck {
    #[serde(default)]
    pub mode: Mode,
    pub url: Option<String>,
    pub business_name: Option<String>,
    pub instagram: Option<String>,
    pub tiktok: Option<String>,
    pub facebook: Option<String>,
    pub linkedin: Option<String>,
}

/// Caller input after presence checks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BusinessQuery {
    pub business_name: String,
    pub url: Option<String>,
    pub mode: Mode,
    pub social_handles: SocialHandles,
}

impl From<ParamsCheck> for BusinessQuery {
    fn from(params: ParamsCheck) -> Self {
        let business_name = params
            .business_name
            .filter(|name| !name.trim().is_empty())
            .unwrap_or_else(|| UNKNOWN_BUSINESS.to_string());
        Self {
            business_name,
            url: params.url.filter(|url| !url.trim().is_empty()),
            mode: params.mode,
            social_handles: SocialHandles {
                instagram: params.instagram,
                tiktok: params.tiktok,
                facebook: params.facebook,
                linkedin: params.linkedin,
            },
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct ParamsUrl {
    pub url: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComprehensiveAuditRequest {
    pub business_name: Option<String>,
    pub website_url: Option<String>,
    pub location: Option<String>,
}

/// Caller-supplied raw sub-scores for `POST /api/score`.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreRequest {
    pub business_name: String,
    #[serde(rename = "websiteURL")]
    pub website_url: String,
    pub performance: f64,
    pub seo: f64,
    pub tech_depth: f64,
    pub visibility: f64,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportRequest {
    pub business_name: String,
    #[serde(rename = "websiteURL")]
    pub website_url: String,
    pub performance: f64,
    pub seo: f64,
    pub tech_depth: f64,
    pub visibility: f64,
    pub total_score: f64,
    #[serde(default)]
    pub insights: Vec<String>,
}
