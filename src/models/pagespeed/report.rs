use crate::models::pagespeed::category::Categories;
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct LighthouseResult {
    #[serde(default)]
    pub requested_url: Option<String>,
    pub categories: Option<Categories>,
}

/// Top level of a `runPagespeed` response; only the parts we score.
#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Root {
    pub lighthouse_result: Option<LighthouseResult>,
}

impl Root {
    pub fn categories(&self) -> Option<&Categories> {
        self.lighthouse_result
            .as_ref()
            .and_then(|result| result.categories.as_ref())
    }
}

/// Primary scores the website synthesizer needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrimaryScores {
    pub performance: u8,
    pub accessibility: u8,
}
