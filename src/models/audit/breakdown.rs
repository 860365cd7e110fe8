use crate::models::audit::category::Category;
use serde::{Deserialize, Serialize};

/// One scored website/business category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryBreakdown {
    pub area: String,
    pub score: u8,
    pub ten_scale: f64,
    pub feedback: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlatformMetrics {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub followers: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub engagement: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub posts_per_week: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub brand_consistency: Option<u8>,
}

/// One analyzed social profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlatformAnalysis {
    pub platform: String,
    pub handle: String,
    pub score: u8,
    pub metrics: PlatformMetrics,
    pub feedback: String,
}

/// A breakdown row is either a scored category or a social platform.
/// Serialized without a tag so each variant keeps its own wire shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum BreakdownItem {
    Category(CategoryBreakdown),
    Platform(PlatformAnalysis),
}

impl BreakdownItem {
    pub fn category(category: Category, score: u8, feedback: impl Into<String>) -> Self {
        BreakdownItem::Category(CategoryBreakdown {
            area: category.area().to_string(),
            score,
            ten_scale: ten_scale(score),
            feedback: feedback.into(),
        })
    }

    pub fn label(&self) -> &str {
        match self {
            BreakdownItem::Category(item) => &item.area,
            BreakdownItem::Platform(item) => &item.platform,
        }
    }

    pub fn score(&self) -> u8 {
        match self {
            BreakdownItem::Category(item) => item.score,
            BreakdownItem::Platform(item) => item.score,
        }
    }

    pub fn feedback(&self) -> &str {
        match self {
            BreakdownItem::Category(item) => &item.feedback,
            BreakdownItem::Platform(item) => &item.feedback,
        }
    }
}

/// Maps a 0-100 score onto a 1-10 rating with one decimal.
pub fn ten_scale(score: u8) -> f64 {
    if score == 0 {
        return 1.0;
    }
    (f64::from(score) / 10.0).clamp(1.0, 10.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ten_scale_floors_at_one() {
        assert_eq!(ten_scale(0), 1.0);
        assert_eq!(ten_scale(5), 1.0);
        assert_eq!(ten_scale(73), 7.3);
        assert_eq!(ten_scale(100), 10.0);
    }

    #[test]
    fn accessors_cover_both_variants() {
        let category = BreakdownItem::category(Category::Seo, 70, "Good SEO");
        assert_eq!(category.label(), "SEO");
        assert_eq!(category.score(), 70);

        let platform = BreakdownItem::Platform(PlatformAnalysis {
            platform: "TikTok".to_string(),
            handle: "@joespizza".to_string(),
            score: 50,
            metrics: PlatformMetrics::default(),
            feedback: "Active TikTok presence detected".to_string(),
        });
        assert_eq!(platform.label(), "TikTok");
        assert_eq!(platform.feedback(), "Active TikTok presence detected");
    }

    #[test]
    fn category_rows_serialize_flat() {
        let value = serde_json::to_value(BreakdownItem::category(
            Category::LocalVisibility,
            75,
            "Business found in map databases",
        ))
        .unwrap();
        assert_eq!(value["area"], "Local Visibility");
        assert_eq!(value["tenScale"], 7.5);
    }
}
