use serde::{Deserialize, Serialize};

// score of a single lighthouse category, 0.0..=1.0
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Category {
    pub score: Option<f64>,
}

impl Category {
    /// Score on the 0-100 scale. Zero is treated like an absent score, the
    /// way PageSpeed reports categories it could not measure.
    pub fn percent(&self) -> Option<u8> {
        self.score
            .filter(|score| *score > 0.0)
            .map(|score| (score * 100.0).round().clamp(0.0, 100.0) as u8)
    }
}

// lighthouse categories returned by PageSpeed Insights
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
pub struct Categories {
    pub performance: Option<Category>,
    pub accessibility: Option<Category>,
    #[serde(rename = "best-practices")]
    pub best_practices: Option<Category>,
    pub seo: Option<Category>,
}

impl Categories {
    pub fn performance(&self) -> Option<u8> {
        self.performance.as_ref().and_then(Category::percent)
    }

    pub fn accessibility(&self) -> Option<u8> {
        self.accessibility.as_ref().and_then(Category::percent)
    }

    pub fn seo(&self) -> Option<u8> {
        self.seo.as_ref().and_then(Category::percent)
    }

    /// Raw 0.0..=1.0 score, missing treated as zero.
    pub fn raw(category: &Option<Category>) -> f64 {
        category.as_ref().and_then(|c| c.score).unwrap_or(0.0)
    }
}
