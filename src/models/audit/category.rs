use serde::{Deserialize, Serialize};
use std::fmt;

/// Every scored dimension across the audit modes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Performance,
    Seo,
    Accessibility,
    Reputation,
    LocalVisibility,
    Social,
    GooglePresence,
    ReviewSites,
    Website,
    OnPageSeo,
    BrandClarity,
    LocalSeo,
    Safety,
    TechDepth,
    Visibility,
    Content,
    Technology,
}

impl Category {
    /// Display name used as `area` in breakdown items.
    pub fn area(self) -> &'static str {
        match self {
            Category::Performance => "Performance",
            Category::Seo => "SEO",
            Category::Accessibility => "Accessibility",
            Category::Reputation => "Reputation",
            Category::LocalVisibility => "Local Visibility",
            Category::Social => "Social Engagement",
            Category::GooglePresence => "Google Presence",
            Category::ReviewSites => "Review Sites",
            Category::Website => "Website",
            Category::OnPageSeo => "On-Page SEO",
            Category::BrandClarity => "Brand Clarity",
            Category::LocalSeo => "Local SEO",
            Category::Safety => "Safety",
            Category::TechDepth => "Tech Depth",
            Category::Visibility => "Visibility",
            Category::Content => "Content",
            Category::Technology => "Technology",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.area())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Label {
    Excellent,
    Strong,
    Good,
    #[serde(rename = "Needs Work")]
    NeedsWork,
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Label::Excellent => "Excellent",
            Label::Strong => "Strong",
            Label::Good => "Good",
            Label::NeedsWork => "Needs Work",
        };
        write!(f, "{}", label)
    }
}
