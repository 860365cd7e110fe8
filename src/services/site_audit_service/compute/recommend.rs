use crate::models::audit::{BreakdownItem, Category, ContentMetrics};

pub const MAX_RECOMMENDATIONS: usize = 5;
const CATEGORY_THRESHOLD: u8 = 70;
const LOW_RATING: f64 = 3.8;
const THIN_CONTENT_WORDS: usize = 500;
const MIN_CALLS_TO_ACTION: usize = 2;
const WEAK_SOCIAL: u8 = 50;

/// Signals outside the scored breakdown that still shape the advice.
#[derive(Debug, Clone, Default)]
pub struct EngagementSignals {
    pub yelp_rating: Option<f64>,
    pub google_rating: Option<f64>,
    pub social_score: Option<u8>,
    pub content: Option<ContentMetrics>,
}

fn score_of(breakdown: &[BreakdownItem], category: Category) -> u8 {
    breakdown
        .iter()
        .find(|item| item.label() == category.area())
        .map(BreakdownItem::score)
        .unwrap_or(0)
}

fn website_advice(category: Category, business_name: &str) -> Option<String> {
    let advice = match category {
        Category::Performance => {
            "Optimize images and enable caching to improve load times".to_string()
        }
        Category::Seo => {
            "Add structured data (Schema.org) for better search visibility".to_string()
        }
        Category::Accessibility => {
            "Improve mobile responsiveness and add alt text to images".to_string()
        }
        Category::Reputation => {
            "Enable HTTPS and add security headers for better trust".to_string()
        }
        Category::LocalVisibility => format!(
            "Claim the Google Business Profile and local directory listings for {}",
            business_name
        ),
        _ => return None,
    };
    Some(advice)
}

/// Advice for a website audit, in fixed category order, at most five items.
pub fn website_recommendations(
    business_name: &str,
    breakdown: &[BreakdownItem],
    signals: &EngagementSignals,
) -> Vec<String> {
    let mut recs: Vec<String> = [
        Category::Performance,
        Category::Seo,
        Category::Accessibility,
        Category::Reputation,
        Category::LocalVisibility,
    ]
    .into_iter()
    .filter(|category| score_of(breakdown, *category) < CATEGORY_THRESHOLD)
    .filter_map(|category| website_advice(category, business_name))
    .collect();

    let ratings: Vec<f64> = [signals.yelp_rating, signals.google_rating]
        .into_iter()
        .flatten()
        .collect();
    if !ratings.is_empty() {
        let average = ratings.iter().sum::<f64>() / ratings.len() as f64;
        if average < LOW_RATING {
            recs.push(
                "Encourage satisfied customers to leave Google or Yelp reviews".to_string(),
            );
        }
    }

    if signals.social_score.is_some_and(|score| score < WEAK_SOCIAL) {
        recs.push("Link your social profiles from the website and post updates regularly".to_string());
    }

    if let Some(content) = signals.content {
        if content.content_depth < THIN_CONTENT_WORDS {
            recs.push("Add more descriptive content to your homepage".to_string());
        }
        if content.cta_count < MIN_CALLS_TO_ACTION {
            recs.push("Add clear calls to action such as 'Book Now' or 'Get a Quote'".to_string());
        }
    }

    if recs.is_empty() {
        recs.push("Maintain your excellent digital presence with regular content updates".to_string());
        recs.push("Build quality backlinks from reputable industry sources".to_string());
        recs.push("Monitor Core Web Vitals and maintain fast load times".to_string());
    }

    recs.truncate(MAX_RECOMMENDATIONS);
    recs
}

pub fn business_recommendations(breakdown: &[BreakdownItem]) -> Vec<String> {
    let mut recs: Vec<String> = [
        (Category::GooglePresence, "Claim and optimize your Google Business Profile"),
        (Category::ReviewSites, "Create and manage your Yelp business listing"),
        (
            Category::LocalVisibility,
            "Add your business to local directories and map services",
        ),
        (
            Category::Website,
            "Create a professional website to establish credibility",
        ),
    ]
    .into_iter()
    .filter(|(category, _)| score_of(breakdown, *category) < CATEGORY_THRESHOLD)
    .map(|(_, advice)| advice.to_string())
    .collect();

    recs.push("Encourage satisfied customers to leave reviews".to_string());
    recs.push("Keep your business information consistent across all platforms".to_string());
    recs.truncate(MAX_RECOMMENDATIONS);
    recs
}

pub fn social_recommendations() -> Vec<String> {
    [
        "Post consistently 3-5 times per week across all platforms",
        "Use platform-specific features like Reels, Stories, and TikTok trends",
        "Engage with your audience through comments and direct messages",
        "Create a content calendar for consistent branding",
        "Track analytics and adjust strategy based on performance",
    ]
    .into_iter()
    .map(String::from)
    .take(MAX_RECOMMENDATIONS)
    .collect()
}
