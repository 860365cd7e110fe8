// src/services/site_audit_service/compute/mod.rs

pub mod recommend;
pub mod stats;
pub mod weights;

pub use recommend::{
    business_recommendations, social_recommendations, website_recommendations, EngagementSignals,
    MAX_RECOMMENDATIONS,
};
pub use stats::{estimate_percentile, percentile_bucket, presence_label, website_label};
pub use weights::{
    ScoreError, BUSINESS_WEIGHTS, COMPREHENSIVE_WEIGHTS, CRAWL_WEIGHTS,
    PRESENCE_WEIGHTS, WEBSITE_FALLBACK_WEIGHTS, WEBSITE_WEIGHTS,
};
