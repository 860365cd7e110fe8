pub mod breakdown;
pub mod category;
pub mod probe;
pub mod result;

pub use breakdown::{ten_scale, BreakdownItem, PlatformAnalysis, PlatformMetrics};
pub use category::{Category, Label};
pub use probe::{
    ContentMetrics, FirmographicData, LocalListingData, NycData, ProbeResult, ReviewData,
    SearchPresence, SecurityData, SeoData, SocialMediaData,
};
pub use result::{AuditResult, BusinessResult, CategoryRatings, SocialResult};
