pub mod content;
pub mod local;
pub mod pagespeed;
pub mod registry;
pub mod reviews;
pub mod security;
pub mod seo;
pub mod social_links;

pub use content::{analyze_content, content_proxy_score};
pub use seo::analyze_seo;
pub use social_links::analyze_social_links;
