pub mod comprehensive_service;
pub mod report_service;
pub mod score_service;
pub mod site_audit_service;
pub mod social_service;

pub use comprehensive_service::{comprehensive_audit, ComprehensiveError};
pub use report_service::{render_report, report_filename};
pub use score_service::presence_score;
pub use site_audit_service::{
    audit_business, audit_website, crawl, summarize_pagespeed, AuditError,
};
pub use social_service::{analyze_social, SocialError};
