// src/services/site_audit_service/mod.rs

pub mod business;
pub mod compute;
pub mod crawl;
pub mod error;
pub mod fanout;
pub mod pagespeed_summary;
pub mod probes;
pub mod website;

pub use business::audit_business;
pub use crawl::crawl;
pub use error::AuditError;
pub use fanout::FanOut;
pub use pagespeed_summary::summarize as summarize_pagespeed;
pub use website::audit_website;
