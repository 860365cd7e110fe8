pub mod params;

pub use params::{
    BusinessQuery, ComprehensiveAuditRequest, Mode, ParamsCheck, ParamsUrl, ReportRequest,
    ScoreRequest, SocialHandles,
};
