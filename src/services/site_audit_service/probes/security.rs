use crate::models::audit::{ProbeResult, SecurityData};
use crate::utils::{is_https, BOT_USER_AGENT};
use anyhow::{Context, Result};
use reqwest::header::{
    CONTENT_SECURITY_POLICY, STRICT_TRANSPORT_SECURITY, USER_AGENT, X_FRAME_OPTIONS,
};
use reqwest::Client;

/// HEADs the site and scores its security headers.
pub async fn check_security(client: &Client, url: &str) -> Result<ProbeResult<SecurityData>> {
    let response = client
        .head(url)
        .header(USER_AGENT, BOT_USER_AGENT)
        .send()
        .await
        .with_context(|| format!("HEAD {} failed", url))?;

    let headers = response.headers();
    Ok(score_security(SecurityData {
        is_https: is_https(url),
        has_hsts: headers.contains_key(STRICT_TRANSPORT_SECURITY),
        has_csp: headers.contains_key(CONTENT_SECURITY_POLICY),
        has_x_frame_options: headers.contains_key(X_FRAME_OPTIONS),
        verified: true,
    }))
}

pub fn score_security(data: SecurityData) -> ProbeResult<SecurityData> {
    let mut score = if data.is_https { 60 } else { 20 };
    if data.has_hsts {
        score += 15;
    }
    if data.has_csp {
        score += 15;
    }
    if data.has_x_frame_options {
        score += 10;
    }

    let feedback = if score >= 80 {
        "Excellent security posture"
    } else if score >= 60 {
        "Good security, consider adding CSP"
    } else if data.is_https {
        "HTTPS enabled, add security headers"
    } else {
        "Critical: Enable HTTPS immediately"
    };
    ProbeResult::new(score, feedback, data)
}

/// Result when the headers could not be read.
pub fn unverified(url: &str) -> ProbeResult<SecurityData> {
    let https = is_https(url);
    let data = SecurityData {
        is_https: https,
        ..Default::default()
    };
    if https {
        ProbeResult::new(50, "HTTPS enabled, couldn't verify headers", data)
    } else {
        ProbeResult::new(20, "No HTTPS detected", data)
    }
}
