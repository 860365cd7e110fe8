use crate::models::comprehensive::{ClearbitCompany, DomainAge, SafeBrowsingStatus, YelpBusiness};
use crate::services::site_audit_service::probes::reviews;
use anyhow::{Context, Result};
use log::debug;
use reqwest::Client;
use serde::Deserialize;
use serde_json::json;

/// Top Clearbit autocomplete suggestion for the business name.
pub async fn clearbit_company(
    client: &Client,
    endpoint: &str,
    business_name: &str,
) -> Result<Option<ClearbitCompany>> {
    let suggestions: Vec<ClearbitCompany> = client
        .get(endpoint)
        .query(&[("query", business_name)])
        .send()
        .await
        .context("Clearbit autocomplete request failed")?
        .error_for_status()?
        .json()
        .await
        .context("malformed Clearbit response")?;
    Ok(suggestions.into_iter().next())
}

/// Logo URL for `domain` if Clearbit has one.
pub async fn clearbit_logo(client: &Client, endpoint: &str, domain: &str) -> Result<Option<String>> {
    let logo_url = format!("{}/{}?size=200", endpoint, domain);
    let status = client
        .head(&logo_url)
        .send()
        .await
        .context("Clearbit logo request failed")?
        .status();
    debug!("Clearbit logo for {}: {}", domain, status);
    Ok(status.is_success().then_some(logo_url))
}

#[derive(Debug, Deserialize)]
struct ThreatMatches {
    #[serde(default)]
    matches: Vec<serde_json::Value>,
}

pub async fn safe_browsing_status(
    client: &Client,
    endpoint: &str,
    key: Option<&str>,
    url: &str,
) -> Result<SafeBrowsingStatus> {
    let Some(key) = key else {
        return Ok(SafeBrowsingStatus::Unknown);
    };

    let body = json!({
        "client": { "clientId": "auditTool", "clientVersion": "1.0" },
        "threatInfo": {
            "threatTypes": ["MALWARE", "SOCIAL_ENGINEERING", "UNWANTED_SOFTWARE"],
            "platformTypes": ["ANY_PLATFORM"],
            "threatEntryTypes": ["URL"],
            "threatEntries": [{ "url": url }],
        },
    });
    let response = client
        .post(endpoint)
        .query(&[("key", key)])
        .json(&body)
        .send()
        .await
        .context("Safe Browsing request failed")?;
    if !response.status().is_success() {
        return Ok(SafeBrowsingStatus::Unknown);
    }

    let found: ThreatMatches = response.json().await.context("malformed Safe Browsing response")?;
    Ok(if found.matches.is_empty() {
        SafeBrowsingStatus::Safe
    } else {
        SafeBrowsingStatus::ThreatFound
    })
}

/// Best Yelp match near `location`; none without an API key.
pub async fn top_yelp_business(
    client: &Client,
    endpoint: &str,
    key: Option<&str>,
    business_name: &str,
    location: &str,
) -> Result<Option<YelpBusiness>> {
    let Some(key) = key else {
        return Ok(None);
    };
    let businesses =
        reviews::search_yelp_businesses(client, endpoint, key, business_name, Some(location), 1)
            .await?;
    Ok(businesses.into_iter().next())
}

#[derive(Debug, Deserialize)]
struct DomainSearch {
    #[serde(default)]
    domains: Vec<DomainRecord>,
}

#[derive(Debug, Deserialize)]
struct DomainRecord {
    create_date: Option<String>,
    update_date: Option<String>,
    expiration_date: Option<String>,
}

/// Registration dates from domainsdb.info.
pub async fn domain_age(client: &Client, endpoint: &str, domain: &str) -> Result<Option<DomainAge>> {
    let search: DomainSearch = client
        .get(endpoint)
        .query(&[("domain", domain)])
        .send()
        .await
        .context("domainsdb request failed")?
        .error_for_status()?
        .json()
        .await
        .context("malformed domainsdb response")?;

    Ok(search.domains.into_iter().next().map(|record| DomainAge {
        created: record.create_date,
        updated: record.update_date,
        expires: record.expiration_date,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{spawn_upstream, state_for};
    use axum::routing::{get, post};
    use axum::{Json, Router};

    #[tokio::test]
    async fn safe_browsing_without_key_is_unknown() {
        let state = state_for("http://127.0.0.1:9");
        let status = safe_browsing_status(&state.http, &state.config.endpoints.safe_browsing, None, "https://a.com")
            .await
            .unwrap();
        assert_eq!(status, SafeBrowsingStatus::Unknown);
    }

    #[tokio::test]
    async fn threat_matches_are_reported() {
        let router = Router::new().route(
            "/safebrowsing",
            post(|| async { Json(json!({"matches": [{"threatType": "MALWARE"}]})) }),
        );
        let base = spawn_upstream(router).await;
        let state = state_for(&base);

        let status = safe_browsing_status(
            &state.http,
            &state.config.endpoints.safe_browsing,
            Some("key"),
            "https://bad.example",
        )
        .await
        .unwrap();
        assert_eq!(status, SafeBrowsingStatus::ThreatFound);
    }

    #[tokio::test]
    async fn logo_and_domain_lookups() {
        let router = Router::new()
            .route("/clearbit/logo/joespizzanyc.com", get(|| async { "png" }))
            .route(
                "/domainsdb",
                get(|| async {
                    Json(json!({"domains": [{"domain": "joespizzanyc.com",
                        "create_date": "2012-03-04T10:00:00.123456", "update_date": null}]}))
                }),
            );
        let base = spawn_upstream(router).await;
        let state = state_for(&base);
        let endpoints = &state.config.endpoints;

        let logo = clearbit_logo(&state.http, &endpoints.clearbit_logo, "joespizzanyc.com")
            .await
            .unwrap();
        assert_eq!(
            logo,
            Some(format!("{}/clearbit/logo/joespizzanyc.com?size=200", base))
        );
        let missing = clearbit_logo(&state.http, &endpoints.clearbit_logo, "nope.com")
            .await
            .unwrap();
        assert_eq!(missing, None);

        let age = domain_age(&state.http, &endpoints.domainsdb, "joespizzanyc.com")
            .await
            .unwrap()
            .unwrap();
        assert_eq!(age.created.as_deref(), Some("2012-03-04T10:00:00.123456"));
        assert_eq!(age.updated, None);
    }
}
