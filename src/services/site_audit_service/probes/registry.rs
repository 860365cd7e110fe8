use crate::models::audit::{FirmographicData, NycData, ProbeResult};
use anyhow::{Context, Result};
use log::debug;
use reqwest::Client;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct CompanySearch {
    results: Option<CompanyResults>,
}

#[derive(Debug, Deserialize)]
struct CompanyResults {
    #[serde(default)]
    companies: Vec<CompanyHit>,
}

#[derive(Debug, Deserialize)]
struct CompanyHit {
    company: Company,
}

#[derive(Debug, Deserialize)]
struct Company {
    name: Option<String>,
    current_status: Option<String>,
    jurisdiction_code: Option<String>,
    company_type: Option<String>,
}

/// OpenCorporates company search, first hit only.
pub async fn check_registration(
    client: &Client,
    endpoint: &str,
    business_name: &str,
) -> Result<ProbeResult<FirmographicData>> {
    let search: CompanySearch = client
        .get(endpoint)
        .query(&[("q", business_name), ("format", "json"), ("per_page", "1")])
        .send()
        .await
        .context("OpenCorporates request failed")?
        .error_for_status()?
        .json()
        .await
        .context("malformed OpenCorporates response")?;

    let company = search
        .results
        .and_then(|results| results.companies.into_iter().next())
        .map(|hit| hit.company);
    Ok(score_company(company))
}

fn score_company(company: Option<Company>) -> ProbeResult<FirmographicData> {
    let Some(company) = company else {
        return ProbeResult::new(
            40,
            "Business registration not found",
            FirmographicData::default(),
        );
    };

    debug!(
        "OpenCorporates match: {:?} ({:?})",
        company.name, company.current_status
    );
    let active = company
        .current_status
        .as_deref()
        .is_some_and(|status| status.eq_ignore_ascii_case("active"));
    let (score, feedback) = if active {
        (90, "Verified registered business")
    } else {
        (70, "Business registered but status unclear")
    };

    ProbeResult::new(
        score,
        feedback,
        FirmographicData {
            legal_name: company.name,
            registration_status: company.current_status,
            jurisdiction: company.jurisdiction_code,
            company_type: company.company_type,
            is_verified: true,
        },
    )
}

pub fn registration_unverified() -> ProbeResult<FirmographicData> {
    ProbeResult::new(
        50,
        "Unable to verify business registration",
        FirmographicData::default(),
    )
}

#[derive(Debug, Deserialize)]
struct NycRow {
    business_name: Option<String>,
    legal_business_name: Option<String>,
    facility_address: Option<String>,
}

/// NYC Open Data legally operating businesses dataset.
pub async fn check_nyc_registry(
    client: &Client,
    endpoint: &str,
    business_name: &str,
) -> Result<ProbeResult<NycData>> {
    let filter = format!("business_name like '{}'", business_name.replace('\'', "''"));
    let rows: Vec<NycRow> = client
        .get(endpoint)
        .query(&[
            ("$select", "business_name,legal_business_name,facility_address"),
            ("$where", filter.as_str()),
            ("$limit", "1"),
        ])
        .send()
        .await
        .context("NYC Open Data request failed")?
        .error_for_status()?
        .json()
        .await
        .context("malformed NYC Open Data response")?;

    Ok(score_nyc(rows.into_iter().next()))
}

fn score_nyc(row: Option<NycRow>) -> ProbeResult<NycData> {
    match row {
        Some(row) => ProbeResult::new(
            90,
            "Verified NYC registered business",
            NycData {
                is_registered: true,
                legal_name: row.legal_business_name.or(row.business_name),
                address: row.facility_address,
                is_in_nyc: Some(true),
            },
        ),
        None => ProbeResult::new(40, "Business not found in NYC registry", NycData::default()),
    }
}

pub fn nyc_unverified() -> ProbeResult<NycData> {
    ProbeResult::new(
        50,
        "Unable to verify NYC business registration",
        NycData::default(),
    )
}
