use crate::models::comprehensive::{DomainAge, SafeBrowsingStatus, YelpBusiness};
use crate::models::pagespeed::Categories;
use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

const SECONDS_PER_YEAR: f64 = 60.0 * 60.0 * 24.0 * 365.0;

fn clamp_score(score: f64) -> u8 {
    score.round().clamp(0.0, 100.0) as u8
}

/// PageSpeed SEO on the 0-100 scale, docked 10 for very slow pages (<30)
/// and 5 for slow ones (<60). Zero without PageSpeed data.
pub fn on_page_seo_score(categories: Option<&Categories>) -> u8 {
    let Some(categories) = categories else {
        return 0;
    };
    let seo = Categories::raw(&categories.seo) * 100.0;
    let performance = Categories::raw(&categories.performance) * 100.0;
    let penalty = if performance < 30.0 {
        10.0
    } else if performance < 60.0 {
        5.0
    } else {
        0.0
    };
    clamp_score(seo - penalty)
}

fn strip_common_tld(domain: &str) -> &str {
    [".com", ".org", ".net"]
        .iter()
        .find_map(|tld| domain.strip_suffix(tld))
        .unwrap_or(domain)
}

/// How consistently the brand shows up: domain match (up to 50), a
/// Clearbit logo (30) and name similarity (up to 20).
pub fn brand_clarity_score(
    query_domain: &str,
    clearbit_domain: Option<&str>,
    has_logo: bool,
    business_name: &str,
    clearbit_name: Option<&str>,
) -> u8 {
    let domain_points = match clearbit_domain {
        Some(domain) if domain == query_domain => 50.0,
        Some(domain) if strip_common_tld(domain) == strip_common_tld(query_domain) => 30.0,
        _ => 10.0,
    };
    let logo_points = if has_logo { 30.0 } else { 0.0 };
    let name_points = match clearbit_name {
        Some(name) => {
            let similarity = strsim::normalized_levenshtein(
                &business_name.to_lowercase(),
                &name.to_lowercase(),
            );
            (similarity * 20.0).round()
        }
        None => 10.0,
    };
    clamp_score(domain_points + logo_points + name_points)
}

/// Parses the creation stamps domainsdb returns (RFC 3339, naive
/// date-time with fractional seconds, or a bare date).
pub fn parse_created(created: &str) -> Option<DateTime<Utc>> {
    if let Ok(stamp) = DateTime::parse_from_rfc3339(created) {
        return Some(stamp.with_timezone(&Utc));
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(created, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(naive.and_utc());
    }
    NaiveDate::parse_from_str(created, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

fn domain_age_score(age_years: f64) -> u8 {
    match age_years {
        age if age >= 10.0 => 90,
        age if age >= 5.0 => 70,
        age if age >= 2.0 => 50,
        age if age >= 1.0 => 30,
        _ => 10,
    }
}

/// Yelp standing when listed, otherwise domain age, otherwise 10.
pub fn local_seo_score(
    yelp: Option<&YelpBusiness>,
    domain_age: Option<&DomainAge>,
    now: DateTime<Utc>,
) -> u8 {
    if let Some(yelp) = yelp {
        let rating = yelp.rating / 5.0 * 20.0;
        let reviews = yelp.review_count.min(200) as f64 / 200.0 * 40.0;
        let categories = if yelp.categories.is_empty() { 0.0 } else { 20.0 };
        return clamp_score(rating + reviews + categories + 20.0);
    }

    domain_age
        .and_then(|age| age.created.as_deref())
        .and_then(parse_created)
        .map(|created| {
            let age_years = (now - created).num_seconds() as f64 / SECONDS_PER_YEAR;
            domain_age_score(age_years)
        })
        .unwrap_or(10)
}

pub fn safety_score(status: SafeBrowsingStatus, has_https: bool) -> u8 {
    match status {
        SafeBrowsingStatus::ThreatFound => 0,
        _ if has_https => 100,
        _ => 60,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::comprehensive::YelpCategory;
    use crate::models::pagespeed::Category;
    use chrono::TimeZone;

    fn categories(performance: f64, seo: f64) -> Categories {
        Categories {
            performance: Some(Category {
                score: Some(performance),
            }),
            seo: Some(Category { score: Some(seo) }),
            ..Default::default()
        }
    }

    #[test]
    fn on_page_seo_docks_slow_pages() {
        assert_eq!(on_page_seo_score(None), 0);
        assert_eq!(on_page_seo_score(Some(&categories(0.9, 0.92))), 92);
        assert_eq!(on_page_seo_score(Some(&categories(0.45, 0.92))), 87);
        assert_eq!(on_page_seo_score(Some(&categories(0.2, 0.05))), 0);
    }

    #[test]
    fn brand_clarity_rewards_matching_identity() {
        assert_eq!(
            brand_clarity_score(
                "joespizzanyc.com",
                Some("joespizzanyc.com"),
                true,
                "Joe's Pizza",
                Some("JOE'S PIZZA")
            ),
            100
        );
        assert_eq!(
            brand_clarity_score("joespizza.com", Some("joespizza.net"), false, "Joe's", None),
            40
        );
        assert_eq!(brand_clarity_score("joespizza.com", None, false, "Joe's", None), 20);
    }

    #[test]
    fn local_seo_prefers_yelp() {
        let yelp = YelpBusiness {
            name: Some("Joe's Pizza".to_string()),
            rating: 4.5,
            review_count: 87,
            categories: vec![YelpCategory {
                title: "Pizza".to_string(),
            }],
        };
        let now = Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap();
        // 18 + 17.4 + 20 + 20
        assert_eq!(local_seo_score(Some(&yelp), None, now), 75);
    }

    #[test]
    fn local_seo_falls_back_to_domain_age() {
        let now = Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap();
        let age = |created: &str| DomainAge {
            created: Some(created.to_string()),
            updated: None,
            expires: None,
        };
        assert_eq!(local_seo_score(None, Some(&age("2012-03-04T10:00:00.123456")), now), 90);
        assert_eq!(local_seo_score(None, Some(&age("2019-06-01")), now), 70);
        assert_eq!(local_seo_score(None, Some(&age("2025-06-01T00:00:00Z")), now), 10);
        assert_eq!(local_seo_score(None, Some(&age("not a date")), now), 10);
        assert_eq!(local_seo_score(None, None, now), 10);
    }

    #[test]
    fn safety_penalizes_threats_and_plain_http() {
        assert_eq!(safety_score(SafeBrowsingStatus::ThreatFound, true), 0);
        assert_eq!(safety_score(SafeBrowsingStatus::Safe, true), 100);
        assert_eq!(safety_score(SafeBrowsingStatus::Unknown, false), 60);
    }
}
