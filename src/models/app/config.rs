use std::env;
use std::net::SocketAddr;
use std::time::Duration;
use thiserror::Error;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3043";
const DEFAULT_PROBE_TIMEOUT_MS: u64 = 6_000;
const DEFAULT_REQUEST_DEADLINE_MS: u64 = 10_000;
const DEFAULT_REVIEW_LOCATION: &str = "New York City";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {key}: {value}")]
    Invalid { key: &'static str, value: String },
}

/// Optional credentials for the keyed upstreams. A missing key degrades the
/// matching probe to its neutral default.
#[derive(Debug, Clone, Default)]
pub struct ApiKeys {
    pub pagespeed: Option<String>,
    pub yelp: Option<String>,
    pub serp: Option<String>,
    pub safe_browsing: Option<String>,
}

/// Base URLs of every third-party source the probes talk to.
#[derive(Debug, Clone)]
pub struct Endpoints {
    pub pagespeed: String,
    pub nominatim: String,
    pub opencorporates: String,
    pub nyc_open_data: String,
    pub yelp: String,
    pub serpapi: String,
    pub clearbit_autocomplete: String,
    pub clearbit_logo: String,
    pub safe_browsing: String,
    pub domainsdb: String,
    pub instagram: String,
    pub tiktok: String,
    pub facebook: String,
    pub linkedin: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            pagespeed: "https://www.googleapis.com/pagespeedonline/v5/runPagespeed".to_string(),
            nominatim: "https://nominatim.openstreetmap.org/search".to_string(),
            opencorporates: "https://api.opencorporates.com/v0.4/companies/search".to_string(),
            nyc_open_data: "https://data.cityofnewyork.us/resource/22ht-gcyh.json".to_string(),
            yelp: "https://api.yelp.com/v3/businesses/search".to_string(),
            serpapi: "https://serpapi.com/search.json".to_string(),
            clearbit_autocomplete: "https://autocomplete.clearbit.com/v1/companies/suggest"
                .to_string(),
            clearbit_logo: "https://logo.clearbit.com".to_string(),
            safe_browsing: "https://safebrowsing.googleapis.com/v4/threatMatches:find".to_string(),
            domainsdb: "https://api.domainsdb.info/v1/domains/search".to_string(),
            instagram: "https://www.instagram.com".to_string(),
            tiktok: "https://www.tiktok.com".to_string(),
            facebook: "https://www.facebook.com".to_string(),
            linkedin: "https://www.linkedin.com/company".to_string(),
        }
    }
}

impl Endpoints {
    /// Points every upstream at one local server, one path prefix per source.
    #[cfg(test)]
    pub fn rooted_at(base: &str) -> Self {
        let at = |path: &str| format!("{}/{}", base.trim_end_matches('/'), path);
        Self {
            pagespeed: at("pagespeed"),
            nominatim: at("nominatim"),
            opencorporates: at("opencorporates"),
            nyc_open_data: at("nyc"),
            yelp: at("yelp"),
            serpapi: at("serpapi"),
            clearbit_autocomplete: at("clearbit/suggest"),
            clearbit_logo: at("clearbit/logo"),
            safe_browsing: at("safebrowsing"),
            domainsdb: at("domainsdb"),
            instagram: at("instagram"),
            tiktok: at("tiktok"),
            facebook: at("facebook"),
            linkedin: at("linkedin"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub bind_addr: SocketAddr,
    pub keys: ApiKeys,
    pub endpoints: Endpoints,
    pub probe_timeout: Duration,
    pub request_deadline: Duration,
    pub review_location: String,
    pub log_level: String,
    pub log4rs_config: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([0, 0, 0, 0], 3043)),
            keys: ApiKeys::default(),
            endpoints: Endpoints::default(),
            probe_timeout: Duration::from_millis(DEFAULT_PROBE_TIMEOUT_MS),
            request_deadline: Duration::from_millis(DEFAULT_REQUEST_DEADLINE_MS),
            review_location: DEFAULT_REVIEW_LOCATION.to_string(),
            log_level: "info".to_string(),
            log4rs_config: None,
        }
    }
}

impl Config {
    /// Reads the process environment. Call `dotenv` first to pick up a `.env`.
    pub fn from_env() -> Result<Self, ConfigError> {
        let bind = env_or("BIND_ADDR", DEFAULT_BIND_ADDR);
        let bind_addr = bind.parse().map_err(|_| ConfigError::Invalid {
            key: "BIND_ADDR",
            value: bind.clone(),
        })?;

        Ok(Self {
            bind_addr,
            keys: ApiKeys {
                pagespeed: optional("PAGESPEED_API_KEY"),
                yelp: optional("YELP_API_KEY"),
                serp: optional("SERP_API_KEY"),
                safe_browsing: optional("GOOGLE_SAFE_BROWSING_API_KEY"),
            },
            endpoints: Endpoints::default(),
            probe_timeout: millis("PROBE_TIMEOUT_MS", DEFAULT_PROBE_TIMEOUT_MS)?,
            request_deadline: millis("REQUEST_DEADLINE_MS", DEFAULT_REQUEST_DEADLINE_MS)?,
            review_location: env_or("REVIEW_LOCATION", DEFAULT_REVIEW_LOCATION),
            log_level: env_or("LOG_LEVEL", "info"),
            log4rs_config: optional("LOG4RS_CONFIG"),
        })
    }
}

fn optional(key: &str) -> Option<String> {
    env::var(key).ok().filter(|v| !v.trim().is_empty())
}

fn env_or(key: &str, default: &str) -> String {
    optional(key).unwrap_or_else(|| default.to_string())
}

fn millis(key: &'static str, default: u64) -> Result<Duration, ConfigError> {
    match optional(key) {
        None => Ok(Duration::from_millis(default)),
        Some(raw) => raw
            .parse::<u64>()
            .map(Duration::from_millis)
            .map_err(|_| ConfigError::Invalid { key, value: raw }),
    }
}
