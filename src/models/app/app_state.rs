use crate::models::app::config::Config;
use reqwest::Client;

const USER_AGENT: &str = "DominionMarketing/1.0";

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub http: Client,
}

impl AppState {
    pub fn new(config: Config) -> Result<Self, reqwest::Error> {
        let http = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(config.probe_timeout)
            .build()?;
        Ok(Self { config, http })
    }
}
