use crate::models::app::Endpoints;
use crate::models::audit::{PlatformAnalysis, PlatformMetrics};
use crate::utils::BROWSER_USER_AGENT;
use anyhow::{Context, Result};
use reqwest::header::USER_AGENT;
use reqwest::Client;

const CONTENT_RICH_BYTES: usize = 10_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Instagram,
    TikTok,
    Facebook,
    LinkedIn,
}

impl Platform {
    pub fn name(self) -> &'static str {
        match self {
            Platform::Instagram => "Instagram",
            Platform::TikTok => "TikTok",
            Platform::Facebook => "Facebook",
            Platform::LinkedIn => "LinkedIn",
        }
    }

    pub fn profile_url(self, endpoints: &Endpoints, handle: &str) -> String {
        match self {
            Platform::Instagram => format!("{}/{}/", endpoints.instagram, handle),
            Platform::TikTok => format!("{}/@{}", endpoints.tiktok, handle),
            Platform::Facebook => format!("{}/{}", endpoints.facebook, handle),
            Platform::LinkedIn => format!("{}/{}", endpoints.linkedin, handle),
        }
    }

    fn display_handle(self, handle: &str) -> String {
        match self {
            Platform::Instagram | Platform::TikTok => format!("@{}", handle),
            Platform::Facebook | Platform::LinkedIn => handle.to_string(),
        }
    }

    /// Keyword sniffing over the public profile page.
    pub fn analyze(self, handle: &str, html: &str) -> PlatformAnalysis {
        let (score, metrics, feedback) = match self {
            Platform::Instagram => {
                let has_profile = html.contains("\"username\"");
                let has_content = html.contains("\"edge_owner_to_timeline_media\"");
                let is_active = html.contains("\"edge_followed_by\"");
                let score = points(has_profile, 30) + points(has_content, 40) + points(is_active, 30);
                let metrics = PlatformMetrics {
                    brand_consistency: Some(if has_profile { 75 } else { 50 }),
                    posts_per_week: Some(if has_content { 3 } else { 0 }),
                    ..Default::default()
                };
                let feedback = if has_profile {
                    "Profile found with content"
                } else {
                    "Profile may be private or inactive"
                };
                (score, metrics, feedback.to_string())
            }
            Platform::TikTok => {
                let has_profile = html.contains("\"uniqueId\"") || html.contains("user-page");
                let has_videos = html.contains("\"videoCount\"");
                let metrics = PlatformMetrics {
                    brand_consistency: Some(if has_profile { 70 } else { 40 }),
                    ..Default::default()
                };
                let feedback = if has_profile {
                    "Active TikTok presence detected"
                } else {
                    "Profile not found or private"
                };
                (
                    points(has_profile, 50) + points(has_videos, 50),
                    metrics,
                    feedback.to_string(),
                )
            }
            Platform::Facebook | Platform::LinkedIn => {
                let has_profile = html.contains("og:title") || html.contains("og:description");
                let has_content = html.len() > CONTENT_RICH_BYTES;
                let metrics = PlatformMetrics {
                    brand_consistency: Some(if has_profile { 80 } else { 50 }),
                    ..Default::default()
                };
                let feedback = if has_profile {
                    format!("{} page found", self.name())
                } else {
                    "Page not accessible".to_string()
                };
                (points(has_profile, 60) + points(has_content, 40), metrics, feedback)
            }
        };

        PlatformAnalysis {
            platform: self.name().to_string(),
            handle: self.display_handle(handle),
            score,
            metrics,
            feedback,
        }
    }

    /// Row used when the profile could not be fetched.
    pub fn unavailable(self, handle: &str) -> PlatformAnalysis {
        let feedback = match self {
            Platform::Instagram | Platform::TikTok => "Unable to analyze profile",
            Platform::Facebook | Platform::LinkedIn => "Unable to analyze page",
        };
        PlatformAnalysis {
            platform: self.name().to_string(),
            handle: self.display_handle(handle),
            score: 0,
            metrics: PlatformMetrics::default(),
            feedback: feedback.to_string(),
        }
    }

    pub async fn fetch_and_analyze(
        self,
        client: &Client,
        endpoints: &Endpoints,
        handle: &str,
    ) -> Result<PlatformAnalysis> {
        let url = self.profile_url(endpoints, handle);
        let html = client
            .get(&url)
            .header(USER_AGENT, BROWSER_USER_AGENT)
            .send()
            .await
            .with_context(|| format!("failed to fetch {} profile {}", self.name(), url))?
            .text()
            .await?;
        Ok(self.analyze(handle, &html))
    }
}

fn points(present: bool, value: u8) -> u8 {
    if present {
        value
    } else {
        0
    }
}
