use crate::models::audit::{ProbeResult, SocialMediaData};
use regex::Regex;
use std::sync::LazyLock;

static INSTAGRAM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)instagram\.com/([A-Za-z0-9_.-]+)").expect("instagram regex"));
static FACEBOOK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)facebook\.com/([A-Za-z0-9_.-]+)").expect("facebook regex"));
static TWITTER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(?:twitter\.com|x\.com)/([A-Za-z0-9_.-]+)").expect("twitter regex")
});
static YOUTUBE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)youtube\.com/(?:c/|@|channel/)?([A-Za-z0-9_.-]+)").expect("youtube regex")
});

fn first_link(pattern: &Regex, html: &str) -> Option<String> {
    pattern.find(html).map(|m| m.as_str().to_string())
}

/// Scores the homepage's links to the major social networks, 25 points each.
pub fn analyze_social_links(html: &str) -> ProbeResult<SocialMediaData> {
    let data = SocialMediaData {
        instagram: first_link(&INSTAGRAM, html),
        facebook: first_link(&FACEBOOK, html),
        twitter: first_link(&TWITTER, html),
        youtube: first_link(&YOUTUBE, html),
        has_social_presence: false,
    };
    let found = [&data.instagram, &data.facebook, &data.twitter, &data.youtube]
        .iter()
        .filter(|link| link.is_some())
        .count() as u32;
    let score = found * 25;

    let feedback = match score {
        0 => "No social media links detected. Create or link your social profiles (Instagram, Facebook, etc.) to improve online presence.",
        1..=49 => "Some social presence detected, but engagement appears limited. Post regularly and encourage reviews or shares.",
        50..=79 => "Your social profiles are connected. Increase posting frequency and add branded visuals for higher engagement.",
        _ => "Strong social presence detected. Maintain consistency and explore collaborations to expand reach.",
    };

    ProbeResult::new(
        score,
        feedback,
        SocialMediaData {
            has_social_presence: found > 0,
            ..data
        },
    )
}
