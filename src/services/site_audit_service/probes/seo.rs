use crate::models::audit::{ProbeResult, SeoData};
use regex::Regex;
use std::sync::LazyLock;

struct TagCheck {
    pattern: Regex,
    points: u32,
    missing: &'static str,
}

fn check(pattern: &str, points: u32, missing: &'static str) -> TagCheck {
    TagCheck {
        pattern: Regex::new(pattern).expect("seo regex"),
        points,
        missing,
    }
}

static CHECKS: LazyLock<Vec<TagCheck>> = LazyLock::new(|| {
    vec![
        check(r"(?i)<title>([^<]+)</title>", 20, "missing title tag"),
        check(r#"(?i)name=["']description["']"#, 20, "missing meta description"),
        check(r"(?i)<h1[^>]*>([^<]+)</h1>", 15, "missing H1 heading"),
        check(r"(?i)application/ld\+json", 15, "no structured data"),
        check(r#"(?i)property=["']og:"#, 15, "no Open Graph tags"),
        check(r#"(?i)rel=["']canonical["']"#, 15, "no canonical URL"),
    ]
});

/// Scores on-page SEO by tag presence: title and meta description 20 each,
/// H1, structured data, Open Graph and canonical 15 each.
pub fn analyze_seo(html: &str) -> ProbeResult<SeoData> {
    let mut score = 0;
    let mut missing = Vec::new();
    for check in CHECKS.iter() {
        if check.pattern.is_match(html) {
            score += check.points;
        } else {
            missing.push(check.missing.to_string());
        }
    }

    let feedback = if score >= 80 {
        "Strong SEO foundation".to_string()
    } else if score >= 60 {
        format!("Good SEO, but {}", missing.iter().take(2).cloned().collect::<Vec<_>>().join(", "))
    } else {
        format!(
            "Needs improvement: {}",
            missing.iter().take(3).cloned().collect::<Vec<_>>().join(", ")
        )
    };

    ProbeResult::new(score, feedback, SeoData { missing })
}
