// src/services/report_service/mod.rs

use crate::models::api::ReportRequest;
use crate::utils::escape_html;
use chrono::{DateTime, Utc};

const STYLE: &str = r#"
    * { margin: 0; padding: 0; box-sizing: border-box; }
    body { font-family: 'Segoe UI', Tahoma, Geneva, Verdana, sans-serif; background: linear-gradient(135deg, #0B1221 0%, #1a2332 100%); color: #fff; padding: 40px 20px; }
    .container { max-width: 800px; margin: 0 auto; background: rgba(255, 255, 255, 0.05); border: 1px solid rgba(255, 255, 255, 0.1); border-radius: 16px; padding: 40px; }
    .header { text-align: center; border-bottom: 2px solid #FFD700; padding-bottom: 20px; margin-bottom: 30px; }
    .logo { font-size: 28px; font-weight: bold; color: #FFD700; margin-bottom: 10px; }
    .date, .score-label, .metric-name, .footer { color: #9ca3af; }
    .business-name { font-size: 24px; font-weight: 600; margin-bottom: 8px; }
    .website { color: #60a5fa; text-decoration: none; }
    .score-section { text-align: center; margin: 40px 0; padding: 30px; background: rgba(255, 215, 0, 0.1); border-radius: 12px; border: 2px solid #FFD700; }
    .total-score { font-size: 72px; font-weight: bold; color: #FFD700; }
    .metrics { display: grid; grid-template-columns: repeat(2, 1fr); gap: 20px; margin: 30px 0; }
    .metric { background: rgba(255, 255, 255, 0.05); padding: 20px; border-radius: 8px; }
    .metric-score { font-size: 32px; font-weight: bold; color: #FFD700; }
    .insights-title { font-size: 20px; font-weight: 600; margin-bottom: 16px; color: #FFD700; }
    .insight { background: rgba(255, 255, 255, 0.05); padding: 16px; border-radius: 8px; margin-bottom: 12px; border-left: 3px solid #FFD700; }
    .footer { margin-top: 40px; padding-top: 20px; border-top: 1px solid rgba(255, 255, 255, 0.1); text-align: center; font-size: 14px; }
    @media print { body { background: #0B1221; } }
"#;

/// Download name for a report generated at `now`.
pub fn report_filename(now: DateTime<Utc>) -> String {
    format!("presence-report-{}.html", now.timestamp_millis())
}

fn metric(name: &str, score: f64) -> String {
    format!(
        r#"<div class="metric"><div class="metric-name">{}</div><div class="metric-score">{}</div></div>"#,
        name, score
    )
}

/// Renders the standalone HTML report. Every caller-supplied string is escaped.
pub fn render_report(report: &ReportRequest, now: DateTime<Utc>) -> String {
    let business_name = escape_html(&report.business_name);
    let website_url = escape_html(&report.website_url);
    let insights: String = report
        .insights
        .iter()
        .map(|insight| format!(r#"<div class="insight">{}</div>"#, escape_html(insight)))
        .collect();
    let metrics = [
        metric("Performance", report.performance),
        metric("SEO", report.seo),
        metric("Tech Depth", report.tech_depth),
        metric("Visibility", report.visibility),
    ]
    .join("\n");

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8">
  <meta name="viewport" content="width=device-width, initial-scale=1.0">
  <title>Online Presence Report - {business_name}</title>
  <style>{STYLE}</style>
</head>
<body>
  <div class="container">
    <div class="header">
      <div class="logo">Dominion Marketing</div>
      <div class="date">{date}</div>
    </div>
    <div class="business-info">
      <div class="business-name">{business_name}</div>
      <a href="{website_url}" class="website" target="_blank">{website_url}</a>
    </div>
    <div class="score-section">
      <div class="total-score">{total}</div>
      <div class="score-label">AI Presence Score</div>
    </div>
    <div class="metrics">
{metrics}
    </div>
    <div class="insights">
      <div class="insights-title">Recommendations</div>
      {insights}
    </div>
    <div class="footer">
      <p>This report was generated by Dominion Marketing's AI Presence Checker.</p>
      <p>For a comprehensive audit and custom growth plan, contact us today.</p>
    </div>
  </div>
</body>
</html>
"#,
        date = now.format("%B %-d, %Y"),
        total = report.total_score,
    )
}
