use regex::Regex;
use std::sync::LazyLock;

static TAG: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]*>").expect("tag regex"));
static SCRIPT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<script[^>]*>.*?</script>").expect("script regex"));
static STYLE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<style[^>]*>.*?</style>").expect("style regex"));
static WHITESPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("whitespace regex"));

/// Drops every tag, keeping script and style bodies. Used for the raw
/// content-length heuristic.
pub fn strip_tags(html: &str) -> String {
    TAG.replace_all(html, "").into_owned()
}

/// Visible text with scripts, styles and tags removed and whitespace collapsed.
pub fn visible_text(html: &str) -> String {
    let without_scripts = SCRIPT.replace_all(html, "");
    let without_styles = STYLE.replace_all(&without_scripts, "");
    let spaced = TAG.replace_all(&without_styles, " ");
    WHITESPACE.replace_all(&spaced, " ").trim().to_string()
}

pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// True when a body that should be JSON is really an HTML page.
pub fn looks_like_html(body: &str) -> bool {
    body.trim_start().starts_with('<')
}
