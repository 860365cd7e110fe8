pub mod html_utils;
pub mod http_utils;
pub mod log_utils;

pub use html_utils::{escape_html, looks_like_html, strip_tags, visible_text};
pub use http_utils::{fetch_page, is_https, AUDIT_USER_AGENT, BOT_USER_AGENT, BROWSER_USER_AGENT};
pub use log_utils::init_logging;
