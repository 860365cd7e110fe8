// src/models/mod.rs

pub mod api;
pub mod app;
pub mod audit;
pub mod comprehensive;
pub mod crawl;
pub mod pagespeed;
pub mod score;

pub use api::{BusinessQuery, Mode, ParamsCheck, ParamsUrl, SocialHandles};
pub use app::{AppState, Config};
