pub mod config;
pub mod ctx;
pub mod ops;

use ctx::LogCtx;

pub fn scrape() -> LogCtx<ops::scrape::Scrape> { LogCtx::new(config::LogFormat::from_env()) }
