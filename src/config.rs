use crate::api::endpoints::{Region, TIER_LIST_BASE};
use crate::error::AppError;
use crate::rate_limit::DEFAULT_INTERVAL;
use std::env;
use std::path::PathBuf;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct Config {
    /// Absent keys are allowed; the collector then reports itself as not configured.
    pub api_key: Option<String>,
    pub region: Region,
    pub cache_dir: PathBuf,
    pub throttle: Duration,
    pub http_timeout: Duration,
    pub tier_list_base: String,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        dotenvy::dotenv().ok();

        let api_key = env::var("RIOT_API_KEY")
            .ok()
            .map(|key| key.trim().to_string())
            .filter(|key| !key.is_empty());

        let region = match env::var("RIOT_REGION") {
            Ok(value) => value.parse()?,
            Err(_) => Region::default(),
        };

        let cache_dir = env::var("LEAGUE_BUILDS_CACHE_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| default_data_dir());

        let throttle = match env::var("LEAGUE_BUILDS_THROTTLE_MS") {
            Ok(value) => Duration::from_millis(parse_number("LEAGUE_BUILDS_THROTTLE_MS", &value)?),
            Err(_) => DEFAULT_INTERVAL,
        };

        let http_timeout = match env::var("LEAGUE_BUILDS_HTTP_TIMEOUT_SECS") {
            Ok(value) => Duration::from_secs(parse_number("LEAGUE_BUILDS_HTTP_TIMEOUT_SECS", &value)?),
            Err(_) => Duration::from_secs(10),
        };

        let tier_list_base =
            env::var("LEAGUE_BUILDS_TIERLIST_URL").unwrap_or_else(|_| TIER_LIST_BASE.to_string());

        Ok(Config {
            api_key,
            region,
            cache_dir,
            throttle,
            http_timeout,
            tier_list_base,
        })
    }
}

pub fn default_data_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".league_builds")
}

fn parse_number(name: &str, value: &str) -> Result<u64, AppError> {
    value
        .trim()
        .parse()
        .map_err(|_| AppError::Config(format!("{} must be a whole number, got {:?}", name, value)))
}
