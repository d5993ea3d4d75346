use crate::error::Result;
use std::time::Duration;
use tracing::instrument;

use super::client::build_agent;
use super::ddragon::fetch_json;
use super::endpoints;
use super::models::TierListDto;
use super::TierListSource;

/// Client for the tier list aggregation API. Public, no key.
pub struct TierListClient {
    agent: ureq::Agent,
    base_url: String,
}

impl TierListClient {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Self {
        TierListClient {
            agent: build_agent(timeout),
            base_url: base_url.into(),
        }
    }
}

impl TierListSource for TierListClient {
    #[instrument(skip(self), level = "debug")]
    fn tier_list(&self, role: Option<&str>) -> Result<TierListDto> {
        fetch_json(&self.agent, &endpoints::tier_list_url(&self.base_url, role))
    }
}
